use crate::Matrix;
use crate::random::Rng;
use num_complex::Complex64;
use proptest::prelude::*;

/// A matrix with entries in `[-1, 1)` drawn from a seeded generator.
fn sample(rows: usize, cols: usize, rng: &mut Rng) -> Matrix<f64> {
    Matrix::<f64>::random(rows, cols, rng)
        .unwrap()
        .map(|x| 2.0 * x - 1.0)
}

fn close(a: &Matrix<f64>, b: &Matrix<f64>, tol: f64) -> bool {
    a.shape() == b.shape() && a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= tol)
}

proptest! {
    /// Addition and subtraction are element-wise.
    #[test]
    fn prop_add_subtract_elementwise(
        seed in any::<u64>(),
        rows in 1_usize..6,
        cols in 1_usize..6
    ) {
        let mut rng = Rng::new(seed);
        let a = sample(rows, cols, &mut rng);
        let b = sample(rows, cols, &mut rng);
        let sum = a.add(&b).unwrap();
        let diff = a.subtract(&b).unwrap();
        for i in 0..rows {
            for j in 0..cols {
                let (x, y) = (a.get(i, j).unwrap(), b.get(i, j).unwrap());
                prop_assert_eq!(sum.get(i, j).unwrap(), x + y);
                prop_assert_eq!(diff.get(i, j).unwrap(), x - y);
            }
        }
    }

    /// Negation is an involution.
    #[test]
    fn prop_negate_involution(seed in any::<u64>(), rows in 1_usize..6, cols in 1_usize..6) {
        let a = sample(rows, cols, &mut Rng::new(seed));
        prop_assert_eq!(a.negate().negate(), a);
    }

    /// `(A * B) * C == A * (B * C)` up to rounding.
    #[test]
    fn prop_multiply_associative(
        seed in any::<u64>(),
        m in 1_usize..5,
        k in 1_usize..5,
        n in 1_usize..5,
        p in 1_usize..5
    ) {
        let mut rng = Rng::new(seed);
        let a = sample(m, k, &mut rng);
        let b = sample(k, n, &mut rng);
        let c = sample(n, p, &mut rng);
        let left = a.multiply(&b).unwrap().multiply(&c).unwrap();
        let right = a.multiply(&b.multiply(&c).unwrap()).unwrap();
        prop_assert!(close(&left, &right, 1e-12));
    }

    /// The fused transpose products agree with an explicit transpose.
    #[test]
    fn prop_transpose_fused_products(
        seed in any::<u64>(),
        m in 1_usize..5,
        k in 1_usize..5,
        n in 1_usize..5
    ) {
        let mut rng = Rng::new(seed);
        let a = sample(m, k, &mut rng);
        let b = sample(n, k, &mut rng);
        let fused = a.transpose_and_multiply(&b).unwrap();
        let explicit = a.multiply(&b.transpose()).unwrap();
        prop_assert!(close(&fused, &explicit, 1e-12));

        let c = sample(m, n, &mut rng);
        let fused = a.transpose_this_and_multiply(&c).unwrap();
        let explicit = a.transpose().multiply(&c).unwrap();
        prop_assert!(close(&fused, &explicit, 1e-12));
    }

    /// Mixed-product law: `(A ⊗ B)(C ⊗ D) = (AC) ⊗ (BD)`.
    #[test]
    fn prop_kronecker_mixed_product(
        seed in any::<u64>(),
        dims in prop::array::uniform6(1_usize..4)
    ) {
        let [ar, ac, br, bc, cc, dc] = dims;
        let mut rng = Rng::new(seed);
        let a = sample(ar, ac, &mut rng);
        let b = sample(br, bc, &mut rng);
        let c = sample(ac, cc, &mut rng);
        let d = sample(bc, dc, &mut rng);
        let left = a
            .kronecker_product(&b)
            .unwrap()
            .multiply(&c.kronecker_product(&d).unwrap())
            .unwrap();
        let right = a
            .multiply(&c)
            .unwrap()
            .kronecker_product(&b.multiply(&d).unwrap())
            .unwrap();
        prop_assert!(close(&left, &right, 1e-12));
    }

    /// After normalization every non-zero column has unit p-norm.
    #[test]
    fn prop_normalize_columns_unit(
        seed in any::<u64>(),
        rows in 1_usize..6,
        cols in 1_usize..6,
        p in prop::sample::select(vec![1.0_f64, 2.0])
    ) {
        let a = sample(rows, cols, &mut Rng::new(seed));
        let before = a.column_norms(p).unwrap();
        let after = a.normalize_columns(p).unwrap().column_norms(p).unwrap();
        for (b, n) in before.iter().zip(&after) {
            if *b > 0.0 {
                prop_assert!((n - 1.0).abs() <= 1e-12, "norm {} after normalization", n);
            }
        }
    }

    /// Writing the product over its own left operand gives the plain product.
    #[test]
    fn prop_multiply_in_place_matches(seed in any::<u64>(), rows in 1_usize..6, n in 1_usize..6) {
        let mut rng = Rng::new(seed);
        let a = sample(rows, n, &mut rng);
        let b = sample(n, n, &mut rng);
        let expected = a.multiply(&b).unwrap();
        let mut aliased = a.clone();
        aliased.multiply_in_place(&b).unwrap();
        prop_assert_eq!(aliased, expected);
    }

    /// Writing `A * B` over the right operand matches the into-result form.
    #[test]
    fn prop_multiply_into_right_matches(seed in any::<u64>(), n in 1_usize..6, cols in 1_usize..6) {
        let mut rng = Rng::new(seed);
        let a = sample(n, n, &mut rng);
        let b = sample(n, cols, &mut rng);
        let mut expected = Matrix::zeros(n, cols).unwrap();
        a.multiply_into(&b, &mut expected).unwrap();
        let mut aliased = b.clone();
        a.multiply_into_right(&mut aliased).unwrap();
        prop_assert_eq!(aliased, expected);
    }

    /// The fused transpose products overwrite their left operand exactly as
    /// the into-result forms would.
    #[test]
    fn prop_transpose_fused_in_place_matches(
        seed in any::<u64>(),
        rows in 1_usize..6,
        n in 1_usize..6
    ) {
        let mut rng = Rng::new(seed);
        let a = sample(rows, n, &mut rng);
        let b = sample(n, n, &mut rng);
        let mut expected = Matrix::zeros(rows, n).unwrap();
        a.transpose_and_multiply_into(&b, &mut expected).unwrap();
        let mut aliased = a.clone();
        aliased.transpose_and_multiply_in_place(&b).unwrap();
        prop_assert_eq!(aliased, expected);

        let s = sample(n, n, &mut rng);
        let mut expected = Matrix::zeros(n, n).unwrap();
        s.transpose_this_and_multiply_into(&b, &mut expected).unwrap();
        let mut aliased = s.clone();
        aliased.transpose_this_and_multiply_in_place(&b).unwrap();
        prop_assert_eq!(aliased, expected);
    }

    /// Subtraction and division written over the right operand match the
    /// into-result forms.
    #[test]
    fn prop_right_operand_elementwise_matches(
        seed in any::<u64>(),
        rows in 1_usize..6,
        cols in 1_usize..6
    ) {
        let mut rng = Rng::new(seed);
        let a = sample(rows, cols, &mut rng);
        let b = sample(rows, cols, &mut rng);

        let mut expected = Matrix::zeros(rows, cols).unwrap();
        a.subtract_into(&b, &mut expected).unwrap();
        let mut aliased = b.clone();
        a.subtract_into_right(&mut aliased).unwrap();
        prop_assert_eq!(aliased, expected);

        let mut expected = Matrix::zeros(rows, cols).unwrap();
        a.pointwise_divide_into(&b, &mut expected).unwrap();
        let mut aliased = b.clone();
        a.pointwise_divide_into_right(&mut aliased).unwrap();
        prop_assert_eq!(aliased, expected);
    }

    /// Writing `M * x` back into `x` gives the plain product.
    #[test]
    fn prop_multiply_vector_in_place_matches(seed in any::<u64>(), n in 1_usize..6) {
        let mut rng = Rng::new(seed);
        let m = sample(n, n, &mut rng);
        let x = sample(n, 1, &mut rng).column(0).unwrap();
        let expected = m.multiply_vector(&x).unwrap();
        let mut aliased = x.clone();
        m.multiply_vector_in_place(&mut aliased).unwrap();
        prop_assert_eq!(aliased, expected);
    }

    /// Complex scaling distributes over addition.
    #[test]
    fn prop_complex_scaling_distributes(
        seed in any::<u64>(),
        rows in 1_usize..5,
        cols in 1_usize..5,
        re in -2.0_f64..2.0,
        im in -2.0_f64..2.0
    ) {
        let mut rng = Rng::new(seed);
        let a = Matrix::<Complex64>::random(rows, cols, &mut rng).unwrap();
        let b = Matrix::<Complex64>::random(rows, cols, &mut rng).unwrap();
        let s = Complex64::new(re, im);
        let left = a.add(&b).unwrap().scalar_multiply(s);
        let right = a.scalar_multiply(s).add(&b.scalar_multiply(s)).unwrap();
        for (x, y) in left.iter().zip(right.iter()) {
            prop_assert!((x - y).norm() <= 1e-12);
        }
    }
}
