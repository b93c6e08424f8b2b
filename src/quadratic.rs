//! Real roots of quadratic equations.
//!
//! [`solve_quadratic`] returns the real solutions of `a·x² + b·x + c = 0`,
//! falling back to the linear equation `b·x + c = 0` when `a` is zero.
//!
//! # Cases
//!
//! | Input | Result |
//! |---|---|
//! | `a = 0`, `b ≠ 0` | `[-c / b]` |
//! | `a = 0`, `b = 0` | [`Error::DegenerateEquation`] |
//! | `a ≠ 0`, `D < 0` | `[]` |
//! | `a ≠ 0`, `D = 0` | `[-b / 2a, -b / 2a]` |
//! | `a ≠ 0`, `D > 0` | `[(-b - √D) / 2a, (-b + √D) / 2a]` |
//!
//! where `D = b² - 4ac`. A double root is reported twice to reflect its
//! multiplicity.
//!
//! # Examples
//!
//! ```rust
//! use hsmath::solve_quadratic;
//!
//! assert_eq!(solve_quadratic(1.0, 0.0, -4.0).unwrap(), vec![-2.0, 2.0]);
//! assert_eq!(solve_quadratic(1.0, -2.0, 1.0).unwrap(), vec![1.0, 1.0]);
//! assert!(solve_quadratic(1.0, 0.0, 1.0).unwrap().is_empty());
//! assert!(solve_quadratic(0.0, 0.0, 3.0).is_err());
//! ```

use num_traits::Float;

use crate::error::{Error, Result};

/// Computes the discriminant `b² - 4ac`.
///
/// ```rust
/// use hsmath::quadratic::discriminant;
///
/// assert_eq!(discriminant(1.0, 0.0, -4.0), 16.0);
/// assert_eq!(discriminant(1.0, 0.0, 1.0), -4.0);
/// ```
pub fn discriminant<T: Float>(a: T, b: T, c: T) -> T {
    let four = T::one() + T::one() + T::one() + T::one();
    b * b - four * a * c
}

/// Returns the real solutions of `a·x² + b·x + c = 0`.
///
/// The result holds zero, one or two values. Two distinct roots are ordered
/// as `(-b - √D) / 2a` then `(-b + √D) / 2a`.
///
/// # Errors
///
/// Returns [`Error::DegenerateEquation`] when both `a` and `b` are zero.
/// Every other input produces a (possibly empty) root list.
pub fn solve_quadratic<T: Float>(a: T, b: T, c: T) -> Result<Vec<T>> {
    if a == T::zero() {
        if b == T::zero() {
            log::trace!("solve_quadratic: a = b = 0, degenerate");
            return Err(Error::DegenerateEquation);
        }
        log::trace!("solve_quadratic: linear case");
        return Ok(vec![-c / b]);
    }

    let d = discriminant(a, b, c);
    let divisor = (T::one() + T::one()) * a;

    if d < T::zero() {
        log::trace!("solve_quadratic: negative discriminant, no real roots");
        Ok(Vec::new())
    } else if d == T::zero() {
        log::trace!("solve_quadratic: zero discriminant, double root");
        let root = -b / divisor;
        Ok(vec![root, root])
    } else {
        // D > 0 here; a NaN discriminant also lands here and yields NaN roots.
        log::trace!("solve_quadratic: positive discriminant, two roots");
        let s = d.sqrt();
        Ok(vec![(-b - s) / divisor, (-b + s) / divisor])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn residual(a: f64, b: f64, c: f64, x: f64) -> f64 {
        a * x * x + b * x + c
    }

    #[test]
    fn test_two_distinct_roots() {
        assert_eq!(solve_quadratic(1.0, 0.0, -4.0).unwrap(), vec![-2.0, 2.0]);
    }

    #[test]
    fn test_double_root_reported_twice() {
        assert_eq!(solve_quadratic(1.0, -2.0, 1.0).unwrap(), vec![1.0, 1.0]);
        assert_eq!(solve_quadratic(2.0, 4.0, 2.0).unwrap(), vec![-1.0, -1.0]);
    }

    #[test]
    fn test_negative_discriminant_is_empty_not_error() {
        let roots = solve_quadratic(1.0, 0.0, 1.0).unwrap();
        assert!(roots.is_empty());
    }

    #[test]
    fn test_linear_case_single_root() {
        let roots = solve_quadratic(0.0, 2.0, -6.0).unwrap();
        assert_eq!(roots, vec![3.0]);
    }

    #[test]
    fn test_linear_case_with_zero_constant() {
        let roots = solve_quadratic(0.0, 5.0, 0.0).unwrap();
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0], 0.0);
    }

    #[test]
    fn test_degenerate_equation_fails() {
        for c in [0.0, 1.0, -7.5] {
            let err = solve_quadratic(0.0, 0.0, c).unwrap_err();
            assert!(matches!(err, Error::DegenerateEquation));
        }
    }

    #[test]
    fn test_negative_leading_coefficient_keeps_formula_order() {
        // -x² + 4 = 0: (-b - s) / 2a = (0 - 4) / -2 = 2 comes first
        let roots = solve_quadratic(-1.0, 0.0, 4.0).unwrap();
        assert_eq!(roots, vec![2.0, -2.0]);
    }

    #[test]
    fn test_roots_satisfy_equation() {
        let (a, b, c) = (3.0, -7.0, 2.0);
        let roots = solve_quadratic(a, b, c).unwrap();
        assert_eq!(roots.len(), 2);
        assert!(roots[0] < roots[1]);
        for x in roots {
            assert!(residual(a, b, c, x).abs() < 1e-9);
        }
    }

    #[test]
    fn test_f32_roots() {
        let roots = solve_quadratic(1.0f32, -3.0, 2.0).unwrap();
        assert_eq!(roots, vec![1.0f32, 2.0f32]);
    }

    #[test]
    fn test_nan_coefficient_is_not_an_error() {
        let roots = solve_quadratic(f64::NAN, 1.0, 1.0).unwrap();
        assert!(roots.iter().all(|r| r.is_nan()));
    }

    #[test]
    fn test_repeated_calls_return_same_roots() {
        let first = solve_quadratic(1.0, 1.0, -6.0).unwrap();
        for _ in 0..10 {
            assert_eq!(solve_quadratic(1.0, 1.0, -6.0).unwrap(), first);
        }
    }
}
