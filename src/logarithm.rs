//! Logarithms to an arbitrary base and numerical checks of the classic
//! logarithm identities.
//!
//! # Examples
//!
//! ```rust
//! use hsmath::logarithm::{LogIdentity, log};
//!
//! assert!((log(100.0_f64, 10.0).unwrap() - 2.0).abs() < 1e-12);
//!
//! let check = LogIdentity::Product { x: 4.0, y: 5.0, base: 10.0 }
//!     .evaluate()
//!     .unwrap();
//! assert!(check.holds());
//! ```

use num_traits::Float;

use crate::error::{Error, Result};

/// Relative tolerance used by [`is_close`], matching Python's `math.isclose`.
const REL_TOL: f64 = 1e-9;

/// Returns true if `a` and `b` agree to a relative tolerance of `1e-9`.
///
/// There is no absolute tolerance, so a value is only close to zero when it
/// is exactly zero.
pub fn is_close<T: Float>(a: T, b: T) -> bool {
    if a == b {
        return true;
    }
    if a.is_infinite() || b.is_infinite() {
        return false;
    }
    let rel_tol = T::from(REL_TOL).unwrap_or_else(T::epsilon);
    (a - b).abs() <= rel_tol * a.abs().max(b.abs())
}

/// Logarithm of `x` to the given `base`.
///
/// # Errors
///
/// [`Error::InvalidArgument`] if `x <= 0`, `base <= 0` or `base == 1`.
pub fn log<T: Float>(x: T, base: T) -> Result<T> {
    check_positive("x", x)?;
    check_base(base)?;
    Ok(x.ln() / base.ln())
}

fn check_positive<T: Float>(arg: &'static str, value: T) -> Result<()> {
    if value > T::zero() {
        Ok(())
    } else {
        Err(Error::invalid_argument(arg, "must be strictly positive"))
    }
}

fn check_base<T: Float>(base: T) -> Result<()> {
    check_positive("base", base)?;
    if base == T::one() {
        return Err(Error::invalid_argument("base", "must not be 1"));
    }
    Ok(())
}

/// A logarithm identity together with the values to test it on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogIdentity<T> {
    /// `log_b(x·y) = log_b(x) + log_b(y)`
    Product { x: T, y: T, base: T },
    /// `log_b(x/y) = log_b(x) - log_b(y)`
    Quotient { x: T, y: T, base: T },
    /// `log_b(xⁿ) = n·log_b(x)`
    Power { x: T, n: T, base: T },
    /// `log_b(x) = ln(x) / ln(b)`
    ChangeOfBase { x: T, base: T },
    /// `log_b(1) = 0`
    LogOfOne { base: T },
}

/// Both sides of an evaluated identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdentityCheck<T> {
    pub lhs: T,
    pub rhs: T,
}

impl<T: Float> IdentityCheck<T> {
    /// Returns true if both sides agree numerically.
    ///
    /// A zero right-hand side is compared against machine epsilon, since a
    /// purely relative test can never accept a rounded zero.
    pub fn holds(&self) -> bool {
        if self.rhs == T::zero() {
            return self.lhs.abs() <= T::epsilon();
        }
        is_close(self.lhs, self.rhs)
    }
}

impl<T: Float> LogIdentity<T> {
    /// Short human-readable name of the identity.
    pub const fn name(&self) -> &'static str {
        match self {
            LogIdentity::Product { .. } => "product",
            LogIdentity::Quotient { .. } => "quotient",
            LogIdentity::Power { .. } => "power",
            LogIdentity::ChangeOfBase { .. } => "change of base",
            LogIdentity::LogOfOne { .. } => "log of one",
        }
    }

    /// Computes both sides of the identity.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if any logarithm argument or base is out of
    /// its domain.
    pub fn evaluate(&self) -> Result<IdentityCheck<T>> {
        let check = match *self {
            LogIdentity::Product { x, y, base } => IdentityCheck {
                lhs: log(x * y, base)?,
                rhs: log(x, base)? + log(y, base)?,
            },
            LogIdentity::Quotient { x, y, base } => IdentityCheck {
                lhs: log(x / y, base)?,
                rhs: log(x, base)? - log(y, base)?,
            },
            LogIdentity::Power { x, n, base } => IdentityCheck {
                lhs: log(x.powf(n), base)?,
                rhs: n * log(x, base)?,
            },
            LogIdentity::ChangeOfBase { x, base } => IdentityCheck {
                lhs: log(x, base)?,
                rhs: x.ln() / base.ln(),
            },
            LogIdentity::LogOfOne { base } => IdentityCheck {
                lhs: log(T::one(), base)?,
                rhs: T::zero(),
            },
        };
        ::log::debug!(
            "{} identity: lhs={:?} rhs={:?}",
            self.name(),
            check.lhs.to_f64(),
            check.rhs.to_f64()
        );
        Ok(check)
    }
}

/// The five identity checks of the logarithm exercise.
pub fn reference_identities() -> [LogIdentity<f64>; 5] {
    [
        LogIdentity::Product {
            x: 4.0,
            y: 5.0,
            base: 10.0,
        },
        LogIdentity::Quotient {
            x: 20.0,
            y: 5.0,
            base: 10.0,
        },
        LogIdentity::Power {
            x: 3.0,
            n: 4.0,
            base: 10.0,
        },
        LogIdentity::ChangeOfBase { x: 10.0, base: 2.0 },
        LogIdentity::LogOfOne { base: 10.0 },
    ]
}
