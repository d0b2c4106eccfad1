// std build: thiserror derives Display/Error; the evaluator error is passed through as-is
#[cfg(feature = "std")]
use thiserror::Error;

/// Failure of an osmotic coefficient evaluation.
///
/// `E` is the error type of the [`Teos10Backend`](crate::adapters::teos10::Teos10Backend)
/// in use. Argument and shape problems are reported before any numeric work
/// starts; per-element data problems never show up here, they become NaN.
#[cfg(feature = "std")]
#[derive(Error, Debug)]
pub enum OsmoticError<E> {
    #[error("Expected {expected} input arrays (SA, t, p), got {found}")]
    ArgumentCount { expected: usize, found: usize },

    #[error("Shape mismatch for {argument}: expected {expected:?}, got {found:?}")]
    ShapeMismatch {
        argument: &'static str,
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("Invalid constant {name}: {value} (must be finite and positive)")]
    InvalidConstant { name: &'static str, value: f64 },

    #[error(transparent)]
    Evaluator(E),
}

#[cfg(not(feature = "std"))]
#[derive(Debug)]
pub enum OsmoticError<E> {
    ArgumentCount {
        expected: usize,
        found: usize,
    },
    ShapeMismatch {
        argument: &'static str,
        expected: (usize, usize),
        found: (usize, usize),
    },
    InvalidConstant {
        name: &'static str,
        value: f64,
    },
    Evaluator(E),
}

#[cfg(not(feature = "std"))]
impl<E: core::fmt::Display> core::fmt::Display for OsmoticError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ArgumentCount { expected, found } => {
                write!(f, "Expected {expected} input arrays (SA, t, p), got {found}")
            }
            Self::ShapeMismatch {
                argument,
                expected,
                found,
            } => write!(
                f,
                "Shape mismatch for {argument}: expected {expected:?}, got {found:?}"
            ),
            Self::InvalidConstant { name, value } => {
                write!(f, "Invalid constant {name}: {value} (must be finite and positive)")
            }
            Self::Evaluator(e) => e.fmt(f),
        }
    }
}

/// Convenience type for `Result<T, OsmoticError<E>>`.
pub type OsmoticResult<T, E> = Result<T, OsmoticError<E>>;
