//! Error type for contract violations at the public boundary.

use core::fmt;

/// Errors raised when callers hand the core a malformed input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChamError {
    /// A key, round-key array or block buffer had the wrong length.
    InvalidLength {
        /// What kind of buffer was rejected.
        what: &'static str,
        /// Length the cipher requires.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
    /// A rotation amount outside `1..=31`.
    InvalidRotation(u32),
}

impl fmt::Display for ChamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength {
                what,
                expected,
                actual,
            } => write!(f, "{what} must be {expected} long, got {actual}"),
            Self::InvalidRotation(amount) => {
                write!(f, "rotation amount {amount} outside 1..=31")
            }
        }
    }
}

impl std::error::Error for ChamError {}
