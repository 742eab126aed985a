
use std::error::Error;
use std::fmt;

/// Errors reported by the transform functions.
/// Both transforms are total over their documented preconditions, so every
/// variant corresponds to a caller-side contract violation or to an inverse
/// input that cannot be the output of any forward transform.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BwtError {
    /// the input string was empty; both transforms require at least one character
    EmptyInput,
    /// the primary index did not fall inside the transform
    IndexOutOfRange {
        /// the primary index the caller provided
        index: usize,
        /// the length of the transform it was paired with
        length: usize,
    },
    /// the last-to-first walk revisited a position before consuming the whole
    /// transform, so the pair cannot be the output of a forward transform on a
    /// uniquely terminated string
    MalformedTransform {
        /// the first position visited twice
        position: usize,
    },
}

impl fmt::Display for BwtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BwtError::EmptyInput => {
                write!(f, "input string must contain at least one character")
            }
            BwtError::IndexOutOfRange { index, length } => {
                write!(f, "primary index {} is out of range for a transform of length {}", index, length)
            }
            BwtError::MalformedTransform { position } => {
                write!(f, "last-to-first walk revisited position {} before the full string was rebuilt", position)
            }
        }
    }
}

impl Error for BwtError {}
