//! Core error types (deterministic only)

use core::fmt;

/// Core algorithm errors (no I/O, no external failures)
///
/// Segmentation itself cannot fail; the only checked condition is the
/// one-time sortedness validation a caller may run after loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Entry at `index` sorts before the entry that precedes it
    UnsortedDictionary {
        /// Index of the first out-of-order entry
        index: usize,
    },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::UnsortedDictionary { index } => {
                write!(f, "dictionary is not sorted at entry {index}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoreError {}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
