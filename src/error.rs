use thiserror::Error;

/// Error types for `DynArray` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DynArrayError {
    /// Index is outside the logical range of the array
    #[error("Index out of range: index {index} is outside array length {length}")]
    IndexOutOfRange {
        /// Index that was accessed, as passed by the caller
        index: isize,
        /// Current length of the array
        length: usize,
    },
    /// Removal attempted on an array with no elements
    #[error("Empty array: cannot remove from an array of length 0")]
    EmptyArray,
}

pub type Result<T> = core::result::Result<T, DynArrayError>;
