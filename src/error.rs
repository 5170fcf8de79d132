use thiserror::Error;

/// The ways a [`Sequence`](crate::Sequence) operation can fail.
///
/// Every failing operation leaves the container exactly as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum ListError {
    /// The operation needs at least one element, but the container holds none.
    #[error("the list is empty")]
    Empty,

    /// The supplied index is outside the range accepted by the operation.
    #[error("index {index} is out of bounds for a list of length {len}")]
    Index { index: usize, len: usize },

    /// An insertion was attempted on a full fixed-capacity list.
    #[error("the list is full (capacity {capacity})")]
    Capacity { capacity: usize },

    /// A fixed-capacity list or chunked list was configured with zero slots.
    #[error("capacity must be greater than zero")]
    ZeroCapacity,
}

impl ListError {
    /// Ensures `index` addresses an existing element of a list of length `len`.
    pub(crate) fn check_exclusive(index: usize, len: usize) -> Result<(), ListError> {
        if len == 0 {
            return Err(ListError::Empty);
        }

        if index >= len {
            return Err(ListError::Index { index, len });
        }

        Ok(())
    }

    /// Ensures `index` is a valid insertion point in a list of length `len`.
    pub(crate) fn check_inclusive(index: usize, len: usize) -> Result<(), ListError> {
        if index > len {
            return Err(ListError::Index { index, len });
        }

        Ok(())
    }
}
