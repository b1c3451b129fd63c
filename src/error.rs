use thiserror::Error;

/// Failures reported by [`crate::Vector`] operations.
///
/// `op` names the operation that failed, e.g. `"at"` or `"pop_back"`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    #[error("{op}: index {index} is out of range for size {size}")]
    OutOfRange {
        op: &'static str,
        index: usize,
        size: usize,
    },

    #[error("{op}: vector is empty")]
    EmptyContainer { op: &'static str },
}

impl VectorError {
    pub fn out_of_range(op: &'static str, index: usize, size: usize) -> Self {
        Self::OutOfRange { op, index, size }
    }

    pub fn empty(op: &'static str) -> Self {
        Self::EmptyContainer { op }
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    pub fn is_empty_container(&self) -> bool {
        matches!(self, Self::EmptyContainer { .. })
    }
}

pub type Result<T> = std::result::Result<T, VectorError>;
