use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("heap is empty")]
    EmptyContainer,
    #[error("index {index} is outside the logical range 1..={size}")]
    InvalidArgument { index: usize, size: usize },
}

pub type HeapResult<T> = Result<T, HeapError>;

/// Rejected timing configurations and heap failures surfaced by the harness.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimingError {
    #[error("start must be at least 1")]
    ZeroStart,
    #[error("increment must be positive")]
    ZeroIncrement,
    #[error("trials must be positive")]
    ZeroTrials,
    #[error("start {start} exceeds end {end}")]
    EmptyRange { start: usize, end: usize },
    #[error(transparent)]
    Heap(#[from] HeapError),
}
