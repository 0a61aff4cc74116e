use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("node arena full: requested slot {requested}, capacity {capacity}")]
    AllocationFailure { requested: usize, capacity: usize },

    #[error("entropy source unavailable: {0}")]
    EntropyUnavailable(String),
}

pub type TreeResult<T> = Result<T, TreeError>;
