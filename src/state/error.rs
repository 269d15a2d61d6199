use thiserror::Error;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("undo stack empty")]
    NothingToUndo,
    #[error("redo stack empty")]
    NothingToRedo,
}
