use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum TaskboardError {
    /// An operation needed the active board but no board is active.
    #[error("No active board")]
    NoActiveBoard,

    #[error("Board not found: {0}")]
    BoardNotFound(Uuid),

    #[error("Column not found: {0}")]
    ColumnNotFound(Uuid),

    #[error("Task not found: {0}")]
    TaskNotFound(Uuid),

    #[error("Subtask not found: {0}")]
    SubtaskNotFound(Uuid),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
