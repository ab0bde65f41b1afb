pub mod board;
pub mod column;
pub mod commands;
pub mod seed;
pub mod subtask;
pub mod task;

pub use board::{Board, BoardId};
pub use column::{Column, ColumnId};
pub use seed::{SeedBoard, SeedColumn, SeedDocument, SeedSubtask, SeedTask};
pub use subtask::{Subtask, SubtaskId};
pub use task::{Task, TaskId};
