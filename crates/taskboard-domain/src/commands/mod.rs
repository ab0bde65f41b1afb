use taskboard_core::{TaskboardError, TaskboardResult};

use crate::board::{Board, BoardId};

pub mod board_commands;
pub mod task_commands;

pub use board_commands::*;
pub use task_commands::*;

/// Trait for domain commands that mutate state
/// Commands represent intent and can be executed, queued, and described
pub trait Command: Send + Sync {
    /// Execute this command, mutating the domain state
    fn execute(&self, context: &mut CommandContext) -> TaskboardResult<()>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}

/// Context passed to commands for mutation. Holds the board collection and
/// the handle to the active board; there is no per-board `is_active` flag, so
/// at most one board can ever be active.
pub struct CommandContext<'a> {
    pub boards: &'a mut Vec<Board>,
    pub active: &'a mut Option<BoardId>,
}

impl<'a> CommandContext<'a> {
    pub fn active_board_id(&self) -> TaskboardResult<BoardId> {
        self.active.ok_or(TaskboardError::NoActiveBoard)
    }

    pub fn active_board_mut(&mut self) -> TaskboardResult<&mut Board> {
        let id = self.active_board_id()?;
        self.boards
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(TaskboardError::BoardNotFound(id))
    }

    pub fn board_mut(&mut self, id: BoardId) -> TaskboardResult<&mut Board> {
        self.boards
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(TaskboardError::BoardNotFound(id))
    }

    /// Make `id` the active board, replacing the previous holder.
    pub fn activate(&mut self, id: BoardId) -> TaskboardResult<()> {
        if !self.boards.iter().any(|b| b.id == id) {
            return Err(TaskboardError::BoardNotFound(id));
        }
        *self.active = Some(id);
        Ok(())
    }
}
