use super::{Command, CommandContext};
use crate::board::{Board, BoardId};
use crate::column::{Column, ColumnId};
use taskboard_core::{TaskboardError, TaskboardResult};

/// A column as it appears in the create/edit board form. Drafts carrying the
/// id of an existing column keep that column's tasks on commit; drafts
/// without one become empty columns.
#[derive(Debug, Clone)]
pub struct ColumnDraft {
    pub id: Option<ColumnId>,
    pub name: String,
}

impl ColumnDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    pub fn existing(id: ColumnId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }
}

/// Empty board and column names are the only user-facing validation in the
/// system; everything else is a precondition.
fn validate_names(board_name: &str, columns: &[ColumnDraft]) -> TaskboardResult<()> {
    if board_name.trim().is_empty() {
        return Err(TaskboardError::Validation(
            "Board name must not be empty".to_string(),
        ));
    }
    for draft in columns {
        if draft.name.trim().is_empty() {
            return Err(TaskboardError::Validation(
                "Column name must not be empty".to_string(),
            ));
        }
    }
    Ok(())
}

/// Create a new board. The first board in an empty collection becomes active;
/// later boards stay inactive until explicitly activated.
pub struct CreateBoard {
    pub name: String,
    pub columns: Vec<ColumnDraft>,
}

impl Command for CreateBoard {
    fn execute(&self, context: &mut CommandContext) -> TaskboardResult<()> {
        validate_names(&self.name, &self.columns)?;

        let columns = self
            .columns
            .iter()
            .map(|draft| Column::new(draft.name.clone()))
            .collect();
        let board = Board::new(self.name.clone(), columns);
        let id = board.id;
        let was_empty = context.boards.is_empty();

        context.boards.push(board);
        if was_empty {
            context.activate(id)?;
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Create board: '{}'", self.name)
    }
}

/// Replace the active board's name and columns wholesale. Drafts with a known
/// column id carry that column's tasks across; statuses are re-derived from
/// the (possibly renamed) columns afterwards.
pub struct UpdateBoard {
    pub name: String,
    pub columns: Vec<ColumnDraft>,
}

impl Command for UpdateBoard {
    fn execute(&self, context: &mut CommandContext) -> TaskboardResult<()> {
        validate_names(&self.name, &self.columns)?;

        let board = context.active_board_mut()?;
        let mut old_columns = std::mem::take(&mut board.columns);

        board.columns = self
            .columns
            .iter()
            .map(|draft| {
                let kept = draft
                    .id
                    .and_then(|id| old_columns.iter().position(|c| c.id == id))
                    .map(|pos| old_columns.remove(pos));
                match kept {
                    Some(mut column) => {
                        column.name = draft.name.clone();
                        column
                    }
                    None => Column::new(draft.name.clone()),
                }
            })
            .collect();

        board.name = self.name.clone();
        board.sync_task_statuses();
        board.touch();
        Ok(())
    }

    fn description(&self) -> String {
        format!("Update board: '{}'", self.name)
    }
}

/// Delete the active board. The first remaining board (if any) becomes
/// active, so a non-empty collection never ends up without an active board.
pub struct DeleteBoard;

impl Command for DeleteBoard {
    fn execute(&self, context: &mut CommandContext) -> TaskboardResult<()> {
        let id = context.active_board_id()?;
        let pos = context
            .boards
            .iter()
            .position(|b| b.id == id)
            .ok_or(TaskboardError::BoardNotFound(id))?;

        context.boards.remove(pos);
        *context.active = context.boards.first().map(|b| b.id);
        Ok(())
    }

    fn description(&self) -> String {
        "Delete active board".to_string()
    }
}

/// Switch the active board.
pub struct ActivateBoard {
    pub board_id: BoardId,
}

impl Command for ActivateBoard {
    fn execute(&self, context: &mut CommandContext) -> TaskboardResult<()> {
        context.activate(self.board_id)
    }

    fn description(&self) -> String {
        format!("Activate board {}", self.board_id)
    }
}
