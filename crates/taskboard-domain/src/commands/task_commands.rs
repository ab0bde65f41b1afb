use super::{Command, CommandContext};
use crate::column::ColumnId;
use crate::subtask::{Subtask, SubtaskId};
use crate::task::{Task, TaskId};
use taskboard_core::{TaskboardError, TaskboardResult};

/// A subtask as it appears in the task form.
#[derive(Debug, Clone)]
pub struct SubtaskDraft {
    pub title: String,
    pub is_completed: bool,
}

impl SubtaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            is_completed: false,
        }
    }

    fn build(drafts: &[SubtaskDraft]) -> Vec<Subtask> {
        drafts
            .iter()
            .map(|d| Subtask::new(d.title.clone(), d.is_completed))
            .collect()
    }
}

/// Create a task at the end of a column on the active board. Status is the
/// column's name, never caller-supplied.
pub struct CreateTask {
    pub column_id: ColumnId,
    pub title: String,
    pub description: String,
    pub subtasks: Vec<SubtaskDraft>,
}

impl Command for CreateTask {
    fn execute(&self, context: &mut CommandContext) -> TaskboardResult<()> {
        let board = context.active_board_mut()?;
        let column = board
            .column_mut(self.column_id)
            .ok_or(TaskboardError::ColumnNotFound(self.column_id))?;

        let task = Task::new(
            self.title.clone(),
            self.description.clone(),
            column.name.clone(),
            SubtaskDraft::build(&self.subtasks),
        );
        column.tasks.push(task);
        board.touch();
        Ok(())
    }

    fn description(&self) -> String {
        format!("Create task: '{}'", self.title)
    }
}

/// Overwrite a task's fields, relocating it when the target column differs
/// from its current one. A same-column edit leaves the column's ordering and
/// every other task untouched.
pub struct UpdateTask {
    pub task_id: TaskId,
    pub column_id: ColumnId,
    pub title: String,
    pub description: String,
    pub subtasks: Vec<SubtaskDraft>,
}

impl Command for UpdateTask {
    fn execute(&self, context: &mut CommandContext) -> TaskboardResult<()> {
        let board = context.active_board_mut()?;
        let (src, idx) = board
            .locate_task(self.task_id)
            .ok_or(TaskboardError::TaskNotFound(self.task_id))?;
        let dest = board
            .column_position(self.column_id)
            .ok_or(TaskboardError::ColumnNotFound(self.column_id))?;

        let status = board.columns[dest].name.clone();
        board.columns[src].tasks[idx].apply_edit(
            self.title.clone(),
            self.description.clone(),
            SubtaskDraft::build(&self.subtasks),
            status,
        );

        if src != dest {
            let task = board.columns[src].tasks.remove(idx);
            board.columns[dest].tasks.push(task);
        }
        board.touch();
        Ok(())
    }

    fn description(&self) -> String {
        format!("Update task: '{}'", self.title)
    }
}

/// Relocate a task to another column on the active board, re-deriving its
/// status from the destination. Moving a task onto its own column is an
/// explicit no-op: an unconditional remove-and-append would reorder the
/// column as a side effect.
pub struct MoveTask {
    pub task_id: TaskId,
    pub column_id: ColumnId,
}

impl Command for MoveTask {
    fn execute(&self, context: &mut CommandContext) -> TaskboardResult<()> {
        let board = context.active_board_mut()?;
        let (src, idx) = board
            .locate_task(self.task_id)
            .ok_or(TaskboardError::TaskNotFound(self.task_id))?;
        let dest = board
            .column_position(self.column_id)
            .ok_or(TaskboardError::ColumnNotFound(self.column_id))?;

        if src == dest {
            return Ok(());
        }

        let mut task = board.columns[src].tasks.remove(idx);
        task.set_status(board.columns[dest].name.clone());
        board.columns[dest].tasks.push(task);
        board.touch();
        Ok(())
    }

    fn description(&self) -> String {
        format!("Move task {} to column {}", self.task_id, self.column_id)
    }
}

/// Flip one subtask's completion flag. Nothing else in the tree changes.
pub struct ToggleSubtask {
    pub task_id: TaskId,
    pub subtask_id: SubtaskId,
}

impl Command for ToggleSubtask {
    fn execute(&self, context: &mut CommandContext) -> TaskboardResult<()> {
        let board = context.active_board_mut()?;
        let (ci, ti) = board
            .locate_task(self.task_id)
            .ok_or(TaskboardError::TaskNotFound(self.task_id))?;

        let subtask = board.columns[ci].tasks[ti]
            .subtask_mut(self.subtask_id)
            .ok_or(TaskboardError::SubtaskNotFound(self.subtask_id))?;
        subtask.toggle();
        Ok(())
    }

    fn description(&self) -> String {
        format!("Toggle subtask {}", self.subtask_id)
    }
}

/// Remove a task from its owning column on the active board.
pub struct DeleteTask {
    pub task_id: TaskId,
}

impl Command for DeleteTask {
    fn execute(&self, context: &mut CommandContext) -> TaskboardResult<()> {
        let board = context.active_board_mut()?;
        let (ci, ti) = board
            .locate_task(self.task_id)
            .ok_or(TaskboardError::TaskNotFound(self.task_id))?;

        board.columns[ci].tasks.remove(ti);
        board.touch();
        Ok(())
    }

    fn description(&self) -> String {
        format!("Delete task {}", self.task_id)
    }
}
