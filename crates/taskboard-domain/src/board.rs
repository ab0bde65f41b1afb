use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::column::{Column, ColumnId};
use crate::task::TaskId;

pub type BoardId = Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    pub columns: Vec<Column>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Board {
    pub fn new(name: String, columns: Vec<Column>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            columns,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn column_mut(&mut self, id: ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.id == id)
    }

    pub fn column_position(&self, id: ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| c.id == id)
    }

    /// Find a task anywhere on the board, returning (column index, task index).
    /// The indices are only valid while the board is not mutated.
    pub fn locate_task(&self, id: TaskId) -> Option<(usize, usize)> {
        self.columns.iter().enumerate().find_map(|(ci, column)| {
            column.task_position(id).map(|ti| (ci, ti))
        })
    }

    /// Re-derive every task's status from its owning column. Called after any
    /// wholesale column replacement.
    pub fn sync_task_statuses(&mut self) {
        for column in &mut self.columns {
            let name = column.name.clone();
            for task in &mut column.tasks {
                if task.status != name {
                    task.status = name.clone();
                }
            }
        }
    }
}
