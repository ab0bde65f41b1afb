use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::task::{Task, TaskId};

pub type ColumnId = Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub name: String,
    pub tasks: Vec<Task>,
}

impl Column {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            tasks: Vec::new(),
        }
    }

    pub fn with_tasks(name: String, tasks: Vec<Task>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            tasks,
        }
    }

    pub fn task_position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }
}
