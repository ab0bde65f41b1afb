use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::subtask::{Subtask, SubtaskId};

pub type TaskId = Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    /// Always equal to the name of the column that owns this task.
    /// Maintained by the store on every insert and relocation.
    pub status: String,
    pub subtasks: Vec<Subtask>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(title: String, description: String, status: String, subtasks: Vec<Subtask>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            status,
            subtasks,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the editable fields in place. Status is the owning column's
    /// name, resolved by the caller.
    pub fn apply_edit(
        &mut self,
        title: String,
        description: String,
        subtasks: Vec<Subtask>,
        status: String,
    ) {
        self.title = title;
        self.description = description;
        self.subtasks = subtasks;
        self.status = status;
        self.updated_at = Utc::now();
    }

    pub fn set_status(&mut self, status: String) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    pub fn subtask_mut(&mut self, id: SubtaskId) -> Option<&mut Subtask> {
        self.subtasks.iter_mut().find(|s| s.id == id)
    }

    pub fn completed_subtasks(&self) -> usize {
        self.subtasks.iter().filter(|s| s.is_completed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_edit_overwrites_fields() {
        let mut task = Task::new(
            "Old".to_string(),
            String::new(),
            "Todo".to_string(),
            vec![],
        );
        task.apply_edit(
            "New".to_string(),
            "details".to_string(),
            vec![Subtask::new("Step".to_string(), false)],
            "Doing".to_string(),
        );
        assert_eq!(task.title, "New");
        assert_eq!(task.description, "details");
        assert_eq!(task.status, "Doing");
        assert_eq!(task.subtasks.len(), 1);
    }

    #[test]
    fn test_completed_subtasks() {
        let mut task = Task::new("T".to_string(), String::new(), "Todo".to_string(), vec![
            Subtask::new("a".to_string(), true),
            Subtask::new("b".to_string(), false),
            Subtask::new("c".to_string(), true),
        ]);
        assert_eq!(task.completed_subtasks(), 2);
        task.subtasks[1].toggle();
        assert_eq!(task.completed_subtasks(), 3);
    }
}
