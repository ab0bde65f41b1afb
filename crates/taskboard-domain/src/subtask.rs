use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type SubtaskId = Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subtask {
    pub id: SubtaskId,
    pub title: String,
    pub is_completed: bool,
}

impl Subtask {
    pub fn new(title: String, is_completed: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            is_completed,
        }
    }

    pub fn toggle(&mut self) {
        self.is_completed = !self.is_completed;
    }
}
