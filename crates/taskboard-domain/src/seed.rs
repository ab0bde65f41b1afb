//! Seed document: the nested boards/columns/tasks/subtasks JSON shape the
//! store is populated from at startup. Field names follow the document's
//! camelCase convention; ids are minted during conversion.

use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardId};
use crate::column::Column;
use crate::subtask::Subtask;
use crate::task::Task;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedDocument {
    pub boards: Vec<SeedBoard>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedBoard {
    pub name: String,
    #[serde(default, rename = "isActive")]
    pub is_active: bool,
    #[serde(default)]
    pub columns: Vec<SeedColumn>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedColumn {
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<SeedTask>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedTask {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub subtasks: Vec<SeedSubtask>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedSubtask {
    pub title: String,
    #[serde(default, rename = "isCompleted")]
    pub is_completed: bool,
}

impl SeedDocument {
    /// Convert into domain boards plus the id of the board to activate.
    ///
    /// The first board flagged `isActive` wins; when no board carries the
    /// flag, the first board is activated. Task statuses in the document are
    /// repaired to match their owning column rather than rejected.
    pub fn into_boards(self) -> (Vec<Board>, Option<BoardId>) {
        let mut boards = Vec::with_capacity(self.boards.len());
        let mut active = None;

        for seed_board in self.boards {
            let columns = seed_board
                .columns
                .into_iter()
                .map(|seed_column| {
                    let status = seed_column.name.clone();
                    let tasks = seed_column
                        .tasks
                        .into_iter()
                        .map(|seed_task| {
                            let subtasks = seed_task
                                .subtasks
                                .into_iter()
                                .map(|s| Subtask::new(s.title, s.is_completed))
                                .collect();
                            Task::new(
                                seed_task.title,
                                seed_task.description,
                                status.clone(),
                                subtasks,
                            )
                        })
                        .collect();
                    Column::with_tasks(seed_column.name, tasks)
                })
                .collect();

            let board = Board::new(seed_board.name, columns);
            if seed_board.is_active && active.is_none() {
                active = Some(board.id);
            }
            boards.push(board);
        }

        if active.is_none() {
            active = boards.first().map(|b| b.id);
        }

        (boards, active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "boards": [
            {
                "name": "Platform Launch",
                "isActive": false,
                "columns": [
                    {
                        "name": "Todo",
                        "tasks": [
                            {
                                "title": "Build UI",
                                "description": "",
                                "status": "Todo",
                                "subtasks": [
                                    { "title": "Sign up page", "isCompleted": true },
                                    { "title": "Sign in page", "isCompleted": false }
                                ]
                            }
                        ]
                    },
                    { "name": "Doing", "tasks": [] }
                ]
            },
            {
                "name": "Roadmap",
                "isActive": true,
                "columns": []
            }
        ]
    }"#;

    #[test]
    fn test_parse_seed_document() {
        let doc: SeedDocument = serde_json::from_str(DOC).unwrap();
        assert_eq!(doc.boards.len(), 2);
        assert_eq!(doc.boards[0].columns[0].tasks[0].subtasks.len(), 2);
        assert!(doc.boards[0].columns[0].tasks[0].subtasks[0].is_completed);
        assert!(doc.boards[1].is_active);
    }

    #[test]
    fn test_into_boards_activates_flagged_board() {
        let doc: SeedDocument = serde_json::from_str(DOC).unwrap();
        let (boards, active) = doc.into_boards();
        assert_eq!(boards.len(), 2);
        assert_eq!(active, Some(boards[1].id));
    }

    #[test]
    fn test_into_boards_defaults_to_first_board() {
        let doc: SeedDocument = serde_json::from_str(
            r#"{ "boards": [ { "name": "A", "columns": [] }, { "name": "B", "columns": [] } ] }"#,
        )
        .unwrap();
        let (boards, active) = doc.into_boards();
        assert_eq!(active, Some(boards[0].id));
    }

    #[test]
    fn test_into_boards_repairs_stale_status() {
        let doc: SeedDocument = serde_json::from_str(
            r#"{
                "boards": [
                    {
                        "name": "B",
                        "columns": [
                            {
                                "name": "Doing",
                                "tasks": [ { "title": "T", "status": "Todo" } ]
                            }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();
        let (boards, _) = doc.into_boards();
        assert_eq!(boards[0].columns[0].tasks[0].status, "Doing");
    }

    #[test]
    fn test_empty_document() {
        let doc: SeedDocument = serde_json::from_str(r#"{ "boards": [] }"#).unwrap();
        let (boards, active) = doc.into_boards();
        assert!(boards.is_empty());
        assert!(active.is_none());
    }
}
