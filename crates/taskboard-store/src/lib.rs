pub mod events;

use std::path::Path;
use taskboard_core::TaskboardResult;
use taskboard_domain::commands::{Command, CommandContext};
use taskboard_domain::{Board, BoardId, SeedDocument};
use tokio::sync::mpsc;

pub use events::StateEvent;
pub use taskboard_domain::commands;

/// Single source of truth for the board tree.
///
/// Owns the boards, the active-board handle, and the subscriber list.
/// Mutations go through [`dispatch`](BoardStore::dispatch), which applies one
/// command and then notifies every subscriber. Dispatch takes `&mut self`, so
/// each command is applied as one atomic step: no subscriber or later command
/// can observe a partially-applied mutation.
pub struct BoardStore {
    boards: Vec<Board>,
    active: Option<BoardId>,
    subscribers: Vec<mpsc::UnboundedSender<StateEvent>>,
}

impl BoardStore {
    pub fn new() -> Self {
        Self {
            boards: Vec::new(),
            active: None,
            subscribers: Vec::new(),
        }
    }

    /// Seed the store from a parsed seed document.
    pub fn from_seed(document: SeedDocument) -> Self {
        let (boards, active) = document.into_boards();
        Self {
            boards,
            active,
            subscribers: Vec::new(),
        }
    }

    /// Seed the store from a seed file on disk.
    pub async fn load_from_path(path: &Path) -> TaskboardResult<Self> {
        let document = taskboard_persistence::load_seed(path).await?;
        Ok(Self::from_seed(document))
    }

    /// Apply one command to the tree and notify subscribers.
    ///
    /// Commands resolve all of their targets before mutating, so a failed
    /// dispatch leaves the tree exactly as it was and publishes nothing.
    pub fn dispatch(&mut self, command: Box<dyn Command>) -> TaskboardResult<()> {
        let description = command.description();
        tracing::debug!("Executing: {}", description);

        let mut context = CommandContext {
            boards: &mut self.boards,
            active: &mut self.active,
        };
        command.execute(&mut context)?;

        self.notify(StateEvent::new(description));
        Ok(())
    }

    /// Register a subscriber. Every successful dispatch sends one event on
    /// the returned channel; dropping the receiver unsubscribes.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<StateEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    fn notify(&mut self, event: StateEvent) {
        self.subscribers.retain(|tx| match tx.send(event.clone()) {
            Ok(()) => true,
            Err(_) => {
                tracing::debug!("Pruning closed subscriber");
                false
            }
        });
    }

    // Read-only snapshot surface for the view layer.

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn active_board_id(&self) -> Option<BoardId> {
        self.active
    }

    pub fn active_board(&self) -> Option<&Board> {
        let id = self.active?;
        self.boards.iter().find(|b| b.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_domain::commands::{ColumnDraft, CreateBoard, DeleteBoard};

    #[test]
    fn test_new_store_is_empty() {
        let store = BoardStore::new();
        assert!(store.is_empty());
        assert!(store.active_board().is_none());
    }

    #[test]
    fn test_dispatch_notifies_subscribers() {
        let mut store = BoardStore::new();
        let mut rx = store.subscribe();

        store
            .dispatch(Box::new(CreateBoard {
                name: "Roadmap".to_string(),
                columns: vec![ColumnDraft::new("Todo")],
            }))
            .unwrap();

        let event = rx.try_recv().unwrap();
        assert_eq!(event.description, "Create board: 'Roadmap'");
    }

    #[test]
    fn test_failed_dispatch_publishes_nothing() {
        let mut store = BoardStore::new();
        let mut rx = store.subscribe();

        // No active board to delete.
        assert!(store.dispatch(Box::new(DeleteBoard)).is_err());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_closed_subscribers_are_pruned() {
        let mut store = BoardStore::new();
        let rx = store.subscribe();
        drop(rx);
        let mut live = store.subscribe();

        store
            .dispatch(Box::new(CreateBoard {
                name: "B".to_string(),
                columns: vec![],
            }))
            .unwrap();

        assert_eq!(store.subscribers.len(), 1);
        assert!(live.try_recv().is_ok());
    }

    #[test]
    fn test_from_seed_activates_flagged_board() {
        let document: SeedDocument = serde_json::from_str(
            r#"{
                "boards": [
                    { "name": "A", "columns": [] },
                    { "name": "B", "isActive": true, "columns": [] }
                ]
            }"#,
        )
        .unwrap();

        let store = BoardStore::from_seed(document);
        assert_eq!(store.boards().len(), 2);
        assert_eq!(store.active_board().unwrap().name, "B");
    }
}
