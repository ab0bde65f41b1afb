/// Notification published to subscribers after every successful mutation.
/// Carries only the command description; subscribers read the new state
/// through the store's snapshot accessors.
#[derive(Debug, Clone)]
pub struct StateEvent {
    pub description: String,
}

impl StateEvent {
    pub fn new(description: String) -> Self {
        Self { description }
    }
}
