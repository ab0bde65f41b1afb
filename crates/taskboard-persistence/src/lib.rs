pub mod seed_loader;
pub mod theme;

pub use seed_loader::load_seed;
pub use theme::{PreferenceStore, Theme, ThemeStore};
