use std::path::Path;
use taskboard_core::{TaskboardError, TaskboardResult};
use taskboard_domain::SeedDocument;

/// Load a seed document from disk.
pub async fn load_seed(path: &Path) -> TaskboardResult<SeedDocument> {
    let bytes = tokio::fs::read(path).await?;
    let document: SeedDocument = serde_json::from_slice(&bytes)
        .map_err(|e| TaskboardError::Serialization(e.to_string()))?;

    tracing::info!(
        "Loaded seed document with {} boards from {}",
        document.boards.len(),
        path.display()
    );
    Ok(document)
}
