use crate::api::GenerationResult;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Used when the backend filename has no usable final component.
pub const DEFAULT_INVENTORY_FILENAME: &str = "inventory.yml";

/// Content type of exported inventories.
pub const INVENTORY_MIME_TYPE: &str = "text/yaml";

/// Reduces a backend-supplied filename to a single path component.
pub(crate) fn export_file_name(filename: &str) -> String {
    let normalized = filename.replace('\\', "/");
    match Path::new(&normalized).file_name().and_then(|n| n.to_str()) {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => DEFAULT_INVENTORY_FILENAME.to_string(),
    }
}

/// Writes the generated inventory into `dir`, content byte-for-byte.
///
/// Creates `dir` if needed and overwrites an existing file of the same name.
pub fn export_inventory(dir: &Path, result: &GenerationResult) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let path = dir.join(export_file_name(&result.filename));
    std::fs::write(&path, result.content.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        bytes = result.content.len(),
        mime = INVENTORY_MIME_TYPE,
        "inventory exported"
    );
    Ok(path)
}
