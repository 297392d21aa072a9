//! Layout files on disk
//!
//! `.yaml` and `.yml` files hold YAML; everything else is JSON.

use std::path::Path;

use anyhow::{Context, Result};

use super::LayoutDocument;

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
}

/// Write a layout document, creating parent directories as needed
pub fn save_layout(path: &Path, doc: &LayoutDocument) -> Result<()> {
    let content = if is_yaml(path) {
        serde_yaml::to_string(doc).context("Failed to serialize layout")?
    } else {
        serde_json::to_string_pretty(doc).context("Failed to serialize layout")?
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write layout to {}", path.display()))?;

    tracing::info!("Saved layout to {}", path.display());
    Ok(())
}

/// Read a layout document
pub fn load_layout(path: &Path) -> Result<LayoutDocument> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout from {}", path.display()))?;
    let doc = if is_yaml(path) {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse layout {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse layout {}", path.display()))?
    };

    tracing::info!("Loaded layout from {}", path.display());
    Ok(doc)
}
