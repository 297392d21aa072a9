//! Dock engine configuration
//!
//! Stores sizing and interaction metrics in `tabdock/config.yaml` under the platform config directory.
//! Every field has a default, so a partial file only overrides what it names.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::geometry::Size;
use crate::model::SplitMetrics;

/// Engine metrics that persist across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockConfig {
    /// Thickness of the bar between split children
    pub divider_extent: i32,
    /// Floor for split children when making room or dragging a divider
    pub min_child_extent: i32,
    /// Minimum width and height of a panel
    pub widget_min_extent: i32,
    /// Extent given to a child newly inserted into a container
    pub preferred_extent: i32,
    /// Extent of a group docked at the edge of a root
    pub root_dock_size_hint: i32,
    /// Target edge length of the floating drag preview
    pub float_template_optimum: i32,
    /// Size of a newly floated window when no source size is known
    pub float_window_size: Size,
    /// Pointer travel before a tab press becomes a drag
    pub drag_threshold: i32,
    /// Width of the band around a surface edge that docks at its root
    pub root_dock_band: i32,
    pub tab_bar_height: i32,
    pub tab_width: i32,
    /// Title bar height of floating surfaces
    pub decoration_height: i32,
    /// Resize while dragging a divider instead of on release
    pub live_resize: bool,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            divider_extent: 4,
            min_child_extent: 200,
            widget_min_extent: 100,
            preferred_extent: 200,
            root_dock_size_hint: 200,
            float_template_optimum: 300,
            float_window_size: Size::new(900, 600),
            drag_threshold: 10,
            root_dock_band: 20,
            tab_bar_height: 26,
            tab_width: 120,
            decoration_height: 30,
            live_resize: false,
        }
    }
}

impl DockConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        let path = crate::config_paths::config_file().context("No config directory available")?;
        self.save_to(&path)
    }

    /// Save config to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// The subset the dock tree needs for sizing
    pub fn split_metrics(&self) -> SplitMetrics {
        SplitMetrics {
            divider_extent: self.divider_extent,
            min_child_extent: self.min_child_extent,
            preferred_extent: self.preferred_extent,
            widget_min_extent: self.widget_min_extent,
            live_resize: self.live_resize,
        }
    }
}
