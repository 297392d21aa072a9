//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging drag
//! gestures, grafts and layout transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=drag=debug,layout=debug` - scoped filtering
//! - `RUST_LOG=tabdock::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `tabdock/logs/tabdock.log` under the platform config directory with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::DockArea;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG env var for filtering.
/// File logging writes to `tabdock/logs/tabdock.log` under the config directory with daily rotation.
///
/// Hosts that install their own subscriber should not call this.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let logs_dir = crate::config_paths::logs_dir()
        .ok_or_else(|| "no config directory available".to_string())
        .and_then(|dir| {
            std::fs::create_dir_all(&dir)
                .map(|_| dir)
                .map_err(|e| e.to_string())
        });
    let file_layer = match logs_dir {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "tabdock.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    // A host may already have installed a global subscriber
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of the layout for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSnapshot {
    pub roots: usize,
    pub nodes: usize,
    pub drag_state: &'static str,
    pub maximized: bool,
    pub groups: Vec<GroupInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupInfo {
    pub id: u64,
    pub labels: usize,
    pub panels: usize,
    pub current: Option<usize>,
}

impl LayoutSnapshot {
    pub fn from_area(area: &DockArea) -> Self {
        let drag_state = if area.drag.is_dragging() {
            "dragging"
        } else if area.drag.is_idle() {
            "idle"
        } else {
            "armed"
        };
        Self {
            roots: area.roots.len(),
            nodes: area.tree.len(),
            drag_state,
            maximized: area.is_maximized(),
            groups: area
                .tree
                .all_tab_groups()
                .into_iter()
                .filter_map(|id| {
                    area.tree.tab_group(id).map(|g| GroupInfo {
                        id: id.0,
                        labels: g.label_count(),
                        panels: g.panel_count(),
                        current: g.current_tab_index(),
                    })
                })
                .collect(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &LayoutSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.roots != other.roots {
            changes.push(format!("roots: {} → {}", self.roots, other.roots));
        }
        if self.nodes != other.nodes {
            changes.push(format!("nodes: {} → {}", self.nodes, other.nodes));
        }
        if self.drag_state != other.drag_state {
            changes.push(format!("drag: {} → {}", self.drag_state, other.drag_state));
        }
        if self.maximized != other.maximized {
            let status = if other.maximized { "on" } else { "off" };
            changes.push(format!("maximize {}", status));
        }

        for after in &other.groups {
            match self.groups.iter().find(|g| g.id == after.id) {
                Some(before) if before != after => changes.push(format!(
                    "#{}: {}/{} tabs, current {:?} → {}/{} tabs, current {:?}",
                    after.id,
                    before.labels,
                    before.panels,
                    before.current,
                    after.labels,
                    after.panels,
                    after.current
                )),
                Some(_) => {}
                None => changes.push(format!("#{}: created", after.id)),
            }
        }
        for before in &self.groups {
            if !other.groups.iter().any(|g| g.id == before.id) {
                changes.push(format!("#{}: destroyed", before.id));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
