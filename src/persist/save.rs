//! Dock area → layout document

use serde_json::Map;

use crate::geometry::Orientation;
use crate::model::{DockArea, NodeId};
use crate::panel::PanelPayload;

use super::{
    child_key, tab_key, GeometryEntry, LayoutDocument, SplitterEntry, TabGroupEntry, ViewEntry,
    WidgetType, WindowEntry, MAIN_WINDOW, RESERVED_VIEW_KEYS,
};

impl DockArea {
    /// Capture the current layout.
    ///
    /// A maximized panel is restored first so the document reflects the real
    /// tree.
    pub fn serialize(&mut self) -> LayoutDocument {
        if self.is_maximized() {
            self.restore_maximized();
        }

        let entries: Vec<(usize, NodeId, Option<GeometryEntry>)> = self
            .roots
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let frame = entry
                    .floating()
                    .map(|f| GeometryEntry::from(self.frame_of(f.geometry)));
                (i, entry.node, frame)
            })
            .collect();

        let mut children = Vec::with_capacity(entries.len());
        for (i, root, geometry) in entries {
            let Some(mut splitter) = self.save_splitter(root, None) else {
                continue;
            };
            splitter.size = 1;
            splitter.geometry = None;
            let window_name = if i == 0 && geometry.is_none() {
                MAIN_WINDOW.to_string()
            } else {
                format!("Window_{}", i)
            };
            let window = WindowEntry {
                geometry,
                window_name,
                splitter,
            };
            match serde_json::to_value(&window) {
                Ok(value) => children.push(value),
                Err(e) => tracing::warn!("Skipping root {} while saving layout: {}", i, e),
            }
        }

        LayoutDocument {
            float_window_children: children,
        }
    }

    /// Extent of `node` along its parent's axis.
    ///
    /// Unlaid-out nodes fall back to their proportion of a nominal 1000.
    fn saved_size(&self, node: NodeId, parent_axis: Option<Orientation>) -> i32 {
        let Some(axis) = parent_axis else {
            return 1;
        };
        let extent = self.tree.rect(node).map(|r| axis.extent(r)).unwrap_or(0);
        if extent > 0 {
            return extent;
        }
        self.tree
            .index_in_parent(node)
            .and_then(|(parent, index)| {
                self.tree
                    .split(parent)
                    .and_then(|s| s.proportions.get(index).copied())
            })
            .map(|p| ((p * 1000.0).round() as i32).max(1))
            .unwrap_or(1)
    }

    fn save_splitter(&self, node: NodeId, parent_axis: Option<Orientation>) -> Option<SplitterEntry> {
        let split = self.tree.split(node)?;
        let orientation = split.orientation;

        let mut children = Map::new();
        for (i, &child) in split.children.iter().enumerate() {
            let saved = if self.tree.is_tab_group(child) {
                self.save_tab_group(child, orientation)
                    .and_then(|e| serde_json::to_value(e).ok())
                    .map(|v| (WidgetType::TabWidget, v))
            } else {
                self.save_splitter(child, Some(orientation))
                    .and_then(|e| serde_json::to_value(e).ok())
                    .map(|v| (WidgetType::Splitter, v))
            };
            match saved {
                Some((kind, value)) => {
                    children.insert(child_key(i, kind), value);
                }
                None => tracing::warn!("Skipping child {} of {:?} while saving layout", i, node),
            }
        }

        Some(SplitterEntry {
            widget_type: WidgetType::Splitter,
            orientation,
            size: self.saved_size(node, parent_axis),
            geometry: self.tree.rect(node).map(GeometryEntry::from),
            splitter_children: children,
        })
    }

    fn save_tab_group(&self, node: NodeId, parent_axis: Orientation) -> Option<TabGroupEntry> {
        let tabs = self.tree.tab_group(node)?;

        let mut children = Map::new();
        for (i, &panel) in tabs.panels().iter().enumerate() {
            let Some(view) = self.pool.panel(panel) else {
                continue;
            };
            let mut payload = PanelPayload::new();
            view.save(&mut payload);
            for key in RESERVED_VIEW_KEYS {
                payload.remove(key);
            }

            let entry = ViewEntry {
                widget_type: WidgetType::View,
                window_type: view.panel_type().to_string(),
                window_id: self.pool.slot_of(panel),
                payload,
            };
            if let Ok(value) = serde_json::to_value(entry) {
                children.insert(tab_key(i), value);
            }
        }

        Some(TabGroupEntry {
            widget_type: WidgetType::TabWidget,
            size: self.saved_size(node, Some(parent_axis)),
            current_tab_index: tabs.current_tab_index().map(|i| i as i64).unwrap_or(-1),
            tab_widget_children: children,
        })
    }
}
