//! Layout document → dock area
//!
//! Documents are untrusted input. Every lookup is checked and a bad entry
//! is skipped with a warning; a partial layout beats no layout.

use std::collections::HashSet;

use serde_json::Value;

use crate::commands::Cmd;
use crate::geometry::Rect;
use crate::model::{DockArea, NodeId};
use crate::panel::{PanelId, PanelType};

use super::{
    ordered_children, LayoutDocument, SplitterEntry, TabGroupEntry, ViewEntry, WidgetType,
    WindowEntry,
};

impl DockArea {
    /// Replace the current layout with `doc`.
    ///
    /// Panels are returned to the pool first and claimed back by type and
    /// slot. An empty document leaves the area empty. A document whose main
    /// window cannot be rebuilt falls back to the default layout for root 0.
    pub fn deserialize(&mut self, doc: &LayoutDocument) {
        self.clear_layout();
        if doc.is_empty() {
            self.finish_layout_load();
            return;
        }

        let mut placed = HashSet::new();
        for (i, value) in doc.float_window_children.iter().enumerate() {
            let window: WindowEntry = match serde_json::from_value(value.clone()) {
                Ok(window) => window,
                Err(e) => {
                    tracing::warn!("Skipping window {} of layout: {}", i, e);
                    continue;
                }
            };
            let Some(root) = self.load_splitter(&window.splitter, &mut placed) else {
                tracing::warn!("Window {} of layout has no usable content", i);
                continue;
            };

            if i == 0 {
                self.roots.set_main(root);
                continue;
            }

            let frame = window
                .geometry
                .map(Rect::from)
                .unwrap_or_else(|| {
                    self.frame_of(Rect::centered_at(
                        self.screen.center(),
                        self.config.float_window_size,
                    ))
                })
                .clamped_into(self.screen);
            let client = self.client_of(frame);
            let closable = self
                .tree
                .tab_groups_under(root)
                .first()
                .and_then(|&g| self.tree.tab_group(g)?.panel(0))
                .map(|p| self.pool.can_close(p))
                .unwrap_or(true);
            let surface = self.roots.push_floating(root, client, closable);
            self.queue(Cmd::OpenSurface(surface));
        }

        if self.roots.main().is_none() {
            tracing::warn!("Main window missing from layout, using the default layout");
            if let Some(panel) = self.pool.new_default_window() {
                self.tabbed_view(panel, None, None);
            }
        }
        self.finish_layout_load();
    }

    fn finish_layout_load(&mut self) {
        self.flush();
        self.queue(Cmd::Redraw);
        tracing::debug!(
            target: "layout",
            roots = self.roots.len(),
            nodes = self.tree.len(),
            "layout loaded"
        );
    }

    fn load_splitter(
        &mut self,
        entry: &SplitterEntry,
        placed: &mut HashSet<PanelId>,
    ) -> Option<NodeId> {
        let split = self.tree.create_split(entry.orientation);
        let mut sizes = Vec::new();

        for (key, child) in ordered_children(&entry.splitter_children) {
            let built = match WidgetType::of(child) {
                Some(WidgetType::Splitter) => parse::<SplitterEntry>(key, child).and_then(|e| {
                    let node = self.load_splitter(&e, placed)?;
                    Some((node, e.size))
                }),
                Some(WidgetType::TabWidget) => parse::<TabGroupEntry>(key, child).and_then(|e| {
                    let node = self.load_tab_group(&e, placed)?;
                    Some((node, e.size))
                }),
                _ => {
                    tracing::warn!("Skipping layout entry {}: unknown widgetType", key);
                    None
                }
            };
            if let Some((node, size)) = built {
                self.tree.add_child(split, node);
                sizes.push(size);
            }
        }

        if sizes.is_empty() {
            self.tree.destroy_subtree(split);
            return None;
        }
        self.tree.update_sizes(split, &sizes);
        Some(split)
    }

    fn load_tab_group(
        &mut self,
        entry: &TabGroupEntry,
        placed: &mut HashSet<PanelId>,
    ) -> Option<NodeId> {
        let group = self.tree.create_tab_group();

        for (key, child) in ordered_children(&entry.tab_widget_children) {
            let Some(view) = parse::<ViewEntry>(key, child) else {
                continue;
            };
            let Some(ty) = PanelType::parse(&view.window_type) else {
                tracing::warn!("Skipping layout entry {}: bad windowType", key);
                continue;
            };
            let Some(panel) = self.claim_panel(ty, view.window_id, placed) else {
                tracing::warn!("Skipping layout entry {}: no panel for type {}", key, ty);
                continue;
            };

            if let Some(p) = self.pool.panel_mut(panel) {
                if !p.load(&view.payload) {
                    tracing::warn!("Panel {:?} rejected its saved state", panel);
                }
            }
            placed.insert(panel);
            let title = self.pool.title(panel);
            if let Some(tabs) = self.tree.tab_group_mut(group) {
                tabs.add_tab(panel, title);
            }
        }

        if self.tree.tab_group(group).map_or(true, |t| t.is_empty()) {
            self.tree.destroy_subtree(group);
            return None;
        }
        let tabs = self.tree.tab_group_mut(group)?;
        let current = usize::try_from(entry.current_tab_index)
            .ok()
            .filter(|&i| i < tabs.label_count())
            .unwrap_or(0);
        tabs.select(current);
        Some(group)
    }

    /// The pooled panel for a view, reusing its slot when it has one
    fn claim_panel(
        &mut self,
        ty: PanelType,
        slot: Option<usize>,
        placed: &HashSet<PanelId>,
    ) -> Option<PanelId> {
        if let Some(slot) = slot {
            if let Some(panel) = self.pool.get_window(ty, slot) {
                if !placed.contains(&panel) {
                    return Some(panel);
                }
            }
        }
        self.pool.new_window(ty)
    }
}

fn parse<T: serde::de::DeserializeOwned>(key: &str, value: &Value) -> Option<T> {
    match serde_json::from_value(value.clone()) {
        Ok(entry) => Some(entry),
        Err(e) => {
            tracing::warn!("Skipping layout entry {}: {}", key, e);
            None
        }
    }
}
