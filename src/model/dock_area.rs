//! Dock area - the whole docking state of one host window
//!
//! Owns the dock tree, the root set, the panel pool and the drag controller,
//! and provides the host-facing operations: adding and floating panels,
//! closing tabs, maximizing, context menus and hit testing.

use crate::commands::Cmd;
use crate::config::DockConfig;
use crate::drag::DragController;
use crate::geometry::{Orientation, Point, Rect, Size};
use crate::panel::{ContextMenu, FactoryRegistry, MenuAction, MenuItem, PanelId, PanelPool, PanelType};

use super::roots::{RootSet, SurfaceId};
use super::tab_group::TabGroup;
use super::tree::{DockTree, NodeId};

/// A panel temporarily shown alone over the main area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Maximized {
    pub panel: PanelId,
    /// Group whose bar still shows the panel's label
    pub group: NodeId,
    /// Content index to restore the panel to
    pub index: usize,
}

#[derive(Debug)]
pub struct DockArea {
    pub tree: DockTree,
    pub roots: RootSet,
    pub pool: PanelPool,
    pub config: DockConfig,
    pub drag: DragController,
    /// Host client area occupied by the main root
    pub main_area: Rect,
    /// Available screen rectangle floating surfaces are kept inside
    pub screen: Rect,
    maximized: Option<Maximized>,
    /// Tab group covering the main area while maximized
    overlay: Option<NodeId>,
    updates_suspended: bool,
    flushing: bool,
    pending: Vec<Cmd>,
}

impl DockArea {
    pub fn new(config: DockConfig, factories: FactoryRegistry) -> Self {
        Self {
            tree: DockTree::new(config.split_metrics()),
            roots: RootSet::new(),
            pool: PanelPool::new(factories),
            config,
            drag: DragController::new(),
            main_area: Rect::default(),
            screen: Rect::default(),
            maximized: None,
            overlay: None,
            updates_suspended: false,
            flushing: false,
            pending: Vec::new(),
        }
    }

    /// A dock area filling `main_area`, with the default layout built
    pub fn with_default_layout(
        config: DockConfig,
        factories: FactoryRegistry,
        main_area: Rect,
        screen: Rect,
    ) -> Self {
        let mut area = Self::new(config, factories);
        area.main_area = main_area;
        area.screen = screen;
        area.reset_to_default_layout();
        area.take_commands();
        area
    }

    // ========================================================================
    // Updates and side effects
    // ========================================================================

    /// Defer visual updates until [`resume_updates`](Self::resume_updates)
    pub fn suspend_updates(&mut self) {
        self.updates_suspended = true;
    }

    /// Flush pending layout and request one redraw for the whole batch
    pub fn resume_updates(&mut self) {
        self.flush();
        self.updates_suspended = false;
        self.queue(Cmd::Redraw);
    }

    pub fn updates_suspended(&self) -> bool {
        self.updates_suspended
    }

    /// Re-lay out every root. A nested call while flushing is a no-op.
    pub fn flush(&mut self) {
        if self.flushing {
            return;
        }
        self.flushing = true;
        self.relayout();
        #[cfg(debug_assertions)]
        self.assert_invariants();
        self.flushing = false;
    }

    fn relayout(&mut self) {
        if let Some(main) = self.roots.main() {
            self.tree.layout(main, self.main_area);
        }
        if let Some(overlay) = self.overlay {
            self.tree.layout(overlay, self.main_area);
        }
        let floating: Vec<(NodeId, Rect)> = self
            .roots
            .floating()
            .map(|(entry, surface)| (entry.node, surface.geometry))
            .collect();
        for (root, rect) in floating {
            self.tree.layout(root, rect);
        }
    }

    pub(crate) fn queue(&mut self, cmd: Cmd) {
        if cmd == Cmd::Redraw && self.updates_suspended {
            return;
        }
        self.pending.push(cmd);
    }

    /// Drain side effects produced since the last call
    pub fn take_commands(&mut self) -> Vec<Cmd> {
        std::mem::take(&mut self.pending)
    }

    fn finish_edit(&mut self) {
        self.flush();
        self.queue(Cmd::Redraw);
    }

    // ========================================================================
    // Geometry
    // ========================================================================

    pub fn set_main_area(&mut self, rect: Rect) {
        self.main_area = rect;
        self.finish_edit();
    }

    pub fn set_available_screen(&mut self, rect: Rect) {
        self.screen = rect;
    }

    /// Turn tab dragging on or off for every group
    pub fn set_drag_enabled(&mut self, enabled: bool) {
        self.drag.set_enabled(enabled);
    }

    pub fn move_surface(&mut self, surface: SurfaceId, geometry: Rect) -> bool {
        let Some(floating) = self.roots.surface_mut(surface) else {
            return false;
        };
        floating.geometry = geometry;
        self.finish_edit();
        true
    }

    /// Window frame around a floating client rectangle
    pub fn frame_of(&self, client: Rect) -> Rect {
        let deco = self.config.decoration_height;
        Rect::new(client.x, client.y - deco, client.width, client.height + deco)
    }

    /// Client rectangle inside a floating window frame
    pub fn client_of(&self, frame: Rect) -> Rect {
        let deco = self.config.decoration_height;
        Rect::new(frame.x, frame.y + deco, frame.width, (frame.height - deco).max(0))
    }

    /// Client rectangle of a new floating surface centered on `center`,
    /// with its frame kept on screen
    pub fn place_floating(&self, center: Point, size: Size) -> Rect {
        let frame = self
            .frame_of(Rect::centered_at(center, size))
            .clamped_into(self.screen);
        self.client_of(frame)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn main_root(&self) -> Option<NodeId> {
        self.roots.main()
    }

    pub fn group(&self, id: NodeId) -> Option<&TabGroup> {
        self.tree.tab_group(id)
    }

    pub fn is_in_main_root(&self, node: NodeId) -> bool {
        self.roots.is_main(self.tree.root_of(node))
    }

    /// Tab groups of root `index`, depth-first
    pub fn groups_in_root(&self, index: usize) -> Vec<NodeId> {
        self.roots
            .get(index)
            .map(|entry| self.tree.tab_groups_under(entry.node))
            .unwrap_or_default()
    }

    /// Group and index currently holding `panel`
    pub fn locate_panel(&self, panel: PanelId) -> Option<(NodeId, usize)> {
        self.tree.all_tab_groups().into_iter().find_map(|g| {
            self.tree
                .tab_group(g)
                .and_then(|group| group.index_of(panel))
                .map(|i| (g, i))
        })
    }

    pub fn maximized(&self) -> Option<Maximized> {
        self.maximized
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized.is_some()
    }

    /// Group covering the main area while a panel is maximized
    pub fn overlay_group(&self) -> Option<NodeId> {
        self.overlay
    }

    /// True for the single tab of the single group of the main root
    pub fn is_last_tab_in_main(&self, group: NodeId) -> bool {
        let Some(tabs) = self.tree.tab_group(group) else {
            return false;
        };
        if tabs.label_count() > 1 || !self.is_in_main_root(group) {
            return false;
        }
        self.roots
            .main()
            .map(|main| self.tree.tab_groups_under(main).iter().all(|&g| g == group))
            .unwrap_or(false)
    }

    // ========================================================================
    // Hit testing
    // ========================================================================

    /// Floating roots whose frame contains `p`, topmost first
    fn floating_roots_at(&self, p: Point) -> Vec<NodeId> {
        let mut hits: Vec<NodeId> = self
            .roots
            .floating()
            .filter(|(_, surface)| self.frame_of(surface.geometry).contains(p))
            .map(|(entry, _)| entry.node)
            .collect();
        hits.reverse();
        hits
    }

    /// Root whose surface is topmost under `p`
    pub fn root_at(&self, p: Point) -> Option<NodeId> {
        if let Some(&root) = self.floating_roots_at(p).first() {
            return Some(root);
        }
        self.roots.main().filter(|_| self.main_area.contains(p))
    }

    /// Surface rectangle a root is hosted in: the frame for floating roots
    pub fn surface_rect(&self, root: NodeId) -> Option<Rect> {
        let entry = self.roots.get(self.roots.index_of(root)?)?;
        match entry.floating() {
            Some(surface) => Some(self.frame_of(surface.geometry)),
            None => Some(self.main_area),
        }
    }

    /// Tab group under `p`, honouring surface stacking and the maximize overlay
    pub fn group_at(&self, p: Point) -> Option<NodeId> {
        if let Some(&root) = self.floating_roots_at(p).first() {
            return self.tree.group_at(root, p);
        }
        if !self.main_area.contains(p) {
            return None;
        }
        if let Some(overlay) = self.overlay {
            return Some(overlay);
        }
        self.tree.group_at(self.roots.main()?, p)
    }

    pub fn tab_bar_rect(&self, group: NodeId) -> Option<Rect> {
        let r = self.tree.rect(group)?;
        Some(Rect::new(
            r.x,
            r.y,
            r.width,
            self.config.tab_bar_height.min(r.height),
        ))
    }

    pub fn content_rect(&self, group: NodeId) -> Option<Rect> {
        let r = self.tree.rect(group)?;
        let bar = self.config.tab_bar_height.min(r.height);
        Some(Rect::new(r.x, r.y + bar, r.width, r.height - bar))
    }

    pub fn tab_rect(&self, group: NodeId, index: usize) -> Option<Rect> {
        let bar = self.tab_bar_rect(group)?;
        if index >= self.tree.tab_group(group)?.label_count() {
            return None;
        }
        let w = self.config.tab_width;
        Some(Rect::new(bar.x + index as i32 * w, bar.y, w, bar.height))
    }

    /// Label index under `p`; `None` over empty bar space or outside the bar
    pub fn tab_at(&self, group: NodeId, p: Point) -> Option<usize> {
        let bar = self.tab_bar_rect(group)?;
        if !bar.contains(p) || self.config.tab_width <= 0 {
            return None;
        }
        let index = ((p.x - bar.x) / self.config.tab_width) as usize;
        (index < self.tree.tab_group(group)?.label_count()).then_some(index)
    }

    /// Container and divider index under `p`
    pub fn divider_at(&self, p: Point) -> Option<(NodeId, usize)> {
        if let Some(&root) = self.floating_roots_at(p).first() {
            return self.tree.divider_at(root, p);
        }
        if self.overlay.is_some() || !self.main_area.contains(p) {
            return None;
        }
        self.tree.divider_at(self.roots.main()?, p)
    }

    // ========================================================================
    // Building the layout
    // ========================================================================

    /// First group of the main root, creating the default skeleton
    /// (horizontal root, vertical column, tab group) when there is none
    fn ensure_main_group(&mut self) -> NodeId {
        if let Some(main) = self.roots.main() {
            if let Some(&group) = self.tree.tab_groups_under(main).first() {
                return group;
            }
        }

        let root = self.tree.create_split(Orientation::Horizontal);
        let column = self.tree.create_split(Orientation::Vertical);
        let group = self.tree.create_tab_group();
        self.tree.add_child(root, column);
        self.tree.add_child(column, group);
        self.roots.set_main(root);
        self.relayout();
        group
    }

    /// Drop the whole layout, returning every panel to the pool as hidden
    pub(crate) fn clear_layout(&mut self) {
        self.drag.finish();
        self.maximized = None;
        self.overlay = None;
        self.pool.hide_all_before_layout_change();
        for surface in self.roots.clear() {
            self.queue(Cmd::CloseSurface(surface));
        }
        self.tree.clear();
    }

    /// Replace the layout with a single panel of the first registered type
    pub fn reset_to_default_layout(&mut self) -> bool {
        self.clear_layout();
        let Some(panel) = self.pool.new_default_window() else {
            tracing::warn!("No panel factories registered, layout left empty");
            return false;
        };
        self.tabbed_view(panel, None, None).is_some()
    }

    // ========================================================================
    // Panel operations
    // ========================================================================

    /// Add a pooled panel as a tab of `group`, or of the main root's first group.
    ///
    /// Returns `None` if the panel is unknown or already in the layout.
    /// Positioned inserts are refused while a drag is in progress, since
    /// they would shift the labels under the drag's temp tab.
    pub fn tabbed_view(
        &mut self,
        panel: PanelId,
        group: Option<NodeId>,
        index: Option<usize>,
    ) -> Option<(NodeId, usize)> {
        if self.pool.panel(panel).is_none() || self.locate_panel(panel).is_some() {
            return None;
        }
        if index.is_some() && !self.drag.is_idle() {
            return None;
        }
        let group = match group {
            Some(g) if self.tree.is_tab_group(g) => g,
            Some(_) => return None,
            None => self.ensure_main_group(),
        };

        let title = self.pool.title(panel);
        self.pool.register_window(panel);
        let tabs = self.tree.tab_group_mut(group)?;
        let index = tabs.insert_tab(index, panel, title);
        tabs.select(index);
        self.finish_edit();
        Some((group, index))
    }

    /// Open a pooled panel in a new floating surface centered on `center`,
    /// or on the screen when `None`. Returns the new group.
    pub fn float_view(&mut self, panel: PanelId, center: Option<Point>) -> Option<NodeId> {
        if self.pool.panel(panel).is_none() || self.locate_panel(panel).is_some() {
            return None;
        }
        let center = center.unwrap_or_else(|| self.screen.center());
        let title = self.pool.title(panel);
        self.pool.register_window(panel);
        let group = self.open_floating(panel, title, center, self.config.float_window_size);
        self.finish_edit();
        Some(group)
    }

    /// Create a floating root holding one tab; queues the surface opening
    pub(crate) fn open_floating(
        &mut self,
        panel: PanelId,
        label: String,
        center: Point,
        size: Size,
    ) -> NodeId {
        let client = self.place_floating(center, size);
        let root = self.tree.create_split(Orientation::Horizontal);
        let group = self.tree.create_tab_group();
        self.tree.add_child(root, group);
        if let Some(tabs) = self.tree.tab_group_mut(group) {
            tabs.add_tab(panel, label);
        }

        let closable = self.pool.can_close(panel);
        let surface = self.roots.push_floating(root, client, closable);
        self.tree.layout(root, client);
        self.queue(Cmd::OpenSurface(surface));
        tracing::debug!(target: "layout", ?surface, ?client, "floating surface opened");
        group
    }

    /// Show a panel of `ty`: select a visible one, or create one.
    ///
    /// New unique panels are tabbed into the main root, others float.
    pub fn activate_view(&mut self, ty: PanelType) -> Option<PanelId> {
        if let Some(panel) = self.pool.visible_window(ty) {
            if let Some((group, index)) = self.locate_panel(panel) {
                self.select_tab(group, index);
                return Some(panel);
            }
        }

        let unique = self.pool.factories().factory(ty)?.is_unique();
        let panel = self.pool.new_window(ty)?;
        let placed = if unique {
            self.tabbed_view(panel, None, None).is_some()
        } else {
            self.float_view(panel, None).is_some()
        };
        if !placed {
            self.pool.hide_window(panel);
            return None;
        }
        Some(panel)
    }

    pub fn select_tab(&mut self, group: NodeId, index: usize) -> bool {
        let Some(tabs) = self.tree.tab_group_mut(group) else {
            return false;
        };
        if index >= tabs.label_count() {
            return false;
        }
        tabs.select(index);
        self.queue(Cmd::Redraw);
        true
    }

    pub fn can_close_tab(&self, group: NodeId, index: usize) -> bool {
        if self.maximized.is_some() || !self.drag.is_idle() || Some(group) == self.overlay {
            return false;
        }
        let Some(panel) = self.tree.tab_group(group).and_then(|g| g.panel(index)) else {
            return false;
        };
        self.pool.can_close(panel) && !self.is_last_tab_in_main(group)
    }

    /// Close a tab and destroy its panel
    pub fn close_tab(&mut self, group: NodeId, index: usize) -> bool {
        if !self.can_close_tab(group, index) {
            return false;
        }
        let Some(panel) = self
            .tree
            .tab_group_mut(group)
            .and_then(|g| g.remove_tab_and_widget(index))
        else {
            return false;
        };
        self.pool.delete_window(panel);
        self.remove_group_if_empty(group);
        self.finish_edit();
        true
    }

    /// Append a new panel of `ty` to `group`
    pub fn add_tab(&mut self, group: NodeId, ty: PanelType) -> Option<usize> {
        if Some(group) == self.overlay || !self.tree.is_tab_group(group) {
            return None;
        }
        let panel = self.pool.new_window(ty)?;
        let title = self.pool.title(panel);
        let tabs = self.tree.tab_group_mut(group)?;
        let index = tabs.add_tab(panel, title);
        tabs.select(index);
        self.finish_edit();
        Some(index)
    }

    /// Close a floating surface and destroy the panels it hosts
    pub fn close_surface(&mut self, surface: SurfaceId) -> bool {
        if !self.drag.is_idle() {
            return false;
        }
        let Some(entry) = self.roots.entry_for_surface(surface) else {
            return false;
        };
        if entry.floating().is_some_and(|f| !f.closable) {
            return false;
        }
        let root = entry.node;
        self.roots.remove(root);
        for panel in self.tree.destroy_subtree(root) {
            self.pool.delete_window(panel);
        }
        self.queue(Cmd::CloseSurface(surface));
        self.finish_edit();
        true
    }

    /// Destroy `group` if it holds nothing, collapsing emptied containers.
    ///
    /// A root emptied this way is removed and its surface closed.
    pub(crate) fn remove_group_if_empty(&mut self, group: NodeId) -> bool {
        let empty = self
            .tree
            .tab_group(group)
            .is_some_and(|g| g.is_empty() && g.label_count() == 0);
        if !empty || self.maximized.is_some_and(|m| m.group == group) {
            return false;
        }

        let removal = self.tree.remove_node(group);
        self.tree.destroy_subtree(group);
        if let Some(root) = removal.emptied_root {
            if self.roots.is_main(root) {
                self.ensure_main_group();
            } else if let Some(surface) =
                self.roots.remove(root).and_then(|e| e.floating().map(|f| f.id))
            {
                self.queue(Cmd::CloseSurface(surface));
            }
        }
        tracing::debug!(
            target: "layout",
            ?group,
            destroyed = removal.destroyed.len(),
            "empty group removed"
        );
        true
    }

    // ========================================================================
    // Maximize
    // ========================================================================

    /// Maximize the panel at `index` of `group`, or restore if maximized.
    ///
    /// Only the content moves; the label stays in its bar.
    pub fn toggle_maximize(&mut self, group: NodeId, index: usize) -> bool {
        if !self.drag.is_idle() {
            return false;
        }
        if let Some(current) = self.maximized {
            if Some(group) == self.overlay || group == current.group {
                return self.restore_maximized();
            }
            return false;
        }
        if !self.is_in_main_root(group) {
            return false;
        }
        let Some(panel) = self.tree.tab_group(group).and_then(|g| g.panel(index)) else {
            return false;
        };

        let title = self.pool.title(panel);
        if let Some(tabs) = self.tree.tab_group_mut(group) {
            tabs.remove_only_widget(panel);
        }
        let overlay = self.tree.create_tab_group();
        if let Some(tabs) = self.tree.tab_group_mut(overlay) {
            tabs.add_tab(panel, title);
        }
        self.overlay = Some(overlay);
        self.maximized = Some(Maximized {
            panel,
            group,
            index,
        });
        tracing::debug!(target: "layout", ?panel, ?group, index, "panel maximized");
        self.finish_edit();
        true
    }

    /// Put a maximized panel back where it came from
    pub fn restore_maximized(&mut self) -> bool {
        let Some(m) = self.maximized.take() else {
            return false;
        };
        if let Some(overlay) = self.overlay.take() {
            self.tree.destroy_subtree(overlay);
        }
        if let Some(tabs) = self.tree.tab_group_mut(m.group) {
            tabs.insert_only_widget(m.index, m.panel);
            if let Some(current) = tabs.current_tab_index() {
                tabs.set_current_panel_index(current);
            }
        }
        tracing::debug!(target: "layout", panel = ?m.panel, group = ?m.group, "panel restored");
        self.finish_edit();
        true
    }

    // ========================================================================
    // Context menu
    // ========================================================================

    /// Menu for the tab at `index` of `group`: panel items, then Maximize,
    /// Close and an Open submenu listing every registered panel type
    pub fn context_menu(&self, group: NodeId, index: usize) -> Option<ContextMenu> {
        let tabs = self.tree.tab_group(group)?;
        if index >= tabs.label_count() {
            return None;
        }
        let is_overlay = Some(group) == self.overlay;
        let panel = if is_overlay {
            tabs.panel(0)
        } else {
            tabs.panel(index)
        };
        let mut menu = ContextMenu {
            panel,
            items: Vec::new(),
        };
        if let Some(view) = panel.and_then(|p| self.pool.panel(p)) {
            view.on_context_menu(&mut menu);
        }
        menu.add_separator();

        let mut maximize = MenuItem::action("Maximize", MenuAction::ToggleMaximize { group, index })
            .enabled(is_overlay || self.is_in_main_root(group));
        if self.maximized.is_some() {
            maximize = maximize.checked(true);
        }
        menu.push(maximize);
        menu.push(
            MenuItem::action("Close", MenuAction::CloseTab { group, index })
                .enabled(self.can_close_tab(group, index)),
        );
        menu.add_separator();

        let entries = self
            .pool
            .factories()
            .iter()
            .map(|(panel_type, factory)| {
                let taken = factory.is_unique() && self.pool.has_visible_window(panel_type);
                MenuItem::action(factory.title(), MenuAction::AddTab { group, panel_type })
                    .enabled(!taken)
            })
            .collect();
        menu.push(MenuItem::submenu("Open", entries).enabled(!is_overlay));
        Some(menu)
    }

    // ========================================================================
    // Invariants
    // ========================================================================

    /// Check the tree and root set (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        self.tree.assert_invariants();
        for (i, entry) in self.roots.iter().enumerate() {
            assert!(
                self.tree.contains(entry.node),
                "root {} points at missing node {:?}",
                i,
                entry.node
            );
            assert!(self.tree.parent(entry.node).is_none(), "root {} has a parent", i);
            assert!(
                i == 0 || entry.floating().is_some(),
                "only root 0 may be embedded"
            );
            assert!(
                self.tree.split(entry.node).is_some_and(|s| !s.is_empty()),
                "root {} is empty",
                i
            );
        }
        if self.drag.is_idle() {
            for group in self.tree.all_tab_groups() {
                let Some(tabs) = self.tree.tab_group(group) else {
                    continue;
                };
                if self.maximized.is_some_and(|m| m.group == group) {
                    continue;
                }
                assert!(tabs.is_in_sync(), "group {:?} out of sync at rest", group);
            }
        }
    }
}
