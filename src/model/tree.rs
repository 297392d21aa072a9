//! Dock tree - arena of split containers and tab groups
//!
//! Nodes live in a flat map keyed by [`NodeId`] and carry a non-owning parent
//! link. Structural edits go through the tree so parent links and container
//! proportions never disagree. Removal is explicit: [`DockTree::remove_node`]
//! detaches a subtree and collapses every container it leaves empty.

use std::collections::HashMap;

use crate::geometry::{Orientation, Point, Rect, Size};
use crate::panel::PanelId;

use super::splitter::{SplitContainer, SplitMetrics};
use super::tab_group::TabGroup;

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for a node of the dock tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

// ============================================================================
// Nodes
// ============================================================================

/// A node is either a container or a leaf tab group
#[derive(Debug, Clone)]
pub enum LayoutNode {
    Split(SplitContainer),
    Tabs(TabGroup),
}

#[derive(Debug, Clone)]
pub struct Node {
    pub parent: Option<NodeId>,
    /// Set by [`DockTree::layout`]
    pub rect: Rect,
    pub layout: LayoutNode,
}

/// Result of [`DockTree::remove_node`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Removal {
    /// Containers destroyed because they became empty, innermost first
    pub destroyed: Vec<NodeId>,
    /// A parentless container that became empty and was destroyed
    pub emptied_root: Option<NodeId>,
}

// ============================================================================
// Tree
// ============================================================================

#[derive(Debug, Clone)]
pub struct DockTree {
    nodes: HashMap<NodeId, Node>,
    next_node_id: u64,
    pub metrics: SplitMetrics,
}

impl Default for DockTree {
    fn default() -> Self {
        Self::new(SplitMetrics::default())
    }
}

impl DockTree {
    pub fn new(metrics: SplitMetrics) -> Self {
        Self {
            nodes: HashMap::new(),
            next_node_id: 1,
            metrics,
        }
    }

    fn insert_node(&mut self, layout: LayoutNode) -> NodeId {
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;
        self.nodes.insert(
            id,
            Node {
                parent: None,
                rect: Rect::default(),
                layout,
            },
        );
        id
    }

    pub fn create_split(&mut self, orientation: Orientation) -> NodeId {
        self.insert_node(LayoutNode::Split(SplitContainer::new(orientation)))
    }

    pub fn create_tab_group(&mut self) -> NodeId {
        self.insert_node(LayoutNode::Tabs(TabGroup::new()))
    }

    /// Drop every node
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn rect(&self, id: NodeId) -> Option<Rect> {
        self.nodes.get(&id).map(|n| n.rect)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    pub fn split(&self, id: NodeId) -> Option<&SplitContainer> {
        match &self.nodes.get(&id)?.layout {
            LayoutNode::Split(split) => Some(split),
            LayoutNode::Tabs(_) => None,
        }
    }

    pub fn split_mut(&mut self, id: NodeId) -> Option<&mut SplitContainer> {
        match &mut self.nodes.get_mut(&id)?.layout {
            LayoutNode::Split(split) => Some(split),
            LayoutNode::Tabs(_) => None,
        }
    }

    pub fn tab_group(&self, id: NodeId) -> Option<&TabGroup> {
        match &self.nodes.get(&id)?.layout {
            LayoutNode::Tabs(group) => Some(group),
            LayoutNode::Split(_) => None,
        }
    }

    pub fn tab_group_mut(&mut self, id: NodeId) -> Option<&mut TabGroup> {
        match &mut self.nodes.get_mut(&id)?.layout {
            LayoutNode::Tabs(group) => Some(group),
            LayoutNode::Split(_) => None,
        }
    }

    pub fn is_tab_group(&self, id: NodeId) -> bool {
        self.tab_group(id).is_some()
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.split(id).map(|s| s.children.as_slice()).unwrap_or(&[])
    }

    /// Index of `id` within its parent container
    pub fn index_in_parent(&self, id: NodeId) -> Option<(NodeId, usize)> {
        let parent = self.parent(id)?;
        let index = self.split(parent)?.index_of(id)?;
        Some((parent, index))
    }

    /// Topmost ancestor of `id` (itself when parentless)
    pub fn root_of(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            current = parent;
        }
        current
    }

    /// Tab groups under `root` in depth-first, left-to-right order
    pub fn tab_groups_under(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_groups(root, &mut out);
        out
    }

    fn collect_groups(&self, id: NodeId, out: &mut Vec<NodeId>) {
        match self.nodes.get(&id).map(|n| &n.layout) {
            Some(LayoutNode::Tabs(_)) => out.push(id),
            Some(LayoutNode::Split(split)) => {
                for &child in &split.children {
                    self.collect_groups(child, out);
                }
            }
            None => {}
        }
    }

    /// Every tab group in the arena, in id order
    pub fn all_tab_groups(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self
            .nodes
            .iter()
            .filter(|(_, n)| matches!(n.layout, LayoutNode::Tabs(_)))
            .map(|(&id, _)| id)
            .collect();
        ids.sort();
        ids
    }

    /// Group and index holding `panel`, searching under `root`
    pub fn find_panel(&self, root: NodeId, panel: PanelId) -> Option<(NodeId, usize)> {
        self.tab_groups_under(root).into_iter().find_map(|g| {
            self.tab_group(g)
                .and_then(|group| group.index_of(panel))
                .map(|i| (g, i))
        })
    }

    /// Innermost tab group under `root` whose rectangle contains `p`
    pub fn group_at(&self, root: NodeId, p: Point) -> Option<NodeId> {
        self.tab_groups_under(root)
            .into_iter()
            .find(|&g| self.rect(g).is_some_and(|r| r.contains(p)))
    }

    // ========================================================================
    // Minimum sizes
    // ========================================================================

    pub fn minimum_size(&self, id: NodeId) -> Size {
        match self.nodes.get(&id).map(|n| &n.layout) {
            Some(LayoutNode::Tabs(_)) => Size::new(
                self.metrics.widget_min_extent,
                self.metrics.widget_min_extent,
            ),
            Some(LayoutNode::Split(split)) => {
                let child_mins: Vec<Size> = split
                    .children
                    .iter()
                    .map(|&c| self.minimum_size(c))
                    .collect();
                split.minimum_size(&child_mins, &self.metrics)
            }
            None => Size::default(),
        }
    }

    /// Minimum extents of a container's children along its axis
    pub fn child_minimums(&self, split: NodeId) -> Vec<i32> {
        let Some(container) = self.split(split) else {
            return Vec::new();
        };
        container
            .children
            .iter()
            .map(|&c| container.orientation.extent_of(self.minimum_size(c)))
            .collect()
    }

    /// Child extents of a container along its axis, from its current rectangle
    pub fn sizes(&self, split: NodeId) -> Vec<i32> {
        let mins = self.child_minimums(split);
        match (self.split(split), self.rect(split)) {
            (Some(container), Some(rect)) => container.sizes(rect, &self.metrics, &mins),
            _ => Vec::new(),
        }
    }

    pub fn update_sizes(&mut self, split: NodeId, sizes: &[i32]) {
        if let Some(container) = self.split_mut(split) {
            container.update_sizes(sizes);
        }
    }

    pub fn set_orientation(&mut self, split: NodeId, orientation: Orientation) {
        if let Some(container) = self.split_mut(split) {
            container.set_orientation(orientation);
        }
    }

    // ========================================================================
    // Structure
    // ========================================================================

    /// Insert a parentless node into a container at `index` (clamped)
    pub fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId) -> Option<usize> {
        debug_assert!(
            self.parent(child).is_none(),
            "node {:?} must be detached before insertion",
            child
        );
        if !self.contains(child) {
            return None;
        }
        let mins = self.child_minimums(parent);
        let bounds = self.rect(parent)?;
        let metrics = self.metrics;
        let index = self
            .split_mut(parent)?
            .insert_child(index, child, bounds, &metrics, &mins);
        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = Some(parent);
        }
        Some(index)
    }

    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Option<usize> {
        let index = self.children(parent).len();
        self.insert_child(parent, index, child)
    }

    /// Swap the child at `index` of `parent` for the parentless `new_child`.
    ///
    /// The old child keeps its subtree but loses its parent link.
    pub fn replace_child(&mut self, parent: NodeId, index: usize, new_child: NodeId) -> Option<NodeId> {
        debug_assert!(self.parent(new_child).is_none());
        let old = self.split_mut(parent)?.replace_child(index, new_child)?;
        if let Some(node) = self.nodes.get_mut(&old) {
            node.parent = None;
        }
        if let Some(node) = self.nodes.get_mut(&new_child) {
            node.parent = Some(parent);
        }
        Some(old)
    }

    /// Unlink `id` from its parent without collapsing anything.
    ///
    /// Returns the former parent and index.
    pub fn detach(&mut self, id: NodeId) -> Option<(NodeId, usize)> {
        let parent = self.parent(id)?;
        let mins = self.child_minimums(parent);
        let bounds = self.rect(parent).unwrap_or_default();
        let metrics = self.metrics;
        let index = self
            .split_mut(parent)?
            .remove_child(id, bounds, &metrics, &mins)?;
        if let Some(node) = self.nodes.get_mut(&id) {
            node.parent = None;
        }
        Some((parent, index))
    }

    /// Detach `id` and destroy every container that becomes empty as a result.
    ///
    /// The detached subtree itself stays in the arena for the caller to
    /// re-graft or [`destroy_subtree`](Self::destroy_subtree).
    pub fn remove_node(&mut self, id: NodeId) -> Removal {
        let mut removal = Removal::default();
        let mut current = self.detach(id).map(|(parent, _)| parent);

        while let Some(container) = current {
            let is_empty = self.split(container).is_some_and(|s| s.is_empty());
            if !is_empty {
                break;
            }
            current = self.detach(container).map(|(parent, _)| parent);
            if current.is_none() {
                removal.emptied_root = Some(container);
            }
            self.nodes.remove(&container);
            removal.destroyed.push(container);
        }

        removal
    }

    /// Remove `id` and all its descendants from the arena.
    ///
    /// Returns the panels that were held by destroyed tab groups.
    pub fn destroy_subtree(&mut self, id: NodeId) -> Vec<PanelId> {
        if self.parent(id).is_some() {
            self.detach(id);
        }
        let mut panels = Vec::new();
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            match self.nodes.remove(&next).map(|n| n.layout) {
                Some(LayoutNode::Split(split)) => stack.extend(split.children),
                Some(LayoutNode::Tabs(group)) => panels.extend_from_slice(group.panels()),
                None => {}
            }
        }
        panels
    }

    // ========================================================================
    // Layout
    // ========================================================================

    /// Assign `rect` to `id` and lay out its descendants by proportion
    pub fn layout(&mut self, id: NodeId, rect: Rect) {
        let Some(node) = self.nodes.get_mut(&id) else {
            return;
        };
        node.rect = rect;
        if self.split(id).is_none() {
            return;
        }

        let mins = self.child_minimums(id);
        let metrics = self.metrics;
        let Some(container) = self.split_mut(id) else {
            return;
        };
        let slots = crate::geometry::rects_from(
            container.effective_proportions(),
            rect,
            container.orientation,
            metrics.divider_extent,
            &mins,
        );
        for (divider, slot) in container.dividers.iter_mut().zip(slots.iter().skip(1).step_by(2)) {
            divider.rect = *slot;
        }
        let children = container.children.clone();
        for (child, slot) in children.into_iter().zip(slots.into_iter().step_by(2)) {
            self.layout(child, slot);
        }
    }

    /// Container and divider index whose divider rectangle contains `p`
    pub fn divider_at(&self, root: NodeId, p: Point) -> Option<(NodeId, usize)> {
        let container = self.split(root)?;
        if let Some(i) = container.dividers.iter().position(|d| d.rect.contains(p)) {
            return Some((root, i));
        }
        container
            .children
            .iter()
            .find_map(|&child| self.divider_at(child, p))
    }

    /// Container whose divider is being dragged, if any
    pub fn divider_drag_owner(&self) -> Option<NodeId> {
        self.nodes.iter().find_map(|(&id, node)| match &node.layout {
            LayoutNode::Split(split) if split.divider_drag.is_some() => Some(id),
            _ => None,
        })
    }

    /// Run a divider gesture step on `split` with its current geometry
    pub fn with_divider<R>(
        &mut self,
        split: NodeId,
        f: impl FnOnce(&mut SplitContainer, Rect, &SplitMetrics, &[i32]) -> R,
    ) -> Option<R> {
        let mins = self.child_minimums(split);
        let bounds = self.rect(split)?;
        let metrics = self.metrics;
        let container = self.split_mut(split)?;
        Some(f(container, bounds, &metrics, &mins))
    }

    // ========================================================================
    // Invariants
    // ========================================================================

    /// Check parent links and container proportions (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        for (&id, node) in &self.nodes {
            if let Some(parent) = node.parent {
                let holds = self
                    .split(parent)
                    .is_some_and(|s| s.children.contains(&id));
                assert!(holds, "parent {:?} does not list child {:?}", parent, id);
            }
            if let LayoutNode::Split(split) = &node.layout {
                assert_eq!(
                    split.proportions.len(),
                    split.children.len(),
                    "container {:?} proportion count",
                    id
                );
                assert_eq!(
                    split.dividers.len(),
                    split.children.len().saturating_sub(1),
                    "container {:?} divider count",
                    id
                );
                if !split.children.is_empty() {
                    let sum: f32 = split.proportions.iter().sum();
                    assert!(
                        (sum - 1.0).abs() < 1e-3,
                        "container {:?} proportions sum to {}",
                        id,
                        sum
                    );
                    assert!(split.proportions.iter().all(|&p| p > 0.0));
                }
                for &child in &split.children {
                    assert_eq!(
                        self.parent(child),
                        Some(id),
                        "child {:?} has a stale parent link",
                        child
                    );
                }
            }
        }
    }
}
