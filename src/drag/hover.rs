//! Hover classification - what a dragged tab is over

use crate::geometry::Point;
use crate::model::{DockArea, NodeId};

use super::DragSession;

/// The four ways a drop can resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoverKind {
    Tab,
    DockAtChild,
    DockAtRoot,
    Float,
}

/// Hover kind together with its target node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTarget {
    /// Over the tab bar of a group
    Tab { group: NodeId },
    /// Over the content of a docked group
    DockAtChild { group: NodeId },
    /// Over the edge band of a root's surface
    DockAtRoot { root: NodeId },
    Float,
}

impl HoverTarget {
    pub fn kind(&self) -> HoverKind {
        match self {
            HoverTarget::Tab { .. } => HoverKind::Tab,
            HoverTarget::DockAtChild { .. } => HoverKind::DockAtChild,
            HoverTarget::DockAtRoot { .. } => HoverKind::DockAtRoot,
            HoverTarget::Float => HoverKind::Float,
        }
    }

    /// Target rectangle owner, for tab and child hovers
    pub fn group(&self) -> Option<NodeId> {
        match *self {
            HoverTarget::Tab { group } | HoverTarget::DockAtChild { group } => Some(group),
            _ => None,
        }
    }
}

/// Classify the pointer position of an ongoing drag.
///
/// A tab bar hit is kept while the pointer stays inside that bar. Otherwise
/// the topmost surface under the pointer decides: its tab bars, then the band
/// along its border, then group content. A single-tab source dropped on
/// itself, a panel that cannot close, and anything outside every surface
/// float.
pub fn classify(area: &DockArea, session: &DragSession, pos: Point) -> HoverTarget {
    if let Some(HoverTarget::Tab { group }) = session.hover {
        if area.tab_bar_rect(group).is_some_and(|bar| bar.contains(pos)) {
            return HoverTarget::Tab { group };
        }
    }

    if area.is_maximized() && area.main_area.contains(pos) {
        return HoverTarget::Float;
    }

    let Some(root) = area.root_at(pos) else {
        return HoverTarget::Float;
    };
    let group = area.tree.group_at(root, pos);

    if let Some(group) = group {
        if area.tab_bar_rect(group).is_some_and(|bar| bar.contains(pos)) {
            return HoverTarget::Tab { group };
        }
    }

    if !area.pool.can_close(session.source_panel) {
        return HoverTarget::Float;
    }

    if in_root_band(area, root, pos) || group.is_none() {
        return HoverTarget::DockAtRoot { root };
    }

    match group {
        Some(group) if group == session.source_group && is_single_panel(area, group) => {
            HoverTarget::Float
        }
        Some(group) => HoverTarget::DockAtChild { group },
        None => HoverTarget::Float,
    }
}

/// Pointer is near the border of the root's surface
fn in_root_band(area: &DockArea, root: NodeId, pos: Point) -> bool {
    let Some(surface) = area.surface_rect(root) else {
        return false;
    };
    let band = area.config.root_dock_band;
    let client = area.tree.rect(root).unwrap_or(surface);
    surface.inflated(band).contains(pos) && !client.inflated(-band).contains(pos)
}

fn is_single_panel(area: &DockArea, group: NodeId) -> bool {
    area.tree
        .tab_group(group)
        .is_some_and(|g| g.panel_count() <= 1)
}
