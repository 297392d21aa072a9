//! Root set - the ordered list of top-level dock trees
//!
//! Entry 0 is the main root embedded in the host's client area. Every other
//! entry is hosted by a floating surface that lives exactly as long as its
//! root does.

use crate::geometry::Rect;

use super::tree::NodeId;

/// Unique identifier for a floating top-level surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub u64);

/// A floating top-level window hosting one root
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingSurface {
    pub id: SurfaceId,
    /// Client area in screen coordinates (excludes decoration)
    pub geometry: Rect,
    /// False when the first panel placed in it cannot be closed
    pub closable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Surface {
    /// The host's own client area
    Embedded,
    Floating(FloatingSurface),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RootEntry {
    pub node: NodeId,
    pub surface: Surface,
}

impl RootEntry {
    pub fn floating(&self) -> Option<&FloatingSurface> {
        match &self.surface {
            Surface::Floating(surface) => Some(surface),
            Surface::Embedded => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RootSet {
    entries: Vec<RootEntry>,
    next_surface_id: u64,
}

impl RootSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RootEntry> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&RootEntry> {
        self.entries.get(index)
    }

    /// The embedded root at index 0, if one is installed
    pub fn main(&self) -> Option<NodeId> {
        self.entries
            .first()
            .filter(|e| e.surface == Surface::Embedded)
            .map(|e| e.node)
    }

    pub fn is_main(&self, node: NodeId) -> bool {
        self.main() == Some(node)
    }

    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.entries.iter().position(|e| e.node == node)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.index_of(node).is_some()
    }

    pub fn entry_for_surface(&self, surface: SurfaceId) -> Option<&RootEntry> {
        self.entries
            .iter()
            .find(|e| e.floating().is_some_and(|f| f.id == surface))
    }

    pub fn surface_mut(&mut self, surface: SurfaceId) -> Option<&mut FloatingSurface> {
        self.entries.iter_mut().find_map(|e| match &mut e.surface {
            Surface::Floating(f) if f.id == surface => Some(f),
            _ => None,
        })
    }

    /// Floating surfaces in stacking order, bottom first
    pub fn floating(&self) -> impl Iterator<Item = (&RootEntry, &FloatingSurface)> {
        self.entries
            .iter()
            .filter_map(|e| e.floating().map(|f| (e, f)))
    }

    /// Install the embedded main root at index 0, replacing any previous one
    pub fn set_main(&mut self, node: NodeId) {
        let entry = RootEntry {
            node,
            surface: Surface::Embedded,
        };
        match self.entries.first() {
            Some(first) if first.surface == Surface::Embedded => self.entries[0] = entry,
            _ => self.entries.insert(0, entry),
        }
    }

    /// Append a floating root; returns the new surface's id
    pub fn push_floating(&mut self, node: NodeId, geometry: Rect, closable: bool) -> SurfaceId {
        self.next_surface_id += 1;
        let id = SurfaceId(self.next_surface_id);
        self.entries.push(RootEntry {
            node,
            surface: Surface::Floating(FloatingSurface {
                id,
                geometry,
                closable,
            }),
        });
        id
    }

    /// Point an entry at a new root node, keeping its index and surface
    pub fn replace_root(&mut self, old: NodeId, new: NodeId) -> bool {
        match self.entries.iter_mut().find(|e| e.node == old) {
            Some(entry) => {
                entry.node = new;
                true
            }
            None => false,
        }
    }

    /// Remove a floating root's entry. The main root is never removed.
    pub fn remove(&mut self, node: NodeId) -> Option<RootEntry> {
        let index = self.index_of(node)?;
        if index == 0 && self.entries[0].surface == Surface::Embedded {
            debug_assert!(false, "main root {:?} cannot be removed", node);
            return None;
        }
        Some(self.entries.remove(index))
    }

    /// Drop every entry, returning the floating surfaces that must close
    pub fn clear(&mut self) -> Vec<SurfaceId> {
        let closed = self.floating().map(|(_, f)| f.id).collect();
        self.entries.clear();
        closed
    }
}
