//! Grafting - splicing a new tab group next to a drop target
//!
//! Child docking places the group beside a tab group and takes a third of
//! the target's extent. Root docking places it at one end of a root and
//! gives it a fixed size hint. When the container runs along the other axis
//! a new container is nested in, unless it holds a single child, in which
//! case its orientation is simply flipped.

use crate::drag::DockRegion;
use crate::geometry::Orientation;

use super::dock_area::DockArea;
use super::tree::NodeId;

impl DockArea {
    /// Dock the parentless group `new` beside the tab group `target`
    pub fn dock_at_group(&mut self, new: NodeId, target: NodeId, region: DockRegion) -> bool {
        let Some(axis) = region.axis() else {
            return false;
        };
        let Some((parent, index)) = self.tree.index_in_parent(target) else {
            return false;
        };
        let Some(target_rect) = self.tree.rect(target) else {
            return false;
        };
        let extent = axis.extent(target_rect);
        let new_extent = extent / 3;
        let rest = extent - new_extent;
        let leading = region.is_leading();

        self.flip_single_child(parent, axis);
        let Some(orientation) = self.tree.split(parent).map(|s| s.orientation) else {
            return false;
        };

        if orientation == axis {
            let mut sizes = self.tree.sizes(parent);
            let at = if leading { index } else { index + 1 };
            if self.tree.insert_child(parent, at, new).is_none() {
                return false;
            }
            // The new divider comes out of the target's share
            if let Some(size) = sizes.get_mut(index) {
                *size = (rest - self.config.divider_extent).max(0);
            }
            sizes.insert(at.min(sizes.len()), new_extent);
            self.tree.update_sizes(parent, &sizes);
        } else {
            let split = self.tree.create_split(axis);
            self.tree.replace_child(parent, index, split);
            let sizes = if leading {
                self.tree.add_child(split, new);
                self.tree.add_child(split, target);
                [new_extent, rest]
            } else {
                self.tree.add_child(split, target);
                self.tree.add_child(split, new);
                [rest, new_extent]
            };
            self.tree.update_sizes(split, &sizes);
        }

        tracing::debug!(target: "layout", ?new, ?target, ?region, "docked at group");
        true
    }

    /// Dock the parentless group `new` at one end of `root`.
    ///
    /// Returns the root node afterwards, which is new when the old root had
    /// to be nested under a fresh container. The root keeps its index and
    /// surface either way.
    pub fn dock_at_root(&mut self, new: NodeId, root: NodeId, region: DockRegion) -> Option<NodeId> {
        let axis = region.axis()?;
        if !self.roots.contains(root) {
            return None;
        }
        let leading = region.is_leading();
        let hint = self.config.root_dock_size_hint;
        let min = self.config.widget_min_extent;

        self.flip_single_child(root, axis);
        let orientation = self.tree.split(root)?.orientation;

        let result = if orientation == axis {
            let old = self.tree.sizes(root);
            let at = if leading { 0 } else { self.tree.children(root).len() };
            self.tree.insert_child(root, at, new)?;
            let sizes = recalc_root_sizes_after_add(&old, hint, min, leading);
            self.tree.update_sizes(root, &sizes);
            root
        } else {
            let rect = self.tree.rect(root).unwrap_or_default();
            let rest = (axis.extent(rect) - hint).max(1);
            let new_root = self.tree.create_split(axis);
            let sizes = if leading {
                self.tree.add_child(new_root, new);
                self.tree.add_child(new_root, root);
                [hint, rest]
            } else {
                self.tree.add_child(new_root, root);
                self.tree.add_child(new_root, new);
                [rest, hint]
            };
            self.tree.update_sizes(new_root, &sizes);
            self.roots.replace_root(root, new_root);
            self.tree.layout(new_root, rect);
            new_root
        };

        tracing::debug!(target: "layout", ?new, ?root, ?result, ?region, "docked at root");
        Some(result)
    }

    fn flip_single_child(&mut self, split: NodeId, axis: Orientation) {
        let flip = self
            .tree
            .split(split)
            .is_some_and(|s| s.len() == 1 && s.orientation != axis);
        if flip {
            self.tree.set_orientation(split, axis);
        }
    }
}

/// Child sizes of a root after adding an item at its head or tail.
///
/// Existing children give up space in order, never below `min`, until the
/// new item has `hint`. The new item gets what was reclaimed, at least `min`.
pub fn recalc_root_sizes_after_add(old: &[i32], hint: i32, min: i32, at_head: bool) -> Vec<i32> {
    let mut sizes = Vec::with_capacity(old.len() + 1);
    let mut reclaimed = 0;
    for &size in old {
        let decrease = (hint - reclaimed).min(size - min).max(0);
        sizes.push(size - decrease);
        reclaimed += decrease;
    }

    let new_item = reclaimed.max(min);
    if at_head {
        sizes.insert(0, new_item);
    } else {
        sizes.push(new_item);
    }
    sizes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recalc_takes_from_first_children() {
        assert_eq!(
            recalc_root_sizes_after_add(&[250, 400], 200, 100, false),
            vec![100, 350, 200]
        );
    }

    #[test]
    fn test_recalc_new_item_gets_at_least_min() {
        assert_eq!(
            recalc_root_sizes_after_add(&[120, 100], 200, 100, true),
            vec![100, 100, 100]
        );
    }
}
