//! Split container - ordered children along one axis, separated by dividers
//!
//! The container only knows its children's ids and proportions. Anything
//! that needs the children's rectangles or minimums gets them passed in by
//! [`DockTree`](super::DockTree), which owns the nodes.

use crate::geometry::{
    self, normalized, proportions_from, rects_from, sizes_for_drag, sizes_for_insertion,
    sizes_for_removal, Orientation, Point, Rect, Size,
};

use super::tree::NodeId;

/// Sizing rules shared by every container of a tree
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitMetrics {
    pub divider_extent: i32,
    /// Floor used when reclaiming space on insert and on divider drags
    pub min_child_extent: i32,
    /// Size hint for a newly inserted child
    pub preferred_extent: i32,
    /// Minimum of a panel along either axis
    pub widget_min_extent: i32,
    /// Apply divider drags immediately rather than on release
    pub live_resize: bool,
}

impl Default for SplitMetrics {
    fn default() -> Self {
        Self {
            divider_extent: 4,
            min_child_extent: 200,
            preferred_extent: 200,
            widget_min_extent: 100,
            live_resize: false,
        }
    }
}

/// The bar between two adjacent children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Divider {
    pub orientation: Orientation,
    pub rect: Rect,
}

/// In-flight divider drag
#[derive(Debug, Clone, PartialEq)]
pub struct DividerDrag {
    pub divider: usize,
    /// Baseline the current delta is measured from
    start: Point,
    last: Point,
    moving_forward: bool,
    live: bool,
    /// Proportions computed by the latest move, not yet committed
    pending: Option<Vec<f32>>,
}

#[derive(Debug, Clone)]
pub struct SplitContainer {
    pub orientation: Orientation,
    pub children: Vec<NodeId>,
    /// One entry per child, summing to 1.0
    pub proportions: Vec<f32>,
    pub dividers: Vec<Divider>,
    pub divider_drag: Option<DividerDrag>,
    /// Indicator shown instead of resizing when live resize is off
    pub floating_divider: Option<Rect>,
}

impl SplitContainer {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            children: Vec::new(),
            proportions: Vec::new(),
            dividers: Vec::new(),
            divider_drag: None,
            floating_divider: None,
        }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn index_of(&self, child: NodeId) -> Option<usize> {
        self.children.iter().position(|&c| c == child)
    }

    /// Interleaved child/divider rectangles for `bounds`
    pub fn slot_rects(&self, bounds: Rect, metrics: &SplitMetrics, child_minimums: &[i32]) -> Vec<Rect> {
        rects_from(
            &self.proportions,
            bounds,
            self.orientation,
            metrics.divider_extent,
            child_minimums,
        )
    }

    /// Current child extents along the split axis
    pub fn sizes(&self, bounds: Rect, metrics: &SplitMetrics, child_minimums: &[i32]) -> Vec<i32> {
        geometry::child_extents(
            &self.slot_rects(bounds, metrics, child_minimums),
            self.orientation,
        )
    }

    /// Replace proportions from raw child extents.
    ///
    /// A zero or mismatched size list falls back to equal shares.
    pub fn update_sizes(&mut self, sizes: &[i32]) {
        let props = proportions_from(sizes, false);
        self.proportions = if props.len() == self.children.len() {
            normalized(&props)
        } else {
            geometry::equal_proportions(self.children.len())
        };
    }

    /// Insert `child` at `index`, reclaiming room from its siblings.
    ///
    /// `child_minimums` are the existing children's minimum extents.
    pub fn insert_child(
        &mut self,
        index: usize,
        child: NodeId,
        bounds: Rect,
        metrics: &SplitMetrics,
        child_minimums: &[i32],
    ) -> usize {
        let index = index.min(self.children.len());
        if self.children.is_empty() {
            self.children.push(child);
            self.proportions = vec![1.0];
            return 0;
        }

        let preferred = metrics.preferred_extent;
        let slots = self.slot_rects(bounds, metrics, child_minimums);
        let mut sizes = sizes_for_insertion(
            &slots,
            self.orientation,
            index,
            preferred + metrics.divider_extent,
            metrics.min_child_extent,
        );
        sizes.insert(index, preferred);

        self.children.insert(index, child);
        self.dividers.push(Divider {
            orientation: self.orientation,
            rect: Rect::default(),
        });
        self.update_sizes(&sizes);
        index
    }

    /// Remove `child`, donating its extent to a neighbour. Returns its former index.
    pub fn remove_child(
        &mut self,
        child: NodeId,
        bounds: Rect,
        metrics: &SplitMetrics,
        child_minimums: &[i32],
    ) -> Option<usize> {
        let index = self.index_of(child)?;
        let sizes = if self.children.len() > 1 {
            let slots = self.slot_rects(bounds, metrics, child_minimums);
            Some(sizes_for_removal(
                &slots,
                self.orientation,
                index,
                metrics.divider_extent,
            ))
        } else {
            None
        };

        self.children.remove(index);
        self.dividers.pop();
        self.divider_drag = None;
        self.floating_divider = None;
        match sizes {
            Some(sizes) => self.update_sizes(&sizes),
            None => self.proportions.clear(),
        }
        Some(index)
    }

    /// Swap the child at `index` for `new_child`, keeping its share
    pub fn replace_child(&mut self, index: usize, new_child: NodeId) -> Option<NodeId> {
        let slot = self.children.get_mut(index)?;
        Some(std::mem::replace(slot, new_child))
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        for divider in &mut self.dividers {
            divider.orientation = orientation;
        }
    }

    /// Minimum size: children's minimums summed along the axis plus dividers,
    /// the largest child minimum across it
    pub fn minimum_size(&self, child_minimums: &[Size], metrics: &SplitMetrics) -> Size {
        let along: i32 = child_minimums
            .iter()
            .map(|s| self.orientation.extent_of(*s))
            .sum::<i32>()
            + (child_minimums.len().saturating_sub(1) as i32) * metrics.divider_extent;
        let across = child_minimums
            .iter()
            .map(|s| self.orientation.cross().extent_of(*s))
            .max()
            .unwrap_or(0)
            .max(metrics.widget_min_extent);
        self.orientation.size(along, across)
    }

    // ========================================================================
    // Divider drag
    // ========================================================================

    pub fn press_divider(&mut self, divider: usize, pos: Point, live: bool) -> bool {
        if divider >= self.dividers.len() {
            return false;
        }
        self.divider_drag = Some(DividerDrag {
            divider,
            start: pos,
            last: pos,
            moving_forward: true,
            live,
            pending: None,
        });
        true
    }

    /// Track a divider move.
    ///
    /// When the direction of travel reverses, the pending proportions become
    /// the baseline and the delta restarts from the reversal point. With live
    /// resize the pending proportions are applied at once. Otherwise only
    /// [`floating_divider`](Self::floating_divider) moves.
    pub fn move_divider(
        &mut self,
        pos: Point,
        bounds: Rect,
        metrics: &SplitMetrics,
        child_minimums: &[i32],
    ) -> bool {
        let Some(mut drag) = self.divider_drag.take() else {
            return false;
        };

        let orientation = self.orientation;
        let mut baseline = self.proportions.clone();
        if drag.live {
            let forward = orientation.coordinate(pos) > orientation.coordinate(drag.last);
            if forward != drag.moving_forward {
                if let Some(pending) = drag.pending.take() {
                    baseline = pending;
                    drag.start = drag.last;
                }
            }
            drag.moving_forward = forward;
        }

        let delta = orientation.coordinate(pos) - orientation.coordinate(drag.start);
        let slots = rects_from(
            &baseline,
            bounds,
            orientation,
            metrics.divider_extent,
            child_minimums,
        );
        let sizes = sizes_for_drag(
            &slots,
            orientation,
            drag.divider,
            delta,
            metrics.min_child_extent,
            child_minimums,
        );
        let pending = normalized(&proportions_from(&sizes, false));

        if drag.live {
            self.proportions = baseline;
            self.floating_divider = None;
        } else {
            let preview = rects_from(
                &pending,
                bounds,
                orientation,
                metrics.divider_extent,
                child_minimums,
            );
            self.floating_divider = preview.get(2 * drag.divider + 1).copied();
        }

        drag.pending = Some(pending);
        drag.last = pos;
        self.divider_drag = Some(drag);
        true
    }

    /// Proportions to render with: pending ones during a live drag
    pub fn effective_proportions(&self) -> &[f32] {
        match &self.divider_drag {
            Some(DividerDrag {
                live: true,
                pending: Some(pending),
                ..
            }) if pending.len() == self.children.len() => pending.as_slice(),
            _ => self.proportions.as_slice(),
        }
    }

    /// Commit the last computed proportions
    pub fn release_divider(&mut self) -> bool {
        let Some(drag) = self.divider_drag.take() else {
            return false;
        };
        self.floating_divider = None;
        if let Some(pending) = drag.pending {
            if pending.len() == self.children.len() {
                self.proportions = pending;
            }
        }
        true
    }
}
