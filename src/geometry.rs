//! Proportional geometry for split containers
//!
//! Everything here works in integer pixels along one axis. A container with
//! `N` children is laid out as `2N - 1` interleaved slots:
//! child, divider, child, divider, ..., child.
//! Children occupy the even slots and dividers the odd ones.

use serde::{Deserialize, Serialize};

// ============================================================================
// Primitives
// ============================================================================

/// A point in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Sum of absolute components, used for drag thresholds
    pub fn manhattan_length(&self) -> i32 {
        self.x.abs() + self.y.abs()
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Width and height in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Component-wise maximum
    pub fn expanded_to(&self, other: Size) -> Size {
        Size::new(self.width.max(other.width), self.height.max(other.height))
    }
}

/// Rectangle with an inclusive origin and exclusive far edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of `size` whose center is `center`
    pub fn centered_at(center: Point, size: Size) -> Self {
        Self::new(
            center.x - size.width / 2,
            center.y - size.height / 2,
            size.width,
            size.height,
        )
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Point relative to this rectangle's origin
    pub fn to_local(&self, p: Point) -> Point {
        p - self.origin()
    }

    /// Grow (positive) or shrink (negative) every edge by `amount`
    pub fn inflated(&self, amount: i32) -> Rect {
        Rect::new(
            self.x - amount,
            self.y - amount,
            self.width + 2 * amount,
            self.height + 2 * amount,
        )
    }

    /// Move so the rectangle lies inside `bounds` where possible.
    ///
    /// A rectangle larger than `bounds` is pinned to its top-left corner.
    pub fn clamped_into(&self, bounds: Rect) -> Rect {
        if bounds.is_empty() {
            return *self;
        }
        let mut r = *self;
        if r.right() > bounds.right() {
            r.x = bounds.right() - r.width;
        }
        if r.bottom() > bounds.bottom() {
            r.y = bounds.bottom() - r.height;
        }
        r.x = r.x.max(bounds.x);
        r.y = r.y.max(bounds.y);
        r
    }
}

// ============================================================================
// Orientation
// ============================================================================

/// Split axis of a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Children arranged left-to-right
    #[default]
    Horizontal,
    /// Children arranged top-to-bottom
    Vertical,
}

impl Orientation {
    /// Code used in layout documents
    pub fn code(self) -> u8 {
        match self {
            Orientation::Horizontal => 0,
            Orientation::Vertical => 1,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Orientation::Horizontal),
            1 => Some(Orientation::Vertical),
            _ => None,
        }
    }

    pub fn cross(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Length of `rect` along this axis
    pub fn extent(self, rect: Rect) -> i32 {
        self.extent_of(rect.size())
    }

    pub fn extent_of(self, size: Size) -> i32 {
        match self {
            Orientation::Horizontal => size.width,
            Orientation::Vertical => size.height,
        }
    }

    /// Coordinate of `p` along this axis
    pub fn coordinate(self, p: Point) -> i32 {
        match self {
            Orientation::Horizontal => p.x,
            Orientation::Vertical => p.y,
        }
    }

    /// Slice of `bounds` starting at `offset` along this axis with the given extent
    pub fn slice(self, bounds: Rect, offset: i32, extent: i32) -> Rect {
        match self {
            Orientation::Horizontal => Rect::new(offset, bounds.y, extent, bounds.height),
            Orientation::Vertical => Rect::new(bounds.x, offset, bounds.width, extent),
        }
    }

    /// Build a size from an extent along this axis and one across it
    pub fn size(self, along: i32, across: i32) -> Size {
        match self {
            Orientation::Horizontal => Size::new(along, across),
            Orientation::Vertical => Size::new(across, along),
        }
    }
}

impl Serialize for Orientation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for Orientation {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = i64::deserialize(deserializer)?;
        Orientation::from_code(code)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid orientation {}", code)))
    }
}

// ============================================================================
// Proportional sizing
// ============================================================================

/// Normalize raw sizes into proportions for the child slots only.
///
/// With `includes_divider_slots`, `sizes` alternates child/divider/child and
/// the odd entries are ignored. Returns an empty vec when the children sum
/// to zero.
pub fn proportions_from(sizes: &[i32], includes_divider_slots: bool) -> Vec<f32> {
    let children: Vec<i32> = if includes_divider_slots {
        sizes.iter().step_by(2).copied().collect()
    } else {
        sizes.to_vec()
    };

    let total: i64 = children.iter().map(|&s| s.max(0) as i64).sum();
    if total == 0 {
        return Vec::new();
    }
    children
        .iter()
        .map(|&s| s.max(0) as f32 / total as f32)
        .collect()
}

/// Allocate `bounds` among children by proportion.
///
/// Returns the interleaved `2N - 1` slot rectangles. Each child is clamped up
/// to its entry in `child_minimums`, so the result may overflow `bounds` when
/// the minimums do not fit.
pub fn rects_from(
    proportions: &[f32],
    bounds: Rect,
    orientation: Orientation,
    divider_extent: i32,
    child_minimums: &[i32],
) -> Vec<Rect> {
    let n = proportions.len();
    if n == 0 {
        return Vec::new();
    }

    let dividers = (n as i32 - 1) * divider_extent;
    let total = (orientation.extent(bounds) - dividers).max(0);
    let mut pos = orientation.coordinate(bounds.origin());
    let mut slots = Vec::with_capacity(2 * n - 1);

    for (i, &prop) in proportions.iter().enumerate() {
        if i > 0 {
            slots.push(orientation.slice(bounds, pos, divider_extent));
            pos += divider_extent;
        }
        let min = child_minimums.get(i).copied().unwrap_or(0);
        let extent = ((total as f32 * prop) as i32).max(min);
        slots.push(orientation.slice(bounds, pos, extent));
        pos += extent;
    }

    slots
}

/// Extents of every slot along `orientation`
pub fn slot_extents(slots: &[Rect], orientation: Orientation) -> Vec<i32> {
    slots.iter().map(|r| orientation.extent(*r)).collect()
}

/// Child extents (even slots) of an interleaved slot list
pub fn child_extents(slots: &[Rect], orientation: Orientation) -> Vec<i32> {
    slots
        .iter()
        .step_by(2)
        .map(|r| orientation.extent(*r))
        .collect()
}

/// Shrink existing children to make room for a child inserted at `insert_index`.
///
/// Visits child slots starting at `2 * insert_index` (clamped to the last
/// child) and wraps cyclically, taking from each child everything above
/// `min_extent` until `needed` is reclaimed. Stops after one full cycle even
/// when the need is not met. Returns the existing children's new extents.
pub fn sizes_for_insertion(
    slots: &[Rect],
    orientation: Orientation,
    insert_index: usize,
    needed: i32,
    min_extent: i32,
) -> Vec<i32> {
    let mut sizes = child_extents(slots, orientation);
    let n = sizes.len();
    if n == 0 {
        return sizes;
    }

    let start = insert_index.min(n - 1);
    let mut reclaimed = 0;
    for step in 0..n {
        if reclaimed >= needed {
            break;
        }
        let i = (start + step) % n;
        if sizes[i] > min_extent {
            let take = (sizes[i] - min_extent).min(needed - reclaimed);
            sizes[i] -= take;
            reclaimed += take;
        }
    }

    sizes
}

/// Child extents after removing child `removed_index`.
///
/// The removed child's extent plus one divider is donated to the next
/// sibling, or to the previous sibling when the last child is removed.
pub fn sizes_for_removal(
    slots: &[Rect],
    orientation: Orientation,
    removed_index: usize,
    divider_extent: i32,
) -> Vec<i32> {
    let mut sizes = child_extents(slots, orientation);
    if removed_index >= sizes.len() {
        return sizes;
    }

    let freed = sizes.remove(removed_index) + divider_extent;
    if sizes.is_empty() {
        return sizes;
    }
    let donee = removed_index.min(sizes.len() - 1);
    sizes[donee] += freed;
    sizes
}

/// Child extents after dragging divider `divider_index` by `delta`.
///
/// Only the two children adjacent to the divider change. The child the
/// divider moves toward shrinks down to `max(min_extent, its own minimum)`
/// and the other child grows by what was taken.
pub fn sizes_for_drag(
    slots: &[Rect],
    orientation: Orientation,
    divider_index: usize,
    delta: i32,
    min_extent: i32,
    child_minimums: &[i32],
) -> Vec<i32> {
    let mut sizes = child_extents(slots, orientation);
    if delta == 0 || divider_index + 1 >= sizes.len() {
        return sizes;
    }

    let (compress, expand) = if delta > 0 {
        (divider_index + 1, divider_index)
    } else {
        (divider_index, divider_index + 1)
    };

    let min = min_extent.max(child_minimums.get(compress).copied().unwrap_or(0));
    let available = (sizes[compress] - min).max(0);
    let take = available.min(delta.abs());
    sizes[compress] -= take;
    sizes[expand] += take;
    sizes
}

/// Rescale proportions to sum to one, keeping every entry positive
pub fn normalized(proportions: &[f32]) -> Vec<f32> {
    const FLOOR: f32 = 1e-4;

    if proportions.is_empty() {
        return Vec::new();
    }
    let floored: Vec<f32> = proportions
        .iter()
        .map(|p| if p.is_finite() { p.max(FLOOR) } else { FLOOR })
        .collect();
    let total: f32 = floored.iter().sum();
    floored.iter().map(|p| p / total).collect()
}

/// Equal proportions for `n` children
pub fn equal_proportions(n: usize) -> Vec<f32> {
    vec![1.0 / n as f32; n]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal_slots(extents: &[i32]) -> Vec<Rect> {
        let mut x = 0;
        extents
            .iter()
            .map(|&w| {
                let r = Rect::new(x, 0, w, 100);
                x += w;
                r
            })
            .collect()
    }

    #[test]
    fn test_proportions_skip_divider_slots() {
        let props = proportions_from(&[300, 4, 100], true);
        assert_eq!(props.len(), 2);
        assert!((props[0] - 0.75).abs() < 1e-6);
        assert!((props[1] - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_proportions_zero_sum_is_empty() {
        assert!(proportions_from(&[0, 4, 0], true).is_empty());
    }

    #[test]
    fn test_insertion_scan_wraps_and_terminates() {
        // Both children already at minimum: one full cycle, nothing reclaimed
        let slots = horizontal_slots(&[100, 4, 100]);
        let sizes = sizes_for_insertion(&slots, Orientation::Horizontal, 2, 500, 100);
        assert_eq!(sizes, vec![100, 100]);
    }

    #[test]
    fn test_insertion_takes_nearest_first() {
        let slots = horizontal_slots(&[300, 4, 300, 4, 300]);
        let sizes = sizes_for_insertion(&slots, Orientation::Horizontal, 1, 150, 100);
        assert_eq!(sizes, vec![300, 150, 300]);
    }

    #[test]
    fn test_normalized_floors_zero_entries() {
        let props = normalized(&[0.0, 1.0]);
        assert!(props[0] > 0.0);
        assert!((props.iter().sum::<f32>() - 1.0).abs() < 1e-5);
    }
}
