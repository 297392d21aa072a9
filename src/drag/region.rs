//! Dock region classification

use crate::geometry::{Orientation, Point, Rect, Size};

/// Where inside a target a drop would dock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DockRegion {
    Left,
    Top,
    Right,
    Bottom,
    Central,
}

impl DockRegion {
    /// Split axis needed to dock in this region
    pub fn axis(self) -> Option<Orientation> {
        match self {
            DockRegion::Left | DockRegion::Right => Some(Orientation::Horizontal),
            DockRegion::Top | DockRegion::Bottom => Some(Orientation::Vertical),
            DockRegion::Central => None,
        }
    }

    /// The new group goes before the target (left of or above it)
    pub fn is_leading(self) -> bool {
        matches!(self, DockRegion::Left | DockRegion::Top)
    }
}

/// Classify a point local to a rectangle of `size` by thirds.
///
/// The outer-left and outer-right thirds prefer LEFT/RIGHT but yield to
/// TOP/BOTTOM when the point is nearer that edge's corner diagonal. The two
/// sides use different comparisons; both are kept as-is.
pub fn classify_region(p: Point, size: Size) -> DockRegion {
    let (w, h) = (size.width, size.height);
    let in_left = p.x < w / 3;
    let in_right = p.x > w * 2 / 3;
    let in_top = p.y < h / 3;
    let in_bottom = p.y > h * 2 / 3;

    if in_left {
        if in_top && p.y < p.x {
            return DockRegion::Top;
        }
        if !in_top && in_bottom && h - p.y < p.x {
            return DockRegion::Bottom;
        }
        return DockRegion::Left;
    }

    if in_right {
        if in_top && p.y < w - p.x {
            return DockRegion::Top;
        }
        if !in_top && in_bottom && p.y > p.x {
            return DockRegion::Bottom;
        }
        return DockRegion::Right;
    }

    if in_top {
        DockRegion::Top
    } else if in_bottom {
        DockRegion::Bottom
    } else {
        DockRegion::Central
    }
}

/// Classify a screen point against a screen rectangle
pub fn region_in(rect: Rect, p: Point) -> DockRegion {
    classify_region(rect.to_local(p), rect.size())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_prefers_side_on_diagonal() {
        let size = Size::new(300, 300);
        assert_eq!(classify_region(Point::new(10, 10), size), DockRegion::Left);
        assert_eq!(classify_region(Point::new(50, 10), size), DockRegion::Top);
        assert_eq!(classify_region(Point::new(150, 150), size), DockRegion::Central);
    }

    #[test]
    fn test_right_third_uses_mirrored_comparisons() {
        let size = Size::new(300, 300);
        assert_eq!(classify_region(Point::new(290, 5), size), DockRegion::Top);
        assert_eq!(classify_region(Point::new(290, 150), size), DockRegion::Right);
        assert_eq!(classify_region(Point::new(250, 290), size), DockRegion::Bottom);
        assert_eq!(classify_region(Point::new(290, 250), size), DockRegion::Right);
    }
}
