//! Drag preview geometry

use crate::geometry::{Point, Rect, Size};

use super::region::DockRegion;

/// What the host should draw while a drag is in progress.
///
/// Tab-bar previews need no overlay: the temp tab lives in the target group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPreview {
    #[default]
    Hidden,
    /// Translucent rectangle where the docked group would land
    Dock(Rect),
    /// Miniature window that would become a floating surface
    Float(Rect),
}

impl DragPreview {
    pub fn rect(&self) -> Option<Rect> {
        match *self {
            DragPreview::Hidden => None,
            DragPreview::Dock(r) | DragPreview::Float(r) => Some(r),
        }
    }
}

/// Part of `target` a group docked in `region` would take.
///
/// A third of the target along the region's axis. At a root the preview is
/// capped at `root_hint`. Returns `None` for the central region.
pub fn dock_preview_rect(
    target: Rect,
    region: DockRegion,
    at_root: bool,
    root_hint: i32,
) -> Option<Rect> {
    let mut r = target;
    match region {
        DockRegion::Top => {
            r.height = target.height / 3;
            if at_root && r.height > root_hint {
                r.height = root_hint;
            }
        }
        DockRegion::Left => {
            r.width = target.width / 3;
            if at_root && r.width > root_hint {
                r.width = root_hint;
            }
        }
        DockRegion::Right => {
            let left = target.x + target.width * 2 / 3;
            r.x = left;
            r.width = target.right() - left;
            if at_root && r.width > root_hint {
                r.x = target.right() - root_hint;
                r.width = root_hint;
            }
        }
        DockRegion::Bottom => {
            let top = target.y + target.height * 2 / 3;
            r.y = top;
            r.height = target.bottom() - top;
            if at_root && r.height > root_hint {
                r.y = target.bottom() - root_hint;
                r.height = root_hint;
            }
        }
        DockRegion::Central => return None,
    }
    Some(r)
}

/// Size of the floating preview for a source group of `source` size.
///
/// Sources smaller than `min_extent` keep their size. Otherwise the size is
/// scaled toward `optimum`, averaging two ratios so very elongated sources
/// keep some of their aspect.
pub fn float_template_size(source: Size, min_extent: i32, optimum: i32) -> Size {
    let (w, h) = (source.width, source.height);
    if w < min_extent || h < min_extent {
        return source;
    }

    let (wf, hf, of) = (w as f32, h as f32, optimum as f32);
    let ratio = if w > optimum && h > optimum {
        (of / wf + of / hf) * 0.5
    } else if w > h {
        (of / wf + hf / of) * 0.5
    } else {
        (of / hf + wf / of) * 0.5
    };

    Size::new((wf * ratio) as i32, (hf * ratio) as i32)
}

/// Floating preview centered on the pointer and kept on screen
pub fn float_preview_rect(pos: Point, size: Size, screen: Rect) -> Rect {
    Rect::centered_at(pos, size).clamped_into(screen)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_preview_is_capped() {
        let target = Rect::new(0, 0, 900, 600);
        let left = dock_preview_rect(target, DockRegion::Left, true, 200);
        assert_eq!(left, Some(Rect::new(0, 0, 200, 600)));
        let right = dock_preview_rect(target, DockRegion::Right, true, 200);
        assert_eq!(right, Some(Rect::new(700, 0, 200, 600)));
        let child = dock_preview_rect(target, DockRegion::Bottom, false, 200);
        assert_eq!(child, Some(Rect::new(0, 400, 900, 200)));
    }

    #[test]
    fn test_template_size_scales_large_sources() {
        let size = float_template_size(Size::new(600, 600), 100, 300);
        assert_eq!(size, Size::new(300, 300));
        let small = float_template_size(Size::new(80, 600), 100, 300);
        assert_eq!(small, Size::new(80, 600));
    }
}
