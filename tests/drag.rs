//! Tests for the tab drag controller

mod common;

use common::*;
use tabdock::drag::{DockRegion, DragPreview, HoverKind};
use tabdock::geometry::{Point, Rect};
use tabdock::messages::DragMsg;
use tabdock::model::{DockArea, NodeId};
use tabdock::Cmd;

/// Default area whose main group holds Console then Inspector
fn two_tab_area() -> (DockArea, NodeId) {
    let mut area = test_area();
    let group = main_group(&area);
    add_tabs(&mut area, group, inspector(), 1);
    (area, group)
}

fn labels(area: &DockArea, group: NodeId) -> Vec<String> {
    area.group(group).unwrap().labels().to_vec()
}

fn hover_kind(area: &DockArea) -> Option<HoverKind> {
    area.drag.session().map(|s| s.hover_kind())
}

// ============================================================================
// Arming and starting
// ============================================================================

#[test]
fn test_press_on_tab_selects_and_arms() {
    let (mut area, group) = two_tab_area();
    area.select_tab(group, 0);

    let tab = tab_center(&area, group, 1);
    send(&mut area, DragMsg::Press(tab));
    assert_eq!(area.group(group).unwrap().current_tab_index(), Some(1));
    assert!(!area.drag.is_idle());
    assert!(!area.drag.is_dragging());
}

#[test]
fn test_press_off_tab_bar_does_nothing() {
    let (mut area, _) = two_tab_area();
    send(&mut area, DragMsg::Press(Point::new(500, 400)));
    assert!(area.drag.is_idle());
}

#[test]
fn test_small_move_stays_armed() {
    let (mut area, group) = two_tab_area();
    let press = tab_center(&area, group, 1);
    start_drag(&mut area, press, press + Point::new(3, 2));
    assert!(!area.drag.is_dragging());
    assert_eq!(labels(&area, group).len(), 2);
}

#[test]
fn test_threshold_starts_session_and_detaches_label() {
    let (mut area, group) = two_tab_area();
    let tab = tab_center(&area, group, 1);
    start_drag(&mut area, tab, Point::new(500, 400));

    assert!(area.drag.is_dragging());
    assert!(area.drag.is_capturing());
    assert_eq!(labels(&area, group), vec!["Console".to_string()]);
    // Content stays until the drop
    assert_eq!(panels_of(&area, group).len(), 2);
    assert!(area.group(group).unwrap().is_dragging());
}

#[test]
fn test_last_tab_in_main_never_drags() {
    let mut area = test_area();
    let group = main_group(&area);
    let tab = tab_center(&area, group, 0);
    start_drag(&mut area, tab, Point::new(1500, 500));
    assert!(!area.drag.is_dragging());

    send(&mut area, DragMsg::Release(Point::new(1500, 500)));
    assert!(area.drag.is_idle());
    assert_eq!(area.roots.len(), 1);
    assert_eq!(panels_of(&area, group).len(), 1);
}

#[test]
fn test_disabled_drag_ignores_press() {
    let (mut area, group) = two_tab_area();
    area.set_drag_enabled(false);
    let tab = tab_center(&area, group, 1);
    send(&mut area, DragMsg::Press(tab));
    assert!(area.drag.is_idle());
}

// ============================================================================
// Hover classification
// ============================================================================

#[test]
fn test_hover_kinds() {
    let (mut area, group) = two_tab_area();
    let tab = tab_center(&area, group, 1);
    start_drag(&mut area, tab, Point::new(900, 400));
    assert_eq!(hover_kind(&area), Some(HoverKind::DockAtChild));
    assert_eq!(
        area.drag.preview,
        DragPreview::Dock(Rect::new(666, 0, 334, 800))
    );

    send(&mut area, DragMsg::Move(Point::new(5, 400)));
    assert_eq!(hover_kind(&area), Some(HoverKind::DockAtRoot));
    assert_eq!(
        area.drag.preview,
        DragPreview::Dock(Rect::new(0, 0, 200, 800))
    );

    send(&mut area, DragMsg::Move(Point::new(400, 10)));
    assert_eq!(hover_kind(&area), Some(HoverKind::Tab));
    assert_eq!(area.drag.preview, DragPreview::Hidden);
    assert!(area.group(group).unwrap().temp_tab().is_some());

    send(&mut area, DragMsg::Move(Point::new(1500, 500)));
    assert_eq!(hover_kind(&area), Some(HoverKind::Float));
    assert!(area.group(group).unwrap().temp_tab().is_none());
    let preview = area.drag.preview.rect().unwrap();
    assert!(preview.contains(Point::new(1500, 500)));
}

#[test]
fn test_temp_tab_follows_pointer_in_bar() {
    let (mut area, group) = two_tab_area();
    let tab = tab_center(&area, group, 1);
    start_drag(&mut area, tab, Point::new(400, 10));
    assert_eq!(labels(&area, group), vec!["Console", "Inspector"]);

    send(&mut area, DragMsg::Move(Point::new(10, 10)));
    assert_eq!(labels(&area, group), vec!["Inspector", "Console"]);
    assert_eq!(area.group(group).unwrap().temp_tab().unwrap().index, 0);
}

#[test]
fn test_positioned_insert_refused_while_dragging() {
    let (mut area, group) = two_tab_area();
    let tab = tab_center(&area, group, 1);
    start_drag(&mut area, tab, Point::new(10, 10));
    let extra = area.pool.new_window(console()).unwrap();

    assert_eq!(area.tabbed_view(extra, Some(group), Some(0)), None);
    assert_eq!(labels(&area, group), vec!["Inspector", "Console"]);
    assert_eq!(area.group(group).unwrap().temp_tab().unwrap().index, 0);

    send(&mut area, DragMsg::Release(Point::new(10, 10)));
    assert!(area.drag.is_idle());
    assert_eq!(labels(&area, group), vec!["Inspector", "Console"]);
    assert!(area.group(group).unwrap().is_in_sync());

    assert_eq!(area.tabbed_view(extra, Some(group), Some(0)), Some((group, 0)));
}

// ============================================================================
// Commits
// ============================================================================

#[test]
fn test_drop_outside_floats_centered_on_pointer() {
    let (mut area, group) = two_tab_area();
    let dragged = panels_of(&area, group)[1];
    let tab = tab_center(&area, group, 1);
    let cmds = flatten(drag_tab(
        &mut area,
        tab,
        Point::new(1500, 500),
    ));

    assert!(area.drag.is_idle());
    assert!(!area.drag.is_capturing());
    assert_eq!(area.roots.len(), 2);
    let surface = area.roots.get(1).unwrap().floating().unwrap().clone();
    // Source size, pushed back on screen with its title bar
    assert_eq!(surface.geometry, Rect::new(920, 100, 1000, 800));
    assert!(cmds.contains(&Cmd::OpenSurface(surface.id)));
    assert_eq!(cmds.last(), Some(&Cmd::Redraw));

    let floated = area.groups_in_root(1)[0];
    assert_eq!(panels_of(&area, floated), vec![dragged]);
    assert_eq!(labels(&area, group), vec!["Console"]);
    assert!(area.group(group).unwrap().is_in_sync());
}

#[test]
fn test_drop_on_group_content_docks_beside_it() {
    let (mut area, group) = two_tab_area();
    let dragged = panels_of(&area, group)[1];
    let tab = tab_center(&area, group, 1);
    drag_tab(&mut area, tab, Point::new(900, 400));

    let groups = area.groups_in_root(0);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0], group);
    assert_eq!(panels_of(&area, groups[1]), vec![dragged]);

    let left = area.tree.rect(group).unwrap();
    let right = area.tree.rect(groups[1]).unwrap();
    assert!(right.x > left.right());
    assert!(right.width < left.width);
    assert_eq!(area.roots.len(), 1);
}

#[test]
fn test_drop_on_root_band_docks_at_root_edge() {
    let (mut area, group) = two_tab_area();
    let dragged = panels_of(&area, group)[1];
    let tab = tab_center(&area, group, 1);
    drag_tab(&mut area, tab, Point::new(5, 400));

    let root = area.main_root().unwrap();
    let first = area.tree.children(root)[0];
    assert!(area.tree.is_tab_group(first));
    assert_eq!(panels_of(&area, first), vec![dragged]);
    let width = area.tree.rect(first).unwrap().width;
    assert!((150..=210).contains(&width), "width {}", width);
}

#[test]
fn test_drop_on_central_region_floats() {
    let (mut area, group) = two_tab_area();
    let other = dock_new_group(&mut area, group, DockRegion::Right);
    let center = area.tree.rect(other).unwrap().center();
    let tab = tab_center(&area, group, 1);
    drag_tab(&mut area, tab, center);

    assert_eq!(area.roots.len(), 2);
    assert_eq!(area.groups_in_root(0).len(), 2);
}

#[test]
fn test_drop_on_other_tab_bar_moves_tab() {
    let (mut area, group) = two_tab_area();
    let other = dock_new_group(&mut area, group, DockRegion::Right);
    let moved = panels_of(&area, group)[0];
    let target = panels_of(&area, other)[0];

    let to = tab_center(&area, other, 0);
    let tab = tab_center(&area, group, 0);
    drag_tab(&mut area, tab, to);

    assert_eq!(panels_of(&area, other), vec![moved, target]);
    let tabs = area.group(other).unwrap();
    assert_eq!(tabs.current_panel(), Some(moved));
    assert!(tabs.is_in_sync());
    assert_eq!(labels(&area, group), vec!["Inspector"]);
}

#[test]
fn test_single_tab_self_drop_floats_and_collapses_source() {
    let (mut area, group) = two_tab_area();
    let other = dock_new_group(&mut area, group, DockRegion::Right);
    let panel = panels_of(&area, other)[0];

    let content = area.content_rect(other).unwrap().center();
    let tab = tab_center(&area, other, 0);
    drag_tab(&mut area, tab, content);

    assert!(!area.tree.contains(other));
    assert_eq!(area.groups_in_root(0), vec![group]);
    assert_eq!(area.roots.len(), 2);
    assert_eq!(area.locate_panel(panel).map(|(g, _)| g), area.groups_in_root(1).first().copied());
}

#[test]
fn test_pinned_panel_always_floats() {
    let mut area = test_area();
    let group = main_group(&area);
    add_tabs(&mut area, group, pinned(), 1);

    let tab = tab_center(&area, group, 1);
    start_drag(&mut area, tab, Point::new(900, 400));
    assert_eq!(hover_kind(&area), Some(HoverKind::Float));
    send(&mut area, DragMsg::Release(Point::new(900, 400)));

    assert_eq!(area.roots.len(), 2);
    let surface = area.roots.get(1).unwrap().floating().unwrap().clone();
    assert!(!surface.closable);
    assert!(!area.close_surface(surface.id));
}

// ============================================================================
// Cancellation
// ============================================================================

#[test]
fn test_scenario_e_cancel_over_dock_target_rolls_back() {
    let (mut area, group) = two_tab_area();
    let before = panels_of(&area, group);
    let tab = tab_center(&area, group, 1);
    start_drag(&mut area, tab, Point::new(900, 400));
    assert_eq!(hover_kind(&area), Some(HoverKind::DockAtChild));

    send(&mut area, DragMsg::Cancel);
    assert!(area.drag.is_idle());
    assert_eq!(area.drag.preview, DragPreview::Hidden);
    assert_eq!(labels(&area, group), vec!["Console", "Inspector"]);
    assert_eq!(panels_of(&area, group), before);
    let tabs = area.group(group).unwrap();
    assert_eq!(tabs.current_tab_index(), Some(1));
    assert!(tabs.is_in_sync());
    assert!(!tabs.is_dragging());

    // The release that follows is inert
    send(&mut area, DragMsg::Release(Point::new(900, 400)));
    assert_eq!(area.groups_in_root(0), vec![group]);
    assert_eq!(area.roots.len(), 1);
}

#[test]
fn test_cancel_over_tab_is_deferred_then_drops() {
    let (mut area, group) = two_tab_area();
    let tab = tab_center(&area, group, 1);
    start_drag(&mut area, tab, Point::new(400, 10));

    send(&mut area, DragMsg::Cancel);
    assert!(area.drag.is_dragging());
    assert!(area.drag.session().unwrap().cancel_pending);

    send(&mut area, DragMsg::Release(Point::new(400, 10)));
    assert!(area.drag.is_idle());
    assert_eq!(labels(&area, group), vec!["Console", "Inspector"]);
    assert!(area.group(group).unwrap().is_in_sync());
}

#[test]
fn test_deferred_cancel_rolls_back_off_the_tab() {
    let (mut area, group) = two_tab_area();
    let before = panels_of(&area, group);
    let tab = tab_center(&area, group, 1);
    start_drag(&mut area, tab, Point::new(400, 10));
    send(&mut area, DragMsg::Cancel);

    send(&mut area, DragMsg::Move(Point::new(900, 400)));
    send(&mut area, DragMsg::Release(Point::new(900, 400)));

    assert!(area.drag.is_idle());
    assert_eq!(area.groups_in_root(0), vec![group]);
    assert_eq!(panels_of(&area, group), before);
    assert_eq!(labels(&area, group), vec!["Console", "Inspector"]);
}

#[test]
fn test_cancel_while_armed_returns_to_idle() {
    let (mut area, group) = two_tab_area();
    let tab = tab_center(&area, group, 1);
    send(&mut area, DragMsg::Press(tab));
    send(&mut area, DragMsg::Cancel);
    assert!(area.drag.is_idle());
}
