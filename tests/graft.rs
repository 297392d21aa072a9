//! Tests for grafting new groups into the tree

mod common;

use common::*;
use tabdock::drag::DockRegion;
use tabdock::geometry::{Orientation, Point};
use tabdock::model::{recalc_root_sizes_after_add, DockArea, NodeId, Surface};

fn orientation_of(area: &DockArea, split: NodeId) -> Orientation {
    area.tree.split(split).unwrap().orientation
}

// ============================================================================
// Docking beside a group
// ============================================================================

#[test]
fn test_dock_below_matching_container_inserts_sibling() {
    let mut area = test_area();
    let group = main_group(&area);
    let column = area.tree.parent(group).unwrap();

    let new = dock_new_group(&mut area, group, DockRegion::Bottom);
    assert_eq!(area.tree.children(column), &[group, new]);
    assert_eq!(orientation_of(&area, column), Orientation::Vertical);

    let top = area.tree.rect(group).unwrap();
    let bottom = area.tree.rect(new).unwrap();
    // Two thirds and one third of the target's height
    assert!((top.height - 2 * bottom.height).abs() <= 4);
}

#[test]
fn test_dock_beside_takes_exactly_a_third_of_target() {
    let mut area = test_area();
    let group = main_group(&area);
    let column = area.tree.parent(group).unwrap();

    let new = dock_new_group(&mut area, group, DockRegion::Bottom);
    let top = area.tree.rect(group).unwrap();
    let bottom = area.tree.rect(new).unwrap();
    assert!((bottom.height - MAIN_AREA.height / 3).abs() <= 1);

    let divider = area.config.divider_extent;
    let sizes = area.tree.sizes(column);
    assert!((sizes.iter().sum::<i32>() + divider - MAIN_AREA.height).abs() <= 2);
    assert!(top.height > bottom.height);
}

#[test]
fn test_dock_above_goes_first() {
    let mut area = test_area();
    let group = main_group(&area);
    let column = area.tree.parent(group).unwrap();

    let new = dock_new_group(&mut area, group, DockRegion::Top);
    assert_eq!(area.tree.children(column), &[new, group]);
    assert!(area.tree.rect(new).unwrap().y < area.tree.rect(group).unwrap().y);
}

#[test]
fn test_single_child_container_flips_instead_of_nesting() {
    let mut area = test_area();
    let group = main_group(&area);
    let column = area.tree.parent(group).unwrap();
    let nodes_before = area.tree.len();

    let new = dock_new_group(&mut area, group, DockRegion::Left);
    assert_eq!(orientation_of(&area, column), Orientation::Horizontal);
    assert_eq!(area.tree.children(column), &[new, group]);
    // Only the new group was added
    assert_eq!(area.tree.len(), nodes_before + 1);
}

#[test]
fn test_cross_axis_dock_nests_a_container() {
    let mut area = test_area();
    let group = main_group(&area);
    let column = area.tree.parent(group).unwrap();
    let lower = dock_new_group(&mut area, group, DockRegion::Bottom);

    let new = dock_new_group(&mut area, lower, DockRegion::Right);
    let nested = area.tree.parent(new).unwrap();
    assert_ne!(nested, column);
    assert_eq!(orientation_of(&area, nested), Orientation::Horizontal);
    assert_eq!(area.tree.children(nested), &[lower, new]);
    assert_eq!(area.tree.children(column), &[group, nested]);

    let left = area.tree.rect(lower).unwrap();
    let right = area.tree.rect(new).unwrap();
    assert!(right.width < left.width);
    assert_eq!(left.y, right.y);
}

#[test]
fn test_central_region_is_rejected() {
    let mut area = test_area();
    let group = main_group(&area);
    let panel = area.pool.new_window(console()).unwrap();
    let new = new_group_with(&mut area, panel);
    assert!(!area.dock_at_group(new, group, DockRegion::Central));
    assert_eq!(area.tree.parent(new), None);
}

// ============================================================================
// Docking at a root
// ============================================================================

#[test]
fn test_dock_at_root_uses_size_hint() {
    let mut area = test_area();
    let root = area.main_root().unwrap();
    let panel = area.pool.new_window(console()).unwrap();
    let new = new_group_with(&mut area, panel);

    assert_eq!(area.dock_at_root(new, root, DockRegion::Right), Some(root));
    area.flush();
    assert_eq!(area.tree.children(root).last(), Some(&new));
    let width = area.tree.rect(new).unwrap().width;
    assert!((195..=200).contains(&width), "width {}", width);
}

#[test]
fn test_cross_axis_root_dock_replaces_root_in_place() {
    let mut area = test_area();
    let root = area.main_root().unwrap();
    let first = area.pool.new_window(console()).unwrap();
    let first = new_group_with(&mut area, first);
    area.dock_at_root(first, root, DockRegion::Left);
    area.flush();

    let panel = area.pool.new_window(inspector()).unwrap();
    let new = new_group_with(&mut area, panel);
    let new_root = area.dock_at_root(new, root, DockRegion::Top).unwrap();
    area.flush();

    assert_ne!(new_root, root);
    assert_eq!(area.main_root(), Some(new_root));
    assert_eq!(area.roots.get(0).unwrap().surface, Surface::Embedded);
    assert_eq!(area.roots.len(), 1);
    assert_eq!(area.tree.children(new_root), &[new, root]);
    assert_eq!(orientation_of(&area, new_root), Orientation::Vertical);
    assert_eq!(area.tree.rect(new).unwrap().y, 0);
    assert!(area.tree.rect(root).unwrap().y > 150);
}

#[test]
fn test_floating_root_keeps_its_surface() {
    let mut area = test_area();
    let panel = area.pool.new_window(inspector()).unwrap();
    area.float_view(panel, Some(Point::new(960, 540))).unwrap();
    let entry = area.roots.get(1).unwrap().clone();
    let surface = entry.floating().unwrap().id;

    // A vertical dock on a horizontal single-child root flips it
    let extra = area.pool.new_window(console()).unwrap();
    let new = new_group_with(&mut area, extra);
    assert_eq!(
        area.dock_at_root(new, entry.node, DockRegion::Bottom),
        Some(entry.node)
    );
    area.flush();

    assert_eq!(orientation_of(&area, entry.node), Orientation::Vertical);
    assert_eq!(area.roots.len(), 2);
    assert_eq!(area.roots.get(1).unwrap().floating().unwrap().id, surface);
    assert_eq!(area.groups_in_root(1).len(), 2);
}

#[test]
fn test_recalc_root_sizes_keeps_minimums() {
    assert_eq!(
        recalc_root_sizes_after_add(&[1000], 200, 100, true),
        vec![200, 800]
    );
    assert_eq!(
        recalc_root_sizes_after_add(&[150, 150], 200, 100, false),
        vec![100, 100, 100]
    );
}
