//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use tabdock::config::DockConfig;
use tabdock::drag::DockRegion;
use tabdock::geometry::{Point, Rect};
use tabdock::messages::{DockMsg, DragMsg};
use tabdock::model::{DockArea, NodeId};
use tabdock::panel::{FactoryRegistry, PanelId, PanelType};
use tabdock::panels::PlaceholderFactory;
use tabdock::update::update;
use tabdock::Cmd;

pub const MAIN_AREA: Rect = Rect::new(0, 0, 1000, 800);
pub const SCREEN: Rect = Rect::new(0, 0, 1920, 1080);

pub fn console() -> PanelType {
    PanelType::from_name("Console")
}

pub fn outline() -> PanelType {
    PanelType::from_name("Outline")
}

pub fn inspector() -> PanelType {
    PanelType::from_name("Inspector")
}

pub fn pinned() -> PanelType {
    PanelType::from_name("Pinned")
}

/// Console (default), Outline (unique), Inspector, Pinned (cannot close)
pub fn test_registry() -> FactoryRegistry {
    FactoryRegistry::new()
        .with(PlaceholderFactory::new("Console"))
        .with(PlaceholderFactory::new("Outline").unique())
        .with(PlaceholderFactory::new("Inspector"))
        .with(PlaceholderFactory::new("Pinned").pinned())
}

/// A dock area with the default layout: one Console tab in the main root
pub fn test_area() -> DockArea {
    test_area_with(DockConfig::default())
}

pub fn test_area_with(config: DockConfig) -> DockArea {
    DockArea::with_default_layout(config, test_registry(), MAIN_AREA, SCREEN)
}

/// First tab group of the main root
pub fn main_group(area: &DockArea) -> NodeId {
    area.groups_in_root(0)[0]
}

/// Append `n` new panels of `ty` to `group`
pub fn add_tabs(area: &mut DockArea, group: NodeId, ty: PanelType, n: usize) {
    for _ in 0..n {
        area.add_tab(group, ty).expect("panel added");
    }
}

/// A parentless tab group holding `panel`
pub fn new_group_with(area: &mut DockArea, panel: PanelId) -> NodeId {
    let title = area.pool.title(panel);
    let group = area.tree.create_tab_group();
    area.tree
        .tab_group_mut(group)
        .expect("tab group")
        .add_tab(panel, title);
    group
}

/// Dock a fresh Console group into `region` of `target`, returning it
pub fn dock_new_group(area: &mut DockArea, target: NodeId, region: DockRegion) -> NodeId {
    let panel = area.pool.new_window(console()).expect("console panel");
    let group = new_group_with(area, panel);
    assert!(area.dock_at_group(group, target, region));
    area.flush();
    group
}

pub fn panels_of(area: &DockArea, group: NodeId) -> Vec<PanelId> {
    area.group(group).expect("tab group").panels().to_vec()
}

pub fn send(area: &mut DockArea, msg: DragMsg) -> Option<Cmd> {
    update(area, DockMsg::Drag(msg))
}

/// Press at `from` and move to `to`, past the drag threshold
pub fn start_drag(area: &mut DockArea, from: Point, to: Point) {
    send(area, DragMsg::Press(from));
    send(area, DragMsg::Move(to));
}

/// A full press, move, release gesture
pub fn drag_tab(area: &mut DockArea, from: Point, to: Point) -> Option<Cmd> {
    start_drag(area, from, to);
    send(area, DragMsg::Release(to))
}

/// Center of the label at `index` of `group`
pub fn tab_center(area: &DockArea, group: NodeId, index: usize) -> Point {
    area.tab_rect(group, index).expect("tab rect").center()
}

pub fn flatten(cmd: Option<Cmd>) -> Vec<Cmd> {
    cmd.map(Cmd::into_vec).unwrap_or_default()
}
