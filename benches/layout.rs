//! Benchmarks for layout geometry, drag hover and layout documents
//!
//! Run with: cargo bench layout

use tabdock::config::DockConfig;
use tabdock::drag::DockRegion;
use tabdock::geometry::{rects_from, sizes_for_insertion, Orientation, Point, Rect};
use tabdock::messages::{DockMsg, DragMsg};
use tabdock::model::{DockArea, NodeId};
use tabdock::panel::{FactoryRegistry, PanelType};
use tabdock::panels::PlaceholderFactory;
use tabdock::update::update;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

const MAIN_AREA: Rect = Rect::new(0, 0, 1920, 1080);

fn registry() -> FactoryRegistry {
    FactoryRegistry::new()
        .with(PlaceholderFactory::new("Console"))
        .with(PlaceholderFactory::new("Inspector"))
}

/// Default layout grown to `groups` tab groups by alternating right and
/// bottom docks on the newest group
fn build_area(groups: usize) -> DockArea {
    let mut area = DockArea::with_default_layout(
        DockConfig::default(),
        registry(),
        MAIN_AREA,
        MAIN_AREA,
    );
    let console = PanelType::from_name("Console");
    let mut target = area.groups_in_root(0)[0];

    for i in 1..groups {
        let Some(panel) = area.pool.new_window(console) else {
            break;
        };
        let title = area.pool.title(panel);
        let group = area.tree.create_tab_group();
        if let Some(tabs) = area.tree.tab_group_mut(group) {
            tabs.add_tab(panel, title);
        }
        let region = if i % 2 == 0 {
            DockRegion::Bottom
        } else {
            DockRegion::Right
        };
        if area.dock_at_group(group, target, region) {
            target = group;
        }
    }
    area.flush();
    area.take_commands();
    area
}

fn tab_center(area: &DockArea, group: NodeId) -> Point {
    area.tab_rect(group, 0)
        .map(|r| r.center())
        .unwrap_or_default()
}

// ============================================================================
// Geometry
// ============================================================================

#[divan::bench(args = [2, 8, 32, 128])]
fn rects_for_children(n: usize) {
    let proportions = vec![1.0 / n as f32; n];
    let mins = vec![50; n];
    let rects = rects_from(
        divan::black_box(&proportions),
        MAIN_AREA,
        Orientation::Horizontal,
        4,
        &mins,
    );
    divan::black_box(rects);
}

#[divan::bench(args = [2, 8, 32, 128])]
fn insertion_sizes(n: usize) {
    let mut x = 0;
    let slots: Vec<Rect> = (0..n * 2 - 1)
        .map(|i| {
            let w = if i % 2 == 0 { 300 } else { 4 };
            let r = Rect::new(x, 0, w, 100);
            x += w;
            r
        })
        .collect();
    let sizes = sizes_for_insertion(divan::black_box(&slots), Orientation::Horizontal, n / 2, 200, 100);
    divan::black_box(sizes);
}

#[divan::bench(args = [4, 16, 64])]
fn flush_layout(bencher: divan::Bencher, groups: usize) {
    bencher
        .with_inputs(|| build_area(groups))
        .bench_local_values(|mut area| {
            area.set_main_area(Rect::new(0, 0, 1600, 900));
            area
        });
}

// ============================================================================
// Drag hover
// ============================================================================

/// One press, a sweep of moves across the main area, then a cancel
#[divan::bench(args = [4, 16, 64])]
fn hover_sweep(bencher: divan::Bencher, groups: usize) {
    bencher
        .with_inputs(|| {
            let mut area = build_area(groups);
            let source = area.groups_in_root(0)[0];
            let console = PanelType::from_name("Console");
            area.add_tab(source, console);
            let press = tab_center(&area, source);
            (area, press)
        })
        .bench_local_values(|(mut area, press)| {
            update(&mut area, DockMsg::Drag(DragMsg::Press(press)));
            for step in 0..64 {
                let p = Point::new(step * 30, 60 + step * 15);
                update(&mut area, DockMsg::Drag(DragMsg::Move(p)));
            }
            update(&mut area, DockMsg::Drag(DragMsg::Cancel));
            area
        });
}

// ============================================================================
// Layout documents
// ============================================================================

#[divan::bench(args = [4, 16, 64])]
fn serialize(bencher: divan::Bencher, groups: usize) {
    bencher
        .with_inputs(|| build_area(groups))
        .bench_local_refs(|area| divan::black_box(area.serialize()));
}

#[divan::bench(args = [4, 16, 64])]
fn deserialize(bencher: divan::Bencher, groups: usize) {
    bencher
        .with_inputs(|| {
            let mut area = build_area(groups);
            let doc = area.serialize();
            (area, doc)
        })
        .bench_local_values(|(mut area, doc)| {
            area.deserialize(&doc);
            area
        });
}

#[divan::bench(args = [4, 16, 64])]
fn document_to_json(bencher: divan::Bencher, groups: usize) {
    bencher
        .with_inputs(|| build_area(groups).serialize())
        .bench_local_refs(|doc| serde_json::to_string(doc).unwrap_or_default());
}
