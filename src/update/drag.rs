//! Tab drag message handlers
//!
//! A press on a label arms the controller. Crossing the drag threshold
//! detaches the label and starts a session. Moves re-classify the hover and
//! refresh the preview. Release commits by hover kind, or rolls back when a
//! cancel is pending.

use crate::commands::Cmd;
use crate::drag::hover::{self, HoverTarget};
use crate::drag::{
    dock_preview_rect, float_preview_rect, float_template_size, region_in, DockRegion,
    DragPreview, DragSession, DragState,
};
use crate::geometry::Point;
use crate::messages::DragMsg;
use crate::model::{DockArea, NodeId};

pub fn update_drag(area: &mut DockArea, msg: DragMsg) -> Option<Cmd> {
    match msg {
        DragMsg::Press(pos) => press(area, pos),
        DragMsg::Move(pos) => move_to(area, pos),
        DragMsg::Release(pos) => release(area, pos),
        DragMsg::Cancel => cancel(area),
    }
}

fn press(area: &mut DockArea, pos: Point) -> Option<Cmd> {
    if !area.drag.is_enabled() || !area.drag.is_idle() {
        return None;
    }
    let group = area.group_at(pos)?;
    let index = area.tab_at(group, pos)?;
    area.select_tab(group, index);
    area.drag.arm(pos, group, index);
    None
}

fn move_to(area: &mut DockArea, pos: Point) -> Option<Cmd> {
    match area.drag.state.clone() {
        DragState::Idle => None,
        DragState::Armed(armed) => {
            if (pos - armed.press).manhattan_length() < area.config.drag_threshold {
                return None;
            }
            if Some(armed.group) == area.overlay_group() || area.is_last_tab_in_main(armed.group) {
                return None;
            }
            start_session(area, armed.group, armed.index, armed.press)?;
            update_hover(area, pos);
            None
        }
        DragState::Dragging(_) => {
            update_hover(area, pos);
            None
        }
    }
}

fn start_session(
    area: &mut DockArea,
    group: NodeId,
    index: usize,
    press: Point,
) -> Option<()> {
    let tabs = area.tree.tab_group(group)?;
    let panel = tabs.panel(index)?;
    let label = tabs.tab_text(index)?.to_string();
    let previous_current = tabs.current_tab_index();

    for g in area.tree.all_tab_groups() {
        if let Some(tabs) = area.tree.tab_group_mut(g) {
            tabs.begin_dragging();
        }
    }
    area.tree.tab_group_mut(group)?.remove_only_tab(index);

    area.drag.start(DragSession {
        source_group: group,
        source_index: index,
        source_panel: panel,
        source_label: label,
        previous_current,
        press_pos: press,
        hover: None,
        cancel_pending: false,
    });
    Some(())
}

/// Re-classify the hover and refresh temp tabs and the preview
fn update_hover(area: &mut DockArea, pos: Point) {
    let Some(session) = area.drag.session().cloned() else {
        return;
    };
    let target = hover::classify(area, &session, pos);

    if session.hover != Some(target) {
        clear_temp_tab(area, session.hover);
        tracing::debug!(target: "drag", ?target, "hover changed");
    }

    let hint = area.config.root_dock_size_hint;
    area.drag.preview = match target {
        HoverTarget::Tab { group } => {
            let index = area.tab_at(group, pos);
            if let Some(tabs) = area.tree.tab_group_mut(group) {
                tabs.add_temp_tab(index, session.source_label.clone());
            }
            DragPreview::Hidden
        }
        HoverTarget::DockAtChild { group } => area
            .tree
            .rect(group)
            .and_then(|r| dock_preview_rect(r, region_in(r, pos), false, hint))
            .map(DragPreview::Dock)
            .unwrap_or_else(|| float_preview(area, &session, pos)),
        HoverTarget::DockAtRoot { root } => area
            .tree
            .rect(root)
            .and_then(|r| dock_preview_rect(r, region_in(r, pos), true, hint))
            .map(DragPreview::Dock)
            .unwrap_or_else(|| float_preview(area, &session, pos)),
        HoverTarget::Float => float_preview(area, &session, pos),
    };

    if let Some(session) = area.drag.session_mut() {
        session.hover = Some(target);
    }
    area.queue(Cmd::Redraw);
}

fn float_preview(area: &DockArea, session: &DragSession, pos: Point) -> DragPreview {
    let source = area
        .tree
        .rect(session.source_group)
        .map(|r| r.size())
        .unwrap_or(area.config.float_window_size);
    let size = float_template_size(
        source,
        area.config.widget_min_extent,
        area.config.float_template_optimum,
    );
    DragPreview::Float(float_preview_rect(pos, size, area.screen))
}

fn clear_temp_tab(area: &mut DockArea, hover: Option<HoverTarget>) {
    if let Some(HoverTarget::Tab { group }) = hover {
        if let Some(tabs) = area.tree.tab_group_mut(group) {
            tabs.remove_temp_tab();
        }
    }
}

fn release(area: &mut DockArea, pos: Point) -> Option<Cmd> {
    match area.drag.state.clone() {
        DragState::Idle => None,
        DragState::Armed(_) => {
            area.drag.finish();
            None
        }
        DragState::Dragging(_) => {
            update_hover(area, pos);
            finish_session(area, pos);
            None
        }
    }
}

fn cancel(area: &mut DockArea) -> Option<Cmd> {
    match area.drag.state.clone() {
        DragState::Idle => None,
        DragState::Armed(_) => {
            area.drag.finish();
            None
        }
        DragState::Dragging(session) => {
            let on_tab = matches!(session.hover, Some(HoverTarget::Tab { .. }));
            if let Some(s) = area.drag.session_mut() {
                s.cancel_pending = true;
            }
            if !on_tab {
                finish_session(area, session.press_pos);
            } else {
                tracing::debug!(target: "drag", "cancel deferred until release");
            }
            None
        }
    }
}

/// End the session: commit or roll back, then restore every group
fn finish_session(area: &mut DockArea, pos: Point) {
    let Some(session) = area.drag.finish() else {
        return;
    };

    area.suspend_updates();
    let on_tab = matches!(session.hover, Some(HoverTarget::Tab { .. }));
    if session.cancel_pending && !on_tab {
        clear_temp_tab(area, session.hover);
        rollback(area, &session);
    } else {
        commit(area, &session, pos);
    }

    for g in area.tree.all_tab_groups() {
        if let Some(tabs) = area.tree.tab_group_mut(g) {
            tabs.end_dragging();
        }
    }
    area.remove_group_if_empty(session.source_group);
    area.resume_updates();
}

fn rollback(area: &mut DockArea, session: &DragSession) {
    if let Some(tabs) = area.tree.tab_group_mut(session.source_group) {
        let index = tabs.insert_only_tab(session.source_index, session.source_label.clone());
        tabs.select(session.previous_current.unwrap_or(index));
    }
    tracing::debug!(target: "drag", group = ?session.source_group, "drag rolled back");
}

fn commit(area: &mut DockArea, session: &DragSession, pos: Point) {
    match session.hover.unwrap_or(HoverTarget::Float) {
        HoverTarget::Tab { group } => commit_tab(area, session, group),
        HoverTarget::DockAtChild { group } => {
            let region = area
                .tree
                .rect(group)
                .map(|r| region_in(r, pos))
                .unwrap_or(DockRegion::Central);
            commit_dock(area, session, pos, region, |area, new| {
                area.dock_at_group(new, group, region)
            });
        }
        HoverTarget::DockAtRoot { root } => {
            let region = area
                .tree
                .rect(root)
                .map(|r| region_in(r, pos))
                .unwrap_or(DockRegion::Central);
            commit_dock(area, session, pos, region, |area, new| {
                area.dock_at_root(new, root, region).is_some()
            });
        }
        HoverTarget::Float => commit_float(area, session, pos),
    }
}

fn commit_tab(area: &mut DockArea, session: &DragSession, group: NodeId) {
    let Some(tabs) = area.tree.tab_group_mut(group) else {
        return;
    };
    let index = tabs.temp_tab().map(|t| t.index);
    tabs.remove_temp_tab();

    if let Some(source) = area.tree.tab_group_mut(session.source_group) {
        source.remove_only_widget(session.source_panel);
    }
    if let Some(tabs) = area.tree.tab_group_mut(group) {
        let index = tabs.insert_tab(index, session.source_panel, session.source_label.clone());
        tabs.select(index);
        tracing::debug!(target: "drag", ?group, index, "tab dropped");
    }
}

/// Move the panel into a fresh group and graft it with `graft`.
///
/// The central region and failed grafts float the panel instead.
fn commit_dock(
    area: &mut DockArea,
    session: &DragSession,
    pos: Point,
    region: DockRegion,
    graft: impl FnOnce(&mut DockArea, NodeId) -> bool,
) {
    if region == DockRegion::Central {
        commit_float(area, session, pos);
        return;
    }

    if let Some(source) = area.tree.tab_group_mut(session.source_group) {
        source.remove_only_widget(session.source_panel);
    }
    let new = area.tree.create_tab_group();
    if let Some(tabs) = area.tree.tab_group_mut(new) {
        tabs.add_tab(session.source_panel, session.source_label.clone());
    }

    if !graft(area, new) {
        tracing::warn!("Docking failed, floating the panel instead");
        area.tree.destroy_subtree(new);
        float_panel(area, session, pos);
    }
}

fn commit_float(area: &mut DockArea, session: &DragSession, pos: Point) {
    if let Some(source) = area.tree.tab_group_mut(session.source_group) {
        source.remove_only_widget(session.source_panel);
    }
    float_panel(area, session, pos);
}

fn float_panel(area: &mut DockArea, session: &DragSession, pos: Point) {
    let size = area
        .tree
        .rect(session.source_group)
        .map(|r| r.size())
        .filter(|s| s.width > 0 && s.height > 0)
        .unwrap_or(area.config.float_window_size);
    area.open_floating(session.source_panel, session.source_label.clone(), pos, size);
}
