//! Split divider message handlers

use crate::commands::Cmd;
use crate::messages::DividerMsg;
use crate::model::DockArea;

pub fn update_divider(area: &mut DockArea, msg: DividerMsg) -> Option<Cmd> {
    match msg {
        DividerMsg::Press(pos) => {
            if !area.drag.is_idle() || area.tree.divider_drag_owner().is_some() {
                return None;
            }
            let (split, index) = area.divider_at(pos)?;
            let live = area.config.live_resize;
            let pressed = area
                .tree
                .split_mut(split)
                .is_some_and(|s| s.press_divider(index, pos, live));
            if pressed {
                tracing::debug!(target: "layout", ?split, index, live, "divider pressed");
            }
            None
        }

        DividerMsg::Move(pos) => {
            let split = area.tree.divider_drag_owner()?;
            area.tree
                .with_divider(split, |container, bounds, metrics, mins| {
                    container.move_divider(pos, bounds, metrics, mins)
                })
                .filter(|&moved| moved)?;
            if let Some(rect) = area.tree.rect(split) {
                area.tree.layout(split, rect);
            }
            Some(Cmd::Redraw)
        }

        DividerMsg::Release(_) => {
            let split = area.tree.divider_drag_owner()?;
            area.tree.split_mut(split)?.release_divider();
            area.flush();
            tracing::debug!(target: "layout", ?split, "divider released");
            Some(Cmd::Redraw)
        }
    }
}
