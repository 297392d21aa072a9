//! Layout message handlers (tabs, maximize, floating surfaces)

use crate::commands::Cmd;
use crate::messages::LayoutMsg;
use crate::model::DockArea;

/// Handle layout messages.
///
/// Operations queue their own redraw and surface commands on the area.
pub fn update_layout(area: &mut DockArea, msg: LayoutMsg) -> Option<Cmd> {
    match msg {
        LayoutMsg::SelectTab { group, index } => {
            area.select_tab(group, index);
        }

        LayoutMsg::CloseTab { group, index } => {
            if !area.close_tab(group, index) {
                tracing::debug!(target: "layout", ?group, index, "close refused");
            }
        }

        LayoutMsg::AddTab { group, panel_type } => {
            area.add_tab(group, panel_type);
        }

        LayoutMsg::ToggleMaximize { group, index } => {
            area.toggle_maximize(group, index);
        }

        LayoutMsg::ActivateView(panel_type) => {
            area.activate_view(panel_type);
        }

        LayoutMsg::FloatView(panel_type) => {
            let panel = area.pool.new_window(panel_type)?;
            if area.float_view(panel, None).is_none() {
                area.pool.hide_window(panel);
            }
        }

        LayoutMsg::ResetLayout => {
            area.reset_to_default_layout();
        }

        LayoutMsg::SetMainArea(rect) => {
            area.set_main_area(rect);
        }

        LayoutMsg::SetScreen(rect) => {
            area.set_available_screen(rect);
        }

        LayoutMsg::MoveSurface { surface, geometry } => {
            area.move_surface(surface, geometry);
        }

        LayoutMsg::CloseSurface(surface) => {
            area.close_surface(surface);
        }
    }
    None
}
