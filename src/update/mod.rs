//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

pub mod divider;
pub mod drag;
pub mod layout;

use crate::commands::Cmd;
use crate::messages::DockMsg;
use crate::model::DockArea;

#[cfg(debug_assertions)]
use crate::tracing::LayoutSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use divider::update_divider;
pub use drag::update_drag;
pub use layout::update_layout;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(area: &mut DockArea, msg: DockMsg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(area, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(area, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(area: &mut DockArea, msg: DockMsg) -> Option<Cmd> {
    let result = match msg {
        DockMsg::Drag(m) => drag::update_drag(area, m),
        DockMsg::Divider(m) => divider::update_divider(area, m),
        DockMsg::Layout(m) => layout::update_layout(area, m),
    };

    let mut cmds = area.take_commands();
    cmds.extend(result.into_iter().flat_map(Cmd::into_vec));
    Cmd::batch(collapse_redraws(cmds))
}

/// Keep a single redraw, after every surface command
fn collapse_redraws(cmds: Vec<Cmd>) -> Vec<Cmd> {
    let redraw = cmds.iter().any(|c| *c == Cmd::Redraw);
    let mut out: Vec<Cmd> = cmds.into_iter().filter(|c| *c != Cmd::Redraw).collect();
    if redraw {
        out.push(Cmd::Redraw);
    }
    out
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after layout state and logs diffs for debugging.
/// Pointer moves are not logged unless they change something.
#[cfg(debug_assertions)]
fn update_traced(area: &mut DockArea, msg: DockMsg) -> Option<Cmd> {
    use crate::messages::{DividerMsg, DragMsg};

    let is_noisy = matches!(
        &msg,
        DockMsg::Drag(DragMsg::Move(_)) | DockMsg::Divider(DividerMsg::Move(_))
    );

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = LayoutSnapshot::from_area(area);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(area, msg);

    if let Some(diff) = before.diff(&LayoutSnapshot::from_area(area)) {
        debug!(target: "layout", msg = %msg_name, %diff, "state changed");
    }

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Drag::Press(Point { x: 10, y: 4 })`
/// - `Layout::ResetLayout`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &DockMsg) -> String {
    match msg {
        DockMsg::Drag(m) => format!("Drag::{:?}", m),
        DockMsg::Divider(m) => format!("Divider::{:?}", m),
        DockMsg::Layout(m) => format!("Layout::{:?}", m),
    }
}
