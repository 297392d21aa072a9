//! Tab drag controller - pointer-driven docking gestures
//!
//! The controller holds gesture state only. Hover classification lives in
//! [`hover`], and the tree surgery performed on commit lives in
//! [`update::drag`](crate::update::drag).
//!
//! States: `Idle -> Armed -> Dragging -> Idle`. A press on a tab label arms the
//! controller. Moving past the drag threshold starts a session. Release
//! commits or rolls back, and either way returns to idle.

pub mod hover;
mod preview;
mod region;

pub use hover::{HoverKind, HoverTarget};
pub use preview::{dock_preview_rect, float_preview_rect, float_template_size, DragPreview};
pub use region::{classify_region, region_in, DockRegion};

use crate::geometry::Point;
use crate::model::NodeId;
use crate::panel::PanelId;

/// A press on a tab label that has not moved far enough to drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmedDrag {
    pub press: Point,
    pub group: NodeId,
    pub index: usize,
}

/// State of one tab drag, from threshold crossing to release
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub source_group: NodeId,
    pub source_index: usize,
    pub source_panel: PanelId,
    pub source_label: String,
    /// Bar selection before the label was detached
    pub previous_current: Option<usize>,
    pub press_pos: Point,
    /// `None` until the first move is classified
    pub hover: Option<HoverTarget>,
    pub cancel_pending: bool,
}

impl DragSession {
    pub fn hover_kind(&self) -> HoverKind {
        self.hover.map(|h| h.kind()).unwrap_or(HoverKind::Float)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Armed(ArmedDrag),
    Dragging(DragSession),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragController {
    pub state: DragState,
    pub preview: DragPreview,
    enabled: bool,
    /// Pointer input is routed here regardless of what lies under it
    capturing: bool,
}

impl Default for DragController {
    fn default() -> Self {
        Self {
            state: DragState::Idle,
            preview: DragPreview::Hidden,
            enabled: true,
            capturing: false,
        }
    }
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabling drops any armed press; an active session runs to completion
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled && matches!(self.state, DragState::Armed(_)) {
            self.state = DragState::Idle;
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, DragState::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// The host must route every pointer event to the dock area while true
    pub fn is_capturing(&self) -> bool {
        self.capturing
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut DragSession> {
        match &mut self.state {
            DragState::Dragging(session) => Some(session),
            _ => None,
        }
    }

    /// Record a press on a tab label. Ignored unless idle and enabled.
    pub fn arm(&mut self, press: Point, group: NodeId, index: usize) -> bool {
        if !self.enabled || !self.is_idle() {
            return false;
        }
        self.state = DragState::Armed(ArmedDrag {
            press,
            group,
            index,
        });
        true
    }

    pub fn start(&mut self, session: DragSession) {
        tracing::debug!(
            target: "drag",
            group = ?session.source_group,
            index = session.source_index,
            "drag started"
        );
        self.state = DragState::Dragging(session);
        self.capturing = true;
    }

    /// Return to idle, handing back the session if there was one
    pub fn finish(&mut self) -> Option<DragSession> {
        self.capturing = false;
        self.preview = DragPreview::Hidden;
        match std::mem::take(&mut self.state) {
            DragState::Dragging(session) => Some(session),
            _ => None,
        }
    }
}
