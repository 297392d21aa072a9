//! Message types for the Elm-style architecture
//!
//! The host translates its pointer, keyboard and menu events into these.

use crate::geometry::{Point, Rect};
use crate::model::{NodeId, SurfaceId};
use crate::panel::PanelType;

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum DockMsg {
    Drag(DragMsg),
    Divider(DividerMsg),
    Layout(LayoutMsg),
}

/// Tab drag gestures, in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMsg {
    /// Primary button pressed
    Press(Point),
    Move(Point),
    Release(Point),
    /// Escape key
    Cancel,
}

/// Split divider gestures, in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DividerMsg {
    Press(Point),
    Move(Point),
    Release(Point),
}

/// Layout operations triggered by menus, shortcuts or the host
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutMsg {
    /// Select a tab by clicking it
    SelectTab { group: NodeId, index: usize },
    CloseTab { group: NodeId, index: usize },
    AddTab { group: NodeId, panel_type: PanelType },
    ToggleMaximize { group: NodeId, index: usize },
    /// Show a panel of this type, creating one if needed
    ActivateView(PanelType),
    /// Open a new panel of this type in its own floating surface
    FloatView(PanelType),
    ResetLayout,
    /// The host's client area changed
    SetMainArea(Rect),
    /// The available screen rectangle changed
    SetScreen(Rect),
    /// The user moved or resized a floating surface
    MoveSurface { surface: SurfaceId, geometry: Rect },
    /// The user closed a floating surface
    CloseSurface(SurfaceId),
}
