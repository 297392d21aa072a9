//! tabdock - a docking layout engine
//!
//! Panels live in tab groups, tab groups live in nested splitters, and
//! splitter trees hang off a set of roots: the embedded main root plus one
//! per floating window. The engine owns the geometry, the tab drag state
//! machine, grafting of dropped panels and a layout document format. Hosts
//! render and feed it pointer events through [`update`].

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod drag;
pub mod geometry;
pub mod messages;
pub mod model;
pub mod panel;
pub mod panels;
pub mod persist;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::DockConfig;
pub use geometry::{Orientation, Point, Rect, Size};
pub use messages::{DividerMsg, DockMsg, DragMsg, LayoutMsg};
pub use model::{DockArea, NodeId};
pub use panel::{FactoryRegistry, Panel, PanelFactory, PanelId, PanelPool, PanelType};
pub use persist::LayoutDocument;
pub use update::update;
