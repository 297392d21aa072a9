//! Dock model - the complete state of a dock area
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod dock_area;
mod graft;
pub mod roots;
pub mod splitter;
pub mod tab_group;
pub mod tree;

pub use dock_area::{DockArea, Maximized};
pub use graft::recalc_root_sizes_after_add;
pub use roots::{FloatingSurface, RootEntry, RootSet, Surface, SurfaceId};
pub use splitter::{Divider, DividerDrag, SplitContainer, SplitMetrics};
pub use tab_group::{TabGroup, TempTab};
pub use tree::{DockTree, LayoutNode, Node, NodeId, Removal};
