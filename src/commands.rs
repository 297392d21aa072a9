//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host must perform after an update.

use crate::model::SurfaceId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Repaint the dock area and every floating surface
    Redraw,
    /// Create a top-level window for a new floating root
    OpenSurface(SurfaceId),
    /// Destroy the top-level window of a removed floating root
    CloseSurface(SurfaceId),
    /// Several commands, in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Collapse a list into a single command; empty lists yield `None`
    pub fn batch(mut cmds: Vec<Cmd>) -> Option<Cmd> {
        match cmds.len() {
            0 => None,
            1 => cmds.pop(),
            _ => Some(Cmd::Batch(cmds)),
        }
    }

    /// True if this command, or any command in a batch, requests a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Redraw => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            _ => false,
        }
    }

    /// Flatten nested batches into a plain list
    pub fn into_vec(self) -> Vec<Cmd> {
        match self {
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::into_vec).collect(),
            cmd => vec![cmd],
        }
    }
}
