//! Panel system - dockable panel abstraction
//!
//! The dock engine never looks inside a panel. It needs a title, a close
//! policy, a way to save and restore an opaque payload, and a hook to extend
//! the tab context menu. Everything else is the host's business.
//!
//! ## Architecture
//!
//! - `Panel`: capability trait implemented by every panel variant
//! - `PanelType`: stable identifier for a panel kind, derived from its type name
//! - `PanelId`: handle of one live panel instance owned by the pool
//! - `PanelFactory` / `FactoryRegistry`: open registration table of panel kinds
//! - `PanelPool`: instances by (type, slot), reused across layout changes

mod factory;
mod menu;
mod pool;

pub use factory::{FactoryRegistry, PanelFactory};
pub use menu::{ContextMenu, MenuAction, MenuItem};
pub use pool::PanelPool;

use std::fmt;

/// Opaque per-panel state stored in layout documents
pub type PanelPayload = serde_json::Map<String, serde_json::Value>;

/// Handle of a live panel instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId(pub u64);

/// Stable identifier for a kind of panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelType(pub u64);

impl PanelType {
    /// FNV-1a hash of a type name, stable across runs and builds
    pub const fn from_name(name: &str) -> Self {
        const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const PRIME: u64 = 0x0000_0100_0000_01b3;

        let bytes = name.as_bytes();
        let mut hash = OFFSET;
        let mut i = 0;
        while i < bytes.len() {
            hash ^= bytes[i] as u64;
            hash = hash.wrapping_mul(PRIME);
            i += 1;
        }
        PanelType(hash)
    }

    /// Parse the string form used in layout documents.
    ///
    /// Documents carry a signed 64-bit decimal; unsigned decimal is accepted too.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        text.parse::<u64>()
            .ok()
            .or_else(|| text.parse::<i64>().ok().map(|v| v as u64))
            .map(PanelType)
    }
}

/// Signed 64-bit decimal, the `windowType` form in layout documents
impl fmt::Display for PanelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 as i64)
    }
}

/// Capabilities the dock engine needs from a panel
pub trait Panel {
    /// Kind of this panel; must match the factory that created it
    fn panel_type(&self) -> PanelType;

    /// Text shown on the panel's tab
    fn title(&self) -> String;

    /// Whether the user may close this panel
    fn can_close(&self) -> bool {
        true
    }

    /// Restore state from a layout document. Returns false if the payload was rejected.
    fn load(&mut self, _payload: &PanelPayload) -> bool {
        true
    }

    /// Write state into a layout document
    fn save(&self, _payload: &mut PanelPayload) {}

    /// Add panel-specific entries to the tab context menu
    fn on_context_menu(&self, _menu: &mut ContextMenu) {}
}
