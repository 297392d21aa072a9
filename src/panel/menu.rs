//! Tab context menu model
//!
//! The engine builds the menu and the host renders it. Selecting an item
//! hands its [`MenuAction`] back to the host, which turns engine actions into
//! [`LayoutMsg`](crate::messages::LayoutMsg)s and panel actions into its own calls.

use crate::messages::LayoutMsg;
use crate::model::NodeId;

use super::{PanelId, PanelType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    ToggleMaximize { group: NodeId, index: usize },
    CloseTab { group: NodeId, index: usize },
    AddTab { group: NodeId, panel_type: PanelType },
    /// Panel-defined action, routed by the host to the menu's panel
    Panel(String),
}

impl MenuAction {
    /// The layout message for engine actions
    pub fn to_msg(&self) -> Option<LayoutMsg> {
        match *self {
            MenuAction::ToggleMaximize { group, index } => {
                Some(LayoutMsg::ToggleMaximize { group, index })
            }
            MenuAction::CloseTab { group, index } => Some(LayoutMsg::CloseTab { group, index }),
            MenuAction::AddTab { group, panel_type } => {
                Some(LayoutMsg::AddTab { group, panel_type })
            }
            MenuAction::Panel(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuItem {
    pub label: String,
    pub action: Option<MenuAction>,
    pub enabled: bool,
    /// `Some` for checkable items
    pub checked: Option<bool>,
    pub submenu: Vec<MenuItem>,
    pub separator: bool,
}

impl MenuItem {
    pub fn action(label: impl Into<String>, action: MenuAction) -> Self {
        Self {
            label: label.into(),
            action: Some(action),
            enabled: true,
            ..Self::default()
        }
    }

    pub fn submenu(label: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            label: label.into(),
            enabled: true,
            submenu: items,
            ..Self::default()
        }
    }

    pub fn separator() -> Self {
        Self {
            separator: true,
            ..Self::default()
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContextMenu {
    /// Panel of the tab the menu was opened on
    pub panel: Option<PanelId>,
    pub items: Vec<MenuItem>,
}

impl ContextMenu {
    pub fn push(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    pub fn add_separator(&mut self) {
        if self.items.last().is_some_and(|i| !i.separator) {
            self.items.push(MenuItem::separator());
        }
    }

    /// Find a top-level item by label
    pub fn item(&self, label: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.label == label)
    }
}
