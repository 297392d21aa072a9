//! Placeholder panel for prototyping
//!
//! A simple panel that shows its name and a message. Hosts use it while
//! real panels are being built, and tests use it as a stand-in panel kind.

use crate::panel::{
    ContextMenu, MenuAction, MenuItem, Panel, PanelFactory, PanelPayload, PanelType,
};

/// Placeholder panel state
#[derive(Debug, Clone)]
pub struct PlaceholderPanel {
    panel_type: PanelType,
    name: String,
    pub message: String,
    closable: bool,
}

impl PlaceholderPanel {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            panel_type: PanelType::from_name(&name),
            message: format!("{} coming soon...", name),
            name,
            closable: true,
        }
    }

    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }
}

impl Panel for PlaceholderPanel {
    fn panel_type(&self) -> PanelType {
        self.panel_type
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn can_close(&self) -> bool {
        self.closable
    }

    fn load(&mut self, payload: &PanelPayload) -> bool {
        match payload.get("message") {
            Some(serde_json::Value::String(message)) => {
                self.message = message.clone();
                true
            }
            Some(_) => false,
            None => true,
        }
    }

    fn save(&self, payload: &mut PanelPayload) {
        payload.insert("message".into(), self.message.clone().into());
    }

    fn on_context_menu(&self, menu: &mut ContextMenu) {
        menu.push(MenuItem::action(
            "Clear Message",
            MenuAction::Panel("clear".into()),
        ));
    }
}

/// Factory for placeholder panels of one name
#[derive(Debug, Clone)]
pub struct PlaceholderFactory {
    name: String,
    unique: bool,
    closable: bool,
}

impl PlaceholderFactory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unique: false,
            closable: true,
        }
    }

    /// Allow at most one visible instance
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Panels created by this factory refuse to close
    pub fn pinned(mut self) -> Self {
        self.closable = false;
        self
    }
}

impl PanelFactory for PlaceholderFactory {
    fn type_name(&self) -> &str {
        &self.name
    }

    fn is_unique(&self) -> bool {
        self.unique
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn create(&self) -> Box<dyn Panel> {
        Box::new(PlaceholderPanel::new(self.name.clone()).closable(self.closable))
    }
}
