//! Panel pool - panel instances by (type, slot)
//!
//! Every instance ever created stays in the pool until deleted. A layout
//! change first hides everything, then the new layout claims instances back
//! by slot, so panels survive layout switches with their state intact.

use std::collections::{BTreeMap, HashMap, HashSet};

use super::{FactoryRegistry, Panel, PanelId, PanelType};

pub struct PanelPool {
    factories: FactoryRegistry,
    panels: HashMap<PanelId, Box<dyn Panel>>,
    /// Slot list per type; a panel's slot is its index here
    slots: BTreeMap<PanelType, Vec<PanelId>>,
    visible: HashSet<PanelId>,
    next_panel_id: u64,
}

impl PanelPool {
    pub fn new(factories: FactoryRegistry) -> Self {
        Self {
            factories,
            panels: HashMap::new(),
            slots: BTreeMap::new(),
            visible: HashSet::new(),
            next_panel_id: 1,
        }
    }

    pub fn factories(&self) -> &FactoryRegistry {
        &self.factories
    }

    pub fn panel(&self, id: PanelId) -> Option<&dyn Panel> {
        self.panels.get(&id).map(|p| p.as_ref())
    }

    pub fn panel_mut(&mut self, id: PanelId) -> Option<&mut (dyn Panel + 'static)> {
        self.panels.get_mut(&id).map(|p| p.as_mut())
    }

    pub fn title(&self, id: PanelId) -> String {
        self.panel(id).map(|p| p.title()).unwrap_or_default()
    }

    pub fn can_close(&self, id: PanelId) -> bool {
        self.panel(id).is_some_and(|p| p.can_close())
    }

    pub fn panel_type(&self, id: PanelId) -> Option<PanelType> {
        self.panel(id).map(|p| p.panel_type())
    }

    /// Total instances, visible or hidden
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    // ========================================================================
    // Registry contract
    // ========================================================================

    /// A panel of `ty` ready to be docked.
    ///
    /// Reuses a hidden instance of that type when one exists. Returns `None`
    /// when the type is unknown, or unique and already visible.
    pub fn new_window(&mut self, ty: PanelType) -> Option<PanelId> {
        let Some(factory) = self.factories.factory(ty) else {
            tracing::warn!("No factory registered for panel type {}", ty);
            return None;
        };
        if factory.is_unique() && self.has_visible_window(ty) {
            return None;
        }

        let hidden = self
            .slots
            .get(&ty)
            .and_then(|list| list.iter().copied().find(|id| !self.visible.contains(id)));
        if let Some(id) = hidden {
            self.visible.insert(id);
            return Some(id);
        }

        let panel = factory.create();
        let id = self.insert(panel);
        self.register_window(id);
        Some(id)
    }

    /// A panel of the first registered type
    pub fn new_default_window(&mut self) -> Option<PanelId> {
        let ty = self.factories.first()?.panel_type();
        self.new_window(ty)
    }

    /// The instance in `slot` of `ty`, falling back to [`new_window`](Self::new_window)
    /// when the slot does not exist
    pub fn get_window(&mut self, ty: PanelType, slot: usize) -> Option<PanelId> {
        if !self.factories.contains(ty) {
            tracing::warn!("No factory registered for panel type {}", ty);
            return None;
        }
        match self.slots.get(&ty).and_then(|list| list.get(slot)).copied() {
            Some(id) => {
                self.visible.insert(id);
                Some(id)
            }
            None => self.new_window(ty),
        }
    }

    /// Take ownership of a host-created panel without docking it
    pub fn insert(&mut self, panel: Box<dyn Panel>) -> PanelId {
        let id = PanelId(self.next_panel_id);
        self.next_panel_id += 1;
        self.panels.insert(id, panel);
        id
    }

    /// Mark a panel as docked. Returns its slot, or `None` if it is already visible.
    pub fn register_window(&mut self, id: PanelId) -> Option<usize> {
        let ty = self.panel_type(id)?;
        if !self.visible.insert(id) {
            return None;
        }
        let list = self.slots.entry(ty).or_default();
        match list.iter().position(|&p| p == id) {
            Some(slot) => Some(slot),
            None => {
                list.push(id);
                Some(list.len() - 1)
            }
        }
    }

    /// Destroy a panel. Later slots of its type shift down by one.
    pub fn delete_window(&mut self, id: PanelId) -> Option<Box<dyn Panel>> {
        let panel = self.panels.remove(&id)?;
        self.visible.remove(&id);
        if let Some(list) = self.slots.get_mut(&panel.panel_type()) {
            list.retain(|&p| p != id);
        }
        Some(panel)
    }

    /// Mark every panel hidden without destroying any
    pub fn hide_all_before_layout_change(&mut self) {
        self.visible.clear();
    }

    /// Mark a single panel hidden
    pub fn hide_window(&mut self, id: PanelId) {
        self.visible.remove(&id);
    }

    pub fn is_docked(&self, id: PanelId) -> bool {
        self.visible.contains(&id)
    }

    pub fn has_visible_window(&self, ty: PanelType) -> bool {
        self.visible_window(ty).is_some()
    }

    /// First visible instance of `ty` in slot order
    pub fn visible_window(&self, ty: PanelType) -> Option<PanelId> {
        self.slots
            .get(&ty)?
            .iter()
            .copied()
            .find(|id| self.visible.contains(id))
    }

    pub fn slot_of(&self, id: PanelId) -> Option<usize> {
        let ty = self.panel_type(id)?;
        self.slots.get(&ty)?.iter().position(|&p| p == id)
    }
}

impl std::fmt::Debug for PanelPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelPool")
            .field("factories", &self.factories)
            .field("panels", &self.panels.len())
            .field("visible", &self.visible.len())
            .finish()
    }
}
