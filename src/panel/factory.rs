//! Panel factories and their registration table

use super::{Panel, PanelType};

/// Creates panels of one kind
pub trait PanelFactory {
    /// Name the panel type is derived from
    fn type_name(&self) -> &str;

    fn panel_type(&self) -> PanelType {
        PanelType::from_name(self.type_name())
    }

    /// At most one visible instance may exist
    fn is_unique(&self) -> bool {
        false
    }

    /// Menu text for creating a panel of this kind
    fn title(&self) -> String;

    fn create(&self) -> Box<dyn Panel>;
}

/// Open registration table of panel factories.
///
/// Built once at startup by the host. Each dock area owns its own copy, so
/// tests can use isolated registries.
#[derive(Default)]
pub struct FactoryRegistry {
    factories: Vec<(PanelType, Box<dyn PanelFactory>)>,
}

impl FactoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory, replacing any earlier one for the same type
    pub fn register(&mut self, factory: Box<dyn PanelFactory>) -> PanelType {
        let ty = factory.panel_type();
        match self.factories.iter_mut().find(|(t, _)| *t == ty) {
            Some(slot) => {
                tracing::warn!("Replacing factory for panel type {}", factory.type_name());
                slot.1 = factory;
            }
            None => self.factories.push((ty, factory)),
        }
        ty
    }

    pub fn with(mut self, factory: impl PanelFactory + 'static) -> Self {
        self.register(Box::new(factory));
        self
    }

    pub fn factory(&self, ty: PanelType) -> Option<&dyn PanelFactory> {
        self.factories
            .iter()
            .find(|(t, _)| *t == ty)
            .map(|(_, f)| f.as_ref())
    }

    /// The first registered factory; used when no specific type is requested
    pub fn first(&self) -> Option<&dyn PanelFactory> {
        self.factories.first().map(|(_, f)| f.as_ref())
    }

    pub fn contains(&self, ty: PanelType) -> bool {
        self.factory(ty).is_some()
    }

    /// Factories in registration order
    pub fn iter(&self) -> impl Iterator<Item = (PanelType, &dyn PanelFactory)> {
        self.factories.iter().map(|(t, f)| (*t, f.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl std::fmt::Debug for FactoryRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.factories.iter().map(|(_, factory)| factory.type_name()))
            .finish()
    }
}
