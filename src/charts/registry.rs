use indexmap::IndexMap;
use tracing::debug;

use crate::api::{ChartConfiguration, ChartKind};
use crate::dom::Element;
use crate::error::{ChartError, ChartResult};

use super::{ChartRenderer, SceneChart};

/// Builds a renderer for a normalized configuration inside its wrapper.
pub type RendererFactory = Box<dyn Fn(&ChartConfiguration, &Element) -> Box<dyn ChartRenderer>>;

/// Chart kind → renderer factory table.
///
/// [`RendererRegistry::new`] holds the four built-in renderers; hosts swap or
/// add behavior with [`RendererRegistry::register`].
pub struct RendererRegistry {
    factories: IndexMap<ChartKind, RendererFactory>,
}

impl RendererRegistry {
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for kind in ChartKind::ALL {
            registry.register(kind, move |config, wrapper| {
                Box::new(SceneChart::new(kind, config, wrapper))
            });
        }
        registry
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            factories: IndexMap::new(),
        }
    }

    /// Registers `factory` for `kind`. Returns `true` when it replaced a
    /// previous factory.
    pub fn register(
        &mut self,
        kind: ChartKind,
        factory: impl Fn(&ChartConfiguration, &Element) -> Box<dyn ChartRenderer> + 'static,
    ) -> bool {
        let replaced = self.factories.insert(kind, Box::new(factory)).is_some();
        debug!(%kind, replaced, "registered chart renderer");
        replaced
    }

    /// Unregisters the factory for `kind`. Returns `true` when removed.
    pub fn unregister(&mut self, kind: ChartKind) -> bool {
        self.factories.shift_remove(&kind).is_some()
    }

    #[must_use]
    pub fn contains(&self, kind: ChartKind) -> bool {
        self.factories.contains_key(&kind)
    }

    #[must_use]
    pub fn kinds(&self) -> Vec<ChartKind> {
        self.factories.keys().copied().collect()
    }

    pub fn create(
        &self,
        kind: ChartKind,
        config: &ChartConfiguration,
        wrapper: &Element,
    ) -> ChartResult<Box<dyn ChartRenderer>> {
        let factory = self
            .factories
            .get(&kind)
            .ok_or(ChartError::MissingRenderer { kind })?;
        Ok(factory(config, wrapper))
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RendererRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}
