use std::sync::Arc;

use prodcal_core::{ProdcalConnector, Source};
use prodcal_consultant::ConsultantConnector;
use prodcal_hh::HhConnector;
use prodcal_xmlcalendar::XmlCalendarConnector;

/// Orchestrator that routes calendar requests to registered provider
/// connectors.
pub struct Prodcal {
    pub(crate) connectors: Vec<Arc<dyn ProdcalConnector>>,
}

/// Builder for constructing a `Prodcal` orchestrator with a custom
/// connector registry.
pub struct ProdcalBuilder {
    connectors: Vec<Arc<dyn ProdcalConnector>>,
}

impl Default for ProdcalBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProdcalBuilder {
    /// Create a builder with an empty registry.
    ///
    /// A request against a source with no registered connector resolves to
    /// `UnknownSource`; register at least one connector via
    /// [`with_connector`](Self::with_connector).
    #[must_use]
    pub fn new() -> Self {
        Self { connectors: vec![] }
    }

    /// Register a provider connector.
    ///
    /// When several connectors claim the same source, the first registered
    /// one wins; duplicates are not deduplicated.
    #[must_use]
    pub fn with_connector(mut self, connector: Arc<dyn ProdcalConnector>) -> Self {
        self.connectors.push(connector);
        self
    }

    /// Finalize the registry.
    #[must_use]
    pub fn build(self) -> Prodcal {
        Prodcal {
            connectors: self.connectors,
        }
    }
}

impl Prodcal {
    /// Start building an orchestrator with a custom registry.
    #[must_use]
    pub fn builder() -> ProdcalBuilder {
        ProdcalBuilder::new()
    }

    /// Orchestrator with every bundled connector registered.
    #[must_use]
    pub fn with_default_connectors() -> Self {
        Self::builder()
            .with_connector(Arc::new(ConsultantConnector::new_default()))
            .with_connector(Arc::new(HhConnector::new_default()))
            .with_connector(Arc::new(XmlCalendarConnector::new_default()))
            .build()
    }

    /// First registered connector claiming `source`.
    pub(crate) fn connector_for(&self, source: Source) -> Option<&dyn ProdcalConnector> {
        self.connectors
            .iter()
            .find(|c| c.source() == source)
            .map(|c| c.as_ref())
    }

    /// Whether the registered connector for `source` can serve the API
    /// strategy. Unknown sources answer `false`.
    #[must_use]
    pub fn supports_api(&self, source: Source) -> bool {
        self.connector_for(source)
            .is_some_and(ProdcalConnector::supports_api)
    }

    /// Whether the registered connector for `source` can serve the scrape
    /// strategy. Unknown sources answer `false`.
    #[must_use]
    pub fn supports_scrape(&self, source: Source) -> bool {
        self.connector_for(source)
            .is_some_and(ProdcalConnector::supports_scrape)
    }
}
