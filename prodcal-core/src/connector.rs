use async_trait::async_trait;

use crate::ProdcalError;
use crate::types::{CalendarRequest, CalendarYear, Source};

/// Focused role trait for connectors that expose a structured feed.
#[async_trait]
pub trait ApiProvider: Send + Sync {
    /// URL of the structured document for the given request.
    fn api_url(&self, req: &CalendarRequest) -> String;

    /// Fetch and deserialize the structured document, then classify its days.
    async fn fetch_calendar(&self, req: &CalendarRequest) -> Result<CalendarYear, ProdcalError>;
}

/// Focused role trait for connectors that scrape a rendered calendar page.
#[async_trait]
pub trait ScrapeProvider: Send + Sync {
    /// URL of the calendar page for the given request.
    fn page_url(&self, req: &CalendarRequest) -> String;

    /// Load the page, query it by selector, and assemble the canonical result.
    async fn scrape_calendar(&self, req: &CalendarRequest) -> Result<CalendarYear, ProdcalError>;
}

/// Main connector trait implemented by provider crates. Exposes capability
/// discovery.
///
/// Capabilities are advertised by returning a usable trait object reference,
/// decided at construction time; the orchestrator never inspects concrete
/// connector types.
pub trait ProdcalConnector: Send + Sync {
    /// A stable identifier for logs and errors (e.g., "prodcal-consultant").
    fn name(&self) -> &'static str;

    /// The provider this connector serves.
    fn source(&self) -> Source;

    /// Advertise the structured-fetch capability when supported.
    fn as_api_provider(&self) -> Option<&dyn ApiProvider> {
        None
    }

    /// Advertise the page-scrape capability when supported.
    fn as_scrape_provider(&self) -> Option<&dyn ScrapeProvider> {
        None
    }

    /// Whether this connector can serve the API strategy.
    fn supports_api(&self) -> bool {
        self.as_api_provider().is_some()
    }

    /// Whether this connector can serve the scrape strategy.
    fn supports_scrape(&self) -> bool {
        self.as_scrape_provider().is_some()
    }
}
