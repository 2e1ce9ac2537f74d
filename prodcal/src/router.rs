use prodcal_core::{CalendarRequest, CalendarYear, ProdcalError, Strategy};

use crate::Prodcal;

impl Prodcal {
    /// Resolve one year of calendar data.
    ///
    /// Behavior:
    /// - The request is validated before any collaborator is contacted; a
    ///   structurally invalid request costs no network call.
    /// - The caller's strategy choice is authoritative. A connector that
    ///   does not implement the requested strategy yields `Unsupported` —
    ///   the orchestrator never switches strategy behind the caller's back.
    ///   Check [`supports_api`](Self::supports_api) /
    ///   [`supports_scrape`](Self::supports_scrape) before choosing.
    /// - At most one outbound request is made, on the caller's task, with
    ///   no internal parallelism and no retries.
    /// - Every failure is reported once here, with source, strategy, year,
    ///   and cause; connectors do not log.
    ///
    /// # Errors
    /// Any [`ProdcalError`]; all are terminal for the request and a partial
    /// result is never returned.
    pub async fn calendar(&self, req: &CalendarRequest) -> Result<CalendarYear, ProdcalError> {
        tracing::debug!(
            source = %req.source(),
            strategy = %req.strategy(),
            year = req.year(),
            "resolving calendar request"
        );
        match self.resolve(req).await {
            Ok(result) => Ok(result),
            Err(e) => {
                tracing::error!(
                    source = %req.source(),
                    strategy = %req.strategy(),
                    year = req.year(),
                    error = %e,
                    "calendar request failed"
                );
                Err(e)
            }
        }
    }

    async fn resolve(&self, req: &CalendarRequest) -> Result<CalendarYear, ProdcalError> {
        validate(req)?;

        let connector = self
            .connector_for(req.source())
            .ok_or(ProdcalError::UnknownSource {
                source: req.source(),
            })?;

        match req.strategy() {
            Strategy::Api => {
                connector
                    .as_api_provider()
                    .ok_or(ProdcalError::unsupported("api"))?
                    .fetch_calendar(req)
                    .await
            }
            Strategy::Scrape => {
                connector
                    .as_scrape_provider()
                    .ok_or(ProdcalError::unsupported("scrape"))?
                    .scrape_calendar(req)
                    .await
            }
        }
    }
}

/// Structural checks the constructor already enforces, re-run at the
/// boundary: requests can also arrive through deserialization, which
/// bypasses the constructor.
fn validate(req: &CalendarRequest) -> Result<(), ProdcalError> {
    if req.year() < 1 {
        return Err(ProdcalError::invalid_request(format!(
            "year must be positive, got {}",
            req.year()
        )));
    }
    if req.base_url().is_some_and(str::is_empty) {
        return Err(ProdcalError::invalid_request("base URL override is empty"));
    }
    Ok(())
}
