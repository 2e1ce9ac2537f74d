//! prodcal-consultant
//!
//! Connector for the ConsultantPlus reference calendar. The provider
//! publishes one marked-up HTML page per year and has no structured feed,
//! so this connector advertises the scrape capability only.
#![warn(missing_docs)]

use async_trait::async_trait;
use scraper::ElementRef;

use prodcal_core::scrape::{self, DayLists, ScrapeRules};
use prodcal_core::{
    CalendarRequest, CalendarYear, ProdcalConnector, ProdcalError, ScrapeProvider, Source,
};

/// Address used when the request carries no override.
const DEFAULT_URL: &str = "https://www.consultant.ru/law/ref/calendar/proizvodstvennye/";

/// Page layout bindings.
const RULES: ScrapeRules = ScrapeRules {
    months: ".cal",
    month_name: ".month:first-of-type",
    holiday_info: "blockquote:first-of-type",
    holiday_info_item: "p",
};

/// Day-off cells; restricted to `td` because header cells reuse the class.
const DAY_OFF_CELLS: &str = "td.weekend";
/// Class attribute marking a plain weekend cell.
const WEEKEND_CLASS: &str = "weekend";
/// Class attribute marking a holiday cell.
const HOLIDAY_CLASS: &str = "holiday weekend";
/// Cells for shortened pre-holiday workdays.
const PRE_HOLIDAY_CELLS: &str = ".preholiday";

/// Public connector type for the ConsultantPlus calendar.
pub struct ConsultantConnector {
    client: reqwest::Client,
}

impl ConsultantConnector {
    /// Stable connector identifier.
    pub const NAME: &'static str = "prodcal-consultant";

    /// Build with a fresh HTTP client.
    #[must_use]
    pub fn new_default() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Build around an existing HTTP client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl ProdcalConnector for ConsultantConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn source(&self) -> Source {
        Source::Consultant
    }

    fn as_scrape_provider(&self) -> Option<&dyn ScrapeProvider> {
        Some(self)
    }
}

#[async_trait]
impl ScrapeProvider for ConsultantConnector {
    fn page_url(&self, req: &CalendarRequest) -> String {
        let base = req.base_url_or(DEFAULT_URL);
        format!("{}/{}", base.trim_end_matches('/'), req.year())
    }

    async fn scrape_calendar(&self, req: &CalendarRequest) -> Result<CalendarYear, ProdcalError> {
        let url = self.page_url(req);
        let body = scrape::fetch_page(&self.client, &url).await?;
        scrape::parse_calendar(&body, req.year(), &RULES, extract_month)
    }
}

/// Day lists for one month table.
///
/// The day-off cells carry the weekend class either alone (plain weekend)
/// or together with the holiday class; the literal class attribute is the
/// discriminator. Pre-holiday cells mark the token with a trailing `*`.
fn extract_month(fragment: ElementRef<'_>) -> Result<DayLists, ProdcalError> {
    let mut lists = DayLists::default();

    for cell in fragment.select(&scrape::selector(PRE_HOLIDAY_CELLS)?) {
        let token = scrape::element_text(cell);
        lists
            .pre_holidays
            .push(token.trim_matches('*').trim().to_string());
    }

    for cell in fragment.select(&scrape::selector(DAY_OFF_CELLS)?) {
        let token = scrape::element_text(cell);
        match scrape::class_attr(cell) {
            WEEKEND_CLASS => lists.weekends.push(token),
            HOLIDAY_CLASS => lists.holidays.push(token),
            _ => {}
        }
    }

    Ok(lists)
}
