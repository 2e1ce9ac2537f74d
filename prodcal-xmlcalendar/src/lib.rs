//! prodcal-xmlcalendar
//!
//! Connector for xmlcalendar.ru, the only provider exposing both a
//! structured XML feed and a rendered HTML page. The feed path classifies
//! days from type-coded records; the page path scrapes marker classes.
//!
//! Scrape-mode limitation: the page marks holidays and plain weekends with
//! the same class, so the scraped holiday list is always empty. The feed
//! has no such ambiguity and should be preferred when holiday data matters.
#![warn(missing_docs)]

pub mod document;

use async_trait::async_trait;
use scraper::ElementRef;

use prodcal_core::scrape::{self, DayLists, ScrapeRules};
use prodcal_core::{
    ApiProvider, CalendarRequest, CalendarYear, ProdcalConnector, ProdcalError, ScrapeProvider,
    Source, classify,
};

use document::CalendarDoc;

/// Page address used when the request carries no override.
const DEFAULT_URL: &str = "http://xmlcalendar.ru/html.php?y=";
/// Feed address used when the request carries no override.
const DEFAULT_API_URL: &str = "http://xmlcalendar.ru/data/ru/";
/// Content type requested from the feed.
const API_CONTENT_TYPE: &str = "application/xml";

/// Page layout bindings.
const RULES: ScrapeRules = ScrapeRules {
    months: ".pcal-month",
    month_name: ".pcal-month-name",
    holiday_info: ".pcal-holidays-container",
    holiday_info_item: "li",
};

/// Cells for shortened pre-holiday workdays.
const PRE_HOLIDAY_CELLS: &str = ".pcal-day.pcal-day-short";
/// Cells for days off; the page does not tell holidays apart from weekends.
const DAY_OFF_CELLS: &str = ".pcal-day.pcal-day-holiday";

/// Public connector type for xmlcalendar.ru.
pub struct XmlCalendarConnector {
    client: reqwest::Client,
}

impl XmlCalendarConnector {
    /// Stable connector identifier.
    pub const NAME: &'static str = "prodcal-xmlcalendar";

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

impl ProdcalConnector for XmlCalendarConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn source(&self) -> Source {
        Source::XmlCalendar
    }

    fn as_api_provider(&self) -> Option<&dyn ApiProvider> {
        Some(self)
    }

    fn as_scrape_provider(&self) -> Option<&dyn ScrapeProvider> {
        Some(self)
    }
}

#[async_trait]
impl ApiProvider for XmlCalendarConnector {
    fn api_url(&self, req: &CalendarRequest) -> String {
        let base = req.base_url_or(DEFAULT_API_URL);
        format!("{}/{}/calendar.xml", base.trim_end_matches('/'), req.year())
    }

    async fn fetch_calendar(&self, req: &CalendarRequest) -> Result<CalendarYear, ProdcalError> {
        let url = self.api_url(req);
        let doc: CalendarDoc =
            prodcal_core::fetch::fetch_xml(&self.client, &url, API_CONTENT_TYPE).await?;

        // Resolved once; both the month pass and the summary read this list.
        let records = doc.day_records();
        let months = classify::months_of_year(doc.year, &records)?;
        let holiday_info = classify::holiday_summary(&doc.holiday_names(), &records);
        Ok(CalendarYear::new(req.year(), months, holiday_info))
    }
}

#[async_trait]
impl ScrapeProvider for XmlCalendarConnector {
    fn page_url(&self, req: &CalendarRequest) -> String {
        // The default base ends in a query prefix; the year is appended as-is.
        format!("{}{}", req.base_url_or(DEFAULT_URL), req.year())
    }

    async fn scrape_calendar(&self, req: &CalendarRequest) -> Result<CalendarYear, ProdcalError> {
        let url = self.page_url(req);
        let body = scrape::fetch_page(&self.client, &url).await?;
        scrape::parse_calendar(&body, req.year(), &RULES, extract_month)
    }
}

/// Day lists for one month block.
///
/// Every day-off cell lands in the weekend list: the markup gives no signal
/// to split holidays out, so that list stays empty in scrape mode.
fn extract_month(fragment: ElementRef<'_>) -> Result<DayLists, ProdcalError> {
    let mut lists = DayLists::default();

    for cell in fragment.select(&scrape::selector(PRE_HOLIDAY_CELLS)?) {
        lists.pre_holidays.push(scrape::element_text(cell));
    }

    for cell in fragment.select(&scrape::selector(DAY_OFF_CELLS)?) {
        lists.weekends.push(scrape::element_text(cell));
    }

    Ok(lists)
}
