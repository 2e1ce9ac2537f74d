//! prodcal-hh
//!
//! Connector for the HeadHunter article calendar. HTML only; day cells mix
//! the day number with a label, so tokens are recovered as the first run of
//! digits, and day-off cells are told apart by a nested label element.
#![warn(missing_docs)]

use async_trait::async_trait;
use scraper::ElementRef;

use prodcal_core::scrape::{self, DayLists, ScrapeRules};
use prodcal_core::{
    CalendarRequest, CalendarYear, ProdcalConnector, ProdcalError, ScrapeProvider, Source,
};

/// Address used when the request carries no override.
const DEFAULT_URL: &str = "https://hh.ru/article/calendar";

/// Page layout bindings.
const RULES: ScrapeRules = ScrapeRules {
    months: ".calendar-list__item-body:nth-child(2n+1)",
    month_name: ".calendar-list__item-title",
    holiday_info: ".calendar-info-list",
    holiday_info_item: ".calendar-info-list__item",
};

/// Cells for shortened pre-holiday workdays.
const PRE_HOLIDAY_CELLS: &str =
    ".calendar-list__numbers__item.calendar-list__numbers__item_shortened";
/// Cells for days off; weekends and holidays share this marker.
const DAY_OFF_CELLS: &str = ".calendar-list__numbers__item.calendar-list__numbers__item_day-off";
/// Label text that singles out a plain weekend among the day-off cells.
const DAY_OFF_LABEL: &str = "Выходной день";

/// Public connector type for the HeadHunter calendar.
pub struct HhConnector {
    client: reqwest::Client,
}

impl HhConnector {
    /// Stable connector identifier.
    pub const NAME: &'static str = "prodcal-hh";

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

impl ProdcalConnector for HhConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn source(&self) -> Source {
        Source::HeadHunter
    }

    fn as_scrape_provider(&self) -> Option<&dyn ScrapeProvider> {
        Some(self)
    }
}

#[async_trait]
impl ScrapeProvider for HhConnector {
    fn page_url(&self, req: &CalendarRequest) -> String {
        let base = req.base_url_or(DEFAULT_URL);
        // No separator: the article path ends right before the year.
        format!("{}{}", base.trim_end_matches('/'), req.year())
    }

    async fn scrape_calendar(&self, req: &CalendarRequest) -> Result<CalendarYear, ProdcalError> {
        let url = self.page_url(req);
        let body = scrape::fetch_page(&self.client, &url).await?;
        scrape::parse_calendar(&body, req.year(), &RULES, extract_month)
    }
}

/// Day lists for one month body.
///
/// Every day-off cell whose nested label reads exactly "Выходной день" is a
/// plain weekend; every other day-off cell is a holiday.
fn extract_month(fragment: ElementRef<'_>) -> Result<DayLists, ProdcalError> {
    let mut lists = DayLists::default();

    for cell in fragment.select(&scrape::selector(PRE_HOLIDAY_CELLS)?) {
        lists.pre_holidays.push(day_token(cell));
    }

    for cell in fragment.select(&scrape::selector(DAY_OFF_CELLS)?) {
        let token = day_token(cell);
        if scrape::first_child_text(cell) == DAY_OFF_LABEL {
            lists.weekends.push(token);
        } else {
            lists.holidays.push(token);
        }
    }

    Ok(lists)
}

/// The cell text starts with the day number and continues with a label.
fn day_token(cell: ElementRef<'_>) -> String {
    scrape::first_digits(&scrape::element_text(cell))
}
