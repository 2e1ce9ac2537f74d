//! Page-scrape acquisition: load a rendered calendar page and reduce its
//! month sections to canonical day lists.
//!
//! The engine owns the parts every scraped provider shares — fetching the
//! document, the twelve-month structural gate, month-name and holiday-info
//! extraction — and delegates the provider-specific day-list extraction to a
//! function supplied by the connector.

use std::sync::OnceLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::ProdcalError;
use crate::types::{CalendarYear, MonthDays};

/// Number of month sections a well-formed calendar page must contain.
///
/// This count is the sole structural integrity gate for scraped sources.
pub const MONTHS_IN_YEAR: usize = 12;

/// Selector set binding one provider's page layout to the engine.
#[derive(Debug, Clone, Copy)]
pub struct ScrapeRules {
    /// Selector matching one element group per month.
    pub months: &'static str,
    /// Selector for the month display name, scoped to a month group.
    pub month_name: &'static str,
    /// Selector for the holiday-info container, scoped to the document.
    pub holiday_info: &'static str,
    /// Selector for one info line, scoped to the holiday-info container.
    pub holiday_info_item: &'static str,
}

/// Day lists extracted from a single month fragment by a provider-specific
/// extraction function.
#[derive(Debug, Default)]
pub struct DayLists {
    /// Day tokens marked as plain weekends.
    pub weekends: Vec<String>,
    /// Day tokens marked as holidays.
    pub holidays: Vec<String>,
    /// Day tokens marked as shortened pre-holiday workdays.
    pub pre_holidays: Vec<String>,
}

/// Parse a selector constant, mapping invalid syntax to a fetch failure.
///
/// # Errors
/// Returns [`ProdcalError::Fetch`] when the selector does not parse.
pub fn selector(s: &str) -> Result<Selector, ProdcalError> {
    Selector::parse(s).map_err(|e| ProdcalError::fetch(format!("invalid selector '{s}': {e}")))
}

/// Retrieve the page body as text.
///
/// There is no HTTP status gate here: whatever body comes back is handed to
/// the structural validation in [`parse_calendar`].
///
/// # Errors
/// Returns [`ProdcalError::Fetch`] on any transport failure.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String, ProdcalError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| ProdcalError::fetch(format!("GET {url}: {e}")))?;
    response
        .text()
        .await
        .map_err(|e| ProdcalError::fetch(format!("read {url}: {e}")))
}

/// Reduce a fetched page to the canonical calendar result.
///
/// Validates that the month-group selector yields exactly
/// [`MONTHS_IN_YEAR`] matches, then walks them in document order. Any
/// failure inside `extract` aborts the entire request as
/// [`ProdcalError::MonthProcessing`] carrying the month's display name;
/// partial results are never returned.
///
/// # Errors
/// `MalformedPage` on a month-count mismatch, `Fetch` on selector failures,
/// `MonthProcessing` on a per-month extraction failure.
pub fn parse_calendar<F>(
    html: &str,
    year: i32,
    rules: &ScrapeRules,
    extract: F,
) -> Result<CalendarYear, ProdcalError>
where
    F: Fn(ElementRef<'_>) -> Result<DayLists, ProdcalError>,
{
    let document = Html::parse_document(html);
    let month_sel = selector(rules.months)?;
    let name_sel = selector(rules.month_name)?;

    let fragments: Vec<ElementRef<'_>> = document.select(&month_sel).collect();
    if fragments.len() != MONTHS_IN_YEAR {
        return Err(ProdcalError::MalformedPage {
            got: fragments.len(),
        });
    }

    let mut months = Vec::with_capacity(MONTHS_IN_YEAR);
    for fragment in fragments {
        // A missing name element degrades to an empty name; the extraction
        // itself decides whether the fragment is usable.
        let name = fragment
            .select(&name_sel)
            .next()
            .map(element_text)
            .unwrap_or_default();
        let lists = extract(fragment).map_err(|e| ProdcalError::month(&name, e))?;

        let mut month = MonthDays::from_name(name);
        month.weekends = lists.weekends;
        month.holidays = lists.holidays;
        month.pre_holidays = lists.pre_holidays;
        months.push(month);
    }

    let holiday_info = extract_holiday_info(&document, rules)?;
    Ok(CalendarYear::new(year, months, holiday_info))
}

/// Text of every info line under the holiday container, joined by newlines.
/// An absent container yields an empty description, not an error.
fn extract_holiday_info(document: &Html, rules: &ScrapeRules) -> Result<String, ProdcalError> {
    let container_sel = selector(rules.holiday_info)?;
    let item_sel = selector(rules.holiday_info_item)?;
    Ok(document
        .select(&container_sel)
        .next()
        .map(|container| {
            container
                .select(&item_sel)
                .map(element_text)
                .collect::<Vec<_>>()
                .join("\n")
        })
        .unwrap_or_default())
}

/// Concatenated, whitespace-trimmed text content of an element.
#[must_use]
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// The element's literal `class` attribute, or `""` when absent.
#[must_use]
pub fn class_attr(element: ElementRef<'_>) -> &str {
    element.value().attr("class").unwrap_or("")
}

/// Trimmed text of the element's first child element, or `""` when it has
/// no element children.
#[must_use]
pub fn first_child_text(element: ElementRef<'_>) -> String {
    element
        .children()
        .filter_map(ElementRef::wrap)
        .next()
        .map(element_text)
        .unwrap_or_default()
}

/// First run of decimal digits in `text`, or `""` when there is none.
///
/// Needed where a day cell's text carries a label next to the number,
/// e.g. "5 (short day)".
#[must_use]
pub fn first_digits(text: &str) -> String {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    let re = DIGITS.get_or_init(|| Regex::new(r"\d+").expect("digit pattern is valid"));
    re.find(text).map(|m| m.as_str().to_string()).unwrap_or_default()
}
