use core::fmt;

use serde::{Deserialize, Serialize};

use crate::ProdcalError;

/// Calendar data providers known to the workspace.
///
/// The orchestrator dispatches on this enumeration; each variant maps to one
/// connector crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    /// ConsultantPlus reference calendar (HTML only).
    Consultant,
    /// HeadHunter article calendar (HTML only).
    HeadHunter,
    /// xmlcalendar.ru (HTML page and structured XML feed).
    XmlCalendar,
}

impl Source {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Consultant => "consultant",
            Self::HeadHunter => "headhunter",
            Self::XmlCalendar => "xmlcalendar",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// `ProdcalError::UnknownSource` carries a field named `source`, which thiserror
// treats as the error-chain source and therefore requires to implement
// `std::error::Error`. `Source` already provides `Debug` + `Display`, so the
// default blanket is sufficient.
impl std::error::Error for Source {}

/// Acquisition strategy chosen by the caller.
///
/// The choice is authoritative: a connector that does not implement the
/// requested strategy yields no data rather than silently switching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Structured fetch: retrieve a typed document and deserialize it.
    Api,
    /// Page scrape: retrieve an HTML document and query it by selector.
    Scrape,
}

impl Strategy {
    /// Stable identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Scrape => "scrape",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Localized month names, in calendar order, as the providers publish them.
const MONTH_NAMES: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

/// Localized name for a 1-based month number, or `None` when out of range.
#[must_use]
pub fn month_name(number: u32) -> Option<&'static str> {
    match number {
        1..=12 => Some(MONTH_NAMES[number as usize - 1]),
        _ => None,
    }
}

/// 1-based month number for a localized name, matched case-insensitively.
#[must_use]
pub fn month_number(name: &str) -> Option<u32> {
    let needle = name.trim().to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|m| m.to_lowercase() == needle)
        .map(|i| i as u32 + 1)
}

/// Day classification for one month of the year.
///
/// Month identity is held as both a localized name and a 1-12 number, kept
/// consistent by a single derivation: setting one derives the other through
/// the active month-naming convention, last write wins. A name outside the
/// convention derives number 0; a number outside 1-12 derives an empty name.
///
/// Day lists keep the source's day-of-month tokens as text, not parsed
/// integers: the source-of-truth format varies (bare numbers, ordinal
/// strings) and callers may re-render them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthDays {
    name: String,
    number: u32,
    /// Days off that fall on a regular weekend.
    pub weekends: Vec<String>,
    /// Public holidays.
    pub holidays: Vec<String>,
    /// Shortened pre-holiday workdays.
    pub pre_holidays: Vec<String>,
}

impl MonthDays {
    /// Build from a localized month name, deriving the number.
    #[must_use]
    pub fn from_name(name: impl Into<String>) -> Self {
        let mut m = Self::default();
        m.set_name(name);
        m
    }

    /// Build from a 1-based month number, deriving the localized name.
    #[must_use]
    pub fn from_number(number: u32) -> Self {
        let mut m = Self::default();
        m.set_number(number);
        m
    }

    /// Localized month name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 1-based month number, or 0 when the name did not match the convention.
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Set the name and re-derive the number.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.number = month_number(&self.name).unwrap_or(0);
    }

    /// Set the number and re-derive the name.
    pub fn set_number(&mut self, number: u32) {
        self.number = number;
        self.name = month_name(number).unwrap_or_default().to_string();
    }
}

/// Canonical per-year result of the pipeline.
///
/// Fully assembled in one pass and handed to the caller; the pipeline keeps
/// no reference to it after returning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarYear {
    /// Requested year.
    pub year: i32,
    /// Per-month day classification, in document order.
    pub months: Vec<MonthDays>,
    /// Free-text holiday description, one holiday per line.
    pub holiday_info: String,
}

impl CalendarYear {
    /// Assemble a calendar result.
    #[must_use]
    pub const fn new(year: i32, months: Vec<MonthDays>, holiday_info: String) -> Self {
        Self {
            year,
            months,
            holiday_info,
        }
    }
}

/// Immutable request for one year of calendar data.
///
/// Validated at construction; there is no way to mutate a request afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarRequest {
    year: i32,
    base_url: Option<String>,
    source: Source,
    strategy: Strategy,
}

impl CalendarRequest {
    /// Build a request for `year` against `source` using `strategy`.
    ///
    /// # Errors
    /// Returns [`ProdcalError::InvalidRequest`] when `year` is not positive.
    pub fn new(year: i32, source: Source, strategy: Strategy) -> Result<Self, ProdcalError> {
        if year < 1 {
            return Err(ProdcalError::invalid_request(format!(
                "year must be positive, got {year}"
            )));
        }
        Ok(Self {
            year,
            base_url: None,
            source,
            strategy,
        })
    }

    /// Override the connector's default base URL.
    ///
    /// # Errors
    /// Returns [`ProdcalError::InvalidRequest`] when the override is empty.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, ProdcalError> {
        let base_url = base_url.into();
        if base_url.is_empty() {
            return Err(ProdcalError::invalid_request("base URL override is empty"));
        }
        self.base_url = Some(base_url);
        Ok(self)
    }

    /// Requested year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Base URL override, if any.
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// The override base URL, or the connector's default when none was given.
    #[must_use]
    pub fn base_url_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.base_url.as_deref().unwrap_or(default)
    }

    /// Requested provider.
    #[must_use]
    pub const fn source(&self) -> Source {
        self.source
    }

    /// Requested acquisition strategy.
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_number_round_trips_through_name() {
        let m = MonthDays::from_number(3);
        assert_eq!(m.name(), "Март");
        let back = MonthDays::from_name(m.name());
        assert_eq!(back.number(), 3);
    }

    #[test]
    fn month_name_lookup_is_case_insensitive() {
        assert_eq!(month_number("январь"), Some(1));
        assert_eq!(month_number("  ДЕКАБРЬ "), Some(12));
        assert_eq!(month_number("Brumaire"), None);
    }

    #[test]
    fn unknown_name_derives_number_zero() {
        let m = MonthDays::from_name("Frimaire");
        assert_eq!(m.number(), 0);
        assert_eq!(m.name(), "Frimaire");
    }

    #[test]
    fn out_of_range_number_derives_empty_name() {
        let m = MonthDays::from_number(13);
        assert_eq!(m.name(), "");
        assert_eq!(m.number(), 13);
    }

    #[test]
    fn last_write_wins_between_name_and_number() {
        let mut m = MonthDays::from_number(1);
        m.set_name("Май");
        assert_eq!(m.number(), 5);
        m.set_number(2);
        assert_eq!(m.name(), "Февраль");
    }

    #[test]
    fn request_rejects_non_positive_year() {
        let err = CalendarRequest::new(0, Source::Consultant, Strategy::Scrape).unwrap_err();
        assert!(matches!(err, ProdcalError::InvalidRequest(_)));
    }

    #[test]
    fn request_rejects_empty_base_url_override() {
        let req = CalendarRequest::new(2024, Source::Consultant, Strategy::Scrape).unwrap();
        let err = req.with_base_url("").unwrap_err();
        assert!(matches!(err, ProdcalError::InvalidRequest(_)));
    }
}
