//! Day classifier for the structured-fetch path: reconciles an explicit
//! list of exceptional days against the theoretical weekend calendar.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::ProdcalError;
use crate::types::{MonthDays, month_name};

/// Type code carried by a structured day record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    /// A public holiday; may fall on any weekday.
    Holiday,
    /// A shortened pre-holiday workday.
    Short,
    /// A mandated workday overriding a normally-free Saturday/Sunday.
    WorkingWeekend,
}

impl DayKind {
    /// Map a wire type code (1/2/3) to a kind; unknown codes are dropped
    /// upstream rather than failing the document.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Holiday),
            2 => Some(Self::Short),
            3 => Some(Self::WorkingWeekend),
            _ => None,
        }
    }
}

/// One exceptional day from the structured feed, resolved to a real date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRecord {
    /// The record's date, combined with the document year.
    pub date: NaiveDate,
    /// Raw date token as published (e.g. "01.01"), kept for rendering.
    pub token: String,
    /// Classification code.
    pub kind: DayKind,
    /// Reference into the holiday-name table, when the day belongs to one.
    pub holiday_id: Option<u8>,
}

/// A named holiday from the structured feed's lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayName {
    /// Id referenced by day records.
    pub id: u8,
    /// Holiday title.
    pub title: String,
}

/// Classify one month of `year` against the exceptional-day records.
///
/// Weekends are computed, not read: every Saturday/Sunday of the month is a
/// weekend unless a [`DayKind::WorkingWeekend`] record names that date —
/// those records are the only thing that removes a computed weekend, and
/// they appear in no output list themselves. Holidays keep their place even
/// when they fall on a theoretical weekend.
///
/// # Errors
/// Returns [`ProdcalError::MonthProcessing`] when the month cannot be
/// enumerated; the caller aborts the whole request.
pub fn month_days(
    year: i32,
    month: u32,
    records: &[DayRecord],
) -> Result<MonthDays, ProdcalError> {
    let mut result = MonthDays::from_number(month);

    let in_month = |r: &&DayRecord| r.date.year() == year && r.date.month() == month;

    result.pre_holidays = records
        .iter()
        .filter(in_month)
        .filter(|r| r.kind == DayKind::Short)
        .map(|r| r.date.day().to_string())
        .collect();

    result.holidays = records
        .iter()
        .filter(in_month)
        .filter(|r| r.kind == DayKind::Holiday)
        .map(|r| r.date.day().to_string())
        .collect();

    let mandated_workdays: HashSet<NaiveDate> = records
        .iter()
        .filter(in_month)
        .filter(|r| r.kind == DayKind::WorkingWeekend)
        .map(|r| r.date)
        .collect();

    result.weekends = weekend_dates(year, month)?
        .into_iter()
        .filter(|d| !mandated_workdays.contains(d))
        .map(|d| d.day().to_string())
        .collect();

    Ok(result)
}

/// Classify all twelve months of `year`, in calendar order.
///
/// # Errors
/// Propagates the first per-month failure; no partial list is returned.
pub fn months_of_year(year: i32, records: &[DayRecord]) -> Result<Vec<MonthDays>, ProdcalError> {
    (1..=12).map(|m| month_days(year, m, records)).collect()
}

/// Every Saturday and Sunday of the month, by enumerating each date.
fn weekend_dates(year: i32, month: u32) -> Result<Vec<NaiveDate>, ProdcalError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        ProdcalError::month(
            month_name(month).unwrap_or_default(),
            format!("cannot enumerate month {month} of year {year}"),
        )
    })?;
    Ok(first
        .iter_days()
        .take_while(|d| d.month() == month && d.year() == year)
        .filter(|d| matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .collect())
}

/// Free-text holiday description: one line per named holiday, in table
/// order, rendering the raw date tokens of the records that reference it.
///
/// Names nothing references and references matching no name are silently
/// skipped — a sparse table degrades the description, never the request.
#[must_use]
pub fn holiday_summary(names: &[HolidayName], records: &[DayRecord]) -> String {
    let mut lines = Vec::new();
    for name in names {
        let dates: Vec<&str> = records
            .iter()
            .filter(|r| r.holiday_id == Some(name.id))
            .map(|r| r.token.as_str())
            .collect();
        if dates.is_empty() {
            continue;
        }
        lines.push(format!("{} - {}", dates.join(", "), name.title));
    }
    lines.join("\n").trim_end().to_string()
}
