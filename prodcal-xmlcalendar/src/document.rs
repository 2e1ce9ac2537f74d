//! Typed schema of the xmlcalendar.ru feed and its reduction to classifier
//! records.

use chrono::NaiveDate;
use serde::Deserialize;

use prodcal_core::classify::{DayKind, DayRecord, HolidayName};

/// Exact date format once a day token is combined with the document year.
const DATE_FORMAT: &str = "%m.%d.%Y";

/// Root `<calendar year="..">` element.
#[derive(Debug, Deserialize)]
pub struct CalendarDoc {
    /// Year the feed describes.
    #[serde(rename = "@year")]
    pub year: i32,
    /// Holiday-name lookup table.
    #[serde(default)]
    pub holidays: Holidays,
    /// Exceptional-day list.
    #[serde(default)]
    pub days: Days,
}

/// `<holidays>` container.
#[derive(Debug, Default, Deserialize)]
pub struct Holidays {
    /// Repeated `<holiday id=".." title=".."/>` entries.
    #[serde(rename = "holiday", default)]
    pub items: Vec<Holiday>,
}

/// One `<holiday>` entry.
#[derive(Debug, Deserialize)]
pub struct Holiday {
    /// Id referenced by day records.
    #[serde(rename = "@id")]
    pub id: u8,
    /// Holiday title.
    #[serde(rename = "@title")]
    pub title: String,
}

/// `<days>` container.
#[derive(Debug, Default, Deserialize)]
pub struct Days {
    /// Repeated `<day t=".." d=".." h=".."/>` entries.
    #[serde(rename = "day", default)]
    pub items: Vec<Day>,
}

/// One `<day>` entry: type code 1/2/3, date as `MM.DD`, optional holiday
/// reference (`0` meaning none).
#[derive(Debug, Deserialize)]
pub struct Day {
    /// Type code: 1 holiday, 2 shortened, 3 mandated workday.
    #[serde(rename = "@t")]
    pub t: u8,
    /// Date token, `MM.DD`.
    #[serde(rename = "@d")]
    pub d: String,
    /// Holiday-table reference; absent or `0` when the day names none.
    #[serde(rename = "@h", default)]
    pub h: u8,
}

impl CalendarDoc {
    /// Resolve the day list against the document year, once per request.
    ///
    /// Entries whose date does not parse under the exact `MM.dd.yyyy`
    /// format, or whose type code is unknown, are dropped rather than
    /// failing the document.
    #[must_use]
    pub fn day_records(&self) -> Vec<DayRecord> {
        self.days
            .items
            .iter()
            .filter_map(|day| {
                let kind = DayKind::from_code(day.t)?;
                let date =
                    NaiveDate::parse_from_str(&format!("{}.{}", day.d, self.year), DATE_FORMAT)
                        .ok()?;
                Some(DayRecord {
                    date,
                    token: day.d.clone(),
                    kind,
                    holiday_id: (day.h != 0).then_some(day.h),
                })
            })
            .collect()
    }

    /// The holiday-name table in document order.
    #[must_use]
    pub fn holiday_names(&self) -> Vec<HolidayName> {
        self.holidays
            .items
            .iter()
            .map(|h| HolidayName {
                id: h.id,
                title: h.title.clone(),
            })
            .collect()
    }
}
