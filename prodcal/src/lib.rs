//! Prodcal orchestrates yearly production-calendar requests across multiple
//! data providers.
//!
//! Overview
//! - Routes a [`CalendarRequest`] to the connector registered for its
//!   source and the acquisition strategy the caller chose.
//! - Capability negotiation is explicit: connectors advertise the
//!   strategies they implement, and a mismatch yields no data instead of a
//!   silent strategy switch.
//! - Whatever the provider's format — marked-up HTML calendars or a typed
//!   XML feed — the result is one canonical [`CalendarYear`]: twelve months
//!   of weekend / holiday / pre-holiday day tokens plus a free-text holiday
//!   description.
//!
//! Examples
//! Resolving a year through the bundled connectors:
//! ```rust,ignore
//! use prodcal::{CalendarRequest, Prodcal, Source, Strategy};
//!
//! let prodcal = Prodcal::with_default_connectors();
//! let req = CalendarRequest::new(2024, Source::XmlCalendar, Strategy::Api)?;
//! let year = prodcal.calendar(&req).await?;
//! for month in &year.months {
//!     println!("{}: {} days off", month.name(), month.weekends.len());
//! }
//! ```
//!
//! Checking capabilities before choosing a strategy:
//! ```rust,ignore
//! use prodcal::{Prodcal, Source, Strategy};
//!
//! let prodcal = Prodcal::with_default_connectors();
//! assert!(prodcal.supports_scrape(Source::Consultant));
//! assert!(!prodcal.supports_api(Source::Consultant));
//! ```
//!
//! A custom registry replaces or narrows the bundled set:
//! ```rust,ignore
//! use std::sync::Arc;
//! use prodcal::Prodcal;
//! use prodcal_xmlcalendar::XmlCalendarConnector;
//!
//! let prodcal = Prodcal::builder()
//!     .with_connector(Arc::new(XmlCalendarConnector::new_default()))
//!     .build();
//! ```
#![warn(missing_docs)]

mod core;
mod router;

pub use crate::core::{Prodcal, ProdcalBuilder};

// Re-export core types for convenience
pub use prodcal_core::{
    ApiProvider, CalendarRequest, CalendarYear, MonthDays, ProdcalConnector, ProdcalError,
    ScrapeProvider, Source, Strategy,
};

// Re-export the bundled connectors
pub use prodcal_consultant::ConsultantConnector;
pub use prodcal_hh::HhConnector;
pub use prodcal_xmlcalendar::XmlCalendarConnector;
