//! prodcal-core
//!
//! Core types, traits, and acquisition engines shared across the prodcal
//! ecosystem.
//!
//! - `types`: the canonical model (`CalendarYear`, `MonthDays`) and the
//!   validated, immutable `CalendarRequest`.
//! - `connector`: the `ProdcalConnector` trait and the capability role
//!   traits (`ApiProvider`, `ScrapeProvider`).
//! - `scrape`: the page-scrape engine — selector plumbing, the
//!   twelve-month structural gate, shared text helpers.
//! - `fetch`: the structured-fetch engine — one GET, a 2xx gate, XML
//!   deserialization.
//! - `classify`: the day classifier reconciling type-coded records against
//!   the theoretical weekend calendar.
//!
//! A request flows through exactly one connector, one acquisition strategy,
//! and one classification pass, on the caller's task, with no internal
//! parallelism and nothing shared between requests.
#![warn(missing_docs)]

pub mod classify;
/// Connector capability traits and the primary `ProdcalConnector` interface.
pub mod connector;
mod error;
pub mod fetch;
pub mod scrape;
/// Canonical model and request types.
pub mod types;

pub use connector::{ApiProvider, ProdcalConnector, ScrapeProvider};
pub use error::ProdcalError;
pub use types::{CalendarRequest, CalendarYear, MonthDays, Source, Strategy};
