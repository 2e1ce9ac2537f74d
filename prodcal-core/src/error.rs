use thiserror::Error;

use crate::types::Source;

/// Unified error type for the prodcal workspace.
///
/// Every failure in the pipeline is terminal for the request: nothing is
/// retried, and no partially-filled calendar is ever returned alongside one
/// of these.
#[derive(Debug, Error)]
pub enum ProdcalError {
    /// The request failed structural validation; no collaborator was contacted.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// No connector is registered for the requested source.
    #[error("unknown source: {source}")]
    UnknownSource {
        /// Source the caller asked for.
        source: Source,
    },

    /// The requested acquisition strategy is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested ("api" or "scrape").
        capability: &'static str,
    },

    /// Structured fetch failed at the transport layer (network error or non-2xx).
    #[error("transport error: {0}")]
    Transport(String),

    /// The structured document body was empty or did not match the schema.
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// Loading or querying a scraped page failed.
    #[error("fetch error: {0}")]
    Fetch(String),

    /// The scraped page did not contain one section per calendar month.
    #[error("malformed page: expected 12 month sections, got {got}")]
    MalformedPage {
        /// Number of month sections actually found.
        got: usize,
    },

    /// Extracting one month's day lists failed; the whole request is aborted.
    #[error("failed to process month '{month}': {msg}")]
    MonthProcessing {
        /// Display name of the month being processed when the failure occurred.
        month: String,
        /// Human-readable underlying cause.
        msg: String,
    },
}

impl ProdcalError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub const fn unsupported(capability: &'static str) -> Self {
        Self::Unsupported { capability }
    }

    /// Helper: build an `InvalidRequest` error.
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Helper: build a `Transport` error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Helper: build a `Deserialization` error.
    pub fn deserialization(msg: impl Into<String>) -> Self {
        Self::Deserialization(msg.into())
    }

    /// Helper: build a `Fetch` error.
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Helper: wrap an extraction failure as a `MonthProcessing` error.
    pub fn month(month: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self::MonthProcessing {
            month: month.into(),
            msg: cause.to_string(),
        }
    }
}
