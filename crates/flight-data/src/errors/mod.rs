//! Error types for the flight data crate.
//!
//! This module provides [`FlightDataError`], the single error enum returned by
//! validation, request mapping, response extraction and the scraper itself.

use thiserror::Error;

/// Errors that can occur while searching for fares.
///
/// Nothing in this crate retries or swallows errors: every variant is
/// surfaced to the immediate caller. Use [`is_caller_error`](Self::is_caller_error)
/// to tell bad input apart from provider or transport faults.
#[derive(Error, Debug)]
pub enum FlightDataError {
    /// The search parameters fall outside what the provider integration supports.
    #[error("{0}")]
    UnsupportedQuery(String),

    /// The request succeeded but the provider returned no fares.
    /// A legitimate business outcome, not a fault.
    #[error("{0}")]
    NoQuotes(String),

    /// The query's flight date is not a zero-padded `YYYY-MM-DD` date.
    #[error("Invalid date format: {value}")]
    DateFormat {
        /// The rejected date string
        value: String,
        /// chrono's reason, absent when the date parsed but is not canonical
        #[source]
        source: Option<chrono::ParseError>,
    },

    /// A combined provider field did not split into exactly two tokens.
    #[error("Malformed field {field}: {value:?}")]
    MalformedField {
        /// Provider field name (e.g. `flightno`, `sectorpair`)
        field: &'static str,
        /// The raw value received from the provider
        value: String,
    },

    /// The provider response does not match the expected schema.
    #[error("Malformed response: {message}")]
    MalformedResponse {
        /// Description of the schema mismatch
        message: String,
    },

    /// The provider answered with a non-success HTTP status.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// Status line and a snippet of the body
        message: String,
    },

    /// The response body is not valid JSON.
    #[error("Response parse error: {0}")]
    ResponseParse(#[from] serde_json::Error),

    /// A network error occurred while communicating with the provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl FlightDataError {
    /// Returns true when the caller can fix the error by changing the query.
    ///
    /// ```
    /// use farewatch_flight_data::errors::FlightDataError;
    ///
    /// let error = FlightDataError::UnsupportedQuery("Search parameters validation failed".into());
    /// assert!(error.is_caller_error());
    ///
    /// let error = FlightDataError::NoQuotes("No fares for search parameters".into());
    /// assert!(!error.is_caller_error());
    /// ```
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::UnsupportedQuery(_) | Self::DateFormat { .. })
    }

    pub(crate) fn malformed_response(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }
}
