//! Buddha Air one-way fare scraper.
//!
//! Posts search parameters to the Buddha Air flight availability endpoint and
//! normalises the answer into flat [`Quote`]s.
//!
//! # Flow
//!
//! ```text
//! SearchQuery -> is_valid -> request_params -> POST (form) -> extract_quotes -> Vec<Quote>
//! ```
//!
//! Only one-way searches without infants and with fewer than 8 seated
//! passengers are supported. Anything else is rejected before the request is
//! sent.

mod extract;
mod models;
mod request;

use log::{debug, info};

use crate::errors::FlightDataError;
use crate::models::{Quote, SearchQuery};
use crate::provider::{AvailabilityTransport, HttpTransport, ProviderConfig};
use crate::validator::is_valid;

pub use extract::extract_quotes;
pub use request::{provider_date, request_params};

/// Error message for queries outside the supported feature set.
pub const UNSUPPORTED_QUERY_MESSAGE: &str = "Search parameters validation failed";

/// Error message for searches that returned no fares.
pub const NO_QUOTES_MESSAGE: &str = "No fares for search parameters";

/// Fare scraper over an availability transport.
///
/// # Example
///
/// ```ignore
/// let scraper = FlightScraper::new(HttpTransport::new(ProviderConfig::default())?);
/// let quotes = scraper.scrape(&SearchQuery::one_way("KTM", "BIR", "2021-05-12")).await?;
/// ```
pub struct FlightScraper<T> {
    transport: T,
}

impl<T: AvailabilityTransport> FlightScraper<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Validate the query, fetch availability once and return the fares.
    ///
    /// # Errors
    ///
    /// - [`FlightDataError::UnsupportedQuery`] if the query fails validation (no request is sent)
    /// - [`FlightDataError::NoQuotes`] if the provider returned no fares
    /// - date, response and transport errors are passed through unchanged
    pub async fn scrape(&self, query: &SearchQuery) -> Result<Vec<Quote>, FlightDataError> {
        if !is_valid(query) {
            return Err(FlightDataError::UnsupportedQuery(
                UNSUPPORTED_QUERY_MESSAGE.to_string(),
            ));
        }

        let params = request_params(query)?;
        let response = self.transport.post_availability(&params).await?;
        let quotes = extract_quotes(query, &response)?;

        if quotes.is_empty() {
            debug!(
                "[{}] No fares for {}-{} on {}",
                self.transport.provider_id(),
                query.from_place,
                query.to_place,
                query.flight_date
            );
            return Err(FlightDataError::NoQuotes(NO_QUOTES_MESSAGE.to_string()));
        }

        info!(
            "[{}] {} fares for {}-{} on {}",
            self.transport.provider_id(),
            quotes.len(),
            query.from_place,
            query.to_place,
            query.flight_date
        );
        Ok(quotes)
    }
}

/// Search Buddha Air for one-way fares using the default endpoint.
///
/// # Errors
///
/// See [`FlightScraper::scrape`]. Also returns [`FlightDataError::Network`]
/// if the HTTP client cannot be built.
pub async fn scraper(query: &SearchQuery) -> Result<Vec<Quote>, FlightDataError> {
    let transport = HttpTransport::new(ProviderConfig::default())?;
    FlightScraper::new(transport).scrape(query).await
}
