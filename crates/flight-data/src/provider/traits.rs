//! Transport trait definitions.
//!
//! This module defines the `AvailabilityTransport` trait that carries the
//! single availability request to the provider.

use async_trait::async_trait;

use crate::errors::FlightDataError;
use crate::models::ProviderRequestParams;

/// Sends one availability request and returns the parsed JSON body.
///
/// The scraper calls this at most once per search and only for queries
/// that passed validation.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use farewatch_flight_data::provider::AvailabilityTransport;
///
/// struct CannedTransport(serde_json::Value);
///
/// #[async_trait]
/// impl AvailabilityTransport for CannedTransport {
///     async fn post_availability(
///         &self,
///         _params: &ProviderRequestParams,
///     ) -> Result<serde_json::Value, FlightDataError> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
#[async_trait]
pub trait AvailabilityTransport: Send + Sync {
    /// Provider identifier used in error messages and logs.
    fn provider_id(&self) -> &'static str {
        super::PROVIDER_ID
    }

    /// POST the request parameters and parse the response body as JSON.
    ///
    /// # Errors
    ///
    /// - [`FlightDataError::Network`] when the request cannot be sent or read
    /// - [`FlightDataError::ProviderError`] on a non-success HTTP status
    /// - [`FlightDataError::ResponseParse`] when the body is not JSON
    async fn post_availability(
        &self,
        params: &ProviderRequestParams,
    ) -> Result<serde_json::Value, FlightDataError>;
}
