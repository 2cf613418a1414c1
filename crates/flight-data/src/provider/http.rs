//! reqwest-backed availability transport.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::errors::FlightDataError;
use crate::models::ProviderRequestParams;

use super::config::ProviderConfig;
use super::traits::AvailabilityTransport;
use super::PROVIDER_ID;

/// Longest body excerpt kept in a provider error message.
const ERROR_BODY_LIMIT: usize = 200;

/// HTTP transport posting form data to the availability endpoint.
///
/// # Example
///
/// ```ignore
/// let transport = HttpTransport::new(ProviderConfig::default())?;
/// let body = transport.post_availability(&params).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    /// Create a transport for the given endpoint configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FlightDataError::Network`] if the HTTP client cannot be initialised.
    pub fn new(config: ProviderConfig) -> Result<Self, FlightDataError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AvailabilityTransport for HttpTransport {
    async fn post_availability(
        &self,
        params: &ProviderRequestParams,
    ) -> Result<serde_json::Value, FlightDataError> {
        debug!("[{}] POST {} {:?}", PROVIDER_ID, self.endpoint, params);

        let response = self
            .client
            .post(&self.endpoint)
            .form(params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FlightDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!(
                    "HTTP {}: {}",
                    status,
                    body.chars().take(ERROR_BODY_LIMIT).collect::<String>()
                ),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
