//! Fare provider plumbing and the Buddha Air integration.
//!
//! This module contains:
//! - The `AvailabilityTransport` trait that carries the availability request
//! - `HttpTransport`, the reqwest implementation of that trait
//! - Endpoint configuration and the provider's supported feature set
//! - The Buddha Air request mapper, response extractor and scraper

mod capabilities;
mod config;
mod http;
mod traits;

pub mod buddha_air;

/// Provider ID constant
pub const PROVIDER_ID: &str = "BUDDHA_AIR";

// Re-exports
pub use capabilities::SupportedFeatures;
pub use config::{ProviderConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use http::HttpTransport;
pub use traits::AvailabilityTransport;
