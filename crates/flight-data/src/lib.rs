//! Farewatch Flight Data Crate
//!
//! This crate searches the Buddha Air availability endpoint for one-way fares
//! and normalises the answer into flat fare quotes.
//!
//! # Overview
//!
//! A search is a single request/response exchange:
//! - validate the caller's query against the provider's supported features
//! - map the query onto the provider's form parameters
//! - POST once and parse the JSON body
//! - extract one quote per flight, keeping provider order
//!
//! There is no caching, retrying or shared state between calls.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |   SearchQuery    |  (caller input)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |    Validator     |  (feature ceiling gate)
//! +------------------+
//!          |
//!          v
//! +------------------+     +-----------------------+
//! |  Request Mapper  | --> | AvailabilityTransport |  (HTTP POST)
//! +------------------+     +-----------------------+
//!                                     |
//!                                     v
//!                          +-----------------------+
//!                          |  Response Extractor   |
//!                          +-----------------------+
//!                                     |
//!                                     v
//!                          +-----------------------+
//!                          |      Vec<Quote>       |
//!                          +-----------------------+
//! ```
//!
//! # Core Types
//!
//! - [`SearchQuery`] - Caller search parameters
//! - [`ProviderRequestParams`] - Provider form parameters
//! - [`Quote`] - Normalised fare quote with adult and child prices
//! - [`FlightDataError`] - Every failure the crate can report

pub mod errors;
pub mod models;
pub mod provider;
pub mod validator;

pub use errors::FlightDataError;

// Re-export all public types from models
pub use models::{
    PriceBreakdown, ProviderRequestParams, Quote, SearchQuery, TripType, ONE_WAY_RETURN_DATE,
};

// Re-export provider types
pub use provider::buddha_air::{
    extract_quotes, request_params, scraper, FlightScraper, NO_QUOTES_MESSAGE,
    UNSUPPORTED_QUERY_MESSAGE,
};
pub use provider::{AvailabilityTransport, HttpTransport, ProviderConfig, SupportedFeatures};

pub use validator::{is_valid, QueryValidator};
