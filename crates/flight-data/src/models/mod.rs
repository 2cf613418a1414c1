//! Flight data models
//!
//! This module contains the core data types for fare searches:
//! - `query` - Caller search parameters (SearchQuery, TripType)
//! - `request` - Provider wire parameters (ProviderRequestParams)
//! - `quote` - Normalised fare quotes (Quote, PriceBreakdown)

mod query;
mod quote;
mod request;

pub use query::{SearchQuery, TripType, ONE_WAY_RETURN_DATE};
pub use quote::{PriceBreakdown, Quote};
pub use request::ProviderRequestParams;
