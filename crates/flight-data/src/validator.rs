//! Search query validation.
//!
//! Checks a query against the provider's [`SupportedFeatures`]:
//! - Party size (adults + children) within the ceiling
//! - No infants unless supported
//! - No return leg unless supported
//! - Trip type accepted by the provider
//!
//! Validation never fails; rejected rules are only logged at debug level.

use log::debug;

use crate::models::{SearchQuery, ONE_WAY_RETURN_DATE};
use crate::provider::SupportedFeatures;

/// Search query validator.
pub struct QueryValidator {
    features: SupportedFeatures,
}

impl QueryValidator {
    /// Create a validator for the Buddha Air feature ceiling.
    pub fn new() -> Self {
        Self {
            features: SupportedFeatures::buddha_air(),
        }
    }

    /// Create a validator for a custom feature set.
    ///
    /// Crate-private: the extractor only reads the outbound leg, so a set
    /// admitting returns also needs inbound extraction before it is exposed.
    pub(crate) fn with_features(features: SupportedFeatures) -> Self {
        Self { features }
    }

    /// Describe every rule the query breaks. Empty means the query is valid.
    pub fn violations(&self, query: &SearchQuery) -> Vec<String> {
        let mut violations = Vec::new();

        let party_size = query.adults.saturating_add(query.children);
        if party_size > self.features.max_party_size {
            violations.push(format!(
                "party of {} exceeds maximum of {}",
                party_size, self.features.max_party_size
            ));
        }

        if !self.features.supports_infants && query.infants != 0 {
            violations.push(format!("{} infants requested", query.infants));
        }

        if !self.features.supports_return && query.return_date != ONE_WAY_RETURN_DATE {
            violations.push(format!("return date {} requested", query.return_date));
        }

        if !self.features.supports_trip_type(query.trip_type) {
            violations.push(format!("trip type {} not supported", query.trip_type));
        }

        violations
    }

    /// Whether the query can be carried by the provider integration.
    pub fn is_valid(&self, query: &SearchQuery) -> bool {
        let violations = self.violations(query);
        for violation in &violations {
            debug!("Search query rejected: {}", violation);
        }
        violations.is_empty()
    }
}

impl Default for QueryValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Check a query against the Buddha Air feature ceiling.
pub fn is_valid(query: &SearchQuery) -> bool {
    QueryValidator::new().is_valid(query)
}
