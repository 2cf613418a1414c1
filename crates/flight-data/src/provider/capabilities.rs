//! Provider feature ceiling.
//!
//! Describes which searches the integration can carry end to end. The
//! validator rejects any query outside this ceiling instead of coercing it.

use crate::models::TripType;

/// Describes what a fare provider integration supports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupportedFeatures {
    /// Largest allowed `adults + children`.
    pub max_party_size: u32,

    /// Whether infants can be booked.
    pub supports_infants: bool,

    /// Whether a return leg can be requested and parsed.
    pub supports_return: bool,

    /// Trip types accepted by the integration.
    pub trip_types: &'static [TripType],
}

impl SupportedFeatures {
    /// Current Buddha Air ceiling: one-way only, no infants, fewer than 8 seated passengers.
    pub fn buddha_air() -> Self {
        Self {
            max_party_size: 7,
            supports_infants: false,
            supports_return: false,
            trip_types: &[TripType::OneWay],
        }
    }

    pub fn supports_trip_type(&self, trip_type: TripType) -> bool {
        self.trip_types.contains(&trip_type)
    }
}

impl Default for SupportedFeatures {
    fn default() -> Self {
        Self::buddha_air()
    }
}
