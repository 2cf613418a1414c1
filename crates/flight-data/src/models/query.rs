use serde::{Deserialize, Serialize};

/// Return-date sentinel the provider expects for one-way searches.
pub const ONE_WAY_RETURN_DATE: &str = "null";

/// Trip type as encoded by the provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TripType {
    #[serde(rename = "O")]
    OneWay,
    #[serde(rename = "R")]
    RoundTrip,
}

impl TripType {
    /// Provider code for this trip type ("O" or "R").
    pub fn code(&self) -> &'static str {
        match self {
            TripType::OneWay => "O",
            TripType::RoundTrip => "R",
        }
    }
}

impl std::fmt::Display for TripType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Caller-supplied search parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Origin location code (e.g., "KTM")
    pub from_place: String,

    /// Destination location code (e.g., "BIR")
    pub to_place: String,

    /// Outbound date, `YYYY-MM-DD`
    pub flight_date: String,

    /// Return date or [`ONE_WAY_RETURN_DATE`] for one-way trips
    pub return_date: String,

    /// Passenger nationality code (e.g., "NP")
    pub nationality: String,

    pub trip_type: TripType,

    pub adults: u32,
    pub children: u32,
    pub infants: u32,
}

impl SearchQuery {
    /// One-way query for a single adult Nepali passenger.
    pub fn one_way(
        from_place: impl Into<String>,
        to_place: impl Into<String>,
        flight_date: impl Into<String>,
    ) -> Self {
        Self {
            from_place: from_place.into(),
            to_place: to_place.into(),
            flight_date: flight_date.into(),
            return_date: ONE_WAY_RETURN_DATE.to_string(),
            nationality: "NP".to_string(),
            trip_type: TripType::OneWay,
            adults: 1,
            children: 0,
            infants: 0,
        }
    }

    /// Set the passenger counts.
    pub fn with_passengers(mut self, adults: u32, children: u32, infants: u32) -> Self {
        self.adults = adults;
        self.children = children;
        self.infants = infants;
        self
    }

    /// Set the nationality code.
    pub fn with_nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = nationality.into();
        self
    }

    /// Set the return date.
    pub fn with_return_date(mut self, return_date: impl Into<String>) -> Self {
        self.return_date = return_date.into();
        self
    }

    /// Set the trip type.
    pub fn with_trip_type(mut self, trip_type: TripType) -> Self {
        self.trip_type = trip_type;
        self
    }
}
