use serde::{Deserialize, Serialize};

/// Itemised price for one passenger class.
///
/// Amounts are kept exactly as the provider sent them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub base: String,
    pub tax: String,
    pub surcharge: String,
}

impl PriceBreakdown {
    pub fn new(
        base: impl Into<String>,
        tax: impl Into<String>,
        surcharge: impl Into<String>,
    ) -> Self {
        Self {
            base: base.into(),
            tax: tax.into(),
            surcharge: surcharge.into(),
        }
    }
}

/// One fare offer for a single flight leg.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub adult_price: PriceBreakdown,
    pub child_price: PriceBreakdown,

    /// Fare currency (e.g., "NPR")
    pub currency: String,

    /// Carrier code from the flight number (e.g., "U4")
    pub marketing_carrier: String,

    /// Segment code from the flight number (e.g., "703")
    pub marketing_segment_code: String,

    pub from_place: String,
    pub to_place: String,

    /// Departure as `YYYY-MM-DD HH:MM`
    pub dep_time: String,

    /// Arrival as `YYYY-MM-DD HH:MM`
    pub arr_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_serializes_with_flat_keys() {
        let quote = Quote {
            adult_price: PriceBreakdown::new("5140", "255", "1560"),
            child_price: PriceBreakdown::new("3444", "255", "1560"),
            currency: "NPR".to_string(),
            marketing_carrier: "U4".to_string(),
            marketing_segment_code: "701".to_string(),
            from_place: "KTM".to_string(),
            to_place: "BIR".to_string(),
            dep_time: "2020-11-01 08:30".to_string(),
            arr_time: "2020-11-01 09:10".to_string(),
        };

        let value = serde_json::to_value(&quote).unwrap();
        assert_eq!(value["adult_price"]["base"], "5140");
        assert_eq!(value["child_price"]["surcharge"], "1560");
        assert_eq!(value["marketing_segment_code"], "701");
        assert_eq!(value["arr_time"], "2020-11-01 09:10");
    }
}
