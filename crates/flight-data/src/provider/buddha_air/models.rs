//! Buddha Air availability response models.
//!
//! Only the keys the extractor reads are modelled; anything else the
//! provider sends is ignored. A missing modelled key fails deserialisation.

use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

/// Top-level availability response.
#[derive(Debug, Deserialize)]
pub struct AvailabilityResponse {
    pub data: AvailabilityData,
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityData {
    pub outbound: OutboundLeg,
    // Note: an inbound leg exists for round trips but is never requested
}

#[derive(Debug, Deserialize)]
pub struct OutboundLeg {
    /// `None` when the provider has no availability.
    #[serde(default, deserialize_with = "falsy_as_none")]
    pub flightsector: Option<FlightSector>,
}

#[derive(Debug, Deserialize)]
pub struct FlightSector {
    pub flightdetail: Vec<FlightDetail>,
}

/// One bookable flight.
#[derive(Debug, Deserialize)]
pub struct FlightDetail {
    /// Carrier and segment, e.g. "U4 703"
    pub flightno: String,
    /// Origin and destination, e.g. "KTM-BIR"
    pub sectorpair: String,
    /// Bare time of day, e.g. "07:45"
    pub departuretime: String,
    pub arrivaltime: String,
    pub airfare: AirFare,
}

#[derive(Debug, Deserialize)]
pub struct AirFare {
    pub faredetail: FareDetail,
}

/// Fare block shared by adult and child prices.
#[derive(Debug, Deserialize)]
pub struct FareDetail {
    #[serde(deserialize_with = "amount_text")]
    pub fare: String,
    #[serde(deserialize_with = "amount_text")]
    pub childfare: String,
    #[serde(deserialize_with = "amount_text")]
    pub surcharge: String,
    pub currency: String,
    pub taxbreakup: TaxBreakup,
}

#[derive(Debug, Deserialize)]
pub struct TaxBreakup {
    pub taxdetail: TaxDetail,
}

#[derive(Debug, Deserialize)]
pub struct TaxDetail {
    #[serde(deserialize_with = "amount_text")]
    pub taxamount: String,
}

/// Whether a JSON value counts as "nothing here" for the provider.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Map an empty `flightsector` (null, "", [], {}, false, 0) to `None`.
fn falsy_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if is_falsy(&value) {
        return Ok(None);
    }
    serde_json::from_value(value)
        .map(Some)
        .map_err(de::Error::custom)
}

/// Accept an amount as a string or a bare JSON number, keeping its text.
fn amount_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::invalid_type(
            de::Unexpected::Other(&other.to_string()),
            &"a string or number amount",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn outbound(flightsector: Value) -> Value {
        json!({ "data": { "outbound": { "flightsector": flightsector } } })
    }

    #[test]
    fn test_falsy_flightsector_is_none() {
        for empty in [json!(null), json!(""), json!([]), json!({}), json!(false), json!(0)] {
            let response: AvailabilityResponse =
                serde_json::from_value(outbound(empty.clone())).unwrap();
            assert!(
                response.data.outbound.flightsector.is_none(),
                "{empty} should be treated as no availability"
            );
        }
    }

    #[test]
    fn test_absent_flightsector_is_none() {
        let response: AvailabilityResponse =
            serde_json::from_value(json!({ "data": { "outbound": {} } })).unwrap();
        assert!(response.data.outbound.flightsector.is_none());
    }

    #[test]
    fn test_missing_outbound_is_an_error() {
        let result = serde_json::from_value::<AvailabilityResponse>(json!({ "data": {} }));
        assert!(result.is_err());
    }

    #[test]
    fn test_numeric_amounts_keep_their_text() {
        let fare: FareDetail = serde_json::from_value(json!({
            "fare": 5080,
            "childfare": "3404",
            "surcharge": 2270.5,
            "currency": "NPR",
            "taxbreakup": { "taxdetail": { "taxamount": "200" } }
        }))
        .unwrap();
        assert_eq!(fare.fare, "5080");
        assert_eq!(fare.childfare, "3404");
        assert_eq!(fare.surcharge, "2270.5");
        assert_eq!(fare.taxbreakup.taxdetail.taxamount, "200");
    }

    #[test]
    fn test_amount_rejects_objects() {
        let result = serde_json::from_value::<TaxDetail>(json!({ "taxamount": { "value": 1 } }));
        assert!(result.is_err());
    }
}
