//! Provider response to quote extraction.

use serde::Deserialize;

use crate::errors::FlightDataError;
use crate::models::{PriceBreakdown, Quote, SearchQuery};

use super::models::{AvailabilityResponse, FlightDetail};

/// Split a combined provider field into exactly two non-empty tokens.
fn split_pair(
    field: &'static str,
    value: &str,
    delimiter: char,
) -> Result<(String, String), FlightDataError> {
    let malformed = || FlightDataError::MalformedField {
        field,
        value: value.to_string(),
    };

    let (first, second) = value.split_once(delimiter).ok_or_else(malformed)?;
    if first.is_empty() || second.is_empty() || second.contains(delimiter) {
        return Err(malformed());
    }
    Ok((first.to_string(), second.to_string()))
}

/// Build one quote from a flight record.
///
/// Times are anchored to the query's outbound date; the provider only
/// sends times of day.
fn flight_to_quote(query: &SearchQuery, flight: &FlightDetail) -> Result<Quote, FlightDataError> {
    let (marketing_carrier, marketing_segment_code) = split_pair("flightno", &flight.flightno, ' ')?;
    let (from_place, to_place) = split_pair("sectorpair", &flight.sectorpair, '-')?;

    let fare = &flight.airfare.faredetail;
    let tax = &fare.taxbreakup.taxdetail.taxamount;

    // Surcharge and tax are flat per booking, not per passenger type.
    Ok(Quote {
        adult_price: PriceBreakdown::new(&fare.fare, tax, &fare.surcharge),
        child_price: PriceBreakdown::new(&fare.childfare, tax, &fare.surcharge),
        currency: fare.currency.clone(),
        marketing_carrier,
        marketing_segment_code,
        from_place,
        to_place,
        dep_time: format!("{} {}", query.flight_date, flight.departuretime),
        arr_time: format!("{} {}", query.flight_date, flight.arrivaltime),
    })
}

/// Extract quotes from a parsed availability response.
///
/// Returns an empty vector when the outbound flight sector is empty.
/// Quotes keep the provider's flight order.
///
/// # Errors
///
/// - [`FlightDataError::MalformedResponse`] if an expected key is missing
/// - [`FlightDataError::MalformedField`] if `flightno` or `sectorpair` cannot be split
///
/// A single bad flight record fails the whole batch.
pub fn extract_quotes(
    query: &SearchQuery,
    response: &serde_json::Value,
) -> Result<Vec<Quote>, FlightDataError> {
    let response = AvailabilityResponse::deserialize(response)
        .map_err(|e| FlightDataError::malformed_response(e.to_string()))?;

    let Some(sector) = response.data.outbound.flightsector else {
        return Ok(Vec::new());
    };

    sector
        .flightdetail
        .iter()
        .map(|flight| flight_to_quote(query, flight))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn flight(flightno: &str, sectorpair: &str) -> Value {
        json!({
            "flightno": flightno,
            "sectorpair": sectorpair,
            "departuretime": "07:45",
            "arrivaltime": "08:25",
            "airfare": {
                "faredetail": {
                    "fare": "5080",
                    "childfare": "3404",
                    "surcharge": "2270",
                    "currency": "NPR",
                    "taxbreakup": { "taxdetail": { "taxamount": "200" } }
                }
            }
        })
    }

    fn response(flights: Vec<Value>) -> Value {
        json!({
            "data": {
                "outbound": { "flightsector": { "flightdetail": flights } }
            }
        })
    }

    fn query() -> SearchQuery {
        SearchQuery::one_way("KTM", "BIR", "2019-12-05")
    }

    #[test]
    fn test_split_pair() {
        assert_eq!(
            split_pair("flightno", "U4 703", ' ').unwrap(),
            ("U4".to_string(), "703".to_string())
        );
        assert_eq!(
            split_pair("sectorpair", "KTM-BIR", '-').unwrap(),
            ("KTM".to_string(), "BIR".to_string())
        );
    }

    #[test]
    fn test_split_pair_rejects_malformed_values() {
        for bad in ["U4703", "U4 703 X", " 703", "U4 ", ""] {
            let err = split_pair("flightno", bad, ' ').unwrap_err();
            assert!(
                matches!(err, FlightDataError::MalformedField { field: "flightno", ref value } if value == bad),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_extract_single_flight() {
        let quotes = extract_quotes(&query(), &response(vec![flight("U4 703", "KTM-BIR")])).unwrap();

        assert_eq!(
            quotes,
            vec![Quote {
                adult_price: PriceBreakdown::new("5080", "200", "2270"),
                child_price: PriceBreakdown::new("3404", "200", "2270"),
                currency: "NPR".to_string(),
                marketing_carrier: "U4".to_string(),
                marketing_segment_code: "703".to_string(),
                from_place: "KTM".to_string(),
                to_place: "BIR".to_string(),
                dep_time: "2019-12-05 07:45".to_string(),
                arr_time: "2019-12-05 08:25".to_string(),
            }]
        );
    }

    #[test]
    fn test_extract_preserves_provider_order() {
        let quotes = extract_quotes(
            &query(),
            &response(vec![
                flight("U4 705", "KTM-BIR"),
                flight("U4 701", "KTM-BIR"),
                flight("U4 703", "KTM-BIR"),
            ]),
        )
        .unwrap();

        let codes: Vec<_> = quotes.iter().map(|q| q.marketing_segment_code.as_str()).collect();
        assert_eq!(codes, ["705", "701", "703"]);
    }

    #[test]
    fn test_extract_empty_flightsector() {
        for empty in [json!(""), json!(null), json!([]), json!({})] {
            let body = json!({ "data": { "outbound": { "flightsector": empty } } });
            assert!(extract_quotes(&query(), &body).unwrap().is_empty());
        }
    }

    #[test]
    fn test_extract_missing_key_is_malformed_response() {
        let mut broken = flight("U4 703", "KTM-BIR");
        broken["airfare"]["faredetail"]
            .as_object_mut()
            .unwrap()
            .remove("childfare");

        let err = extract_quotes(&query(), &response(vec![flight("U4 701", "KTM-BIR"), broken]))
            .unwrap_err();
        assert!(matches!(err, FlightDataError::MalformedResponse { .. }), "{err}");
    }

    #[test]
    fn test_extract_missing_data_is_malformed_response() {
        let err = extract_quotes(&query(), &json!({ "status": "ok" })).unwrap_err();
        assert!(matches!(err, FlightDataError::MalformedResponse { .. }));
    }

    #[test]
    fn test_extract_bad_flight_number_fails_batch() {
        let err = extract_quotes(
            &query(),
            &response(vec![flight("U4 701", "KTM-BIR"), flight("U4701", "KTM-BIR")]),
        )
        .unwrap_err();
        assert!(matches!(err, FlightDataError::MalformedField { field: "flightno", .. }));
    }

    #[test]
    fn test_extract_bad_sector_pair() {
        let err = extract_quotes(&query(), &response(vec![flight("U4 701", "KTM-BIR-PKR")]))
            .unwrap_err();
        assert!(matches!(err, FlightDataError::MalformedField { field: "sectorpair", .. }));
    }
}
