//! Search query to provider request mapping.

use chrono::NaiveDate;

use crate::errors::FlightDataError;
use crate::models::{ProviderRequestParams, SearchQuery};

/// Date format accepted in [`SearchQuery::flight_date`].
const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date format the provider expects, e.g. "05-Dec-2019".
const PROVIDER_DATE_FORMAT: &str = "%d-%b-%Y";

/// Reformat a `YYYY-MM-DD` date as `DD-Mon-YYYY`.
///
/// Only the canonical zero-padded form is accepted, since the same string
/// is reused verbatim in quote times. Month abbreviations are always English.
pub fn provider_date(date: &str) -> Result<String, FlightDataError> {
    let parsed = NaiveDate::parse_from_str(date, QUERY_DATE_FORMAT).map_err(|source| {
        FlightDataError::DateFormat {
            value: date.to_string(),
            source: Some(source),
        }
    })?;

    // chrono tolerates leading whitespace, a sign and unpadded fields.
    if parsed.format(QUERY_DATE_FORMAT).to_string() != date {
        return Err(FlightDataError::DateFormat {
            value: date.to_string(),
            source: None,
        });
    }
    Ok(parsed.format(PROVIDER_DATE_FORMAT).to_string())
}

/// Build the provider's request parameters from a search query.
///
/// The query is assumed to have passed validation already.
/// `return_date` is forwarded unchanged.
///
/// # Errors
///
/// Returns [`FlightDataError::DateFormat`] if `flight_date` is not `YYYY-MM-DD`.
pub fn request_params(query: &SearchQuery) -> Result<ProviderRequestParams, FlightDataError> {
    Ok(ProviderRequestParams {
        sector_from: query.from_place.clone(),
        sector_to: query.to_place.clone(),
        flight_date: provider_date(&query.flight_date)?,
        return_date: query.return_date.clone(),
        nationality: query.nationality.clone(),
        trip_type: query.trip_type.code().to_string(),
        adults: query.adults,
        children: query.children,
    })
}
