use serde::Serialize;

/// Form parameters for the provider's availability endpoint.
///
/// Field names on the wire are fixed by the provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProviderRequestParams {
    #[serde(rename = "strSectorFrom")]
    pub sector_from: String,

    #[serde(rename = "strSectorTo")]
    pub sector_to: String,

    /// Outbound date as `DD-Mon-YYYY` (e.g., "05-Dec-2019")
    #[serde(rename = "strFlightDate")]
    pub flight_date: String,

    #[serde(rename = "strReturnDate")]
    pub return_date: String,

    #[serde(rename = "strNationality")]
    pub nationality: String,

    #[serde(rename = "strTripType")]
    pub trip_type: String,

    #[serde(rename = "intAdult")]
    pub adults: u32,

    #[serde(rename = "intChild")]
    pub children: u32,
}
