use clap::{Parser, ValueEnum};

use farewatch_flight_data::{SearchQuery, TripType, ONE_WAY_RETURN_DATE};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TripArg {
    /// One-way ("O")
    #[value(name = "O", alias = "one-way")]
    OneWay,
    /// Round trip ("R")
    #[value(name = "R", alias = "round-trip")]
    RoundTrip,
}

impl From<TripArg> for TripType {
    fn from(arg: TripArg) -> Self {
        match arg {
            TripArg::OneWay => TripType::OneWay,
            TripArg::RoundTrip => TripType::RoundTrip,
        }
    }
}

/// Search Buddha Air for one-way fares and print them as JSON
#[derive(Parser, Debug)]
#[command(name = "farewatch", version)]
pub struct Args {
    /// Origin location code
    #[arg(long, default_value = "KTM")]
    pub from: String,

    /// Destination location code
    #[arg(long, default_value = "BIR")]
    pub to: String,

    /// Outbound date (YYYY-MM-DD)
    #[arg(long, default_value = "2021-05-12")]
    pub date: String,

    /// Return date, or "null" for one-way
    #[arg(long, default_value = ONE_WAY_RETURN_DATE)]
    pub return_date: String,

    #[arg(long, default_value = "NP")]
    pub nationality: String,

    #[arg(long, value_enum, default_value = "O")]
    pub trip_type: TripArg,

    #[arg(long, default_value_t = 1)]
    pub adults: u32,

    #[arg(long, default_value_t = 0)]
    pub children: u32,

    #[arg(long, default_value_t = 0)]
    pub infants: u32,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl Args {
    pub fn to_query(&self) -> SearchQuery {
        SearchQuery::one_way(&self.from, &self.to, &self.date)
            .with_passengers(self.adults, self.children, self.infants)
            .with_nationality(&self.nationality)
            .with_return_date(&self.return_date)
            .with_trip_type(self.trip_type.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_build_example_query() {
        let args = Args::try_parse_from(["farewatch"]).unwrap();
        assert_eq!(args.to_query(), SearchQuery::one_way("KTM", "BIR", "2021-05-12"));
        assert!(!args.pretty);
    }

    #[test]
    fn test_arguments_map_onto_query() {
        let args = Args::try_parse_from([
            "farewatch",
            "--from",
            "PKR",
            "--to",
            "KTM",
            "--date",
            "2020-02-01",
            "--adults",
            "2",
            "--children",
            "1",
            "--nationality",
            "IN",
            "--trip-type",
            "R",
            "--return-date",
            "2020-02-05",
        ])
        .unwrap();

        let query = args.to_query();
        assert_eq!(query.from_place, "PKR");
        assert_eq!(query.to_place, "KTM");
        assert_eq!(query.flight_date, "2020-02-01");
        assert_eq!((query.adults, query.children, query.infants), (2, 1, 0));
        assert_eq!(query.nationality, "IN");
        assert_eq!(query.trip_type, TripType::RoundTrip);
        assert_eq!(query.return_date, "2020-02-05");
    }

    #[test]
    fn test_unknown_trip_type_rejected() {
        assert!(Args::try_parse_from(["farewatch", "--trip-type", "X"]).is_err());
    }
}
