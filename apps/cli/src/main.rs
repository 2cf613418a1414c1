mod args;
mod config;

use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use args::Args;
use config::Config;
use farewatch_flight_data::{FlightDataError, FlightScraper, HttpTransport};

fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false).with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}

/// Wrap a scrape failure with whether the query itself needs fixing.
fn search_error(err: FlightDataError) -> anyhow::Error {
    let context = if err.is_caller_error() {
        "invalid search"
    } else {
        "search failed"
    };
    anyhow::Error::new(err).context(context)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let config = Config::from_env();
    init_tracing(&config.log_format);

    let query = args.to_query();
    tracing::info!(
        "Searching {} -> {} on {} via {}",
        query.from_place,
        query.to_place,
        query.flight_date,
        config.provider.endpoint
    );

    let scraper = FlightScraper::new(HttpTransport::new(config.provider)?);
    let quotes = scraper.scrape(&query).await.map_err(search_error)?;

    let output = if args.pretty {
        serde_json::to_string_pretty(&quotes)?
    } else {
        serde_json::to_string(&quotes)?
    };
    println!("{}", output);
    Ok(())
}
