use potholemap::config::Config;
use potholemap::data;
use potholemap::services::pipeline::render_map;
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_help() {
    eprintln!(
        "\
Usage: export_markers [OPTIONS]

Loads the route and pothole tables named by ROUTES_CSV_PATH and
POTHOLE_CSV_PATH, samples SAMPLE_SIZE routes with SAMPLE_SEED and prints
the resulting markers as a GeoJSON FeatureCollection on stdout.

Options:
  --pretty              Indent the JSON output
  --help                Show this help message"
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing (quiet by default, stdout is the output)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "potholemap=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help") {
        print_help();
        return Ok(());
    }
    let pretty = args.iter().any(|a| a == "--pretty");

    let config = Config::from_env().map_err(|e| format!("Config error: {}", e))?;

    let datasets = data::load_datasets(&config.routes_csv_path, &config.pothole_csv_path)?;
    let map = render_map(&datasets, config.sample, config.map)?;

    let collection = map.to_feature_collection();
    let output = if pretty {
        serde_json::to_string_pretty(&collection)?
    } else {
        serde_json::to_string(&collection)?
    };
    println!("{}", output);

    Ok(())
}
