//! Airport bulk loader.
//!
//! Reads a comma-separated airport data file and registers each entry
//! with a running weather API by POSTing to the collect surface, one
//! request per line. Malformed lines are skipped with a warning.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Field positions in the airport data file.
const IATA_FIELD: usize = 4;
const LATITUDE_FIELD: usize = 6;
const LONGITUDE_FIELD: usize = 7;

#[derive(Parser, Debug)]
#[command(name = "airport-loader")]
#[command(about = "Bulk-load an airport data file into the weather API")]
struct Args {
    /// Airport data file (comma-separated)
    file: PathBuf,

    /// Base URL of the weather API
    #[arg(long, default_value = "http://localhost:9090", env = "WEATHER_API_URL")]
    base_url: String,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let level: Level = args.log_level.parse().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let contents = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    if contents.trim().is_empty() {
        bail!("{} is not a valid input", args.file.display());
    }

    let client = reqwest::Client::new();
    let base_url = args.base_url.trim_end_matches('/');

    let mut loaded = 0usize;
    let mut skipped = 0usize;
    for (line_no, line) in contents.lines().enumerate() {
        let Some((iata, lat, lon)) = parse_line(line) else {
            warn!(line = line_no + 1, "skipping malformed line");
            skipped += 1;
            continue;
        };

        let url = format!("{base_url}/collect/airports/{iata}/{lat}/{lon}");
        let response = client
            .post(&url)
            .send()
            .await
            .with_context(|| format!("request to {url} failed"))?;

        if response.status().is_success() {
            loaded += 1;
        } else {
            warn!(
                iata = %iata,
                status = %response.status(),
                "airport rejected by the API"
            );
            skipped += 1;
        }
    }

    info!(loaded, skipped, "airport load complete");
    Ok(())
}

/// Pull `(iata, latitude, longitude)` out of one data line: IATA at
/// field 4 with surrounding quotes stripped, coordinates at fields 6
/// and 7. Returns None if the fields are missing or blank.
fn parse_line(line: &str) -> Option<(String, String, String)> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() <= LONGITUDE_FIELD {
        return None;
    }

    let iata = fields[IATA_FIELD].trim().trim_matches('"').to_string();
    let lat = fields[LATITUDE_FIELD].trim().to_string();
    let lon = fields[LONGITUDE_FIELD].trim().to_string();
    if iata.is_empty() || lat.is_empty() || lon.is_empty() {
        return None;
    }
    Some((iata, lat, lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_extracts_fields() {
        let line = r#"1,"General Edward Lawrence Logan Intl","Boston","United States","BOS","KBOS",42.364347,-71.005181,19,-5,"A""#;
        let (iata, lat, lon) = parse_line(line).unwrap();
        assert_eq!(iata, "BOS");
        assert_eq!(lat, "42.364347");
        assert_eq!(lon, "-71.005181");
    }

    #[test]
    fn test_parse_line_rejects_short_or_blank() {
        assert!(parse_line("").is_none());
        assert!(parse_line("1,2,3").is_none());
        assert!(parse_line(r#"1,a,b,c,"",x,,"#).is_none());
    }
}
