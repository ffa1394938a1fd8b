//! TerraKit CLI - coordinate conversion and vector overlay utilities

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use terrakit_algorithms::overlay::intersect;
use terrakit_core::dms::convert;
use terrakit_core::io::{write_map, MapOptions};

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "terrakit")]
#[command(author, version, about = "Coordinate conversion and vector overlay utilities", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a DMS coordinate pair to decimal degrees
    Convert {
        /// DMS pair, e.g. "41° 15' 31\" N, 95° 56' 15\" W"
        coordinates: String,
    },
    /// Intersect two GeoJSON MultiPolygon files
    Intersect {
        /// First GeoJSON MultiPolygon file
        a: PathBuf,
        /// Second GeoJSON MultiPolygon file
        b: PathBuf,
        /// Output file (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write a distance-ring map as a standalone HTML file
    Map {
        /// Center as a DMS pair
        center: String,
        /// Output HTML file
        output: PathBuf,
        /// Marker label
        #[arg(short, long, default_value = "Center")]
        label: String,
        /// Comma-separated circle radii in miles
        #[arg(short, long, default_value = "1,5,10")]
        radii: String,
        /// Color scheme, 1-5
        #[arg(short, long, default_value = "1")]
        scheme: u8,
    },
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

fn parse_radii(s: &str) -> Result<Vec<f64>> {
    s.split(',')
        .map(|token| {
            token
                .trim()
                .parse::<f64>()
                .with_context(|| format!("Invalid radius: {}", token))
        })
        .collect()
}

fn read_geojson(path: &PathBuf) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

// ─── Main ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Convert { coordinates } => {
            let decimal = convert(&coordinates).context("Failed to convert coordinates")?;
            println!("{}", decimal);
        }

        Commands::Intersect { a, b, output } => {
            let left = read_geojson(&a)?;
            let right = read_geojson(&b)?;
            info!("Intersecting {} with {}", a.display(), b.display());

            let result = intersect(&left, &right).context("Intersection failed")?;
            match output {
                Some(path) => {
                    fs::write(&path, &result)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Intersection saved to: {}", path.display());
                }
                None => println!("{}", result),
            }
        }

        Commands::Map {
            center,
            output,
            label,
            radii,
            scheme,
        } => {
            let options = MapOptions {
                label,
                radii_miles: parse_radii(&radii)?,
                scheme,
            };
            let written =
                write_map(&center, &options, &output).context("Failed to write map")?;
            println!("Map saved to: {}", written.display());
        }
    }

    Ok(())
}
