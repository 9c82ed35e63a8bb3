//! Decode a city file, print a terrain summary, and render the map as text.
//!
//! Run with: cargo run --bin sc2k-dump -- city.sc2 [--out map.txt]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sc2k_reader::{render, CityModel};

#[derive(Parser)]
#[command(name = "sc2k-dump")]
#[command(about = "Decode a SimCity 2000 save file and render its terrain")]
struct Cli {
    /// Path to the .sc2 city file
    city: PathBuf,

    /// Write the rendered map to this file instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "sc2k_reader=info",
        1 => "sc2k_reader=debug",
        _ => "sc2k_reader=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let city = match CityModel::open(&cli.city) {
        Ok(city) => city,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let tiles = city.tiles();
    let min_alt = tiles.iter().map(|t| t.altitude).min().unwrap_or(0);
    let max_alt = tiles.iter().map(|t| t.altitude).max().unwrap_or(0);
    let water_tiles = tiles.iter().filter(|t| !t.water.is_empty()).count();

    println!("{}: {} tiles ({}x{} grid)", cli.city.display(), city.tile_count(), city.side(), city.side());
    println!("altitude range: {min_alt}..{max_alt}");
    println!("water tiles: {water_tiles}");

    match cli.out {
        Some(path) => {
            if let Err(err) = render::render_to_file(&city, &path) {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
            println!("map written to {}", path.display());
        }
        None => print!("{}", render::render_altitude(&city)),
    }

    ExitCode::SUCCESS
}
