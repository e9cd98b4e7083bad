//! Command-line interface for outfit_harmony
//!
//! Scores three garment photos (or three hex colors) and prints the result.

use anyhow::Context;
use clap::Parser;
use outfit_harmony::{
    analyze_hex, analyze_outfit, logging, HarmonyConfig, HarmonyError, OutfitResult,
};
use std::path::PathBuf;
use std::process;

const SLOT_NAMES: [&str; 3] = ["Top", "Bottom", "Shoes"];

#[derive(Debug, Parser)]
#[command(
    name = "outfit-harmony",
    version,
    about = "Check whether three garments match by their average colors"
)]
struct Cli {
    /// Top garment photo (or hex color with --hex)
    top: String,

    /// Bottom garment photo (or hex color with --hex)
    bottom: String,

    /// Shoes photo (or hex color with --hex)
    shoes: String,

    /// Treat the three inputs as #RRGGBB colors instead of image paths
    #[arg(long)]
    hex: bool,

    /// Print the full result as JSON on stdout
    #[arg(long)]
    json: bool,

    /// JSON file with sampling settings
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    if let Err(error) = run(&cli) {
        eprintln!("Analysis failed: {:#}", error);
        if let Some(harmony) = error.downcast_ref::<HarmonyError>() {
            if harmony.is_recoverable() {
                eprintln!("Suggestion: {}", harmony.user_message());
            }
        }
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => HarmonyConfig::from_json_file(path)?,
        None => HarmonyConfig::default(),
    };

    let result = if cli.hex {
        analyze_hex([cli.top.as_str(), cli.bottom.as_str(), cli.shoes.as_str()])?
    } else {
        let paths = [
            PathBuf::from(&cli.top),
            PathBuf::from(&cli.bottom),
            PathBuf::from(&cli.shoes),
        ];
        for path in &paths {
            if !path.exists() {
                anyhow::bail!("File '{}' does not exist", path.display());
            }
        }
        analyze_outfit(
            [paths[0].as_path(), paths[1].as_path(), paths[2].as_path()],
            &config,
        )?
    };

    if cli.json {
        let json = serde_json::to_string_pretty(&result).context("serializing result")?;
        println!("{}", json);
    } else {
        print_summary(&result);
    }
    Ok(())
}

fn print_summary(result: &OutfitResult) {
    for (name, garment) in SLOT_NAMES.iter().zip(&result.garments) {
        println!(
            "{:<7} {}  h={:>5.1}° s={:.2} v={:.2}",
            name, garment.hex, garment.hsv.h, garment.hsv.s, garment.hsv.v
        );
    }
    println!();
    println!("Score: {}/100", result.report.score);
    println!("{}", result.report.verdict);

    for penalty in &result.report.penalties {
        println!("  -{:<3} {}", penalty.points(), penalty.description());
    }
}
