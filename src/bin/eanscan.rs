use clap::{Parser, Subcommand};
use rust_ean::Scanner;
use rust_ean::detector::localise;
use rust_ean::tools::{grey_stats, load_rgb, mask_stats, save_interim_images};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "eanscan", version, about = "EAN-13 barcode scanner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find and decode every barcode in an image
    Scan {
        #[arg(long)]
        image: PathBuf,
        /// Save gradient, mask and candidate images into this directory
        #[arg(long)]
        interim_dir: Option<PathBuf>,
    },
    /// Print localisation statistics and candidate regions for an image
    DebugLocalise {
        #[arg(long)]
        image: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Scan { image, interim_dir } => scan_cmd(&image, interim_dir.as_deref()),
        Command::DebugLocalise { image } => debug_localise_cmd(&image),
    }
}

fn scan_cmd(image: &Path, interim_dir: Option<&Path>) -> ExitCode {
    let source = match load_rgb(image) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to load image {}: {}", image.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let scanner = Scanner::from_env();
    if let Some(dir) = interim_dir {
        match localise(&source, scanner.options()) {
            Ok(stages) => {
                if let Err(err) = save_interim_images(dir, &source, &stages) {
                    eprintln!("Failed to save interim images to {}: {}", dir.display(), err);
                }
            }
            Err(err) => eprintln!("Localisation failed: {err}"),
        }
    }

    let barcodes = match scanner.scan(&source) {
        Ok(barcodes) => barcodes,
        Err(err) => {
            eprintln!("Scan failed for {}: {}", image.display(), err);
            return ExitCode::FAILURE;
        }
    };

    if barcodes.is_empty() {
        println!("Couldn't read any bar codes");
    }
    for barcode in &barcodes {
        println!("{}", barcode.value);
    }
    ExitCode::SUCCESS
}

fn debug_localise_cmd(image: &Path) -> ExitCode {
    let source = match load_rgb(image) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to load image {}: {}", image.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let scanner = Scanner::from_env();
    let stages = match localise(&source, scanner.options()) {
        Ok(stages) => stages,
        Err(err) => {
            eprintln!("Localisation failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "Image: {} ({}x{})",
        image.display(),
        source.width(),
        source.height()
    );
    println!(
        "Working grid: {}x{}",
        stages.greyscale.width(),
        stages.greyscale.height()
    );
    let grey = grey_stats(&stages.greyscale);
    println!(
        "Luminance range: {:.1}-{:.1}, mean: {:.1}",
        grey.min, grey.max, grey.mean
    );
    let gradient = grey_stats(&stages.gradient);
    println!("Gradient max: {:.1}, mean: {:.2}", gradient.max, gradient.mean);
    let mask = mask_stats(&stages.mask);
    println!(
        "Mask: masked={} total={} ratio={:.2}%",
        mask.masked,
        mask.total,
        mask.ratio * 100.0
    );

    println!("Merged regions: {}", stages.regions.len());
    println!("Candidates: {}", stages.candidates.len());
    for (i, area) in stages.candidates.iter().enumerate() {
        println!(
            "  #{} left={} top={} width={} height={}",
            i, area.left, area.top, area.width, area.height
        );
    }
    ExitCode::SUCCESS
}
