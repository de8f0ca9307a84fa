// src/main.rs
mod extractors;
mod patterns;
mod storage;
mod utils;

use std::path::PathBuf;

use clap::Parser;

use extractors::{parse_class, parse_courses};
use patterns::init_patterns;
use storage::StorageManager;
use utils::AppError;

/// Command Line Interface for the course schedule extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the catalog page dump to scan
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory for extracted records
    #[arg(short, long, default_value = "./output")]
    output_dir: String,

    /// Label used to name the output files (e.g. a term code)
    #[arg(short, long, default_value = "catalog")]
    label: String,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting extraction for args: {:?}", args);

    // 3. Initialize storage
    let storage = StorageManager::new(&args.output_dir)?;

    // 4. Compile the course and class patterns once; both scans share them
    let (course_pattern, class_pattern) = init_patterns();

    // 5. Scan for course identifiers
    let courses = parse_courses(&course_pattern, &args.input)?;
    tracing::info!("Found {} course identifiers", courses.len());

    // 6. Scan for class meeting times
    let meetings = parse_class(&class_pattern, &args.input)?;
    tracing::info!("Found {} meeting records", meetings.len());

    // 7. Persist the results
    let courses_path = storage.save_courses(&args.label, &courses)?;
    tracing::info!("Saved courses to: {}", courses_path.display());

    let meetings_path = storage.save_meetings(&args.label, &meetings)?;
    tracing::info!("Saved meetings to: {}", meetings_path.display());

    storage.save_run_metadata(&args.label, courses.len(), meetings.len())?;

    tracing::info!(
        "Extraction finished. Courses: {}, Meetings: {}",
        courses.len(),
        meetings.len()
    );

    Ok(())
}
