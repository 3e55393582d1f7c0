//! Convert a full report record to sectioned text.
//!
//! Writes `<stem>.txt` next to the input. The second argument selects the
//! record layout and defaults to the offshore format.

use anyhow::{Context, Result};
use spyhop::{Project, ReportReader, dump};
use std::env;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::process;
use tracing::info;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <report.bin> [offshore|terrestrial]", args[0]);
        process::exit(1);
    }

    let project = match args.get(2) {
        Some(name) => match name.parse::<Project>() {
            Ok(project) => project,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        },
        None => Project::Offshore,
    };

    if let Err(e) = run(Path::new(&args[1]), project) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(path: &Path, project: Project) -> Result<()> {
    let reader = ReportReader::open(path, project)
        .with_context(|| format!("Opening {}", path.display()))?;

    for detector in project.detectors() {
        info!(
            detector = detector.name,
            detections = reader.detections(detector)?,
            "Read detection counts"
        );
    }

    let out_path = path.with_extension("txt");
    let mut out = BufWriter::new(
        File::create(&out_path).with_context(|| format!("Creating {}", out_path.display()))?,
    );
    dump::write_report(&mut out, &reader)
        .with_context(|| format!("Writing {}", out_path.display()))?;

    println!("Wrote {}", out_path.display());
    Ok(())
}
