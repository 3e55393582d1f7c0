//! Convert the IMU telemetry regions of an offshore report to CSV text.
//!
//! Writes one `<stem>_imu_<detector>.txt` file per detector next to the
//! input, with one CSV line per decoded frame and a blank line after each
//! detection event.

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
    if args.len() != 2 {
        eprintln!("Usage: {} <report.bin>", args[0]);
        process::exit(1);
    }

    if let Err(e) = run(Path::new(&args[1])) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(path: &Path) -> Result<()> {
    let reader = ReportReader::open(path, Project::Offshore)
        .with_context(|| format!("Opening {}", path.display()))?;

    let stem = path.file_stem().unwrap_or_default().to_string_lossy();

    for detector in Project::Offshore.detectors() {
        info!(
            detector = detector.name,
            detections = reader.detections(detector)?,
            "Decoding IMU regions"
        );

        let out_path = path.with_file_name(format!("{}_imu_{}.txt", stem, detector.name));
        let mut out = BufWriter::new(
            File::create(&out_path)
                .with_context(|| format!("Creating {}", out_path.display()))?,
        );
        dump::write_detector_events(&mut out, &reader, detector)
            .with_context(|| format!("Writing {}", out_path.display()))?;

        println!("Wrote {}", out_path.display());
    }

    Ok(())
}
