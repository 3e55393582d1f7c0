//! Type-safe Rust library for bioacoustic monitoring buoy report data.
//!
//! Spyhop decodes the fixed-layout binary report records written by
//! embedded bioacoustic monitoring devices: whale-detection buoys and
//! terrestrial biodiversity stations. Records bundle neural detector
//! prediction curves, detection counts and peak indices, and, for the
//! offshore devices, per-detection IMU telemetry regions and audio
//! excerpts.
//!
//! # Features
//!
//! - **Explicit layouts**: record formats as schema tables, not overlaid
//!   structs, with bounds checks on every read
//! - **IMU frame recovery**: resynchronizing scanner that decodes intact
//!   telemetry frames out of corrupt byte regions
//! - **Text dumps**: CSV-style output matching the deployment tooling
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use spyhop::{Project, ReportReader};
//!
//! fn main() -> spyhop::Result<()> {
//!     let reader = ReportReader::open("deploy/run42.bin", Project::Offshore)?;
//!     println!("Recording: {}", reader.source_file()?);
//!
//!     for detector in reader.project().detectors() {
//!         println!("{}: {} detections", detector.label, reader.detections(detector)?);
//!         for event in 0..reader.event_count(detector)? {
//!             for frame in reader.imu_frames(detector, event)? {
//!                 println!("  t={} channels={:?}", frame.timestamp, frame.channels);
//!             }
//!         }
//!     }
//!     Ok(())
//! }
//! ```

// Core types and error handling
mod error;
pub mod types;

// Record decoding
pub mod imu;
pub mod report;

// Text output
pub mod dump;

// Core exports
pub use error::{ReportError, Result};
pub use types::{FieldData, FieldInfo, FieldType, IMU_CHANNELS, ImuFrame, RecordSchema};

// Record exports
pub use report::{Detector, IMU_REGION_LEN, Project, ReportReader, SOURCE_FILE_LEN};
