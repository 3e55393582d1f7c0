//! Human-readable text output for report records.
//!
//! Output conventions match the downstream analysis scripts: comma-joined
//! value runs with trailing commas, six-decimal floats, and one blank line
//! terminating each detection event's IMU frame block.

mod imu;
mod info;

pub use imu::{write_detector_events, write_frames};
pub use info::write_report;
