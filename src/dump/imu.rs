//! CSV output for decoded IMU telemetry frames

use crate::Result;
use crate::report::{Detector, ReportReader};
use crate::types::ImuFrame;
use std::io::Write;
use tracing::debug;

/// Write frames as CSV, one frame per line: `timestamp,ch0,...,ch8`.
pub fn write_frames<W: Write>(out: &mut W, frames: &[ImuFrame]) -> Result<()> {
    for frame in frames {
        write!(out, "{}", frame.timestamp)?;
        for channel in &frame.channels {
            write!(out, ",{}", channel)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Dump every stored detection event's IMU frames for one detector.
///
/// Each event's frame block is terminated by a blank line, including events
/// whose region held no intact frame.
pub fn write_detector_events<W: Write>(
    out: &mut W,
    reader: &ReportReader,
    detector: &Detector,
) -> Result<()> {
    for event in 0..reader.event_count(detector)? {
        let frames = reader.imu_frames(detector, event)?;
        debug!(detector = detector.name, event, frames = frames.len(), "Decoded IMU region");
        write_frames(out, &frames)?;
        writeln!(out)?;
    }
    Ok(())
}
