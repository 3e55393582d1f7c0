//! Decoded IMU telemetry frame type

use serde::{Deserialize, Serialize};

/// Number of sensor channels in one IMU telemetry frame.
pub const IMU_CHANNELS: usize = 9;

/// One decoded IMU telemetry frame.
///
/// Produced by [`crate::imu::scan`] from the raw telemetry byte region of a
/// detection event: a device timestamp plus nine signed 16-bit sensor
/// channel readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImuFrame {
    /// Device timestamp, milliseconds since power-on
    pub timestamp: u32,

    /// Sensor channel readings in wire order
    pub channels: [i16; IMU_CHANNELS],
}

impl ImuFrame {
    pub fn new(timestamp: u32, channels: [i16; IMU_CHANNELS]) -> Self {
        Self { timestamp, channels }
    }
}
