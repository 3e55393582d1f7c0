//! IMU telemetry frame scanning and decoding.
//!
//! Each detection event in an offshore report carries a fixed-length raw
//! byte region copied straight from the buoy's IMU serial link. The region
//! holds a run of fixed-size telemetry frames, possibly interrupted by
//! corrupt stretches where the link dropped bytes. [`scan`] walks such a
//! region and decodes every intact frame.

mod scanner;

pub use scanner::{FRAME_SIZE, scan};
