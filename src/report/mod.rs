//! Report record layouts and the generic record reader.

pub mod layout;
pub mod reader;

pub use layout::{Detector, IMU_REGION_LEN, Project, SOURCE_FILE_LEN};
pub use reader::ReportReader;
