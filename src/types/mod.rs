//! Core types for report record representation.
//!
//! This module provides the foundational data structures for handling device
//! report records:
//! - [`RecordSchema`] describes one record layout with O(1) field lookup
//! - [`FieldType`] maps to the C scalar types of the firmware structs
//! - [`FieldData`] trait provides type-safe parsing from record bytes
//! - [`ImuFrame`] is one decoded IMU telemetry frame
//!
//! ## Usage Example
//!
//! ```rust
//! use spyhop::types::{FieldData, FieldType, LayoutBuilder};
//!
//! let schema = LayoutBuilder::new()
//!     .field("detections", FieldType::Int16, 1, "Detection count")
//!     .field("preds", FieldType::Float32, 2, "Prediction curve")
//!     .finish()
//!     .unwrap();
//!
//! let mut data = vec![0u8; schema.record_size()];
//! data[0..2].copy_from_slice(&7i16.to_le_bytes());
//! data[4..8].copy_from_slice(&0.5f32.to_le_bytes());
//!
//! let info = schema.get_field("detections").unwrap();
//! let detections = i16::from_record(&data, info).unwrap();
//! assert_eq!(detections, 7);
//! ```

mod field_data;
mod field_type;
mod frame;
mod schema;

// Re-export all public types
pub use field_data::FieldData;
pub use field_type::FieldType;
pub use frame::{IMU_CHANNELS, ImuFrame};
pub use schema::{FieldInfo, LayoutBuilder, RecordSchema};
