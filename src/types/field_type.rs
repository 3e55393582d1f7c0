//! Record field type definitions

use serde::{Deserialize, Serialize};

/// Data types that appear in device report records.
/// Maps to the C scalar types used by the firmware structs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    /// 32-bit floating point (prediction curves)
    Float32,
    /// 64-bit floating point (acoustic indices)
    Float64,
    /// 16-bit signed integer (counts, peak indices, audio samples)
    Int16,
    /// 8-bit unsigned integer (raw telemetry byte regions)
    UInt8,
    /// 8-bit character (NUL-terminated file name fields)
    Char,
}

impl FieldType {
    /// Returns the size in bytes of one element of this type.
    pub const fn size(&self) -> usize {
        match self {
            FieldType::UInt8 | FieldType::Char => 1,
            FieldType::Int16 => 2,
            FieldType::Float32 => 4,
            FieldType::Float64 => 8,
        }
    }

    /// Returns the alignment the firmware's C compiler gives one element.
    /// Equal to the element size for every scalar the record structs use.
    pub const fn align(&self) -> usize {
        self.size()
    }
}
