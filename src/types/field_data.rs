//! Record field parsing trait and implementations

use super::{FieldInfo, FieldType};

/// Trait for types that can be parsed from binary record data.
///
/// Record fields are stored in the device's native little-endian byte order.
/// The IMU telemetry regions are opaque `u8` fields here; their big-endian
/// sub-frames belong to the [`crate::imu`] scanner.
pub trait FieldData: Sized {
    /// Parse this type from record data at the field's offset.
    fn from_record(data: &[u8], info: &FieldInfo) -> crate::Result<Self>;
}

impl FieldData for f32 {
    fn from_record(data: &[u8], info: &FieldInfo) -> crate::Result<Self> {
        if info.data_type != FieldType::Float32 {
            return Err(crate::ReportError::TypeConversion {
                details: format!("Expected Float32, got {:?}", info.data_type),
            });
        }

        let bytes = data
            .get(info.offset..info.offset + 4)
            .ok_or(crate::ReportError::Bounds { offset: info.offset })?;

        Ok(f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }
}

impl FieldData for f64 {
    fn from_record(data: &[u8], info: &FieldInfo) -> crate::Result<Self> {
        if info.data_type != FieldType::Float64 {
            return Err(crate::ReportError::TypeConversion {
                details: format!("Expected Float64, got {:?}", info.data_type),
            });
        }

        let bytes = data
            .get(info.offset..info.offset + 8)
            .ok_or(crate::ReportError::Bounds { offset: info.offset })?;

        Ok(f64::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]))
    }
}

impl FieldData for i16 {
    fn from_record(data: &[u8], info: &FieldInfo) -> crate::Result<Self> {
        if info.data_type != FieldType::Int16 {
            return Err(crate::ReportError::TypeConversion {
                details: format!("Expected Int16, got {:?}", info.data_type),
            });
        }

        let bytes = data
            .get(info.offset..info.offset + 2)
            .ok_or(crate::ReportError::Bounds { offset: info.offset })?;

        Ok(i16::from_le_bytes([bytes[0], bytes[1]]))
    }
}

impl FieldData for u8 {
    fn from_record(data: &[u8], info: &FieldInfo) -> crate::Result<Self> {
        if !matches!(info.data_type, FieldType::UInt8 | FieldType::Char) {
            return Err(crate::ReportError::TypeConversion {
                details: format!("Expected UInt8 or Char, got {:?}", info.data_type),
            });
        }

        let byte =
            data.get(info.offset).ok_or(crate::ReportError::Bounds { offset: info.offset })?;

        Ok(*byte)
    }
}

/// Char fields decode as a string cut at the first NUL, matching the
/// firmware's `char name[50]` convention.
impl FieldData for String {
    fn from_record(data: &[u8], info: &FieldInfo) -> crate::Result<Self> {
        if info.data_type != FieldType::Char {
            return Err(crate::ReportError::TypeConversion {
                details: format!("Expected Char, got {:?}", info.data_type),
            });
        }

        let bytes = data
            .get(info.offset..info.offset + info.count)
            .ok_or(crate::ReportError::Bounds { offset: info.offset })?;

        let nul_pos = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        Ok(String::from_utf8_lossy(&bytes[..nul_pos]).to_string())
    }
}

// Array support for FieldData
impl<T: FieldData> FieldData for Vec<T> {
    fn from_record(data: &[u8], info: &FieldInfo) -> crate::Result<Self> {
        if info.count == 0 {
            return Ok(Vec::new());
        }

        let element_size = info.data_type.size();
        let mut result = Vec::with_capacity(info.count);

        for i in 0..info.count {
            let element_info = FieldInfo {
                name: info.name.clone(),
                data_type: info.data_type,
                offset: info.offset + i * element_size,
                count: 1,
                description: info.description.clone(),
            };

            result.push(T::from_record(data, &element_info)?);
        }

        Ok(result)
    }
}
