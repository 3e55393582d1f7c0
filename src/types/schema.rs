//! Record schema types
//!
//! A [`RecordSchema`] is an explicit description of one fixed-layout report
//! record: every field's name, type, element count, and byte offset. Schemas
//! are built with [`LayoutBuilder`], which applies the same alignment and
//! padding rules the firmware's C compiler applies to its structs, so the
//! resulting offsets stay byte-compatible with records written by the devices
//! without any hand-coded offset tables.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::FieldType;

/// Schema describing the layout of one report record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSchema {
    /// Fields in record order
    fields: Vec<FieldInfo>,
    /// Map of field names to positions in `fields` (provides O(1) lookup)
    index: HashMap<String, usize>,
    /// Total size of the record in bytes, including trailing padding
    record_size: usize,
}

impl RecordSchema {
    /// Create a new RecordSchema with validation.
    pub fn new(fields: Vec<FieldInfo>, record_size: usize) -> crate::Result<Self> {
        let mut index = HashMap::with_capacity(fields.len());
        for (i, field) in fields.iter().enumerate() {
            if index.insert(field.name.clone(), i).is_some() {
                return Err(crate::ReportError::parse_error(
                    "Schema validation",
                    format!("Duplicate field name '{}'", field.name),
                ));
            }
        }
        let schema = Self { fields, index, record_size };
        schema.validate()?;
        Ok(schema)
    }

    /// Validate the schema for consistency.
    pub fn validate(&self) -> crate::Result<()> {
        for field in &self.fields {
            if field.count == 0 {
                return Err(crate::ReportError::parse_error(
                    "Schema validation",
                    format!("Field '{}' has count of 0", field.name),
                ));
            }

            // Every field must fit within the record
            let end_offset = field.offset + field.data_type.size() * field.count;
            if end_offset > self.record_size {
                return Err(crate::ReportError::Bounds { offset: field.offset });
            }
        }

        Ok(())
    }

    /// Get field info by name (O(1) lookup).
    pub fn get_field(&self, name: &str) -> Option<&FieldInfo> {
        self.index.get(name).map(|&i| &self.fields[i])
    }

    /// Check if a field exists.
    pub fn has_field(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Fields in record order.
    pub fn fields(&self) -> &[FieldInfo] {
        &self.fields
    }

    /// Get the number of fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Total record size in bytes.
    pub fn record_size(&self) -> usize {
        self.record_size
    }
}

/// Information about a specific record field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldInfo {
    /// Field name
    pub name: String,
    /// Data type of one element
    pub data_type: FieldType,
    /// Byte offset within the record
    pub offset: usize,
    /// Number of elements (1 for scalar, >1 for arrays)
    pub count: usize,
    /// Human-readable description
    pub description: String,
}

/// Sequential schema builder that mirrors C struct packing.
///
/// Fields are appended in declaration order; each is aligned to its element
/// alignment and the final record size is padded to the largest alignment
/// seen, matching `sizeof` on the device.
#[derive(Debug)]
pub struct LayoutBuilder {
    fields: Vec<FieldInfo>,
    cursor: usize,
    max_align: usize,
}

impl LayoutBuilder {
    pub fn new() -> Self {
        Self { fields: Vec::new(), cursor: 0, max_align: 1 }
    }

    /// Append a field, padding the cursor to the element alignment first.
    pub fn field(
        mut self,
        name: impl Into<String>,
        data_type: FieldType,
        count: usize,
        description: impl Into<String>,
    ) -> Self {
        let align = data_type.align();
        self.cursor = self.cursor.next_multiple_of(align);
        self.max_align = self.max_align.max(align);
        self.fields.push(FieldInfo {
            name: name.into(),
            data_type,
            offset: self.cursor,
            count,
            description: description.into(),
        });
        self.cursor += data_type.size() * count;
        self
    }

    /// Pad to the struct alignment and build the validated schema.
    pub fn finish(self) -> crate::Result<RecordSchema> {
        let record_size = self.cursor.next_multiple_of(self.max_align);
        RecordSchema::new(self.fields, record_size)
    }
}
