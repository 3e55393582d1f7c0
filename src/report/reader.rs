//! Report record reader
//!
//! Loads one binary report record into memory and serves typed,
//! bounds-checked field access through the record schema. The firmware
//! writes each record as one packed C struct; every read here goes through
//! [`FieldData`] against a [`RecordSchema`] rather than an overlaid struct.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use spyhop::{Project, ReportReader};
//!
//! fn dump_counts() -> spyhop::Result<()> {
//!     let reader = ReportReader::open("deploy/run42.bin", Project::Offshore)?;
//!     for detector in reader.project().detectors() {
//!         println!("{}: {} detections", detector.label, reader.detections(detector)?);
//!     }
//!     Ok(())
//! }
//! ```

use crate::report::layout::{Detector, IMU_REGION_LEN, Project};
use crate::types::{FieldData, FieldInfo, ImuFrame, RecordSchema};
use crate::{ReportError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reader over one report record.
pub struct ReportReader {
    data: Vec<u8>,
    schema: RecordSchema,
    project: Project,
    path: PathBuf,
}

impl ReportReader {
    /// Open a report file and load its record.
    pub fn open<P: AsRef<Path>>(path: P, project: Project) -> Result<Self> {
        let data = std::fs::read(&path)
            .map_err(|e| ReportError::File { path: path.as_ref().to_path_buf(), source: e })?;

        Self::from_bytes_with_path(data, project, path.as_ref().to_path_buf())
    }

    /// Create a reader from raw record bytes (for testing).
    pub fn from_bytes(data: Vec<u8>, project: Project) -> Result<Self> {
        Self::from_bytes_with_path(data, project, PathBuf::from("<memory>"))
    }

    fn from_bytes_with_path(data: Vec<u8>, project: Project, path: PathBuf) -> Result<Self> {
        let schema = project.schema()?;

        // The firmware writes exactly one record per file; anything shorter
        // than the record layout cannot be decoded.
        if data.len() < schema.record_size() {
            return Err(ReportError::Truncated {
                expected: schema.record_size(),
                actual: data.len(),
            });
        }

        debug!(
            project = %project,
            record_size = schema.record_size(),
            file_size = data.len(),
            "Loaded report record"
        );

        Ok(Self { data, schema, project, path })
    }

    pub fn project(&self) -> Project {
        self.project
    }

    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    /// Get the file path this reader was opened from.
    pub fn file_path(&self) -> &Path {
        &self.path
    }

    /// Typed field access by name.
    pub fn get<T: FieldData>(&self, field: &str) -> Result<T> {
        let info = self
            .schema
            .get_field(field)
            .ok_or_else(|| ReportError::FieldNotFound { field: field.to_string() })?;
        T::from_record(&self.data, info)
    }

    /// Name of the recording the record refers to.
    pub fn source_file(&self) -> Result<String> {
        self.get("source_file")
    }

    /// Acoustic complexity index (terrestrial records only).
    pub fn acoustic_aci(&self) -> Result<f64> {
        self.get("acoustic_aci")
    }

    /// Acoustic diversity index (terrestrial records only).
    pub fn acoustic_adi(&self) -> Result<f32> {
        self.get("acoustic_adi")
    }

    /// Raw detection count reported by a detector.
    pub fn detections(&self, detector: &Detector) -> Result<i16> {
        self.get(&detector.detections_field())
    }

    /// Number of events with stored payloads: the detection count clamped
    /// to the record's event capacity. The firmware keeps counting past the
    /// capacity but only the first `event_cap` events carry data.
    pub fn event_count(&self, detector: &Detector) -> Result<usize> {
        let detections = self.detections(detector)?;
        Ok((detections.max(0) as usize).min(detector.event_cap))
    }

    /// Full prediction curve of a detector.
    pub fn preds(&self, detector: &Detector) -> Result<Vec<f32>> {
        self.get(&detector.preds_field())
    }

    /// Prediction curve indices of detection peaks, one per stored event.
    pub fn pred_peaks(&self, detector: &Detector) -> Result<Vec<i16>> {
        let mut peaks: Vec<i16> = self.get(&detector.peaks_field())?;
        peaks.truncate(self.event_count(detector)?);
        Ok(peaks)
    }

    /// Raw IMU telemetry region of one detection event.
    pub fn imu_region(&self, detector: &Detector, event: usize) -> Result<&[u8]> {
        let field = detector.imu_field();
        let info = self
            .schema
            .get_field(&field)
            .ok_or(ReportError::FieldNotFound { field })?;

        if event >= detector.event_cap {
            return Err(ReportError::Bounds { offset: info.offset });
        }
        let start = info.offset + event * IMU_REGION_LEN;
        self.data
            .get(start..start + IMU_REGION_LEN)
            .ok_or(ReportError::Bounds { offset: start })
    }

    /// Decode all intact IMU frames of one detection event.
    pub fn imu_frames(&self, detector: &Detector, event: usize) -> Result<Vec<ImuFrame>> {
        Ok(crate::imu::scan(self.imu_region(detector, event)?))
    }

    /// Interleaved audio excerpt of one detection event.
    pub fn audio_samples(&self, detector: &Detector, event: usize) -> Result<Vec<i16>> {
        let field = detector.samples_field();
        let info = self
            .schema
            .get_field(&field)
            .ok_or(ReportError::FieldNotFound { field })?;

        if event >= detector.event_cap {
            return Err(ReportError::Bounds { offset: info.offset });
        }
        let per_event = detector.samples_per_event * self.project.audio_channels();
        let start = info.offset + event * per_event * info.data_type.size();

        let event_info = FieldInfo {
            name: info.name.clone(),
            data_type: info.data_type,
            offset: start,
            count: per_event,
            description: info.description.clone(),
        };
        Vec::from_record(&self.data, &event_info)
    }
}
