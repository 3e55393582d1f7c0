//! Device report record layouts
//!
//! Two firmware generations write reports, each as one packed C struct
//! dumped to disk. The layouts here reproduce those structs byte-for-byte
//! as explicit [`RecordSchema`] tables built with [`LayoutBuilder`], so all
//! decoding goes through bounds-checked schema lookups instead of
//! transmuted structs.
//!
//! Prediction curve lengths are derived the way the firmware derives them:
//! spectrogram frame counts for the detector's band, shrunk by the
//! receptive field of its convolutional detector head.

use crate::Result;
use crate::types::{FieldType, LayoutBuilder, RecordSchema};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length in bytes of one raw IMU telemetry region (one per detection event).
pub const IMU_REGION_LEN: usize = 736;

/// Length of the NUL-terminated source recording name field.
pub const SOURCE_FILE_LEN: usize = 50;

/// Prediction curve length for a detector head of three stride-2
/// convolution layers with kernel size 7, as in the firmware.
const fn strided_pred_len(spec_len: usize) -> usize {
    (((spec_len - 6) / 2 - 6) / 2 - 6) / 2
}

/// Fin whale pulse detector: 4 kHz band, 60 s windows, FFT 4096 hop 256,
/// head of three stride-1 conv layers with kernel size 5.
const FIN_WHALE_PRED_LEN: usize = (4_000 * 60 - 4_096) / 256 - (5 - 1) * 3;

/// Sperm whale click detector: 64 kHz band, 60 s windows, FFT 512 hop 256.
const SPERM_WHALE_PRED_LEN: usize = strided_pred_len((64_000 * 60 - 512) / 256);

/// Bird/insect/frog detectors: 32 kHz band, 10 s windows, FFT 512 hop 256.
const BIRD_PRED_LEN: usize = strided_pred_len((32_000 * 10 - 512) / 256);

/// Bat detectors: 256 kHz band, 5 s windows, FFT 512 hop 256.
const BAT_PRED_LEN: usize = strided_pred_len((256_000 * 5 - 512) / 256);

/// Static description of one detector's footprint in a report record.
///
/// Drives the generic accessors on [`crate::ReportReader`]: every detector
/// contributes a prediction curve, a detection count, and a peak index
/// array; offshore detectors additionally contribute per-event IMU regions
/// and audio sample blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detector {
    /// Field name stem, e.g. `fin_whale` for `fin_whale_preds`
    pub name: &'static str,
    /// Human-readable label used in text dumps
    pub label: &'static str,
    /// Prediction curve length
    pub pred_len: usize,
    /// Detection events the record can carry (also the peak array length)
    pub event_cap: usize,
    /// Audio samples stored per event per channel, 0 when the record
    /// carries no audio for this detector
    pub samples_per_event: usize,
    /// Whether the record carries per-event IMU telemetry regions
    pub has_imu: bool,
}

impl Detector {
    pub fn preds_field(&self) -> String {
        format!("{}_preds", self.name)
    }

    pub fn detections_field(&self) -> String {
        format!("{}_detections", self.name)
    }

    pub fn peaks_field(&self) -> String {
        format!("{}_pred_peaks", self.name)
    }

    pub fn imu_field(&self) -> String {
        format!("{}_imu", self.name)
    }

    pub fn samples_field(&self) -> String {
        format!("{}_samples", self.name)
    }
}

const FIN_WHALE: Detector = Detector {
    name: "fin_whale",
    label: "fin whale",
    pred_len: FIN_WHALE_PRED_LEN,
    event_cap: 3,
    samples_per_event: 25_600,
    has_imu: true,
};

const SPERM_WHALE: Detector = Detector {
    name: "sperm_whale",
    label: "sperm whale",
    pred_len: SPERM_WHALE_PRED_LEN,
    event_cap: 10,
    samples_per_event: 12_800,
    has_imu: true,
};

const OFFSHORE_DETECTORS: [Detector; 2] = [FIN_WHALE, SPERM_WHALE];

const fn taxon(name: &'static str, label: &'static str, pred_len: usize) -> Detector {
    Detector { name, label, pred_len, event_cap: 10, samples_per_event: 0, has_imu: false }
}

/// Terrestrial taxa in record field order.
const TERRESTRIAL_DETECTORS: [Detector; 19] = [
    taxon("anura", "Anura", BIRD_PRED_LEN),
    taxon("birds", "Birds", BIRD_PRED_LEN),
    taxon("hemiptera", "Hemiptera", BIRD_PRED_LEN),
    taxon("orthoptera", "Orthoptera", BIRD_PRED_LEN),
    taxon("curruca_communis", "Curruca communis", BIRD_PRED_LEN),
    taxon("emberiza_cirlus", "Emberiza cirlus", BIRD_PRED_LEN),
    taxon("lullula_arborea", "Lullula arborea", BIRD_PRED_LEN),
    taxon("emberiza_calandra", "Emberiza calandra", BIRD_PRED_LEN),
    taxon("saxicola_rubetra", "Saxicola rubetra", BIRD_PRED_LEN),
    taxon("emberiza_citrinella", "Emberiza citrinella", BIRD_PRED_LEN),
    taxon("emberiza_hortulana", "Emberiza hortulana", BIRD_PRED_LEN),
    taxon("coturnix_coturnix", "Coturnix coturnix", BIRD_PRED_LEN),
    taxon("alauda_arvensis", "Alauda arvensis", BIRD_PRED_LEN),
    taxon("anthus_pratensis", "Anthus pratensis", BIRD_PRED_LEN),
    taxon("pipistrellus", "Pipistrellus", BAT_PRED_LEN),
    taxon("rhinolophus", "Rhinolophus", BAT_PRED_LEN),
    taxon("nyctalus", "Nyctalus", BAT_PRED_LEN),
    taxon("plecotus", "Plecotus", BAT_PRED_LEN),
    taxon("myotis", "Myotis", BAT_PRED_LEN),
];

/// Report-writing firmware generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Project {
    /// Whale-detection buoys: fin whale + sperm whale detectors, IMU
    /// telemetry and audio excerpts per detection event
    Offshore,
    /// Biodiversity stations: 19 taxa detectors plus two acoustic indices
    Terrestrial,
}

impl Project {
    /// Detectors in record field order.
    pub fn detectors(&self) -> &'static [Detector] {
        match self {
            Project::Offshore => &OFFSHORE_DETECTORS,
            Project::Terrestrial => &TERRESTRIAL_DETECTORS,
        }
    }

    /// Audio channels the device records (interleaved in sample blocks).
    pub fn audio_channels(&self) -> usize {
        match self {
            Project::Offshore => 5,
            Project::Terrestrial => 2,
        }
    }

    /// Build the record schema for this firmware generation.
    pub fn schema(&self) -> Result<RecordSchema> {
        match self {
            Project::Offshore => offshore_schema(),
            Project::Terrestrial => terrestrial_schema(),
        }
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Project::Offshore => f.write_str("offshore"),
            Project::Terrestrial => f.write_str("terrestrial"),
        }
    }
}

impl FromStr for Project {
    type Err = crate::ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "offshore" => Ok(Project::Offshore),
            "terrestrial" => Ok(Project::Terrestrial),
            other => Err(crate::ReportError::parse_error(
                "Project selection",
                format!("Unknown project '{}', expected 'offshore' or 'terrestrial'", other),
            )),
        }
    }
}

/// Offshore record layout, in firmware struct order.
fn offshore_schema() -> Result<RecordSchema> {
    let fin = FIN_WHALE;
    let sperm = SPERM_WHALE;
    let channels = Project::Offshore.audio_channels();

    LayoutBuilder::new()
        .field(
            sperm.preds_field(),
            FieldType::Float32,
            sperm.pred_len,
            "Sperm whale click detector prediction curve",
        )
        .field(sperm.detections_field(), FieldType::Int16, 1, "Sperm whale detection count")
        .field(
            fin.preds_field(),
            FieldType::Float32,
            fin.pred_len,
            "Fin whale pulse detector prediction curve",
        )
        .field(fin.detections_field(), FieldType::Int16, 1, "Fin whale detection count")
        .field(
            "source_file",
            FieldType::Char,
            SOURCE_FILE_LEN,
            "Recording the detections refer to",
        )
        .field(
            fin.peaks_field(),
            FieldType::Int16,
            fin.event_cap,
            "Prediction curve indices of fin whale detection peaks",
        )
        .field(
            sperm.peaks_field(),
            FieldType::Int16,
            sperm.event_cap,
            "Prediction curve indices of sperm whale detection peaks",
        )
        .field(
            fin.imu_field(),
            FieldType::UInt8,
            fin.event_cap * IMU_REGION_LEN,
            "Raw IMU telemetry region per fin whale detection event",
        )
        .field(
            sperm.imu_field(),
            FieldType::UInt8,
            sperm.event_cap * IMU_REGION_LEN,
            "Raw IMU telemetry region per sperm whale detection event",
        )
        .field(
            fin.samples_field(),
            FieldType::Int16,
            fin.event_cap * fin.samples_per_event * channels,
            "Interleaved audio excerpt per fin whale detection event",
        )
        .field(
            sperm.samples_field(),
            FieldType::Int16,
            sperm.event_cap * sperm.samples_per_event * channels,
            "Interleaved audio excerpt per sperm whale detection event",
        )
        .finish()
}

/// Terrestrial record layout, in firmware struct order: indices, all
/// prediction curves, all counts, the source name, all peak arrays.
fn terrestrial_schema() -> Result<RecordSchema> {
    let mut builder = LayoutBuilder::new()
        .field("acoustic_aci", FieldType::Float64, 1, "Acoustic complexity index")
        .field("acoustic_adi", FieldType::Float32, 1, "Acoustic diversity index");

    for det in &TERRESTRIAL_DETECTORS {
        builder = builder.field(
            det.preds_field(),
            FieldType::Float32,
            det.pred_len,
            format!("{} detector prediction curve", det.label),
        );
    }
    for det in &TERRESTRIAL_DETECTORS {
        builder = builder.field(
            det.detections_field(),
            FieldType::Int16,
            1,
            format!("{} detection count", det.label),
        );
    }
    builder = builder.field(
        "source_file",
        FieldType::Char,
        SOURCE_FILE_LEN,
        "Recording the detections refer to",
    );
    for det in &TERRESTRIAL_DETECTORS {
        builder = builder.field(
            det.peaks_field(),
            FieldType::Int16,
            det.event_cap,
            format!("Prediction curve indices of {} detection peaks", det.label),
        );
    }

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pred_len_derivations_match_firmware() {
        assert_eq!(FIN_WHALE_PRED_LEN, 909);
        assert_eq!(SPERM_WHALE_PRED_LEN, 1869);
        assert_eq!(BIRD_PRED_LEN, 150);
        assert_eq!(BAT_PRED_LEN, 619);
    }

    #[test]
    fn offshore_schema_matches_firmware_struct() {
        let schema = Project::Offshore.schema().unwrap();

        // sizeof(struct) on the device, including trailing padding
        assert_eq!(schema.record_size(), 2_068_764);
        assert_eq!(schema.field_count(), 11);

        // Spot-check offsets against the C struct layout
        assert_eq!(schema.get_field("sperm_whale_preds").unwrap().offset, 0);
        assert_eq!(schema.get_field("sperm_whale_detections").unwrap().offset, 7476);
        assert_eq!(schema.get_field("fin_whale_preds").unwrap().offset, 7480);
        assert_eq!(schema.get_field("fin_whale_detections").unwrap().offset, 11116);
        assert_eq!(schema.get_field("source_file").unwrap().offset, 11118);
        assert_eq!(schema.get_field("fin_whale_pred_peaks").unwrap().offset, 11168);
        assert_eq!(schema.get_field("sperm_whale_pred_peaks").unwrap().offset, 11174);
        assert_eq!(schema.get_field("fin_whale_imu").unwrap().offset, 11194);
        assert_eq!(schema.get_field("sperm_whale_imu").unwrap().offset, 13402);
        assert_eq!(schema.get_field("fin_whale_samples").unwrap().offset, 20762);
        assert_eq!(schema.get_field("sperm_whale_samples").unwrap().offset, 788_762);
    }

    #[test]
    fn terrestrial_schema_matches_firmware_struct() {
        let schema = Project::Terrestrial.schema().unwrap();

        assert_eq!(schema.record_size(), 21_264);
        // 19 taxa x (preds + detections + peaks) + aci + adi + source_file
        assert_eq!(schema.field_count(), 19 * 3 + 3);

        assert_eq!(schema.get_field("acoustic_aci").unwrap().offset, 0);
        assert_eq!(schema.get_field("acoustic_adi").unwrap().offset, 8);
        assert_eq!(schema.get_field("anura_preds").unwrap().offset, 12);
        assert_eq!(schema.get_field("anura_detections").unwrap().offset, 20_792);
        assert_eq!(schema.get_field("source_file").unwrap().offset, 20_830);
        assert_eq!(schema.get_field("anura_pred_peaks").unwrap().offset, 20_880);
        assert_eq!(schema.get_field("myotis_pred_peaks").unwrap().offset, 21_240);
    }

    #[test]
    fn detector_field_names_are_consistent() {
        for project in [Project::Offshore, Project::Terrestrial] {
            let schema = project.schema().unwrap();
            for det in project.detectors() {
                assert!(schema.has_field(&det.preds_field()), "{}", det.preds_field());
                assert!(schema.has_field(&det.detections_field()));
                assert!(schema.has_field(&det.peaks_field()));
                assert_eq!(schema.has_field(&det.imu_field()), det.has_imu);
                assert_eq!(schema.has_field(&det.samples_field()), det.samples_per_event > 0);
            }
        }
    }

    #[test]
    fn project_parses_from_str() {
        assert_eq!("offshore".parse::<Project>().unwrap(), Project::Offshore);
        assert_eq!("Terrestrial".parse::<Project>().unwrap(), Project::Terrestrial);
        assert!("pelagic".parse::<Project>().is_err());
    }
}
