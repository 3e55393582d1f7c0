//! Full report record text dump

use crate::Result;
use crate::report::{Detector, Project, ReportReader};
use std::io::Write;

/// Write the whole record as sectioned text: the source recording name,
/// then per detector its prediction curve, peak indices, and (offshore)
/// per-event audio sample blocks.
pub fn write_report<W: Write>(out: &mut W, reader: &ReportReader) -> Result<()> {
    writeln!(out, "Filename : {}", reader.source_file()?)?;

    if reader.project() == Project::Terrestrial {
        writeln!(out, "ACI : {:.6}", reader.acoustic_aci()?)?;
        writeln!(out, "ADI : {:.6}", reader.acoustic_adi()?)?;
    }

    for detector in reader.project().detectors() {
        write_detector_sections(out, reader, detector)?;
    }

    Ok(())
}

fn write_detector_sections<W: Write>(
    out: &mut W,
    reader: &ReportReader,
    detector: &Detector,
) -> Result<()> {
    writeln!(out, "{} preds", detector.label)?;
    for pred in reader.preds(detector)? {
        write!(out, "{:.6},", pred)?;
    }
    writeln!(out)?;

    writeln!(out, "{} predPeaks", detector.label)?;
    for peak in reader.pred_peaks(detector)? {
        write!(out, "{},", peak)?;
    }
    writeln!(out)?;

    if detector.samples_per_event > 0 {
        writeln!(out, "{} samples", detector.label)?;
        for event in 0..reader.event_count(detector)? {
            for sample in reader.audio_samples(detector, event)? {
                write!(out, "{},", sample)?;
            }
            writeln!(out)?;
        }
    }

    Ok(())
}
