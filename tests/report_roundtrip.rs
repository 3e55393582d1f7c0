//! End-to-end decoding of synthetic report records through the public API.

use spyhop::{IMU_REGION_LEN, ImuFrame, Project, ReportReader, dump};

/// Encode one IMU frame slot the way the buoy firmware writes it: marker,
/// length field, kind byte, then a big-endian payload. Returns the start of
/// the next slot.
fn put_imu_frame(region: &mut [u8], start: usize, timestamp: u32, channels: [i16; 9]) -> usize {
    region[start] = 0xFE;
    region[start + 1] = 0x0A;
    region[start + 2] = 0x0A;
    region[start + 5] = 0x08;

    let payload = start + 5;
    region[payload + 9..payload + 13].copy_from_slice(&timestamp.to_be_bytes());
    for (i, channel) in channels.iter().enumerate() {
        let at = payload + 13 + 2 * i;
        region[at..at + 2].copy_from_slice(&channel.to_be_bytes());
    }

    start + 37
}

fn put_i16(record: &mut [u8], offset: usize, value: i16) {
    record[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

#[test]
fn offshore_record_decodes_end_to_end() {
    let schema = Project::Offshore.schema().unwrap();
    let mut record = vec![0u8; schema.record_size()];

    let name_offset = schema.get_field("source_file").unwrap().offset;
    record[name_offset..name_offset + 12].copy_from_slice(b"20260801.wav");

    // Two fin whale events; event 0 carries two intact IMU frames after a
    // corrupt first slot, event 1 carries one frame.
    put_i16(&mut record, schema.get_field("fin_whale_detections").unwrap().offset, 2);
    let imu_offset = schema.get_field("fin_whale_imu").unwrap().offset;
    {
        let event0 = &mut record[imu_offset..imu_offset + IMU_REGION_LEN];
        event0[6] = 0xFF; // corrupt slot, scanner must resynchronize
        let next = put_imu_frame(event0, 6 + 37, 5000, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
        put_imu_frame(event0, next, 5010, [-1, -2, -3, -4, -5, -6, -7, -8, -9]);
    }
    {
        let event1 =
            &mut record[imu_offset + IMU_REGION_LEN..imu_offset + 2 * IMU_REGION_LEN];
        put_imu_frame(event1, 6, 6000, [10; 9]);
    }

    let reader = ReportReader::from_bytes(record, Project::Offshore).unwrap();
    let fin = &Project::Offshore.detectors()[0];

    assert_eq!(reader.source_file().unwrap(), "20260801.wav");
    assert_eq!(reader.event_count(fin).unwrap(), 2);

    let frames0 = reader.imu_frames(fin, 0).unwrap();
    assert_eq!(
        frames0,
        vec![
            ImuFrame::new(5000, [1, 2, 3, 4, 5, 6, 7, 8, 9]),
            ImuFrame::new(5010, [-1, -2, -3, -4, -5, -6, -7, -8, -9]),
        ]
    );
    assert_eq!(reader.imu_frames(fin, 1).unwrap(), vec![ImuFrame::new(6000, [10; 9])]);

    // Sperm whale reported nothing; its regions stay empty
    let sperm = &Project::Offshore.detectors()[1];
    assert_eq!(reader.event_count(sperm).unwrap(), 0);

    let mut out = Vec::new();
    dump::write_detector_events(&mut out, &reader, fin).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "5000,1,2,3,4,5,6,7,8,9\n\
         5010,-1,-2,-3,-4,-5,-6,-7,-8,-9\n\
         \n\
         6000,10,10,10,10,10,10,10,10,10\n\
         \n"
    );
}

#[test]
fn terrestrial_record_dumps_end_to_end() {
    let schema = Project::Terrestrial.schema().unwrap();
    let mut record = vec![0u8; schema.record_size()];

    let aci_offset = schema.get_field("acoustic_aci").unwrap().offset;
    record[aci_offset..aci_offset + 8].copy_from_slice(&0.75f64.to_le_bytes());
    put_i16(&mut record, schema.get_field("anura_detections").unwrap().offset, 1);
    put_i16(&mut record, schema.get_field("anura_pred_peaks").unwrap().offset, 33);

    let reader = ReportReader::from_bytes(record, Project::Terrestrial).unwrap();

    let mut out = Vec::new();
    dump::write_report(&mut out, &reader).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("Filename : \nACI : 0.750000\nADI : 0.000000\n"));
    assert!(text.contains("Anura predPeaks\n33,\n"));
    assert!(text.contains("Myotis preds\n"));
}

#[test]
fn file_shorter_than_record_is_rejected() {
    let err = ReportReader::from_bytes(vec![0u8; 1024], Project::Terrestrial).unwrap_err();
    assert!(err.to_string().contains("too short"));
}
