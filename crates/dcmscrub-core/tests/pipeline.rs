use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};

use dicom::core::{DataElement, PrimitiveValue, Tag, VR};
use dicom::dictionary_std::{tags, uids};
use dicom::object::{FileMetaTableBuilder, InMemDicomObject, open_file};
use dicom::pixeldata::PixelDecoder;
use tempfile::TempDir;

use dcmscrub_core::{ScrubError, generate_stripe, reconstruct_series, scan_group};
use dcmscrub_ingest::walk_tree;

const ROWS: u16 = 16;
const COLUMNS: u16 = 16;

/// Writes a minimal monochrome CT-like slice to `dir/name`.
///
/// `instance` is the raw IS string: `None` omits the element entirely,
/// `Some("")` writes a present-but-empty element, so tests can exercise
/// every unusable-position variant. Pixel samples are a non-zero ramp so
/// that replacement is observable.
fn write_slice(dir: &Path, name: &str, series_uid: &str, instance: Option<&str>) {
    static NEXT_SOP_SUFFIX: AtomicU32 = AtomicU32::new(1);
    let sop_instance_uid = format!(
        "{series_uid}.{}",
        NEXT_SOP_SUFFIX.fetch_add(1, Ordering::Relaxed)
    );
    let mut dataset = InMemDicomObject::new_empty();
    dataset.put(DataElement::new(
        tags::SOP_CLASS_UID,
        VR::UI,
        PrimitiveValue::from(uids::CT_IMAGE_STORAGE),
    ));
    dataset.put(DataElement::new(
        tags::SOP_INSTANCE_UID,
        VR::UI,
        PrimitiveValue::from(sop_instance_uid.as_str()),
    ));
    dataset.put(DataElement::new(
        tags::SERIES_INSTANCE_UID,
        VR::UI,
        PrimitiveValue::from(series_uid),
    ));
    match instance {
        Some("") => {
            dataset.put(DataElement::new(
                tags::INSTANCE_NUMBER,
                VR::IS,
                PrimitiveValue::Empty,
            ));
        }
        Some(value) => {
            dataset.put(DataElement::new(
                tags::INSTANCE_NUMBER,
                VR::IS,
                PrimitiveValue::from(value),
            ));
        }
        None => {}
    }
    dataset.put(DataElement::new(
        tags::PATIENT_NAME,
        VR::PN,
        PrimitiveValue::from("Doe^Jane"),
    ));
    dataset.put(DataElement::new(
        tags::PATIENT_ID,
        VR::LO,
        PrimitiveValue::from("P-0001"),
    ));
    dataset.put(DataElement::new(
        tags::PHOTOMETRIC_INTERPRETATION,
        VR::CS,
        PrimitiveValue::from("MONOCHROME2"),
    ));
    dataset.put(DataElement::new(
        tags::SAMPLES_PER_PIXEL,
        VR::US,
        PrimitiveValue::from(1_u16),
    ));
    dataset.put(DataElement::new(
        tags::ROWS,
        VR::US,
        PrimitiveValue::from(ROWS),
    ));
    dataset.put(DataElement::new(
        tags::COLUMNS,
        VR::US,
        PrimitiveValue::from(COLUMNS),
    ));
    dataset.put(DataElement::new(
        tags::BITS_ALLOCATED,
        VR::US,
        PrimitiveValue::from(16_u16),
    ));
    dataset.put(DataElement::new(
        tags::BITS_STORED,
        VR::US,
        PrimitiveValue::from(16_u16),
    ));
    dataset.put(DataElement::new(
        tags::HIGH_BIT,
        VR::US,
        PrimitiveValue::from(15_u16),
    ));
    dataset.put(DataElement::new(
        tags::PIXEL_REPRESENTATION,
        VR::US,
        PrimitiveValue::from(1_u16),
    ));
    // Vendor-private element that must disappear after scrubbing.
    dataset.put(DataElement::new(
        Tag(0x0009, 0x0010),
        VR::LO,
        PrimitiveValue::from("ACME 1.0"),
    ));

    let mut pixels = Vec::with_capacity(ROWS as usize * COLUMNS as usize * 2);
    for sample in 0..(ROWS as i16 * COLUMNS as i16) {
        pixels.extend_from_slice(&sample.to_le_bytes());
    }
    dataset.put(DataElement::new(
        tags::PIXEL_DATA,
        VR::OW,
        PrimitiveValue::from(pixels),
    ));

    let object = dataset
        .with_meta(
            FileMetaTableBuilder::new()
                .transfer_syntax(uids::EXPLICIT_VR_LITTLE_ENDIAN)
                .media_storage_sop_class_uid(uids::CT_IMAGE_STORAGE)
                .media_storage_sop_instance_uid(sop_instance_uid),
        )
        .expect("build file meta");
    object.write_to_file(dir.join(name)).expect("write slice");
}

fn group_for(dir: &Path) -> dcmscrub_ingest::DirectoryGroup {
    let groups = walk_tree(dir).expect("walk");
    groups.into_iter().next().expect("root group")
}

#[test]
fn scan_groups_files_by_series() {
    let dir = TempDir::new().unwrap();
    write_slice(dir.path(), "a1", "1.2.3.1", Some("1"));
    write_slice(dir.path(), "a2", "1.2.3.1", Some("2"));
    write_slice(dir.path(), "b5", "1.2.3.2", Some("5"));

    let series = scan_group(&group_for(dir.path())).expect("scan");

    assert_eq!(series.len(), 2);
    assert_eq!(series["1.2.3.1"].slice_range(), Some((1, 2)));
    assert_eq!(series["1.2.3.2"].slice_range(), Some((5, 5)));
}

#[test]
fn scan_skips_zero_absent_and_empty_instance_numbers() {
    let dir = TempDir::new().unwrap();
    write_slice(dir.path(), "zero", "1.2.3.1", Some("0"));
    write_slice(dir.path(), "absent", "1.2.3.1", None);
    write_slice(dir.path(), "empty", "1.2.3.1", Some(""));
    // A usable sibling proves the skips do not poison the scan.
    write_slice(dir.path(), "kept", "1.2.3.1", Some("7"));

    let series = scan_group(&group_for(dir.path())).expect("scan");

    assert_eq!(series.len(), 1);
    assert_eq!(series["1.2.3.1"].len(), 1);
    assert_eq!(series["1.2.3.1"].slice_range(), Some((7, 7)));
}

#[test]
fn gap_in_series_is_a_structured_error() {
    let dir = TempDir::new().unwrap();
    write_slice(dir.path(), "s1", "1.2.3.9", Some("1"));
    write_slice(dir.path(), "s3", "1.2.3.9", Some("3"));
    let output = TempDir::new().unwrap();

    let series = scan_group(&group_for(dir.path())).expect("scan");
    let error = reconstruct_series("1.2.3.9", &series["1.2.3.9"], output.path()).unwrap_err();

    match error {
        ScrubError::MissingSlice { series_uid, index } => {
            assert_eq!(series_uid, "1.2.3.9");
            assert_eq!(index, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
    // Nothing is written when validation fails up front.
    assert!(!output.path().join("1.2.3.9").exists());
}

#[test]
fn end_to_end_scrub_of_a_two_slice_series() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("study").join("series");
    std::fs::create_dir_all(&nested).unwrap();
    write_slice(&nested, "s1", "1.2.3.4.5", Some("1"));
    write_slice(&nested, "s2", "1.2.3.4.5", Some("2"));
    std::fs::write(nested.join("listing.csv"), b"not dicom").unwrap();
    let output = TempDir::new().unwrap();

    let mut written: Vec<PathBuf> = Vec::new();
    for group in walk_tree(dir.path()).expect("walk") {
        let series = scan_group(&group).expect("scan");
        for (series_uid, record) in &series {
            written.extend(reconstruct_series(series_uid, record, output.path()).expect("scrub"));
        }
    }

    let series_dir = output.path().join("1.2.3.4.5");
    assert_eq!(
        written,
        vec![series_dir.join("slice_1.dcm"), series_dir.join("slice_2.dcm")]
    );

    for (index, path) in [(1, &written[0]), (2, &written[1])] {
        let object = open_file(path).expect("read output");
        assert!(object.element(tags::PATIENT_NAME).is_err());
        assert!(object.element(tags::PATIENT_ID).is_err());
        assert!(object.element(Tag(0x0009, 0x0010)).is_err());
        // Non-identifying attributes survive.
        assert!(object.element(tags::SERIES_INSTANCE_UID).is_ok());

        let decoded = object.decode_pixel_data().expect("decode output");
        let expected = generate_stripe(u32::from(ROWS), u32::from(COLUMNS), index);
        assert_eq!(decoded.data(), expected.to_bytes().as_slice());
    }
}

#[test]
fn overwrites_existing_output_files() {
    let dir = TempDir::new().unwrap();
    write_slice(dir.path(), "s1", "1.2.3.7", Some("1"));
    let output = TempDir::new().unwrap();
    let stale = output.path().join("1.2.3.7").join("slice_1.dcm");
    std::fs::create_dir_all(stale.parent().unwrap()).unwrap();
    std::fs::write(&stale, b"stale").unwrap();

    let series = scan_group(&group_for(dir.path())).expect("scan");
    let written = reconstruct_series("1.2.3.7", &series["1.2.3.7"], output.path()).expect("scrub");

    assert_eq!(written, vec![stale.clone()]);
    open_file(&stale).expect("overwritten output parses as DICOM");
}
