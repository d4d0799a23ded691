//! Tests for the `.alma` artifact container.

use super::*;
use crate::error::AlmaError;

fn sample_model() -> SoulmateModel {
    SoulmateModel::new(
        vec![
            "age".to_string(),
            "people_met_per_year".to_string(),
            "social_events_per_month".to_string(),
        ],
        Vector::from_slice(&[0.002, 0.0001, 0.01]),
        0.15,
    )
    .expect("valid model parts")
}

#[test]
fn test_roundtrip_bytes() {
    let model = sample_model();
    let bytes = to_bytes(&model).expect("serialization should succeed");
    let loaded = from_bytes(&bytes).expect("deserialization should succeed");
    assert_eq!(loaded, model);
}

#[test]
fn test_bytes_start_with_magic() {
    let bytes = to_bytes(&sample_model()).expect("serialization should succeed");
    assert_eq!(&bytes[..4], &ALMA_MAGIC);
}

#[test]
fn test_invalid_magic_rejected() {
    let mut bytes = to_bytes(&sample_model()).expect("serialization should succeed");
    bytes[0] = b'X';
    assert!(matches!(
        from_bytes(&bytes),
        Err(AlmaError::FormatError { .. })
    ));
}

#[test]
fn test_truncated_file_rejected() {
    let bytes = to_bytes(&sample_model()).expect("serialization should succeed");
    let truncated = &bytes[..bytes.len() - 6];
    assert!(matches!(
        from_bytes(truncated),
        Err(AlmaError::FormatError { .. })
    ));
}

#[test]
fn test_empty_file_rejected() {
    assert!(matches!(
        from_bytes(&[]),
        Err(AlmaError::FormatError { .. })
    ));
}

#[test]
fn test_corrupted_payload_fails_checksum() {
    let mut bytes = to_bytes(&sample_model()).expect("serialization should succeed");
    // Flip a bit inside the coefficient payload, leaving lengths intact.
    let idx = bytes.len() - 10;
    bytes[idx] ^= 0x01;
    assert!(matches!(
        from_bytes(&bytes),
        Err(AlmaError::ChecksumMismatch { .. })
    ));
}

#[test]
fn test_coefficient_count_mismatch_rejected() {
    let model = sample_model();
    let metadata = AlmaMetadata {
        format_version: FORMAT_VERSION,
        model_type: MODEL_TYPE.to_string(),
        feature_names: model.expected_columns().to_vec(),
    };
    let metadata_json = serde_json::to_string(&metadata).expect("metadata serializes");

    // Write a payload claiming 2 coefficients against 3 feature names.
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&ALMA_MAGIC);
    bytes.extend_from_slice(&(metadata_json.len() as u32).to_le_bytes());
    bytes.extend_from_slice(metadata_json.as_bytes());
    bytes.extend_from_slice(&2u32.to_le_bytes());
    bytes.extend_from_slice(&0.1f32.to_le_bytes());
    bytes.extend_from_slice(&0.2f32.to_le_bytes());
    bytes.extend_from_slice(&0.0f32.to_le_bytes());
    // The count check fires before checksum verification.
    bytes.extend_from_slice(&0u32.to_le_bytes());

    assert!(matches!(
        from_bytes(&bytes),
        Err(AlmaError::FormatError { .. })
    ));
}

#[test]
fn test_unsupported_model_type_rejected() {
    let metadata_json = format!(
        "{{\"format_version\":{FORMAT_VERSION},\"model_type\":\"decision_tree\",\"feature_names\":[\"age\"]}}"
    );
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&ALMA_MAGIC);
    bytes.extend_from_slice(&(metadata_json.len() as u32).to_le_bytes());
    bytes.extend_from_slice(metadata_json.as_bytes());
    bytes.extend_from_slice(&1u32.to_le_bytes());
    bytes.extend_from_slice(&0.1f32.to_le_bytes());
    bytes.extend_from_slice(&0.0f32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());

    assert!(matches!(
        from_bytes(&bytes),
        Err(AlmaError::FormatError { .. })
    ));
}

#[test]
fn test_save_and_load_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("model.alma");

    let model = sample_model();
    save_alma(&model, &path).expect("save should succeed");
    let loaded = load_alma(&path).expect("load should succeed");
    assert_eq!(loaded, model);
}

#[test]
fn test_load_missing_file_is_artifact_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("does_not_exist.alma");
    assert!(matches!(
        load_alma(&path),
        Err(AlmaError::ArtifactNotFound { .. })
    ));
}

#[test]
fn test_read_metadata() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("model.alma");
    save_alma(&sample_model(), &path).expect("save should succeed");

    let metadata = read_metadata(&path).expect("metadata should parse");
    assert_eq!(metadata.format_version, FORMAT_VERSION);
    assert_eq!(metadata.model_type, MODEL_TYPE);
    assert_eq!(metadata.feature_names.len(), 3);
}

#[test]
fn test_read_metadata_missing_file() {
    assert!(matches!(
        read_metadata("no_such_dir/no_such_file.alma"),
        Err(AlmaError::ArtifactNotFound { .. })
    ));
}
