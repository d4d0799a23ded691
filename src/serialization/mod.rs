//! Artifact serialization: the `.alma` binary container.
//!
//! Layout (little-endian throughout):
//! ```text
//! [4-byte magic: "ALMA"]
//! [4-byte u32 metadata_len]
//! [JSON metadata: format_version, model_type, feature_names]
//! [4-byte u32 n_coefficients]
//! [n_coefficients x 4-byte f32 coefficients]
//! [4-byte f32 intercept]
//! [4-byte CRC32: checksum of all preceding bytes]
//! ```
//!
//! The metadata section carries the ordered feature schema; the payload
//! carries one coefficient per schema entry plus the intercept. Loading
//! validates magic, section bounds, schema/payload agreement, and the
//! CRC32 trailer.
//!
//! # Example
//!
//! ```
//! use almagemela::model::SoulmateModel;
//! use almagemela::primitives::Vector;
//! use almagemela::serialization::{from_bytes, to_bytes};
//!
//! let model = SoulmateModel::new(
//!     vec!["age".to_string()],
//!     Vector::from_slice(&[0.01]),
//!     0.2,
//! ).unwrap();
//!
//! let bytes = to_bytes(&model).unwrap();
//! let loaded = from_bytes(&bytes).unwrap();
//! assert_eq!(loaded, model);
//! ```

use crate::error::{AlmaError, Result};
use crate::model::{SoulmateModel, MODEL_TYPE};
use crate::primitives::Vector;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Magic bytes for the `.alma` format.
pub const ALMA_MAGIC: [u8; 4] = *b"ALMA";

/// Current format version.
pub const FORMAT_VERSION: u32 = 1;

/// Default artifact location, relative to the working directory.
pub const DEFAULT_ARTIFACT_PATH: &str = "soulmate_model.alma";

/// JSON metadata section of an `.alma` artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlmaMetadata {
    /// Format version the artifact was written with.
    pub format_version: u32,
    /// Model type tag (currently always `linear_regression`).
    pub model_type: String,
    /// Ordered feature schema the model was fitted on.
    pub feature_names: Vec<String>,
}

/// Serializes a model to `.alma` bytes.
///
/// # Errors
///
/// Returns an error if metadata serialization fails.
pub fn to_bytes(model: &SoulmateModel) -> Result<Vec<u8>> {
    let metadata = AlmaMetadata {
        format_version: FORMAT_VERSION,
        model_type: MODEL_TYPE.to_string(),
        feature_names: model.expected_columns().to_vec(),
    };
    let metadata_json = serde_json::to_string(&metadata)
        .map_err(|e| AlmaError::Serialization(format!("metadata serialization failed: {e}")))?;
    let metadata_bytes = metadata_json.as_bytes();

    let mut output = Vec::new();
    output.extend_from_slice(&ALMA_MAGIC);
    output.extend_from_slice(&(metadata_bytes.len() as u32).to_le_bytes());
    output.extend_from_slice(metadata_bytes);
    output.extend_from_slice(&(model.n_features() as u32).to_le_bytes());
    for &coefficient in model.coefficients().as_slice() {
        output.extend_from_slice(&coefficient.to_le_bytes());
    }
    output.extend_from_slice(&model.intercept().to_le_bytes());

    let crc = crc32(&output);
    output.extend_from_slice(&crc.to_le_bytes());

    Ok(output)
}

/// Deserializes a model from `.alma` bytes.
///
/// # Errors
///
/// Returns a format error for structural problems (bad magic, truncated
/// sections, schema/payload disagreement) and a checksum mismatch when
/// the CRC32 trailer disagrees with the content.
pub fn from_bytes(data: &[u8]) -> Result<SoulmateModel> {
    let magic = data
        .get(0..4)
        .ok_or_else(|| format_error("file too short for magic"))?;
    if magic != ALMA_MAGIC {
        return Err(format_error(&format!(
            "invalid magic: expected ALMA, got {magic:?}"
        )));
    }

    let metadata_len = read_u32(data, 4)? as usize;
    let metadata_end = 8 + metadata_len;
    let metadata_json = data
        .get(8..metadata_end)
        .ok_or_else(|| format_error("file too short for metadata"))?;
    let metadata: AlmaMetadata = serde_json::from_slice(metadata_json)
        .map_err(|e| format_error(&format!("invalid metadata JSON: {e}")))?;

    if metadata.format_version != FORMAT_VERSION {
        return Err(format_error(&format!(
            "unsupported format version: {}",
            metadata.format_version
        )));
    }
    if metadata.model_type != MODEL_TYPE {
        return Err(format_error(&format!(
            "unsupported model type: {}",
            metadata.model_type
        )));
    }

    let n_coefficients = read_u32(data, metadata_end)? as usize;
    if n_coefficients != metadata.feature_names.len() {
        return Err(format_error(&format!(
            "coefficient count {} does not match {} feature names",
            n_coefficients,
            metadata.feature_names.len()
        )));
    }

    let payload_start = metadata_end + 4;
    let payload_end = payload_start + 4 * n_coefficients + 4;
    if data.len() != payload_end + 4 {
        return Err(format_error("file length does not match payload"));
    }

    let expected_crc = read_u32(data, payload_end)?;
    let actual_crc = crc32(&data[..payload_end]);
    if expected_crc != actual_crc {
        return Err(AlmaError::ChecksumMismatch {
            expected: expected_crc,
            actual: actual_crc,
        });
    }

    let mut coefficients = Vec::with_capacity(n_coefficients);
    for i in 0..n_coefficients {
        coefficients.push(read_f32(data, payload_start + 4 * i)?);
    }
    let intercept = read_f32(data, payload_start + 4 * n_coefficients)?;

    SoulmateModel::new(
        metadata.feature_names,
        Vector::from_vec(coefficients),
        intercept,
    )
}

/// Writes a model to an `.alma` file.
///
/// # Errors
///
/// Returns an error if serialization or the file write fails.
pub fn save_alma<P: AsRef<Path>>(model: &SoulmateModel, path: P) -> Result<()> {
    let bytes = to_bytes(model)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Reads a model from an `.alma` file.
///
/// # Errors
///
/// Returns [`AlmaError::ArtifactNotFound`] if the path does not resolve
/// to a readable file; format/checksum errors as in [`from_bytes`].
pub fn load_alma<P: AsRef<Path>>(path: P) -> Result<SoulmateModel> {
    from_bytes(&read_artifact_file(path.as_ref())?)
}

/// Reads just the metadata section of an `.alma` file, without
/// validating the payload. Used for artifact inspection.
///
/// # Errors
///
/// Returns [`AlmaError::ArtifactNotFound`] for a missing file and a
/// format error for a malformed header.
pub fn read_metadata<P: AsRef<Path>>(path: P) -> Result<AlmaMetadata> {
    let bytes = read_artifact_file(path.as_ref())?;

    let magic = bytes
        .get(0..4)
        .ok_or_else(|| format_error("file too short for magic"))?;
    if magic != ALMA_MAGIC {
        return Err(format_error(&format!(
            "invalid magic: expected ALMA, got {magic:?}"
        )));
    }
    let metadata_len = read_u32(&bytes, 4)? as usize;
    let metadata_json = bytes
        .get(8..8 + metadata_len)
        .ok_or_else(|| format_error("file too short for metadata"))?;
    serde_json::from_slice(metadata_json)
        .map_err(|e| format_error(&format!("invalid metadata JSON: {e}")))
}

fn read_artifact_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AlmaError::ArtifactNotFound {
                path: path.to_path_buf(),
            }
        } else {
            AlmaError::Io(e)
        }
    })
}

fn format_error(message: &str) -> AlmaError {
    AlmaError::FormatError {
        message: message.to_string(),
    }
}

fn read_u32(data: &[u8], offset: usize) -> Result<u32> {
    let bytes = data
        .get(offset..offset + 4)
        .ok_or_else(|| format_error("file too short"))?;
    Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

fn read_f32(data: &[u8], offset: usize) -> Result<f32> {
    let bytes = data
        .get(offset..offset + 4)
        .ok_or_else(|| format_error("file too short"))?;
    Ok(f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// Simple CRC32 implementation (IEEE polynomial, table-driven).
fn crc32(data: &[u8]) -> u32 {
    let mut crc: u32 = 0xFFFF_FFFF;
    for &byte in data {
        let idx = ((crc ^ u32::from(byte)) & 0xFF) as usize;
        crc = CRC32_TABLE[idx] ^ (crc >> 8);
    }
    !crc
}

const CRC32_TABLE: [u32; 256] = build_crc32_table();

const fn build_crc32_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u32;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 1 != 0 {
                0xEDB8_8320 ^ (crc >> 1)
            } else {
                crc >> 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

#[cfg(test)]
mod tests;
