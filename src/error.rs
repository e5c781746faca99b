//! Unified error types for the watchface library.
//!
//! Decode failures and resource-store failures are separate taxonomies: a
//! decode error means the archive cannot be trusted and no document is
//! produced, while a resource error means a mutation was rejected and the
//! store is unchanged.

use thiserror::Error;

/// Main error type for watchface operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP container error
    #[error("ZIP error: {0}")]
    Zip(String),

    /// Failed to serialize a document member
    #[error("Encode error: {0}")]
    Encode(String),

    /// Structural problem in a document member
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Rejected resource-store mutation
    #[error(transparent)]
    Resource(#[from] ResourceError),
}

/// Structural decode failures.
///
/// These are never recovered internally; the first problem encountered is
/// reported and the whole decode fails. A half-decoded document could be
/// re-encoded and corrupt the archive.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// A tagged union carried a tag this model does not know
    #[error("Unknown variant in {member}: {detail}")]
    UnknownVariant { member: String, detail: String },

    /// The face type string is not one this model knows
    #[error("Unknown face type in {member}: {detail}")]
    UnknownFaceType { member: String, detail: String },

    /// A field was present but could not be decoded
    #[error("Malformed field in {member}: {detail}")]
    MalformedField { member: String, detail: String },

    /// A required field or archive member was absent
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),
}

impl DecodeError {
    /// Classify a serde failure for one archive member into the decode
    /// taxonomy. Unknown-tag and missing-field failures have stable message
    /// shapes; everything else is a malformed field.
    pub(crate) fn classify(member: &str, err: serde_json::Error) -> Self {
        let detail = err.to_string();
        if detail.contains("unknown face type") {
            DecodeError::UnknownFaceType {
                member: member.to_string(),
                detail,
            }
        } else if detail.contains("unknown variant") {
            DecodeError::UnknownVariant {
                member: member.to_string(),
                detail,
            }
        } else if detail.contains("missing field") {
            DecodeError::MissingRequiredField(format!("{}: {}", member, detail))
        } else {
            DecodeError::MalformedField {
                member: member.to_string(),
                detail,
            }
        }
    }
}

/// Resource-store mutation failures.
///
/// Every failing operation leaves the store exactly as it was (strong
/// exception-safety guarantee).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceError {
    /// Index is not a valid position in the image list
    #[error("Image index {index} out of range (list has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    /// The device-model image ceiling is already reached
    #[error("Image list is full ({max} entries)")]
    CapacityExceeded { max: usize },
}

/// Result type for watchface operations.
pub type Result<T> = std::result::Result<T, Error>;
