//! Error types for View3D geometry input
//!
//! Every error carries a stable code so that callers can categorize problems
//! without matching on message text. Errors found while reading records are
//! tagged with the 1-based line number of the offending line.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! Categories:
//! - **E1xxx**: I/O errors (convenience loaders only)
//! - **E2xxx**: Record classification and field conversion errors
//! - **E3xxx**: Structural errors found by the validation passes
//! - **E4xxx**: Unsupported input
//!
//! ## Common Error Codes
//!
//! - `E1001`: I/O error reading input
//! - `E2001`: Unrecognized record type
//! - `E2002`: Too few fields for a vertex or surface record
//! - `E2003`: Field is not an integer
//! - `E2004`: Field is not a number
//! - `E3001`: Declared index does not match position
//! - `E3002`: Vertex reference out of range
//! - `E3003`: Base/combination reference not less than the surface index
//! - `E3004`: Negative base/combination reference
//! - `E3005`: Geometry requested for unresolved references
//! - `E3006`: Degenerate geometry
//! - `E4001`: Unsupported format version

use crate::model::LinkKind;
use std::io;
use thiserror::Error;

/// Result type for View3D operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when reading or validating View3D geometry
#[derive(Error, Debug)]
pub enum Error {
    /// IO error occurred while reading the input
    ///
    /// **Error Code**: E1001
    ///
    /// Only produced by [`Model::from_reader`](crate::Model::from_reader) and
    /// [`Model::from_path`](crate::Model::from_path); never recorded in a
    /// model's error log.
    #[error("[E1001] I/O error: {0}")]
    Io(#[from] io::Error),

    /// The first character of a line is not a known record type
    ///
    /// **Error Code**: E2001
    #[error("[E2001] Error on line {line}: Unrecognized input type \"{tag}\"")]
    UnrecognizedRecord {
        /// 1-based line number
        line: usize,
        /// The leading character as written
        tag: char,
    },

    /// A vertex or surface record has fewer fields than required
    ///
    /// **Error Code**: E2002
    ///
    /// **Common Causes**:
    /// - Missing coordinate on a `V` line
    /// - Missing emissivity or name on an `S` line
    #[error("[E2002] On line {line}: Insufficient {record} data")]
    InsufficientData {
        /// 1-based line number
        line: usize,
        /// Record name ("vertex" or "surface")
        record: &'static str,
    },

    /// A field that must be an integer could not be converted
    ///
    /// **Error Code**: E2003
    #[error("[E2003] Error on line {line}: Non-integral {field} \"{value}\"")]
    NonIntegral {
        /// 1-based line number
        line: usize,
        /// Field description, e.g. "vertex number"
        field: &'static str,
        /// The raw token
        value: String,
    },

    /// A field that must be a floating-point number could not be converted
    ///
    /// **Error Code**: E2004
    ///
    /// **Suggestions**:
    /// - Use a period as the decimal separator ("1.5" not "1,5")
    #[error("[E2004] Error on line {line}: Non-numeric {field} \"{value}\"")]
    NonNumeric {
        /// 1-based line number
        line: usize,
        /// Field description, e.g. "x coordinate"
        field: &'static str,
        /// The raw token
        value: String,
    },

    /// A vertex or surface declares an index different from its position
    ///
    /// **Error Code**: E3001
    ///
    /// Vertices and surfaces must be numbered 1, 2, 3, ... in the order they
    /// appear in the input.
    #[error(
        "[E3001] Error in input {entity} {position}: Index \"{index}\" does not match position."
    )]
    IndexMismatch {
        /// Entity name ("vertex" or "surface")
        entity: &'static str,
        /// 1-based position in the input sequence
        position: usize,
        /// The declared index
        index: i64,
    },

    /// A surface refers to a negative vertex index
    ///
    /// **Error Code**: E3002
    #[error("[E3002] Error in input surface {surface}: Negative vertex index \"{value}\".")]
    NegativeVertexIndex {
        /// Index of the referencing surface
        surface: i64,
        /// The raw vertex reference
        value: i64,
    },

    /// A surface refers to vertex index 0
    ///
    /// **Error Code**: E3002
    ///
    /// Vertex numbering starts at 1, so 0 never names a vertex.
    #[error("[E3002] Error in input surface {surface}: Vertex index \"0\" is not valid.")]
    ZeroVertexIndex {
        /// Index of the referencing surface
        surface: i64,
    },

    /// A surface refers to a vertex index beyond the number of vertices
    ///
    /// **Error Code**: E3002
    #[error(
        "[E3002] Error in input surface {surface}: Vertex index \"{value}\" too large ({count} vertices)."
    )]
    VertexIndexTooLarge {
        /// Index of the referencing surface
        surface: i64,
        /// The raw vertex reference
        value: i64,
        /// Number of vertices in the model
        count: usize,
    },

    /// A base or combination reference does not name an earlier surface
    ///
    /// **Error Code**: E3003
    #[error(
        "[E3003] Error in input surface {surface}: {link} surface index \"{value}\" must be less than surface index."
    )]
    LinkNotLess {
        /// Index of the referencing surface
        surface: i64,
        /// Which reference field
        link: LinkKind,
        /// The raw reference
        value: i64,
    },

    /// A base or combination reference is negative
    ///
    /// **Error Code**: E3004
    #[error(
        "[E3004] Error in input surface {surface}: Negative {} surface index \"{value}\".",
        .link.label()
    )]
    NegativeLink {
        /// Index of the referencing surface
        surface: i64,
        /// Which reference field
        link: LinkKind,
        /// The raw reference
        value: i64,
    },

    /// Geometry was requested for a surface whose references are not resolved
    ///
    /// **Error Code**: E3005
    #[error("[E3005] Unresolved reference: {0}")]
    Unresolved(String),

    /// A surface or model has no usable geometry
    ///
    /// **Error Code**: E3006
    ///
    /// **Common Causes**:
    /// - All vertices of a surface are collinear
    /// - The model has no vertices
    #[error("[E3006] Invalid geometry: {0}")]
    Geometry(String),

    /// The format record names a version this reader does not support
    ///
    /// **Error Code**: E4001
    ///
    /// This is the only error that stops reading immediately.
    #[error("[E4001] Error on line {line}: Unsupported format \"{format}\"")]
    UnsupportedFormat {
        /// 1-based line number
        line: usize,
        /// The version string found on the line
        format: String,
    },
}

impl Error {
    /// Create a NonIntegral error for a raw token
    pub fn non_integral(line: usize, field: &'static str, value: &str) -> Self {
        Error::NonIntegral {
            line,
            field,
            value: value.to_string(),
        }
    }

    /// Create a NonNumeric error for a raw token
    pub fn non_numeric(line: usize, field: &'static str, value: &str) -> Self {
        Error::NonNumeric {
            line,
            field,
            value: value.to_string(),
        }
    }

    /// The stable error code, e.g. `"E2002"`
    pub fn code(&self) -> &'static str {
        match self {
            Error::Io(_) => "E1001",
            Error::UnrecognizedRecord { .. } => "E2001",
            Error::InsufficientData { .. } => "E2002",
            Error::NonIntegral { .. } => "E2003",
            Error::NonNumeric { .. } => "E2004",
            Error::IndexMismatch { .. } => "E3001",
            Error::NegativeVertexIndex { .. }
            | Error::ZeroVertexIndex { .. }
            | Error::VertexIndexTooLarge { .. } => "E3002",
            Error::LinkNotLess { .. } => "E3003",
            Error::NegativeLink { .. } => "E3004",
            Error::Unresolved(_) => "E3005",
            Error::Geometry(_) => "E3006",
            Error::UnsupportedFormat { .. } => "E4001",
        }
    }

    /// The 1-based source line, for errors raised while reading records
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::UnrecognizedRecord { line, .. }
            | Error::InsufficientData { line, .. }
            | Error::NonIntegral { line, .. }
            | Error::NonNumeric { line, .. }
            | Error::UnsupportedFormat { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Whether this error stops reading the rest of the input
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::UnsupportedFormat { .. })
    }
}
