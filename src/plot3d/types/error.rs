//! Custom error types for the plot3d-reader crate.

use std::fmt;
use thiserror::Error;

/// The record within a PLOT3D file that an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// `jmax, kmax, lmax` as three integers.
    Dimensions,
    /// Mach number, angle of attack, Reynolds number and iteration count.
    Parameters,
    /// Bulk coordinate data of a grid file.
    GridData,
    /// Bulk solution data of a flow file.
    FlowData,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RecordKind::Dimensions => write!(f, "dimensions"),
            RecordKind::Parameters => write!(f, "parameters"),
            RecordKind::GridData => write!(f, "grid data"),
            RecordKind::FlowData => write!(f, "flow data"),
        }
    }
}

/// The physical part of a record: `[leading marker][payload][trailing marker]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordPart {
    LeadingMarker,
    Payload,
    TrailingMarker,
}

impl fmt::Display for RecordPart {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RecordPart::LeadingMarker => write!(f, "leading marker"),
            RecordPart::Payload => write!(f, "payload"),
            RecordPart::TrailingMarker => write!(f, "trailing marker"),
        }
    }
}

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum Plot3dError {
    /// An error originating from I/O operations (e.g. the file cannot be opened).
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// A precision, marker width or byte order outside the supported set.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A record marker disagrees with its partner or with the known record length.
    ///
    /// For a leading marker `expected` is the byte length the record must have;
    /// for a trailing marker it is the value of the leading marker. A
    /// [`RecordPart::Payload`] mismatch means the dimensions payload began with
    /// a zero word, the upper half of an 8-byte marker read as 4 bytes.
    #[error(
        "Record marker mismatch in {record} record ({marker}): expected {expected}, found {found}. \
         Check the marker width and real precision used for this file"
    )]
    RecordMarkerMismatch {
        record: RecordKind,
        marker: RecordPart,
        expected: i64,
        found: i64,
    },

    /// The stream ended before a record was fully read.
    #[error("Truncated file: stream ended inside the {part} of the {record} record")]
    TruncatedFile { record: RecordKind, part: RecordPart },

    /// The decoded grid dimensions are not all positive, or their product overflows.
    #[error("Invalid dimensions: jmax={jmax}, kmax={kmax}, lmax={lmax}")]
    InvalidDimensions { jmax: i64, kmax: i64, lmax: i64 },
}

/// A convenience `Result` type alias using the crate's `Plot3dError` type.
pub type Result<T> = std::result::Result<T, Plot3dError>;
