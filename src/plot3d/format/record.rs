//! # Fortran Sequential Record Reading
//!
//! Every block of a Fortran unformatted sequential file is stored as
//!
//! ```text
//! [marker] [payload] [marker]
//! ```
//!
//! where both markers hold the payload length in bytes. This module reads one
//! such record at a time and checks the markers against each other and, where
//! it is known in advance, against the expected payload length.

use std::io::{self, Read};
use log::{debug, trace};
use ndarray::{Array4, ShapeBuilder};

use crate::plot3d::layout::{FormatDescriptor, Real};
use crate::plot3d::types::error::{Plot3dError, RecordKind, RecordPart, Result};
use crate::plot3d::types::models::GridDimensions;
use crate::plot3d::utils;

/// Reads one complete record and returns its decoded payload.
///
/// `read_payload` is called with the stream positioned right after the
/// leading marker and must consume exactly the payload. An
/// `UnexpectedEof` from any part of the record becomes
/// [`Plot3dError::TruncatedFile`].
///
/// # Errors
/// - [`Plot3dError::RecordMarkerMismatch`] if the leading marker differs from
///   `expected_len`, or the trailing marker differs from the leading one.
/// - [`Plot3dError::TruncatedFile`] if the stream ends inside the record.
pub fn read_record<R, T, F>(
    reader: &mut R,
    format: &FormatDescriptor,
    record: RecordKind,
    expected_len: Option<usize>,
    read_payload: F,
) -> Result<T>
where
    R: Read,
    F: FnOnce(&mut R) -> io::Result<T>,
{
    let leading = utils::read_marker(reader, format.marker(), format.byte_order())
        .map_err(|e| from_io(e, record, RecordPart::LeadingMarker))?;
    trace!("{} record: leading marker={}", record, leading);

    if let Some(expected_len) = expected_len {
        let expected = i64::try_from(expected_len).unwrap_or(i64::MAX);
        if leading != expected {
            return Err(Plot3dError::RecordMarkerMismatch {
                record,
                marker: RecordPart::LeadingMarker,
                expected,
                found: leading,
            });
        }
    }

    let payload = read_payload(&mut *reader).map_err(|e| from_io(e, record, RecordPart::Payload))?;

    let trailing = utils::read_marker(reader, format.marker(), format.byte_order())
        .map_err(|e| from_io(e, record, RecordPart::TrailingMarker))?;
    trace!("{} record: trailing marker={}", record, trailing);

    if trailing != leading {
        return Err(Plot3dError::RecordMarkerMismatch {
            record,
            marker: RecordPart::TrailingMarker,
            expected: leading,
            found: trailing,
        });
    }

    debug!("Read {} record ({} payload bytes)", record, leading);
    Ok(payload)
}

/// Reads a bulk record of `components` reals per grid point and arranges it
/// as a `(jmax, kmax, lmax, components)` array with `j` varying fastest.
///
/// `T` must match the layout's precision.
pub fn read_field<T: Real, R: Read>(
    reader: &mut R,
    format: &FormatDescriptor,
    record: RecordKind,
    dims: &GridDimensions,
    components: usize,
) -> Result<Array4<T>> {
    let invalid = || Plot3dError::InvalidDimensions {
        jmax: dims.jmax as i64,
        kmax: dims.kmax as i64,
        lmax: dims.lmax as i64,
    };
    let count = dims
        .point_count()
        .and_then(|n| n.checked_mul(components))
        .ok_or_else(invalid)?;
    let byte_len = count.checked_mul(T::PRECISION.width()).ok_or_else(invalid)?;

    let values = read_record(reader, format, record, Some(byte_len), |r| {
        let mut bytes = Vec::new();
        r.by_ref().take(byte_len as u64).read_to_end(&mut bytes)?;
        if bytes.len() < byte_len {
            return Err(io::ErrorKind::UnexpectedEof.into());
        }
        Ok(utils::decode_reals::<T>(&bytes, format.byte_order()))
    })?;

    // Stored in Fortran order: the first axis is contiguous.
    Array4::from_shape_vec(dims.shape(components).f(), values).map_err(|_| invalid())
}

fn from_io(err: io::Error, record: RecordKind, part: RecordPart) -> Plot3dError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        Plot3dError::TruncatedFile { record, part }
    } else {
        Plot3dError::Io(err)
    }
}
