//! Grid (coordinate) file decoding.
//!
//! ```text
//! [marker] jmax kmax lmax [marker]
//! [marker] x(j,k,l) y(j,k,l) z(j,k,l) [marker]
//! ```

use std::io::Read;
use log::debug;

use crate::plot3d::format::record;
use crate::plot3d::layout::{FormatDescriptor, MarkerWidth, Real};
use crate::plot3d::types::error::{Plot3dError, RecordKind, RecordPart, Result};
use crate::plot3d::types::models::{Grid, GridDimensions, GRID_COMPONENTS};
use crate::plot3d::utils;

/// Reads the dimensions record shared by grid and flow files.
pub fn read_dimensions<R: Read>(reader: &mut R, format: &FormatDescriptor) -> Result<GridDimensions> {
    let order = format.byte_order();
    let (jmax, kmax, lmax) = record::read_record(
        reader,
        format,
        RecordKind::Dimensions,
        Some(format.dimensions_record_len()),
        |r| {
            let jmax = utils::read_int(r, order)?;
            let kmax = utils::read_int(r, order)?;
            let lmax = utils::read_int(r, order)?;
            Ok((jmax, kmax, lmax))
        },
    )?;
    debug!("Dimensions: jmax={}, kmax={}, lmax={}", jmax, kmax, lmax);

    // An 8-byte little-endian marker read as 4 bytes leaves its zero upper
    // half as the first payload word.
    if jmax == 0 && format.marker() == MarkerWidth::Four {
        return Err(Plot3dError::RecordMarkerMismatch {
            record: RecordKind::Dimensions,
            marker: RecordPart::Payload,
            expected: format.dimensions_record_len() as i64,
            found: 0,
        });
    }
    GridDimensions::new(jmax, kmax, lmax)
}

/// Decodes the records of a grid file in order.
pub fn parse<T: Real, R: Read>(reader: &mut R, format: &FormatDescriptor) -> Result<(GridDimensions, Grid<T>)> {
    let dims = read_dimensions(reader, format)?;
    let grid = record::read_field(reader, format, RecordKind::GridData, &dims, GRID_COMPONENTS)?;
    Ok((dims, grid))
}
