//! Core PLOT3D decoding module.
//!
//! Reads Fortran unformatted sequential PLOT3D files containing a single
//! grid without IBLANK flags. Each decode call opens its file, consumes it
//! in one forward pass and closes it again on every exit path.

pub mod format;
pub mod layout;
pub mod types;
mod utils;

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use log::{info, warn};

use layout::{FormatDescriptor, Real};
use types::error::Result;
use types::models::{FlowField, FlowParameters, Grid, GridDimensions};

/// Decodes a grid file into its dimensions and `(jmax, kmax, lmax, 3)` coordinates.
///
/// `T` is `f32` for single precision layouts and `f64` for double.
///
/// # Arguments
/// * `path` - Path to the grid file
/// * `format` - Binary layout the file was written with
///
/// # Errors
/// Returns an error if:
/// - `T` does not match the layout's precision (before the file is opened)
/// - The file cannot be opened
/// - A record marker does not match (wrong marker width or precision)
/// - The file ends before the last record is complete
/// - The dimensions are not all positive
pub fn decode_grid<T: Real>(
    path: impl AsRef<Path>,
    format: &FormatDescriptor,
) -> Result<(GridDimensions, Grid<T>)> {
    format.check_real::<T>()?;
    let path = path.as_ref();
    info!("Opening PLOT3D grid file: {} ({})", path.display(), format);
    let mut file = File::open(path)?;
    let (dims, grid) = format::grid::parse(&mut file, format)?;
    warn_on_trailing_data(&mut file, "grid")?;
    info!("Grid decoded: {} points ({})", dims, format);
    Ok((dims, grid))
}

/// Decodes a flow file into its dimensions, free-stream parameters and
/// `(jmax, kmax, lmax, 5)` solution.
///
/// # Errors
/// Fails under the same conditions as [`decode_grid`], applied to the
/// parameters and solution records as well.
pub fn decode_flow<T: Real>(
    path: impl AsRef<Path>,
    format: &FormatDescriptor,
) -> Result<(GridDimensions, FlowParameters<T>, FlowField<T>)> {
    format.check_real::<T>()?;
    let path = path.as_ref();
    info!("Opening PLOT3D flow file: {} ({})", path.display(), format);
    let mut file = File::open(path)?;
    let (dims, params, flow) = format::flow::parse(&mut file, format)?;
    warn_on_trailing_data(&mut file, "flow")?;
    info!("Flow decoded: {} points, {}", dims, params);
    Ok((dims, params, flow))
}

/// Decodes grid records from any byte stream positioned at the first record.
///
/// The stream is left right after the coordinate record.
pub fn read_grid<T: Real>(
    reader: &mut impl Read,
    format: &FormatDescriptor,
) -> Result<(GridDimensions, Grid<T>)> {
    format.check_real::<T>()?;
    format::grid::parse(reader, format)
}

/// Decodes flow records from any byte stream positioned at the first record.
///
/// The stream is left right after the solution record.
pub fn read_flow<T: Real>(
    reader: &mut impl Read,
    format: &FormatDescriptor,
) -> Result<(GridDimensions, FlowParameters<T>, FlowField<T>)> {
    format.check_real::<T>()?;
    format::flow::parse(reader, format)
}

/// Multi-grid or IBLANK files leave data behind; it is reported, not decoded.
fn warn_on_trailing_data(file: &mut File, kind: &str) -> Result<()> {
    let position = file.stream_position()?;
    let len = file.metadata()?.len();
    if position < len {
        warn!(
            "{} unexpected bytes after the last {} record; only single-grid files without IBLANK are supported",
            len - position,
            kind
        );
    }
    Ok(())
}
