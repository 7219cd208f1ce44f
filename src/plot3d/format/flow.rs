//! Flow (solution) file decoding.
//!
//! ```text
//! [marker] jmax kmax lmax [marker]
//! [marker] mach alpha reynolds iterations [marker]
//! [marker] q(j,k,l,1..5) [marker]
//! ```

use std::io::Read;
use log::debug;

use crate::plot3d::format::{grid, record};
use crate::plot3d::layout::{FormatDescriptor, Real};
use crate::plot3d::types::error::{RecordKind, Result};
use crate::plot3d::types::models::{FlowField, FlowParameters, GridDimensions, FLOW_COMPONENTS};
use crate::plot3d::utils;

/// Reads the free-stream parameters record.
///
/// Field order is fixed: Mach number, angle of attack, Reynolds number
/// (reals), then the iteration count (integer).
pub fn read_parameters<T: Real, R: Read>(reader: &mut R, format: &FormatDescriptor) -> Result<FlowParameters<T>> {
    let order = format.byte_order();
    let params: FlowParameters<T> = record::read_record(
        reader,
        format,
        RecordKind::Parameters,
        Some(format.parameters_record_len()),
        |r| {
            Ok(FlowParameters {
                mach: utils::read_real(r, order)?,
                alpha: utils::read_real(r, order)?,
                reynolds: utils::read_real(r, order)?,
                iterations: utils::read_int(r, order)?,
            })
        },
    )?;
    debug!("Parameters: {}", params);
    Ok(params)
}

/// Decodes the records of a flow file in order.
pub fn parse<T: Real, R: Read>(
    reader: &mut R,
    format: &FormatDescriptor,
) -> Result<(GridDimensions, FlowParameters<T>, FlowField<T>)> {
    let dims = grid::read_dimensions(reader, format)?;
    let params = read_parameters(reader, format)?;
    let flow = record::read_field(reader, format, RecordKind::FlowData, &dims, FLOW_COMPONENTS)?;
    Ok((dims, params, flow))
}
