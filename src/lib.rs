//! # plot3d-reader
//!
//! A reader for PLOT3D grid and flow files written with Fortran unformatted
//! sequential I/O. Supports single-grid files without IBLANK, in single or
//! double precision, with 4 or 8 byte record markers in either byte order.
//! Reals are returned in their stored precision: `f32` or `f64`.
//!
//! ```no_run
//! use plot3d_reader::{decode_flow, decode_grid, FormatDescriptor};
//!
//! let format = FormatDescriptor::from_options("single", 4, "little")?;
//! let (dims, grid) = decode_grid::<f32>("sample.grid", &format)?;
//! let (_, params, flow) = decode_flow::<f32>("sample.flow", &format)?;
//! println!("{} grid, shape {:?}, Mach {}", dims, grid.shape(), params.mach);
//! # let _ = flow;
//! # Ok::<(), plot3d_reader::Plot3dError>(())
//! ```
pub mod plot3d;

// Re-export the main types for convenience
pub use plot3d::{
    decode_flow,
    decode_grid,
    read_flow,
    read_grid,
    layout::{Endianness, FormatDescriptor, MarkerWidth, Precision, Real, INT_WIDTH},
    types::{
        error::{Plot3dError, RecordKind, RecordPart, Result},
        models::{FlowField, FlowParameters, Grid, GridDimensions, FLOW_COMPONENTS, GRID_COMPONENTS},
    },
};
