//! Record-level parsing layer for PLOT3D files.
//!
//! # Module Organization
//!
//! - [`record`]: Reads one marker-delimited Fortran record
//! - [`grid`]: Dimensions and coordinate records of a grid file
//! - [`flow`]: Dimensions, parameters and solution records of a flow file
//!
//! # Architecture
//!
//! ```text
//! Grid file:              Flow file:
//! ┌──────────────┐        ┌──────────────┐
//! │  Dimensions  │        │  Dimensions  │ ← grid::read_dimensions()
//! ├──────────────┤        ├──────────────┤
//! │  Coordinates │        │  Parameters  │ ← flow::read_parameters()
//! └──────────────┘        ├──────────────┤
//!                         │  Solution    │ ← record::read_field()
//!                         └──────────────┘
//! ```

pub mod flow;
pub mod grid;
pub mod record;
