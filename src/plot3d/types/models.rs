//! Data structures produced by the PLOT3D decoders.
//!
//! All values are built fresh per decode call and owned by the caller.

use std::fmt;
use ndarray::Array4;
use super::error::{Plot3dError, Result};

/// Number of coordinate components per grid point (x, y, z).
pub const GRID_COMPONENTS: usize = 3;

/// Number of solution quantities per grid point
/// (density, three momentum components, total energy).
pub const FLOW_COMPONENTS: usize = 5;

/// Coordinates of shape `(jmax, kmax, lmax, 3)`, column-major, in the
/// stored precision.
pub type Grid<T> = Array4<T>;

/// Solution quantities of shape `(jmax, kmax, lmax, 5)`, column-major, in
/// the stored precision.
pub type FlowField<T> = Array4<T>;

/// Grid size read from the dimensions record of a file.
///
/// Every field is strictly positive once decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    pub jmax: usize,
    pub kmax: usize,
    pub lmax: usize,
}

impl GridDimensions {
    /// Validates raw integers from the dimensions record.
    ///
    /// Zero or negative values are rejected, as is a point count that does not
    /// fit in `usize` once multiplied by the largest component count.
    pub fn new(jmax: i32, kmax: i32, lmax: i32) -> Result<Self> {
        let invalid = || Plot3dError::InvalidDimensions {
            jmax: jmax.into(),
            kmax: kmax.into(),
            lmax: lmax.into(),
        };
        if jmax <= 0 || kmax <= 0 || lmax <= 0 {
            return Err(invalid());
        }
        let dims = Self {
            jmax: jmax as usize,
            kmax: kmax as usize,
            lmax: lmax as usize,
        };
        dims.point_count()
            .and_then(|n| n.checked_mul(FLOW_COMPONENTS))
            .ok_or_else(invalid)?;
        Ok(dims)
    }

    /// Returns `jmax * kmax * lmax`, or `None` on overflow.
    pub fn point_count(&self) -> Option<usize> {
        self.jmax.checked_mul(self.kmax)?.checked_mul(self.lmax)
    }

    /// Returns the array shape for `components` values per point.
    pub fn shape(&self, components: usize) -> (usize, usize, usize, usize) {
        (self.jmax, self.kmax, self.lmax, components)
    }
}

impl fmt::Display for GridDimensions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}x{}", self.jmax, self.kmax, self.lmax)
    }
}

/// Free-stream conditions stored ahead of the solution in a flow file.
///
/// Reals keep the file's precision (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowParameters<T> {
    /// Free-stream Mach number.
    pub mach: T,
    /// Angle of attack.
    pub alpha: T,
    /// Reynolds number.
    pub reynolds: T,
    /// Iteration count (or solution time step).
    pub iterations: i32,
}

impl<T: fmt::Display> fmt::Display for FlowParameters<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Mach number={}, angle of attack={}, Reynolds number={}, iterations={}",
            self.mach, self.alpha, self.reynolds, self.iterations
        )
    }
}
