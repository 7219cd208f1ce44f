//! Binary layout parameters for Fortran unformatted PLOT3D files.
//!
//! The format is not self-describing: record marker width, real precision
//! and byte order must be supplied by the caller. [`FormatDescriptor`]
//! bundles them into one immutable value shared by every decode call.

use std::fmt;
use std::io::{self, Read};
use std::str::FromStr;
use byteorder::{ByteOrder, ReadBytesExt};

use super::types::error::{Plot3dError, Result};

/// Width in bytes of every integer field (dimensions, iteration count).
pub const INT_WIDTH: usize = 4;

/// Floating point precision of the stored reals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    /// 4-byte IEEE 754 reals.
    Single,
    /// 8-byte IEEE 754 reals.
    Double,
}

impl Precision {
    /// Returns the byte width of one real value.
    pub fn width(&self) -> usize {
        match self {
            Precision::Single => 4,
            Precision::Double => 8,
        }
    }
}

impl FromStr for Precision {
    type Err = Plot3dError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "single" => Ok(Self::Single),
            "double" => Ok(Self::Double),
            _ => Err(Plot3dError::InvalidConfiguration(format!(
                "real precision must be \"single\" or \"double\", got {:?}",
                s
            ))),
        }
    }
}

mod private {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A real type values are decoded into, matching the stored [`Precision`].
///
/// Implemented for `f32` (single) and `f64` (double) only.
pub trait Real: Copy + Default + PartialEq + fmt::Debug + fmt::Display + private::Sealed + 'static {
    /// The stored precision this type decodes without conversion.
    const PRECISION: Precision;

    /// Reads one value in byte order `B`.
    fn read_from<B: ByteOrder, R: Read>(reader: &mut R) -> io::Result<Self>;

    /// Decodes packed values in byte order `B`; `bytes.len()` must equal
    /// `dst.len()` times the precision width.
    fn decode_into<B: ByteOrder>(bytes: &[u8], dst: &mut [Self]);
}

impl Real for f32 {
    const PRECISION: Precision = Precision::Single;

    fn read_from<B: ByteOrder, R: Read>(reader: &mut R) -> io::Result<Self> {
        reader.read_f32::<B>()
    }

    fn decode_into<B: ByteOrder>(bytes: &[u8], dst: &mut [Self]) {
        B::read_f32_into(bytes, dst)
    }
}

impl Real for f64 {
    const PRECISION: Precision = Precision::Double;

    fn read_from<B: ByteOrder, R: Read>(reader: &mut R) -> io::Result<Self> {
        reader.read_f64::<B>()
    }

    fn decode_into<B: ByteOrder>(bytes: &[u8], dst: &mut [Self]) {
        B::read_f64_into(bytes, dst)
    }
}

/// Width of the Fortran record markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerWidth {
    /// 32-bit markers (the default for most compilers).
    Four,
    /// 64-bit markers.
    Eight,
}

impl MarkerWidth {
    pub fn width(&self) -> usize {
        match self {
            MarkerWidth::Four => 4,
            MarkerWidth::Eight => 8,
        }
    }
}

impl TryFrom<usize> for MarkerWidth {
    type Error = Plot3dError;

    fn try_from(value: usize) -> Result<Self> {
        match value {
            4 => Ok(Self::Four),
            8 => Ok(Self::Eight),
            _ => Err(Plot3dError::InvalidConfiguration(format!(
                "record marker width must be 4 or 8 bytes, got {}",
                value
            ))),
        }
    }
}

impl FromStr for MarkerWidth {
    type Err = Plot3dError;

    fn from_str(s: &str) -> Result<Self> {
        let value: usize = s.trim().parse().map_err(|_| {
            Plot3dError::InvalidConfiguration(format!(
                "record marker width must be 4 or 8 bytes, got {:?}",
                s
            ))
        })?;
        Self::try_from(value)
    }
}

/// Byte order applied uniformly to markers, integers and reals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    Little,
    Big,
}

impl FromStr for Endianness {
    type Err = Plot3dError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "little" => Ok(Self::Little),
            "big" => Ok(Self::Big),
            _ => Err(Plot3dError::InvalidConfiguration(format!(
                "byte order must be \"little\" or \"big\", got {:?}",
                s
            ))),
        }
    }
}

/// Resolved binary layout of a PLOT3D file.
///
/// All three numeric kinds share one byte order; integers are always
/// [`INT_WIDTH`] bytes wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatDescriptor {
    marker: MarkerWidth,
    precision: Precision,
    byte_order: Endianness,
}

impl FormatDescriptor {
    /// Resolves the layout from the three caller-chosen options.
    pub fn resolve(precision: Precision, marker_width: MarkerWidth, byte_order: Endianness) -> Self {
        Self {
            marker: marker_width,
            precision,
            byte_order,
        }
    }

    /// Resolves the layout from loosely typed options, e.g. `("single", 4, "little")`.
    ///
    /// # Errors
    /// Returns [`Plot3dError::InvalidConfiguration`] if any option is outside
    /// its supported set. No default is ever substituted.
    pub fn from_options(precision: &str, marker_width: usize, byte_order: &str) -> Result<Self> {
        Ok(Self::resolve(
            precision.parse()?,
            MarkerWidth::try_from(marker_width)?,
            byte_order.parse()?,
        ))
    }

    pub fn marker(&self) -> MarkerWidth {
        self.marker
    }

    /// Byte width of each record marker (4 or 8).
    pub fn marker_width(&self) -> usize {
        self.marker.width()
    }

    /// Byte width of each integer field.
    pub fn int_width(&self) -> usize {
        INT_WIDTH
    }

    /// Byte width of each real field (4 or 8).
    pub fn real_width(&self) -> usize {
        self.precision.width()
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn byte_order(&self) -> Endianness {
        self.byte_order
    }

    /// Checks that `T` is the real type this layout stores.
    ///
    /// # Errors
    /// Returns [`Plot3dError::InvalidConfiguration`] when a single precision
    /// layout is decoded as `f64` or the reverse.
    pub fn check_real<T: Real>(&self) -> Result<()> {
        if T::PRECISION != self.precision {
            return Err(Plot3dError::InvalidConfiguration(format!(
                "{:?} precision values requested, but the layout stores {:?} precision reals",
                T::PRECISION,
                self.precision
            )));
        }
        Ok(())
    }

    /// Payload length of the dimensions record: three integers.
    pub fn dimensions_record_len(&self) -> usize {
        3 * self.int_width()
    }

    /// Payload length of the parameters record: three reals and one integer.
    pub fn parameters_record_len(&self) -> usize {
        3 * self.real_width() + self.int_width()
    }
}

impl fmt::Display for FormatDescriptor {
    /// Renders struct-style type codes, e.g. `marker=<i int=<i real=<f`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let order = match self.byte_order {
            Endianness::Little => '<',
            Endianness::Big => '>',
        };
        let marker = match self.marker {
            MarkerWidth::Four => 'i',
            MarkerWidth::Eight => 'q',
        };
        let real = match self.precision {
            Precision::Single => 'f',
            Precision::Double => 'd',
        };
        write!(f, "marker={order}{marker} int={order}i real={order}{real}")
    }
}
