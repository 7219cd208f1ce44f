//! Low-level byte reading utilities

use std::io::Read;
use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use super::layout::{Endianness, MarkerWidth, Real};

/// Read a 4 or 8 byte signed record marker.
pub fn read_marker(reader: &mut impl Read, width: MarkerWidth, order: Endianness) -> std::io::Result<i64> {
    match (width, order) {
        (MarkerWidth::Four, Endianness::Little) => Ok(reader.read_i32::<LittleEndian>()? as i64),
        (MarkerWidth::Four, Endianness::Big) => Ok(reader.read_i32::<BigEndian>()? as i64),
        (MarkerWidth::Eight, Endianness::Little) => reader.read_i64::<LittleEndian>(),
        (MarkerWidth::Eight, Endianness::Big) => reader.read_i64::<BigEndian>(),
    }
}

/// Read a 4 byte signed integer field.
pub fn read_int(reader: &mut impl Read, order: Endianness) -> std::io::Result<i32> {
    match order {
        Endianness::Little => reader.read_i32::<LittleEndian>(),
        Endianness::Big => reader.read_i32::<BigEndian>(),
    }
}

/// Read a single real in its stored precision.
pub fn read_real<T: Real, R: Read>(reader: &mut R, order: Endianness) -> std::io::Result<T> {
    match order {
        Endianness::Little => T::read_from::<LittleEndian, R>(reader),
        Endianness::Big => T::read_from::<BigEndian, R>(reader),
    }
}

/// Decode a packed run of reals in their stored precision.
///
/// `bytes.len()` must be a multiple of the precision width.
pub fn decode_reals<T: Real>(bytes: &[u8], order: Endianness) -> Vec<T> {
    let mut values = vec![T::default(); bytes.len() / T::PRECISION.width()];
    match order {
        Endianness::Little => T::decode_into::<LittleEndian>(bytes, &mut values),
        Endianness::Big => T::decode_into::<BigEndian>(bytes, &mut values),
    }
    values
}
