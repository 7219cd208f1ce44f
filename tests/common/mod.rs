//! Synthetic PLOT3D fixtures written the way a Fortran program would.
#![allow(dead_code)]

use std::io::Write;

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use plot3d_reader::{Endianness, FormatDescriptor, MarkerWidth, Precision};
use tempfile::NamedTempFile;

/// Every supported layout.
pub fn all_formats() -> Vec<FormatDescriptor> {
    let mut formats = Vec::new();
    for precision in [Precision::Single, Precision::Double] {
        for marker in [MarkerWidth::Four, MarkerWidth::Eight] {
            for order in [Endianness::Little, Endianness::Big] {
                formats.push(FormatDescriptor::resolve(precision, marker, order));
            }
        }
    }
    formats
}

/// Serializes records as `[marker][payload][marker]`.
pub struct Encoder {
    format: FormatDescriptor,
    buf: Vec<u8>,
}

impl Encoder {
    pub fn new(format: FormatDescriptor) -> Self {
        Self { format, buf: Vec::new() }
    }

    pub fn ints(&self, values: &[i32]) -> Vec<u8> {
        let mut out = Vec::new();
        for &v in values {
            match self.format.byte_order() {
                Endianness::Little => out.write_i32::<LittleEndian>(v).unwrap(),
                Endianness::Big => out.write_i32::<BigEndian>(v).unwrap(),
            }
        }
        out
    }

    pub fn reals(&self, values: &[f64]) -> Vec<u8> {
        let mut out = Vec::new();
        for &v in values {
            match (self.format.precision(), self.format.byte_order()) {
                (Precision::Single, Endianness::Little) => out.write_f32::<LittleEndian>(v as f32).unwrap(),
                (Precision::Single, Endianness::Big) => out.write_f32::<BigEndian>(v as f32).unwrap(),
                (Precision::Double, Endianness::Little) => out.write_f64::<LittleEndian>(v).unwrap(),
                (Precision::Double, Endianness::Big) => out.write_f64::<BigEndian>(v).unwrap(),
            }
        }
        out
    }

    fn marker(&mut self, value: i64) {
        match (self.format.marker(), self.format.byte_order()) {
            (MarkerWidth::Four, Endianness::Little) => self.buf.write_i32::<LittleEndian>(value as i32).unwrap(),
            (MarkerWidth::Four, Endianness::Big) => self.buf.write_i32::<BigEndian>(value as i32).unwrap(),
            (MarkerWidth::Eight, Endianness::Little) => self.buf.write_i64::<LittleEndian>(value).unwrap(),
            (MarkerWidth::Eight, Endianness::Big) => self.buf.write_i64::<BigEndian>(value).unwrap(),
        }
    }

    pub fn record(&mut self, payload: &[u8]) -> &mut Self {
        self.marker(payload.len() as i64);
        self.buf.extend_from_slice(payload);
        self.marker(payload.len() as i64);
        self
    }

    pub fn finish(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buf)
    }
}

/// Coordinates stored j-fastest: `values[j + jmax*(k + kmax*(l + lmax*c))]`.
pub fn grid_bytes(format: FormatDescriptor, dims: [i32; 3], values: &[f64]) -> Vec<u8> {
    let mut enc = Encoder::new(format);
    let dims_payload = enc.ints(&dims);
    let data_payload = enc.reals(values);
    enc.record(&dims_payload).record(&data_payload).finish()
}

pub fn flow_bytes(
    format: FormatDescriptor,
    dims: [i32; 3],
    params: (f64, f64, f64, i32),
    values: &[f64],
) -> Vec<u8> {
    let mut enc = Encoder::new(format);
    let dims_payload = enc.ints(&dims);
    let mut params_payload = enc.reals(&[params.0, params.1, params.2]);
    params_payload.extend(enc.ints(&[params.3]));
    let data_payload = enc.reals(values);
    enc.record(&dims_payload)
        .record(&params_payload)
        .record(&data_payload)
        .finish()
}

/// Values exactly representable in single precision.
pub fn sample_values(count: usize) -> Vec<f64> {
    (0..count).map(|i| i as f64 * 0.25 - 3.0).collect()
}

pub fn write_temp(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(bytes).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}
