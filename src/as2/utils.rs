//! Low-level byte reading utilities over the in-memory index buffer.

use std::io::{Cursor, Read};

use byteorder::{LittleEndian, ReadBytesExt};
use encoding_rs::UTF_16LE;

use super::error::{As2Error, Result};

fn too_short(cursor: &Cursor<&[u8]>, needed: u64) -> As2Error {
    As2Error::BufferTooShort {
        offset: cursor.position(),
        needed,
        available: cursor.get_ref().len() as u64,
    }
}

/// Read a fixed-width UTF-16LE string field and right-trim its NUL padding.
///
/// Every text field in the format is stored this way: a fixed byte width,
/// UTF-16LE code units, padded with trailing NUL characters.
pub fn read_utf16_string(cursor: &mut Cursor<&[u8]>, width: u64) -> Result<String> {
    let mut raw = vec![0u8; width as usize];
    cursor
        .read_exact(&mut raw)
        .map_err(|_| too_short(cursor, width))?;
    let (text, _, _) = UTF_16LE.decode(&raw);
    Ok(text.trim_end_matches('\0').to_owned())
}

/// Read a little-endian signed 32-bit integer.
pub fn read_i32(cursor: &mut Cursor<&[u8]>) -> Result<i32> {
    cursor
        .read_i32::<LittleEndian>()
        .map_err(|_| too_short(cursor, 4))
}

/// Read a little-endian signed 16-bit integer.
pub fn read_i16(cursor: &mut Cursor<&[u8]>) -> Result<i16> {
    cursor
        .read_i16::<LittleEndian>()
        .map_err(|_| too_short(cursor, 2))
}

/// Read a single raw byte.
pub fn read_u8(cursor: &mut Cursor<&[u8]>) -> Result<u8> {
    cursor.read_u8().map_err(|_| too_short(cursor, 1))
}

/// Read a little-endian IEEE-754 double.
pub fn read_f64(cursor: &mut Cursor<&[u8]>) -> Result<f64> {
    cursor
        .read_f64::<LittleEndian>()
        .map_err(|_| too_short(cursor, 8))
}
