//! Package header parsing (the fixed 648-byte region).

use std::io::Cursor;

use log::{debug, info};

use super::error::{As2Error, Result};
use super::models::{As2IndexHeader, HEADER_LENGTH, PASSWORD_SLOTS};
use super::{dates, password, utils};

/// Parse the package header from the start of the index buffer.
///
/// Header layout (sequential, all integers little-endian, all strings
/// fixed-width UTF-16LE):
/// - 12 bytes: Version
/// - 4 bytes:  Revision
/// - 164 bytes: Folder title
/// - 4 bytes:  First item index (1-based; 0 = empty index)
/// - 3 x 8 bytes: Last backup / last edit / period end dates (OLE doubles)
/// - 162 bytes: Long pack name
/// - 162 bytes: Pack directory
/// - 12 bytes: Pack version
/// - 10 x 2 bytes: Password keys
/// - 10 x 4 bytes: Password slots (low 16 bits significant)
///
/// The friendly archive name is not part of this region; the caller fills it
/// in from the container comment.
pub fn parse(buffer: &[u8]) -> Result<As2IndexHeader> {
    info!("Parsing index header ({} byte region)", HEADER_LENGTH);

    if (buffer.len() as u64) < HEADER_LENGTH {
        return Err(As2Error::BufferTooShort {
            offset: 0,
            needed: HEADER_LENGTH,
            available: buffer.len() as u64,
        });
    }

    let mut cursor = Cursor::new(buffer);

    let version = utils::read_utf16_string(&mut cursor, 12)?;
    let revision = utils::read_i32(&mut cursor)?;
    let folder_title = utils::read_utf16_string(&mut cursor, 164)?;
    let first_item_index = utils::read_i32(&mut cursor)?;
    let last_backup_date = dates::from_oa_date(utils::read_f64(&mut cursor)?)?;
    let last_edit_date = dates::from_oa_date(utils::read_f64(&mut cursor)?)?;
    let period_end_date = dates::from_oa_date(utils::read_f64(&mut cursor)?)?;
    let long_pack_name = utils::read_utf16_string(&mut cursor, 162)?;
    let pack_dir = utils::read_utf16_string(&mut cursor, 162)?;
    let pack_version = utils::read_utf16_string(&mut cursor, 12)?;

    let mut password_key = [0i16; PASSWORD_SLOTS];
    for slot in password_key.iter_mut() {
        *slot = utils::read_i16(&mut cursor)?;
    }

    // Each password slot occupies 4 bytes on disk but only the low 16 bits
    // are significant; the read narrows to i16 accordingly.
    let mut password = [0i16; PASSWORD_SLOTS];
    for slot in password.iter_mut() {
        *slot = utils::read_i32(&mut cursor)? as i16;
    }

    let decrypted_password = password::decrypt(&password, &password_key)?;

    debug!(
        "Header parsed: version={}, revision={}, title={}, first_item={}",
        version, revision, folder_title, first_item_index
    );

    Ok(As2IndexHeader {
        version,
        revision,
        folder_title,
        first_item_index,
        last_backup_date,
        last_edit_date,
        period_end_date,
        long_pack_name,
        pack_dir,
        pack_version,
        password_key,
        password,
        decrypted_password,
        abk_friendly_name: String::new(),
    })
}
