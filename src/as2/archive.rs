//! Container access: extracting the index entry from the `.abk` ZIP archive.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, info};
use zip::result::ZipError;
use zip::ZipArchive;

use super::error::{As2Error, Result};
use super::models::INDEX_ENTRY_NAME;

/// Open the archive and materialize the index entry plus the archive comment.
///
/// The whole entry is decompressed into one in-memory buffer up front:
/// decoding chases record pointers to arbitrary offsets, which a forward-only
/// decompression stream cannot serve.
pub fn read_index_entry(path: impl AsRef<Path>) -> Result<(Vec<u8>, String)> {
    let path = path.as_ref();
    info!("Opening AS/2 archive: {}", path.display());

    let file = File::open(path)?;
    let mut archive = ZipArchive::new(BufReader::new(file))?;

    let comment = String::from_utf8_lossy(archive.comment()).into_owned();

    let mut entry = archive.by_name(INDEX_ENTRY_NAME).map_err(|e| match e {
        ZipError::FileNotFound => As2Error::EntryNotFound(INDEX_ENTRY_NAME.to_owned()),
        other => As2Error::Zip(other),
    })?;

    let mut buffer = Vec::with_capacity(entry.size() as usize);
    entry.read_to_end(&mut buffer)?;

    debug!(
        "Extracted {} ({} bytes), archive comment {} bytes",
        INDEX_ENTRY_NAME,
        buffer.len(),
        comment.len()
    );
    Ok((buffer, comment))
}
