//! Core AS/2 index reader module.

pub mod dates;
pub mod error;
pub mod models;

mod archive;
mod header;
mod hierarchy;
mod password;
mod records;
mod utils;

use std::path::Path;

use log::info;

pub use error::{As2Error, Result};
use models::As2Index;

impl As2Index {
    /// Read and decode the index of an AS/2 package archive.
    ///
    /// Opens the ZIP container at `path`, extracts the entry named
    /// `index.sav` into memory, reads the archive comment, and decodes the
    /// whole index.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The archive cannot be opened or is not a valid ZIP file
    /// - The `index.sav` entry is missing
    /// - The entry's bytes do not form a well-formed index
    pub fn from_archive(path: impl AsRef<Path>) -> Result<Self> {
        let (buffer, comment) = archive::read_index_entry(path)?;
        Self::decode(&buffer, &comment)
    }

    /// Decode an index from its raw bytes and the container comment.
    ///
    /// `buffer` is the decompressed contents of the `index.sav` entry;
    /// `comment` is the container's comment field, whose text after the last
    /// `;` becomes the friendly archive name (the whole comment when no `;`
    /// is present).
    ///
    /// Either a fully populated index is returned or the first decode error
    /// is; no partial result is ever observable.
    pub fn decode(buffer: &[u8], comment: &str) -> Result<Self> {
        let mut header = header::parse(buffer)?;
        let mut records = records::parse_list(buffer, header.first_item_index)?;

        hierarchy::assign_tree_levels(&mut records);

        header.abk_friendly_name = comment
            .rsplit_once(';')
            .map(|(_, tail)| tail)
            .unwrap_or(comment)
            .to_owned();

        info!(
            "Index decoded: package {:?}, {} records",
            header.folder_title,
            records.len()
        );
        Ok(As2Index { header, records })
    }
}
