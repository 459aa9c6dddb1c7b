//! Custom error types for the as2-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum As2Error {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// An error raised by the ZIP container while opening or reading the archive.
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The named index entry is missing from the container archive.
    #[error("Container entry not found: {0}")]
    EntryNotFound(String),

    /// A fixed-width read would run past the end of the index buffer.
    #[error("Buffer too short: {needed} bytes required at offset {offset}, buffer is {available} bytes")]
    BufferTooShort {
        offset: u64,
        needed: u64,
        available: u64,
    },

    /// A password key slot is zero while the matching password slot is not,
    /// making the deobfuscation division undefined.
    #[error("Invalid password division: key slot {slot} is zero")]
    InvalidDivision { slot: usize },

    /// A stored date value is outside the representable OLE-automation range.
    #[error("Date value {0} is outside the representable range")]
    DateOutOfRange(f64),

    /// The record linked list revisits a segment index, so the file is
    /// malformed and traversal would never terminate.
    #[error("Cyclic record list: segment index {index} visited twice")]
    CyclicList { index: i32 },
}

/// A convenience `Result` type alias using the crate's `As2Error` type.
pub type Result<T> = std::result::Result<T, As2Error>;
