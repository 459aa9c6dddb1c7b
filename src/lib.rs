//! # as2-reader
//!
//! A reader for AS/2 audit package index files.
//!
//! AS/2 packages are ZIP archives (`.abk`) carrying a proprietary fixed-layout
//! binary entry named `index.sav`: a 648-byte package header followed by a
//! singly-linked list of 632-byte document records forming a hierarchical
//! outline. This crate extracts the entry, decodes the header and record
//! chain, decrypts the obfuscated package password, and reconstructs the
//! outline indent levels.
pub mod as2;

// Re-export the main types for convenience
pub use as2::{
    error::{As2Error, Result},
    models::{As2Index, As2IndexHeader, As2IndexRecord},
};
