//! Data structures representing the decoded AS/2 index.

use chrono::NaiveDateTime;

/// Name of the container entry holding the raw index bytes.
pub const INDEX_ENTRY_NAME: &str = "index.sav";

/// Fixed length of the package header region at the start of the buffer.
pub const HEADER_LENGTH: u64 = 648;

/// Fixed length of one record segment. Segment `k` (1-based) begins at byte
/// offset `HEADER_LENGTH + (k - 1) * SEGMENT_LENGTH`.
pub const SEGMENT_LENGTH: u64 = 632;

/// Number of password / password-key slots in the header.
pub const PASSWORD_SLOTS: usize = 10;

/// Package-level metadata decoded from the 648-byte header region.
///
/// `decrypted_password` is derived from the `password` and `password_key`
/// slots, and `abk_friendly_name` comes from the container's comment field;
/// neither is stored in the binary header itself.
#[derive(Debug, Clone)]
pub struct As2IndexHeader {
    pub version: String,
    pub revision: i32,
    pub folder_title: String,
    /// 1-based index of the first record in the chain; 0 means an empty index.
    pub first_item_index: i32,
    pub last_backup_date: NaiveDateTime,
    pub last_edit_date: NaiveDateTime,
    pub period_end_date: NaiveDateTime,
    pub long_pack_name: String,
    pub pack_dir: String,
    pub pack_version: String,
    pub password_key: [i16; PASSWORD_SLOTS],
    /// Stored on disk as 4-byte values, but only the low 16 bits carry
    /// meaning; the decoder narrows them on read.
    pub password: [i16; PASSWORD_SLOTS],
    pub decrypted_password: String,
    pub abk_friendly_name: String,
}

/// One outline entry decoded from a 632-byte record segment.
#[derive(Debug, Clone)]
pub struct As2IndexRecord {
    pub title: String,
    /// The record's own 1-based segment index. Not stored in the segment;
    /// it equals the pointer that was followed to reach this record.
    pub index: i32,
    /// Outline nesting depth, reconstructed after traversal. Not stored in
    /// the file.
    pub tree_level: i32,
    pub segment: i32,
    /// Index of the parent record; 0 for root-level entries.
    pub parent: i32,
    /// Index of the next record in list order; 0 terminates the chain.
    pub next_item_index: i32,
    pub uid: String,
    pub item_type: i32,
    pub document_type: String,
    pub reference: String,
    pub is_master: i32,
    pub prepared_initials: [String; 4],
    pub review_initials: [String; 4],
    pub offset: [u8; 4],
    pub prepared_dates: [NaiveDateTime; 4],
    pub reviewed_dates: [NaiveDateTime; 4],
    pub is_attention_manual: i32,
    pub is_attention_auto: i32,
    pub number_of_open_notes: i32,
    pub number_of_closed_notes: i32,
    pub is_recently_filed: i32,
    pub default_reference: String,
}

/// The fully decoded index: one header plus the records in linked-list
/// traversal order. Produced in one decode pass; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct As2Index {
    pub header: As2IndexHeader,
    pub records: Vec<As2IndexRecord>,
}
