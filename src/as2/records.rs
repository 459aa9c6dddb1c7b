//! Record list parsing (pointer-chased 632-byte segments).

use std::collections::HashSet;
use std::io::{Cursor, Seek, SeekFrom};

use chrono::NaiveDateTime;
use log::{debug, info, trace};

use super::error::{As2Error, Result};
use super::models::{As2IndexRecord, HEADER_LENGTH, SEGMENT_LENGTH};
use super::{dates, utils};

/// Walk the record linked list starting at `first_item_index`.
///
/// Records live in fixed 632-byte segments addressed by a 1-based index:
/// segment `k` begins at `648 + (k - 1) * 632`. Each record names its
/// successor in `next_item_index`; an index of 0 (or any non-positive value)
/// terminates the chain. The resulting order is the traversal order, not
/// segment order.
///
/// A well-formed file never revisits a segment, but a corrupted pointer can
/// form a cycle; traversal tracks visited indices and fails with
/// [`As2Error::CyclicList`] instead of looping forever.
pub fn parse_list(buffer: &[u8], first_item_index: i32) -> Result<Vec<As2IndexRecord>> {
    info!("Walking record list from first item index {}", first_item_index);

    let mut records = Vec::new();
    let mut visited = HashSet::new();
    let mut cursor = Cursor::new(buffer);
    let mut next_index = first_item_index;

    while next_index > 0 {
        if !visited.insert(next_index) {
            return Err(As2Error::CyclicList { index: next_index });
        }

        let start = HEADER_LENGTH + (next_index as u64 - 1) * SEGMENT_LENGTH;
        if start + SEGMENT_LENGTH > buffer.len() as u64 {
            return Err(As2Error::BufferTooShort {
                offset: start,
                needed: SEGMENT_LENGTH,
                available: buffer.len() as u64,
            });
        }
        trace!("Record {} at offset {}", next_index, start);

        cursor.seek(SeekFrom::Start(start))?;
        let record = parse_segment(&mut cursor, next_index)?;
        next_index = record.next_item_index;
        records.push(record);
    }

    debug!("Record list walked: {} records", records.len());
    Ok(records)
}

/// Decode one record segment at the cursor's current position.
///
/// The record's own index is not stored in the segment; it is the pointer
/// value that was followed to get here.
fn parse_segment(cursor: &mut Cursor<&[u8]>, index: i32) -> Result<As2IndexRecord> {
    let title = utils::read_utf16_string(cursor, 164)?;
    let segment = utils::read_i32(cursor)?;
    let parent = utils::read_i32(cursor)?;
    let next_item_index = utils::read_i32(cursor)?;
    let uid = utils::read_utf16_string(cursor, 76)?;
    let item_type = utils::read_i32(cursor)?;
    let document_type = utils::read_utf16_string(cursor, 18)?;
    let reference = utils::read_utf16_string(cursor, 22)?;
    let is_master = utils::read_i32(cursor)?;

    let mut prepared_initials: [String; 4] = Default::default();
    for slot in prepared_initials.iter_mut() {
        *slot = utils::read_utf16_string(cursor, 22)?;
    }

    let mut review_initials: [String; 4] = Default::default();
    for slot in review_initials.iter_mut() {
        *slot = utils::read_utf16_string(cursor, 22)?;
    }

    let mut offset = [0u8; 4];
    for byte in offset.iter_mut() {
        *byte = utils::read_u8(cursor)?;
    }

    let mut prepared_dates: [NaiveDateTime; 4] = Default::default();
    for slot in prepared_dates.iter_mut() {
        *slot = dates::from_oa_date(utils::read_f64(cursor)?)?;
    }

    let mut reviewed_dates: [NaiveDateTime; 4] = Default::default();
    for slot in reviewed_dates.iter_mut() {
        *slot = dates::from_oa_date(utils::read_f64(cursor)?)?;
    }

    let is_attention_manual = utils::read_i32(cursor)?;
    let is_attention_auto = utils::read_i32(cursor)?;
    let number_of_open_notes = utils::read_i32(cursor)?;
    let number_of_closed_notes = utils::read_i32(cursor)?;
    let is_recently_filed = utils::read_i32(cursor)?;
    let default_reference = utils::read_utf16_string(cursor, 22)?;

    Ok(As2IndexRecord {
        title,
        index,
        tree_level: 0,
        segment,
        parent,
        next_item_index,
        uid,
        item_type,
        document_type,
        reference,
        is_master,
        prepared_initials,
        review_initials,
        offset,
        prepared_dates,
        reviewed_dates,
        is_attention_manual,
        is_attention_auto,
        number_of_open_notes,
        number_of_closed_notes,
        is_recently_filed,
        default_reference,
    })
}
