//! OLE-automation date conversion.
//!
//! AS/2 stores every timestamp as the VB6 `Date` type: a little-endian
//! IEEE-754 double counting days since 1899-12-30T00:00:00, with the
//! fractional part encoding the time of day.

use chrono::{DateTime, NaiveDateTime};

use super::error::{As2Error, Result};

const MS_PER_DAY: f64 = 86_400_000.0;

/// Days from the OLE epoch (1899-12-30) to the Unix epoch (1970-01-01).
const UNIX_EPOCH_OFFSET_DAYS: i64 = 25_569;

// Valid OLE-automation range: 0100-01-01 through 9999-12-31.
const MIN_OA_DATE: f64 = -657_435.0;
const MAX_OA_DATE: f64 = 2_958_466.0;

/// Convert an OLE-automation date double to a calendar timestamp.
///
/// For negative values the whole part counts days *before* the epoch while
/// the fraction still encodes a forward time of day, which requires the
/// millisecond mirror step below. NaN, infinities and values outside the
/// representable calendar range fail with [`As2Error::DateOutOfRange`].
pub fn from_oa_date(value: f64) -> Result<NaiveDateTime> {
    // NaN fails both comparisons and lands here as well.
    if !(value > MIN_OA_DATE && value < MAX_OA_DATE) {
        return Err(As2Error::DateOutOfRange(value));
    }

    let mut millis = (value * MS_PER_DAY + if value >= 0.0 { 0.5 } else { -0.5 }) as i64;
    if millis < 0 {
        millis -= (millis % MS_PER_DAY as i64) * 2;
    }

    let unix_millis = millis - UNIX_EPOCH_OFFSET_DAYS * MS_PER_DAY as i64;
    DateTime::from_timestamp_millis(unix_millis)
        .map(|dt| dt.naive_utc())
        .ok_or(As2Error::DateOutOfRange(value))
}
