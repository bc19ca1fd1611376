//! Helper functions for shortening and formatting display values.
//!
//! This module contains:
//! - Head/tail truncation of hashes and addresses
//! - Epoch timestamp formatting in an explicit UTC offset

use chrono::{DateTime, FixedOffset, Utc};

use crate::constants::{DATE_TIME_FORMAT, ELLIPSIS, TIME_ONLY_FORMAT};
use crate::domain::FormatError;

// ============================================================================
// Truncation
// ============================================================================

/// Shorten `s` to its first `head` and last `tail` characters joined by "…".
///
/// Strings no longer than `head + tail` characters are returned unchanged.
/// Lengths count characters, not bytes. A zero `head` or `tail` omits that
/// side.
///
/// # Examples
///
/// ```
/// use ibc_tx_display::format::truncate;
///
/// assert_eq!(truncate("abcdefgh1234", 4, 4), "abcd…1234");
/// assert_eq!(truncate("abcd1234", 4, 4), "abcd1234");
/// ```
#[must_use]
pub fn truncate(s: &str, head: usize, tail: usize) -> String {
    let len = s.chars().count();
    if len <= head.saturating_add(tail) {
        return s.to_string();
    }

    let prefix: String = s.chars().take(head).collect();
    let suffix: String = s.chars().skip(len - tail).collect();
    format!("{prefix}{ELLIPSIS}{suffix}")
}

// ============================================================================
// Timestamps
// ============================================================================

/// Format a unix epoch value (seconds) in the given UTC offset.
///
/// With `time_only` the result is `HH:MM:SS`; otherwise it is
/// `Tue, 14 Nov 2023 22:13:20`. Millisecond sources must be divided by 1000
/// before calling.
///
/// # Errors
///
/// Returns [`FormatError::OutOfRange`] if `epoch_secs` is outside the range
/// chrono can represent.
pub fn format_timestamp(
    epoch_secs: i64,
    time_only: bool,
    offset: FixedOffset,
) -> Result<String, FormatError> {
    let datetime: DateTime<Utc> =
        DateTime::from_timestamp(epoch_secs, 0).ok_or(FormatError::OutOfRange(epoch_secs))?;
    let local = datetime.with_timezone(&offset);

    let pattern = if time_only {
        TIME_ONLY_FORMAT
    } else {
        DATE_TIME_FORMAT
    };
    Ok(local.format(pattern).to_string())
}

/// Convert an epoch in milliseconds to whole seconds, rounding toward
/// negative infinity.
#[must_use]
pub const fn millis_to_secs(epoch_millis: i64) -> i64 {
    epoch_millis.div_euclid(1000)
}

/// Build a fixed offset from minutes east of UTC.
///
/// Returns `None` for offsets of a day or more.
#[must_use]
pub fn offset_from_minutes(minutes: i32) -> Option<FixedOffset> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[rstest]
    #[case::spec_example("abcdefgh1234", 4, 4, "abcd…1234")]
    #[case::exact_fit("abcd1234", 4, 4, "abcd1234")]
    #[case::shorter("abc", 4, 4, "abc")]
    #[case::empty("", 4, 4, "")]
    #[case::no_head("abcdefgh1234", 0, 4, "…1234")]
    #[case::no_tail("abcdefgh1234", 4, 0, "abcd…")]
    #[case::neither("abcdefgh1234", 0, 0, "…")]
    #[case::address(
        "addr1vyqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqkdl5mw",
        6,
        6,
        "addr1v…kdl5mw"
    )]
    #[case::multibyte("ααββγγδδεε", 2, 2, "αα…εε")]
    fn test_truncate(
        #[case] input: &str,
        #[case] head: usize,
        #[case] tail: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(truncate(input, head, tail), expected);
    }

    #[test]
    fn test_truncate_is_idempotent() {
        let inputs = ["", "a", "abcdefgh", "abcdefgh1234", "ααββγγδδεε", "x…y…z…w"];
        for s in inputs {
            for head in 0..6 {
                for tail in 0..6 {
                    let once = truncate(s, head, tail);
                    assert_eq!(truncate(&once, head, tail), once, "s={s:?} h={head} t={tail}");
                }
            }
        }
    }

    #[test]
    fn test_truncate_huge_lengths_do_not_overflow() {
        assert_eq!(truncate("abc", usize::MAX, usize::MAX), "abc");
    }

    #[rstest]
    #[case::date_time(1_700_000_000, false, 0, "Tue, 14 Nov 2023 22:13:20")]
    #[case::time_only(1_700_003_600, true, 0, "23:13:20")]
    #[case::positive_offset(1_700_000_000, false, 8 * 60, "Wed, 15 Nov 2023 06:13:20")]
    #[case::negative_offset(0, false, -5 * 60, "Wed, 31 Dec 1969 19:00:00")]
    #[case::epoch_zero(0, true, 0, "00:00:00")]
    fn test_format_timestamp(
        #[case] epoch: i64,
        #[case] time_only: bool,
        #[case] offset_minutes: i32,
        #[case] expected: &str,
    ) {
        let offset = offset_from_minutes(offset_minutes).unwrap();
        assert_eq!(format_timestamp(epoch, time_only, offset).unwrap(), expected);
    }

    #[rstest]
    #[case::max(i64::MAX)]
    #[case::min(i64::MIN)]
    fn test_format_timestamp_out_of_range(#[case] epoch: i64) {
        assert_eq!(
            format_timestamp(epoch, false, utc()),
            Err(FormatError::OutOfRange(epoch))
        );
    }

    #[rstest]
    #[case::whole(1_700_000_000_000, 1_700_000_000)]
    #[case::fraction(1_700_000_000_999, 1_700_000_000)]
    #[case::negative(-1, -1)]
    fn test_millis_to_secs(#[case] millis: i64, #[case] secs: i64) {
        assert_eq!(millis_to_secs(millis), secs);
    }

    #[test]
    fn test_offset_from_minutes() {
        assert_eq!(offset_from_minutes(90).unwrap().local_minus_utc(), 5400);
        assert!(offset_from_minutes(24 * 60).is_none());
        assert!(offset_from_minutes(i32::MAX).is_none());
    }
}
