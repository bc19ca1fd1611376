//! Display constants shared by the formatters.

// ============================================================================
// Truncation
// ============================================================================

/// Characters kept at the start of a truncated transaction hash.
pub const HASH_HEAD_LEN: usize = 4;

/// Characters kept at the end of a truncated transaction hash.
pub const HASH_TAIL_LEN: usize = 4;

/// Characters kept at the start of a truncated address.
pub const ADDRESS_HEAD_LEN: usize = 6;

/// Characters kept at the end of a truncated address.
pub const ADDRESS_TAIL_LEN: usize = 6;

/// Joins the head and tail of a truncated string.
pub const ELLIPSIS: char = '…';

// ============================================================================
// Placeholders
// ============================================================================

/// Shown for a value that does not exist yet (no receiving hash, no end time).
pub const MISSING_VALUE: &str = "--";

// ============================================================================
// Timestamp Patterns
// ============================================================================

/// `chrono` pattern for a combined date and time.
pub const DATE_TIME_FORMAT: &str = "%a, %d %b %Y %H:%M:%S";

/// `chrono` pattern for time of day only.
pub const TIME_ONLY_FORMAT: &str = "%H:%M:%S";
