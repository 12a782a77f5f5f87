// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use std::sync::LazyLock;

use chrono::DateTime;
use chrono::format::{Item, StrftimeItems};

/// Calendar pattern used when rendering epoch milliseconds as a timestamp.
///
/// Year is four digits, month and day are unpadded, the time of day is
/// zero-padded `HH:MM:SS`. `1286697600000` renders as
/// `"2010-10-10 08:00:00"` and `1262678400000` as `"2010-1-5 08:00:00"`.
pub const DATETIME_PATTERN: &str = "%Y-%-m-%-d %H:%M:%S";

// Parsed once; the item vector is immutable afterwards and shared by all
// formatting threads.
static DATETIME_ITEMS: LazyLock<Vec<Item<'static>>> =
    LazyLock::new(|| StrftimeItems::new(DATETIME_PATTERN).collect());

/// Renders a millisecond duration as a compact `"1h 2m 3s"` style string.
///
/// The duration is truncated to whole seconds and split into hour, minute
/// and second components. Components equal to zero are omitted, except that
/// the seconds component is always printed when it is the only one, so the
/// result is never empty. Negative durations render like their absolute
/// value. Components are separated by single spaces with no trailing
/// whitespace.
///
/// The hour component wraps at `60`, so durations of sixty hours and more
/// fold back into the `0..60` hour band.
///
/// # Examples
///
/// ```rust
/// # use ambit::time::format::format_duration_millis;
///
/// assert_eq!(format_duration_millis(0), "0s");
/// assert_eq!(format_duration_millis(61_000), "1m 1s");
/// assert_eq!(format_duration_millis(3_661_000), "1h 1m 1s");
/// assert_eq!(format_duration_millis(-1_500), "1s");
/// ```
pub fn format_duration_millis(duration_millis: i64) -> String {
    if duration_millis == 0 {
        return String::from("0s");
    }

    let total_seconds = duration_millis / 1000;
    let seconds = total_seconds % 60;
    let minutes = (total_seconds / 60) % 60;
    let hours = (total_seconds / 3600) % 60;

    let mut out = String::with_capacity(12);
    if hours != 0 {
        out.push_str(&format!("{}h", hours.abs()));
    }
    if minutes != 0 {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&format!("{}m", minutes.abs()));
    }
    if seconds != 0 || (minutes == 0 && hours == 0) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&format!("{}s", seconds.abs()));
    }
    out
}

/// Renders epoch milliseconds as a UTC timestamp in [`DATETIME_PATTERN`].
///
/// Instants outside the representable calendar range fall back to the raw
/// millisecond count suffixed with `ms`, so the function always produces a
/// string.
///
/// # Examples
///
/// ```rust
/// # use ambit::time::format::format_epoch_millis;
///
/// assert_eq!(format_epoch_millis(0), "1970-1-1 00:00:00");
/// assert_eq!(format_epoch_millis(1_286_697_600_000), "2010-10-10 08:00:00");
/// assert_eq!(format_epoch_millis(i64::MAX), "9223372036854775807ms");
/// ```
pub fn format_epoch_millis(epoch_millis: i64) -> String {
    match DateTime::from_timestamp_millis(epoch_millis) {
        Some(dt) => dt.format_with_items(DATETIME_ITEMS.iter()).to_string(),
        None => format!("{}ms", epoch_millis),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_duration() {
        assert_eq!(format_duration_millis(0), "0s");
    }

    #[test]
    fn test_subsecond_durations_truncate_to_zero() {
        assert_eq!(format_duration_millis(1), "0s");
        assert_eq!(format_duration_millis(500), "0s");
        assert_eq!(format_duration_millis(999), "0s");
        assert_eq!(format_duration_millis(-500), "0s");
    }

    #[test]
    fn test_seconds_only() {
        assert_eq!(format_duration_millis(1_000), "1s");
        assert_eq!(format_duration_millis(59_000), "59s");
        assert_eq!(format_duration_millis(59_999), "59s");
    }

    #[test]
    fn test_minutes_omit_zero_seconds() {
        assert_eq!(format_duration_millis(60_000), "1m");
        assert_eq!(format_duration_millis(120_000), "2m");
    }

    #[test]
    fn test_minutes_and_seconds() {
        assert_eq!(format_duration_millis(61_000), "1m 1s");
        assert_eq!(format_duration_millis(3_599_000), "59m 59s");
    }

    #[test]
    fn test_hours() {
        assert_eq!(format_duration_millis(3_600_000), "1h");
        assert_eq!(format_duration_millis(3_660_000), "1h 1m");
        assert_eq!(format_duration_millis(3_661_000), "1h 1m 1s");
        assert_eq!(format_duration_millis(3_601_000), "1h 1s");
    }

    #[test]
    fn test_component_composition() {
        assert_eq!(format_duration_millis(620_000), "10m 20s");
        assert_eq!(format_duration_millis(14_400_000), "4h");
        assert_eq!(format_duration_millis(15_020_000), "4h 10m 20s");
    }

    #[test]
    fn test_hours_do_not_roll_into_days() {
        assert_eq!(format_duration_millis(25 * 3_600_000), "25h");
        assert_eq!(format_duration_millis(86_399_000), "23h 59m 59s");
    }

    #[test]
    fn test_hours_wrap_at_sixty() {
        assert_eq!(format_duration_millis(60 * 3_600_000), "0s");
        assert_eq!(format_duration_millis(61 * 3_600_000), "1h");
    }

    #[test]
    fn test_negative_durations_render_like_absolute() {
        assert_eq!(format_duration_millis(-1_000), "1s");
        assert_eq!(format_duration_millis(-1_500), "1s");
        assert_eq!(format_duration_millis(-61_000), "1m 1s");
        assert_eq!(format_duration_millis(-3_661_000), "1h 1m 1s");
    }

    #[test]
    fn test_extreme_durations_do_not_panic() {
        assert!(!format_duration_millis(i64::MAX).is_empty());
        assert!(!format_duration_millis(i64::MIN).is_empty());
    }

    #[test]
    fn test_no_stray_whitespace() {
        for duration in [0, 500, 1_000, 60_000, 61_000, 3_600_000, 3_661_000] {
            let s = format_duration_millis(duration);
            assert_eq!(s, s.trim());
            assert!(!s.contains("  "), "double space in {:?}", s);
        }
    }

    #[test]
    fn test_epoch_rendering() {
        assert_eq!(format_epoch_millis(0), "1970-1-1 00:00:00");
        assert_eq!(format_epoch_millis(1_286_697_600_000), "2010-10-10 08:00:00");
    }

    #[test]
    fn test_epoch_rendering_unpadded_month_and_day() {
        assert_eq!(format_epoch_millis(1_262_678_400_000), "2010-1-5 08:00:00");
    }

    #[test]
    fn test_epoch_rendering_before_epoch() {
        assert_eq!(format_epoch_millis(-1_000), "1969-12-31 23:59:59");
    }

    #[test]
    fn test_epoch_rendering_truncates_subseconds() {
        assert_eq!(format_epoch_millis(1_286_697_600_123), "2010-10-10 08:00:00");
    }

    #[test]
    fn test_out_of_range_epoch_falls_back_to_raw_millis() {
        assert_eq!(format_epoch_millis(i64::MAX), "9223372036854775807ms");
        assert_eq!(format_epoch_millis(i64::MIN), "-9223372036854775808ms");
    }
}
