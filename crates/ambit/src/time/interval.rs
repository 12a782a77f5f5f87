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

use chrono::{DateTime, Utc};

use crate::range::bounds::Range;
use crate::time::format::{format_duration_millis, format_epoch_millis};
use crate::time::millis::{EpochMillis, Seconds};

/// A range read as a span of time.
///
/// Plain alias for [`Range`]; use it when the bounds are instants rather
/// than plain numbers.
pub type Interval<T> = Range<T>;

/// An interval between two calendar timestamps.
///
/// # Examples
///
/// ```rust
/// # use ambit::time::interval::CalendarInterval;
/// # use chrono::{TimeZone, Utc};
///
/// let i = CalendarInterval::new(
///     Utc.with_ymd_and_hms(2010, 10, 10, 8, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2010, 10, 10, 9, 30, 0).unwrap(),
/// );
/// assert_eq!(i.formatted_duration(), "1h 30m");
/// ```
pub type CalendarInterval<Tz = Utc> = Range<DateTime<Tz>>;

/// An interval between two second-resolution instants.
///
/// # Examples
///
/// ```rust
/// # use ambit::time::interval::SecondInterval;
///
/// let i = SecondInterval::from_secs(0, 90);
/// assert_eq!(i.duration_millis(), 90_000);
/// assert_eq!(i.formatted_duration(), "1m 30s");
/// ```
pub type SecondInterval = Range<Seconds>;

impl Range<Seconds> {
    /// Creates a closed interval directly from raw epoch second counts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ambit::time::interval::SecondInterval;
    ///
    /// let i = SecondInterval::from_secs(100, 160);
    /// assert_eq!(i.lower_bound().value(), 100);
    /// assert_eq!(i.formatted_duration(), "1m");
    /// ```
    #[inline]
    pub const fn from_secs(lower: i64, higher: i64) -> Self {
        Range::new(Seconds::new(lower), Seconds::new(higher))
    }
}

impl<T> Range<T>
where
    T: EpochMillis,
{
    /// Returns the lower bound as milliseconds since the Unix epoch.
    #[inline]
    pub fn lower_bound_millis(&self) -> i64 {
        self.lower_bound().epoch_millis()
    }

    /// Returns the higher bound as milliseconds since the Unix epoch.
    #[inline]
    pub fn higher_bound_millis(&self) -> i64 {
        self.higher_bound().epoch_millis()
    }

    /// Returns the duration of the interval in milliseconds.
    ///
    /// The duration is the wrapping difference of the bounds on the
    /// millisecond axis. Inclusivity flags do not participate; a reversed
    /// interval yields a negative duration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ambit::time::interval::SecondInterval;
    ///
    /// assert_eq!(SecondInterval::from_secs(10, 70).duration_millis(), 60_000);
    /// assert_eq!(SecondInterval::from_secs(70, 10).duration_millis(), -60_000);
    /// ```
    #[inline]
    pub fn duration_millis(&self) -> i64 {
        self.higher_bound_millis()
            .wrapping_sub(self.lower_bound_millis())
    }

    /// Returns the duration rendered by
    /// [`format_duration_millis`](crate::time::format::format_duration_millis).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ambit::time::interval::SecondInterval;
    ///
    /// assert_eq!(SecondInterval::from_secs(0, 3_661).formatted_duration(), "1h 1m 1s");
    /// assert_eq!(SecondInterval::from_secs(0, 0).formatted_duration(), "0s");
    /// ```
    #[inline]
    pub fn formatted_duration(&self) -> String {
        format_duration_millis(self.duration_millis())
    }

    /// Renders both bounds with a caller-supplied formatter, joined by
    /// `" - "`.
    ///
    /// The formatter receives each bound as epoch milliseconds. The
    /// `Display` implementation is this method specialized to
    /// [`format_epoch_millis`](crate::time::format::format_epoch_millis).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ambit::time::interval::SecondInterval;
    ///
    /// let i = SecondInterval::from_secs(1, 2);
    /// assert_eq!(i.format_bounds_with(|ms| format!("{}ms", ms)), "1000ms - 2000ms");
    /// ```
    pub fn format_bounds_with<F>(&self, mut render: F) -> String
    where
        F: FnMut(i64) -> String,
    {
        format!(
            "{} - {}",
            render(self.lower_bound_millis()),
            render(self.higher_bound_millis())
        )
    }
}

impl<T> std::fmt::Display for Range<T>
where
    T: EpochMillis,
{
    /// Renders the interval as `"{lower} - {higher}"` with both bounds as
    /// UTC timestamps in
    /// [`DATETIME_PATTERN`](crate::time::format::DATETIME_PATTERN).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ambit::time::interval::SecondInterval;
    ///
    /// let i = SecondInterval::from_secs(1_286_697_600, 1_286_701_200);
    /// assert_eq!(i.to_string(), "2010-10-10 08:00:00 - 2010-10-10 09:00:00");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}",
            format_epoch_millis(self.lower_bound_millis()),
            format_epoch_millis(self.higher_bound_millis())
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};

    use super::*;

    /// Bound type with direct control over the millisecond axis.
    struct RawMillis(i64);

    impl EpochMillis for RawMillis {
        fn epoch_millis(&self) -> i64 {
            self.0
        }
    }

    #[test]
    fn test_bound_millis_accessors() {
        let i = SecondInterval::from_secs(3, 8);
        assert_eq!(i.lower_bound_millis(), 3_000);
        assert_eq!(i.higher_bound_millis(), 8_000);
    }

    #[test]
    fn test_duration_calendar() {
        let i = CalendarInterval::new(
            Utc.with_ymd_and_hms(2010, 10, 10, 8, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2010, 10, 10, 8, 0, 30).unwrap(),
        );
        assert_eq!(i.duration_millis(), 30_000);
    }

    #[test]
    fn test_duration_naive_calendar() {
        let i = Range::new(
            Utc.with_ymd_and_hms(2010, 10, 10, 8, 0, 0).unwrap().naive_utc(),
            Utc.with_ymd_and_hms(2010, 10, 10, 9, 0, 0).unwrap().naive_utc(),
        );
        assert_eq!(i.duration_millis(), 3_600_000);
        assert_eq!(
            i.to_string(),
            "2010-10-10 08:00:00 - 2010-10-10 09:00:00"
        );
    }

    #[test]
    fn test_duration_reversed_is_negative() {
        let i = SecondInterval::from_secs(100, 40);
        assert_eq!(i.duration_millis(), -60_000);
    }

    #[test]
    fn test_duration_wraps_on_overflow() {
        let i = Range::new(RawMillis(-2), RawMillis(i64::MAX));
        assert_eq!(i.duration_millis(), i64::MIN + 1);
    }

    #[test]
    fn test_duration_ignores_inclusivity() {
        let closed = Range::with_inclusivity(Seconds::new(0), Seconds::new(60), true, true);
        let open = Range::with_inclusivity(Seconds::new(0), Seconds::new(60), false, false);
        assert_eq!(closed.duration_millis(), open.duration_millis());
    }

    #[test]
    fn test_formatted_duration() {
        assert_eq!(SecondInterval::from_secs(0, 0).formatted_duration(), "0s");
        assert_eq!(SecondInterval::from_secs(0, 59).formatted_duration(), "59s");
        assert_eq!(SecondInterval::from_secs(0, 3_600).formatted_duration(), "1h");
        assert_eq!(
            SecondInterval::from_secs(0, 3_661).formatted_duration(),
            "1h 1m 1s"
        );
    }

    #[test]
    fn test_formatted_duration_reversed() {
        assert_eq!(
            SecondInterval::from_secs(3_661, 0).formatted_duration(),
            "1h 1m 1s"
        );
    }

    #[test]
    fn test_formatted_duration_subsecond_calendar() {
        let i = CalendarInterval::new(
            DateTime::from_timestamp_millis(1_000).unwrap(),
            DateTime::from_timestamp_millis(1_500).unwrap(),
        );
        assert_eq!(i.formatted_duration(), "0s");
    }

    #[test]
    fn test_display_calendar() {
        let i = CalendarInterval::new(
            Utc.with_ymd_and_hms(2010, 10, 10, 8, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2010, 10, 10, 10, 30, 0).unwrap(),
        );
        assert_eq!(
            i.to_string(),
            "2010-10-10 08:00:00 - 2010-10-10 10:30:00"
        );
    }

    #[test]
    fn test_display_one_second_apart() {
        let i = CalendarInterval::new(
            Utc.with_ymd_and_hms(2010, 10, 10, 8, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2010, 10, 10, 8, 0, 1).unwrap(),
        );
        assert_eq!(
            i.to_string(),
            "2010-10-10 08:00:00 - 2010-10-10 08:00:01"
        );
    }

    #[test]
    fn test_display_unpadded_month_and_day() {
        let i = CalendarInterval::new(
            Utc.with_ymd_and_hms(2010, 1, 5, 8, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2010, 1, 5, 9, 0, 0).unwrap(),
        );
        assert_eq!(i.to_string(), "2010-1-5 08:00:00 - 2010-1-5 09:00:00");
    }

    #[test]
    fn test_display_renders_utc_instant() {
        // +01:00 wall time 09:00 is the 08:00 UTC instant.
        let tz = FixedOffset::east_opt(3_600).unwrap();
        let i = CalendarInterval::new(
            tz.with_ymd_and_hms(2010, 10, 10, 9, 0, 0).unwrap(),
            tz.with_ymd_and_hms(2010, 10, 10, 10, 0, 0).unwrap(),
        );
        assert_eq!(
            i.to_string(),
            "2010-10-10 08:00:00 - 2010-10-10 09:00:00"
        );
    }

    #[test]
    fn test_display_out_of_range_bound_falls_back() {
        let i = Range::new(RawMillis(0), RawMillis(i64::MAX));
        assert_eq!(
            i.to_string(),
            "1970-1-1 00:00:00 - 9223372036854775807ms"
        );
    }

    #[test]
    fn test_display_reversed_interval() {
        let i = SecondInterval::from_secs(1_286_701_200, 1_286_697_600);
        assert_eq!(
            i.to_string(),
            "2010-10-10 09:00:00 - 2010-10-10 08:00:00"
        );
    }

    #[test]
    fn test_format_bounds_with_custom_renderer() {
        let i = SecondInterval::from_secs(1, 2);
        assert_eq!(i.format_bounds_with(|ms| ms.to_string()), "1000 - 2000");
    }

    #[test]
    fn test_from_secs_is_closed() {
        let i = SecondInterval::from_secs(5, 6);
        assert!(i.lower_inclusive());
        assert!(i.higher_inclusive());
    }

    #[test]
    fn test_interval_alias_is_range() {
        let i: Interval<Seconds> = Range::new(Seconds::new(0), Seconds::new(1));
        assert_eq!(i.duration_millis(), 1_000);
    }
}
