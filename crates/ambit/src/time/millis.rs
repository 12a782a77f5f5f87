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

use chrono::{DateTime, NaiveDateTime, TimeZone};

/// Capability of a bound type to place itself on the epoch-millisecond axis.
///
/// Implementing `EpochMillis` for a type `T` unlocks the temporal API on
/// [`Range<T>`](crate::range::bounds::Range): duration measurement, the
/// formatted duration string, and `Display`. The reported value is the
/// number of milliseconds since `1970-01-01T00:00:00Z`, negative for
/// instants before the epoch.
///
/// # Examples
///
/// ```rust
/// # use ambit::time::millis::{EpochMillis, Seconds};
/// # use chrono::{TimeZone, Utc};
///
/// let dt = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 1).unwrap();
/// assert_eq!(dt.epoch_millis(), 1_000);
/// assert_eq!(Seconds::new(1).epoch_millis(), 1_000);
/// ```
pub trait EpochMillis {
    /// Returns this instant as milliseconds since the Unix epoch.
    fn epoch_millis(&self) -> i64;
}

impl<Tz> EpochMillis for DateTime<Tz>
where
    Tz: TimeZone,
{
    #[inline]
    fn epoch_millis(&self) -> i64 {
        self.timestamp_millis()
    }
}

impl EpochMillis for NaiveDateTime {
    /// Reads the naive timestamp as a UTC instant.
    #[inline]
    fn epoch_millis(&self) -> i64 {
        self.and_utc().timestamp_millis()
    }
}

/// An instant on a second-resolution timeline.
///
/// `Seconds` wraps a raw count of seconds since the Unix epoch. Keeping a
/// dedicated newtype instead of a bare `i64` stops second-resolution bounds
/// from being mixed up with millisecond bounds or plain numeric ranges at
/// the type level.
///
/// # Examples
///
/// ```rust
/// # use ambit::time::millis::{EpochMillis, Seconds};
///
/// let s = Seconds::new(90);
/// assert_eq!(s.value(), 90);
/// assert_eq!(s.epoch_millis(), 90_000);
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Seconds(i64);

impl Seconds {
    /// Creates a new `Seconds` from a raw second count.
    #[inline]
    pub const fn new(seconds: i64) -> Self {
        Seconds(seconds)
    }

    /// Returns the raw second count.
    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl EpochMillis for Seconds {
    /// Scales the second count by `1000`, wrapping on overflow.
    #[inline]
    fn epoch_millis(&self) -> i64 {
        self.0.wrapping_mul(1000)
    }
}

impl From<i64> for Seconds {
    #[inline]
    fn from(seconds: i64) -> Self {
        Seconds::new(seconds)
    }
}

impl From<Seconds> for i64 {
    #[inline]
    fn from(seconds: Seconds) -> Self {
        seconds.value()
    }
}

impl std::fmt::Display for Seconds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seconds({})", self.0)
    }
}
