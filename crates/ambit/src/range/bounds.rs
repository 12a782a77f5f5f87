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

use std::ops::{Bound, RangeBounds};

/// An immutable pair of ordered bounds with inclusive/exclusive flags.
///
/// A `Range` holds a `lower_bound`, a `higher_bound`, and one inclusivity
/// flag per end. Both flags default to inclusive. The container itself is
/// measurement-agnostic: numeric length comes from the
/// [`RangeLength`](crate::range::length::RangeLength) capability and
/// millisecond duration from the
/// [`EpochMillis`](crate::time::millis::EpochMillis) capability, each
/// enabled through the bound type.
///
/// # Invariants
///
/// `lower_bound <= higher_bound` is assumed but deliberately **not**
/// enforced. Construction never fails; a reversed pair produces a `Range`
/// whose measurements are negative (or wrapped) rather than an error.
/// Callers that need the ordering are responsible for it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range<T> {
    lower_bound: T,
    higher_bound: T,
    lower_inclusive: bool,
    higher_inclusive: bool,
}

impl<T> Range<T> {
    /// Creates a new `Range` with both ends inclusive.
    ///
    /// No ordering validation is performed; `lower_bound > higher_bound`
    /// is accepted and yields negative measurements downstream.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ambit::range::bounds::Range;
    ///
    /// let r = Range::new(5, 10);
    /// assert_eq!(*r.lower_bound(), 5);
    /// assert_eq!(*r.higher_bound(), 10);
    /// assert!(r.lower_inclusive());
    /// assert!(r.higher_inclusive());
    /// ```
    #[inline]
    pub const fn new(lower_bound: T, higher_bound: T) -> Self {
        Self {
            lower_bound,
            higher_bound,
            lower_inclusive: true,
            higher_inclusive: true,
        }
    }

    /// Creates a new `Range` with explicit inclusivity flags.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ambit::range::bounds::Range;
    ///
    /// // The half-open bracket [5, 10).
    /// let r = Range::with_inclusivity(5, 10, true, false);
    /// assert!(r.lower_inclusive());
    /// assert!(!r.higher_inclusive());
    /// ```
    #[inline]
    pub const fn with_inclusivity(
        lower_bound: T,
        higher_bound: T,
        lower_inclusive: bool,
        higher_inclusive: bool,
    ) -> Self {
        Self {
            lower_bound,
            higher_bound,
            lower_inclusive,
            higher_inclusive,
        }
    }

    /// Returns the lower bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ambit::range::bounds::Range;
    ///
    /// let r = Range::new(5, 10);
    /// assert_eq!(*r.lower_bound(), 5);
    /// ```
    #[inline]
    pub const fn lower_bound(&self) -> &T {
        &self.lower_bound
    }

    /// Returns the higher bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ambit::range::bounds::Range;
    ///
    /// let r = Range::new(5, 10);
    /// assert_eq!(*r.higher_bound(), 10);
    /// ```
    #[inline]
    pub const fn higher_bound(&self) -> &T {
        &self.higher_bound
    }

    /// Returns `true` if the lower bound belongs to the range.
    #[inline]
    pub const fn lower_inclusive(&self) -> bool {
        self.lower_inclusive
    }

    /// Returns `true` if the higher bound belongs to the range.
    #[inline]
    pub const fn higher_inclusive(&self) -> bool {
        self.higher_inclusive
    }

    /// Consumes the range and returns the `(lower, higher)` bound pair.
    ///
    /// The inclusivity flags are discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ambit::range::bounds::Range;
    ///
    /// let r = Range::new(String::from("a"), String::from("z"));
    /// let (lower, higher) = r.into_bounds();
    /// assert_eq!(lower, "a");
    /// assert_eq!(higher, "z");
    /// ```
    #[inline]
    pub fn into_bounds(self) -> (T, T) {
        (self.lower_bound, self.higher_bound)
    }
}

impl<T> Default for Range<T>
where
    T: Default,
{
    /// Returns the degenerate inclusive range over `T::default()`.
    #[inline]
    fn default() -> Self {
        Self::new(T::default(), T::default())
    }
}

impl<T> std::fmt::Debug for Range<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Range")
            .field("lower_bound", &self.lower_bound)
            .field("higher_bound", &self.higher_bound)
            .field("lower_inclusive", &self.lower_inclusive)
            .field("higher_inclusive", &self.higher_inclusive)
            .finish()
    }
}

impl<T> From<std::ops::Range<T>> for Range<T> {
    /// Converts the standard half-open `start..end` into a `Range` with an
    /// inclusive lower and exclusive higher bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ambit::range::bounds::Range;
    ///
    /// let r = Range::from(0..10);
    /// assert!(r.lower_inclusive());
    /// assert!(!r.higher_inclusive());
    /// assert_eq!(*r.higher_bound(), 10);
    /// ```
    #[inline]
    fn from(range: std::ops::Range<T>) -> Self {
        Self::with_inclusivity(range.start, range.end, true, false)
    }
}

impl<T> From<std::ops::RangeInclusive<T>> for Range<T> {
    /// Converts the standard closed `start..=end` into a `Range` with both
    /// ends inclusive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ambit::range::bounds::Range;
    ///
    /// let r = Range::from(0..=10);
    /// assert!(r.lower_inclusive());
    /// assert!(r.higher_inclusive());
    /// ```
    #[inline]
    fn from(range: std::ops::RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Self::new(start, end)
    }
}

impl<T> RangeBounds<T> for Range<T> {
    fn start_bound(&self) -> Bound<&T> {
        if self.lower_inclusive {
            Bound::Included(&self.lower_bound)
        } else {
            Bound::Excluded(&self.lower_bound)
        }
    }

    fn end_bound(&self) -> Bound<&T> {
        if self.higher_inclusive {
            Bound::Included(&self.higher_bound)
        } else {
            Bound::Excluded(&self.higher_bound)
        }
    }
}
