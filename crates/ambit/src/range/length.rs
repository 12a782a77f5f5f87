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

use bigdecimal::BigDecimal;

use crate::range::bounds::Range;

/// Capability of a bound type to measure the distance between two bounds.
///
/// Implementing `RangeLength` for a type `T` unlocks
/// [`Range::length`](crate::range::bounds::Range::length) on `Range<T>`.
/// The distance is `higher - lower` in the type's own arithmetic; it is
/// negative when the bounds are reversed.
pub trait RangeLength {
    /// Returns `higher - lower`.
    ///
    /// Integer implementations wrap on overflow, so the result for bound
    /// pairs further apart than the type can represent is the two's
    /// complement difference rather than a panic.
    fn length_between(lower: &Self, higher: &Self) -> Self;
}

macro_rules! impl_range_length_wrapping {
    ($($t:ty),* $(,)?) => {
        $(
            impl RangeLength for $t {
                #[inline(always)]
                fn length_between(lower: &Self, higher: &Self) -> Self {
                    higher.wrapping_sub(*lower)
                }
            }
        )*
    };
}

macro_rules! impl_range_length_sub {
    ($($t:ty),* $(,)?) => {
        $(
            impl RangeLength for $t {
                #[inline(always)]
                fn length_between(lower: &Self, higher: &Self) -> Self {
                    higher - lower
                }
            }
        )*
    };
}

impl_range_length_wrapping!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_range_length_sub!(f32, f64);

impl RangeLength for BigDecimal {
    /// Exact arbitrary-precision difference; never wraps or rounds.
    #[inline]
    fn length_between(lower: &Self, higher: &Self) -> Self {
        higher - lower
    }
}

impl<T> Range<T>
where
    T: RangeLength,
{
    /// Returns the length of the range, `higher_bound - lower_bound`.
    ///
    /// The inclusivity flags do not participate in the measurement; the
    /// closed bracket `[0, 10]` and the open bracket `(0, 10)` both have
    /// length `10`. A reversed range yields a negative length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ambit::range::bounds::Range;
    ///
    /// let r = Range::new(5_i64, 15);
    /// assert_eq!(r.length(), 10);
    ///
    /// let reversed = Range::new(15_i64, 5);
    /// assert_eq!(reversed.length(), -10);
    /// ```
    #[inline]
    pub fn length(&self) -> T {
        T::length_between(self.lower_bound(), self.higher_bound())
    }
}

/// A range over `i64` bounds.
///
/// # Examples
///
/// ```rust
/// # use ambit::range::length::LongRange;
///
/// let r = LongRange::new(100, 250);
/// assert_eq!(r.length(), 150);
/// ```
pub type LongRange = Range<i64>;

/// A range over arbitrary-precision decimal bounds.
///
/// Lengths are exact and keep the scale of the operands.
///
/// # Examples
///
/// ```rust
/// # use ambit::range::length::BigDecimalRange;
/// # use bigdecimal::BigDecimal;
/// # use std::str::FromStr;
///
/// let r = BigDecimalRange::new(
///     BigDecimal::from_str("1.00").unwrap(),
///     BigDecimal::from_str("2.00").unwrap(),
/// );
/// assert_eq!(r.length(), BigDecimal::from_str("1.00").unwrap());
/// ```
pub type BigDecimalRange = Range<BigDecimal>;
