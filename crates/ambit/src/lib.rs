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

//! # Ambit
//!
//! Immutable range and interval value types: ordered pairs of bounds with
//! inclusive/exclusive boundary flags, plus the derived measurements that
//! give them meaning (numeric length, millisecond duration, and a
//! human-readable `"4h 10m 20s"` duration rendering).
//!
//! ## Modules
//!
//! - `range`: The generic [`Range<T>`](range::bounds::Range) container
//!   (bounds + inclusivity flags, no ordering validation) and the
//!   [`RangeLength`](range::length::RangeLength) capability that measures
//!   `higher - lower` in the bound type's own arithmetic: wrapping
//!   two's-complement subtraction for primitive integers and exact
//!   arbitrary-precision subtraction for `BigDecimal`.
//! - `time`: Temporal specializations. The
//!   [`EpochMillis`](time::millis::EpochMillis) capability maps a bound to
//!   milliseconds since the Unix epoch, unlocking
//!   [`duration_millis`](range::bounds::Range::duration_millis),
//!   [`formatted_duration`](range::bounds::Range::formatted_duration), and
//!   a `"{lower} - {higher}"` datetime `Display`. Concrete leaves are
//!   [`CalendarInterval`](time::interval::CalendarInterval) (chrono bounds)
//!   and [`SecondInterval`](time::interval::SecondInterval) (whole-second
//!   bounds).
//!
//! ## Purpose
//!
//! Bound pairs show up everywhere a system reasons about "everything
//! between here and there": report windows, validity periods, numeric
//! brackets. This crate keeps them as plain, immutable, freely shareable
//! value objects with total (never-failing) measurement operations, so the
//! surrounding code never has to special-case construction errors.
//!
//! Every operation is a pure function of the two stored bounds. Reversed
//! bounds (`lower > higher`) are deliberately accepted and yield
//! well-defined negative or wrapped measurements; see the individual
//! operations for the exact semantics.
//!
//! Refer to each module for detailed APIs and examples.

pub mod range;
pub mod time;
