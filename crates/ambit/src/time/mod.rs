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

//! # Temporal Ranges
//!
//! Everything needed to treat a [`Range`](crate::range::bounds::Range) as a
//! span of time: the [`EpochMillis`](millis::EpochMillis) capability that
//! maps bound types onto the epoch-millisecond axis, the shared formatting
//! helpers, and the interval API built on top of both.
//!
//! ## Submodules
//!
//! - [`millis`]: The [`EpochMillis`](millis::EpochMillis) trait and the
//!   bound types that implement it, including the [`Seconds`](millis::Seconds)
//!   newtype for second-resolution timelines.
//! - [`format`]: Duration and calendar rendering shared by every interval,
//!   most notably the `"1h 2m 3s"` style duration formatter.
//! - [`interval`]: Duration measurement, `Display`, and the
//!   [`Interval`](interval::Interval) family of type aliases.
//!
//! ## Motivation
//!
//! Measuring a time span and printing it are the same job no matter whether
//! the bounds are calendar timestamps, raw epoch seconds, or some custom
//! clock type. Routing all of them through a single millisecond axis keeps
//! the arithmetic and the formatting in one place instead of once per bound
//! type.

pub mod format;
pub mod interval;
pub mod millis;
