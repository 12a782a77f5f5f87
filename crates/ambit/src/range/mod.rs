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

//! # Range Primitives
//!
//! The generic bound-pair container and its numeric length measurement.
//!
//! ## Submodules
//!
//! - `bounds`: The immutable [`Range<T>`](bounds::Range) value object:
//!   two ordered bounds plus inclusive/exclusive flags (defaults:
//!   inclusive on both ends), read accessors, and conversions from the
//!   standard library's `Range`/`RangeInclusive` along with a
//!   `RangeBounds` view. Construction performs no ordering validation.
//! - `length`: The [`RangeLength`](length::RangeLength) capability and
//!   [`Range::length`](bounds::Range::length), measuring
//!   `higher - lower` in the bound type's own arithmetic. Implemented for
//!   every primitive integer width (wrapping subtraction) and for
//!   [`bigdecimal::BigDecimal`] (exact subtraction, standard scale rules).
//!
//! ## Motivation
//!
//! Callers construct ranges from data they already trust, so the container
//! stays validation-free and every measurement stays total: reversed
//! bounds produce negative (or wrapped) lengths instead of errors. The
//! length capability is a trait rather than a blanket `Sub` bound so each
//! bound family can pin down its own overflow behavior.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod bounds;
pub mod length;
