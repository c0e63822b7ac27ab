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

//! # Time Numeric Trait
//!
//! Unified numeric bounds for time-point representations. `TimeNumeric`
//! specifies the integer capabilities the window algebra requires,
//! including intrinsic traits (`PrimInt`, `Signed`) and the by-value
//! saturating/checked arithmetic traits from this crate.
//!
//! ## Motivation
//!
//! The algebra should remain generic over the resolution of its timeline:
//! Unix seconds in an `i64`, milliseconds, or coarse day numbers in an
//! `i32` are all valid time-point representations. This trait collects the
//! necessary bounds into a single alias, simplifying generic signatures
//! and ensuring consistent overflow handling.
//!
//! ## Highlights
//!
//! - Requires `PrimInt + Signed` for numeric fundamentals; the type bounds
//!   `T::min_value()` and `T::max_value()` double as the `-infinity` and
//!   `+infinity` sentinels of unbounded window edges.
//! - Adds by-value arithmetic traits: saturating add/sub for endpoint
//!   shifts that clamp at the sentinels, and checked sub for width
//!   computations that may overflow.
//! - `Send + Sync` so window pipelines can move freely across threads.

use std::hash::Hash;

use crate::num::{checked_arithmetic, saturating_arithmetic};
use num_traits::{PrimInt, Signed};

/// A trait alias for numeric types that can represent points on the
/// timeline. This includes the signed integer types `i8`, `i16`, `i32`,
/// `i64`, `i128` and `isize`.
///
/// # Note
///
/// The minimum and maximum values of the type are reserved as the
/// `-infinity` and `+infinity` sentinels for unbounded window edges, so
/// they never denote ordinary time points.
pub trait TimeNumeric:
    PrimInt
    + Signed
    + std::fmt::Debug
    + std::fmt::Display
    + saturating_arithmetic::SaturatingAddVal
    + saturating_arithmetic::SaturatingSubVal
    + checked_arithmetic::CheckedSubVal
    + Send
    + Sync
    + Hash
{
}

impl<T> TimeNumeric for T where
    T: PrimInt
        + Signed
        + std::fmt::Debug
        + std::fmt::Display
        + saturating_arithmetic::SaturatingAddVal
        + saturating_arithmetic::SaturatingSubVal
        + checked_arithmetic::CheckedSubVal
        + Send
        + Sync
        + Hash
{
}
