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

//! # Slacktide Core
//!
//! Foundational time-window primitives for the slacktide interval algebra.
//! This crate provides the half-open `TimeWindow` value with its validity
//! and intersection rules, the numeric abstraction over time-point
//! representations, and the by-value arithmetic traits the window
//! operations build on.
//!
//! ## Modules
//!
//! - `window`: The half-open time window `[start, end)` with construction-time
//!   validation, sentinel-aware unbounded edges, window-level intersection,
//!   extension, offset, and containment, plus the canonical-form predicate
//!   for window sequences.
//! - `time`: The `TimeNumeric` trait alias bundling the integer capabilities
//!   a time-point representation must provide.
//! - `num`: By-value arithmetic traits for saturating and checked operations,
//!   implemented for all primitive integer types.
//!
//! ## Purpose
//!
//! Higher-level crates compose lazy sequence operators on top of these
//! primitives. Keeping the window type small, `Copy`, and generic over its
//! time representation lets pipelines choose the resolution they need
//! (seconds, milliseconds, ticks) without touching the algebra itself.
//!
//! Refer to each module for detailed APIs and examples.

pub mod num;
pub mod time;
pub mod window;
