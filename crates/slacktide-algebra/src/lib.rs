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

//! # Slacktide Algebra
//!
//! Lazy sequence operators over time-window sequences: complement, dilation
//! with coalescing, uniform shift, k-way set intersection, and set union.
//! Each operator is an iterator adapter that consumes its input incrementally
//! and emits at most one window per `next` call, so pipelines never
//! materialize whole sequences.
//!
//! ## Canonical sequences
//!
//! Every operator consumes and produces sequences in *canonical form*: sorted
//! by start, pairwise disjoint, and maximal (no two consecutive windows touch
//! at a shared boundary). This is a documented precondition, not a runtime
//! check: feeding a non-canonical sequence to an operator produces
//! unspecified output. `slacktide_core::window::are_canonical` makes the
//! property checkable where it matters.
//!
//! ## Modules
//!
//! - `negate`: Complement of a sequence, the ordered gaps between its
//!   windows, bounded by the infinity sentinels.
//! - `extend`: Dilation (or erosion, for negative deltas) of every window,
//!   coalescing windows that come to touch or overlap.
//! - `offset`: Uniform shift of every window, preserving relative structure.
//! - `intersect`: Set intersection of N sequences via a multi-cursor merge.
//! - `union`: Set union of N sequences, defined from `negate` and
//!   `intersect` by De Morgan's law.
//! - `ext`: The `WindowIterExt` chaining extensions for fluent pipelines.
//!
//! ## Purpose
//!
//! Schedules, maintenance calendars, and availability masks are all sets of
//! disjoint time windows. This crate gives them a closed algebra: any
//! combination of the five operators maps canonical sequences to canonical
//! sequences, with `Option`-shaped absence instead of error values and no
//! shared state between pipelines.
//!
//! Refer to each module for detailed APIs and examples.

pub mod ext;
pub mod extend;
pub mod intersect;
pub mod negate;
pub mod offset;
pub mod union;
