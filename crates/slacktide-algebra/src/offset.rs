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

//! # Sequence Shift
//!
//! `Offset<I, T>` shifts every window of a canonical sequence by a fixed
//! signed duration. A uniform shift preserves relative structure, so no
//! merge step is needed: the output is canonical whenever the input is.
//!
//! The one subtlety is saturation at the edges of the time representation:
//! a window pushed entirely onto a range bound collapses to nothing and is
//! dropped. That cannot break canonical form, because every window behind a
//! collapsed one collapses as well.

use slacktide_core::{time::TimeNumeric, window::TimeWindow};
use std::iter::FusedIterator;

/// An iterator adapter shifting every window of a canonical sequence by a
/// fixed signed duration.
///
/// See [`offset`] for the usual way to construct one.
#[derive(Debug, Clone)]
pub struct Offset<I, T>
where
    I: Iterator<Item = TimeWindow<T>>,
    T: TimeNumeric,
{
    inner: I,
    delta: T,
}

impl<I, T> Offset<I, T>
where
    I: Iterator<Item = TimeWindow<T>>,
    T: TimeNumeric,
{
    /// Creates a new `Offset` adapter over the given window iterator.
    #[inline]
    pub fn new(inner: I, delta: T) -> Self {
        Self { inner, delta }
    }
}

impl<I, T> Iterator for Offset<I, T>
where
    I: Iterator<Item = TimeWindow<T>>,
    T: TimeNumeric,
{
    type Item = TimeWindow<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let window = self.inner.next()?;
            if let Some(shifted) = window.offset(self.delta) {
                return Some(shifted);
            }
            // Collapsed against a range bound; skip.
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // Saturation can only drop windows, never add them.
        let (_, upper) = self.inner.size_hint();
        (0, upper)
    }
}

impl<I, T> FusedIterator for Offset<I, T>
where
    I: Iterator<Item = TimeWindow<T>> + FusedIterator,
    T: TimeNumeric,
{
}

/// Shifts every window of a canonical sequence by `delta`.
///
/// Order and disjointness are preserved; edges on the infinity sentinels
/// stay pinned, and windows collapsed away by saturation at the range
/// bounds are dropped. The result is canonical.
///
/// The input must be canonical (sorted by start, disjoint, maximal); the
/// output for a non-canonical input is unspecified.
///
/// # Examples
///
/// ```rust
/// # use slacktide_algebra::offset::offset;
/// # use slacktide_core::window::TimeWindow;
///
/// let windows = [TimeWindow::new(0_i64, 60), TimeWindow::new(120, 180)];
/// let shifted: Vec<_> = offset(windows, 30).collect();
///
/// assert_eq!(
///     shifted,
///     vec![TimeWindow::new(30, 90), TimeWindow::new(150, 210)]
/// );
/// ```
#[inline]
pub fn offset<I, T>(input: I, delta: T) -> Offset<I::IntoIter, T>
where
    I: IntoIterator<Item = TimeWindow<T>>,
    T: TimeNumeric,
{
    Offset::new(input.into_iter(), delta)
}
