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

//! # Iterator Extensions
//!
//! `WindowIterExt` lets the single-sequence operators chain off any window
//! iterator the way the std adapters do, so pipelines read left to right
//! instead of inside out. The multi-sequence operators (`intersect`,
//! `union`) stay free functions since they start from a collection of
//! sequences, not a single one.

use crate::{extend::Extend, negate::Negate, offset::Offset};
use slacktide_core::{time::TimeNumeric, window::TimeWindow};

/// Chaining adapters for iterators over time windows.
///
/// Blanket-implemented for every `Iterator<Item = TimeWindow<T>>`.
///
/// # Examples
///
/// ```rust
/// # use slacktide_algebra::ext::WindowIterExt;
/// # use slacktide_core::window::TimeWindow;
///
/// let busy = [TimeWindow::new(100_i64, 200), TimeWindow::new(500, 600)];
///
/// // Free time, with a 50-point safety margin around every busy window
/// let free: Vec<_> = busy.into_iter().extend_by(50).negate().collect();
/// assert_eq!(
///     free,
///     vec![
///         TimeWindow::new(i64::MIN, 50),
///         TimeWindow::new(250, 450),
///         TimeWindow::new(650, i64::MAX),
///     ]
/// );
/// ```
pub trait WindowIterExt<T>: Iterator<Item = TimeWindow<T>> + Sized
where
    T: TimeNumeric,
{
    /// Complements the sequence; see [`crate::negate::negate`].
    #[inline]
    fn negate(self) -> Negate<Self, T> {
        Negate::new(self)
    }

    /// Dilates every window by `delta`, coalescing windows that come to
    /// touch or overlap; see [`crate::extend::extend`].
    #[inline]
    fn extend_by(self, delta: T) -> Extend<Self, T> {
        Extend::new(self, delta)
    }

    /// Shifts every window by `delta`; see [`crate::offset::offset`].
    #[inline]
    fn offset_by(self, delta: T) -> Offset<Self, T> {
        Offset::new(self, delta)
    }
}

impl<I, T> WindowIterExt<T> for I
where
    I: Iterator<Item = TimeWindow<T>>,
    T: TimeNumeric,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{extend::extend, negate::negate, offset::offset};

    fn fixture() -> Vec<TimeWindow<i64>> {
        vec![TimeWindow::new(0_i64, 100), TimeWindow::new(300, 400)]
    }

    #[test]
    fn test_chained_adapters_match_free_functions() {
        let chained: Vec<_> = fixture().into_iter().negate().collect();
        let free: Vec<_> = negate(fixture()).collect();
        assert_eq!(chained, free);

        let chained: Vec<_> = fixture().into_iter().extend_by(10).collect();
        let free: Vec<_> = extend(fixture(), 10).collect();
        assert_eq!(chained, free);

        let chained: Vec<_> = fixture().into_iter().offset_by(10).collect();
        let free: Vec<_> = offset(fixture(), 10).collect();
        assert_eq!(chained, free);
    }

    #[test]
    fn test_pipeline_reads_left_to_right() {
        // Shift, widen, complement in one chain
        let result: Vec<_> = fixture()
            .into_iter()
            .offset_by(50)
            .extend_by(25)
            .negate()
            .collect();

        assert_eq!(
            result,
            vec![
                TimeWindow::new(i64::MIN, 25),
                TimeWindow::new(175, 325),
                TimeWindow::new(475, i64::MAX),
            ]
        );
    }
}
