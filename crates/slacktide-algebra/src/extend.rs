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

//! # Sequence Dilation
//!
//! `Extend<I, T>` dilates (or erodes, for negative deltas) every window of a
//! canonical sequence by a fixed duration at both ends and coalesces windows
//! that come to touch or overlap, so the output is canonical again.
//!
//! ## Algorithm
//!
//! A single linear pass with one pending open window. Each input window is
//! extended at the window level; an eroded-away window contributes nothing.
//! If the extension reaches back to the pending window (`start <= pending
//! end`), the pending window is rebound to one spanning both; inputs arrive
//! in non-decreasing start order and a uniform extension keeps ends
//! non-decreasing, so only the end can need raising. Otherwise the pending
//! window is emitted and the extension takes its place. The final pending
//! window is flushed once the input is exhausted.
//!
//! A large enough delta therefore coalesces the whole input into the single
//! window `[first.start - delta, last.end + delta)`.
//!
//! The input must be canonical (sorted by start, disjoint, maximal); the
//! output for a non-canonical input is unspecified.

use slacktide_core::{time::TimeNumeric, window::TimeWindow};
use std::iter::FusedIterator;

/// An iterator adapter dilating every window of a canonical sequence by a
/// fixed duration, coalescing windows that come to touch or overlap.
///
/// See [`extend`] for the usual way to construct one.
#[derive(Debug, Clone)]
pub struct Extend<I, T>
where
    I: Iterator<Item = TimeWindow<T>>,
    T: TimeNumeric,
{
    inner: I,
    delta: T,
    pending: Option<TimeWindow<T>>,
    done: bool,
}

impl<I, T> Extend<I, T>
where
    I: Iterator<Item = TimeWindow<T>>,
    T: TimeNumeric,
{
    /// Creates a new `Extend` adapter over the given window iterator.
    #[inline]
    pub fn new(inner: I, delta: T) -> Self {
        Self {
            inner,
            delta,
            pending: None,
            done: false,
        }
    }
}

impl<I, T> Iterator for Extend<I, T>
where
    I: Iterator<Item = TimeWindow<T>>,
    T: TimeNumeric,
{
    type Item = TimeWindow<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            match self.inner.next() {
                Some(window) => {
                    // Eroded-away windows contribute nothing.
                    let Some(extended) = window.extend(self.delta) else {
                        continue;
                    };
                    match self.pending {
                        None => self.pending = Some(extended),
                        Some(pending) => {
                            if extended.start() <= pending.end() {
                                // Touch or overlap: raise the pending end.
                                // Ends are non-decreasing under a uniform
                                // extension, so the merged span is valid.
                                self.pending = Some(TimeWindow::new_unchecked(
                                    pending.start(),
                                    pending.end().max(extended.end()),
                                ));
                            } else {
                                self.pending = Some(extended);
                                return Some(pending);
                            }
                        }
                    }
                }
                None => {
                    self.done = true;
                    return self.pending.take();
                }
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        // Coalescing and erosion only remove windows; the pending slot adds
        // at most one beyond what the input still holds.
        let (_, upper) = self.inner.size_hint();
        (0, upper.and_then(|u| u.checked_add(1)))
    }
}

impl<I, T> FusedIterator for Extend<I, T>
where
    I: Iterator<Item = TimeWindow<T>>,
    T: TimeNumeric,
{
}

/// Dilates every window of a canonical sequence by `delta` at both ends,
/// coalescing windows that come to touch or overlap.
///
/// A negative `delta` erodes every window inward instead; windows eroded
/// past their width vanish from the output. Edges on the infinity sentinels
/// stay pinned. The result is canonical.
///
/// The input must be canonical (sorted by start, disjoint, maximal); the
/// output for a non-canonical input is unspecified.
///
/// # Examples
///
/// ```rust
/// # use slacktide_algebra::extend::extend;
/// # use slacktide_core::window::TimeWindow;
///
/// let windows = [TimeWindow::new(100_i64, 200), TimeWindow::new(300, 400)];
///
/// // A small dilation keeps the windows apart
/// let widened: Vec<_> = extend(windows, 10).collect();
/// assert_eq!(
///     widened,
///     vec![TimeWindow::new(90, 210), TimeWindow::new(290, 410)]
/// );
///
/// // A large one merges them
/// let merged: Vec<_> = extend(windows, 60).collect();
/// assert_eq!(merged, vec![TimeWindow::new(40, 460)]);
/// ```
#[inline]
pub fn extend<I, T>(input: I, delta: T) -> Extend<I::IntoIter, T>
where
    I: IntoIterator<Item = TimeWindow<T>>,
    T: TimeNumeric,
{
    Extend::new(input.into_iter(), delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use slacktide_core::window::are_canonical;

    const DAY: i64 = 86_400;

    const NY_2017_START: i64 = 1_483_228_800; // 2017-01-01T00:00:00Z
    const NY_2017_END: i64 = 1_483_315_200; // 2017-01-02T00:00:00Z
    const NY_2018_START: i64 = 1_514_764_800; // 2018-01-01T00:00:00Z
    const NY_2018_END: i64 = 1_514_851_200; // 2018-01-02T00:00:00Z
    const NY_2019_START: i64 = 1_546_300_800; // 2019-01-01T00:00:00Z
    const NY_2019_END: i64 = 1_546_387_200; // 2019-01-02T00:00:00Z

    fn new_year_windows() -> Vec<TimeWindow<i64>> {
        vec![
            TimeWindow::new(NY_2017_START, NY_2017_END),
            TimeWindow::new(NY_2018_START, NY_2018_END),
            TimeWindow::new(NY_2019_START, NY_2019_END),
        ]
    }

    #[test]
    fn test_extend_small_delta_preserves_count() {
        let extended: Vec<_> = extend(new_year_windows(), DAY).collect();

        assert_eq!(extended.len(), 3);
        assert_eq!(
            extended[0],
            TimeWindow::new(NY_2017_START - DAY, NY_2017_END + DAY)
        );
        assert_eq!(
            extended[1],
            TimeWindow::new(NY_2018_START - DAY, NY_2018_END + DAY)
        );
        assert_eq!(
            extended[2],
            TimeWindow::new(NY_2019_START - DAY, NY_2019_END + DAY)
        );
        assert!(are_canonical(&extended));
    }

    #[test]
    fn test_extend_large_delta_coalesces() {
        // 200 days bridges the inter-year gaps and merges everything into
        // [2016-06-15, 2019-07-21)
        let extended: Vec<_> = extend(new_year_windows(), 200 * DAY).collect();

        assert_eq!(
            extended,
            vec![TimeWindow::new(
                NY_2017_START - 200 * DAY, // 2016-06-15T00:00:00Z
                NY_2019_END + 200 * DAY    // 2019-07-21T00:00:00Z
            )]
        );
        assert_eq!(extended[0].start(), 1_465_948_800);
        assert_eq!(extended[0].end(), 1_563_667_200);
    }

    #[test]
    fn test_extend_negative_delta_erodes() {
        let half_hour = 1_800;
        let eroded: Vec<_> = extend(new_year_windows(), -half_hour).collect();

        assert_eq!(eroded.len(), 3);
        for (eroded, original) in eroded.iter().zip(new_year_windows()) {
            assert_eq!(eroded.start(), original.start() + half_hour);
            assert_eq!(eroded.end(), original.end() - half_hour);
        }
        assert!(are_canonical(&eroded));
    }

    #[test]
    fn test_extend_erosion_past_width_empties() {
        // Each fixture window is one day wide; eroding a full day from each
        // side leaves nothing
        let eroded: Vec<_> = extend(new_year_windows(), -DAY).collect();
        assert!(eroded.is_empty());
    }

    #[test]
    fn test_extend_drops_only_vanished_windows() {
        let windows = vec![
            TimeWindow::new(0_i64, 10),     // Vanishes under -10
            TimeWindow::new(100_i64, 200),  // Survives
            TimeWindow::new(300_i64, 315),  // Vanishes
            TimeWindow::new(400_i64, 500),  // Survives
        ];
        let eroded: Vec<_> = extend(windows, -10).collect();
        assert_eq!(
            eroded,
            vec![TimeWindow::new(110, 190), TimeWindow::new(410, 490)]
        );
    }

    #[test]
    fn test_extend_merges_touching_windows() {
        // A gap of exactly 2 * delta makes the extensions touch, which
        // maximality requires merging
        let windows = vec![TimeWindow::new(0_i64, 10), TimeWindow::new(20, 30)];
        let extended: Vec<_> = extend(windows, 5).collect();
        assert_eq!(extended, vec![TimeWindow::new(-5, 35)]);
    }

    #[test]
    fn test_extend_zero_delta_is_identity() {
        let windows = new_year_windows();
        let extended: Vec<_> = extend(windows.clone(), 0).collect();
        assert_eq!(extended, windows);
    }

    #[test]
    fn test_extend_empty_input() {
        let empty: Vec<TimeWindow<i64>> = vec![];
        assert_eq!(extend(empty, DAY).count(), 0);
    }

    #[test]
    fn test_extend_pins_unbounded_edges() {
        let extended: Vec<_> = extend([TimeWindow::<i64>::always()], DAY).collect();
        assert_eq!(extended, vec![TimeWindow::always()]);
    }

    #[test]
    fn test_extend_emits_before_draining_input() {
        use std::cell::Cell;

        let consumed = Cell::new(0_usize);
        let windows = new_year_windows();
        let mut extended = extend(
            windows
                .iter()
                .copied()
                .inspect(|_| consumed.set(consumed.get() + 1)),
            DAY,
        );

        // The first output is decided as soon as the second input proves the
        // gap survives the dilation
        assert_eq!(
            extended.next(),
            Some(TimeWindow::new(NY_2017_START - DAY, NY_2017_END + DAY))
        );
        assert_eq!(consumed.get(), 2);
    }

    #[test]
    fn test_fused_iterator() {
        let mut extended = extend([TimeWindow::new(0_i64, 10)], 5);
        assert!(extended.next().is_some());
        assert_eq!(extended.next(), None);
        assert_eq!(extended.next(), None);

        fn assert_fused<I: FusedIterator>(_: I) {}
        assert_fused(extended);
    }
}
