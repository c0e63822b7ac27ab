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

//! # Sequence Complement
//!
//! `Negate<I, T>` produces the complement of a canonical window sequence:
//! the ordered gaps between its windows, bounded by the `-inf`/`+inf`
//! sentinels of the time representation.
//!
//! ## Algorithm
//!
//! A single linear pass with one cursor, initialized to `-inf`. For each
//! input window, the stretch between the cursor and the window's start is a
//! gap (emitted unless empty), and the cursor jumps to the window's end.
//! Once the input is exhausted, the stretch from the cursor to `+inf` is the
//! final gap. The input is never buffered.
//!
//! ## Edge behavior
//!
//! - The empty sequence complements to the full timeline.
//! - The full timeline complements to the empty sequence.
//! - Double negation is the identity on canonical sequences.
//!
//! The input must be canonical (sorted by start, disjoint, maximal); the
//! output for a non-canonical input is unspecified.

use slacktide_core::{time::TimeNumeric, window::TimeWindow};
use std::iter::FusedIterator;

/// An iterator adapter yielding the complement of a canonical window
/// sequence.
///
/// See [`negate`] for the usual way to construct one.
#[derive(Debug, Clone)]
pub struct Negate<I, T>
where
    I: Iterator<Item = TimeWindow<T>>,
    T: TimeNumeric,
{
    inner: I,
    previous: T,
    done: bool,
}

impl<I, T> Negate<I, T>
where
    I: Iterator<Item = TimeWindow<T>>,
    T: TimeNumeric,
{
    /// Creates a new `Negate` adapter over the given window iterator.
    #[inline]
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            previous: T::min_value(),
            done: false,
        }
    }
}

impl<I, T> Iterator for Negate<I, T>
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
                    let gap_start = self.previous;
                    self.previous = window.end();
                    if window.start() != gap_start {
                        return Some(TimeWindow::new_unchecked(gap_start, window.start()));
                    }
                    // The window starts right at the cursor, so there is no
                    // gap to emit before it; keep scanning.
                }
                None => {
                    self.done = true;
                    if self.previous != T::max_value() {
                        return Some(TimeWindow::new_unchecked(self.previous, T::max_value()));
                    }
                    return None;
                }
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        // Every input window can suppress at most one gap, and the tail adds
        // at most one window beyond the input count.
        let (lower, upper) = self.inner.size_hint();
        (
            lower.saturating_sub(1),
            upper.and_then(|u| u.checked_add(1)),
        )
    }
}

impl<I, T> FusedIterator for Negate<I, T>
where
    I: Iterator<Item = TimeWindow<T>>,
    T: TimeNumeric,
{
}

/// Returns the complement of a canonical window sequence.
///
/// The result is the ordered sequence of gaps between the input windows,
/// bounded by the infinity sentinels, and is itself canonical. Applying
/// `negate` twice returns the original sequence.
///
/// The input must be canonical (sorted by start, disjoint, maximal); the
/// output for a non-canonical input is unspecified.
///
/// # Examples
///
/// ```rust
/// # use slacktide_algebra::negate::negate;
/// # use slacktide_core::window::TimeWindow;
///
/// let busy = [TimeWindow::new(60_i64, 120), TimeWindow::new(600, 660)];
/// let free: Vec<_> = negate(busy).collect();
///
/// assert_eq!(
///     free,
///     vec![
///         TimeWindow::new(i64::MIN, 60),
///         TimeWindow::new(120, 600),
///         TimeWindow::new(660, i64::MAX),
///     ]
/// );
/// ```
#[inline]
pub fn negate<I, T>(input: I) -> Negate<I::IntoIter, T>
where
    I: IntoIterator<Item = TimeWindow<T>>,
    T: TimeNumeric,
{
    Negate::new(input.into_iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use slacktide_core::window::are_canonical;

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
    fn test_negate_of_new_year_windows() {
        let negated: Vec<_> = negate(new_year_windows()).collect();

        assert_eq!(negated.len(), 4);
        assert_eq!(negated[0], TimeWindow::new(i64::MIN, NY_2017_START));
        assert_eq!(negated[1], TimeWindow::new(NY_2017_END, NY_2018_START));
        assert_eq!(negated[2], TimeWindow::new(NY_2018_END, NY_2019_START));
        assert_eq!(negated[3], TimeWindow::new(NY_2019_END, i64::MAX));
        assert!(are_canonical(&negated));
    }

    #[test]
    fn test_negate_cardinality() {
        // k windows with no sentinel edges complement to k + 1 gaps
        for k in 1..6 {
            let input: Vec<_> = (0..k)
                .map(|i| TimeWindow::new(i64::from(i) * 100, i64::from(i) * 100 + 50))
                .collect();
            assert_eq!(negate(input).count(), k as usize + 1);
        }
    }

    #[test]
    fn test_negate_twice_is_identity() {
        let windows = new_year_windows();
        let round_trip: Vec<_> = negate(negate(windows.clone())).collect();
        assert_eq!(round_trip, windows);
    }

    #[test]
    fn test_negate_twice_with_unbounded_edges() {
        let windows = vec![
            TimeWindow::new(i64::MIN, 5_i64),
            TimeWindow::new(10_i64, 20),
            TimeWindow::new(50_i64, i64::MAX),
        ];
        let round_trip: Vec<_> = negate(negate(windows.clone())).collect();
        assert_eq!(round_trip, windows);
    }

    #[test]
    fn test_negate_empty_input_is_always() {
        let empty: Vec<TimeWindow<i64>> = vec![];
        let negated: Vec<_> = negate(empty).collect();
        assert_eq!(negated, vec![TimeWindow::always()]);
    }

    #[test]
    fn test_negate_always_is_empty() {
        let negated: Vec<_> = negate([TimeWindow::<i64>::always()]).collect();
        assert!(negated.is_empty());
    }

    #[test]
    fn test_negate_suppresses_head_gap() {
        // A window already starting at -inf leaves nothing before it
        let negated: Vec<_> = negate([TimeWindow::new(i64::MIN, 10_i64)]).collect();
        assert_eq!(negated, vec![TimeWindow::new(10, i64::MAX)]);
    }

    #[test]
    fn test_negate_suppresses_tail_gap() {
        let negated: Vec<_> = negate([TimeWindow::new(10_i64, i64::MAX)]).collect();
        assert_eq!(negated, vec![TimeWindow::new(i64::MIN, 10)]);
    }

    #[test]
    fn test_negate_pulls_input_lazily() {
        use std::cell::Cell;

        let consumed = Cell::new(0_usize);
        let windows = new_year_windows();
        let mut negated = negate(
            windows
                .iter()
                .copied()
                .inspect(|_| consumed.set(consumed.get() + 1)),
        );

        // The first gap only needs the first input window
        assert_eq!(
            negated.next(),
            Some(TimeWindow::new(i64::MIN, NY_2017_START))
        );
        assert_eq!(consumed.get(), 1);
    }

    #[test]
    fn test_size_hint() {
        let mut negated = negate(new_year_windows());
        let (lower, upper) = negated.size_hint();
        assert!(lower <= 4);
        assert!(upper.unwrap() >= 4);

        negated.by_ref().for_each(drop);
        assert_eq!(negated.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_fused_iterator() {
        let mut negated = negate([TimeWindow::new(0_i64, 10)]);
        assert!(negated.next().is_some()); // [-inf, 0)
        assert!(negated.next().is_some()); // [10, +inf)
        assert_eq!(negated.next(), None);
        assert_eq!(negated.next(), None); // Should continue returning None

        fn assert_fused<I: FusedIterator>(_: I) {}
        assert_fused(negated);
    }
}
