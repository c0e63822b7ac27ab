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

//! # Sequence Intersection
//!
//! `Intersect<I, T>` computes the set intersection of N canonical window
//! sequences with a multi-cursor merge: a time point is in the output iff it
//! is in every input. This is the algorithmic core of the algebra; `union`
//! is defined from it by De Morgan's law.
//!
//! ## Algorithm
//!
//! One cursor per input sequence, each positioned at its current window.
//! Every round:
//!
//! 1. Fold the binary window intersection over all current windows; an
//!    absent partial result short-circuits the fold, not the merge.
//! 2. `reference = min(end)` over all cursors: the first moment a cursor's
//!    window ends and the active set can change.
//! 3. Advance every cursor whose window ends at `reference` by exactly one
//!    element. If one of them is exhausted, no further full-coverage
//!    intersection is possible and the merge terminates after this round's
//!    candidate is delivered.
//! 4. Emit the candidate from step 1 if it is non-absent; it is valid up to
//!    `reference`.
//!
//! Because each sequence is individually canonical, the fold in step 1 is
//! the unique maximal intersection window at the current aligned position,
//! and stepping exactly the cursors ending at `reference` is necessary and
//! sufficient to re-synchronize. Every round advances at least one cursor
//! or terminates, so the merge is O(total windows) with O(N) state.
//!
//! The inputs must each be canonical (sorted by start, disjoint, maximal);
//! the output for non-canonical inputs is unspecified.

use slacktide_core::{time::TimeNumeric, window::TimeWindow};
use smallvec::SmallVec;
use std::iter::FusedIterator;

/// Inline cursor capacity; intersections of more sequences spill to the heap.
const INLINE_CURSORS: usize = 4;

/// A cursor over one input sequence: the iterator plus the window it is
/// currently positioned at.
#[derive(Debug, Clone)]
struct Cursor<I, T>
where
    I: Iterator<Item = TimeWindow<T>>,
    T: TimeNumeric,
{
    iter: I,
    current: TimeWindow<T>,
}

/// An iterator adapter yielding the set intersection of N canonical window
/// sequences.
///
/// See [`intersect`] for the usual way to construct one.
#[derive(Debug, Clone)]
pub struct Intersect<I, T>
where
    I: Iterator<Item = TimeWindow<T>>,
    T: TimeNumeric,
{
    cursors: SmallVec<[Cursor<I, T>; INLINE_CURSORS]>,
    done: bool,
}

impl<I, T> Intersect<I, T>
where
    I: Iterator<Item = TimeWindow<T>>,
    T: TimeNumeric,
{
    /// Creates a new `Intersect` merge over the given window iterators.
    ///
    /// The merge is empty if no sequences are given or any sequence is
    /// itself empty (an empty sequence covers no time point, so nothing can
    /// be in every input).
    pub fn new<S>(inputs: S) -> Self
    where
        S: IntoIterator,
        S::Item: IntoIterator<IntoIter = I, Item = TimeWindow<T>>,
    {
        let mut cursors = SmallVec::new();
        for input in inputs {
            let mut iter = input.into_iter();
            match iter.next() {
                Some(current) => cursors.push(Cursor { iter, current }),
                None => {
                    return Self {
                        cursors: SmallVec::new(),
                        done: true,
                    }
                }
            }
        }
        let done = cursors.is_empty();
        Self { cursors, done }
    }
}

impl<I, T> Iterator for Intersect<I, T>
where
    I: Iterator<Item = TimeWindow<T>>,
    T: TimeNumeric,
{
    type Item = TimeWindow<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            // The candidate intersection at the current aligned position.
            // An absent partial result short-circuits the fold; the merge
            // itself keeps re-synchronizing.
            let mut windows = self.cursors.iter().map(|c| c.current);
            let first = windows.next()?;
            let candidate = windows.try_fold(first, |acc, w| acc & w);

            // The first moment a cursor's window ends. The cursors are
            // non-empty here, so the minimum exists.
            let reference = self
                .cursors
                .iter()
                .map(|c| c.current.end())
                .min()?;

            // Exactly the cursors ending at the reference must advance to
            // re-synchronize; one of them running dry ends the merge after
            // this round's candidate.
            for cursor in &mut self.cursors {
                if cursor.current.end() <= reference {
                    match cursor.iter.next() {
                        Some(window) => cursor.current = window,
                        None => {
                            self.done = true;
                            break;
                        }
                    }
                }
            }

            if candidate.is_some() {
                return candidate;
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, None)
        }
    }
}

impl<I, T> FusedIterator for Intersect<I, T>
where
    I: Iterator<Item = TimeWindow<T>>,
    T: TimeNumeric,
{
}

/// Returns the set intersection of N canonical window sequences.
///
/// A time point is covered by the output iff it is covered by every input
/// sequence. The result is canonical. Intersecting with
/// `[TimeWindow::always()]` is the identity; an empty collection of
/// sequences or any empty input sequence yields an empty output.
///
/// Each input must be canonical (sorted by start, disjoint, maximal); the
/// output for non-canonical inputs is unspecified.
///
/// # Examples
///
/// ```rust
/// # use slacktide_algebra::intersect::intersect;
/// # use slacktide_core::window::TimeWindow;
///
/// let shifts = vec![TimeWindow::new(0_i64, 100), TimeWindow::new(200, 300)];
/// let on_call = vec![TimeWindow::new(50_i64, 250)];
///
/// let both: Vec<_> = intersect([shifts, on_call]).collect();
/// assert_eq!(
///     both,
///     vec![TimeWindow::new(50, 100), TimeWindow::new(200, 250)]
/// );
/// ```
#[inline]
pub fn intersect<S, I, T>(inputs: S) -> Intersect<I, T>
where
    S: IntoIterator,
    S::Item: IntoIterator<IntoIter = I, Item = TimeWindow<T>>,
    I: Iterator<Item = TimeWindow<T>>,
    T: TimeNumeric,
{
    Intersect::new(inputs)
}
