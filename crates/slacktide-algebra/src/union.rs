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

//! # Sequence Union
//!
//! `Union<I, T>` computes the set union of N canonical window sequences.
//! It carries no algorithm of its own: by De Morgan's law the union of sets
//! is the complement of the intersection of their complements, so the
//! adapter is exactly the composition `negate(intersect(map(negate)))`.
//! Using the composition verbatim keeps union consistent with the
//! complement and intersection semantics by construction, sentinel edge
//! cases included.
//!
//! One consequence worth spelling out: the union of zero sequences is the
//! complement of the empty intersection, i.e. `[always()]`.

use crate::{intersect::Intersect, negate::Negate};
use slacktide_core::{time::TimeNumeric, window::TimeWindow};
use std::iter::FusedIterator;

/// An iterator adapter yielding the set union of N canonical window
/// sequences, as the De Morgan composition of [`Negate`] and [`Intersect`].
///
/// See [`union`] for the usual way to construct one.
#[derive(Debug, Clone)]
pub struct Union<I, T>
where
    I: Iterator<Item = TimeWindow<T>>,
    T: TimeNumeric,
{
    inner: Negate<Intersect<Negate<I, T>, T>, T>,
}

impl<I, T> Union<I, T>
where
    I: Iterator<Item = TimeWindow<T>>,
    T: TimeNumeric,
{
    /// Creates a new `Union` over the given window iterators.
    pub fn new<S>(inputs: S) -> Self
    where
        S: IntoIterator,
        S::Item: IntoIterator<IntoIter = I, Item = TimeWindow<T>>,
    {
        let complements = inputs.into_iter().map(|s| Negate::new(s.into_iter()));
        Self {
            inner: Negate::new(Intersect::new(complements)),
        }
    }
}

impl<I, T> Iterator for Union<I, T>
where
    I: Iterator<Item = TimeWindow<T>>,
    T: TimeNumeric,
{
    type Item = TimeWindow<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I, T> FusedIterator for Union<I, T>
where
    I: Iterator<Item = TimeWindow<T>>,
    T: TimeNumeric,
{
}

/// Returns the set union of N canonical window sequences.
///
/// A time point is covered by the output iff it is covered by at least one
/// input sequence. The result is canonical: overlapping and touching spans
/// from different inputs come out merged. An empty collection of sequences
/// yields `[TimeWindow::always()]` (the complement of the empty
/// intersection).
///
/// Each input must be canonical (sorted by start, disjoint, maximal); the
/// output for non-canonical inputs is unspecified.
///
/// # Examples
///
/// ```rust
/// # use slacktide_algebra::union::union;
/// # use slacktide_core::window::TimeWindow;
///
/// let a = vec![TimeWindow::new(0_i64, 100)];
/// let b = vec![TimeWindow::new(50_i64, 150), TimeWindow::new(300, 400)];
///
/// let either: Vec<_> = union([a, b]).collect();
/// assert_eq!(
///     either,
///     vec![TimeWindow::new(0, 150), TimeWindow::new(300, 400)]
/// );
/// ```
#[inline]
pub fn union<S, I, T>(inputs: S) -> Union<I, T>
where
    S: IntoIterator,
    S::Item: IntoIterator<IntoIter = I, Item = TimeWindow<T>>,
    I: Iterator<Item = TimeWindow<T>>,
    T: TimeNumeric,
{
    Union::new(inputs)
}
