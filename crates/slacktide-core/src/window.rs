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

//! # Time Window
//!
//! The half-open time window `[start, end)` over a generic time-point
//! representation, with construction-time validation, unbounded sentinel
//! edges, and the window-level operations the sequence algebra builds on:
//! intersection, extension, offset, and containment.
//!
//! ## Motivation
//!
//! Windows are the value type flowing through the lazy sequence operators of
//! the algebra crate. Keeping the validity invariant (`start < end`, strictly)
//! at construction time means "no window" is always `Option::None` and never a
//! zero- or negative-width value, so every transformation that can make a
//! window vanish is forced to surface that case at its call site.
//!
//! ## Highlights
//!
//! - `new`/`try_new`/`new_unchecked` constructor triple: panicking, checked,
//!   and debug-asserted for hot paths where validity is structural.
//! - The numeric bounds of `T` double as the `-inf`/`+inf` sentinels of
//!   unbounded edges. Pinned edges survive `extend` and `offset`; finite
//!   endpoint arithmetic saturates, so shifting past the representable range
//!   lands on a sentinel instead of wrapping around the timeline.
//! - `&` operator sugar for window intersection.
//! - `are_canonical` predicate for the sorted, disjoint, maximal sequence
//!   form the sequence operators require and guarantee.

use crate::time::TimeNumeric;
use std::{
    cmp::{max, min},
    ops::BitAnd,
};

/// A half-open time window `[start, end)` on a linear timeline.
///
/// The window covers every time point `t` with `start <= t < end`. Edges at
/// `T::min_value()` or `T::max_value()` are the `-inf`/`+inf` sentinels of an
/// unbounded window; [`TimeWindow::always`] is the window covering the whole
/// timeline.
///
/// # Invariants
///
/// `start` is always strictly less than `end`. Operations that would violate
/// this produce `None` rather than an empty window.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeWindow<T>
where
    T: TimeNumeric,
{
    start: T,
    end: T,
}

impl<T> TimeWindow<T>
where
    T: TimeNumeric,
{
    /// Creates a new `TimeWindow`.
    ///
    /// # Panics
    ///
    /// Panics if `start >= end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slacktide_core::window::TimeWindow;
    ///
    /// let w = TimeWindow::new(0_i64, 3_600);
    /// assert_eq!(w.start(), 0);
    /// assert_eq!(w.end(), 3_600);
    /// ```
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        assert!(
            start < end,
            "Invalid time window: start must be strictly less than end"
        );
        Self { start, end }
    }

    /// Creates a new `TimeWindow` if the inputs are valid.
    ///
    /// Returns `None` if `start >= end`. This is the validation gate every
    /// transforming operation funnels through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slacktide_core::window::TimeWindow;
    ///
    /// assert!(TimeWindow::try_new(0_i64, 10).is_some());
    /// assert!(TimeWindow::try_new(10_i64, 10).is_none());
    /// assert!(TimeWindow::try_new(10_i64, 0).is_none());
    /// ```
    #[inline]
    pub fn try_new(start: T, end: T) -> Option<Self> {
        if start < end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Creates a new `TimeWindow` without checking invariants in release builds.
    ///
    /// # Safety
    ///
    /// The caller must ensure `start < end`.
    /// This function contains a `debug_assert!` to catch errors during development.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slacktide_core::window::TimeWindow;
    ///
    /// let w = TimeWindow::new_unchecked(0_i64, 10);
    /// assert_eq!(w.end(), 10);
    /// ```
    #[inline]
    pub fn new_unchecked(start: T, end: T) -> Self {
        debug_assert!(
            start < end,
            "Invalid time window: start must be strictly less than end"
        );
        Self { start, end }
    }

    /// Returns the window covering the whole timeline,
    /// `[T::min_value(), T::max_value())`.
    ///
    /// Intersecting with this window is the identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slacktide_core::window::TimeWindow;
    ///
    /// let always = TimeWindow::<i64>::always();
    /// assert!(always.contains(0));
    /// assert!(always.contains(i64::MIN));
    /// assert!(!always.is_bounded());
    /// ```
    #[inline]
    pub fn always() -> Self {
        Self {
            start: T::min_value(),
            end: T::max_value(),
        }
    }

    /// Returns the inclusive start of the window.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slacktide_core::window::TimeWindow;
    ///
    /// let w = TimeWindow::new(5_i64, 10);
    /// assert_eq!(w.start(), 5);
    /// ```
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the exclusive end of the window.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slacktide_core::window::TimeWindow;
    ///
    /// let w = TimeWindow::new(5_i64, 10);
    /// assert_eq!(w.end(), 10);
    /// ```
    #[inline]
    pub const fn end(&self) -> T {
        self.end
    }

    /// Returns `true` if both edges are finite, i.e. neither sits on an
    /// infinity sentinel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slacktide_core::window::TimeWindow;
    ///
    /// assert!(TimeWindow::new(0_i64, 10).is_bounded());
    /// assert!(!TimeWindow::<i64>::always().is_bounded());
    /// assert!(!TimeWindow::new(i64::MIN, 10).is_bounded());
    /// ```
    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.start != T::min_value() && self.end != T::max_value()
    }

    /// Returns the width of the window (`end - start`), checked.
    ///
    /// Returns `None` for unbounded windows and for widths that overflow the
    /// time representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slacktide_core::window::TimeWindow;
    ///
    /// assert_eq!(TimeWindow::new(10_i64, 30).duration(), Some(20));
    /// assert_eq!(TimeWindow::<i64>::always().duration(), None);
    /// ```
    #[inline]
    pub fn duration(&self) -> Option<T> {
        if !self.is_bounded() {
            return None;
        }
        self.end.checked_sub_val(self.start)
    }

    /// Returns `true` if the window contains the time point `t`.
    ///
    /// The window is half-open: the start is inclusive, the end exclusive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slacktide_core::window::TimeWindow;
    ///
    /// let w = TimeWindow::new(0_i64, 10);
    /// assert!(w.contains(0));
    /// assert!(w.contains(9));
    /// assert!(!w.contains(10));
    /// ```
    #[inline]
    pub fn contains(&self, t: T) -> bool {
        t >= self.start && t < self.end
    }

    /// Returns `true` if this window overlaps with `other`.
    ///
    /// Windows that merely touch at a shared boundary do not overlap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slacktide_core::window::TimeWindow;
    ///
    /// let a = TimeWindow::new(0_i64, 10);
    /// assert!(a.intersects(TimeWindow::new(5, 15)));
    /// assert!(!a.intersects(TimeWindow::new(10, 20))); // Adjacent
    /// ```
    #[inline]
    pub fn intersects(&self, other: Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Calculates the intersection of two windows.
    ///
    /// The result is `[max(starts), min(ends))`; `None` if that range is
    /// empty. Pure, commutative, and associative; intersecting with
    /// [`TimeWindow::always`] is the identity. Also available through the `&`
    /// operator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slacktide_core::window::TimeWindow;
    ///
    /// let a = TimeWindow::new(0_i64, 10);
    /// let b = TimeWindow::new(5_i64, 15);
    /// assert_eq!(a.intersect(b), Some(TimeWindow::new(5, 10)));
    /// assert_eq!(a.intersect(TimeWindow::new(10, 20)), None);
    /// ```
    #[inline]
    pub fn intersect(&self, other: Self) -> Option<Self> {
        Self::try_new(max(self.start, other.start), min(self.end, other.end))
    }

    /// Extends the window by `delta` at both ends.
    ///
    /// The result is `[start - delta, end + delta)`. An edge already on an
    /// infinity sentinel stays pinned; finite edge arithmetic saturates, so a
    /// large enough `delta` widens an edge onto a sentinel instead of
    /// wrapping. A negative `delta` erodes the window inward; erosion that
    /// crosses `start >= end` makes the window vanish and yields `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slacktide_core::window::TimeWindow;
    ///
    /// let w = TimeWindow::new(3_600_i64, 7_200);
    /// assert_eq!(w.extend(600), Some(TimeWindow::new(3_000, 7_800)));
    /// assert_eq!(w.extend(-600), Some(TimeWindow::new(4_200, 6_600)));
    /// assert_eq!(w.extend(-1_800), None); // Eroded away
    ///
    /// let always = TimeWindow::<i64>::always();
    /// assert_eq!(always.extend(-600), Some(always)); // Pinned edges
    /// ```
    #[inline]
    pub fn extend(&self, delta: T) -> Option<Self> {
        let start = if self.start == T::min_value() {
            self.start
        } else {
            self.start.saturating_sub_val(delta)
        };
        let end = if self.end == T::max_value() {
            self.end
        } else {
            self.end.saturating_add_val(delta)
        };
        Self::try_new(start, end)
    }

    /// Shifts the window by `delta`.
    ///
    /// Both edges move by the same amount, so the width is preserved as long
    /// as neither edge saturates. Edges on an infinity sentinel stay pinned;
    /// finite edge arithmetic saturates. `None` only in the degenerate case
    /// where saturation drives both edges onto the same bound of the
    /// representable range and the window collapses to nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slacktide_core::window::TimeWindow;
    ///
    /// let w = TimeWindow::new(0_i64, 3_600);
    /// assert_eq!(w.offset(1_800), Some(TimeWindow::new(1_800, 5_400)));
    /// assert_eq!(w.offset(-7_200), Some(TimeWindow::new(-7_200, -3_600)));
    /// assert_eq!(w.offset(i64::MAX), None); // Collapsed against the range end
    /// ```
    #[inline]
    pub fn offset(&self, delta: T) -> Option<Self> {
        let start = if self.start == T::min_value() {
            self.start
        } else {
            self.start.saturating_add_val(delta)
        };
        let end = if self.end == T::max_value() {
            self.end
        } else {
            self.end.saturating_add_val(delta)
        };
        Self::try_new(start, end)
    }
}

impl<T> BitAnd for TimeWindow<T>
where
    T: TimeNumeric,
{
    type Output = Option<Self>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersect(rhs)
    }
}

fn fmt_time_point<T>(value: T, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
where
    T: TimeNumeric,
{
    if value == T::min_value() {
        f.write_str("-inf")
    } else if value == T::max_value() {
        f.write_str("+inf")
    } else {
        write!(f, "{}", value)
    }
}

impl<T> std::fmt::Display for TimeWindow<T>
where
    T: TimeNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        fmt_time_point(self.start, f)?;
        f.write_str(", ")?;
        fmt_time_point(self.end, f)?;
        f.write_str(")")
    }
}

impl<T> std::fmt::Debug for TimeWindow<T>
where
    T: TimeNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TimeWindow{}", self)
    }
}

/// Checks whether the given windows form a canonical sequence: sorted by
/// start, pairwise disjoint, and maximal (no two consecutive windows touch at
/// a shared boundary).
///
/// The sequence operators of the algebra crate require this form as a
/// precondition and guarantee it as a postcondition; this predicate makes the
/// property checkable in tests and debug assertions without being on any hot
/// path.
///
/// # Examples
///
/// ```rust
/// # use slacktide_core::window::{TimeWindow, are_canonical};
///
/// let good = [TimeWindow::new(0_i64, 5), TimeWindow::new(10, 20)];
/// assert!(are_canonical(&good));
///
/// let touching = [TimeWindow::new(0_i64, 10), TimeWindow::new(10, 20)];
/// assert!(!are_canonical(&touching));
/// ```
#[inline(always)]
pub fn are_canonical<T>(windows: &[TimeWindow<T>]) -> bool
where
    T: TimeNumeric,
{
    windows.windows(2).all(|w| w[0].end() < w[1].start())
}
