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

use tempora_core::math::rational::Rational;

/// The error type for validated interval construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalError {
    /// A bound is infinite, so the bounds cannot be ordered.
    NotComparable,
    /// `start == end`.
    Empty,
    /// `end < start`.
    Reversed,
}

impl std::fmt::Display for IntervalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotComparable => write!(f, "Interval bounds are not comparable"),
            Self::Empty => write!(f, "Interval is empty: start equals end"),
            Self::Reversed => write!(f, "Interval is reversed: end precedes start"),
        }
    }
}

impl std::error::Error for IntervalError {}

/// A half-open time range `[start, end)` sampled at `rate`.
///
/// `rate` is the duration of one unit (for example `1/24` for one frame at
/// 24 fps). A rate with a zero denominator marks a continuous interval that
/// is never quantized. The relational predicates only look at the bounds and
/// ignore the rate.
///
/// # Invariants
///
/// An interval is well formed when `start < end` under the exact rational
/// order. [`TimeInterval::new`] does not enforce this so that malformed
/// ranges can still be fed to the predicates, which then answer `false`
/// (with the exception of [`TimeInterval::subset`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimeInterval {
    start: Rational,
    end: Rational,
    rate: Rational,
}

impl TimeInterval {
    /// Creates an interval without validating its bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_core::math::rational::Rational;
    /// # use tempora_model::time::TimeInterval;
    ///
    /// let iv = TimeInterval::new(
    ///     Rational::ZERO,
    ///     Rational::new(101, 100),
    ///     Rational::new(1, 24),
    /// );
    /// assert!(iv.well_formed());
    /// ```
    #[inline]
    pub const fn new(start: Rational, end: Rational, rate: Rational) -> Self {
        Self { start, end, rate }
    }

    /// Creates an interval if `start < end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_core::math::rational::Rational;
    /// # use tempora_model::time::{IntervalError, TimeInterval};
    ///
    /// let rate = Rational::new(1, 25);
    /// assert!(TimeInterval::try_new(Rational::ZERO, Rational::ONE, rate).is_ok());
    /// assert_eq!(
    ///     TimeInterval::try_new(Rational::ONE, Rational::ZERO, rate),
    ///     Err(IntervalError::Reversed)
    /// );
    /// ```
    pub fn try_new(start: Rational, end: Rational, rate: Rational) -> Result<Self, IntervalError> {
        if start.is_infinite() || end.is_infinite() {
            return Err(IntervalError::NotComparable);
        }
        if start.less_than(&end) {
            Ok(Self::new(start, end, rate))
        } else if start.equal(&end) {
            Err(IntervalError::Empty)
        } else {
            Err(IntervalError::Reversed)
        }
    }

    /// Returns the inclusive start bound.
    #[inline]
    pub const fn start(&self) -> Rational {
        self.start
    }

    /// Returns the exclusive end bound.
    #[inline]
    pub const fn end(&self) -> Rational {
        self.end
    }

    /// Returns the duration of one unit.
    #[inline]
    pub const fn rate(&self) -> Rational {
        self.rate
    }

    /// Returns `true` if the rate is infinite, i.e. the interval is not quantized.
    #[inline]
    pub const fn is_continuous(&self) -> bool {
        self.rate.is_infinite()
    }

    /// Returns `true` if `start < end`.
    #[inline]
    pub fn well_formed(&self) -> bool {
        self.start.less_than(&self.end)
    }

    #[inline]
    fn both_well_formed(&self, other: &Self) -> bool {
        self.well_formed() && other.well_formed()
    }

    /// Returns `true` if every point of `self` lies strictly before `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_core::math::rational::Rational;
    /// # use tempora_model::time::TimeInterval;
    ///
    /// let rate = Rational::new(1, 24);
    /// let a = TimeInterval::new(Rational::from(0), Rational::from(1), rate);
    /// let b = TimeInterval::new(Rational::from(2), Rational::from(3), rate);
    /// assert!(a.precedes(&b));
    /// assert!(!b.precedes(&a));
    /// ```
    pub fn precedes(&self, other: &Self) -> bool {
        self.both_well_formed(other) && self.end.less_than(&other.start)
    }

    /// Returns `true` if `self` ends exactly where `other` starts.
    pub fn meets(&self, other: &Self) -> bool {
        self.both_well_formed(other) && self.end.equal(&other.start)
    }

    /// Returns `true` if `self` starts first and `other` starts inside `self`.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.both_well_formed(other)
            && self.start.less_than(&other.start)
            && other.start.less_than(&self.end)
    }

    /// Returns `true` if both start together and `self` ends first.
    pub fn starts(&self, other: &Self) -> bool {
        self.both_well_formed(other)
            && self.start.equal(&other.start)
            && self.end.less_than(&other.end)
    }

    /// Returns `true` if `self` lies strictly inside `other` on both sides.
    pub fn during(&self, other: &Self) -> bool {
        self.both_well_formed(other)
            && other.start.less_than(&self.start)
            && self.end.less_than(&other.end)
    }

    /// Returns `true` if `self` starts after `other` and both end together.
    pub fn ends(&self, other: &Self) -> bool {
        self.both_well_formed(other)
            && other.start.less_than(&self.start)
            && self.end.equal(&other.end)
    }

    /// Returns `true` if both bounds coincide. The rate is not compared.
    pub fn equal(&self, other: &Self) -> bool {
        self.both_well_formed(other)
            && self.start.equal(&other.start)
            && self.end.equal(&other.end)
    }

    /// Returns `true` if one interval precedes the other.
    ///
    /// Meeting intervals are not disjoint.
    pub fn disjoint(&self, other: &Self) -> bool {
        self.precedes(other) || other.precedes(self)
    }

    /// Returns `true` if `self` is contained in `other`.
    ///
    /// Unlike the other relations this does not require well-formed operands.
    /// The start clause accepts either `other.start < self.start` or an empty
    /// `self` (`self.start == self.end`), so an interval sharing its start
    /// with `other` is not a subset unless it is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_core::math::rational::Rational;
    /// # use tempora_model::time::TimeInterval;
    ///
    /// let rate = Rational::new(1, 24);
    /// let outer = TimeInterval::new(Rational::from(0), Rational::from(10), rate);
    /// let inner = TimeInterval::new(Rational::from(2), Rational::from(10), rate);
    /// let head = TimeInterval::new(Rational::from(0), Rational::from(5), rate);
    /// assert!(inner.subset(&outer));
    /// assert!(!head.subset(&outer));
    /// ```
    pub fn subset(&self, other: &Self) -> bool {
        (other.start.less_than(&self.start) || self.start.equal(&self.end))
            && (self.end.less_than(&other.end) || self.end.equal(&other.end))
    }

    /// Returns `true` if `self` is a subset of `other` without being equal to it.
    pub fn within(&self, other: &Self) -> bool {
        !self.equal(other) && self.subset(other)
    }

    /// Returns `end - start`.
    #[inline]
    pub fn duration(&self) -> Rational {
        self.end.sub(&self.start)
    }

    /// Returns the number of whole units of `rate` that fit in the duration.
    ///
    /// The quotient is truncated toward zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_core::math::rational::Rational;
    /// # use tempora_model::time::TimeInterval;
    ///
    /// let iv = TimeInterval::new(Rational::ZERO, Rational::new(101, 100), Rational::new(1, 24));
    /// assert_eq!(iv.rate_frames(), 24);
    /// ```
    pub fn rate_frames(&self) -> i32 {
        self.duration().div(&self.rate).floor()
    }

    /// Returns the largest interval with the same start whose duration is a
    /// whole number of units of `rate`.
    ///
    /// A continuous interval is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_core::math::rational::Rational;
    /// # use tempora_model::time::TimeInterval;
    ///
    /// let iv = TimeInterval::new(Rational::ZERO, Rational::new(101, 100), Rational::new(1, 24));
    /// assert_eq!(iv.rate_conform().duration(), Rational::ONE);
    /// ```
    pub fn rate_conform(&self) -> Self {
        if self.is_continuous() {
            return *self;
        }

        let frames = Rational::from_integer(self.rate_frames());
        let quantized = frames.mul(&self.rate);
        Self::new(self.start, self.start.add(&quantized), self.rate)
    }
}

impl std::fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}) @ {}", self.start, self.end, self.rate)
    }
}
