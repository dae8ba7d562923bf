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

//! Fixed-width exact rational numbers.
//!
//! A [`Rational`] is a signed 32-bit numerator over an unsigned 32-bit
//! denominator. A denominator of zero is not an error: it encodes infinity,
//! with the sign carried by the numerator, and it flows through arithmetic
//! like any other value.
//!
//! Arithmetic is carried out on 64-bit sign/magnitude intermediates and then
//! folded back into 32 bits by [`Rational::normalize_wide`]. When a reduced
//! result still does not fit, numerator and denominator are shifted right
//! together until it does. Precision degrades but nothing overflows or panics.
//!
//! Ordering is decided by expanding both operands into continued fractions in
//! lock-step, so comparisons never cross-multiply and cannot overflow.

use crate::num::gcd::{gcd_u32, gcd_u64};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

const MAX_WIDE_NUMERATOR: u64 = i32::MAX as u64;
const MAX_WIDE_DENOMINATOR: u64 = u32::MAX as u64;

/// A 32-bit rational number `numerator / denominator`.
///
/// In canonical form the sign lives in the numerator and the fraction is
/// reduced. Values whose numerator is `0` or `1`, or whose denominator is `0`
/// or `1`, are considered reduced as they are.
///
/// Equality and hashing are value based: both operands are normalized before
/// their fields are compared, and every finite zero is the same value.
///
/// # Examples
///
/// ```rust
/// # use tempora_core::math::rational::Rational;
///
/// let a = Rational::new(38_400, 24);
/// let b = Rational::new(1_600, 1);
/// assert_eq!(a + b, Rational::new(3_200, 1));
/// assert!(Rational::new(-1, 99) < Rational::new(32, 4));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Rational {
    numerator: i32,
    denominator: u32,
}

impl Rational {
    /// `0/1`.
    pub const ZERO: Self = Self::from_raw(0, 1);
    /// `1/1`.
    pub const ONE: Self = Self::from_raw(1, 1);
    /// Positive infinity, `1/0`.
    pub const INFINITY: Self = Self::from_raw(1, 0);
    /// Negative infinity, `-1/0`.
    pub const NEG_INFINITY: Self = Self::from_raw(-1, 0);

    /// Creates a rational in canonical form from a signed pair.
    ///
    /// If either input is zero the pair is kept as it is, so zero and the
    /// infinity sentinel are never reduced. A zero numerator keeps the
    /// magnitude of its denominator. Otherwise the sign is moved onto the
    /// numerator and both parts are divided by their GCD.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_core::math::rational::Rational;
    ///
    /// let r = Rational::new(32, 4);
    /// assert_eq!((r.numerator(), r.denominator()), (8, 1));
    ///
    /// let r = Rational::new(1, -99);
    /// assert_eq!((r.numerator(), r.denominator()), (-1, 99));
    ///
    /// let r = Rational::new(5, 0);
    /// assert_eq!((r.numerator(), r.denominator()), (5, 0));
    /// ```
    pub fn new(numerator: i32, denominator: i32) -> Self {
        if numerator == 0 || denominator == 0 {
            return Self::from_raw(numerator, denominator.unsigned_abs());
        }

        let negative = (numerator < 0) != (denominator < 0);
        Self::from_wide_parts(
            negative,
            u64::from(numerator.unsigned_abs()),
            u64::from(denominator.unsigned_abs()),
        )
    }

    /// Creates a rational from its raw parts without any reduction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_core::math::rational::Rational;
    ///
    /// let r = Rational::from_raw(12_800, 1_600);
    /// assert_eq!(r.numerator(), 12_800);
    /// assert_eq!(r.normalize().numerator(), 8);
    /// ```
    #[inline]
    pub const fn from_raw(numerator: i32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Creates the integer `n/1`.
    #[inline]
    pub const fn from_integer(n: i32) -> Self {
        Self::from_raw(n, 1)
    }

    /// Returns the numerator.
    #[inline]
    pub const fn numerator(&self) -> i32 {
        self.numerator
    }

    /// Returns the denominator.
    #[inline]
    pub const fn denominator(&self) -> u32 {
        self.denominator
    }

    /// Returns `true` if the denominator is zero.
    #[inline]
    pub const fn is_infinite(&self) -> bool {
        self.denominator == 0
    }

    /// Returns `true` for a finite value with a zero numerator.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.numerator == 0 && self.denominator != 0
    }

    /// Returns `+1` if the numerator is positive and `-1` otherwise.
    ///
    /// Zero reports `-1`; this never returns `0`.
    #[inline]
    pub const fn sign(&self) -> i32 {
        if self.numerator > 0 {
            1
        } else {
            -1
        }
    }

    /// Returns the absolute value. `i32::MIN` saturates to `i32::MAX`.
    #[inline]
    pub const fn abs(&self) -> Self {
        Self::from_raw(self.numerator.saturating_abs(), self.denominator)
    }

    /// Returns the negated value. `i32::MIN` saturates to `i32::MAX`.
    #[inline]
    pub const fn negate(&self) -> Self {
        Self::from_raw(self.numerator.saturating_neg(), self.denominator)
    }

    /// Returns the reciprocal, keeping the sign on the numerator.
    ///
    /// The reciprocal of a zero numerator is an infinity, and the reciprocal
    /// of an infinity is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_core::math::rational::Rational;
    ///
    /// let r = Rational::new(-3, 4).inverse();
    /// assert_eq!((r.numerator(), r.denominator()), (-4, 3));
    /// assert!(Rational::ZERO.inverse().is_infinite());
    /// ```
    pub fn inverse(&self) -> Self {
        Self::from_wide_parts(
            self.numerator < 0,
            u64::from(self.denominator),
            u64::from(self.numerator.unsigned_abs()),
        )
    }

    /// Rescales the numerator so that the value is expressed over `denominator`.
    ///
    /// The new numerator is truncated toward zero and saturates into the `i32`
    /// range. No reduction is applied. An infinite value is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_core::math::rational::Rational;
    ///
    /// let r = Rational::new(1, 3).force_den(1_000);
    /// assert_eq!((r.numerator(), r.denominator()), (333, 1_000));
    /// ```
    pub fn force_den(&self, denominator: u32) -> Self {
        if self.is_infinite() {
            return *self;
        }

        let scaled =
            i64::from(self.numerator) * i64::from(denominator) / i64::from(self.denominator);
        let numerator = scaled.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        Self::from_raw(numerator, denominator)
    }

    /// Reduces the value to lowest terms.
    ///
    /// Numerators of `0` or `1` and denominators of `0` or `1` are returned
    /// as they are. A value whose numerator equals its denominator becomes
    /// `1/1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_core::math::rational::Rational;
    ///
    /// let r = Rational::from_raw(12_800, 1_600).normalize();
    /// assert_eq!((r.numerator(), r.denominator()), (8, 1));
    /// ```
    pub fn normalize(&self) -> Self {
        if self.numerator == 0
            || self.numerator == 1
            || self.denominator == 0
            || self.denominator == 1
        {
            return *self;
        }
        if i64::from(self.numerator) == i64::from(self.denominator) {
            return Self::ONE;
        }

        let magnitude = self.numerator.unsigned_abs();
        let divisor = gcd_u32(magnitude, self.denominator);
        let reduced = i64::from(magnitude / divisor);
        let numerator = if self.numerator < 0 { -reduced } else { reduced };
        Self::from_raw(numerator as i32, self.denominator / divisor)
    }

    /// Reduces a 64-bit pair into a 32-bit rational.
    ///
    /// The pair is reduced by its GCD (with the same fast paths as
    /// [`Rational::normalize`]). If the reduced numerator magnitude exceeds
    /// `i32::MAX` or the denominator exceeds `u32::MAX`, both are shifted
    /// right one bit at a time until they fit. The ratio is kept within a
    /// multiplicative error and the result is always representable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_core::math::rational::Rational;
    ///
    /// let r = Rational::normalize_wide(24_702_345, 1_001_000);
    /// assert_eq!((r.numerator(), r.denominator()), (4_940_469, 200_200));
    ///
    /// // 6_000_000_001 / 4_000_000_000 does not fit and loses two low bits.
    /// let r = Rational::normalize_wide(6_000_000_001, 4_000_000_000);
    /// assert_eq!((r.numerator(), r.denominator()), (1_500_000_000, 1_000_000_000));
    /// ```
    pub fn normalize_wide(numerator: i64, denominator: u64) -> Self {
        Self::from_wide_parts(numerator < 0, numerator.unsigned_abs(), denominator)
    }

    fn from_wide_parts(negative: bool, magnitude: u64, denominator: u64) -> Self {
        if magnitude == 0 || magnitude == 1 || denominator == 0 || denominator == 1 {
            return Self::fit_wide(negative, magnitude, denominator);
        }
        if magnitude == denominator {
            return Self::fit_wide(negative, 1, 1);
        }

        let divisor = gcd_u64(magnitude, denominator);
        Self::fit_wide(negative, magnitude / divisor, denominator / divisor)
    }

    fn fit_wide(negative: bool, mut magnitude: u64, mut denominator: u64) -> Self {
        if magnitude > MAX_WIDE_NUMERATOR || denominator > MAX_WIDE_DENOMINATOR {
            let (wide_magnitude, wide_denominator) = (magnitude, denominator);
            let mut dropped = 0u32;
            while magnitude > MAX_WIDE_NUMERATOR || denominator > MAX_WIDE_DENOMINATOR {
                magnitude >>= 1;
                denominator >>= 1;
                dropped += 1;
            }
            log::trace!(
                "rational overflow: {}{}/{} does not fit 32 bits, dropped {} low bits to {}/{}",
                if negative { "-" } else { "" },
                wide_magnitude,
                wide_denominator,
                dropped,
                magnitude,
                denominator
            );
        }

        let magnitude = magnitude as i32;
        Self::from_raw(
            if negative { -magnitude } else { magnitude },
            denominator as u32,
        )
    }

    /// Adds two rationals.
    ///
    /// Signs and magnitudes are combined separately in 64 bits and the result
    /// is folded back with [`Rational::normalize_wide`].
    pub fn add(&self, rhs: &Self) -> Self {
        let lhs_magnitude = u64::from(self.numerator.unsigned_abs()) * u64::from(rhs.denominator);
        let rhs_magnitude = u64::from(rhs.numerator.unsigned_abs()) * u64::from(self.denominator);
        let denominator = u64::from(self.denominator) * u64::from(rhs.denominator);

        let lhs_negative = self.numerator < 0;
        let rhs_negative = rhs.numerator < 0;
        let (negative, magnitude) = if lhs_negative == rhs_negative {
            (lhs_negative, lhs_magnitude + rhs_magnitude)
        } else if lhs_magnitude >= rhs_magnitude {
            (lhs_negative, lhs_magnitude - rhs_magnitude)
        } else {
            (rhs_negative, rhs_magnitude - lhs_magnitude)
        };

        Self::from_wide_parts(negative, magnitude, denominator)
    }

    /// Subtracts `rhs`, as `self + (-rhs)`.
    #[inline]
    pub fn sub(&self, rhs: &Self) -> Self {
        self.add(&rhs.negate())
    }

    /// Multiplies two rationals.
    ///
    /// Each operand is reduced by its own GCD before the magnitudes are
    /// multiplied, which keeps the 64-bit products small.
    pub fn mul(&self, rhs: &Self) -> Self {
        let negative = self.sign() * rhs.sign() < 0;
        let lhs = self.abs_parts();
        let rhs = rhs.abs_parts();

        let magnitude = u64::from(lhs.0) * u64::from(rhs.0);
        let denominator = u64::from(lhs.1) * u64::from(rhs.1);
        Self::from_wide_parts(negative, magnitude, denominator)
    }

    /// Numerator magnitude and denominator, each divided by their GCD.
    #[inline]
    fn abs_parts(&self) -> (u32, u32) {
        let magnitude = self.numerator.unsigned_abs();
        let divisor = gcd_u32(magnitude, self.denominator).max(1);
        (magnitude / divisor, self.denominator / divisor)
    }

    /// Divides by `rhs`, as `self * rhs.inverse()`.
    #[inline]
    pub fn div(&self, rhs: &Self) -> Self {
        self.mul(&rhs.inverse())
    }

    /// Returns `true` if both values have the same normalized form.
    ///
    /// Infinities are only equal to infinities with the same numerator, since
    /// a zero denominator is never reduced.
    #[inline]
    pub fn equal(&self, other: &Self) -> bool {
        let a = self.normalize();
        let b = other.normalize();
        a.numerator == b.numerator && a.denominator == b.denominator
    }

    /// Returns `true` if `self` is strictly less than `other`.
    ///
    /// Infinite operands are not comparable and yield `false`, so a `false`
    /// result alone does not mean `self >= other`. Use [`PartialOrd`] when the
    /// distinction matters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_core::math::rational::Rational;
    ///
    /// let ntsc = Rational::new(2_400_000, 1_001);
    /// let film = Rational::new(2_400, 1);
    /// assert!(ntsc.less_than(&film));
    /// assert!(!film.less_than(&ntsc));
    /// assert!(!Rational::ZERO.less_than(&Rational::INFINITY));
    /// ```
    pub fn less_than(&self, other: &Self) -> bool {
        if self.is_infinite() || other.is_infinite() {
            return false;
        }

        let mut lhs = Expansion::new(self);
        let mut rhs = Expansion::new(other);
        let mut reversed = false;

        loop {
            // Continued-fraction terms compare lexicographically, with the
            // direction flipping at every term after the integer part.
            if lhs.quotient != rhs.quotient {
                return if reversed {
                    lhs.quotient > rhs.quotient
                } else {
                    lhs.quotient < rhs.quotient
                };
            }

            reversed = !reversed;
            if lhs.remainder == 0 || rhs.remainder == 0 {
                break;
            }
            lhs.advance();
            rhs.advance();
        }

        if lhs.remainder == rhs.remainder {
            return false;
        }

        // Exactly one expansion ended; its next term is infinite, so the
        // other operand is the lesser one modulo the current direction.
        (lhs.remainder != 0) != reversed
    }

    /// Returns `true` if `floor(self) < i`. Infinite values yield `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_core::math::rational::Rational;
    ///
    /// assert!(Rational::from_raw(12_345, 1_001).less_than_int(13));
    /// assert!(!Rational::from_raw(12_345, 1_000).less_than_int(12));
    /// ```
    pub fn less_than_int(&self, i: i32) -> bool {
        if self.is_infinite() {
            return false;
        }

        let quotient = i64::from(self.numerator).div_euclid(i64::from(self.denominator));
        quotient < i64::from(i)
    }

    /// Returns `numerator / denominator`, truncated toward zero.
    ///
    /// An infinite value saturates to `i32::MAX` or `i32::MIN` according to
    /// its sign, and `0/0` yields `0`.
    pub fn floor(&self) -> i32 {
        match (self.denominator, self.numerator.cmp(&0)) {
            (0, Ordering::Greater) => i32::MAX,
            (0, Ordering::Less) => i32::MIN,
            (0, Ordering::Equal) => 0,
            (denominator, _) => (i64::from(self.numerator) / i64::from(denominator)) as i32,
        }
    }
}

/// One operand's state in the lock-step Euclidean expansion.
struct Expansion {
    denominator: i64,
    quotient: i64,
    remainder: i64,
}

impl Expansion {
    #[inline]
    fn new(value: &Rational) -> Self {
        let numerator = i64::from(value.numerator);
        let denominator = i64::from(value.denominator);
        // Floor division keeps every remainder non-negative from the start.
        Self {
            denominator,
            quotient: numerator.div_euclid(denominator),
            remainder: numerator.rem_euclid(denominator),
        }
    }

    #[inline]
    fn advance(&mut self) {
        let numerator = self.denominator;
        self.denominator = self.remainder;
        self.quotient = numerator / self.denominator;
        self.remainder = numerator % self.denominator;
    }
}

impl Default for Rational {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Rational {
    /// Compares normalized forms. Every finite zero (`0/d`) is the same value.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        (self.is_zero() && other.is_zero()) || self.equal(other)
    }
}

impl Eq for Rational {}

impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normalized = if self.is_zero() {
            Self::ZERO
        } else {
            self.normalize()
        };
        normalized.numerator.hash(state);
        normalized.denominator.hash(state);
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        if self.is_infinite() || other.is_infinite() {
            return None;
        }
        if self.less_than(other) {
            Some(Ordering::Less)
        } else if other.less_than(self) {
            Some(Ordering::Greater)
        } else {
            Some(Ordering::Equal)
        }
    }
}

impl Neg for Rational {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.negate()
    }
}

impl Add for Rational {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Rational::add(&self, &rhs)
    }
}

impl Sub for Rational {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Rational::sub(&self, &rhs)
    }
}

impl Mul for Rational {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Rational::mul(&self, &rhs)
    }
}

impl Div for Rational {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Rational::div(&self, &rhs)
    }
}

impl AddAssign for Rational {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Rational {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Rational {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Rational {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl From<i32> for Rational {
    #[inline]
    fn from(n: i32) -> Self {
        Self::from_integer(n)
    }
}

impl From<(i32, i32)> for Rational {
    #[inline]
    fn from((numerator, denominator): (i32, i32)) -> Self {
        Self::new(numerator, denominator)
    }
}

impl std::fmt::Display for Rational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn parts(r: Rational) -> (i32, u32) {
        (r.numerator(), r.denominator())
    }

    // Zero numerators keep their denominator, so this also yields `0/d`.
    fn random_small(rng: &mut StdRng) -> Rational {
        Rational::new(
            rng.random_range(-16_384..=16_384),
            rng.random_range(1..=16_384),
        )
    }

    fn cross_less(a: Rational, b: Rational) -> bool {
        i128::from(a.numerator()) * i128::from(b.denominator())
            < i128::from(b.numerator()) * i128::from(a.denominator())
    }

    #[test]
    fn test_create_canonicalizes_sign_and_reduces() {
        assert_eq!(parts(Rational::new(32, 4)), (8, 1));
        assert_eq!(parts(Rational::new(-1, 99)), (-1, 99));
        assert_eq!(parts(Rational::new(1, -99)), (-1, 99));
        assert_eq!(parts(Rational::new(-11, -7)), (11, 7));
        assert_eq!(parts(Rational::new(38_400, 24)), (1_600, 1));
        assert_eq!(parts(Rational::new(7, 7)), (1, 1));
        assert_eq!(parts(Rational::new(-7, 7)), (-1, 1));
    }

    #[test]
    fn test_create_keeps_zero_and_infinity_verbatim() {
        assert_eq!(parts(Rational::new(0, 12)), (0, 12));
        assert_eq!(parts(Rational::new(0, -12)), (0, 12));
        assert_eq!(parts(Rational::new(-5, 0)), (-5, 0));
        assert!(Rational::new(-5, 0).is_infinite());
        assert!(!Rational::new(0, 12).is_infinite());
        assert!(Rational::new(0, 12).is_zero());
        assert!(!Rational::from_raw(0, 0).is_zero());
    }

    #[test]
    fn test_create_extreme_inputs_stay_representable() {
        assert_eq!(parts(Rational::new(i32::MIN, 2)), (-1_073_741_824, 1));
        assert_eq!(parts(Rational::new(i32::MIN, i32::MIN)), (1, 1));
        // 2^31 / 1 is one past i32::MAX and degrades to +infinity.
        let r = Rational::new(i32::MIN, -1);
        assert!(r.is_infinite());
        assert!(r.numerator() > 0);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(parts(Rational::from_raw(12_800, 1_600).normalize()), (8, 1));
        assert_eq!(parts(Rational::from_raw(-12_800, 1_600).normalize()), (-8, 1));
        assert_eq!(parts(Rational::from_raw(9, 9).normalize()), (1, 1));
        assert_eq!(parts(Rational::from_raw(i32::MIN, 4).normalize()), (-536_870_912, 1));
    }

    #[test]
    fn test_normalize_fast_paths_are_untouched() {
        assert_eq!(parts(Rational::from_raw(0, 12).normalize()), (0, 12));
        assert_eq!(parts(Rational::from_raw(1, 12).normalize()), (1, 12));
        assert_eq!(parts(Rational::from_raw(12, 0).normalize()), (12, 0));
        assert_eq!(parts(Rational::from_raw(12, 1).normalize()), (12, 1));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1_000 {
            let r = Rational::from_raw(rng.random(), rng.random());
            let once = r.normalize();
            assert_eq!(parts(once.normalize()), parts(once));
        }
    }

    #[test]
    fn test_normalize_wide_reduces() {
        assert_eq!(parts(Rational::normalize_wide(24_702_345, 1_001_000)), (4_940_469, 200_200));
        assert_eq!(parts(Rational::normalize_wide(-10, 4)), (-5, 2));
        assert_eq!(parts(Rational::normalize_wide(1 << 40, 1 << 38)), (4, 1));
        assert_eq!(parts(Rational::normalize_wide(6, 6)), (1, 1));
    }

    #[test]
    fn test_normalize_wide_shifts_when_out_of_range() {
        let r = Rational::normalize_wide(6_000_000_001, 4_000_000_000);
        assert_eq!(parts(r), (1_500_000_000, 1_000_000_000));
        assert_eq!(r, Rational::new(3, 2));

        let r = Rational::normalize_wide(-6_000_000_001, 4_000_000_000);
        assert_eq!(parts(r), (-1_500_000_000, 1_000_000_000));

        // An integer that overflows loses its denominator entirely.
        let r = Rational::normalize_wide(1 << 33, 1);
        assert!(r.is_infinite());
        assert_eq!(r.numerator(), 1 << 30);
    }

    #[test]
    fn test_sign_abs_negate() {
        assert_eq!(Rational::new(3, 4).sign(), 1);
        assert_eq!(Rational::new(-3, 4).sign(), -1);
        assert_eq!(Rational::ZERO.sign(), -1);
        assert_eq!(parts(Rational::new(-3, 4).abs()), (3, 4));
        assert_eq!(parts(Rational::new(3, 4).negate()), (-3, 4));
        assert_eq!(parts(-Rational::new(-3, 4)), (3, 4));
        assert_eq!(Rational::from_raw(i32::MIN, 1).abs().numerator(), i32::MAX);
    }

    #[test]
    fn test_inverse() {
        assert_eq!(parts(Rational::new(3, 4).inverse()), (4, 3));
        assert_eq!(parts(Rational::new(-3, 4).inverse()), (-4, 3));
        assert_eq!(parts(Rational::ZERO.inverse()), (1, 0));
        assert_eq!(parts(Rational::INFINITY.inverse()), (0, 1));
        assert_eq!(Rational::new(7, 5).inverse().inverse(), Rational::new(7, 5));
    }

    #[test]
    fn test_force_den() {
        assert_eq!(parts(Rational::new(1, 3).force_den(1_000)), (333, 1_000));
        assert_eq!(parts(Rational::new(-1, 3).force_den(1_000)), (-333, 1_000));
        assert_eq!(parts(Rational::new(1, 24).force_den(48_000)), (2_000, 48_000));
        assert_eq!(parts(Rational::INFINITY.force_den(10)), (1, 0));
        assert_eq!(Rational::new(i32::MAX, 1).force_den(4).numerator(), i32::MAX);
    }

    #[test]
    fn test_equal() {
        let a = Rational::new(32, 4);
        let b = Rational::new(-1, 99);
        let c = Rational::new(1, -99);
        let d = Rational::new(-11, -7);
        assert!(b.equal(&c));
        assert!(Rational::new(38_400, 24).equal(&Rational::new(1_600, 1)));
        assert!(!a.equal(&b));
        assert!(!c.equal(&d));
        assert!(Rational::from_raw(2, 4).equal(&Rational::from_raw(1, 2)));
        assert!(!Rational::from_raw(5, 0).equal(&Rational::INFINITY));
    }

    #[test]
    fn test_equal_is_an_equivalence() {
        let values = [
            Rational::from_raw(2, 4),
            Rational::from_raw(1, 2),
            Rational::from_raw(-3, 6),
            Rational::from_raw(50, 100),
            Rational::from_raw(-1, 2),
        ];
        for a in values {
            assert!(a.equal(&a));
            for b in values {
                assert_eq!(a.equal(&b), b.equal(&a));
                for c in values {
                    if a.equal(&b) && b.equal(&c) {
                        assert!(a.equal(&c));
                    }
                }
            }
        }
    }

    #[test]
    fn test_add_literals() {
        let e = Rational::new(38_400, 24);
        let f = Rational::new(1_600, 1);
        assert_eq!(e + f, Rational::new(3_200, 1));

        let sum = Rational::from_raw(12_345, 1_001) + Rational::from_raw(12_345, 1_000);
        assert!(sum.equal(&Rational::from_raw(24_702_345, 1_001_000)));
    }

    #[test]
    fn test_add_mixed_signs() {
        assert_eq!(Rational::new(-1, 2) + Rational::new(1, 3), Rational::new(-1, 6));
        assert_eq!(Rational::new(1, 2) + Rational::new(-1, 3), Rational::new(1, 6));
        assert!((Rational::new(1, 2) - Rational::new(1, 2)).is_zero());
        assert_eq!(Rational::new(-1, 2) - Rational::new(1, 2), Rational::new(-1, 1));
    }

    #[test]
    fn test_add_overflow_degrades_to_infinity() {
        let big = Rational::from_integer(i32::MAX);
        let sum = big + big;
        assert!(sum.is_infinite());
        assert!(sum.numerator() > 0);
    }

    #[test]
    fn test_add_infinity_stays_infinite() {
        assert!((Rational::INFINITY + Rational::new(1, 2)).is_infinite());
        assert!((Rational::new(1, 2) - Rational::INFINITY).is_infinite());
    }

    #[test]
    fn test_mul_and_div() {
        let a = Rational::new(32, 4);
        let f = Rational::new(1_600, 1);
        let k = a * f;
        let l = Rational::new(8 * 1_600, 1);
        assert_eq!(k, l);
        assert_eq!((l / f).normalize(), a);

        assert_eq!(Rational::new(-2, 3) * Rational::new(3, 4), Rational::new(-1, 2));
        assert_eq!(Rational::new(-2, 3) * Rational::new(-3, 4), Rational::new(1, 2));
        assert_eq!(Rational::new(-2, 3) / Rational::new(-4, 9), Rational::new(3, 2));
        assert!((Rational::ZERO * Rational::new(-5, 7)).is_zero());
        assert!((Rational::ONE / Rational::ZERO).is_infinite());
    }

    #[test]
    fn test_assign_operators() {
        let mut r = Rational::new(1, 2);
        r += Rational::new(1, 3);
        assert_eq!(r, Rational::new(5, 6));
        r -= Rational::new(1, 6);
        assert_eq!(r, Rational::new(2, 3));
        r *= Rational::new(3, 2);
        assert_eq!(r, Rational::ONE);
        r /= Rational::new(1, 24);
        assert_eq!(r, Rational::from_integer(24));
    }

    #[test]
    fn test_arithmetic_identities_without_overflow() {
        let mut rng = StdRng::seed_from_u64(0xF00D);
        for _ in 0..5_000 {
            let a = random_small(&mut rng);
            let b = random_small(&mut rng);
            if a.is_zero() {
                continue;
            }
            assert_eq!((a + b) - b, a, "({a} + {b}) - {b}");
            assert_eq!(a + b, b + a);
            if !b.is_zero() {
                assert_eq!((a * b) / b, a, "({a} * {b}) / {b}");
            }
        }
    }

    #[test]
    fn test_less_than_literals() {
        let a = Rational::new(32, 4);
        let b = Rational::new(-1, 99);
        let d = Rational::new(-11, -7);
        let e = Rational::new(38_400, 24);
        let f = Rational::new(1_600, 1);
        let g = Rational::new(100 * 24_000, 1_000);
        let h = Rational::new(100 * 24_000, 1_001);

        assert!(b.less_than(&a));
        assert!(!a.less_than(&b));
        assert!(!e.less_than(&f));
        assert!(d.less_than(&a));
        assert!(!a.less_than(&d));
        assert!(a.less_than(&f));
        assert!(!f.less_than(&a));
        assert!(h.less_than(&g));
        assert!(!g.less_than(&h));
    }

    #[test]
    fn test_less_than_when_one_expansion_ends_first() {
        assert!(Rational::ONE.less_than(&Rational::new(3, 2)));
        assert!(!Rational::new(3, 2).less_than(&Rational::ONE));
        assert!(Rational::ZERO.less_than(&Rational::new(1, 2)));
        assert!(Rational::new(-1, 2).less_than(&Rational::new(-1, 3)));
        assert!(!Rational::new(-1, 3).less_than(&Rational::new(-1, 2)));
        assert!(!Rational::from_raw(2, 4).less_than(&Rational::from_raw(1, 2)));
    }

    #[test]
    fn test_less_than_near_limits() {
        let a = Rational::from_raw(i32::MAX, u32::MAX);
        let b = Rational::from_raw(i32::MAX - 1, u32::MAX);
        assert!(b.less_than(&a));
        assert!(!a.less_than(&b));
        assert!(Rational::from_raw(i32::MIN, 1).less_than(&Rational::from_raw(i32::MAX, 1)));
    }

    #[test]
    fn test_less_than_infinity_is_not_comparable() {
        assert!(!Rational::ZERO.less_than(&Rational::INFINITY));
        assert!(!Rational::INFINITY.less_than(&Rational::ZERO));
        assert!(!Rational::NEG_INFINITY.less_than(&Rational::ZERO));
        assert_eq!(Rational::ZERO.partial_cmp(&Rational::INFINITY), None);
        assert_eq!(
            Rational::INFINITY.partial_cmp(&Rational::INFINITY),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn test_less_than_matches_cross_multiplication() {
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        for _ in 0..10_000 {
            let a = Rational::from_raw(rng.random(), rng.random_range(1..=u32::MAX));
            let b = Rational::from_raw(rng.random(), rng.random_range(1..=u32::MAX));
            assert_eq!(a.less_than(&b), cross_less(a, b), "{a} < {b}");
            assert_eq!(!a.less_than(&b) && !b.less_than(&a), a.equal(&b));
        }
    }

    #[test]
    fn test_less_than_on_close_small_values() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10_000 {
            let a = random_small(&mut rng);
            let b = random_small(&mut rng);
            assert_eq!(a.less_than(&b), cross_less(a, b), "{a} < {b}");
            assert_eq!(!a.less_than(&b) && !b.less_than(&a), a == b);
        }
    }

    #[test]
    fn test_partial_ord() {
        assert!(Rational::new(1, 3) < Rational::new(1, 2));
        assert!(Rational::new(-1, 3) > Rational::new(-1, 2));
        assert!(Rational::new(2, 4) <= Rational::new(1, 2));
        assert!(!(Rational::ONE < Rational::INFINITY));
        assert!(!(Rational::ONE > Rational::INFINITY));
    }

    #[test]
    fn test_partial_ord_treats_zero_forms_as_equal() {
        let z = Rational::new(1, 2) - Rational::new(1, 2);
        assert_eq!(parts(z), (0, 4));
        assert_eq!(z, Rational::ZERO);
        assert_eq!(z.partial_cmp(&Rational::ZERO), Some(Ordering::Equal));
        assert_eq!(Rational::ZERO.partial_cmp(&z), Some(Ordering::Equal));
        assert!(!(z > Rational::ZERO) && !(Rational::ZERO > z));
        assert!(Rational::new(-1, 3) < z && z < Rational::new(1, 3));

        // The inherent operation still compares the stored forms.
        assert!(!z.equal(&Rational::ZERO));
    }

    #[test]
    fn test_partial_ord_is_antisymmetric() {
        let mut rng = StdRng::seed_from_u64(0xA5A5);
        for _ in 0..10_000 {
            let mut a = random_small(&mut rng);
            let b = random_small(&mut rng);
            if rng.random_range(0..8) == 0 {
                a = b - b;
            }
            let forward = a.partial_cmp(&b);
            let backward = b.partial_cmp(&a);
            assert_eq!(forward, backward.map(Ordering::reverse), "{a} vs {b}");
            assert_eq!(forward == Some(Ordering::Equal), a == b, "{a} vs {b}");
        }
    }

    #[test]
    fn test_less_than_int() {
        let a3 = Rational::from_raw(12_345, 1_001);
        let a4 = Rational::from_raw(12_345, 1_000);
        let a6 = a3 + a4;
        assert!(a3.less_than_int(13));
        assert!(!a4.less_than_int(12));
        assert!(a4.less_than_int(13));
        assert!(!a6.less_than_int(24));
        assert!(a6.less_than_int(25));

        // floor(-1/2) is -1.
        assert!(Rational::new(-1, 2).less_than_int(0));
        assert!(!Rational::new(-1, 2).less_than_int(-1));
        assert!(!Rational::INFINITY.less_than_int(i32::MAX));
    }

    #[test]
    fn test_floor_truncates() {
        assert_eq!(Rational::new(606, 25).floor(), 24);
        assert_eq!(Rational::new(-7, 2).floor(), -3);
        assert_eq!(Rational::from_raw(i32::MIN, 1).floor(), i32::MIN);
        assert_eq!(Rational::INFINITY.floor(), i32::MAX);
        assert_eq!(Rational::NEG_INFINITY.floor(), i32::MIN);
        assert_eq!(Rational::from_raw(0, 0).floor(), 0);
    }

    #[test]
    fn test_hash_is_consistent_with_eq() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Rational::from_raw(2, 4));
        assert!(set.contains(&Rational::new(1, 2)));
        assert!(!set.insert(Rational::from_raw(-4, 8).abs()));

        set.insert(Rational::ZERO);
        assert!(set.contains(&Rational::new(0, 9)));
        assert!(set.contains(&(Rational::new(3, 5) - Rational::new(3, 5))));
    }

    #[test]
    fn test_conversions_and_display() {
        assert_eq!(Rational::from(5), Rational::from_raw(5, 1));
        assert_eq!(Rational::from((6, -4)), Rational::new(-3, 2));
        assert_eq!(Rational::new(-3, 2).to_string(), "-3/2");
        assert_eq!(Rational::INFINITY.to_string(), "1/0");
        assert_eq!(Rational::default(), Rational::ZERO);
    }
}
