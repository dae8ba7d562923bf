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

//! # Foreign Function Interface (FFI) for Rationals
//!
//! C-compatible access to the GCD/LCM primitives and to every `Rational`
//! operation.
//!
//! ## Exported API
//!
//! ### Integer Primitives
//! * `tempora_gcd32`, `tempora_gcd64`
//! * `tempora_lcm32`, `tempora_lcm32u`
//!
//! ### Construction & Normalization
//! * `tempora_rational_create`
//! * `tempora_rational_normalize`
//! * `tempora_rational_normalize_wide`
//! * `tempora_rational_force_den`
//!
//! ### Unary Operations & Queries
//! * `tempora_rational_sign`, `tempora_rational_abs`, `tempora_rational_negate`
//! * `tempora_rational_inverse`, `tempora_rational_is_inf`, `tempora_rational_floor`
//!
//! ### Arithmetic
//! * `tempora_rational_add`, `tempora_rational_sub`
//! * `tempora_rational_mul`, `tempora_rational_div`
//!
//! ### Comparison
//! * `tempora_rational_equal`
//! * `tempora_rational_less_than`, `tempora_rational_less_than_int`
//!
//! ### Data Structures
//! * `FfiRational`

use tempora_core::math::rational::Rational;
use tempora_core::num::gcd::{gcd_u32, gcd_u64, lcm_signed, lcm_unsigned};

/// A C-compatible representation of a rational number `numerator / denominator`.
///
/// A zero denominator encodes infinity.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FfiRational {
    pub numerator: i32,
    pub denominator: u32,
}

impl FfiRational {
    /// Creates a new `FfiRational` from raw parts.
    #[inline]
    pub fn new(numerator: i32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

impl From<Rational> for FfiRational {
    fn from(value: Rational) -> Self {
        Self::new(value.numerator(), value.denominator())
    }
}

impl From<FfiRational> for Rational {
    fn from(val: FfiRational) -> Self {
        Rational::from_raw(val.numerator, val.denominator)
    }
}

impl std::fmt::Display for FfiRational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[inline]
fn unary(r: FfiRational, op: impl FnOnce(&Rational) -> Rational) -> FfiRational {
    op(&r.into()).into()
}

#[inline]
fn binary(
    lhs: FfiRational,
    rhs: FfiRational,
    op: impl FnOnce(&Rational, &Rational) -> Rational,
) -> FfiRational {
    op(&lhs.into(), &rhs.into()).into()
}

/// Returns the greatest common divisor of two 32-bit operands.
#[no_mangle]
pub extern "C" fn tempora_gcd32(u: u32, v: u32) -> u32 {
    gcd_u32(u, v)
}

/// Returns the greatest common divisor of two 64-bit operands.
#[no_mangle]
pub extern "C" fn tempora_gcd64(u: u64, v: u64) -> u64 {
    gcd_u64(u, v)
}

/// Returns the signed least common multiple of `u` and `v`.
#[no_mangle]
pub extern "C" fn tempora_lcm32(u: i32, v: i32) -> i32 {
    lcm_signed(u, v)
}

/// Returns the unsigned least common multiple of `u` and `v`.
#[no_mangle]
pub extern "C" fn tempora_lcm32u(u: u32, v: u32) -> u32 {
    lcm_unsigned(u, v)
}

/// Creates a canonical rational from a signed numerator and denominator.
#[no_mangle]
pub extern "C" fn tempora_rational_create(numerator: i32, denominator: i32) -> FfiRational {
    Rational::new(numerator, denominator).into()
}

/// Reduces a rational to lowest terms.
#[no_mangle]
pub extern "C" fn tempora_rational_normalize(r: FfiRational) -> FfiRational {
    unary(r, Rational::normalize)
}

/// Reduces a 64-bit pair into a 32-bit rational, dropping low bits if needed.
#[no_mangle]
pub extern "C" fn tempora_rational_normalize_wide(numerator: i64, denominator: u64) -> FfiRational {
    Rational::normalize_wide(numerator, denominator).into()
}

/// Rescales `r` onto `denominator`, truncating the numerator.
#[no_mangle]
pub extern "C" fn tempora_rational_force_den(r: FfiRational, denominator: u32) -> FfiRational {
    Rational::from(r).force_den(denominator).into()
}

/// Returns `+1` for a positive numerator and `-1` otherwise.
#[no_mangle]
pub extern "C" fn tempora_rational_sign(r: FfiRational) -> i32 {
    Rational::from(r).sign()
}

/// Returns the absolute value.
#[no_mangle]
pub extern "C" fn tempora_rational_abs(r: FfiRational) -> FfiRational {
    unary(r, Rational::abs)
}

/// Returns the negated value.
#[no_mangle]
pub extern "C" fn tempora_rational_negate(r: FfiRational) -> FfiRational {
    unary(r, Rational::negate)
}

/// Returns the reciprocal.
#[no_mangle]
pub extern "C" fn tempora_rational_inverse(r: FfiRational) -> FfiRational {
    unary(r, Rational::inverse)
}

/// Returns `true` if the denominator is zero.
#[no_mangle]
pub extern "C" fn tempora_rational_is_inf(r: FfiRational) -> bool {
    Rational::from(r).is_infinite()
}

/// Returns `numerator / denominator` truncated toward zero.
#[no_mangle]
pub extern "C" fn tempora_rational_floor(r: FfiRational) -> i32 {
    Rational::from(r).floor()
}

/// Returns `lhs + rhs`.
#[no_mangle]
pub extern "C" fn tempora_rational_add(lhs: FfiRational, rhs: FfiRational) -> FfiRational {
    binary(lhs, rhs, Rational::add)
}

/// Returns `lhs - rhs`.
#[no_mangle]
pub extern "C" fn tempora_rational_sub(lhs: FfiRational, rhs: FfiRational) -> FfiRational {
    binary(lhs, rhs, Rational::sub)
}

/// Returns `lhs * rhs`.
#[no_mangle]
pub extern "C" fn tempora_rational_mul(lhs: FfiRational, rhs: FfiRational) -> FfiRational {
    binary(lhs, rhs, Rational::mul)
}

/// Returns `lhs / rhs`.
#[no_mangle]
pub extern "C" fn tempora_rational_div(lhs: FfiRational, rhs: FfiRational) -> FfiRational {
    binary(lhs, rhs, Rational::div)
}

/// Returns `true` if both values reduce to the same fraction.
#[no_mangle]
pub extern "C" fn tempora_rational_equal(lhs: FfiRational, rhs: FfiRational) -> bool {
    Rational::from(lhs).equal(&rhs.into())
}

/// Returns `true` if `lhs < rhs`. Infinite operands are not comparable and
/// yield `false`.
#[no_mangle]
pub extern "C" fn tempora_rational_less_than(lhs: FfiRational, rhs: FfiRational) -> bool {
    Rational::from(lhs).less_than(&rhs.into())
}

/// Returns `true` if `floor(r) < i`. Infinite values yield `false`.
#[no_mangle]
pub extern "C" fn tempora_rational_less_than_int(r: FfiRational, i: i32) -> bool {
    Rational::from(r).less_than_int(i)
}
