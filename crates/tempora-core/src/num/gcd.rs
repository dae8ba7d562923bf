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

//! Greatest common divisor and least common multiple primitives.
//!
//! The GCD is computed with Stein's binary algorithm, which only needs shifts,
//! comparisons and subtractions. A single generic implementation backs both
//! widths required by the rational core: `u32` for values that are already in
//! canonical form, and `u64` for the widened intermediates produced by
//! rational arithmetic before they are folded back into 32 bits.

use num_traits::{PrimInt, Unsigned};

/// Computes the greatest common divisor of `u` and `v` using Stein's algorithm.
///
/// `gcd(0, v) == v` and `gcd(u, 0) == u`; in particular `gcd(0, 0) == 0`.
///
/// # Examples
///
/// ```rust
/// # use tempora_core::num::gcd::binary_gcd;
///
/// assert_eq!(binary_gcd(120u32, 16u32), 8);
/// assert_eq!(binary_gcd(38_400u64, 12_000u64), 2_400);
/// assert_eq!(binary_gcd(0u32, 7u32), 7);
/// ```
pub fn binary_gcd<T>(mut u: T, mut v: T) -> T
where
    T: PrimInt + Unsigned,
{
    if u == T::zero() {
        return v;
    }
    if v == T::zero() || u == v {
        return u;
    }

    let mut shift = 0usize;
    while u != T::zero() && v != T::zero() && u != v {
        let u_even = u & T::one() == T::zero();
        let v_even = v & T::one() == T::zero();
        match (u_even, v_even) {
            (true, true) => {
                // Common factor of two, remembered in `shift`.
                shift += 1;
                u = u >> 1;
                v = v >> 1;
            }
            (true, false) => u = u >> 1,
            (false, true) => v = v >> 1,
            (false, false) if u > v => u = (u - v) >> 1,
            (false, false) => {
                let smaller = u;
                u = (v - u) >> 1;
                v = smaller;
            }
        }
    }

    if u == T::zero() {
        v << shift
    } else {
        u << shift
    }
}

/// Computes the greatest common divisor of two 32-bit operands.
///
/// # Examples
///
/// ```rust
/// # use tempora_core::num::gcd::gcd_u32;
///
/// assert_eq!(gcd_u32(11, 7), 1);
/// assert_eq!(gcd_u32(22_000, 33_000), 11_000);
/// ```
#[inline]
pub fn gcd_u32(u: u32, v: u32) -> u32 {
    binary_gcd(u, v)
}

/// Computes the greatest common divisor of two 64-bit operands.
///
/// Used for the widened numerator/denominator pairs produced by rational
/// arithmetic, which may exceed the 32-bit range before reduction.
#[inline]
pub fn gcd_u64(u: u64, v: u64) -> u64 {
    binary_gcd(u, v)
}

/// Computes the least common multiple of two unsigned 32-bit operands.
///
/// The product is formed in 64 bits, so it never overflows before the
/// division by the GCD. A result that does not fit into `u32` saturates to
/// `u32::MAX`. If either operand is zero the result is zero.
///
/// # Examples
///
/// ```rust
/// # use tempora_core::num::gcd::lcm_unsigned;
///
/// assert_eq!(lcm_unsigned(11, 7), 77);
/// assert_eq!(lcm_unsigned(24, 16), 48);
/// ```
pub fn lcm_unsigned(u: u32, v: u32) -> u32 {
    let divisor = gcd_u32(u, v);
    if divisor == 0 {
        return 0;
    }
    let product = u64::from(u) * u64::from(v);
    u32::try_from(product / u64::from(divisor)).unwrap_or(u32::MAX)
}

/// Computes the least common multiple of two signed 32-bit operands.
///
/// The sign is moved off the divisor `v` first (both operands are negated
/// when `v` is negative), the multiple is computed on the magnitudes, and
/// the sign of the resulting dividend `u` is applied to the result. Results
/// outside the `i32` range saturate.
///
/// # Examples
///
/// ```rust
/// # use tempora_core::num::gcd::lcm_signed;
///
/// assert_eq!(lcm_signed(24, 16), 48);
/// assert_eq!(lcm_signed(-4, 6), -12);
/// assert_eq!(lcm_signed(4, -6), -12);
/// ```
pub fn lcm_signed(u: i32, v: i32) -> i32 {
    let (mut u, mut v) = (i64::from(u), i64::from(v));
    if v < 0 {
        u = -u;
        v = -v;
    }

    let negative = u < 0;
    let u_abs = u.unsigned_abs();
    let v_abs = v.unsigned_abs();
    let divisor = gcd_u64(u_abs, v_abs);
    if divisor == 0 {
        return 0;
    }

    let magnitude = (u_abs * v_abs) / divisor;
    if negative {
        i32::try_from(-(magnitude as i128)).unwrap_or(i32::MIN)
    } else {
        i32::try_from(magnitude).unwrap_or(i32::MAX)
    }
}
