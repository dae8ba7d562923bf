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

//! # Tempora Core
//!
//! Fixed-width exact arithmetic for frame-accurate timelines. This crate holds
//! the numeric primitives that the interval model in `tempora-model` is built
//! on, without any floating-point math.
//!
//! ## Modules
//!
//! - `num`: Integer primitives, namely binary (Stein) GCD at 32 and 64 bits
//!   and signed/unsigned LCM with widened intermediates.
//! - `math`: The [`math::rational::Rational`] type with canonicalization,
//!   overflow-tolerant 64-to-32-bit reduction, arithmetic, and an ordering
//!   based on continued-fraction expansion that never cross-multiplies.
//!
//! ## Overflow policy
//!
//! Nothing in this crate panics on overflow. A zero denominator encodes
//! infinity, and arithmetic results that do not fit 32 bits lose low bits
//! from numerator and denominator together. Such precision loss is reported
//! through the `log` facade at trace level.

pub mod math;
pub mod num;
