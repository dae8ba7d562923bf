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

//! # Tempora Model
//!
//! Time intervals over exact rationals, for timelines that must stay
//! frame accurate (editing, muxing, scheduling of media units).
//!
//! * **`time`**: `TimeInterval`, a `[start, end)` range with a frame rate,
//!   the interval relations of Allen's algebra that timeline code needs
//!   (precedes, meets, overlaps, starts, during, ends, equal, and the derived
//!   disjoint, subset and within), duration, and quantization of an interval
//!   to whole frames.
//!
//! All bounds are [`tempora_core::math::rational::Rational`] values, so no
//! operation accumulates floating-point drift.

pub mod time;
