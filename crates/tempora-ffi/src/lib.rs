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

//! # Tempora FFI
//!
//! **C-Compatible Bindings for Tempora Rationals and Time Intervals.**
//!
//! Exposes the rational core and the interval algebra to C, C++, Python and
//! other hosts through a plain-value ABI.
//!
//! ## Core Design Principles
//!
//! 1.  **Value Types Only**: `FfiRational` and `FfiTimeInterval` are `#[repr(C)]`
//!     structs passed and returned by value. No heap memory crosses the
//!     boundary, so there is nothing to allocate or free.
//! 2.  **No Failure Paths**: Every function is total. Division by zero yields
//!     the infinity encoding (`denominator == 0`), comparisons involving
//!     infinity return `false`, and overflowing arithmetic loses precision
//!     instead of aborting.
//! 3.  **Stable Names**: Every exported symbol is prefixed with `tempora_`.

pub mod interval;
pub mod rational;
