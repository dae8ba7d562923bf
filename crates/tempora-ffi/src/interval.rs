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

//! # Foreign Function Interface (FFI) for Time Intervals
//!
//! C-compatible access to the `TimeInterval` relations and rate
//! quantization. Intervals are passed by value as `FfiTimeInterval`.

use crate::rational::FfiRational;
use tempora_model::time::TimeInterval;

/// A C-compatible half-open interval `[start, end)` sampled at `rate`.
///
/// A `rate` with a zero denominator marks a continuous interval.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FfiTimeInterval {
    pub start: FfiRational,
    pub end: FfiRational,
    pub rate: FfiRational,
}

impl From<TimeInterval> for FfiTimeInterval {
    fn from(value: TimeInterval) -> Self {
        Self {
            start: value.start().into(),
            end: value.end().into(),
            rate: value.rate().into(),
        }
    }
}

impl From<FfiTimeInterval> for TimeInterval {
    fn from(val: FfiTimeInterval) -> Self {
        TimeInterval::new(val.start.into(), val.end.into(), val.rate.into())
    }
}

#[inline]
fn relation(
    lhs: FfiTimeInterval,
    rhs: FfiTimeInterval,
    op: impl FnOnce(&TimeInterval, &TimeInterval) -> bool,
) -> bool {
    op(&lhs.into(), &rhs.into())
}

/// Returns `true` if the interval's bounds are finite and `start < end`.
#[no_mangle]
pub extern "C" fn tempora_interval_well_formed(i: FfiTimeInterval) -> bool {
    TimeInterval::from(i).well_formed()
}

/// Returns `true` if `a` ends strictly before `b` starts.
#[no_mangle]
pub extern "C" fn tempora_interval_precedes(a: FfiTimeInterval, b: FfiTimeInterval) -> bool {
    relation(a, b, TimeInterval::precedes)
}

/// Returns `true` if `a` ends exactly where `b` starts.
#[no_mangle]
pub extern "C" fn tempora_interval_meets(a: FfiTimeInterval, b: FfiTimeInterval) -> bool {
    relation(a, b, TimeInterval::meets)
}

/// Returns `true` if `a` starts first and `b` starts inside `a`.
#[no_mangle]
pub extern "C" fn tempora_interval_overlaps(a: FfiTimeInterval, b: FfiTimeInterval) -> bool {
    relation(a, b, TimeInterval::overlaps)
}

/// Returns `true` if `a` shares `b`'s start and ends before it.
#[no_mangle]
pub extern "C" fn tempora_interval_starts(a: FfiTimeInterval, b: FfiTimeInterval) -> bool {
    relation(a, b, TimeInterval::starts)
}

/// Returns `true` if `a` lies strictly inside `b`.
#[no_mangle]
pub extern "C" fn tempora_interval_during(a: FfiTimeInterval, b: FfiTimeInterval) -> bool {
    relation(a, b, TimeInterval::during)
}

/// Returns `true` if `a` shares `b`'s end and starts after it.
#[no_mangle]
pub extern "C" fn tempora_interval_ends(a: FfiTimeInterval, b: FfiTimeInterval) -> bool {
    relation(a, b, TimeInterval::ends)
}

/// Returns `true` if both intervals have equal bounds.
#[no_mangle]
pub extern "C" fn tempora_interval_equal(a: FfiTimeInterval, b: FfiTimeInterval) -> bool {
    relation(a, b, TimeInterval::equal)
}

/// Returns `true` if the intervals share no time.
#[no_mangle]
pub extern "C" fn tempora_interval_disjoint(a: FfiTimeInterval, b: FfiTimeInterval) -> bool {
    relation(a, b, TimeInterval::disjoint)
}

/// Returns `true` if `a` is contained in `b`. Operands need not be well formed.
#[no_mangle]
pub extern "C" fn tempora_interval_subset(a: FfiTimeInterval, b: FfiTimeInterval) -> bool {
    relation(a, b, TimeInterval::subset)
}

/// Returns `true` if `a` is a subset of `b` without being equal to it.
#[no_mangle]
pub extern "C" fn tempora_interval_within(a: FfiTimeInterval, b: FfiTimeInterval) -> bool {
    relation(a, b, TimeInterval::within)
}

/// Returns `end - start`.
#[no_mangle]
pub extern "C" fn tempora_interval_duration(i: FfiTimeInterval) -> FfiRational {
    TimeInterval::from(i).duration().into()
}

/// Returns the number of whole frames of `rate` that fit in the interval.
#[no_mangle]
pub extern "C" fn tempora_interval_rate_frames(i: FfiTimeInterval) -> i32 {
    TimeInterval::from(i).rate_frames()
}

/// Returns the interval with its end snapped to the last whole frame.
#[no_mangle]
pub extern "C" fn tempora_interval_rate_conform(i: FfiTimeInterval) -> FfiTimeInterval {
    TimeInterval::from(i).rate_conform().into()
}
