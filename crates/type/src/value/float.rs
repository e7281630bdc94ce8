// SPDX-License-Identifier: MIT
// Copyright (c) 2025 mintdb

use std::cmp::Ordering;

/// Total order over `f32` used by every float comparison in the crate.
///
/// IEEE ordering for ordinary values (`-0.0 == 0.0`); NaN equals NaN and is
/// greater than every other value, `+inf` included.
#[inline]
pub fn compare_f32(l: f32, r: f32) -> Ordering {
	match (l.is_nan(), r.is_nan()) {
		(true, true) => Ordering::Equal,
		(true, false) => Ordering::Greater,
		(false, true) => Ordering::Less,
		(false, false) => l.partial_cmp(&r).unwrap_or(Ordering::Equal),
	}
}

/// Bit pattern that is equal for values `compare_f32` considers equal.
#[inline]
pub(crate) fn canonical_bits(v: f32) -> u32 {
	if v.is_nan() {
		f32::NAN.to_bits()
	} else if v == 0.0 {
		0
	} else {
		v.to_bits()
	}
}
