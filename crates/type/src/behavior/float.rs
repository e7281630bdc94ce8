// SPDX-License-Identifier: MIT
// Copyright (c) 2025 mintdb

use std::cmp::Ordering;

use crate::{
	Result,
	behavior::{CastCost, TypeBehavior, kind_mismatch, operands, parse::parse_float, unsupported_cast},
	error::TypeError,
	value::{ScalarKind, Value, float::compare_f32},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct FloatType;

// 2^31, exactly representable in f32
const I32_UPPER: f32 = 2_147_483_648.0;

/// Rounds half away from zero; NaN and values outside i32 do not convert.
fn to_int(v: f32) -> Result<i32> {
	let rounded = v.round();
	if rounded.is_nan() || rounded < -I32_UPPER || rounded >= I32_UPPER {
		return Err(TypeError::NumericOverflow {
			text: v.to_string(),
			target: ScalarKind::Integer,
		}
		.into());
	}
	Ok(rounded as i32)
}

impl TypeBehavior for FloatType {
	fn kind(&self) -> ScalarKind {
		ScalarKind::Float
	}

	fn compare(&self, left: &Value, right: &Value) -> Result<Option<Ordering>> {
		Ok(operands(ScalarKind::Float, left, right, Value::as_float)?.map(|(l, r)| compare_f32(l, r)))
	}

	fn convert(&self, value: &Value, target: ScalarKind) -> Result<Value> {
		let v = value.as_float().ok_or_else(|| kind_mismatch(ScalarKind::Float, value))?;
		match target {
			ScalarKind::Integer => to_int(v).map(Value::Integer),
			ScalarKind::CharString => Ok(Value::chars(v.to_string())),
			ScalarKind::Text => Ok(Value::text(v.to_string())),
			_ => Err(unsupported_cast(ScalarKind::Float, target)),
		}
	}

	fn cast_cost(&self, target: ScalarKind) -> CastCost {
		match target {
			ScalarKind::Float => CastCost::IDENTITY,
			ScalarKind::Integer => CastCost::new(2),
			ScalarKind::CharString => CastCost::new(3),
			ScalarKind::Text => CastCost::new(4),
			ScalarKind::Date | ScalarKind::Boolean | ScalarKind::Null => CastCost::UNREACHABLE,
		}
	}

	fn parse(&self, text: &str) -> Result<Value> {
		parse_float(text).map(Value::Float)
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	const T: FloatType = FloatType;

	#[test]
	fn test_compare() {
		assert_eq!(T.compare(&Value::float(1.5), &Value::float(2.0)).unwrap(), Some(Ordering::Less));
		assert_eq!(T.compare(&Value::float(-0.0), &Value::float(0.0)).unwrap(), Some(Ordering::Equal));
		assert_eq!(T.compare(&Value::float(f32::NAN), &Value::float(f32::INFINITY)).unwrap(), Some(Ordering::Greater));
		assert_eq!(T.compare(&Value::float(f32::NAN), &Value::float(f32::NAN)).unwrap(), Some(Ordering::Equal));
		assert_eq!(T.compare(&Value::null(ScalarKind::Float), &Value::float(1.0)).unwrap(), None);
	}

	#[test]
	fn test_min_max_with_nan() {
		let nan = Value::float(f32::NAN);
		let one = Value::float(1.0);
		assert_eq!(T.max(&one, &nan).unwrap(), nan);
		assert_eq!(T.min(&one, &nan).unwrap(), one);
	}

	#[test]
	fn test_min_max_ties_return_left() {
		let neg = Value::float(-0.0);
		let pos = Value::float(0.0);
		let min = T.min(&neg, &pos).unwrap();
		let max = T.max(&neg, &pos).unwrap();
		assert!(min.as_float().unwrap().is_sign_negative());
		assert!(max.as_float().unwrap().is_sign_negative());
	}

	#[test]
	fn test_cast_to_int_rounds_half_away_from_zero() {
		assert_eq!(T.cast_to(&Value::float(2.5), ScalarKind::Integer).unwrap(), Value::int(3));
		assert_eq!(T.cast_to(&Value::float(-2.5), ScalarKind::Integer).unwrap(), Value::int(-3));
		assert_eq!(T.cast_to(&Value::float(2.4), ScalarKind::Integer).unwrap(), Value::int(2));
		assert_eq!(T.cast_to(&Value::float(-2147483648.0), ScalarKind::Integer).unwrap(), Value::int(i32::MIN));
	}

	#[test]
	fn test_cast_to_int_overflow() {
		for v in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY, 2147483648.0, 1e20] {
			let err = T.cast_to(&Value::float(v), ScalarKind::Integer).unwrap_err();
			assert!(matches!(err.kind(), TypeError::NumericOverflow { .. }), "{v}");
		}
	}

	#[test]
	fn test_cast_to_strings() {
		assert_eq!(T.cast_to(&Value::float(1.5), ScalarKind::CharString).unwrap(), Value::chars("1.5"));
		assert_eq!(T.cast_to(&Value::float(3.0), ScalarKind::Text).unwrap(), Value::text("3"));
	}

	#[test]
	fn test_cast_unsupported() {
		for target in [ScalarKind::Date, ScalarKind::Boolean, ScalarKind::Null] {
			let err = T.cast_to(&Value::float(1.0), target).unwrap_err();
			assert!(matches!(err.kind(), TypeError::UnsupportedCast { .. }), "{target}");
		}
	}

	#[test]
	fn test_parse_format() {
		assert_eq!(T.parse("1.5").unwrap(), Value::float(1.5));
		assert_eq!(T.format(&Value::float(0.1)).unwrap(), "0.1");
		let v = Value::float(123.456);
		assert_eq!(T.parse(&T.format(&v).unwrap()).unwrap(), v);
	}
}
