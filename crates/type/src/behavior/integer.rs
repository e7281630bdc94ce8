// SPDX-License-Identifier: MIT
// Copyright (c) 2025 mintdb

use std::cmp::Ordering;

use crate::{
	Result,
	behavior::{CastCost, TypeBehavior, kind_mismatch, operands, parse::parse_int, unsupported_cast},
	error::TypeError,
	value::{ScalarKind, Value},
};

/// Integers beyond `2^24` in magnitude may not have an exact `f32`; those are
/// refused rather than rounded.
fn to_float(v: i32) -> Result<f32> {
	let f = v as f32;
	if f64::from(f) != f64::from(v) {
		return Err(TypeError::NumericOverflow {
			text: v.to_string(),
			target: ScalarKind::Float,
		}
		.into());
	}
	Ok(f)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerType;

impl TypeBehavior for IntegerType {
	fn kind(&self) -> ScalarKind {
		ScalarKind::Integer
	}

	fn compare(&self, left: &Value, right: &Value) -> Result<Option<Ordering>> {
		Ok(operands(ScalarKind::Integer, left, right, Value::as_int)?.map(|(l, r)| l.cmp(&r)))
	}

	fn convert(&self, value: &Value, target: ScalarKind) -> Result<Value> {
		let v = value.as_int().ok_or_else(|| kind_mismatch(ScalarKind::Integer, value))?;
		match target {
			ScalarKind::Float => to_float(v).map(Value::Float),
			ScalarKind::CharString => Ok(Value::chars(v.to_string())),
			ScalarKind::Text => Ok(Value::text(v.to_string())),
			ScalarKind::Boolean => Ok(Value::Boolean(v != 0)),
			_ => Err(unsupported_cast(ScalarKind::Integer, target)),
		}
	}

	fn cast_cost(&self, target: ScalarKind) -> CastCost {
		match target {
			ScalarKind::Integer => CastCost::IDENTITY,
			ScalarKind::Float => CastCost::new(1),
			ScalarKind::CharString => CastCost::new(3),
			ScalarKind::Text => CastCost::new(4),
			ScalarKind::Boolean => CastCost::new(3),
			ScalarKind::Date | ScalarKind::Null => CastCost::UNREACHABLE,
		}
	}

	fn parse(&self, text: &str) -> Result<Value> {
		parse_int(text).map(Value::Integer)
	}
}
