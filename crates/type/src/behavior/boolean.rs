// SPDX-License-Identifier: MIT
// Copyright (c) 2025 mintdb

use std::cmp::Ordering;

use crate::{
	Result,
	behavior::{CastCost, TypeBehavior, kind_mismatch, operands, parse::parse_bool, unsupported_cast},
	value::{ScalarKind, Value},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanType;

impl TypeBehavior for BooleanType {
	fn kind(&self) -> ScalarKind {
		ScalarKind::Boolean
	}

	/// `false` orders before `true`.
	fn compare(&self, left: &Value, right: &Value) -> Result<Option<Ordering>> {
		Ok(operands(ScalarKind::Boolean, left, right, Value::as_boolean)?.map(|(l, r)| l.cmp(&r)))
	}

	fn convert(&self, value: &Value, target: ScalarKind) -> Result<Value> {
		let v = value.as_boolean().ok_or_else(|| kind_mismatch(ScalarKind::Boolean, value))?;
		let text = if v {
			"true"
		} else {
			"false"
		};
		match target {
			ScalarKind::Integer => Ok(Value::Integer(v as i32)),
			ScalarKind::Float => Ok(Value::Float(f32::from(u8::from(v)))),
			ScalarKind::CharString => Ok(Value::chars(text)),
			ScalarKind::Text => Ok(Value::text(text)),
			_ => Err(unsupported_cast(ScalarKind::Boolean, target)),
		}
	}

	fn cast_cost(&self, target: ScalarKind) -> CastCost {
		match target {
			ScalarKind::Boolean => CastCost::IDENTITY,
			ScalarKind::Integer => CastCost::new(1),
			ScalarKind::Float => CastCost::new(2),
			ScalarKind::CharString => CastCost::new(5),
			ScalarKind::Text => CastCost::new(6),
			ScalarKind::Date | ScalarKind::Null => CastCost::UNREACHABLE,
		}
	}

	fn parse(&self, text: &str) -> Result<Value> {
		parse_bool(text).map(Value::Boolean)
	}
}
