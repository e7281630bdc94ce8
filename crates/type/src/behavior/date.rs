// SPDX-License-Identifier: MIT
// Copyright (c) 2025 mintdb

use std::cmp::Ordering;

use crate::{
	Result,
	behavior::{CastCost, TypeBehavior, kind_mismatch, operands, parse::parse_date, unsupported_cast},
	value::{ScalarKind, Value},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct DateType;

impl TypeBehavior for DateType {
	fn kind(&self) -> ScalarKind {
		ScalarKind::Date
	}

	fn compare(&self, left: &Value, right: &Value) -> Result<Option<Ordering>> {
		Ok(operands(ScalarKind::Date, left, right, Value::as_date)?.map(|(l, r)| l.cmp(&r)))
	}

	fn convert(&self, value: &Value, target: ScalarKind) -> Result<Value> {
		let v = value.as_date().ok_or_else(|| kind_mismatch(ScalarKind::Date, value))?;
		match target {
			ScalarKind::CharString => Ok(Value::chars(v.to_string())),
			ScalarKind::Text => Ok(Value::text(v.to_string())),
			_ => Err(unsupported_cast(ScalarKind::Date, target)),
		}
	}

	fn cast_cost(&self, target: ScalarKind) -> CastCost {
		match target {
			ScalarKind::Date => CastCost::IDENTITY,
			ScalarKind::CharString => CastCost::new(4),
			ScalarKind::Text => CastCost::new(5),
			_ => CastCost::UNREACHABLE,
		}
	}

	fn parse(&self, text: &str) -> Result<Value> {
		parse_date(text).map(Value::Date)
	}
}
