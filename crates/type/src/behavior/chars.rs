// SPDX-License-Identifier: MIT
// Copyright (c) 2025 mintdb

use std::cmp::Ordering;

use crate::{
	Result,
	behavior::{
		CastCost, TypeBehavior, kind_mismatch, operands,
		parse::{parse_bool, parse_date, parse_float, parse_int, utf8},
		unsupported_cast,
	},
	value::{ScalarKind, Value},
};

/// Behavior shared by the two string kinds. Both compare byte by byte; they
/// only differ in storage and in how far they are from the other kinds.
#[derive(Debug, Clone, Copy)]
pub struct CharsType {
	kind: ScalarKind,
}

impl CharsType {
	pub const fn new(kind: ScalarKind) -> Self {
		Self {
			kind,
		}
	}

	fn bytes<'v>(&self, value: &'v Value) -> Option<&'v [u8]> {
		if value.kind() == self.kind {
			value.as_bytes()
		} else {
			None
		}
	}

	fn with_bytes(&self, bytes: &[u8]) -> Value {
		match self.kind {
			ScalarKind::Text => Value::text(bytes),
			_ => Value::chars(bytes),
		}
	}
}

impl TypeBehavior for CharsType {
	fn kind(&self) -> ScalarKind {
		self.kind
	}

	fn compare(&self, left: &Value, right: &Value) -> Result<Option<Ordering>> {
		Ok(operands(self.kind, left, right, |v| self.bytes(v))?.map(|(l, r)| l.cmp(r)))
	}

	fn convert(&self, value: &Value, target: ScalarKind) -> Result<Value> {
		let bytes = self.bytes(value).ok_or_else(|| kind_mismatch(self.kind, value))?;
		match target {
			ScalarKind::CharString => Ok(Value::chars(bytes)),
			ScalarKind::Text => Ok(Value::text(bytes)),
			ScalarKind::Integer => parse_int(utf8(bytes, target)?).map(Value::Integer),
			ScalarKind::Float => parse_float(utf8(bytes, target)?).map(Value::Float),
			ScalarKind::Date => parse_date(utf8(bytes, target)?).map(Value::Date),
			ScalarKind::Boolean => parse_bool(utf8(bytes, target)?).map(Value::Boolean),
			ScalarKind::Null => Err(unsupported_cast(self.kind, target)),
		}
	}

	fn cast_cost(&self, target: ScalarKind) -> CastCost {
		// Text sits one step further from every non-string kind
		let offset = match self.kind {
			ScalarKind::Text => 1,
			_ => 0,
		};
		match target {
			t if t == self.kind => CastCost::IDENTITY,
			ScalarKind::CharString | ScalarKind::Text => CastCost::new(1),
			ScalarKind::Integer => CastCost::new(1 + offset),
			ScalarKind::Float => CastCost::new(2 + offset),
			ScalarKind::Date => CastCost::new(3 + offset),
			ScalarKind::Boolean => CastCost::new(4 + offset),
			ScalarKind::Null => CastCost::UNREACHABLE,
		}
	}

	fn parse(&self, text: &str) -> Result<Value> {
		Ok(self.with_bytes(text.as_bytes()))
	}
}
