// SPDX-License-Identifier: MIT
// Copyright (c) 2025 mintdb

use std::cmp::Ordering;

use crate::{
	Result,
	behavior::{CastCost, TypeBehavior, check_kind, kind_mismatch},
	error::TypeError,
	value::{ScalarKind, Value},
};

/// Behavior of the untyped NULL. Every value of this kind is null, so every
/// comparison is unknown and every cast yields a null of the target kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullType;

impl TypeBehavior for NullType {
	fn kind(&self) -> ScalarKind {
		ScalarKind::Null
	}

	fn compare(&self, left: &Value, right: &Value) -> Result<Option<Ordering>> {
		check_kind(ScalarKind::Null, left)?;
		check_kind(ScalarKind::Null, right)?;
		Ok(None)
	}

	fn convert(&self, value: &Value, _target: ScalarKind) -> Result<Value> {
		// every Null kind value is null and handled by cast_to
		Err(kind_mismatch(ScalarKind::Null, value))
	}

	fn cast_cost(&self, target: ScalarKind) -> CastCost {
		match target {
			ScalarKind::Null => CastCost::IDENTITY,
			_ => CastCost::new(1),
		}
	}

	fn parse(&self, text: &str) -> Result<Value> {
		if text.trim_ascii().eq_ignore_ascii_case("null") {
			Ok(Value::null(ScalarKind::Null))
		} else {
			Err(TypeError::InvalidLiteral {
				text: text.to_string(),
				target: ScalarKind::Null,
				reason: "expected NULL".to_string(),
			}
			.into())
		}
	}
}
