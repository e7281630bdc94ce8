// SPDX-License-Identifier: MIT
// Copyright (c) 2025 mintdb

//! Per-kind behaviors.
//!
//! Each [`ScalarKind`] has exactly one stateless [`TypeBehavior`] instance,
//! reachable through [`behavior`]. Generic code dispatches through this table
//! instead of matching on the kind.

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
};

use crate::{
	Result,
	error::TypeError,
	value::{ScalarKind, Value},
};

mod boolean;
mod chars;
mod date;
mod float;
mod integer;
mod null;
pub(crate) mod parse;

pub use boolean::BooleanType;
pub use chars::CharsType;
pub use date::DateType;
pub use float::FloatType;
pub use integer::IntegerType;
pub use null::NullType;

/// Distance of a conversion, used only to pick a coercion direction.
///
/// `0` is the identity, larger is further away, [`CastCost::UNREACHABLE`]
/// orders after every reachable cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CastCost(u32);

impl CastCost {
	pub const IDENTITY: CastCost = CastCost(0);
	pub const UNREACHABLE: CastCost = CastCost(u32::MAX);

	pub const fn new(cost: u32) -> Self {
		CastCost(cost)
	}

	pub fn value(&self) -> u32 {
		self.0
	}

	pub fn is_reachable(&self) -> bool {
		*self != Self::UNREACHABLE
	}
}

impl Display for CastCost {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		if self.is_reachable() {
			Display::fmt(&self.0, f)
		} else {
			f.write_str("unreachable")
		}
	}
}

/// The operations generic code performs on values of one kind.
///
/// Operands are expected to be of the behavior's own kind; a value of another
/// kind is reported as [`TypeError::KindMismatch`]. A null operand of any kind
/// makes comparisons unknown.
pub trait TypeBehavior: Send + Sync {
	fn kind(&self) -> ScalarKind;

	/// Total order over payloads of this kind, `None` if either operand is null.
	fn compare(&self, left: &Value, right: &Value) -> Result<Option<Ordering>>;

	/// The smaller operand; `left` on ties. A null operand is returned as is.
	fn min(&self, left: &Value, right: &Value) -> Result<Value> {
		match self.compare(left, right)? {
			None => Ok(null_operand(left, right)),
			Some(Ordering::Greater) => Ok(right.clone()),
			Some(_) => Ok(left.clone()),
		}
	}

	/// The larger operand; `left` on ties. A null operand is returned as is.
	fn max(&self, left: &Value, right: &Value) -> Result<Value> {
		match self.compare(left, right)? {
			None => Ok(null_operand(left, right)),
			Some(Ordering::Less) => Ok(right.clone()),
			Some(_) => Ok(left.clone()),
		}
	}

	/// Converts a value of this kind into `target`, always as a new value.
	/// A null converts to a null of any target kind.
	fn cast_to(&self, value: &Value, target: ScalarKind) -> Result<Value> {
		check_kind(self.kind(), value)?;
		if value.is_null() {
			return Ok(Value::null(target));
		}
		if !self.cast_cost(target).is_reachable() {
			return Err(unsupported_cast(self.kind(), target));
		}
		if target == self.kind() {
			return Ok(value.clone());
		}
		self.convert(value, target)
	}

	/// Converts a non-null value of this kind into a different `target` for
	/// which [`TypeBehavior::cast_cost`] is reachable.
	fn convert(&self, value: &Value, target: ScalarKind) -> Result<Value>;

	fn cast_cost(&self, target: ScalarKind) -> CastCost;

	/// Builds a value of this kind from literal text.
	fn parse(&self, text: &str) -> Result<Value>;

	/// Canonical text of a value of this kind; inverse of `parse` where
	/// feasible.
	fn format(&self, value: &Value) -> Result<String> {
		check_kind(self.kind(), value)?;
		Ok(value.get_string())
	}
}

static INTEGER: IntegerType = IntegerType;
static FLOAT: FloatType = FloatType;
static CHAR_STRING: CharsType = CharsType::new(ScalarKind::CharString);
static TEXT: CharsType = CharsType::new(ScalarKind::Text);
static DATE: DateType = DateType;
static BOOLEAN: BooleanType = BooleanType;
static NULL: NullType = NullType;

/// Indexed by [`ScalarKind::index`].
static BEHAVIORS: [&(dyn TypeBehavior); ScalarKind::COUNT] =
	[&INTEGER, &FLOAT, &CHAR_STRING, &TEXT, &DATE, &BOOLEAN, &NULL];

/// The behavior instance of `kind`.
#[inline]
pub fn behavior(kind: ScalarKind) -> &'static dyn TypeBehavior {
	BEHAVIORS[kind.index()]
}

pub(crate) fn check_kind(kind: ScalarKind, value: &Value) -> Result<()> {
	if value.kind() == kind {
		Ok(())
	} else {
		Err(kind_mismatch(kind, value))
	}
}

/// Extracts both payloads for a comparison. `Ok(None)` when either operand
/// is null.
pub(crate) fn operands<'v, T>(
	kind: ScalarKind,
	left: &'v Value,
	right: &'v Value,
	payload: impl Fn(&'v Value) -> Option<T>,
) -> Result<Option<(T, T)>> {
	if left.is_null() || right.is_null() {
		return Ok(None);
	}
	let l = payload(left).ok_or_else(|| kind_mismatch(kind, left))?;
	let r = payload(right).ok_or_else(|| kind_mismatch(kind, right))?;
	Ok(Some((l, r)))
}

pub(crate) fn kind_mismatch(kind: ScalarKind, value: &Value) -> crate::Error {
	TypeError::KindMismatch {
		behavior: kind,
		actual: value.kind(),
	}
	.into()
}

pub(crate) fn unsupported_cast(from: ScalarKind, to: ScalarKind) -> crate::Error {
	TypeError::UnsupportedCast {
		from,
		to,
	}
	.into()
}

fn null_operand(left: &Value, right: &Value) -> Value {
	if left.is_null() {
		left.clone()
	} else {
		right.clone()
	}
}
