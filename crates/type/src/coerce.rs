// SPDX-License-Identifier: MIT
// Copyright (c) 2025 mintdb

//! Coercion of mixed-kind operands.
//!
//! Binary operations over two values of different kinds first agree on a
//! common kind. The side that is cheaper to convert is cast, ties cast the
//! left operand, and the operation then runs through the common kind's
//! behavior.

use std::{
	borrow::Cow,
	cmp::Ordering,
	fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::{
	Result,
	behavior::behavior,
	error::{Operand, TypeError},
	value::{ScalarKind, Value},
};

/// Outcome of resolving a pair of operand kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
	/// Both operands already share this kind.
	Same(ScalarKind),
	/// Cast the left operand to this kind.
	Left(ScalarKind),
	/// Cast the right operand to this kind.
	Right(ScalarKind),
}

impl Coercion {
	/// The common kind both operands end up with.
	pub fn target(&self) -> ScalarKind {
		match self {
			Coercion::Same(kind) | Coercion::Left(kind) | Coercion::Right(kind) => *kind,
		}
	}
}

/// Picks the common kind of `left` and `right`.
pub fn resolve(left: ScalarKind, right: ScalarKind) -> Result<Coercion> {
	if left == right {
		return Ok(Coercion::Same(left));
	}

	let left_to_right = behavior(left).cast_cost(right);
	let right_to_left = behavior(right).cast_cost(left);

	if !left_to_right.is_reachable() && !right_to_left.is_reachable() {
		return Err(TypeError::IncomparableTypes {
			left,
			right,
		}
		.into());
	}

	let coercion = if left_to_right <= right_to_left {
		Coercion::Left(right)
	} else {
		Coercion::Right(left)
	};
	trace!(%left, %right, %left_to_right, %right_to_left, ?coercion, "resolved coercion");
	Ok(coercion)
}

/// Brings both operands to their common kind. Operands that already have it
/// are borrowed, the cast side is a new value.
pub fn coerce<'a>(left: &'a Value, right: &'a Value) -> Result<(Cow<'a, Value>, Cow<'a, Value>)> {
	match resolve(left.kind(), right.kind())? {
		Coercion::Same(_) => Ok((Cow::Borrowed(left), Cow::Borrowed(right))),
		Coercion::Left(target) => Ok((Cow::Owned(cast_operand(Operand::Left, left, target)?), Cow::Borrowed(right))),
		Coercion::Right(target) => Ok((Cow::Borrowed(left), Cow::Owned(cast_operand(Operand::Right, right, target)?))),
	}
}

fn cast_operand(operand: Operand, value: &Value, target: ScalarKind) -> Result<Value> {
	value.cast(target).map_err(|cause| {
		debug!(%operand, from = %value.kind(), %target, error = %cause, "coercion cast failed");
		TypeError::CoercionFailed {
			operand,
			from: value.kind(),
			target,
			cause: Box::new(cause),
		}
		.into()
	})
}

/// Compares two values of any kinds. `None` means unknown: one of the
/// operands is null.
#[instrument(name = "type::coerce::compare", level = "trace", skip_all, fields(left = %left.kind(), right = %right.kind()))]
pub fn compare(left: &Value, right: &Value) -> Result<Option<Ordering>> {
	if left.is_null() || right.is_null() {
		return Ok(None);
	}
	let (l, r) = coerce(left, right)?;
	behavior(l.kind()).compare(&l, &r)
}

/// The smaller of two values of any kinds, in their common kind. Ties return
/// the left operand; a null operand is returned as is.
#[instrument(name = "type::coerce::min", level = "trace", skip_all, fields(left = %left.kind(), right = %right.kind()))]
pub fn min(left: &Value, right: &Value) -> Result<Value> {
	if let Some(null) = null_operand(left, right) {
		return Ok(null.clone());
	}
	let (l, r) = coerce(left, right)?;
	behavior(l.kind()).min(&l, &r)
}

/// The larger of two values of any kinds, in their common kind. Ties return
/// the left operand; a null operand is returned as is.
#[instrument(name = "type::coerce::max", level = "trace", skip_all, fields(left = %left.kind(), right = %right.kind()))]
pub fn max(left: &Value, right: &Value) -> Result<Value> {
	if let Some(null) = null_operand(left, right) {
		return Ok(null.clone());
	}
	let (l, r) = coerce(left, right)?;
	behavior(l.kind()).max(&l, &r)
}

fn null_operand<'a>(left: &'a Value, right: &'a Value) -> Option<&'a Value> {
	if left.is_null() {
		Some(left)
	} else if right.is_null() {
		Some(right)
	} else {
		None
	}
}

/// SQL comparison operators, evaluated in three-valued logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompareOp {
	Equal,
	NotEqual,
	LessThan,
	LessThanEqual,
	GreaterThan,
	GreaterThanEqual,
}

impl CompareOp {
	pub const ALL: [CompareOp; 6] = [
		CompareOp::Equal,
		CompareOp::NotEqual,
		CompareOp::LessThan,
		CompareOp::LessThanEqual,
		CompareOp::GreaterThan,
		CompareOp::GreaterThanEqual,
	];

	pub fn symbol(&self) -> &'static str {
		match self {
			CompareOp::Equal => "=",
			CompareOp::NotEqual => "<>",
			CompareOp::LessThan => "<",
			CompareOp::LessThanEqual => "<=",
			CompareOp::GreaterThan => ">",
			CompareOp::GreaterThanEqual => ">=",
		}
	}

	/// Parses an operator symbol; `!=` is accepted for `<>`.
	pub fn from_symbol(symbol: &str) -> Option<CompareOp> {
		match symbol {
			"=" | "==" => Some(CompareOp::Equal),
			"<>" | "!=" => Some(CompareOp::NotEqual),
			"<" => Some(CompareOp::LessThan),
			"<=" => Some(CompareOp::LessThanEqual),
			">" => Some(CompareOp::GreaterThan),
			">=" => Some(CompareOp::GreaterThanEqual),
			_ => None,
		}
	}

	pub fn matches(&self, ordering: Ordering) -> bool {
		match self {
			CompareOp::Equal => ordering == Ordering::Equal,
			CompareOp::NotEqual => ordering != Ordering::Equal,
			CompareOp::LessThan => ordering == Ordering::Less,
			CompareOp::LessThanEqual => ordering != Ordering::Greater,
			CompareOp::GreaterThan => ordering == Ordering::Greater,
			CompareOp::GreaterThanEqual => ordering != Ordering::Less,
		}
	}

	/// `None` is the unknown truth value.
	pub fn evaluate(&self, left: &Value, right: &Value) -> Result<Option<bool>> {
		Ok(compare(left, right)?.map(|ordering| self.matches(ordering)))
	}
}

impl Display for CompareOp {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.symbol())
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;
	use crate::value::Date;

	fn date(y: i32, m: u32, d: u32) -> Value {
		Value::date(Date::new(y, m, d).unwrap())
	}

	mod resolve {
		use super::*;

		#[test]
		fn test_same_kind() {
			for kind in ScalarKind::ALL {
				assert_eq!(resolve(kind, kind).unwrap(), Coercion::Same(kind));
			}
		}

		#[test]
		fn test_cheaper_side_is_cast() {
			assert_eq!(resolve(ScalarKind::Integer, ScalarKind::Float).unwrap(), Coercion::Left(ScalarKind::Float));
			assert_eq!(
				resolve(ScalarKind::Float, ScalarKind::Integer).unwrap(),
				Coercion::Right(ScalarKind::Float)
			);
			assert_eq!(
				resolve(ScalarKind::CharString, ScalarKind::Integer).unwrap(),
				Coercion::Left(ScalarKind::Integer)
			);
			assert_eq!(
				resolve(ScalarKind::Date, ScalarKind::CharString).unwrap(),
				Coercion::Right(ScalarKind::Date)
			);
			assert_eq!(
				resolve(ScalarKind::Boolean, ScalarKind::Integer).unwrap(),
				Coercion::Left(ScalarKind::Integer)
			);
		}

		#[test]
		fn test_one_way_path() {
			assert_eq!(
				resolve(ScalarKind::Float, ScalarKind::Boolean).unwrap(),
				Coercion::Right(ScalarKind::Float)
			);
		}

		#[test]
		fn test_tie_casts_left() {
			assert_eq!(resolve(ScalarKind::CharString, ScalarKind::Text).unwrap(), Coercion::Left(ScalarKind::Text));
			assert_eq!(
				resolve(ScalarKind::Text, ScalarKind::CharString).unwrap(),
				Coercion::Left(ScalarKind::CharString)
			);
		}

		#[test]
		fn test_untyped_null_is_cast() {
			assert_eq!(resolve(ScalarKind::Null, ScalarKind::Date).unwrap(), Coercion::Left(ScalarKind::Date));
			assert_eq!(resolve(ScalarKind::Text, ScalarKind::Null).unwrap(), Coercion::Right(ScalarKind::Text));
		}

		#[test]
		fn test_incomparable() {
			let err = resolve(ScalarKind::Date, ScalarKind::Integer).unwrap_err();
			assert_eq!(
				err.into_kind(),
				TypeError::IncomparableTypes {
					left: ScalarKind::Date,
					right: ScalarKind::Integer,
				}
			);
			assert!(resolve(ScalarKind::Boolean, ScalarKind::Date).is_err());
		}
	}

	mod compare {
		use super::*;

		#[test]
		fn test_same_kind() {
			assert_eq!(compare(&date(2024, 1, 1), &date(2023, 12, 31)).unwrap(), Some(Ordering::Greater));
		}

		#[test]
		fn test_int_float() {
			assert_eq!(compare(&Value::int(1), &Value::float(1.5)).unwrap(), Some(Ordering::Less));
			assert_eq!(compare(&Value::float(2.0), &Value::int(2)).unwrap(), Some(Ordering::Equal));
		}

		#[test]
		fn test_inexact_int_float_fails() {
			let err = compare(&Value::int(16_777_217), &Value::float(16_777_216.0)).unwrap_err();
			match err.into_kind() {
				TypeError::CoercionFailed {
					operand,
					target,
					cause,
					..
				} => {
					assert_eq!(operand, Operand::Left);
					assert_eq!(target, ScalarKind::Float);
					assert!(matches!(cause.kind(), TypeError::NumericOverflow { .. }));
				}
				other => panic!("unexpected error: {other:?}"),
			}
			assert_eq!(compare(&Value::int(16_777_216), &Value::float(16_777_216.0)).unwrap(), Some(Ordering::Equal));
		}

		#[test]
		fn test_chars_int() {
			assert_eq!(compare(&Value::chars("12"), &Value::int(12)).unwrap(), Some(Ordering::Equal));
			assert_eq!(compare(&Value::int(3), &Value::chars("12")).unwrap(), Some(Ordering::Less));
		}

		#[test]
		fn test_chars_date() {
			assert_eq!(compare(&date(2024, 1, 1), &Value::chars("2024-01-01")).unwrap(), Some(Ordering::Equal));
		}

		#[test]
		fn test_chars_text() {
			assert_eq!(compare(&Value::chars("abc"), &Value::text("abd")).unwrap(), Some(Ordering::Less));
		}

		#[test]
		fn test_null_is_unknown() {
			assert_eq!(compare(&Value::null(ScalarKind::Integer), &Value::int(1)).unwrap(), None);
			assert_eq!(compare(&Value::int(1), &Value::null(ScalarKind::Null)).unwrap(), None);
			// even when the kinds have no common kind
			assert_eq!(compare(&date(2024, 1, 1), &Value::null(ScalarKind::Integer)).unwrap(), None);
		}

		#[test]
		fn test_incomparable() {
			let err = compare(&date(2024, 1, 1), &Value::int(1)).unwrap_err();
			assert!(matches!(err.kind(), TypeError::IncomparableTypes { .. }));
		}

		#[test]
		fn test_coercion_failure_names_operand() {
			let err = compare(&Value::chars("abc"), &Value::int(1)).unwrap_err();
			match err.into_kind() {
				TypeError::CoercionFailed {
					operand,
					from,
					target,
					cause,
				} => {
					assert_eq!(operand, Operand::Left);
					assert_eq!(from, ScalarKind::CharString);
					assert_eq!(target, ScalarKind::Integer);
					assert!(matches!(cause.kind(), TypeError::InvalidLiteral { .. }));
				}
				other => panic!("unexpected error: {other:?}"),
			}

			let err = compare(&Value::int(1), &Value::text("x")).unwrap_err();
			assert!(matches!(
				err.kind(),
				TypeError::CoercionFailed {
					operand: Operand::Right,
					..
				}
			));
		}
	}

	mod min_max {
		use super::*;

		#[test]
		fn test_strings() {
			assert_eq!(max(&Value::chars("apple"), &Value::chars("banana")).unwrap(), Value::chars("banana"));
			assert_eq!(min(&Value::chars("apple"), &Value::chars("banana")).unwrap(), Value::chars("apple"));
		}

		#[test]
		fn test_result_has_common_kind() {
			assert_eq!(min(&Value::int(3), &Value::float(2.5)).unwrap(), Value::float(2.5));
			assert_eq!(max(&Value::int(3), &Value::float(2.5)).unwrap(), Value::float(3.0));
		}

		#[test]
		fn test_ties_return_left() {
			assert_eq!(min(&Value::int(1), &Value::float(1.0)).unwrap(), Value::float(1.0));
			let left = Value::chars("x");
			let result = max(&left, &Value::text("x")).unwrap();
			assert_eq!(result, Value::text("x"));
		}

		#[test]
		fn test_null_propagates() {
			let null = Value::null(ScalarKind::Integer);
			assert_eq!(min(&null, &Value::int(1)).unwrap(), null);
			assert_eq!(max(&Value::int(1), &null).unwrap(), null);
			assert_eq!(max(&Value::null(ScalarKind::Text), &null).unwrap(), Value::null(ScalarKind::Text));
			assert_eq!(min(&date(2024, 1, 1), &null).unwrap(), null);
		}
	}

	mod compare_op {
		use super::*;

		#[test]
		fn test_matches() {
			use Ordering::*;
			let table = [
				(CompareOp::Equal, [false, true, false]),
				(CompareOp::NotEqual, [true, false, true]),
				(CompareOp::LessThan, [true, false, false]),
				(CompareOp::LessThanEqual, [true, true, false]),
				(CompareOp::GreaterThan, [false, false, true]),
				(CompareOp::GreaterThanEqual, [false, true, true]),
			];
			for (op, expected) in table {
				assert_eq!([op.matches(Less), op.matches(Equal), op.matches(Greater)], expected, "{op}");
			}
		}

		#[test]
		fn test_symbols_roundtrip() {
			for op in CompareOp::ALL {
				assert_eq!(CompareOp::from_symbol(op.symbol()), Some(op));
			}
			assert_eq!(CompareOp::from_symbol("!="), Some(CompareOp::NotEqual));
			assert_eq!(CompareOp::from_symbol("=>"), None);
		}

		#[test]
		fn test_evaluate() {
			assert_eq!(CompareOp::LessThan.evaluate(&Value::int(1), &Value::float(1.5)).unwrap(), Some(true));
			assert_eq!(CompareOp::Equal.evaluate(&Value::chars("7"), &Value::int(7)).unwrap(), Some(true));
			assert_eq!(CompareOp::NotEqual.evaluate(&Value::null(ScalarKind::Null), &Value::int(7)).unwrap(), None);
			assert!(CompareOp::Equal.evaluate(&date(2024, 1, 1), &Value::boolean(true)).is_err());
		}
	}
}
