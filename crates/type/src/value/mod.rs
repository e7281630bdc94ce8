// SPDX-License-Identifier: MIT
// Copyright (c) 2025 mintdb

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
	hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

use crate::{Result, behavior::behavior, coerce};

mod date;
pub mod encoding;
pub mod float;
mod kind;

pub use date::Date;
pub use kind::{GetKind, ScalarKind};

/// A runtime datum of any scalar kind.
///
/// Variable-width payloads are owned byte buffers: cloning a value copies its
/// bytes, and no two values ever share one.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Value {
	/// A null of the given kind. `ScalarKind::Null` for an untyped NULL.
	Null {
		kind: ScalarKind,
	},
	/// A 4-byte signed integer
	Integer(i32),
	/// A 4-byte floating point
	Float(f32),
	/// A character string, compared byte by byte
	CharString(#[serde(with = "serde_bytes")] Vec<u8>),
	/// A variable-length text, compared byte by byte
	Text(#[serde(with = "serde_bytes")] Vec<u8>),
	/// A calendar date
	Date(Date),
	/// A boolean: true or false
	Boolean(bool),
}

impl Value {
	pub fn null(kind: ScalarKind) -> Self {
		Value::Null {
			kind,
		}
	}

	pub fn int(v: impl Into<i32>) -> Self {
		Value::Integer(v.into())
	}

	pub fn float(v: impl Into<f32>) -> Self {
		Value::Float(v.into())
	}

	/// Copies `bytes` into a new character string.
	pub fn chars(bytes: impl AsRef<[u8]>) -> Self {
		Value::CharString(bytes.as_ref().to_vec())
	}

	/// Copies `bytes` into a new text.
	pub fn text(bytes: impl AsRef<[u8]>) -> Self {
		Value::Text(bytes.as_ref().to_vec())
	}

	pub fn date(v: impl Into<Date>) -> Self {
		Value::Date(v.into())
	}

	pub fn boolean(v: impl Into<bool>) -> Self {
		Value::Boolean(v.into())
	}

	/// Builds a value of `kind` from literal text.
	pub fn parse(kind: ScalarKind, text: &str) -> Result<Self> {
		behavior(kind).parse(text)
	}
}

impl Value {
	pub fn kind(&self) -> ScalarKind {
		match self {
			Value::Null {
				kind,
			} => *kind,
			Value::Integer(_) => ScalarKind::Integer,
			Value::Float(_) => ScalarKind::Float,
			Value::CharString(_) => ScalarKind::CharString,
			Value::Text(_) => ScalarKind::Text,
			Value::Date(_) => ScalarKind::Date,
			Value::Boolean(_) => ScalarKind::Boolean,
		}
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null { .. })
	}

	/// Byte length of a CharString or Text payload, 0 for every other kind.
	pub fn length(&self) -> usize {
		match self {
			Value::CharString(bytes) | Value::Text(bytes) => bytes.len(),
			_ => 0,
		}
	}

	pub fn as_int(&self) -> Option<i32> {
		match self {
			Value::Integer(v) => Some(*v),
			_ => None,
		}
	}

	pub fn as_float(&self) -> Option<f32> {
		match self {
			Value::Float(v) => Some(*v),
			_ => None,
		}
	}

	/// Raw payload of a CharString or Text.
	pub fn as_bytes(&self) -> Option<&[u8]> {
		match self {
			Value::CharString(bytes) | Value::Text(bytes) => Some(bytes),
			_ => None,
		}
	}

	pub fn as_date(&self) -> Option<Date> {
		match self {
			Value::Date(v) => Some(*v),
			_ => None,
		}
	}

	pub fn as_boolean(&self) -> Option<bool> {
		match self {
			Value::Boolean(v) => Some(*v),
			_ => None,
		}
	}

	/// Canonical text of the value. Never fails:
	///
	/// * nulls render as `NULL`
	/// * string payloads that are not UTF-8 render lossily (U+FFFD)
	/// * float NaN renders as `NaN`, infinities as `inf` and `-inf`
	pub fn get_string(&self) -> String {
		self.to_string()
	}
}

// Re-assignment. Each setter replaces kind and payload in one assignment.
impl Value {
	pub fn set_int(&mut self, v: i32) {
		*self = Value::Integer(v);
	}

	pub fn set_float(&mut self, v: f32) {
		*self = Value::Float(v);
	}

	pub fn set_chars(&mut self, bytes: impl AsRef<[u8]>) {
		*self = Value::chars(bytes);
	}

	pub fn set_text(&mut self, bytes: impl AsRef<[u8]>) {
		*self = Value::text(bytes);
	}

	pub fn set_date(&mut self, v: Date) {
		*self = Value::Date(v);
	}

	pub fn set_boolean(&mut self, v: bool) {
		*self = Value::Boolean(v);
	}

	pub fn set_null(&mut self, kind: ScalarKind) {
		*self = Value::null(kind);
	}

	/// Replaces this value with a deep copy of `other`.
	pub fn set_value(&mut self, other: &Value) {
		*self = other.clone();
	}
}

impl Value {
	/// Converts into `target` through this value's own behavior.
	pub fn cast(&self, target: ScalarKind) -> Result<Value> {
		behavior(self.kind()).cast_to(self, target)
	}

	/// Compares against `other`, coercing to a common kind when they differ.
	/// `None` means unknown: one of the operands is null.
	pub fn compare(&self, other: &Value) -> Result<Option<Ordering>> {
		coerce::compare(self, other)
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Null {
				..
			} => f.write_str("NULL"),
			Value::Integer(v) => Display::fmt(v, f),
			Value::Float(v) => Display::fmt(v, f),
			Value::CharString(bytes) | Value::Text(bytes) => f.write_str(&String::from_utf8_lossy(bytes)),
			Value::Date(v) => Display::fmt(v, f),
			Value::Boolean(true) => f.write_str("true"),
			Value::Boolean(false) => f.write_str("false"),
		}
	}
}

/// Structural equality consistent with per-kind comparison: same kind and
/// equal payload, floats equal under the NaN rule. Nulls of the same kind are
/// equal here; SQL comparison treats them as unknown instead.
impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(
				Value::Null {
					kind: l,
				},
				Value::Null {
					kind: r,
				},
			) => l == r,
			(Value::Integer(l), Value::Integer(r)) => l == r,
			(Value::Float(l), Value::Float(r)) => float::compare_f32(*l, *r) == Ordering::Equal,
			(Value::CharString(l), Value::CharString(r)) => l == r,
			(Value::Text(l), Value::Text(r)) => l == r,
			(Value::Date(l), Value::Date(r)) => l == r,
			(Value::Boolean(l), Value::Boolean(r)) => l == r,
			_ => false,
		}
	}
}

impl Eq for Value {}

impl Hash for Value {
	fn hash<H: Hasher>(&self, state: &mut H) {
		std::mem::discriminant(self).hash(state);
		match self {
			Value::Null {
				kind,
			} => kind.hash(state),
			Value::Integer(v) => v.hash(state),
			Value::Float(v) => float::canonical_bits(*v).hash(state),
			Value::CharString(bytes) | Value::Text(bytes) => bytes.hash(state),
			Value::Date(v) => v.hash(state),
			Value::Boolean(v) => v.hash(state),
		}
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Integer(v)
	}
}

impl From<f32> for Value {
	fn from(v: f32) -> Self {
		Value::Float(v)
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Boolean(v)
	}
}

impl From<Date> for Value {
	fn from(v: Date) -> Self {
		Value::Date(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::chars(v)
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::CharString(v.into_bytes())
	}
}
