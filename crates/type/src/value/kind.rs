// SPDX-License-Identifier: MIT
// Copyright (c) 2025 mintdb

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::value::Date;

/// The closed set of scalar kinds a [`Value`](crate::Value) can hold.
///
/// The declaration order is the slot order of the behavior table; it carries
/// no meaning for value comparison.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScalarKind {
	/// A 4-byte signed integer
	Integer = 0,
	/// A 4-byte IEEE-754 floating point
	Float = 1,
	/// A character string, stored slot-bounded and zero padded
	CharString = 2,
	/// A variable-length text, stored length-prefixed
	Text = 3,
	/// A calendar date (year, month, day)
	Date = 4,
	/// A boolean: true or false
	Boolean = 5,
	/// The kind of an untyped NULL literal
	Null = 6,
}

impl ScalarKind {
	pub const COUNT: usize = 7;

	pub const ALL: [ScalarKind; Self::COUNT] = [
		ScalarKind::Integer,
		ScalarKind::Float,
		ScalarKind::CharString,
		ScalarKind::Text,
		ScalarKind::Date,
		ScalarKind::Boolean,
		ScalarKind::Null,
	];

	#[inline]
	pub const fn index(self) -> usize {
		self as usize
	}

	pub fn is_string(&self) -> bool {
		matches!(self, ScalarKind::CharString | ScalarKind::Text)
	}

	pub fn is_variable_width(&self) -> bool {
		self.is_string()
	}

	/// Width in bytes of the storage payload, `None` for variable width kinds.
	pub fn fixed_size(&self) -> Option<usize> {
		match self {
			ScalarKind::Integer => Some(4),
			ScalarKind::Float => Some(4),
			ScalarKind::Date => Some(4),
			ScalarKind::Boolean => Some(1),
			ScalarKind::Null => Some(0),
			ScalarKind::CharString | ScalarKind::Text => None,
		}
	}
}

impl Display for ScalarKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ScalarKind::Integer => f.write_str("Integer"),
			ScalarKind::Float => f.write_str("Float"),
			ScalarKind::CharString => f.write_str("CharString"),
			ScalarKind::Text => f.write_str("Text"),
			ScalarKind::Date => f.write_str("Date"),
			ScalarKind::Boolean => f.write_str("Boolean"),
			ScalarKind::Null => f.write_str("Null"),
		}
	}
}

impl FromStr for ScalarKind {
	type Err = ();

	/// Accepts the SQL column type names as well as the kind names.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_uppercase().as_str() {
			"INT" | "INTEGER" => Ok(ScalarKind::Integer),
			"FLOAT" => Ok(ScalarKind::Float),
			"CHAR" | "CHARS" | "CHARSTRING" | "STRING" => Ok(ScalarKind::CharString),
			"TEXT" => Ok(ScalarKind::Text),
			"DATE" => Ok(ScalarKind::Date),
			"BOOL" | "BOOLEAN" => Ok(ScalarKind::Boolean),
			"NULL" => Ok(ScalarKind::Null),
			_ => Err(()),
		}
	}
}

/// Maps a native Rust payload type to the kind it is stored as.
pub trait GetKind {
	fn get_kind() -> ScalarKind;
}

impl GetKind for i32 {
	fn get_kind() -> ScalarKind {
		ScalarKind::Integer
	}
}

impl GetKind for f32 {
	fn get_kind() -> ScalarKind {
		ScalarKind::Float
	}
}

impl GetKind for String {
	fn get_kind() -> ScalarKind {
		ScalarKind::CharString
	}
}

impl GetKind for Date {
	fn get_kind() -> ScalarKind {
		ScalarKind::Date
	}
}

impl GetKind for bool {
	fn get_kind() -> ScalarKind {
		ScalarKind::Boolean
	}
}
