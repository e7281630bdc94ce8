// SPDX-License-Identifier: MIT
// Copyright (c) 2025 mintdb

use std::num::IntErrorKind;

use crate::{
	Result,
	error::TypeError,
	value::{Date, ScalarKind},
};

fn invalid(text: &str, target: ScalarKind, reason: impl Into<String>) -> crate::Error {
	TypeError::InvalidLiteral {
		text: text.to_string(),
		target,
		reason: reason.into(),
	}
	.into()
}

fn overflow(text: &str, target: ScalarKind) -> crate::Error {
	TypeError::NumericOverflow {
		text: text.to_string(),
		target,
	}
	.into()
}

/// Raw string payloads must be UTF-8 to be parsed as anything but a string.
pub(crate) fn utf8(bytes: &[u8], target: ScalarKind) -> Result<&str> {
	std::str::from_utf8(bytes).map_err(|_| invalid(&String::from_utf8_lossy(bytes), target, "not valid UTF-8"))
}

pub(crate) fn parse_int(text: &str) -> Result<i32> {
	let value = text.trim_ascii();
	if value.is_empty() {
		return Err(invalid(text, ScalarKind::Integer, "empty literal"));
	}

	value.parse::<i32>().map_err(|err| match err.kind() {
		IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => overflow(text, ScalarKind::Integer),
		_ => invalid(text, ScalarKind::Integer, "not a decimal integer"),
	})
}

pub(crate) fn parse_float(text: &str) -> Result<f32> {
	let value = text.trim_ascii();
	if value.is_empty() {
		return Err(invalid(text, ScalarKind::Float, "empty literal"));
	}

	let parsed = value.parse::<f32>().map_err(|_| invalid(text, ScalarKind::Float, "not a decimal number"))?;

	// finite text that rounds to infinity does not fit
	if parsed.is_infinite() && !value.to_ascii_lowercase().contains("inf") {
		return Err(overflow(text, ScalarKind::Float));
	}
	Ok(parsed)
}

pub(crate) fn parse_bool(text: &str) -> Result<bool> {
	match text.trim_ascii().to_ascii_lowercase().as_str() {
		"true" | "t" | "1" => Ok(true),
		"false" | "f" | "0" => Ok(false),
		_ => Err(invalid(text, ScalarKind::Boolean, "not a boolean")),
	}
}

pub(crate) fn parse_date(text: &str) -> Result<Date> {
	Date::parse_ymd(text).map_err(|reason| invalid(text, ScalarKind::Date, reason))
}
