// SPDX-License-Identifier: MIT
// Copyright (c) 2025 mintdb

use std::fmt::{Display, Formatter};

use serde::{
	Deserialize, Deserializer, Serialize, Serializer,
	de::{self, Visitor},
};

/// A calendar date (year, month, day) without time information.
///
/// Internally packed as `year * 10_000 + month * 100 + day`, which orders the
/// same way the calendar does, so comparing packed values compares dates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date {
	packed: i32,
}

impl Default for Date {
	fn default() -> Self {
		Self {
			packed: 1970_01_01,
		}
	}
}

// Calendar utilities
impl Date {
	pub const MIN_YEAR: i32 = 0;
	pub const MAX_YEAR: i32 = 9999;

	#[inline]
	fn is_leap_year(year: i32) -> bool {
		(year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
	}

	#[inline]
	fn days_in_month(year: i32, month: u32) -> u32 {
		match month {
			1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
			4 | 6 | 9 | 11 => 30,
			2 => {
				if Self::is_leap_year(year) {
					29
				} else {
					28
				}
			}
			_ => 0,
		}
	}

	fn is_valid(year: i32, month: u32, day: u32) -> bool {
		(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year)
			&& (1..=12).contains(&month)
			&& day >= 1 && day <= Self::days_in_month(year, month)
	}
}

impl Date {
	pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
		if !Self::is_valid(year, month, day) {
			return None;
		}
		Some(Self {
			packed: year * 10_000 + month as i32 * 100 + day as i32,
		})
	}

	pub fn year(&self) -> i32 {
		self.packed / 10_000
	}

	pub fn month(&self) -> u32 {
		(self.packed / 100 % 100) as u32
	}

	pub fn day(&self) -> u32 {
		(self.packed % 100) as u32
	}

	/// The packed `yyyymmdd` integer, as written to storage.
	pub fn to_packed(&self) -> i32 {
		self.packed
	}

	/// Rebuilds a date from its packed form; `None` if it does not name a
	/// calendar day.
	pub fn from_packed(packed: i32) -> Option<Self> {
		if packed < 0 {
			return None;
		}
		Self::new(packed / 10_000, (packed / 100 % 100) as u32, (packed % 100) as u32)
	}

	/// Parses `Y-M-D` with a 1-4 digit year and 1-2 digit month and day.
	/// The error names the offending part.
	pub(crate) fn parse_ymd(text: &str) -> Result<Self, String> {
		let parts: Vec<&str> = text.trim_ascii().split('-').collect();
		if parts.len() != 3 {
			return Err("expected YYYY-MM-DD".to_string());
		}

		let year = Self::parse_component(parts[0], 4, "year")?;
		let month = Self::parse_component(parts[1], 2, "month")?;
		let day = Self::parse_component(parts[2], 2, "day")?;

		Self::new(year as i32, month, day)
			.ok_or_else(|| format!("{:04}-{:02}-{:02} is not a calendar date", year, month, day))
	}

	fn parse_component(part: &str, max_digits: usize, name: &str) -> Result<u32, String> {
		if part.is_empty() || part.len() > max_digits || !part.bytes().all(|b| b.is_ascii_digit()) {
			return Err(format!("invalid {} '{}'", name, part));
		}
		part.parse::<u32>().map_err(|_| format!("invalid {} '{}'", name, part))
	}
}

impl Display for Date {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
	}
}

// Serde implementation for ISO 8601 format
impl Serialize for Date {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&self.to_string())
	}
}

struct DateVisitor;

impl<'de> Visitor<'de> for DateVisitor {
	type Value = Date;

	fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
		formatter.write_str("a date in ISO 8601 format (YYYY-MM-DD)")
	}

	fn visit_str<E>(self, value: &str) -> Result<Date, E>
	where
		E: de::Error,
	{
		Date::parse_ymd(value).map_err(|reason| E::custom(format!("invalid date '{}': {}", value, reason)))
	}
}

impl<'de> Deserialize<'de> for Date {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_str(DateVisitor)
	}
}
