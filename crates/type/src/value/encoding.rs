// SPDX-License-Identifier: MIT
// Copyright (c) 2025 mintdb

//! Storage layout of non-null values.
//!
//! | kind       | layout                                                   |
//! |------------|----------------------------------------------------------|
//! | Integer    | 4 bytes, little-endian two's complement                  |
//! | Float      | 4 bytes, little-endian IEEE-754 bits                     |
//! | Date       | 4 bytes, little-endian packed `yyyymmdd`                 |
//! | Boolean    | 1 byte, `0` or `1`                                       |
//! | CharString | the bytes, zero padded to the slot; reads stop at `0`    |
//! | Text       | `u32` little-endian byte length, then the bytes          |
//! | Null       | nothing                                                  |
//!
//! Null flags live outside the payload: a null of any kind but `Null` has no
//! encoding. A CharString payload may not contain a `0` byte, since `0` ends it
//! on read.

use crate::{
	Result,
	error::TypeError,
	value::{Date, ScalarKind, Value},
};

/// Width of the length prefix in front of a Text payload.
pub const TEXT_LENGTH_PREFIX: usize = 4;

fn malformed(kind: ScalarKind, reason: impl Into<String>) -> crate::Error {
	TypeError::Encoding {
		kind,
		reason: reason.into(),
	}
	.into()
}

/// Number of bytes `value` occupies when encoded. CharString reports its
/// unpadded length and fails on a payload with a `0` byte.
pub fn encoded_len(value: &Value) -> Result<usize> {
	match value {
		Value::Null {
			kind: ScalarKind::Null,
		} => Ok(0),
		Value::Null {
			kind,
		} => Err(malformed(*kind, "null values have no encoding")),
		Value::CharString(bytes) => match bytes.iter().position(|b| *b == 0) {
			Some(at) => Err(malformed(ScalarKind::CharString, format!("zero byte at offset {}", at))),
			None => Ok(bytes.len()),
		},
		Value::Text(bytes) => Ok(TEXT_LENGTH_PREFIX + bytes.len()),
		other => Ok(other.kind().fixed_size().unwrap_or(0)),
	}
}

/// Writes `value` into the front of `slot` and returns the number of bytes
/// written. CharString payloads are zero padded to the whole slot.
pub fn encode_into(value: &Value, slot: &mut [u8]) -> Result<usize> {
	let needed = encoded_len(value)?;
	if slot.len() < needed {
		return Err(malformed(
			value.kind(),
			format!("needs {} bytes, slot has {}", needed, slot.len()),
		));
	}

	match value {
		Value::Integer(v) => slot[..4].copy_from_slice(&v.to_le_bytes()),
		Value::Float(v) => slot[..4].copy_from_slice(&v.to_le_bytes()),
		Value::Date(v) => slot[..4].copy_from_slice(&v.to_packed().to_le_bytes()),
		Value::Boolean(v) => slot[0] = u8::from(*v),
		Value::CharString(bytes) => {
			slot[..bytes.len()].copy_from_slice(bytes);
			slot[bytes.len()..].fill(0);
			return Ok(slot.len());
		}
		Value::Text(bytes) => {
			let len = u32::try_from(bytes.len())
				.map_err(|_| malformed(ScalarKind::Text, "payload longer than u32::MAX"))?;
			slot[..TEXT_LENGTH_PREFIX].copy_from_slice(&len.to_le_bytes());
			slot[TEXT_LENGTH_PREFIX..needed].copy_from_slice(bytes);
		}
		Value::Null {
			..
		} => {}
	}
	Ok(needed)
}

/// Encodes `value` into a new buffer of exactly its encoded length.
pub fn encode(value: &Value) -> Result<Vec<u8>> {
	let mut buffer = vec![0u8; encoded_len(value)?];
	encode_into(value, &mut buffer)?;
	Ok(buffer)
}

/// Reads a non-null value of `kind` from the front of `bytes`.
pub fn decode(kind: ScalarKind, bytes: &[u8]) -> Result<Value> {
	match kind {
		ScalarKind::Integer => Ok(Value::Integer(i32::from_le_bytes(fixed(kind, bytes)?))),
		ScalarKind::Float => Ok(Value::Float(f32::from_le_bytes(fixed(kind, bytes)?))),
		ScalarKind::Date => {
			let packed = i32::from_le_bytes(fixed(kind, bytes)?);
			Date::from_packed(packed)
				.map(Value::Date)
				.ok_or_else(|| malformed(kind, format!("{} is not a packed date", packed)))
		}
		ScalarKind::Boolean => match bytes.first() {
			Some(0) => Ok(Value::Boolean(false)),
			Some(1) => Ok(Value::Boolean(true)),
			Some(b) => Err(malformed(kind, format!("byte {:#04x} is not a boolean", b))),
			None => Err(malformed(kind, "needs 1 byte, got 0")),
		},
		ScalarKind::CharString => {
			let end = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());
			Ok(Value::chars(&bytes[..end]))
		}
		ScalarKind::Text => {
			let prefix: [u8; TEXT_LENGTH_PREFIX] = fixed(kind, bytes)?;
			let len = u32::from_le_bytes(prefix) as usize;
			let payload = bytes[TEXT_LENGTH_PREFIX..].get(..len).ok_or_else(|| {
				malformed(
					kind,
					format!("length prefix {} exceeds {} payload bytes", len, bytes.len() - TEXT_LENGTH_PREFIX),
				)
			})?;
			Ok(Value::text(payload))
		}
		ScalarKind::Null => Ok(Value::null(ScalarKind::Null)),
	}
}

fn fixed<const N: usize>(kind: ScalarKind, bytes: &[u8]) -> Result<[u8; N]> {
	bytes.get(..N)
		.and_then(|b| <[u8; N]>::try_from(b).ok())
		.ok_or_else(|| malformed(kind, format!("needs {} bytes, got {}", N, bytes.len())))
}
