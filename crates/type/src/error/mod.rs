// SPDX-License-Identifier: MIT
// Copyright (c) 2025 mintdb

use std::{
	fmt,
	fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};

use crate::value::ScalarKind;

pub mod diagnostic;

pub use diagnostic::{Diagnostic, IntoDiagnostic};

pub type Result<T> = std::result::Result<T, Error>;

/// Which side of a binary operation an outcome refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operand {
	Left,
	Right,
}

impl Display for Operand {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Operand::Left => f.write_str("left"),
			Operand::Right => f.write_str("right"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
	#[error("unsupported cast from {from} to {to}")]
	UnsupportedCast {
		from: ScalarKind,
		to: ScalarKind,
	},

	#[error("invalid {target} literal '{text}': {reason}")]
	InvalidLiteral {
		text: String,
		target: ScalarKind,
		reason: String,
	},

	#[error("value '{text}' is out of range for {target}")]
	NumericOverflow {
		text: String,
		target: ScalarKind,
	},

	#[error("cannot compare {left} with {right}")]
	IncomparableTypes {
		left: ScalarKind,
		right: ScalarKind,
	},

	#[error("failed to coerce {operand} operand from {from} to {target}")]
	CoercionFailed {
		operand: Operand,
		from: ScalarKind,
		target: ScalarKind,
		#[source]
		cause: Box<Error>,
	},

	#[error("{behavior} behavior cannot operate on a {actual} value")]
	KindMismatch {
		behavior: ScalarKind,
		actual: ScalarKind,
	},

	#[error("malformed {kind} encoding: {reason}")]
	Encoding {
		kind: ScalarKind,
		reason: String,
	},
}

/// The error every fallible operation of the crate returns.
///
/// Carries the typed [`TypeError`] so callers can match on the outcome;
/// [`Error::diagnostic`] turns it into the user-facing form.
#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Box<TypeError>);

impl Error {
	pub fn kind(&self) -> &TypeError {
		&self.0
	}

	pub fn into_kind(self) -> TypeError {
		*self.0
	}

	pub fn diagnostic(&self) -> Diagnostic {
		(*self.0).clone().into_diagnostic()
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(&self.diagnostic().to_string())
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		std::error::Error::source(self.0.as_ref())
	}
}

impl From<TypeError> for Error {
	fn from(err: TypeError) -> Self {
		Error(Box::new(err))
	}
}

#[cfg(test)]
pub mod tests {
	use std::error::Error as _;

	use super::*;

	#[test]
	fn test_kind_roundtrip() {
		let err: Error = TypeError::UnsupportedCast {
			from: ScalarKind::Date,
			to: ScalarKind::Boolean,
		}
		.into();
		assert!(matches!(err.kind(), TypeError::UnsupportedCast { .. }));
		assert_eq!(
			err.into_kind(),
			TypeError::UnsupportedCast {
				from: ScalarKind::Date,
				to: ScalarKind::Boolean,
			}
		);
	}

	#[test]
	fn test_display_uses_diagnostic_code() {
		let err: Error = TypeError::IncomparableTypes {
			left: ScalarKind::Date,
			right: ScalarKind::Integer,
		}
		.into();
		assert_eq!(err.to_string(), "TYPE_001: cannot compare Date with Integer");
	}

	#[test]
	fn test_coercion_failed_exposes_source() {
		let cause: Error = TypeError::InvalidLiteral {
			text: "abc".to_string(),
			target: ScalarKind::Integer,
			reason: "not a number".to_string(),
		}
		.into();
		let err: Error = TypeError::CoercionFailed {
			operand: Operand::Right,
			from: ScalarKind::CharString,
			target: ScalarKind::Integer,
			cause: Box::new(cause.clone()),
		}
		.into();

		let source = err.source().expect("coercion failure has a source");
		assert_eq!(source.to_string(), cause.to_string());
	}
}
