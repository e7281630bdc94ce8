// SPDX-License-Identifier: MIT
// Copyright (c) 2025 mintdb

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{error::TypeError, value::ScalarKind};

/// User-facing description of a failure, as shipped to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}: {}", self.code, self.message)?;
		if let Some(cause) = &self.cause {
			write!(f, " (cause: {})", cause)?;
		}
		Ok(())
	}
}

impl Diagnostic {
	/// Multi-line rendering with label, help, notes and the cause chain.
	pub fn render(&self) -> String {
		let mut out = String::new();
		self.render_into(&mut out, 0);
		out
	}

	fn render_into(&self, out: &mut String, depth: usize) {
		let indent = "  ".repeat(depth);
		out.push_str(&format!("{indent}error[{}]: {}\n", self.code, self.message));
		if let Some(label) = &self.label {
			out.push_str(&format!("{indent}  = {label}\n"));
		}
		if let Some(help) = &self.help {
			out.push_str(&format!("{indent}  help: {help}\n"));
		}
		for note in &self.notes {
			out.push_str(&format!("{indent}  note: {note}\n"));
		}
		if let Some(cause) = &self.cause {
			out.push_str(&format!("{indent}  caused by:\n"));
			cause.render_into(out, depth + 2);
		}
	}
}

fn supported_targets(from: ScalarKind) -> &'static str {
	match from {
		ScalarKind::Integer => "Float, CharString, Text, Boolean",
		ScalarKind::Float => "Integer, CharString, Text",
		ScalarKind::CharString | ScalarKind::Text => "Integer, Float, CharString, Text, Date, Boolean",
		ScalarKind::Date => "CharString, Text",
		ScalarKind::Boolean => "Integer, Float, CharString, Text",
		ScalarKind::Null => "every kind",
	}
}

impl IntoDiagnostic for TypeError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			TypeError::UnsupportedCast {
				from,
				to,
			} => Diagnostic {
				code: "CAST_001".to_string(),
				message,
				label: Some(format!("cannot cast {} to {}", from, to)),
				help: Some("ensure the source and target kinds are compatible for casting".to_string()),
				notes: vec![format!("{} casts to: {}", from, supported_targets(from))],
				cause: None,
			},

			TypeError::InvalidLiteral {
				target,
				..
			} => Diagnostic {
				code: "CAST_002".to_string(),
				message,
				label: Some(format!("failed to cast to {}", target)),
				help: Some(match target {
					ScalarKind::Integer => "use a decimal integer such as 42 or -7".to_string(),
					ScalarKind::Float => "use a decimal number such as 3.14 or 1e-3".to_string(),
					ScalarKind::Date => "use the format YYYY-MM-DD such as 2024-01-31".to_string(),
					ScalarKind::Boolean => "use true, false, t, f, 1 or 0".to_string(),
					ScalarKind::Null => "use the NULL keyword".to_string(),
					ScalarKind::CharString | ScalarKind::Text => "check the literal text".to_string(),
				}),
				notes: vec![],
				cause: None,
			},

			TypeError::NumericOverflow {
				target,
				..
			} => Diagnostic {
				code: "CAST_003".to_string(),
				message,
				label: Some(format!("not representable as {}", target)),
				help: None,
				notes: vec![match target {
					ScalarKind::Integer => {
						format!("{} holds values from {} to {}", target, i32::MIN, i32::MAX)
					}
					_ => format!(
						"{} holds finite values up to {} and integers exactly up to {} in magnitude",
						target,
						f32::MAX,
						1u32 << 24
					),
				}],
				cause: None,
			},

			TypeError::IncomparableTypes {
				left,
				right,
			} => Diagnostic {
				code: "TYPE_001".to_string(),
				message,
				label: Some("operands have no common kind".to_string()),
				help: Some("cast one operand explicitly".to_string()),
				notes: vec![
					format!("Left operand is of kind: {}", left),
					format!("Right operand is of kind: {}", right),
				],
				cause: None,
			},

			TypeError::CoercionFailed {
				operand,
				cause,
				..
			} => Diagnostic {
				code: "TYPE_002".to_string(),
				message,
				label: Some(format!("{} operand could not be converted", operand)),
				help: None,
				notes: vec![],
				cause: Some(Box::new(cause.diagnostic())),
			},

			TypeError::KindMismatch {
				..
			} => Diagnostic {
				code: "TYPE_003".to_string(),
				message,
				label: None,
				help: Some("coerce operands to a common kind before dispatching".to_string()),
				notes: vec![],
				cause: None,
			},

			TypeError::Encoding {
				..
			} => Diagnostic {
				code: "ENCODE_001".to_string(),
				message,
				label: None,
				help: None,
				notes: vec![],
				cause: None,
			},
		}
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;
	use crate::{Error, Operand};

	#[test]
	fn test_codes() {
		let cases = [
			(
				TypeError::UnsupportedCast {
					from: ScalarKind::Date,
					to: ScalarKind::Boolean,
				},
				"CAST_001",
			),
			(
				TypeError::InvalidLiteral {
					text: "x".to_string(),
					target: ScalarKind::Date,
					reason: "expected YYYY-MM-DD".to_string(),
				},
				"CAST_002",
			),
			(
				TypeError::NumericOverflow {
					text: "1e40".to_string(),
					target: ScalarKind::Float,
				},
				"CAST_003",
			),
			(
				TypeError::IncomparableTypes {
					left: ScalarKind::Date,
					right: ScalarKind::Float,
				},
				"TYPE_001",
			),
			(
				TypeError::KindMismatch {
					behavior: ScalarKind::Integer,
					actual: ScalarKind::Text,
				},
				"TYPE_003",
			),
			(
				TypeError::Encoding {
					kind: ScalarKind::Boolean,
					reason: "byte 0x02".to_string(),
				},
				"ENCODE_001",
			),
		];
		for (err, code) in cases {
			assert_eq!(err.into_diagnostic().code, code);
		}
	}

	#[test]
	fn test_coercion_failed_keeps_cause() {
		let cause: Error = TypeError::InvalidLiteral {
			text: "abc".to_string(),
			target: ScalarKind::Integer,
			reason: "not a number".to_string(),
		}
		.into();
		let diagnostic = TypeError::CoercionFailed {
			operand: Operand::Left,
			from: ScalarKind::CharString,
			target: ScalarKind::Integer,
			cause: Box::new(cause),
		}
		.into_diagnostic();

		assert_eq!(diagnostic.code, "TYPE_002");
		assert_eq!(diagnostic.cause.as_ref().map(|c| c.code.as_str()), Some("CAST_002"));
		assert_eq!(
			diagnostic.to_string(),
			"TYPE_002: failed to coerce left operand from CharString to Integer \
			 (cause: CAST_002: invalid Integer literal 'abc': not a number)"
		);
	}

	#[test]
	fn test_render() {
		let diagnostic = TypeError::UnsupportedCast {
			from: ScalarKind::Date,
			to: ScalarKind::Boolean,
		}
		.into_diagnostic();
		let rendered = diagnostic.render();
		assert!(rendered.starts_with("error[CAST_001]: unsupported cast from Date to Boolean\n"));
		assert!(rendered.contains("note: Date casts to: CharString, Text"));
	}

	#[test]
	fn test_render_cause_chain() {
		let cause: Error = TypeError::NumericOverflow {
			text: "16777217".to_string(),
			target: ScalarKind::Float,
		}
		.into();
		let rendered = TypeError::CoercionFailed {
			operand: Operand::Left,
			from: ScalarKind::Integer,
			target: ScalarKind::Float,
			cause: Box::new(cause),
		}
		.into_diagnostic()
		.render();

		let lines: Vec<&str> = rendered.lines().collect();
		assert_eq!(lines[0], "error[TYPE_002]: failed to coerce left operand from Integer to Float");
		let caused_by = lines.iter().position(|l| *l == "  caused by:").unwrap();
		assert_eq!(lines[caused_by + 1], "    error[CAST_003]: value '16777217' is out of range for Float");
		assert!(rendered.ends_with('\n'));
	}

	#[test]
	fn test_serde_roundtrip() {
		let diagnostic = TypeError::IncomparableTypes {
			left: ScalarKind::Date,
			right: ScalarKind::Integer,
		}
		.into_diagnostic();
		let json = serde_json::to_string(&diagnostic).unwrap();
		let recovered: Diagnostic = serde_json::from_str(&json).unwrap();
		assert_eq!(diagnostic, recovered);
	}
}
