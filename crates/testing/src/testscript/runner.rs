// SPDX-License-Identifier: MIT
// Copyright (c) 2025 mintdb

use std::{env, error::Error, fs, path::Path};

use tracing::debug;

use crate::testscript::{
	command::Command,
	parser::{SEPARATOR, parse},
};

/// Executes the commands of a script.
pub trait Runner {
	/// Runs one command and returns its output. An error is the command's
	/// output when the command is marked to fail, and aborts the script
	/// otherwise.
	fn run(&mut self, command: &Command) -> Result<String, Box<dyn Error>>;
}

/// Runs the script at `path` and compares the produced output with the
/// expected one in the script.
pub fn run_path<R: Runner>(runner: &mut R, path: &Path) -> Result<(), Box<dyn Error>> {
	let input = fs::read_to_string(path)?;
	let output = generate(runner, &input)?;

	if output.trim_end() == input.trim_end() {
		return Ok(());
	}

	if env::var("UPDATE_TESTSCRIPTS").is_ok_and(|v| v == "1") {
		fs::write(path, format!("{}\n", output.trim_end()))?;
		return Ok(());
	}

	Err(format!("{}: output does not match\n{}", path.display(), mismatch(&input, &output)).into())
}

/// Runs every command of `input` and renders the script with the actual
/// output in place of the expected one.
pub fn generate<R: Runner + ?Sized>(runner: &mut R, input: &str) -> Result<String, Box<dyn Error>> {
	let mut output = String::with_capacity(input.len());

	for block in parse(input)? {
		output.push_str(&block.literal);
		if block.commands.is_empty() {
			continue;
		}

		output.push_str(SEPARATOR);
		output.push('\n');

		for command in &block.commands {
			debug!(line = command.line_number, name = %command.name, "running command");

			let text = match (command.fail, runner.run(command)) {
				(false, Ok(text)) => text,
				(true, Err(err)) => format!("Error: {}", err),
				(false, Err(err)) => {
					return Err(format!("line {}: '{}' failed: {}", command.line_number, command.name, err)
						.into());
				}
				(true, Ok(text)) => {
					return Err(format!(
						"line {}: '{}' was expected to fail, got: {}",
						command.line_number,
						command.name,
						text.trim_end()
					)
					.into());
				}
			};

			output.push_str(&text);
			if !text.is_empty() && !text.ends_with('\n') {
				output.push('\n');
			}
		}
		output.push('\n');
	}

	Ok(output)
}

fn mismatch(expected: &str, actual: &str) -> String {
	let first = expected.lines().zip(actual.lines()).position(|(e, a)| e != a).unwrap_or_else(|| {
		expected.lines().count().min(actual.lines().count())
	});
	format!(
		"first difference at line {}\nexpected: {:?}\nactual:   {:?}\n\n{}",
		first + 1,
		expected.lines().nth(first).unwrap_or(""),
		actual.lines().nth(first).unwrap_or(""),
		actual
	)
}

#[cfg(test)]
pub mod tests {
	use super::*;

	/// Echoes its positional arguments, `fail` fails.
	struct Echo;

	impl Runner for Echo {
		fn run(&mut self, command: &Command) -> Result<String, Box<dyn Error>> {
			match command.name.as_str() {
				"echo" => {
					let mut args = command.consume_args();
					let mut out = Vec::new();
					while let Some(arg) = args.next_pos() {
						out.push(arg.value.clone());
					}
					args.reject_rest()?;
					Ok(out.join(" "))
				}
				"silent" => Ok(String::new()),
				"fail" => Err("boom".into()),
				name => Err(format!("unknown command {}", name).into()),
			}
		}
	}

	#[test]
	fn test_generate_replaces_output() {
		let script = "echo a 'b c'\necho d\n---\nstale\n\n# note\n!fail\n---\nstale\n";
		let output = generate(&mut Echo, script).unwrap();
		assert_eq!(output, "echo a 'b c'\necho d\n---\na b c\nd\n\n# note\n!fail\n---\nError: boom\n\n");
	}

	#[test]
	fn test_generate_empty_output() {
		let output = generate(&mut Echo, "silent\n---\n\necho x\n---\nx\n").unwrap();
		assert_eq!(output, "silent\n---\n\necho x\n---\nx\n\n");
	}

	#[test]
	fn test_unexpected_failure_aborts() {
		let err = generate(&mut Echo, "fail\n---\n").unwrap_err();
		assert_eq!(err.to_string(), "line 1: 'fail' failed: boom");
	}

	#[test]
	fn test_unexpected_success_aborts() {
		let err = generate(&mut Echo, "!echo x\n---\n").unwrap_err();
		assert!(err.to_string().contains("expected to fail"));
	}

	#[test]
	fn test_unused_argument_is_an_error() {
		assert!(generate(&mut Echo, "echo key=value\n---\n").is_err());
	}

	#[test]
	fn test_mismatch_reports_first_line() {
		let report = mismatch("a\nb\n", "a\nc\n");
		assert!(report.starts_with("first difference at line 2\nexpected: \"b\"\nactual:   \"c\""));
	}
}
