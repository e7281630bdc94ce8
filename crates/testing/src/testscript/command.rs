// SPDX-License-Identifier: MIT
// Copyright (c) 2025 mintdb

use std::{collections::VecDeque, error::Error, str::FromStr};

/// A single command line of a script.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
	pub name: String,
	pub args: Vec<Argument>,
	/// The command is expected to fail.
	pub fail: bool,
	/// 1-based line of the command in the script.
	pub line_number: u32,
}

/// A positional (`value`) or keyed (`key=value`) argument.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
	pub key: Option<String>,
	pub value: String,
}

impl Argument {
	/// The argument as it would be written in a script.
	pub fn name(&self) -> String {
		match &self.key {
			Some(key) => format!("{}={}", key, self.value),
			None => self.value.clone(),
		}
	}

	pub fn parse<T: FromStr>(&self) -> Result<T, Box<dyn Error>> {
		self.value.parse::<T>().map_err(|_| format!("invalid argument '{}'", self.name()).into())
	}
}

impl Command {
	pub fn consume_args(&self) -> ArgumentConsumer<'_> {
		ArgumentConsumer {
			args: self.args.iter().collect(),
		}
	}
}

/// Hands out a command's arguments one by one, so that a runner can reject
/// the ones it did not use.
pub struct ArgumentConsumer<'a> {
	args: VecDeque<&'a Argument>,
}

impl<'a> ArgumentConsumer<'a> {
	/// Takes the next argument, positional or keyed.
	pub fn next_arg(&mut self) -> Option<&'a Argument> {
		self.args.pop_front()
	}

	/// Takes the first positional argument.
	pub fn next_pos(&mut self) -> Option<&'a Argument> {
		let idx = self.args.iter().position(|a| a.key.is_none())?;
		self.args.remove(idx)
	}

	/// Takes the first keyed argument.
	pub fn next_key(&mut self) -> Option<&'a Argument> {
		let idx = self.args.iter().position(|a| a.key.is_some())?;
		self.args.remove(idx)
	}

	/// Takes the last argument with the given key.
	pub fn lookup(&mut self, key: &str) -> Option<&'a Argument> {
		let idx = self.args.iter().rposition(|a| a.key.as_deref() == Some(key))?;
		self.args.remove(idx)
	}

	pub fn lookup_parse<T: FromStr>(&mut self, key: &str) -> Result<Option<T>, Box<dyn Error>> {
		self.lookup(key).map(Argument::parse).transpose()
	}

	pub fn rest(&mut self) -> Vec<&'a Argument> {
		self.args.drain(..).collect()
	}

	pub fn reject_rest(&self) -> Result<(), Box<dyn Error>> {
		match self.args.front() {
			Some(arg) => Err(format!("unexpected argument '{}'", arg.name()).into()),
			None => Ok(()),
		}
	}
}
