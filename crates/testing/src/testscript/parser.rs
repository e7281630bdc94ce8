// SPDX-License-Identifier: MIT
// Copyright (c) 2025 mintdb

use std::{error::Error, mem::take};

use nom::{
	IResult,
	branch::alt,
	bytes::complete::{take_while, take_while1},
	character::complete::{char, space0, space1},
	combinator::{all_consuming, map, opt, verify},
	multi::many0,
	sequence::{delimited, pair, preceded, terminated},
};

use crate::testscript::command::{Argument, Command};

pub(crate) const SEPARATOR: &str = "---";

/// Commands sharing one expected output section.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
	/// Comment, blank and command lines before the separator, verbatim.
	pub literal: String,
	pub commands: Vec<Command>,
}

/// Splits a script into blocks. Expected output sections are skipped, they
/// are regenerated by running the commands.
pub fn parse(input: &str) -> Result<Vec<Block>, Box<dyn Error>> {
	let mut blocks = Vec::new();
	let mut literal = String::new();
	let mut commands = Vec::new();

	let mut lines = input.lines().enumerate();
	while let Some((idx, line)) = lines.next() {
		let line_number = idx as u32 + 1;

		if line == SEPARATOR {
			if commands.is_empty() {
				return Err(format!("line {}: separator without commands", line_number).into());
			}
			for (_, output) in lines.by_ref() {
				if output.trim().is_empty() {
					break;
				}
			}
			blocks.push(Block {
				literal: take(&mut literal),
				commands: take(&mut commands),
			});
			continue;
		}

		literal.push_str(line);
		literal.push('\n');

		let trimmed = line.trim();
		if trimmed.is_empty() || trimmed.starts_with('#') {
			continue;
		}
		commands.push(parse_command(line, line_number)?);
	}

	if !commands.is_empty() {
		return Err(format!("missing '{}' after the last commands", SEPARATOR).into());
	}
	if !literal.is_empty() {
		blocks.push(Block {
			literal,
			commands,
		});
	}
	Ok(blocks)
}

/// Parses a single command line.
pub(crate) fn parse_command(line: &str, line_number: u32) -> Result<Command, Box<dyn Error>> {
	let (_, (fail, name, args)) = all_consuming(command_line)(line)
		.map_err(|err| format!("line {}: invalid command '{}': {}", line_number, line, err))?;
	Ok(Command {
		name: name.to_string(),
		args,
		fail,
		line_number,
	})
}

fn command_line(input: &str) -> IResult<&str, (bool, &str, Vec<Argument>)> {
	let (input, _) = space0(input)?;
	let (input, fail) = opt(char('!'))(input)?;
	let (input, name) = take_while1(|c: char| !c.is_whitespace())(input)?;
	let (input, args) = many0(preceded(space1, argument))(input)?;
	let (input, _) = space0(input)?;
	Ok((input, (fail.is_some(), name, args)))
}

fn argument(input: &str) -> IResult<&str, Argument> {
	map(pair(opt(key), alt((quoted, bare))), |(key, value): (Option<&str>, &str)| Argument {
		key: key.map(str::to_string),
		value: value.to_string(),
	})(input)
}

fn key(input: &str) -> IResult<&str, &str> {
	terminated(take_while1(|c: char| c.is_alphanumeric() || c == '_'), char('='))(input)
}

fn quoted(input: &str) -> IResult<&str, &str> {
	alt((
		delimited(char('\''), take_while(|c: char| c != '\''), char('\'')),
		delimited(char('"'), take_while(|c: char| c != '"'), char('"')),
	))(input)
}

fn bare(input: &str) -> IResult<&str, &str> {
	verify(take_while1(|c: char| !c.is_whitespace()), |s: &str| !s.starts_with(['\'', '"']))(input)
}
