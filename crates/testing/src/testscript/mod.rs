// SPDX-License-Identifier: MIT
// Copyright (c) 2025 mintdb

//! Script-driven tests.
//!
//! A script is a sequence of blocks. Each block lists one or more commands,
//! a `---` separator and the output the commands are expected to produce,
//! terminated by an empty line or the end of the file:
//!
//! ```text
//! # lines starting with '#' are comments
//! compare int=1 float=1.5
//! ---
//! Less
//!
//! !cast date=2024-01-01 int
//! ---
//! Error: CAST_001: unsupported cast from Date to Integer
//! ```
//!
//! Arguments are either positional (`int`) or keyed (`int=1`). Values may be
//! quoted with `'` or `"` to include whitespace. A `!` before the command
//! name means the command is expected to fail; its output is the error.
//!
//! Set `UPDATE_TESTSCRIPTS=1` to rewrite scripts with the actual output.

mod command;
mod parser;
mod runner;

pub use command::{Argument, ArgumentConsumer, Command};
pub use parser::{Block, parse};
pub use runner::{Runner, generate, run_path};
