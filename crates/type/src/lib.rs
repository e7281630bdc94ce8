// SPDX-License-Identifier: MIT
// Copyright (c) 2025 mintdb

//! The typed-value core of mintdb.
//!
//! Every runtime datum is a [`Value`] tagged with a [`ScalarKind`]. Generic
//! code never switches on the kind itself: it looks up the kind's
//! [`TypeBehavior`](behavior::TypeBehavior) and, when two operands differ in
//! kind, goes through the [`coerce`] resolver first.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod behavior;
pub mod coerce;
pub mod error;
pub mod value;

pub use behavior::{CastCost, TypeBehavior, behavior};
pub use coerce::{CompareOp, compare, max, min};
pub use error::{Error, Operand, Result, TypeError};
pub use value::{Date, GetKind, ScalarKind, Value};
