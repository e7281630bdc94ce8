// SPDX-License-Identifier: MIT
// Copyright (c) 2025 mintdb

pub mod testscript;

use tracing_subscriber::{EnvFilter, fmt};

/// Installs a test-friendly tracing subscriber, filtered by `RUST_LOG`.
///
/// Safe to call from every test: only the first call installs anything.
pub fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
}
