//! Server entrypoint.

// Bin target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use anyhow::Context;
use clap::Parser;
use portfolio_server::{ServerConfig, init_logging, run};

fn main() -> anyhow::Result<()> {
	init_logging();

	let config = ServerConfig::parse();
	run(&config).with_context(|| format!("serving on {}", config.addr))
}
