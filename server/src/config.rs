//! Command-line and environment configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::resume::ResumeLocator;

/// Serves the portfolio resume and, optionally, the built client.
#[derive(Clone, Debug, Parser)]
#[command(name = "portfolio-server", version, about)]
pub struct ServerConfig {
	/// Address to listen on.
	#[arg(long, env = "PORTFOLIO_ADDR", default_value = "0.0.0.0:5000")]
	pub addr: SocketAddr,

	/// Directory holding the resume files.
	#[arg(long, env = "PORTFOLIO_ASSETS", default_value = "attached_assets")]
	pub assets_dir: PathBuf,

	/// Built client bundle (e.g. `dist`) to serve for every other path.
	#[arg(long, env = "PORTFOLIO_STATIC")]
	pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
	pub fn resume_locator(&self) -> ResumeLocator {
		ResumeLocator::in_dir(&self.assets_dir)
	}
}
