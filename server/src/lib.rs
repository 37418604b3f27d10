//! portfolio-server: resume download endpoint for the portfolio site.
//!
//! `GET /resume` streams the resume as an attachment, or answers 404 with a
//! JSON message when no resume file is present. When configured with a
//! static directory the server also hosts the built client.

// Error context for the binary.
use anyhow as _;
use log::{LevelFilter, info, warn};
use tiny_http::{Response, Server, StatusCode};

pub mod config;
pub mod error;
pub mod resume;
pub mod routes;

pub use config::ServerConfig;
pub use error::ServerError;
pub use resume::{ResumeLocator, ResumeOutcome};

/// Logs at Info by default; `RUST_LOG` overrides.
pub fn init_logging() {
	env_logger::builder()
		.filter_level(LevelFilter::Info)
		.parse_default_env()
		.init();
}

/// Accepts requests until the listener closes.
pub fn run(config: &ServerConfig) -> Result<(), ServerError> {
	let server = Server::http(config.addr).map_err(|reason| ServerError::Bind {
		addr: config.addr,
		reason,
	})?;
	info!("portfolio-server: listening on http://{}", config.addr);
	info!(
		"portfolio-server: resume from {}, static files from {}",
		config.assets_dir.display(),
		config
			.static_dir
			.as_ref()
			.map_or_else(|| "<none>".to_string(), |d| d.display().to_string())
	);

	for request in server.incoming_requests() {
		let (method, url) = (request.method().clone(), request.url().to_string());
		let reply = match routes::route(&method, &url, config) {
			Ok(reply) => reply,
			Err(e) => {
				warn!("portfolio-server: {} {} failed: {}", method, url, e);
				let _ = request.respond(Response::empty(StatusCode(500)));
				continue;
			}
		};
		info!("portfolio-server: {} {} -> {}", method, url, reply.status);
		if let Err(e) = routes::send(request, reply) {
			warn!("portfolio-server: {} {} not delivered: {}", method, url, e);
		}
	}
	Ok(())
}
