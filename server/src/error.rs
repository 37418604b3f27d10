//! Server error type.

use std::net::SocketAddr;

use thiserror::Error;

/// Failures that stop the server or a single response.
#[derive(Debug, Error)]
pub enum ServerError {
	#[error("failed to bind {addr}: {reason}")]
	Bind {
		addr: SocketAddr,
		reason: Box<dyn std::error::Error + Send + Sync>,
	},
	#[error("i/o error: {0}")]
	Io(#[from] std::io::Error),
	#[error("failed to encode response body: {0}")]
	Encode(#[from] serde_json::Error),
}
