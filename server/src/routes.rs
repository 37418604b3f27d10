//! Request routing.
//!
//! [`route`] turns a method and URL into a [`Reply`] without touching the
//! connection, and [`send`] writes a reply to a `tiny_http` request.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::warn;
use tiny_http::{Header, Method, Request, Response, StatusCode};

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::resume::{Message, ResumeLocator, ResumeOutcome};

/// Path of the resume download.
pub const RESUME_PATH: &str = "/resume";

/// Response payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Body {
	/// Stream a file from disk.
	File(PathBuf),
	/// Send these bytes.
	Bytes(Vec<u8>),
}

/// A response that has not been written yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
	pub status: u16,
	pub headers: Vec<(&'static str, String)>,
	pub body: Body,
}

impl Reply {
	/// A JSON `{"message": ...}` reply.
	pub fn message(status: u16, message: &Message) -> Result<Self, ServerError> {
		Ok(Self {
			status,
			headers: vec![("Content-Type", "application/json".to_string())],
			body: Body::Bytes(serde_json::to_vec(message)?),
		})
	}

	pub fn not_found() -> Result<Self, ServerError> {
		Self::message(404, &Message::new("Not found"))
	}

	fn file(path: PathBuf, content_type: &str) -> Self {
		Self {
			status: 200,
			headers: vec![("Content-Type", content_type.to_string())],
			body: Body::File(path),
		}
	}

	/// First value of header `name`, matched case-insensitively.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(k, _)| k.eq_ignore_ascii_case(name))
			.map(|(_, v)| v.as_str())
	}
}

/// Maps a request to its reply.
pub fn route(method: &Method, url: &str, config: &ServerConfig) -> Result<Reply, ServerError> {
	let path = url.split(['?', '#']).next().unwrap_or("/");
	let readable = matches!(method, Method::Get | Method::Head);

	if path.strip_suffix('/').unwrap_or(path) == RESUME_PATH {
		if !readable {
			let mut reply = Reply::message(405, &Message::new("Method not allowed"))?;
			reply.headers.push(("Allow", "GET, HEAD".to_string()));
			return Ok(reply);
		}
		return resume_reply(&config.resume_locator());
	}

	match (&config.static_dir, readable) {
		(Some(dir), true) => static_reply(dir, path),
		_ => Reply::not_found(),
	}
}

/// Reply for a resume download.
pub fn resume_reply(locator: &ResumeLocator) -> Result<Reply, ServerError> {
	match locator.resolve() {
		ResumeOutcome::Download {
			path,
			filename,
			content_type,
		} => {
			let mut reply = Reply::file(path, content_type);
			reply.headers.push((
				"Content-Disposition",
				format!("attachment; filename=\"{filename}\""),
			));
			Ok(reply)
		}
		ResumeOutcome::NotFound(message) => Reply::message(404, &message),
	}
}

/// Serves a file from the client bundle; unknown paths get `index.html`
/// so client-side routes survive a reload.
fn static_reply(dir: &Path, path: &str) -> Result<Reply, ServerError> {
	let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
	if parts.iter().any(|p| *p == ".." || *p == "." || p.contains('\\')) {
		return Reply::not_found();
	}

	let mut file = dir.to_path_buf();
	file.extend(&parts);
	if file.is_dir() {
		file.push("index.html");
	}
	if file.is_file() {
		let content_type = content_type(&file);
		return Ok(Reply::file(file, content_type));
	}

	let index = dir.join("index.html");
	if index.is_file() {
		Ok(Reply::file(index, "text/html; charset=utf-8"))
	} else {
		Reply::not_found()
	}
}

fn content_type(path: &Path) -> &'static str {
	match path.extension().and_then(|e| e.to_str()) {
		Some("html") => "text/html; charset=utf-8",
		Some("js") => "text/javascript",
		Some("wasm") => "application/wasm",
		Some("css") => "text/css",
		Some("json") => "application/json",
		Some("svg") => "image/svg+xml",
		Some("png") => "image/png",
		Some("jpg" | "jpeg") => "image/jpeg",
		Some("ico") => "image/x-icon",
		Some("pdf") => "application/pdf",
		_ => "application/octet-stream",
	}
}

/// Writes `reply` to the connection.
pub fn send(request: Request, reply: Reply) -> Result<(), ServerError> {
	let status = StatusCode(reply.status);
	let headers = reply
		.headers
		.iter()
		.filter_map(|(name, value)| Header::from_bytes(name.as_bytes(), value.as_bytes()).ok());

	match reply.body {
		Body::File(path) => match File::open(&path) {
			Ok(file) => {
				let mut response = Response::from_file(file).with_status_code(status);
				for header in headers {
					response.add_header(header);
				}
				request.respond(response)?;
			}
			Err(e) => {
				warn!("portfolio-server: cannot open {}: {}", path.display(), e);
				return send(request, Reply::not_found()?);
			}
		},
		Body::Bytes(bytes) => {
			let mut response = Response::from_data(bytes).with_status_code(status);
			for header in headers {
				response.add_header(header);
			}
			request.respond(response)?;
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn content_types_by_extension() {
		assert_eq!(content_type(Path::new("pkg/app_bg.wasm")), "application/wasm");
		assert_eq!(content_type(Path::new("index.html")), "text/html; charset=utf-8");
		assert_eq!(content_type(Path::new("LICENSE")), "application/octet-stream");
	}

	#[test]
	fn header_lookup_ignores_case() {
		let reply = Reply::not_found().unwrap();
		assert_eq!(reply.header("content-type"), Some("application/json"));
		assert_eq!(reply.header("Allow"), None);
	}
}
