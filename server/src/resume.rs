//! Resume file lookup.
//!
//! Two candidate files are checked in priority order, PDF first. Whichever
//! exists is offered as a download under a fixed name; if neither does the
//! caller gets a human-readable "not available" message.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Download name for the PDF resume.
pub const PDF_FILENAME: &str = "Sai_Gowtham_Padarthi_Resume.pdf";
/// Download name for the Word resume.
pub const DOCX_FILENAME: &str = "Sai_Gowtham_Padarthi_Resume.docx";
/// Shown when no resume file is on disk.
pub const NOT_AVAILABLE: &str = "Resume not available yet. Please check back later.";

const PDF_SOURCE: &str = "resume.pdf";
const DOCX_SOURCE: &str = "Gowtham_NET_Resume_1771800589677.docx";

const PDF_TYPE: &str = "application/pdf";
const DOCX_TYPE: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// JSON body of error replies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Message {
	pub message: String,
}

impl Message {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}
}

/// What a resume request resolves to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResumeOutcome {
	/// Stream `path` as an attachment named `filename`.
	Download {
		path: PathBuf,
		filename: &'static str,
		content_type: &'static str,
	},
	/// Nothing to serve.
	NotFound(Message),
}

/// The two places a resume may live.
#[derive(Clone, Debug)]
pub struct ResumeLocator {
	pub pdf: PathBuf,
	pub docx: PathBuf,
}

impl ResumeLocator {
	/// Standard file names inside `assets_dir`.
	pub fn in_dir(assets_dir: impl AsRef<Path>) -> Self {
		let dir = assets_dir.as_ref();
		Self {
			pdf: dir.join(PDF_SOURCE),
			docx: dir.join(DOCX_SOURCE),
		}
	}

	/// Checks the PDF, then the DOCX.
	pub fn resolve(&self) -> ResumeOutcome {
		if self.pdf.is_file() {
			ResumeOutcome::Download {
				path: self.pdf.clone(),
				filename: PDF_FILENAME,
				content_type: PDF_TYPE,
			}
		} else if self.docx.is_file() {
			ResumeOutcome::Download {
				path: self.docx.clone(),
				filename: DOCX_FILENAME,
				content_type: DOCX_TYPE,
			}
		} else {
			ResumeOutcome::NotFound(Message::new(NOT_AVAILABLE))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn message_serializes_with_message_field() {
		let json = serde_json::to_string(&Message::new("gone")).unwrap();
		assert_eq!(json, r#"{"message":"gone"}"#);
	}

	#[test]
	fn locator_joins_standard_names() {
		let loc = ResumeLocator::in_dir("assets");
		assert_eq!(loc.pdf, Path::new("assets").join("resume.pdf"));
		assert!(loc.docx.ends_with("Gowtham_NET_Resume_1771800589677.docx"));
	}
}
