//! Report ingestion and submission: file capture, preview, upload, result
//! rendering.

mod markdown;
mod panel;
mod picker;
mod render;

pub use panel::AnalyzerPanel;
pub use picker::UploadPanel;
pub use render::AnalysisResultPanel;

use api::{AnalysisOutcome, FilePayload};
use base64::Engine as _;

/// A file captured from the drop zone or picker, plus its preview.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
    /// `data:` URL thumbnail, present only for image files.
    pub preview: Option<String>,
}

impl SelectedFile {
    pub fn new(name: String, bytes: Vec<u8>) -> Self {
        let mime = guess_mime(&name).to_string();
        let preview = if mime.starts_with("image/") {
            Some(format!(
                "data:{mime};base64,{}",
                base64::engine::general_purpose::STANDARD.encode(&bytes)
            ))
        } else {
            None
        };
        Self {
            name,
            mime,
            bytes,
            preview,
        }
    }

    pub fn payload(&self) -> FilePayload {
        FilePayload {
            name: self.name.clone(),
            mime: self.mime.clone(),
            bytes: self.bytes.clone(),
        }
    }
}

/// Where the analyze flow currently stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnalysisPhase {
    #[default]
    Idle,
    Loading,
    Ready(AnalysisOutcome),
    Failed(String),
}

pub(crate) const NO_FILE_MESSAGE: &str = "Please select a file first.";

/// Gate for the Analyze button: no file means no request, ever.
pub(crate) fn submission(selected: Option<&SelectedFile>) -> Result<FilePayload, &'static str> {
    selected.map(SelectedFile::payload).ok_or(NO_FILE_MESSAGE)
}

fn guess_mime(name: &str) -> &'static str {
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}
