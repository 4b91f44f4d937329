//! Typed HTTP client for the analysis service.
//!
//! Transport is platform-split: `gloo-net` in the browser, `reqwest` on
//! native builds. Both paths funnel into the same error taxonomy so the UI
//! layer never sees transport details.

use crate::model::{AnalysisEnvelope, AnalysisOutcome, ErrorEnvelope, Report};

/// A file captured from the picker or drop zone, ready for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePayload {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Failures surfaced by the analysis service or the transport underneath it.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// Network-level failure before any response arrived.
    #[error("connection failed: {0}")]
    Transport(String),
    /// Non-2xx response; `message` carries the server's `error` field when
    /// the body was decodable, otherwise the HTTP status text.
    #[error("{message}")]
    Status { code: u16, message: String },
    /// Response arrived but its body did not match the contract.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Client for the two service endpoints.
///
/// `base` is prefixed onto every path. The web build uses the default empty
/// base (same-origin relative URLs); desktop passes an explicit origin.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    /// Submits a report file as multipart form data (field `file`) and
    /// classifies the returned `analysis` payload.
    pub async fn analyze(&self, file: FilePayload) -> Result<AnalysisOutcome, ApiError> {
        let raw = self.post_analyze(file).await?;
        Ok(AnalysisOutcome::classify(&raw))
    }

    /// Fetches the full report history. No pagination or filtering exists on
    /// this endpoint.
    pub async fn history(&self) -> Result<Vec<Report>, ApiError> {
        self.get_history().await
    }

    #[cfg(target_arch = "wasm32")]
    async fn post_analyze(&self, file: FilePayload) -> Result<String, ApiError> {
        use gloo_net::http::Request;
        use wasm_bindgen::JsValue;

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(file.bytes.as_slice()).buffer());
        let opts = web_sys::BlobPropertyBag::new();
        opts.set_type(&file.mime);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| ApiError::Transport("unable to package file".into()))?;

        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Transport("unable to build form data".into()))?;
        form.append_with_blob_and_filename("file", &blob, &file.name)
            .map_err(|_| ApiError::Transport("unable to attach file".into()))?;

        let response = Request::post(&self.url("/analyze"))
            .body(JsValue::from(form))
            .map_err(|err| ApiError::Transport(err.to_string()))?
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        if !response.ok() {
            let code = response.status();
            let message = match response.json::<ErrorEnvelope>().await {
                Ok(envelope) => envelope.error,
                Err(_) => response.status_text(),
            };
            return Err(ApiError::Status { code, message });
        }

        let envelope: AnalysisEnvelope = response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        Ok(envelope.analysis)
    }

    #[cfg(target_arch = "wasm32")]
    async fn get_history(&self) -> Result<Vec<Report>, ApiError> {
        use gloo_net::http::Request;

        let response = Request::get(&self.url("/api/history"))
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status {
                code: response.status(),
                message: response.status_text(),
            });
        }

        response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn post_analyze(&self, file: FilePayload) -> Result<String, ApiError> {
        let part = reqwest::multipart::Part::bytes(file.bytes)
            .file_name(file.name)
            .mime_str(&file.mime)
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = reqwest::Client::new()
            .post(self.url("/analyze"))
            .multipart(form)
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorEnvelope>().await {
                Ok(envelope) => envelope.error,
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string(),
            };
            return Err(ApiError::Status {
                code: status.as_u16(),
                message,
            });
        }

        let envelope: AnalysisEnvelope = response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        Ok(envelope.analysis)
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn get_history(&self) -> Result<Vec<Report>, ApiError> {
        let response = reqwest::Client::new()
            .get(self.url("/api/history"))
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                code: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string(),
            });
        }

        response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}
