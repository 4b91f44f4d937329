//! Shared wire types and the HTTP client for the Vitalens analysis service.
//!
//! The server is an external collaborator reached over two endpoints:
//! `POST /analyze` (multipart report upload) and `GET /api/history`
//! (previously analyzed reports). Everything else is client-side.

mod client;
mod model;

pub use client::{ApiClient, ApiError, FilePayload};
pub use model::{AnalysisOutcome, Reading, Report, StructuredAnalysis};
