//! Print-job payload helpers
//!
//! The print flow ships rendered ESC/POS bytes over HTTP: hex or base64
//! strings in JSON responses for local agents, or a cloud print-job payload
//! carrying the same bytes as base64 content. The HTTP client itself lives
//! outside this crate.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

pub fn to_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

pub fn from_base64(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(s)
}

pub fn to_hex(data: &[u8]) -> String {
    hex::encode(data)
}

/// Cloud print-job payload: the relay expects raw printer bytes as base64
/// `content` with a `raw_base64` content type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintJob {
    pub printer_id: i64,
    pub title: String,
    pub content_type: String,
    pub content: String,
    pub source: String,
}

impl PrintJob {
    pub fn raw_base64(printer_id: i64, title: impl Into<String>, data: &[u8]) -> Self {
        Self {
            printer_id,
            title: title.into(),
            content_type: "raw_base64".to_string(),
            content: to_base64(data),
            source: "cardapio".to_string(),
        }
    }
}
