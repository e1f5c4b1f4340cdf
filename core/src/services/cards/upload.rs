//! QR payload resolution.
//!
//! A single upload attempt against the configured image host decides what
//! the QR encodes: the hosted URL on success, a local `file:///` reference on
//! any failure. Failures never cross this boundary and there are no retries.
//! Nothing is cached either: identical content is re-uploaded on every
//! render, matching the original behavior.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use log::{debug, warn};
use std::fs;
use std::path::Path;

use crate::config::AppConfig;

#[derive(Debug, thiserror::Error)]
enum UploadError {
    #[error("no upload key configured")]
    MissingKey,
    #[error("staged file unreadable: {0}")]
    Read(#[from] std::io::Error),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
    #[error("response body carries no data.url")]
    MalformedBody,
}

/// Resolve the string the QR glyph will encode for the staged card at
/// `staged`. Infallible by contract: every failure degrades to the local
/// fallback reference.
pub fn resolve_qr_payload(config: &AppConfig, staged: &Path) -> String {
    let absolute = std::path::absolute(staged).unwrap_or_else(|_| staged.to_path_buf());
    match try_upload(config, &absolute) {
        Ok(url) => {
            debug!("card hosted at {url}");
            url
        }
        Err(e) => {
            warn!("upload skipped or failed ({e}); QR falls back to a local reference");
            local_reference(&absolute)
        }
    }
}

/// Deterministic fallback: a file-scheme string with OS separators
/// normalized to forward slashes.
pub fn local_reference(absolute: &Path) -> String {
    let normalized = absolute
        .display()
        .to_string()
        .replace(std::path::MAIN_SEPARATOR, "/");
    format!("file:///{}", normalized.trim_start_matches('/'))
}

fn try_upload(config: &AppConfig, path: &Path) -> Result<String, UploadError> {
    if config.upload_key.is_empty() {
        return Err(UploadError::MissingKey);
    }

    let encoded = BASE64.encode(fs::read(path)?);
    let client = reqwest::blocking::Client::builder()
        .timeout(config.http_timeout)
        .build()?;
    let response = client
        .post(&config.upload_endpoint)
        .form(&[
            ("key", config.upload_key.as_str()),
            ("image", encoded.as_str()),
        ])
        .send()?;

    if response.status() != reqwest::StatusCode::OK {
        return Err(UploadError::Status(response.status()));
    }

    let body: serde_json::Value =
        serde_json::from_str(&response.text()?).map_err(|_| UploadError::MalformedBody)?;
    body.get("data")
        .and_then(|d| d.get("url"))
        .and_then(|u| u.as_str())
        .map(str::to_string)
        .ok_or(UploadError::MalformedBody)
}
