//! Response Envelope
//!
//! Every endpoint answers with a JSON object carrying a `status` of
//! `"success"` or `"failed"` and, usually, a human readable `message`.

use std::borrow::Cow;

use serde::Serialize;

/// Outcome marker serialized as `"success"` / `"failed"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Failed,
}

/// Plain `{status, message}` body
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub status: Status,
    pub message: Cow<'static, str>,
}

impl MessageResponse {
    pub fn success(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            status: Status::Success,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            status: Status::Failed,
            message: message.into(),
        }
    }
}
