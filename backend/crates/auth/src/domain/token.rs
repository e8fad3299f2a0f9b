//! Session Token Codec
//!
//! Tokens are `base64url(payload) "." base64url(HMAC-SHA256(payload))`,
//! where the payload is `<user uuid>:<issued_at>:<expires_at>` and each
//! timestamp is `<unix seconds>.<nanoseconds, 9 digits>`.
//! The MAC covers the encoded payload segment, so every field is bound by
//! the signature and no store lookup is needed to check expiry.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::crypto::{from_base64url, hmac_sha256, to_base64url, verify_hmac_sha256};
use thiserror::Error;

use crate::application::config::validity_window;

const SEGMENT_SEPARATOR: char = '.';
const FIELD_SEPARATOR: char = ':';

/// Why a token was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("token is malformed")]
    Malformed,
    #[error("token signature is invalid")]
    SignatureInvalid,
    #[error("token has expired")]
    Expired,
}

/// Verified token contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenClaims {
    pub subject: UserId,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Signs and verifies session tokens with a borrowed secret
#[derive(Clone, Copy)]
pub struct TokenCodec<'a> {
    secret: &'a [u8],
}

impl<'a> TokenCodec<'a> {
    pub fn new(secret: &'a [u8]) -> Self {
        Self { secret }
    }

    /// Issue a token for `subject` valid for `days * 86400 + seconds` from
    /// `issued_at`. Identical inputs under the same secret yield the same
    /// token.
    pub fn encode(
        &self,
        subject: &UserId,
        issued_at: DateTime<Utc>,
        validity_days: i64,
        validity_seconds: i64,
    ) -> String {
        let expires_at = issued_at
            .checked_add_signed(validity_window(validity_days, validity_seconds))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        let payload = format!(
            "{}{sep}{}{sep}{}",
            subject.as_uuid(),
            format_timestamp(&issued_at),
            format_timestamp(&expires_at),
            sep = FIELD_SEPARATOR,
        );
        let payload_segment = to_base64url(payload.as_bytes());
        let signature = hmac_sha256(self.secret, payload_segment.as_bytes());

        format!(
            "{payload_segment}{SEGMENT_SEPARATOR}{}",
            to_base64url(&signature)
        )
    }

    /// Verify against the current time
    pub fn decode(&self, token: &str) -> Result<TokenClaims, DecodeError> {
        self.decode_at(token, Utc::now())
    }

    /// Verify the signature, then the payload, then expiry at `now`
    pub fn decode_at(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, DecodeError> {
        let (payload_segment, signature_segment) = token
            .split_once(SEGMENT_SEPARATOR)
            .ok_or(DecodeError::Malformed)?;
        if payload_segment.is_empty() || signature_segment.contains(SEGMENT_SEPARATOR) {
            return Err(DecodeError::Malformed);
        }

        let signature =
            from_base64url(signature_segment).map_err(|_| DecodeError::SignatureInvalid)?;
        if !verify_hmac_sha256(self.secret, payload_segment.as_bytes(), &signature) {
            return Err(DecodeError::SignatureInvalid);
        }

        let claims = parse_payload(payload_segment).ok_or(DecodeError::Malformed)?;
        if now >= claims.expires_at {
            return Err(DecodeError::Expired);
        }

        Ok(claims)
    }
}

/// Full precision, so expiry is exact to the nanosecond
fn format_timestamp(at: &DateTime<Utc>) -> String {
    format!("{}.{:09}", at.timestamp(), at.timestamp_subsec_nanos())
}

fn parse_timestamp(field: &str) -> Option<DateTime<Utc>> {
    let (secs, nanos) = field.split_once('.')?;
    if nanos.len() != 9 {
        return None;
    }
    DateTime::from_timestamp(secs.parse().ok()?, nanos.parse().ok()?)
}

fn parse_payload(segment: &str) -> Option<TokenClaims> {
    let bytes = from_base64url(segment).ok()?;
    let payload = std::str::from_utf8(&bytes).ok()?;

    let mut fields = payload.split(FIELD_SEPARATOR);
    let subject = UserId::parse_str(fields.next()?).ok()?;
    let issued_at = parse_timestamp(fields.next()?)?;
    let expires_at = parse_timestamp(fields.next()?)?;
    if fields.next().is_some() {
        return None;
    }

    Some(TokenClaims {
        subject,
        issued_at,
        expires_at,
    })
}
