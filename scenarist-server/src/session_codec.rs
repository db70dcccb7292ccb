//! Signed client-side session cookie.
//!
//! The cookie value is `payload.signature`, both base64url without padding.
//! `payload` is the JSON-encoded [`Session`]; `signature` is HMAC-SHA256 of
//! the encoded payload under the configured secret. Anything that fails to
//! verify or parse is treated as a fresh session.
use axum::http::{HeaderMap, HeaderValue, header};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use scenarist_core::Session;
use sha2::Sha256;
use thiserror::Error;

pub const SESSION_COOKIE: &str = "scenarist_session";

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("session cookie is not in payload.signature form")]
    Malformed,
    #[error("session cookie is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("session signature does not match")]
    BadSignature,
    #[error("session payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("session key rejected: {0}")]
    Key(#[from] hmac::digest::InvalidLength),
    #[error("session cookie could not be built: {0}")]
    Header(#[from] axum::http::header::InvalidHeaderValue),
}

#[derive(Clone)]
pub struct SessionCodec {
    key: Vec<u8>,
    secure: bool,
}

impl std::fmt::Debug for SessionCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCodec")
            .field("key", &"<redacted>")
            .field("secure", &self.secure)
            .finish()
    }
}

impl SessionCodec {
    pub fn new(key: impl Into<Vec<u8>>, secure: bool) -> Self {
        Self {
            key: key.into(),
            secure,
        }
    }

    fn mac(&self, payload: &[u8]) -> Result<HmacSha256, CodecError> {
        let mut mac = <HmacSha256 as Mac>::new_from_slice(&self.key)?;
        mac.update(payload);
        Ok(mac)
    }

    /// Serialize and sign a session into a cookie value.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Json`] if the session cannot be serialized.
    pub fn encode(&self, session: &Session) -> Result<String, CodecError> {
        let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(session)?);
        let tag = self.mac(payload.as_bytes())?.finalize().into_bytes();
        let signature = URL_SAFE_NO_PAD.encode(tag);
        Ok(format!("{payload}.{signature}"))
    }

    /// Verify and parse a cookie value.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] for anything that was not produced by
    /// [`Self::encode`] under the same key.
    pub fn decode(&self, value: &str) -> Result<Session, CodecError> {
        let (payload, signature) = value.split_once('.').ok_or(CodecError::Malformed)?;
        let signature = URL_SAFE_NO_PAD.decode(signature)?;
        self.mac(payload.as_bytes())?
            .verify_slice(&signature)
            .map_err(|_| CodecError::BadSignature)?;
        let json = URL_SAFE_NO_PAD.decode(payload)?;
        Ok(serde_json::from_slice(&json)?)
    }

    /// Session carried by the request's `Cookie` headers, or a fresh one.
    #[must_use]
    pub fn load(&self, headers: &HeaderMap) -> Session {
        let Some(value) = cookie_value(headers, SESSION_COOKIE) else {
            return Session::default();
        };
        self.decode(value).unwrap_or_else(|err| {
            log::debug!("discarding session cookie: {err}");
            Session::default()
        })
    }

    /// `Set-Cookie` header value that stores `session`.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] if the session cannot be encoded.
    pub fn set_cookie(&self, session: &Session) -> Result<HeaderValue, CodecError> {
        let mut cookie = format!(
            "{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax",
            self.encode(session)?
        );
        if self.secure {
            cookie.push_str("; Secure");
        }
        Ok(HeaderValue::from_str(&cookie)?)
    }
}

fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}
