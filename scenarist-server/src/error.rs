//! Handler errors and their HTTP responses.
use crate::session_codec::CodecError;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use once_cell::sync::Lazy;
use scenarist_core::ContentError;
use scenarist_web::i18n::t;
use scenarist_web::pages::{error::ErrorPage, not_found::NotFound};
use scenarist_web::render_static_page;
use thiserror::Error;

static NOT_FOUND_HTML: Lazy<String> =
    Lazy::new(|| render_static_page::<NotFound>(&t("not_found.title")));
static ERROR_HTML: Lazy<String> = Lazy::new(|| render_static_page::<ErrorPage>(&t("error.title")));

/// Errors a request handler can end with.
///
/// Responses never carry internal detail; the cause is logged instead.
#[derive(Debug, Error)]
pub enum AppError {
    /// Unknown path or malformed path segment
    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("session: {0}")]
    Session(#[from] CodecError),
}

impl AppError {
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Content(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            Self::Content(_) | Self::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::NOT_FOUND {
            log::debug!("{self}");
            (status, Html(NOT_FOUND_HTML.as_str())).into_response()
        } else {
            log::error!("request failed: {self}");
            (status, Html(ERROR_HTML.as_str())).into_response()
        }
    }
}
