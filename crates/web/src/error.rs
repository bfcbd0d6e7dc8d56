use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use kinoteka_source::SourceError;

use crate::views;

/// Page-level error, rendered as a small HTML error page.
#[derive(Debug)]
pub enum AppError {
    /// The requested item does not exist upstream.
    NotFound,
    /// The request itself is malformed (e.g. a non-numeric item id).
    BadRequest(String),
    /// The upstream library API failed; surfaced verbatim, no retry.
    Upstream(String),
}

impl From<SourceError> for AppError {
    fn from(e: SourceError) -> Self {
        match e {
            SourceError::NotFound => Self::NotFound,
            SourceError::Network(msg) | SourceError::Upstream(msg) => Self::Upstream(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, title, message) = match self {
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                "Не найдено",
                "Этого тайтла нет в библиотеке.".to_string(),
            ),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "Некорректный запрос", msg),
            Self::Upstream(msg) => (
                StatusCode::BAD_GATEWAY,
                "Библиотека недоступна",
                format!("Не удалось загрузить библиотеку: {msg}"),
            ),
        };
        (status, Html(views::error_page(title, &message))).into_response()
    }
}
