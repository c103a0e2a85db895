//! `IntoResponse` glue for serving dispatch results from axum handlers.
use crate::document::MIME_TYPE;
use crate::error::OutputError;
use crate::output::Output;
use axum::{
    Json,
    body::Body,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

impl IntoResponse for Output<http::Response<Vec<u8>>> {
    fn into_response(self) -> Response {
        match self {
            Output::Response(response) => response.map(Body::from).into_response(),
            Output::Content(content) => {
                ([(header::CONTENT_TYPE, MIME_TYPE)], content).into_response()
            }
            Output::Saved(true) => StatusCode::NO_CONTENT.into_response(),
            Output::Saved(false) => {
                log::error!("Document could not be saved");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "NotSaved",
                        "message": "Document could not be saved",
                    })),
                )
                    .into_response()
            }
        }
    }
}

impl IntoResponse for OutputError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::NameNotSet => (StatusCode::BAD_REQUEST, "NameNotSet", self.to_string()),
            Self::InvalidDestination => (
                StatusCode::BAD_REQUEST,
                "InvalidDestination",
                self.to_string(),
            ),
            Self::InvalidName(_) => (StatusCode::BAD_REQUEST, "InvalidName", self.to_string()),
            Self::DirectoryNotCreated(_) | Self::Render(_) | Self::Response(_) => {
                log::error!("Internal error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalError",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": code,
            "message": message,
        }));

        (status, body).into_response()
    }
}
