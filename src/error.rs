use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::derive::{Display, From};
use serde::Serialize;

// the one error type every route handler returns.
// repository failures bubble up as anyhow errors and land in Internal via `?`
#[derive(Debug, Display, From)]
pub enum ApiError {
    #[display("Bakery not found")]
    BakeryNotFound,
    #[display("Internal Server Error")]
    #[from]
    Internal(anyhow::Error),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // clients get the generic body; the details stay in the server log
        if let ApiError::Internal(err) = &self {
            eprintln!("Request failed: {:#}", err);
        }

        let status = match &self {
            ApiError::BakeryNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
