use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use peopledesk_core::AppError;
use serde::Serialize;
use ts_rs::TS;

/// Body returned for failed requests.
///
/// `code` is the machine-readable category; `message` is for humans.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/error-response.ts"
)]
pub struct ErrorResponse {
    code: &'static str,
    message: String,
}

/// An [`AppError`] leaving the HTTP boundary.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self.0 {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        }
    }
}

impl From<AppError> for ApiError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let body = ErrorResponse {
            code,
            message: self.0.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use peopledesk_core::AppError;

    use super::ApiError;

    #[test]
    fn errors_map_to_status_codes() {
        let cases = [
            (AppError::Validation("bad".to_owned()), StatusCode::BAD_REQUEST),
            (AppError::NotFound("role".to_owned()), StatusCode::NOT_FOUND),
            (
                AppError::Internal("boom".to_owned()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(ApiError::from(error).into_response().status(), status);
        }
    }

    #[test]
    fn unknown_role_carries_not_found_code() {
        let error = ApiError::from(AppError::NotFound("role 'intern'".to_owned()));
        assert_eq!(error.status_and_code(), (StatusCode::NOT_FOUND, "not_found"));
    }
}
