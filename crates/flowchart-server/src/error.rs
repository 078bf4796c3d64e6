use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use flowchart_core::GenerationError;
use thiserror::Error;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Flowchart generation failed: {0}")]
    Generation(#[from] GenerationError),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // The cause stays in the server log; clients only see the status.
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;
    use flowchart_llm::CompletionError;

    #[test]
    fn upstream_failure_is_opaque_500() {
        let err = AppError::from(GenerationError::Upstream(CompletionError::Api(
            "HTTP 401: secret detail".to_string(),
        )));

        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.into_body().try_into_bytes().unwrap();
        assert!(body.is_empty());
    }
}
