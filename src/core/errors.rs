//! # Application Error Handling
//!
//! 사용자 서비스 전 계층에서 공유하는 에러 타입입니다.
//! 서비스와 리포지토리는 `AppResult<T>`를 반환하고, 에러는 HTTP 경계에서
//! `ResponseError` 구현을 통해 한 번만 상태 코드로 변환됩니다.
//!
//! ## 상태 코드 매핑
//!
//! | 변형 | 상태 코드 | 발생 위치 |
//! |------|-----------|-----------|
//! | `ValidationError` | 400 | 요청 본문 파싱/검증 |
//! | `NotFound` | 404 | 존재하지 않는 사용자 조회 |
//! | `ConflictError` | 409 | 이메일 중복 (애플리케이션 검사 또는 유니크 인덱스) |
//! | `DatabaseError` | 500 | MongoDB 드라이버 오류 |
//! | `InternalError` | 500 | 그 외 내부 오류 |
//!
//! 500 계열 에러는 상세 내용을 로그로만 남기고, 클라이언트에는
//! `"Internal server error"`만 전달합니다.
//!
//! ## 응답 형식
//!
//! ```json
//! { "error": "Not found: User not found" }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict error: {0}")]
    ConflictError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에 노출해도 되는 메시지
    ///
    /// 서버 내부 에러는 원인을 숨기고 고정 문구를 반환합니다.
    pub fn public_message(&self) -> String {
        match self {
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("❌ 요청 처리 실패: {}", self);
        }

        HttpResponse::build(status).json(serde_json::json!({
            "error": self.public_message()
        }))
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// 외부 에러를 `AppError::InternalError`로 감싸는 확장 트레이트
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("email: must not be blank".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("Email already exists".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_database_error_response() {
        let error = AppError::DatabaseError("connection refused".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_internal_error_hides_details() {
        let error = AppError::DatabaseError("mongodb://admin:secret@db".to_string());
        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["error"], "Internal server error");
    }

    #[actix_web::test]
    async fn test_client_error_keeps_message() {
        let error = AppError::NotFound("User not found".to_string());
        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["error"], "Not found: User not found");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
