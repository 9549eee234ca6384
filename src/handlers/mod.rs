//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 받아 서비스 계층에 위임하는 핸들러 함수들입니다.
//!
//! ```text
//! Client ──HTTP──▶ Handlers (이 모듈) ──▶ UserService ──▶ dyn UserStore
//! ```
//!
//! 핸들러는 요청 검증과 상태 코드 선택만 담당하며, 에러는 `AppError`의
//! `ResponseError` 구현이 JSON 응답으로 변환합니다.

use actix_web::{error, web, HttpRequest};
use crate::core::errors::AppError;

pub mod users;

/// JSON 본문 추출 설정
///
/// 역직렬화 실패(필드 누락, 타입 불일치, 잘못된 JSON)를 `AppError::ValidationError`로
/// 변환하여 다른 검증 실패와 같은 400 응답 형식을 사용합니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match err {
        error::JsonPayloadError::Deserialize(ref e) => e.to_string(),
        ref other => other.to_string(),
    };

    AppError::ValidationError(message).into()
}
