//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트 JSON 본문을 역직렬화하고 `validator`로 검증하는 요청 타입입니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 필드 존재 여부 (`serde`, `JsonConfig` 에러 핸들러)
//! 2. **형식 검증**: 공백 문자열 거부 (`validator`)
//!
//! 검증 실패는 핸들러에서 `AppError::ValidationError`로 변환되어 400 응답이 됩니다.

pub mod register_request;

pub use register_request::RegisterRequest;
