//! # Data Transfer Objects
//!
//! HTTP 경계에서만 사용하는 직렬화 타입입니다. JSON 필드명은 camelCase를 사용합니다.

pub mod users;

pub use users::*;
