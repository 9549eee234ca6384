//! # Domain Layer
//!
//! ```text
//! domain/
//! ├── entities/   ← 저장소 레코드 (User)
//! └── dto/        ← API 요청/응답 (RegisterRequest, UserResponse)
//! ```
//!
//! 엔티티와 DTO를 분리하여 `password` 같은 저장 전용 필드가
//! 응답에 섞이지 않도록 합니다.

pub mod entities;
pub mod dto;

pub use entities::users::User;
pub use dto::users::{RegisterRequest, UserResponse};
