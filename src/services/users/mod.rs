//! 사용자 관리 서비스 모듈
//!
//! 회원가입(이메일 중복 검사 포함)과 프로필 조회를 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//! use crate::domain::dto::users::request::RegisterRequest;
//!
//! let response = user_service.register(request).await?;
//! let profile = user_service.get_user(&response.id).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
