//! Users Entity Module
//!
//! 사용자 도메인의 영속 엔티티를 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User::new(
//!     "user@example.com".to_string(),
//!     "password".to_string(),
//!     "Jane".to_string(),
//!     "Doe".to_string(),
//! );
//! let saved = store.save(user).await?;
//! ```

pub mod user;

pub use user::User;
