//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 생성자로 저장소를 주입받으며, HTTP 계층에는 `web::Data`로 전달됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::InMemoryUserStore;
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(Arc::new(InMemoryUserStore::new()));
//! ```

pub mod users;
