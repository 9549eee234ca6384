//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 구체 타입 대신 [`users::UserStore`] 트레이트에 의존하며,
//! 실제 구현은 `main`에서 설정에 따라 선택되어 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserStore, UserStore};
//!
//! let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
//! let user = store.find_by_id("507f1f77bcf86cd799439011").await?;
//! ```

pub mod users;
