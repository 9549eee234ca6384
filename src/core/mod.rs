//! # Core Module
//!
//! 애플리케이션 전역에서 공유하는 핵심 타입을 제공합니다.
//!
//! - [`errors`] - `AppError`, `AppResult`, `ErrorContext`
//!
//! 서비스와 리포지토리 인스턴스는 전역 레지스트리 없이 `main`에서 직접 생성하여
//! 생성자 인자로 전달합니다.

pub mod errors;

pub use errors::*;
