//! 사용자 계정 서비스 백엔드
//!
//! 회원가입과 프로필 조회를 제공하는 actix-web 기반 마이크로서비스입니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /api/users/register, /api/users/{id}, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증, 응답 생성
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   UserService   │ ← 이메일 중복 규칙, 엔티티 → DTO 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ dyn UserStore   │ ← MongoDB 또는 메모리 저장소
//! └─────────────────┘
//! ```
//!
//! 모든 의존성은 `main`에서 생성되어 생성자 인자와 `web::Data`로 전달됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::{web, App};
//! use user_service_backend::repositories::users::InMemoryUserStore;
//! use user_service_backend::routes::configure_all_routes;
//! use user_service_backend::services::users::UserService;
//!
//! let service = web::Data::new(UserService::new(Arc::new(InMemoryUserStore::new())));
//! let app = App::new().app_data(service).configure(configure_all_routes);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
