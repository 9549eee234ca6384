//! # Domain Entities
//!
//! 저장소에 영속되는 도메인 엔티티 모듈입니다.
//! 엔티티는 API 경계를 직접 넘지 않으며, 응답은 항상 DTO로 변환됩니다.

pub mod users;
