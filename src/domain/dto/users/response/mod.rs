//! # 사용자 관련 응답 DTO 모듈
//!
//! 엔티티를 클라이언트에 노출 가능한 형태로 변환합니다.
//! 응답에는 `password`가 절대 포함되지 않습니다.
//!
//! ## JSON 응답 예제
//!
//! ```json
//! {
//!   "id": "507f1f77bcf86cd799439011",
//!   "email": "a@x.com",
//!   "firstName": "A",
//!   "lastName": "B",
//!   "createdAt": "2024-06-01T10:00:00Z",
//!   "updatedAt": "2024-06-01T10:00:00Z"
//! }
//! ```

pub mod user_response;

pub use user_response::UserResponse;
