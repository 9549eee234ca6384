//! 사용자 데이터 액세스 계층
//!
//! - [`UserRepository`] - MongoDB `users` 컬렉션 구현 (운영)
//! - [`InMemoryUserStore`] - 프로세스 메모리 구현 (테스트, 로컬 개발)
//!
//! 두 구현 모두 이메일 유니크 제약을 저장소 수준에서 강제하며,
//! 위반 시 `AppError::ConflictError`를 반환합니다.

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::entities::users::User;

pub mod user_repo;
pub mod memory_repo;

pub use user_repo::UserRepository;
pub use memory_repo::InMemoryUserStore;

/// 이메일 중복 시 사용하는 에러 메시지
pub const EMAIL_ALREADY_EXISTS: &str = "Email already exists";

/// 사용자 영속성 게이트웨이
#[async_trait]
pub trait UserStore: Send + Sync {
    /// ID로 사용자 조회
    ///
    /// 존재하지 않으면 `Ok(None)`을 반환합니다. ObjectId 형식이 아닌 ID도
    /// 어떤 사용자와도 일치할 수 없으므로 `Ok(None)`입니다.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// 정확히 일치하는 이메일을 가진 사용자가 있는지 확인
    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    /// 사용자 저장
    ///
    /// `id`가 없으면 새로 삽입하고 ID와 타임스탬프를 할당합니다.
    /// `id`가 있으면 해당 문서를 갱신(없으면 생성)하고 `updated_at`만 새로 씁니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 다른 사용자가 같은 이메일을 이미 사용 중
    /// * `AppError::DatabaseError` - 저장소 오류
    async fn save(&self, user: User) -> AppResult<User>;
}
