//! # 사용자 관리 서비스 구현
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │                UserService                │
//! │  • register: 이메일 중복 검사 → 저장 → DTO │
//! │  • get_user: ID 조회 → DTO                 │
//! └─────────────────────┬─────────────────────┘
//!                       ▼
//! ┌───────────────────────────────────────────┐
//! │            dyn UserStore                  │
//! │  • MongoDB (UserRepository)               │
//! │  • InMemoryUserStore                      │
//! └───────────────────────────────────────────┘
//! ```
//!
//! ## 이메일 유니크성
//!
//! `register`의 존재 확인과 저장은 원자적이지 않습니다. 존재 확인은 빠른 실패 경로이고,
//! 동시에 들어온 같은 이메일의 두 번째 저장은 저장소의 유니크 제약에서 거부되어
//! 동일한 `ConflictError`로 전달됩니다.

use std::sync::Arc;
use log::{info, warn};
use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::users::{request::RegisterRequest, response::UserResponse},
        entities::users::user::User,
    },
    repositories::users::{UserStore, EMAIL_ALREADY_EXISTS},
};

pub const USER_NOT_FOUND: &str = "User not found";

pub struct UserService {
    user_store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(user_store: Arc<dyn UserStore>) -> Self {
        Self { user_store }
    }

    /// ID로 사용자 프로필 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 사용자가 없음
    /// * `AppError::DatabaseError` - 저장소 오류
    pub async fn get_user(&self, user_id: &str) -> AppResult<UserResponse> {
        let user = self.user_store
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 새 사용자 등록
    ///
    /// 요청은 핸들러에서 이미 검증된 상태여야 합니다.
    /// 성공 시 정확히 한 번 저장하고, 실패 시 아무것도 쓰지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이미 사용 중인 이메일
    /// * `AppError::DatabaseError` - 저장소 오류
    pub async fn register(&self, request: RegisterRequest) -> AppResult<UserResponse> {
        if self.user_store.exists_by_email(&request.email).await? {
            warn!("⚠️ 중복 이메일로 가입 시도: {}", mask_email(&request.email));
            return Err(AppError::ConflictError(EMAIL_ALREADY_EXISTS.to_string()));
        }

        let RegisterRequest {
            email,
            password,
            first_name,
            last_name,
        } = request;

        let saved = self.user_store
            .save(User::new(email, password, first_name, last_name))
            .await
            .inspect_err(|e| {
                if matches!(e, AppError::ConflictError(_)) {
                    warn!("⚠️ 저장 단계에서 이메일 중복 감지");
                }
            })?;

        info!("✅ 사용자 등록 완료: {}", saved.id_string().unwrap_or_default());

        Ok(UserResponse::from(saved))
    }
}

/// 로그용 이메일 마스킹: 로컬 파트 첫 글자와 도메인만 남긴다
fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}
