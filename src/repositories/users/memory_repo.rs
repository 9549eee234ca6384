//! 프로세스 메모리 기반 사용자 저장소
//!
//! MongoDB 없이 서비스를 실행하거나 테스트할 때 사용합니다 (`USER_STORE=memory`).
//! 재시작하면 데이터가 사라집니다.

use std::collections::HashMap;
use std::sync::RwLock;
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};
use crate::{
    core::errors::{AppError, AppResult},
    domain::entities::users::User,
};
use super::{UserStore, EMAIL_ALREADY_EXISTS};

/// 메모리 사용자 저장소
///
/// 이메일 유니크 검사와 쓰기를 같은 쓰기 잠금 안에서 수행하므로
/// 동시 가입 요청이 모두 존재 확인을 통과하더라도 두 번째 저장은 거부됩니다.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<ObjectId, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 사용자 수
    pub fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<E>(_: E) -> AppError {
    AppError::InternalError("사용자 저장소 잠금이 오염되었습니다".to_string())
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let users = self.users.read().map_err(poisoned)?;
        Ok(users.get(&object_id).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.values().any(|user| user.email == email))
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.write().map_err(poisoned)?;
        let id = user.id.unwrap_or_else(ObjectId::new);

        let duplicate = users
            .values()
            .any(|existing| existing.email == user.email && existing.id != Some(id));
        if duplicate {
            return Err(AppError::ConflictError(EMAIL_ALREADY_EXISTS.to_string()));
        }

        let now = DateTime::now();
        user.id = Some(id);
        user.created_at = users.get(&id).map(|existing| existing.created_at).unwrap_or(now);
        user.updated_at = now;

        users.insert(id, user.clone());
        Ok(user)
    }
}
