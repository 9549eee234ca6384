//! User Entity Implementation
//!
//! `users` 컬렉션에 저장되는 사용자 엔티티입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// `id`, `created_at`, `updated_at`은 저장소가 `save` 시점에 채웁니다.
/// 새로 만든 엔티티의 타임스탬프는 저장 전까지 임시 값입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 요청으로 받은 비밀번호 원문
    ///
    /// NOTE: 해싱 없이 그대로 저장됩니다. 기존 서비스 동작을 그대로 유지한 것이며
    /// 인증 기능이 추가되기 전에 해싱 정책을 정해야 합니다.
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 아직 저장되지 않은 새 사용자 생성
    pub fn new(email: String, password: String, first_name: String, last_name: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            password,
            first_name,
            last_name,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_not_persisted() {
        let user = User::new(
            "a@x.com".to_string(),
            "p".to_string(),
            "A".to_string(),
            "B".to_string(),
        );

        assert!(user.id.is_none());
        assert_eq!(user.id_string(), None);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_unsaved_user_document_has_no_id() {
        let user = User::new(
            "a@x.com".to_string(),
            "p".to_string(),
            "A".to_string(),
            "B".to_string(),
        );

        let document = mongodb::bson::to_document(&user).unwrap();

        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_str("first_name").unwrap(), "A");
        assert_eq!(document.get_str("last_name").unwrap(), "B");
    }
}
