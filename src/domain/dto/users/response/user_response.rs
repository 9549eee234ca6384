use chrono::{DateTime, Utc};
use mongodb::bson;
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::User;

/// 사용자 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            first_name,
            last_name,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            email,
            first_name,
            last_name,
            created_at: to_utc(created_at),
            updated_at: to_utc(updated_at),
        }
    }
}

// BSON 날짜는 밀리초 정밀도
fn to_utc(value: bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn saved_user() -> User {
        let mut user = User::new(
            "a@x.com".to_string(),
            "secret".to_string(),
            "A".to_string(),
            "B".to_string(),
        );
        user.id = Some(ObjectId::new());
        user.created_at = bson::DateTime::from_millis(1_717_236_000_000);
        user.updated_at = bson::DateTime::from_millis(1_717_236_000_500);
        user
    }

    #[test]
    fn test_maps_all_public_fields() {
        let user = saved_user();
        let id = user.id_string().unwrap();
        let response = UserResponse::from(user);

        assert_eq!(response.id, id);
        assert_eq!(response.email, "a@x.com");
        assert_eq!(response.first_name, "A");
        assert_eq!(response.last_name, "B");
        assert_eq!(response.created_at.timestamp_millis(), 1_717_236_000_000);
        assert_eq!(response.updated_at.timestamp_millis(), 1_717_236_000_500);
    }

    #[test]
    fn test_json_never_contains_password() {
        let json = serde_json::to_value(UserResponse::from(saved_user())).unwrap();
        let object = json.as_object().unwrap();

        assert!(!object.contains_key("password"));
        assert!(object.contains_key("firstName"));
        assert!(object.contains_key("createdAt"));
        assert_eq!(object.len(), 6);
    }
}
