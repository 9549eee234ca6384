//! # 회원가입 요청 DTO
//!
//! `POST /api/users/register` 본문을 표현합니다.
//!
//! ## 검증 규칙
//!
//! 모든 필드는 필수이며 공백만으로 이루어질 수 없습니다.
//! 이메일 중복 여부는 서비스 계층과 저장소의 유니크 인덱스에서 검증합니다.
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "email": "a@x.com",
//!   "password": "p",
//!   "firstName": "A",
//!   "lastName": "B"
//! }
//! ```

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 회원가입 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub email: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub password: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub first_name: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub last_name: String,
}

/// 빈 문자열 또는 공백 문자열 거부
fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message("must not be blank".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, password: &str, first_name: &str, last_name: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request("a@x.com", "p", "A", "B").validate().is_ok());
    }

    #[test]
    fn test_blank_fields_are_rejected() {
        let errors = request("", "p", "   ", "B").validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("first_name"));
        assert!(!fields.contains_key("password"));
        assert!(!fields.contains_key("last_name"));
    }

    #[test]
    fn test_whitespace_password_is_rejected() {
        assert!(request("a@x.com", "\t\n", "A", "B").validate().is_err());
    }

    #[test]
    fn test_deserializes_camel_case_fields() {
        let json = r#"{"email":"a@x.com","password":"p","firstName":"A","lastName":"B"}"#;
        let parsed: RegisterRequest = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.first_name, "A");
        assert_eq!(parsed.last_name, "B");
    }

    #[test]
    fn test_missing_field_fails_deserialization() {
        let json = r#"{"email":"a@x.com","password":"p","firstName":"A"}"#;

        assert!(serde_json::from_str::<RegisterRequest>(json).is_err());
    }
}
