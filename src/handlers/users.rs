//! # User HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/users/register` | 회원가입 | 200 / 400 / 409 |
//! | `GET` | `/api/users/{user_id}` | 프로필 조회 | 200 / 404 |

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::users::request::RegisterRequest;
use crate::services::users::UserService;

#[post("/register")]
pub async fn register_user(
    service: web::Data<UserService>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[get("/{user_id}")]
pub async fn get_user_profile(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user(&user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}
