//! API 라우트 설정 모듈
//!
//! 사용자 API와 헬스체크 엔드포인트를 등록합니다.
//! 서비스 인스턴스(`web::Data<UserService>`)는 호출하는 쪽에서 `App`에 주입해야 합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! App::new()
//!     .app_data(web::Data::new(user_service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;
use crate::config::StoreBackend;
use crate::handlers;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .app_data(handlers::json_config())
            .service(handlers::users::register_user)
            .service(handlers::users::get_user_profile)
    );
}

#[actix_web::get("/health")]
async fn health_check(req: HttpRequest) -> HttpResponse {
    let store = req
        .app_data::<web::Data<StoreBackend>>()
        .map(|backend| backend.as_str())
        .unwrap_or("unknown");

    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "store": store,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_health_check_reports_store_backend() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(StoreBackend::Memory))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["store"], "InMemory");
    }
}
