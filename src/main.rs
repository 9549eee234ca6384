//! 사용자 계정 서비스 메인 애플리케이션
//!
//! 설정을 읽어 저장소와 서비스를 직접 생성하고 actix-web HTTP 서버를 구동합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_service_backend::config::{
    CorsConfig, DatabaseConfig, RateLimitConfig, ServerConfig, StoreBackend,
};
use user_service_backend::core::errors::AppResult;
use user_service_backend::db::Database;
use user_service_backend::repositories::users::{InMemoryUserStore, UserRepository, UserStore};
use user_service_backend::routes::configure_all_routes;
use user_service_backend::services::users::UserService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 서비스 시작중...");

    let backend = StoreBackend::current();
    let user_store = initialize_user_store(backend)
        .await
        .map_err(|e| {
            error!("저장소 초기화 실패: {}", e);
            io::Error::other(e.to_string())
        })?;

    let user_service = web::Data::new(UserService::new(user_store));

    info!("✅ 서비스 초기화 완료 (저장소: {})", backend.as_str());

    start_http_server(user_service, backend).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 접근 로그, 경로 정규화 미들웨어를 적용합니다.
///
/// # Errors
///
/// * `io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    user_service: web::Data<UserService>,
    backend: StoreBackend,
) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other(format!("잘못된 Rate Limiting 설정: {:?}", rate_limit_config)))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();
    let backend = web::Data::new(backend);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(user_service.clone())
            .app_data(backend.clone())
            .configure(configure_all_routes)
    })
        .bind(bind_address.as_str())?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 설정된 저장소 구현을 생성합니다
///
/// MongoDB 저장소는 연결 확인 후 이메일 유니크 인덱스를 생성합니다.
async fn initialize_user_store(backend: StoreBackend) -> AppResult<Arc<dyn UserStore>> {
    match backend {
        StoreBackend::Mongo => {
            info!("📡 데이터베이스 연결 중...");

            let database = Arc::new(
                Database::connect(&DatabaseConfig::uri(), &DatabaseConfig::database_name()).await?,
            );
            let repository = UserRepository::new(database);
            repository.create_indexes().await?;

            info!("✅ users 컬렉션 인덱스 준비 완료");
            Ok(Arc::new(repository))
        }
        StoreBackend::Memory => {
            info!("💾 메모리 저장소 사용 (재시작 시 데이터 소실)");
            Ok(Arc::new(InMemoryUserStore::new()))
        }
    }
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 결과는 stderr로만 남긴다
    let result = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ()),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ()),
        _ => dotenv().map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("[{}] .env 파일 로드 실패: {}", profile, e);
    }
}

/// `RUST_LOG` 기반 로깅 초기화 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
