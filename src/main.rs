//! Health Information System 프론트엔드 메인 애플리케이션
//!
//! 환경 설정을 로드하고 백엔드 클라이언트를 만든 뒤 Actix-web 서버를 구동합니다.

use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use health_info_frontend::config::{env_file_for, Environment, LogConfig, ServerConfig};
use health_info_frontend::handlers::pages::not_found;
use health_info_frontend::routes::configure_all_routes;
use health_info_frontend::services::api::{BackendApi, HttpApiClient};
use health_info_frontend::utils::display_terminal::print_startup_summary;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 Health Info System 프론트엔드 시작중...");

    let api = web::Data::new(HttpApiClient::from_env());
    let bind_address = ServerConfig::bind_address();

    print_startup_summary(
        &bind_address,
        api.base_url(),
        &format!("{:?}", Environment::current()),
    );

    start_http_server(api, &bind_address).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 요청 로깅과 경로 정규화 미들웨어를 적용하고, 공유 백엔드 클라이언트를
/// `web::Data`로 등록합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(api: web::Data<HttpApiClient>, bind_address: &str) -> std::io::Result<()> {
    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(api.clone())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes::<HttpApiClient>)
            .default_service(web::to(not_found))
    })
    .bind(bind_address)?
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 미설정, 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 호출되므로 결과는 표준 에러로 출력합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").ok();
    let file = env_file_for(profile.as_deref());
    let label = profile.as_deref().unwrap_or("default");

    match dotenv::from_filename(file) {
        Ok(_) => eprintln!("[{}] {} 파일 로드 됨", label, file),
        Err(e) => eprintln!("[{}] {} 파일 로드 실패 (환경 변수만 사용): {}", label, file, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 실행 환경별 기본 필터를 사용합니다.
///
/// ```bash
/// RUST_LOG=debug cargo run
/// RUST_LOG=health_info_frontend::services=debug cargo run
/// ```
fn init_logging() {
    let environment = Environment::current();
    env_logger::init_from_env(
        Env::default().default_filter_or(LogConfig::default_filter_for_env(&environment)),
    );

    if environment == Environment::Production {
        info!("🔒 Production 모드로 실행합니다");
    } else {
        warn!("⚠️ {:?} 모드로 실행합니다", environment);
    }
}
