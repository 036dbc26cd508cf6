//! 라우트 설정 모듈
//!
//! 페이지 라우트와 헬스체크 엔드포인트를 등록합니다. 리소스 핸들러는
//! 제네릭이므로 리소스와 백엔드 구현을 지정해 구체화한 뒤 등록합니다.
//!
//! # Routes
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/` | 홈 |
//! | `GET` | `/health` | 헬스체크 (JSON) |
//! | `GET` | `/users`, `/doctors` | 목록 |
//! | `GET`, `POST` | `/{res}/create` | 생성 폼 / 제출 |
//! | `GET`, `POST` | `/{res}/update/{email}` | 수정 폼 / 제출 |
//! | `GET`, `POST` | `/{res}/delete/{email}` | 삭제 확인 / 실행 |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(HttpApiClient::from_env()))
//!     .configure(configure_all_routes::<HttpApiClient>);
//! ```

use actix_web::{error, web, HttpResponse};
use serde_json::json;

use crate::core::errors::AppError;
use crate::domain::entities::{Doctor, User};
use crate::domain::resource::Resource;
use crate::handlers::{pages, resources};
use crate::services::api::BackendApi;

/// 모든 라우트를 설정합니다
///
/// 백엔드 구현 `A`는 `web::Data<A>`로 앱에 등록되어 있어야 합니다.
pub fn configure_all_routes<A: BackendApi>(cfg: &mut web::ServiceConfig) {
    // 잘못된 폼 본문은 HTML 에러 페이지로 응답
    cfg.app_data(web::FormConfig::default().error_handler(|err, _req| {
        error::Error::from(AppError::ValidationError(err.to_string()))
    }));

    cfg.route("/health", web::get().to(health_check::<A>))
        .route("/", web::get().to(pages::home));

    configure_resource_routes::<User, A>(cfg);
    configure_resource_routes::<Doctor, A>(cfg);
}

/// 리소스 하나의 목록/생성/수정/삭제 라우트를 설정합니다
fn configure_resource_routes<R: Resource, A: BackendApi>(cfg: &mut web::ServiceConfig) {
    let base = format!("/{}", R::KIND.collection());

    cfg.service(
        web::resource(base.clone()).route(web::get().to(resources::list_page::<R, A>)),
    )
    .service(
        web::resource(format!("{}/create", base))
            .route(web::get().to(resources::create_page::<R, A>))
            .route(web::post().to(resources::create_submit::<R, A>)),
    )
    .service(
        web::resource(format!("{}/update/{{email}}", base))
            .route(web::get().to(resources::update_page::<R, A>))
            .route(web::post().to(resources::update_submit::<R, A>)),
    )
    .service(
        web::resource(format!("{}/delete/{{email}}", base))
            .route(web::get().to(resources::delete_page::<R>))
            .route(web::post().to(resources::delete_submit::<R, A>)),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:3000/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "health_info_frontend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "backend": "http://127.0.0.1:5000"
/// }
/// ```
async fn health_check<A: BackendApi>(api: web::Data<A>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "backend": api.base_url(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api::fake::RecordingApi;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(RecordingApi::new()))
                .configure(configure_all_routes::<RecordingApi>),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "health_info_frontend");
        assert_eq!(body["backend"], "memory://recording");
    }

    #[actix_web::test]
    async fn test_malformed_form_body_renders_error_page() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(RecordingApi::new()))
                .configure(configure_all_routes::<RecordingApi>),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/doctors/create")
            .insert_header(("content-type", "application/json"))
            .set_payload("{}")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = test::read_body(resp).await;
        assert!(String::from_utf8_lossy(&body).contains("<h1>Error</h1>"));
    }
}
