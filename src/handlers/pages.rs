//! 리소스와 무관한 페이지 핸들러

use actix_web::HttpResponse;

use crate::core::errors::AppError;
use crate::handlers::adapters::html;
use crate::views::home_view::render_home;

/// `GET /`
pub async fn home() -> HttpResponse {
    html(render_home())
}

/// 등록되지 않은 경로. 에러 페이지로 응답합니다.
pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound("Page not found".to_string()))
}
