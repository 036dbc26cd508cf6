//! # Application Error Handling System
//!
//! 프론트엔드 서버 전역에서 사용하는 통합 에러 처리 시스템입니다.
//! 백엔드 REST API 호출 실패, 초안(draft) 검증 실패, 내부 오류를
//! 하나의 열거형으로 표현하고 `thiserror`로 `Error` trait을 구현합니다.
//!
//! ## 에러 분류
//!
//! ### 1. 네트워크 계층
//! - `TransportError`: 백엔드에 도달하지 못한 경우 (연결 거부, DNS 실패 등)
//! - `DecodeError`: 응답은 받았지만 JSON 본문을 해석할 수 없는 경우
//!
//! ### 2. 애플리케이션 계층
//! - `Rejected`: 백엔드가 non-2xx 상태와 `message` 본문으로 요청을 거절한 경우
//! - `ValidationError`: 전송 전 초안 검증에 실패한 경우 (요청을 보내지 않음)
//!
//! ### 3. 프론트엔드 계층
//! - `NotFound`: 이 서버에 등록되지 않은 경로
//!
//! ### 4. 시스템 계층
//! - `InternalError`: 예상하지 못한 내부 오류
//!
//! ## HTTP 응답 매핑
//!
//! 대부분의 에러는 화면(screen)에서 잡혀 에러 상태나 알림 배너로 렌더링됩니다.
//! 핸들러가 에러를 그대로 반환하는 경우에만 `ResponseError` 구현이 사용됩니다.
//!
//! | AppError | HTTP Status |
//! |----------|-------------|
//! | `ValidationError` | 400 Bad Request |
//! | `Rejected` (4xx) | 백엔드 상태 코드 그대로 |
//! | `Rejected` (5xx), `TransportError`, `DecodeError` | 502 Bad Gateway |
//! | `NotFound` | 404 Not Found |
//! | `InternalError` | 500 Internal Server Error |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn fetch(client: &reqwest::Client, url: &str) -> AppResult<serde_json::Value> {
//!     let response = client.get(url).send().await
//!         .map_err(|e| AppError::TransportError(e.to_string()))?;
//!
//!     response.json().await
//!         .map_err(|e| AppError::DecodeError(e.to_string()))
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

use crate::views::layout::render_error_page;

/// 애플리케이션 전역 에러 타입
///
/// 백엔드와의 통신 및 폼 처리 과정에서 발생할 수 있는 모든 에러를 포괄합니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 네트워크/전송 계층 실패
    ///
    /// 요청이 백엔드에 도달하지 못했거나 응답을 받지 못한 경우입니다.
    #[error("Transport error: {0}")]
    TransportError(String),

    /// 백엔드의 애플리케이션 수준 거절
    ///
    /// non-2xx 응답입니다. `message`는 응답 본문의 `message` 필드이며,
    /// 본문에 없으면 호출 지점의 기본 메시지가 들어갑니다.
    #[error("Rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// 응답 본문 역직렬화 실패
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// 초안 검증 실패 (요청 전송 전)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 프론트엔드에 없는 페이지
    #[error("Not found: {0}")]
    NotFound(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 화면에 그대로 보여줄 메시지를 반환합니다.
    ///
    /// 거절 응답은 서버가 준 메시지만, 나머지는 원인 설명만 반환하여
    /// `"Error creating user: Invalid country"` 같은 알림 문구를 만들 수 있게 합니다.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Rejected { message, .. } => message.clone(),
            AppError::TransportError(msg)
            | AppError::DecodeError(msg)
            | AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::InternalError(msg) => msg.clone(),
        }
    }

    /// 백엔드가 요청을 거절했는지 여부
    pub fn is_rejection(&self) -> bool {
        matches!(self, AppError::Rejected { .. })
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Rejected { status, .. } if (400..500).contains(status) => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::Rejected { .. } | AppError::TransportError(_) | AppError::DecodeError(_) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTML 에러 페이지를 생성합니다.
    ///
    /// 5xx 에러의 상세 원인은 서버 로그에만 남기고 화면에는 요약만 보여줍니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("❌ 요청 처리 실패: {}", self);
        }

        let message = match self {
            AppError::InternalError(_) => "Something went wrong.".to_string(),
            other => other.user_message(),
        };

        actix_web::HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(render_error_page(&message))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
