//! # Core Module
//!
//! 프론트엔드 서버 전역에서 공유하는 핵심 타입을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 전송 실패, 백엔드 거절, 초안 검증 실패 등 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 HTML 에러 페이지 렌더링
//!
//! ## 에러 처리 흐름
//!
//! ```text
//! reqwest / serde_json / validator 에러
//!          │ map_err
//!          ▼
//!      AppError ──► Screen (에러 상태 / 알림 배너)
//!          │
//!          └──────► ResponseError (HTML 에러 페이지)
//! ```

pub mod errors;

pub use errors::*;
