//! # HTTP Request Handlers Module
//!
//! 브라우저 요청을 화면(screen) 상태 기계로 연결하는 핸들러들입니다.
//! 요청 하나가 화면 인스턴스 하나를 끝까지 구동하고, 결과를 HTML로
//! 렌더링하거나 303 리다이렉트로 응답합니다.
//!
//! ```text
//! Browser ──► Handlers (이 모듈) ──► Screens ──► BackendApi ──► REST API
//!                 │                     │
//!                 │◄── Navigator/Prompt ┘  (리다이렉트, 확인, 알림)
//!                 ▼
//!               Views (HTML)
//! ```
//!
//! ## 모듈 구성
//!
//! - [`adapters`] - `Navigator`/`Prompt`의 웹 구현
//! - [`pages`] - 홈, 404
//! - [`resources`] - 리소스별 목록/생성/수정/삭제 핸들러 (제네릭)

pub mod adapters;
pub mod pages;
pub mod resources;
