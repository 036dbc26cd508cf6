//! Health Information System 프론트엔드
//!
//! 사용자(User)와 의사(Doctor)를 관리하는 서버 렌더링 웹 프론트엔드입니다.
//! 외부 REST API를 `reqwest`로 호출하고, 결과를 `actix-web`으로 HTML 페이지로
//! 렌더링합니다.
//!
//! # Features
//!
//! - **목록**: 로딩/에러/데이터 3상태, 빈 목록 안내, 행별 수정/삭제
//! - **생성/수정 폼**: 초안 검증, 국가 선택, 서버 거절 메시지 알림
//! - **삭제**: 확인 후 삭제, 성공 시 목록 재조회
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 페이지 라우트, 헬스체크
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 하나 = 화면 인스턴스 하나
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐      ┌─────────────────┐
//! │     Screens     │ ───► │      Views      │ ← HTML 렌더링
//! └─────────────────┘      └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   BackendApi    │ ← reqwest 클라이언트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  REST Backend   │ ← /api/users, /api/doctors, /api/countries
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use health_info_frontend::domain::entities::User;
//! use health_info_frontend::screens::ListScreen;
//! use health_info_frontend::services::api::HttpApiClient;
//!
//! let api = HttpApiClient::from_env();
//! let mut screen = ListScreen::<User>::new();
//! screen.load(&api).await;
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod handlers;
pub mod routes;
pub mod screens;
pub mod services;
pub mod utils;
pub mod views;
