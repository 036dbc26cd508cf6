//! # Views
//!
//! 화면 상태를 HTML 문자열로 렌더링합니다. 모든 동적 값은
//! [`layout::escape_html`]을 거칩니다.
//!
//! - [`layout`] - 공통 페이지 골격, 알림 배너, 에러 페이지
//! - [`home_view`] - 홈
//! - [`list_view`] - 목록 테이블
//! - [`form_view`] - 생성/수정 폼
//! - [`confirm_view`] - 삭제 확인

pub mod confirm_view;
pub mod form_view;
pub mod home_view;
pub mod layout;
pub mod list_view;
