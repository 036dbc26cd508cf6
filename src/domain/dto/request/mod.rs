//! 요청 DTO 모듈 (프론트엔드 → 백엔드)
//!
//! 폼 초안(draft)과 전송 본문(payload)을 정의합니다.
//!
//! - [`UserDraft`] - 사용자 생성/수정 폼
//! - [`DoctorDraft`] / [`DoctorPayload`] - 의사 생성/수정 폼과 본문

pub mod doctor_draft;
pub mod user_draft;

pub use doctor_draft::*;
pub use user_draft::*;
