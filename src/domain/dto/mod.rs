//! # Data Transfer Objects (DTO) Module
//!
//! 프론트엔드와 백엔드 REST API 사이의 데이터 계약을 정의합니다.
//!
//! ```text
//! dto/
//! ├── request/    # 폼 초안과 전송 본문 (프론트엔드 → 백엔드)
//! │   ├── user_draft.rs
//! │   └── doctor_draft.rs
//! └── response/   # 목록 envelope, message 응답 (백엔드 → 프론트엔드)
//!     └── envelopes.rs
//! ```
//!
//! 초안은 `validator` 크레이트로 전송 전에 검증되며, 검증에 실패하면
//! 요청을 보내지 않고 화면에 알림을 띄웁니다.

pub mod request;
pub mod response;
