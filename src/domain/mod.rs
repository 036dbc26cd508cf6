//! # Domain Layer Module
//!
//! 화면과 API 클라이언트가 공유하는 도메인 타입을 정의합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities   - 백엔드 레코드 (User, Doctor, Country)
//! ├── dto        - 폼 초안, 전송 본문, 목록 envelope
//! └── resource   - 화면을 리소스별로 매개변수화하는 trait
//!      │
//!      ▼
//! Screens (ListScreen<R>, FormScreen<R>)
//!      │
//!      ▼
//! Services (BackendApi → 백엔드 REST API)
//! ```

pub mod dto;
pub mod entities;
pub mod resource;

pub use resource::{Draft, FieldSpec, InputKind, PayloadOf, Resource, ResourceKind};
