//! 응답 DTO 모듈 (백엔드 → 프론트엔드)

pub mod envelopes;

pub use envelopes::*;
