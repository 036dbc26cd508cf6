//! 백엔드 REST API 클라이언트 모듈
//!
//! - [`backend_api`] - 화면이 의존하는 `BackendApi` trait
//! - [`http_client`] - `reqwest` 기반 구현 `HttpApiClient`

pub mod backend_api;
pub mod http_client;

#[cfg(test)]
pub mod fake;

pub use backend_api::BackendApi;
pub use http_client::HttpApiClient;
