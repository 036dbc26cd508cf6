//! 외부 시스템과의 통신을 담당하는 서비스 계층 모듈
//!
//! 이 프론트엔드의 유일한 외부 협력자는 백엔드 REST API이며,
//! [`api`] 모듈이 타입이 지정된 얇은 클라이언트를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::api::{BackendApi, HttpApiClient};
//! use crate::domain::entities::User;
//!
//! let api = HttpApiClient::from_env();
//! let users = api.list::<User>().await?;
//! ```

pub mod api;
