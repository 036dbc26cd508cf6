//! # Backend API 추상화
//!
//! 화면(screen)이 의존하는 백엔드 REST API 계약입니다.
//! 실제 구현은 [`HttpApiClient`](super::http_client::HttpApiClient)이며,
//! 테스트에서는 호출을 기록하는 인메모리 구현으로 대체합니다.
//!
//! ## 엔드포인트 매핑
//!
//! | 메서드 | HTTP |
//! |--------|------|
//! | `list::<User>()` | `GET /api/users` |
//! | `fetch::<User>(email)` | `GET /api/users/{email}` |
//! | `create::<User>(payload)` | `POST /api/users` |
//! | `update::<User>(email, payload)` | `PUT /api/users/{email}` |
//! | `delete::<User>(email)` | `DELETE /api/users/{email}` |
//! | `countries()` | `GET /api/countries` |
//!
//! 모든 호출은 독립적이며 취소, 타임아웃, 재시도, 중복 제거를 하지 않습니다.

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::Country;
use crate::domain::resource::{PayloadOf, Resource};

/// 백엔드 REST API 클라이언트 trait
///
/// 실패는 두 종류입니다:
/// - 전송 실패 → `AppError::TransportError`
/// - non-2xx 응답 → `AppError::Rejected { status, message }`
#[async_trait]
pub trait BackendApi: Send + Sync + 'static {
    /// 연결된 백엔드 주소 (헬스체크, 기동 배너에 표시)
    fn base_url(&self) -> &str;

    /// 컬렉션 전체를 조회합니다.
    async fn list<R: Resource>(&self) -> AppResult<Vec<R>>;

    /// 식별자로 레코드 하나를 조회합니다.
    async fn fetch<R: Resource>(&self, key: &str) -> AppResult<R>;

    /// 새 레코드를 생성합니다.
    async fn create<R: Resource>(&self, payload: &PayloadOf<R>) -> AppResult<()>;

    /// 식별자의 레코드를 수정합니다.
    async fn update<R: Resource>(&self, key: &str, payload: &PayloadOf<R>) -> AppResult<()>;

    /// 식별자의 레코드를 삭제합니다.
    async fn delete<R: Resource>(&self, key: &str) -> AppResult<()>;

    /// 국가 목록을 조회합니다.
    async fn countries(&self) -> AppResult<Vec<Country>>;
}
