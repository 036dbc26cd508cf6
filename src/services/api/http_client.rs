//! # reqwest 기반 백엔드 클라이언트
//!
//! [`BackendApi`]의 실제 구현입니다. 하나의 `reqwest::Client`를 공유하며,
//! 응답 상태에 따라 다음과 같이 처리합니다.
//!
//! ```text
//! send() ──► 전송 실패 ─────────────► TransportError
//!    │
//!    ├──► non-2xx ─► 본문 {"message"} ─► Rejected { status, message }
//!    │               (없으면 호출별 기본 메시지)
//!    │
//!    └──► 2xx ─────► JSON 역직렬화 ──► Ok / DecodeError
//! ```

use async_trait::async_trait;
use log::{debug, error, warn};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::BackendConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::response::{CountriesEnvelope, MessageResponse};
use crate::domain::entities::Country;
use crate::domain::resource::{PayloadOf, Resource, ResourceKind};
use crate::services::api::backend_api::BackendApi;

/// 조회 실패 시 본문에 `message`가 없을 때 사용하는 기본 메시지
pub const FETCH_FALLBACK_MESSAGE: &str = "Error fetching data";

/// 백엔드 REST API HTTP 클라이언트
///
/// `reqwest::Client`는 내부적으로 커넥션 풀을 `Arc`로 공유하므로
/// 복제 비용이 작습니다.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApiClient {
    /// 주어진 기본 URL로 클라이언트를 생성합니다. 끝의 `/`는 제거됩니다.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: BackendConfig::normalize_base_url(base_url),
        }
    }

    /// 환경 변수(`BACKEND_URL`)에서 주소를 읽어 클라이언트를 생성합니다.
    pub fn from_env() -> Self {
        Self::new(&BackendConfig::base_url())
    }

    /// `{base}/api/{collection}`
    pub fn collection_url(&self, kind: ResourceKind) -> String {
        format!("{}/api/{}", self.base_url, kind.collection())
    }

    /// `{base}/api/{collection}/{key}`. 식별자는 경로 세그먼트로 인코딩됩니다.
    pub fn record_url(&self, kind: ResourceKind, key: &str) -> String {
        format!(
            "{}/api/{}/{}",
            self.base_url,
            kind.collection(),
            urlencoding::encode(key)
        )
    }

    /// `{base}/api/countries`
    pub fn countries_url(&self) -> String {
        format!("{}/api/countries", self.base_url)
    }

    /// 요청을 보내고 non-2xx 응답을 `Rejected`로 변환합니다.
    async fn send(&self, request: RequestBuilder, fallback: &str) -> AppResult<Response> {
        let response = request.send().await.map_err(|e| {
            error!("❌ 백엔드 요청 실패: {}", e);
            AppError::TransportError(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = MessageResponse::extract(&body).unwrap_or_else(|| fallback.to_string());
        warn!("⚠️ 백엔드 거절 ({}): {}", status.as_u16(), message);

        Err(AppError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> AppResult<T> {
        debug!("→ GET {}", url);
        let response = self
            .send(self.client.get(url), FETCH_FALLBACK_MESSAGE)
            .await?;

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::DecodeError(format!("{}: {}", url, e)))
    }

    /// 변경 응답의 `message`는 디버그 로그로만 남깁니다.
    async fn finish_mutation(response: Response) -> AppResult<()> {
        let body = response.text().await.unwrap_or_default();
        if let Some(message) = MessageResponse::extract(&body) {
            debug!("← {}", message);
        }
        Ok(())
    }
}

/// 변경 실패 시 본문에 `message`가 없을 때 사용하는 기본 메시지
///
/// ```text
/// mutation_fallback("create", ResourceKind::Users) == "Failed to create user"
/// ```
pub fn mutation_fallback(verb: &str, kind: ResourceKind) -> String {
    format!("Failed to {} {}", verb, kind.singular())
}

#[async_trait]
impl BackendApi for HttpApiClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn list<R: Resource>(&self) -> AppResult<Vec<R>> {
        let url = self.collection_url(R::KIND);
        let envelope: R::Envelope = self.get_json(&url).await?;
        Ok(envelope.into())
    }

    async fn fetch<R: Resource>(&self, key: &str) -> AppResult<R> {
        let url = self.record_url(R::KIND, key);
        self.get_json(&url).await
    }

    async fn create<R: Resource>(&self, payload: &PayloadOf<R>) -> AppResult<()> {
        let url = self.collection_url(R::KIND);
        debug!("→ POST {}", url);

        let response = self
            .send(
                self.client.post(&url).json(payload),
                &mutation_fallback("create", R::KIND),
            )
            .await?;
        Self::finish_mutation(response).await
    }

    async fn update<R: Resource>(&self, key: &str, payload: &PayloadOf<R>) -> AppResult<()> {
        let url = self.record_url(R::KIND, key);
        debug!("→ PUT {}", url);

        let response = self
            .send(
                self.client.put(&url).json(payload),
                &mutation_fallback("update", R::KIND),
            )
            .await?;
        Self::finish_mutation(response).await
    }

    async fn delete<R: Resource>(&self, key: &str) -> AppResult<()> {
        let url = self.record_url(R::KIND, key);
        debug!("→ DELETE {}", url);

        let response = self
            .send(self.client.delete(&url), &mutation_fallback("delete", R::KIND))
            .await?;
        Self::finish_mutation(response).await
    }

    async fn countries(&self) -> AppResult<Vec<Country>> {
        let url = self.countries_url();
        let envelope: CountriesEnvelope = self.get_json(&url).await?;
        Ok(envelope.into())
    }
}
