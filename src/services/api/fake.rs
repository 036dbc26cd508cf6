//! 테스트용 인메모리 백엔드
//!
//! 호출 순서를 기록하고, 컬렉션을 JSON 값으로 보관합니다.
//! 조회/변경 실패를 주입해 에러 경로를 검증할 수 있습니다.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use serde_json::Value;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::Country;
use crate::domain::resource::{PayloadOf, Resource, ResourceKind};
use crate::services::api::backend_api::BackendApi;

/// 기록된 API 호출
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    List(ResourceKind),
    Fetch(ResourceKind, String),
    Create(ResourceKind, Value),
    Update(ResourceKind, String, Value),
    Delete(ResourceKind, String),
    Countries,
}

impl ApiCall {
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            ApiCall::Create(..) | ApiCall::Update(..) | ApiCall::Delete(..)
        )
    }
}

#[derive(Default)]
struct FakeState {
    collections: HashMap<&'static str, Vec<Value>>,
    countries: Vec<Country>,
    calls: Vec<ApiCall>,
    read_failure: Option<AppError>,
    mutation_failure: Option<AppError>,
}

/// 호출을 기록하는 인메모리 [`BackendApi`]
#[derive(Default)]
pub struct RecordingApi {
    state: Mutex<FakeState>,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// 컬렉션 초기 데이터를 설정합니다.
    pub fn with_records<R: Resource>(self, records: Vec<R>) -> Self {
        let values = records
            .iter()
            .map(|r| serde_json::to_value(r).unwrap())
            .collect();
        self.state
            .lock()
            .unwrap()
            .collections
            .insert(R::KIND.collection(), values);
        self
    }

    pub fn with_countries(self, countries: Vec<Country>) -> Self {
        self.state.lock().unwrap().countries = countries;
        self
    }

    /// 모든 조회(목록, 단건, 국가)가 이 에러로 실패합니다.
    pub fn failing_reads(self, error: AppError) -> Self {
        self.state.lock().unwrap().read_failure = Some(error);
        self
    }

    /// 모든 변경(생성, 수정, 삭제)이 이 에러로 실패합니다.
    pub fn rejecting_mutations(self, error: AppError) -> Self {
        self.state.lock().unwrap().mutation_failure = Some(error);
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn mutations(&self) -> Vec<ApiCall> {
        self.calls().into_iter().filter(ApiCall::is_mutation).collect()
    }

    /// 현재 보관 중인 레코드
    pub fn records<R: Resource>(&self) -> Vec<R> {
        let state = self.state.lock().unwrap();
        decode_all(state.collections.get(R::KIND.collection()))
    }

    fn record(&self, call: ApiCall) -> MutexGuard<'_, FakeState> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        state
    }
}

fn decode_all<R: Resource>(values: Option<&Vec<Value>>) -> Vec<R> {
    values
        .map(|values| {
            values
                .iter()
                .map(|v| serde_json::from_value(v.clone()).unwrap())
                .collect()
        })
        .unwrap_or_default()
}

fn not_found(kind: ResourceKind) -> AppError {
    AppError::Rejected {
        status: 404,
        message: format!("{} not found", kind.singular_title()),
    }
}

fn position_of<R: Resource>(state: &FakeState, key: &str) -> Option<usize> {
    decode_all::<R>(state.collections.get(R::KIND.collection()))
        .iter()
        .position(|record| record.key() == key)
}

impl RecordingApi {
    fn list_sync<R: Resource>(&self) -> AppResult<Vec<R>> {
        let guard = self.record(ApiCall::List(R::KIND));
        if let Some(error) = &guard.read_failure {
            return Err(error.clone());
        }
        Ok(decode_all(guard.collections.get(R::KIND.collection())))
    }

    fn fetch_sync<R: Resource>(&self, key: &str) -> AppResult<R> {
        let guard = self.record(ApiCall::Fetch(R::KIND, key.to_string()));
        if let Some(error) = &guard.read_failure {
            return Err(error.clone());
        }
        decode_all::<R>(guard.collections.get(R::KIND.collection()))
            .into_iter()
            .find(|record| record.key() == key)
            .ok_or_else(|| not_found(R::KIND))
    }

    fn create_sync<R: Resource>(&self, payload: &PayloadOf<R>) -> AppResult<()> {
        let body = serde_json::to_value(payload).unwrap();
        let mut guard = self.record(ApiCall::Create(R::KIND, body.clone()));
        if let Some(error) = &guard.mutation_failure {
            return Err(error.clone());
        }
        guard
            .collections
            .entry(R::KIND.collection())
            .or_default()
            .push(body);
        Ok(())
    }

    fn update_sync<R: Resource>(&self, key: &str, payload: &PayloadOf<R>) -> AppResult<()> {
        let body = serde_json::to_value(payload).unwrap();
        let mut guard = self.record(ApiCall::Update(R::KIND, key.to_string(), body.clone()));
        if let Some(error) = &guard.mutation_failure {
            return Err(error.clone());
        }
        let index = position_of::<R>(&guard, key).ok_or_else(|| not_found(R::KIND))?;
        if let Some(values) = guard.collections.get_mut(R::KIND.collection()) {
            values[index] = body;
        }
        Ok(())
    }

    fn delete_sync<R: Resource>(&self, key: &str) -> AppResult<()> {
        let mut guard = self.record(ApiCall::Delete(R::KIND, key.to_string()));
        if let Some(error) = &guard.mutation_failure {
            return Err(error.clone());
        }
        let index = position_of::<R>(&guard, key).ok_or_else(|| not_found(R::KIND))?;
        if let Some(values) = guard.collections.get_mut(R::KIND.collection()) {
            values.remove(index);
        }
        Ok(())
    }

    fn countries_sync(&self) -> AppResult<Vec<Country>> {
        let guard = self.record(ApiCall::Countries);
        if let Some(error) = &guard.read_failure {
            return Err(error.clone());
        }
        Ok(guard.countries.clone())
    }
}

#[async_trait]
impl BackendApi for RecordingApi {
    fn base_url(&self) -> &str {
        "memory://recording"
    }

    async fn list<R: Resource>(&self) -> AppResult<Vec<R>> {
        self.list_sync::<R>()
    }

    async fn fetch<R: Resource>(&self, key: &str) -> AppResult<R> {
        self.fetch_sync::<R>(key)
    }

    async fn create<R: Resource>(&self, payload: &PayloadOf<R>) -> AppResult<()> {
        self.create_sync::<R>(payload)
    }

    async fn update<R: Resource>(&self, key: &str, payload: &PayloadOf<R>) -> AppResult<()> {
        self.update_sync::<R>(key, payload)
    }

    async fn delete<R: Resource>(&self, key: &str) -> AppResult<()> {
        self.delete_sync::<R>(key)
    }

    async fn countries(&self) -> AppResult<Vec<Country>> {
        self.countries_sync()
    }
}

/// 테스트 픽스처
pub mod fixtures {
    use crate::domain::entities::{Country, Doctor, User};

    pub fn user(email: &str) -> User {
        User {
            email: email.to_string(),
            name: "Jane".to_string(),
            surname: "Doe".to_string(),
            phone: "555-0100".to_string(),
            cname: "Canada".to_string(),
        }
    }

    pub fn doctor(email: &str) -> Doctor {
        Doctor {
            email: email.to_string(),
            degree: "MD".to_string(),
            salary: 120_000,
        }
    }

    pub fn countries() -> Vec<Country> {
        vec![
            Country {
                cname: "Canada".to_string(),
                population: 38_000_000,
            },
            Country {
                cname: "Peru".to_string(),
                population: 33_000_000,
            },
        ]
    }
}
