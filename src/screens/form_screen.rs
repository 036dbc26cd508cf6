//! # 생성/수정 폼 화면
//!
//! 초안(draft)을 편집하고 POST(생성) 또는 PUT(수정)으로 전송합니다.
//!
//! ## 상태
//!
//! | 구성 요소 | 생성 모드 | 수정 모드 |
//! |-----------|-----------|-----------|
//! | record | 항상 `Loaded` | `GET /api/{res}/{key}` 결과 |
//! | countries | 사용자 폼만 조회 | 사용자 폼만 조회 |
//! | draft | 빈 초안 | 처음 도착한 레코드로 한 번 시드 |
//!
//! 화면 상태는 record와 countries를 합친 것입니다. 하나라도 실패면 에러,
//! 하나라도 대기 중이면 로딩입니다.

use log::{info, warn};

use crate::core::errors::AppError;
use crate::domain::entities::Country;
use crate::domain::resource::{Draft, Resource};
use crate::screens::load_state::LoadState;
use crate::screens::navigation::{Navigator, Prompt, Route};
use crate::services::api::BackendApi;

/// 폼 모드
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    /// 라우트에서 받은 식별자의 레코드를 수정
    Update { key: String },
}

impl FormMode {
    /// 알림 문구용 동사 (`creating`, `updating`)
    pub fn verb(&self) -> &'static str {
        match self {
            FormMode::Create => "creating",
            FormMode::Update { .. } => "updating",
        }
    }

    /// 페이지 제목 접두사 (`Create New`, `Update`)
    pub fn heading(&self) -> &'static str {
        match self {
            FormMode::Create => "Create New",
            FormMode::Update { .. } => "Update",
        }
    }

    /// 제출 버튼 문구 (`Create`, `Update`)
    pub fn action(&self) -> &'static str {
        match self {
            FormMode::Create => "Create",
            FormMode::Update { .. } => "Update",
        }
    }
}

/// 전송 결과
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// 성공 후 이동한 라우트
    Navigated(Route),
    /// 검증 실패 또는 백엔드 거절. 화면에 머뭅니다.
    Rejected(String),
}

/// 리소스 생성/수정 화면 상태
#[derive(Debug, Clone)]
pub struct FormScreen<R: Resource> {
    mode: FormMode,
    record: LoadState<()>,
    countries: LoadState<Vec<Country>>,
    draft: R::Draft,
    seeded: bool,
}

impl<R: Resource> FormScreen<R> {
    fn with_mode(mode: FormMode) -> Self {
        let record = match mode {
            FormMode::Create => LoadState::Loaded(()),
            FormMode::Update { .. } => LoadState::Loading,
        };
        let countries = if R::NEEDS_COUNTRIES {
            LoadState::Loading
        } else {
            LoadState::Loaded(Vec::new())
        };

        Self {
            mode,
            record,
            countries,
            draft: R::Draft::default(),
            seeded: false,
        }
    }

    /// 빈 초안으로 시작하는 생성 화면
    pub fn create() -> Self {
        Self::with_mode(FormMode::Create)
    }

    /// 식별자의 레코드를 수정하는 화면
    pub fn update(key: impl Into<String>) -> Self {
        Self::with_mode(FormMode::Update { key: key.into() })
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn draft(&self) -> &R::Draft {
        &self.draft
    }

    /// 국가 목록 (불러오지 않았으면 빈 슬라이스)
    pub fn countries(&self) -> &[Country] {
        self.countries.data().map(Vec::as_slice).unwrap_or(&[])
    }

    /// 수정 대상 레코드의 조회 상태 (생성 모드는 항상 `Loaded`)
    pub fn record_status(&self) -> &LoadState<()> {
        &self.record
    }

    /// 국가 목록의 조회 상태
    pub fn countries_status(&self) -> &LoadState<Vec<Country>> {
        &self.countries
    }

    /// 레코드와 lookup을 합친 화면 상태
    pub fn status(&self) -> LoadState<()> {
        match self.record.as_ref().zip(self.countries.as_ref()) {
            LoadState::Loading => LoadState::Loading,
            LoadState::Failed(message) => LoadState::Failed(message),
            LoadState::Loaded(_) => LoadState::Loaded(()),
        }
    }

    /// 마운트 시 조회. 수정 모드면 레코드를, 필요하면 국가 목록을 가져옵니다.
    pub async fn load<A: BackendApi>(&mut self, api: &A) {
        if let FormMode::Update { key } = &self.mode {
            self.record = match api.fetch::<R>(key).await {
                Ok(record) => {
                    if !self.seeded {
                        self.draft = R::Draft::from(record);
                        self.seeded = true;
                    }
                    LoadState::Loaded(())
                }
                Err(e) => {
                    warn!("{} 조회 실패 ({}): {}", R::KIND.singular_title(), key, e);
                    LoadState::Failed(e.user_message())
                }
            };
        }

        self.load_lookups(api).await;
    }

    /// 국가 목록만 다시 조회합니다. 초안은 유지됩니다.
    pub async fn load_lookups<A: BackendApi>(&mut self, api: &A) {
        if !R::NEEDS_COUNTRIES {
            return;
        }

        self.countries = match api.countries().await {
            Ok(countries) => LoadState::Loaded(countries),
            Err(e) => {
                warn!("국가 목록 조회 실패: {}", e);
                LoadState::Failed(e.user_message())
            }
        };
    }

    /// 초안 필드를 수정합니다. 알 수 없는 필드와 수정 모드의 식별자 필드는 무시됩니다.
    pub fn set_field(&mut self, name: &str, value: &str) -> bool {
        let is_key = R::Draft::fields()
            .iter()
            .any(|field| field.name == name && field.is_key);
        if is_key && matches!(self.mode, FormMode::Update { .. }) {
            return false;
        }
        self.draft.set_value(name, value)
    }

    /// 제출된 폼 값으로 초안을 복원합니다.
    ///
    /// 레코드를 다시 조회하지 않으므로 수정 모드에서는 식별자 필드를
    /// 라우트의 식별자로 채우고 레코드 상태를 `Loaded`로 둡니다.
    pub fn restore<'a, I>(&mut self, fields: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (name, value) in fields {
            self.set_field(name, value);
        }

        if let FormMode::Update { key } = &self.mode {
            for field in R::Draft::fields().iter().filter(|f| f.is_key) {
                self.draft.set_value(field.name, key);
            }
        }
        self.record = LoadState::Loaded(());
        self.seeded = true;
    }

    /// 초안을 검증하고 전송합니다.
    ///
    /// 검증에 실패하면 요청 없이 알림만 표시합니다. 성공하면 POST 또는 PUT을
    /// 정확히 한 번 보내고, 성공 시 목록으로 이동합니다.
    pub async fn submit<A, N, P>(&mut self, api: &A, navigator: &mut N, prompt: &mut P) -> SubmitOutcome
    where
        A: BackendApi,
        N: Navigator,
        P: Prompt,
    {
        let result = match self.draft.validated_payload() {
            Ok(payload) => match &self.mode {
                FormMode::Create => api.create::<R>(&payload).await,
                FormMode::Update { key } => api.update::<R>(key, &payload).await,
            },
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => {
                info!("✅ {} {}: {}", R::KIND.singular(), self.mode.action().to_lowercase(), self.key_value());
                let route = Route::List(R::KIND);
                navigator.navigate(route.clone());
                SubmitOutcome::Navigated(route)
            }
            Err(e) => self.reject(prompt, e),
        }
    }

    /// 목록으로 돌아갑니다. 초안은 버려집니다.
    pub fn cancel<N: Navigator>(&self, navigator: &mut N) -> Route {
        let route = Route::List(R::KIND);
        navigator.navigate(route.clone());
        route
    }

    fn reject<P: Prompt>(&self, prompt: &mut P, error: AppError) -> SubmitOutcome {
        if error.is_rejection() {
            info!("{} {} 거절됨: {}", R::KIND.singular(), self.mode.verb(), error);
        } else {
            warn!("{} {} 실패: {}", R::KIND.singular(), self.mode.verb(), error);
        }

        let message = error.user_message();
        prompt.alert(&format!(
            "Error {} {}: {}",
            self.mode.verb(),
            R::KIND.singular(),
            message
        ));
        SubmitOutcome::Rejected(message)
    }

    fn key_value(&self) -> &str {
        R::Draft::fields()
            .iter()
            .find(|f| f.is_key)
            .and_then(|f| self.draft.value(f.name))
            .unwrap_or_default()
    }
}
