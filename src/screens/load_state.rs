//! 조회 결과의 3상태(loading / error / data) 표현

/// 화면 데이터의 로딩 상태
///
/// - `Loading`: 아직 응답이 없고 에러도 없음
/// - `Failed`: 요청 실패 또는 non-2xx 응답 (화면에 보여줄 메시지)
/// - `Loaded`: 응답 데이터 (빈 목록일 수 있음)
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Failed(String),
    Loaded(T),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// 두 상태를 합칩니다. 하나라도 실패면 실패, 하나라도 로딩이면 로딩입니다.
    pub fn zip<U>(self, other: LoadState<U>) -> LoadState<(T, U)> {
        match (self, other) {
            (LoadState::Failed(message), _) | (_, LoadState::Failed(message)) => {
                LoadState::Failed(message)
            }
            (LoadState::Loaded(a), LoadState::Loaded(b)) => LoadState::Loaded((a, b)),
            _ => LoadState::Loading,
        }
    }

    pub fn as_ref(&self) -> LoadState<&T> {
        match self {
            LoadState::Loading => LoadState::Loading,
            LoadState::Failed(message) => LoadState::Failed(message.clone()),
            LoadState::Loaded(data) => LoadState::Loaded(data),
        }
    }
}
