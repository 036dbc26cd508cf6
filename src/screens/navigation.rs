//! # 화면 전환과 사용자 상호작용
//!
//! 화면 로직은 라우팅과 대화상자를 직접 다루지 않고 두 trait에 위임합니다.
//!
//! - [`Navigator`] - 다른 화면으로 이동 (웹 어댑터에서는 303 리다이렉트)
//! - [`Prompt`] - 확인(confirm)과 알림(alert) (웹 어댑터에서는 확인 페이지와 알림 배너)

use crate::domain::resource::ResourceKind;

/// 프론트엔드 라우트
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    List(ResourceKind),
    Create(ResourceKind),
    Update(ResourceKind, String),
    Delete(ResourceKind, String),
}

impl Route {
    /// 라우트의 URL 경로. 식별자는 경로 세그먼트로 인코딩됩니다.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::List(kind) => format!("/{}", kind.collection()),
            Route::Create(kind) => format!("/{}/create", kind.collection()),
            Route::Update(kind, key) => {
                format!("/{}/update/{}", kind.collection(), urlencoding::encode(key))
            }
            Route::Delete(kind, key) => {
                format!("/{}/delete/{}", kind.collection(), urlencoding::encode(key))
            }
        }
    }
}

/// 화면 전환
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// 사용자 확인/알림
pub trait Prompt {
    /// 사용자가 동작을 확인했으면 `true`
    fn confirm(&mut self, message: &str) -> bool;

    /// 차단형 알림을 표시합니다.
    fn alert(&mut self, message: &str);
}
