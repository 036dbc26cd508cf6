//! # Resource Handlers
//!
//! 사용자/의사 화면의 HTTP 핸들러입니다. 모든 핸들러는 리소스 `R`과
//! 백엔드 구현 `A`에 대해 제네릭이며, 라우트 등록 시 구체화됩니다.
//!
//! | 메서드 | 경로 | 핸들러 | 결과 |
//! |--------|------|--------|------|
//! | `GET` | `/{res}` | [`list_page`] | 목록 |
//! | `GET` | `/{res}/create` | [`create_page`] | 빈 폼 |
//! | `POST` | `/{res}/create` | [`create_submit`] | 303 → 목록, 또는 알림과 함께 폼 |
//! | `GET` | `/{res}/update/{email}` | [`update_page`] | 시드된 폼 |
//! | `POST` | `/{res}/update/{email}` | [`update_submit`] | 303 → 목록, 또는 알림과 함께 폼 |
//! | `GET` | `/{res}/delete/{email}` | [`delete_page`] | 확인 페이지 |
//! | `POST` | `/{res}/delete/{email}` | [`delete_submit`] | 목록 (삭제 후) 또는 303 → 목록 (취소) |

use std::collections::HashMap;

use actix_web::{web, HttpResponse};
use log::debug;
use serde::Deserialize;

use crate::domain::resource::Resource;
use crate::handlers::adapters::{html, see_other, FormPrompt, RedirectNavigator};
use crate::screens::form_screen::{FormScreen, SubmitOutcome};
use crate::screens::list_screen::{DeleteOutcome, ListScreen};
use crate::screens::navigation::Route;
use crate::services::api::BackendApi;
use crate::views::confirm_view::render_delete_confirmation;
use crate::views::form_view::render_form;
use crate::views::list_view::render_list;

/// 삭제 확인 폼
#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    pub confirm: Option<String>,
}

impl DeleteForm {
    pub fn is_confirmed(&self) -> bool {
        self.confirm.as_deref() == Some("yes")
    }
}

/// `GET /{res}`
pub async fn list_page<R: Resource, A: BackendApi>(api: web::Data<A>) -> HttpResponse {
    let mut screen = ListScreen::<R>::new();
    screen.load(api.get_ref()).await;
    html(render_list(&screen, &[]))
}

/// `GET /{res}/create`
pub async fn create_page<R: Resource, A: BackendApi>(api: web::Data<A>) -> HttpResponse {
    let mut screen = FormScreen::<R>::create();
    screen.load(api.get_ref()).await;
    html(render_form(&screen, &[]))
}

/// `POST /{res}/create`
pub async fn create_submit<R: Resource, A: BackendApi>(
    api: web::Data<A>,
    form: web::Form<HashMap<String, String>>,
) -> HttpResponse {
    let mut screen = FormScreen::<R>::create();
    screen.restore(form.iter().map(|(name, value)| (name.as_str(), value.as_str())));
    submit(screen, api.get_ref()).await
}

/// `GET /{res}/update/{email}`
pub async fn update_page<R: Resource, A: BackendApi>(
    api: web::Data<A>,
    key: web::Path<String>,
) -> HttpResponse {
    let mut screen = FormScreen::<R>::update(key.into_inner());
    screen.load(api.get_ref()).await;
    html(render_form(&screen, &[]))
}

/// `POST /{res}/update/{email}`
///
/// 제출된 값으로 초안을 만들고 라우트의 식별자로 PUT합니다.
pub async fn update_submit<R: Resource, A: BackendApi>(
    api: web::Data<A>,
    key: web::Path<String>,
    form: web::Form<HashMap<String, String>>,
) -> HttpResponse {
    let mut screen = FormScreen::<R>::update(key.into_inner());
    screen.restore(form.iter().map(|(name, value)| (name.as_str(), value.as_str())));
    submit(screen, api.get_ref()).await
}

/// 전송 후 성공이면 리다이렉트, 실패면 초안을 유지한 채 폼을 다시 렌더링합니다.
async fn submit<R: Resource, A: BackendApi>(mut screen: FormScreen<R>, api: &A) -> HttpResponse {
    let mut navigator = RedirectNavigator::default();
    let mut prompt = FormPrompt::default();

    match screen.submit(api, &mut navigator, &mut prompt).await {
        SubmitOutcome::Navigated(_) => navigator.into_response(Route::List(R::KIND)),
        SubmitOutcome::Rejected(message) => {
            debug!("{} 폼 재표시: {}", R::KIND.singular(), message);
            screen.load_lookups(api).await;
            html(render_form(&screen, &prompt.alerts))
        }
    }
}

/// `GET /{res}/delete/{email}`
pub async fn delete_page<R: Resource>(key: web::Path<String>) -> HttpResponse {
    html(render_delete_confirmation(R::KIND, &key))
}

/// `POST /{res}/delete/{email}`
///
/// `confirm=yes`가 아니면 요청 없이 목록으로 돌아갑니다.
pub async fn delete_submit<R: Resource, A: BackendApi>(
    api: web::Data<A>,
    key: web::Path<String>,
    form: web::Form<DeleteForm>,
) -> HttpResponse {
    let api = api.get_ref();
    let mut screen = ListScreen::<R>::new();
    let mut prompt = FormPrompt::confirming(form.is_confirmed());

    match screen.delete(api, &mut prompt, &key).await {
        DeleteOutcome::Cancelled => see_other(&Route::List(R::KIND)),
        DeleteOutcome::Deleted => html(render_list(&screen, &[])),
        DeleteOutcome::Failed(_) => {
            // 이전 목록이 없으므로 알림과 함께 보여줄 목록을 조회
            screen.load(api).await;
            html(render_list(&screen, &prompt.alerts))
        }
    }
}
