//! # 웹 어댑터
//!
//! 화면 로직의 [`Navigator`]와 [`Prompt`]를 HTTP 요청/응답 모델로 구현합니다.
//!
//! | 화면 동작 | 웹 표현 |
//! |-----------|---------|
//! | navigate(route) | `303 See Other` + `Location` |
//! | confirm(message) | 확인 페이지에서 제출한 `confirm=yes` 여부 |
//! | alert(message) | 다시 렌더링된 페이지의 알림 배너 |

use actix_web::http::header::{self, ContentType};
use actix_web::HttpResponse;

use crate::screens::navigation::{Navigator, Prompt, Route};

/// 이동할 라우트를 기억했다가 리다이렉트 응답으로 바꾸는 Navigator
#[derive(Debug, Default)]
pub struct RedirectNavigator {
    target: Option<Route>,
}

impl RedirectNavigator {
    /// 기억한 라우트로 리다이렉트합니다. 이동이 없었다면 `fallback`으로 보냅니다.
    pub fn into_response(self, fallback: Route) -> HttpResponse {
        see_other(&self.target.unwrap_or(fallback))
    }
}

impl Navigator for RedirectNavigator {
    fn navigate(&mut self, route: Route) {
        self.target = Some(route);
    }
}

/// 요청에 담긴 확인 여부로 답하고 알림을 모으는 Prompt
#[derive(Debug, Default)]
pub struct FormPrompt {
    confirmed: bool,
    pub alerts: Vec<String>,
}

impl FormPrompt {
    pub fn confirming(confirmed: bool) -> Self {
        Self {
            confirmed,
            alerts: Vec::new(),
        }
    }
}

impl Prompt for FormPrompt {
    fn confirm(&mut self, _message: &str) -> bool {
        self.confirmed
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

/// `303 See Other` 리다이렉트
pub fn see_other(route: &Route) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, route.path()))
        .finish()
}

/// `200 OK` HTML 응답
pub fn html(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}
