//! # 페이지 레이아웃
//!
//! 모든 페이지가 공유하는 HTML 골격(헤더 내비게이션, 본문, 푸터)과
//! HTML 이스케이프 함수를 제공합니다.

use chrono::{Datelike, Local};

use crate::domain::resource::ResourceKind;
use crate::screens::navigation::Route;

/// 브랜드 이름 (헤더, 푸터, 문서 제목)
pub const BRAND: &str = "Health Info System";

/// HTML 특수 문자를 이스케이프합니다.
///
/// 백엔드에서 받은 값과 사용자 입력은 모두 이 함수를 거쳐 출력됩니다.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// 링크 하나를 렌더링합니다.
pub fn link(route: &Route, text: &str) -> String {
    format!(
        r#"<a href="{}">{}</a>"#,
        escape_html(&route.path()),
        escape_html(text)
    )
}

/// 알림 배너들을 렌더링합니다. 알림이 없으면 빈 문자열입니다.
pub fn render_alerts(alerts: &[String]) -> String {
    alerts
        .iter()
        .map(|alert| format!(r#"<div class="alert" role="alert">{}</div>"#, escape_html(alert)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_header() -> String {
    format!(
        r#"<header>
<nav>
{home}
<ul>
<li>{users}</li>
<li>{doctors}</li>
</ul>
</nav>
</header>"#,
        home = link(&Route::Home, BRAND),
        users = link(&Route::List(ResourceKind::Users), "Users"),
        doctors = link(&Route::List(ResourceKind::Doctors), "Doctors"),
    )
}

/// 푸터 문구. 연도는 현재 로컬 시각 기준입니다.
pub fn footer_text() -> String {
    format!("© {} {}. All rights reserved.", Local::now().year(), BRAND)
}

/// 공통 레이아웃으로 감싼 전체 HTML 문서를 만듭니다.
///
/// `title`은 이스케이프되지만 `body`는 이미 렌더링된 HTML로 취급합니다.
pub fn render_page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} | {brand}</title>
</head>
<body>
{header}
<main>
{body}
</main>
<footer>
<p>{footer}</p>
</footer>
</body>
</html>"#,
        title = escape_html(title),
        brand = BRAND,
        header = render_header(),
        body = body,
        footer = escape_html(&footer_text()),
    )
}

/// 핸들러가 에러를 그대로 반환할 때 쓰는 에러 페이지
pub fn render_error_page(message: &str) -> String {
    let body = format!(
        r#"<h1>Error</h1>
<p class="error">{}</p>
<p>{}</p>"#,
        escape_html(message),
        link(&Route::Home, "Back to home"),
    );
    render_page("Error", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_page_shell_has_navigation_and_footer() {
        let html = render_page("Users", "<p>body</p>");

        assert!(html.contains(r#"<a href="/">Health Info System</a>"#));
        assert!(html.contains(r#"<a href="/users">Users</a>"#));
        assert!(html.contains(r#"<a href="/doctors">Doctors</a>"#));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains(&format!("© {} Health Info System. All rights reserved.", Local::now().year())));
    }

    #[test]
    fn test_error_page_escapes_message() {
        let html = render_error_page("<script>");

        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_render_alerts() {
        assert_eq!(render_alerts(&[]), "");
        assert!(render_alerts(&["Error creating user: x".to_string()]).contains(r#"role="alert""#));
    }
}
