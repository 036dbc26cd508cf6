//! # 목록 페이지
//!
//! [`ListScreen`]의 상태를 테이블로 렌더링합니다.
//!
//! | 상태 | 출력 |
//! |------|------|
//! | Loading | `Loading users...` |
//! | Failed | `Failed to load users.` + 원인 + Retry 링크 |
//! | Loaded (빈 목록) | `No users found.` |
//! | Loaded | Edit / Delete 링크가 달린 테이블 |

use crate::domain::resource::Resource;
use crate::screens::list_screen::ListScreen;
use crate::screens::load_state::LoadState;
use crate::screens::navigation::Route;
use crate::views::layout::{escape_html, link, render_alerts, render_page};

fn render_table<R: Resource>(rows: &[R]) -> String {
    let header: String = R::columns()
        .iter()
        .map(|column| format!("<th>{}</th>", escape_html(column)))
        .collect();

    let body: String = rows
        .iter()
        .map(|row| {
            let cells: String = row
                .cells()
                .iter()
                .map(|cell| format!("<td>{}</td>", escape_html(cell)))
                .collect();
            let key = row.key().to_string();
            format!(
                "<tr>{}<td>{} {}</td></tr>\n",
                cells,
                link(&Route::Update(R::KIND, key.clone()), "Edit"),
                link(&Route::Delete(R::KIND, key), "Delete"),
            )
        })
        .collect();

    format!(
        "<table>\n<thead><tr>{}<th>Actions</th></tr></thead>\n<tbody>\n{}</tbody>\n</table>",
        header, body
    )
}

/// 목록 화면의 본문 (레이아웃 제외)
pub fn render_list_body<R: Resource>(screen: &ListScreen<R>) -> String {
    let collection = R::KIND.collection();

    match screen.state() {
        LoadState::Loading => format!("<p>Loading {}...</p>", collection),
        LoadState::Failed(message) => format!(
            r#"<p class="error">Failed to load {}.</p>
<p class="error">{}</p>
<p>{}</p>"#,
            collection,
            escape_html(message),
            link(&Route::List(R::KIND), "Retry"),
        ),
        LoadState::Loaded(rows) if rows.is_empty() => format!("<p>No {} found.</p>", collection),
        LoadState::Loaded(rows) => render_table(rows),
    }
}

/// 목록 페이지 전체. `alerts`는 직전 동작(삭제 실패 등)의 알림입니다.
pub fn render_list<R: Resource>(screen: &ListScreen<R>, alerts: &[String]) -> String {
    let kind = R::KIND;
    let body = format!(
        "<h1>{}</h1>\n{}\n<p>{}</p>\n{}",
        kind.title(),
        render_alerts(alerts),
        link(&Route::Create(kind), &format!("Add New {}", kind.singular_title())),
        render_list_body(screen),
    );
    render_page(kind.title(), &body)
}
