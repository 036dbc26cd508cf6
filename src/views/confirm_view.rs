//! 삭제 확인 페이지
//!
//! 확인 대화상자 대신 두 개의 POST 버튼을 보여줍니다.
//! `confirm=yes`일 때만 삭제 요청이 전송됩니다.

use crate::domain::resource::ResourceKind;
use crate::screens::navigation::Route;
use crate::views::layout::{escape_html, render_page};

pub fn render_delete_confirmation(kind: ResourceKind, key: &str) -> String {
    let action = escape_html(&Route::Delete(kind, key.to_string()).path());
    let body = format!(
        r#"<h1>Delete {title}</h1>
<p>{question}</p>
<p><strong>{key}</strong></p>
<form method="post" action="{action}">
<button type="submit" name="confirm" value="yes">OK</button>
<button type="submit" name="confirm" value="no">Cancel</button>
</form>"#,
        title = kind.singular_title(),
        question = escape_html(&kind.delete_question()),
        key = escape_html(key),
        action = action,
    );
    render_page(&format!("Delete {}", kind.singular_title()), &body)
}
