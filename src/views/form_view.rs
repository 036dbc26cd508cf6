//! # 생성/수정 폼 페이지
//!
//! 초안의 각 필드를 입력 위젯으로 렌더링합니다. 국가 필드는 조회한 국가
//! 목록의 select가 되고, 수정 모드의 식별자 필드는 읽기 전용입니다.

use crate::domain::entities::Country;
use crate::domain::resource::{Draft, FieldSpec, InputKind, Resource};
use crate::screens::form_screen::{FormMode, FormScreen};
use crate::screens::load_state::LoadState;
use crate::screens::navigation::Route;
use crate::views::layout::{escape_html, link, render_alerts, render_page};

/// 국가 select의 안내 문구 (값은 빈 문자열)
pub const COUNTRY_PLACEHOLDER: &str = "Select a country";

fn render_country_select(field: &FieldSpec, value: &str, countries: &[Country]) -> String {
    let mut options = format!(r#"<option value="">{}</option>"#, COUNTRY_PLACEHOLDER);
    for country in countries {
        let selected = if country.cname == value { " selected" } else { "" };
        options.push_str(&format!(
            r#"<option value="{name}"{selected}>{name}</option>"#,
            name = escape_html(&country.cname),
            selected = selected,
        ));
    }

    format!(
        r#"<select id="{name}" name="{name}" required>{options}</select>"#,
        name = field.name,
        options = options,
    )
}

fn render_input(field: &FieldSpec, value: &str, readonly: bool) -> String {
    format!(
        r#"<input type="{kind}" id="{name}" name="{name}" value="{value}" required{readonly}>"#,
        kind = field.input.html_type().unwrap_or("text"),
        name = field.name,
        value = escape_html(value),
        readonly = if readonly { " readonly" } else { "" },
    )
}

fn render_fields<R: Resource>(screen: &FormScreen<R>) -> String {
    let update_mode = matches!(screen.mode(), FormMode::Update { .. });

    R::Draft::fields()
        .iter()
        .map(|field| {
            let value = screen.draft().value(field.name).unwrap_or_default();
            let widget = match field.input {
                InputKind::CountrySelect => render_country_select(field, value, screen.countries()),
                _ => render_input(field, value, field.is_key && update_mode),
            };
            format!(
                "<div>\n<label for=\"{}\">{}</label>\n{}\n</div>\n",
                field.name, field.label, widget
            )
        })
        .collect()
}

/// 폼이 전송될 라우트 (현재 페이지)
pub fn form_route<R: Resource>(mode: &FormMode) -> Route {
    match mode {
        FormMode::Create => Route::Create(R::KIND),
        FormMode::Update { key } => Route::Update(R::KIND, key.clone()),
    }
}

/// 로딩 문구. 레코드를 기다리는 중이면 레코드, 아니면 국가 목록 기준입니다.
fn loading_text<R: Resource>(screen: &FormScreen<R>) -> String {
    if screen.record_status().is_loading() {
        format!("Loading {} data...", R::KIND.singular())
    } else {
        "Loading countries...".to_string()
    }
}

/// 실패 문구. 레코드 조회 실패가 국가 목록 실패보다 우선합니다.
fn failure_text<R: Resource>(screen: &FormScreen<R>) -> String {
    if let Some(message) = screen.record_status().error() {
        return format!(
            r#"<p class="error">Failed to load {} data.</p>
<p class="error">{}</p>"#,
            R::KIND.singular(),
            escape_html(message)
        );
    }

    let message = screen.countries_status().error().unwrap_or_default();
    format!(
        r#"<p class="error">Failed to load countries: {}.</p>"#,
        escape_html(message)
    )
}

/// 폼 페이지 전체. `alerts`는 직전 제출의 알림입니다.
pub fn render_form<R: Resource>(screen: &FormScreen<R>, alerts: &[String]) -> String {
    let kind = R::KIND;
    let title = format!("{} {}", screen.mode().heading(), kind.singular_title());
    let route = form_route::<R>(screen.mode());

    let content = match screen.status() {
        LoadState::Loading => format!("<p>{}</p>", loading_text(screen)),
        LoadState::Failed(_) => format!(
            "{}\n<p>{} {}</p>",
            failure_text(screen),
            link(&route, "Retry"),
            link(&Route::List(kind), "Cancel"),
        ),
        LoadState::Loaded(()) => format!(
            r#"<form method="post" action="{action}">
{fields}<button type="submit">{submit}</button>
{cancel}
</form>"#,
            action = escape_html(&route.path()),
            fields = render_fields(screen),
            submit = screen.mode().action(),
            cancel = link(&Route::List(kind), "Cancel"),
        ),
    };

    let body = format!("<h1>{}</h1>\n{}\n{}", escape_html(&title), render_alerts(alerts), content);
    render_page(&title, &body)
}
