//! 홈 페이지

use crate::domain::resource::ResourceKind;
use crate::screens::navigation::Route;
use crate::views::layout::{link, render_page};

pub fn render_home() -> String {
    let body = format!(
        r#"<h1>Welcome to the Health Information System</h1>
<ul>
<li>{}</li>
<li>{}</li>
</ul>"#,
        link(&Route::List(ResourceKind::Users), "Manage Users"),
        link(&Route::List(ResourceKind::Doctors), "Manage Doctors"),
    );
    render_page("Home", &body)
}
