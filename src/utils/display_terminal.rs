//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 기동 시 바인딩 주소와 백엔드 주소 등을 시각적으로 표시합니다.

/// 박스 내부 콘텐츠 너비
const CONTENT_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목 문자열을 만듭니다
///
/// 텍스트는 자동으로 중앙 정렬됩니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║               Health Info System                 ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn boxed_title(title: &str) -> String {
    let border = "═".repeat(CONTENT_WIDTH);

    format!(
        "╔{border}╗\n║{title:^width$}║\n╚{border}╝",
        border = border,
        title = title,
        width = CONTENT_WIDTH
    )
}

/// 박스 형태로 둘러싸인 제목을 출력합니다
pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

/// 서브 항목의 상태를 표시합니다
///
/// ```text
///    ├─ Backend: http://127.0.0.1:5000
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 서버 기동 요약을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║             🏥 Health Info System                ║
/// ╚══════════════════════════════════════════════════╝
///    ├─ Listening: http://127.0.0.1:3000
///    ├─ Backend: http://127.0.0.1:5000
///    ├─ Environment: Development
/// ```
pub fn print_startup_summary(bind_address: &str, backend_url: &str, environment: &str) {
    println!();
    print_boxed_title("🏥 Health Info System");
    print_sub_task("Listening", &format!("http://{}", bind_address));
    print_sub_task("Backend", backend_url);
    print_sub_task("Environment", environment);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_title_centers_text() {
        let boxed = boxed_title("Hi");
        let lines: Vec<&str> = boxed.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with('╔'));
        assert!(lines[1].contains("Hi"));
        assert_eq!(lines[1].chars().count(), CONTENT_WIDTH + 2);
    }
}
