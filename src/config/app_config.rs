//! 서버 및 백엔드 연결 설정 관리 모듈
//!
//! 실행 환경, 프론트엔드 서버 바인딩, 백엔드 REST API 주소, 로깅 기본값을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let raw = env::var("ENVIRONMENT")
            .unwrap_or_else(|_| env::var("NODE_ENV").unwrap_or_else(|_| "production".to_string()));

        Self::from_str(&raw)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// `PROFILE` 값에 맞는 dotenv 파일 이름을 반환합니다.
///
/// | PROFILE | 파일 |
/// |---------|------|
/// | `dev` | `.env.dev` |
/// | `prod` | `.env.prod` |
/// | 미설정, 기타 | `.env` |
pub fn env_file_for(profile: Option<&str>) -> &'static str {
    match profile.map(str::trim) {
        Some("dev") => ".env.dev",
        Some("prod") => ".env.prod",
        _ => ".env",
    }
}

/// 로깅 설정
pub struct LogConfig;

impl LogConfig {
    /// `RUST_LOG`가 없을 때 사용할 기본 필터를 반환합니다.
    ///
    /// # Environment Defaults
    ///
    /// - Development/Test: 이 크레이트는 debug, actix_web은 debug
    /// - Staging/Production: info
    pub fn default_filter_for_env(env: &Environment) -> &'static str {
        match env {
            Environment::Development | Environment::Test => {
                "info,health_info_frontend=debug,actix_web=debug"
            }
            Environment::Staging | Environment::Production => "info",
        }
    }
}

/// 프론트엔드 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 3000
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "127.0.0.1"
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 백엔드 REST API 연결 설정
pub struct BackendConfig;

impl BackendConfig {
    /// 기본 백엔드 주소 (Flask 개발 서버 기본값)
    pub const DEFAULT_BASE_URL: &'static str = "http://127.0.0.1:5000";

    /// 백엔드 API의 기본 URL을 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `BACKEND_URL`: 우선 사용
    /// - `NEXT_PUBLIC_BACKEND_URL`: 기존 배포 설정과의 호환용 대체값
    ///
    /// # Examples
    ///
    /// ```bash
    /// BACKEND_URL=http://10.0.0.5:5000/ cargo run
    /// # → "http://10.0.0.5:5000"
    /// ```
    pub fn base_url() -> String {
        let raw = env::var("BACKEND_URL")
            .or_else(|_| env::var("NEXT_PUBLIC_BACKEND_URL"))
            .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string());

        Self::normalize_base_url(&raw)
    }

    /// 앞뒤 공백과 끝의 `/`를 제거합니다. 빈 값이면 기본 주소를 사용합니다.
    pub fn normalize_base_url(raw: &str) -> String {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::DEFAULT_BASE_URL.to_string();
        }
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("stage"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_env_file_for_profile() {
        assert_eq!(env_file_for(Some("dev")), ".env.dev");
        assert_eq!(env_file_for(Some("prod")), ".env.prod");
        assert_eq!(env_file_for(Some("staging")), ".env");
        assert_eq!(env_file_for(None), ".env");
    }

    #[test]
    fn test_default_log_filter_for_each_environment() {
        assert!(LogConfig::default_filter_for_env(&Environment::Development).contains("debug"));
        assert!(LogConfig::default_filter_for_env(&Environment::Test).contains("debug"));
        assert_eq!(LogConfig::default_filter_for_env(&Environment::Production), "info");
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 3000);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "127.0.0.1");
        }
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            BackendConfig::normalize_base_url("http://localhost:5000/"),
            "http://localhost:5000"
        );
        assert_eq!(
            BackendConfig::normalize_base_url("  http://api.local//  "),
            "http://api.local"
        );
        assert_eq!(
            BackendConfig::normalize_base_url(""),
            BackendConfig::DEFAULT_BASE_URL
        );
    }
}
