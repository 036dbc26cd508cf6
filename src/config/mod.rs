//! # Configuration Module
//!
//! 프론트엔드 서버의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정은 환경 변수에서 읽으며, `main`에서 프로필별 `.env` 파일을
//! 먼저 로드합니다.
//!
//! ## 모듈 구성
//!
//! - [`app_config`] - 실행 환경, 서버 바인딩, 백엔드 주소, 로깅 기본값
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 프론트엔드 서버
//! export HOST="127.0.0.1"
//! export PORT="3000"
//!
//! # 백엔드 REST API
//! export BACKEND_URL="http://127.0.0.1:5000"
//!
//! # 환경 (development, test, staging, production)
//! export ENVIRONMENT="development"
//! ```

pub mod app_config;

pub use app_config::*;
