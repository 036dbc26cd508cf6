//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 폼 입력 정리, 검증 메시지 조합, 느슨한 숫자 역직렬화
//! - [`display_terminal`] - 서버 기동 배너 출력

pub mod string_utils;
pub mod display_terminal;
