//! # 문자열 유틸리티
//!
//! 폼 입력값 정리, 검증 메시지 조합, 느슨한 숫자 역직렬화 등
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

use serde::Deserialize;
use validator::{ValidationError, ValidationErrors};

/// 문자열 정리 (trim 후 반환)
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::trim_string;
///
/// assert_eq!(trim_string("  Hello World  "), "Hello World");
/// ```
pub fn trim_string(value: &str) -> String {
    value.trim().to_string()
}

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 필수 입력 필드 검증 함수
///
/// `validator`의 `custom` 규칙으로 사용됩니다.
/// 빈 문자열이나 공백만 있는 경우 `required` 에러를 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// #[derive(Validate)]
/// struct Draft {
///     #[validate(custom(function = "validate_not_blank"))]
///     name: String,
/// }
/// ```
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if !is_valid_string(value) {
        return Err(ValidationError::new("required").with_message("This field is required".into()));
    }
    Ok(())
}

/// 비어 있지 않고 정수로 해석 가능한 문자열인지 검증합니다.
pub fn validate_required_integer(value: &str) -> Result<(), ValidationError> {
    validate_not_blank(value)?;
    if value.trim().parse::<i64>().is_err() {
        return Err(ValidationError::new("integer").with_message("Must be a whole number".into()));
    }
    Ok(())
}

/// `ValidationErrors`를 한 줄짜리 알림 메시지로 변환합니다.
///
/// 필드 순서는 `field_order`를 따르며, 목록에 없는 필드는 이름순으로 뒤에 붙습니다.
/// 각 필드에서는 첫 번째 에러 메시지만 사용합니다.
///
/// # 예제
/// ```text
/// email: Invalid email address; name: This field is required
/// ```
pub fn validation_message(errors: &ValidationErrors, field_order: &[&str]) -> String {
    let mut entries: Vec<(usize, String, String)> = errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, field_errors)| {
            let first = field_errors.first()?;
            let message = first
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| first.code.to_string());
            let rank = field_order
                .iter()
                .position(|name| *name == field.as_ref())
                .unwrap_or(usize::MAX);
            Some((rank, field.to_string(), message))
        })
        .collect();

    entries.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

    entries
        .into_iter()
        .map(|(_, field, message)| format!("{}: {}", field, message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    Text(String),
}

/// 숫자 또는 숫자 문자열을 모두 받는 serde deserializer
///
/// 백엔드는 정수로 내려주지만, 오래된 클라이언트가 저장한 데이터는
/// `"5000"` 같은 문자열일 수 있습니다.
/// `#[serde(deserialize_with = "deserialize_flexible_i64")]`와 함께 사용됩니다.
///
/// ```rust,ignore
/// // JSON: {"salary": 5000}   → 5000
/// // JSON: {"salary": "5000"} → 5000
/// // JSON: {"salary": "abc"}  → Err
/// ```
pub fn deserialize_flexible_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid integer '{}': {}", s, e))),
    }
}
