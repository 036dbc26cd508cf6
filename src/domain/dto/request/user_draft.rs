//! # 사용자 폼 초안
//!
//! 사용자 생성/수정 화면의 편집 상태입니다. 전송 본문이 폼 상태와 동일하므로
//! 초안 자체가 그대로 JSON 본문이 됩니다.
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 |
//! |------|------|
//! | `email` | 이메일 형식, 최대 60자 |
//! | `name` | 필수, 최대 30자 |
//! | `surname` | 필수, 최대 40자 |
//! | `phone` | 필수, 최대 20자 |
//! | `cname` | 필수 (국가 선택), 최대 50자 |

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::errors::AppResult;
use crate::domain::entities::User;
use crate::domain::resource::{Draft, FieldSpec, InputKind};
use crate::utils::string_utils::{trim_string, validate_not_blank};

const USER_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "email", label: "Email", input: InputKind::Email, is_key: true },
    FieldSpec { name: "name", label: "Name", input: InputKind::Text, is_key: false },
    FieldSpec { name: "surname", label: "Surname", input: InputKind::Text, is_key: false },
    FieldSpec { name: "phone", label: "Phone", input: InputKind::Tel, is_key: false },
    FieldSpec { name: "cname", label: "Country", input: InputKind::CountrySelect, is_key: false },
];

/// 사용자 생성/수정 초안
///
/// # JSON 본문 예제
///
/// ```json
/// {
///   "email": "jane@example.com",
///   "name": "Jane",
///   "surname": "Doe",
///   "phone": "+1-555-0100",
///   "cname": "Canada"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserDraft {
    #[validate(email(message = "Invalid email address"))]
    #[validate(length(max = 60, message = "Must be at most 60 characters"))]
    pub email: String,

    #[validate(custom(function = "validate_not_blank"))]
    #[validate(length(max = 30, message = "Must be at most 30 characters"))]
    pub name: String,

    #[validate(custom(function = "validate_not_blank"))]
    #[validate(length(max = 40, message = "Must be at most 40 characters"))]
    pub surname: String,

    #[validate(custom(function = "validate_not_blank"))]
    #[validate(length(max = 20, message = "Must be at most 20 characters"))]
    pub phone: String,

    /// 선택하지 않은 상태는 빈 문자열 ("Select a country")
    #[validate(custom(function = "validate_not_blank"))]
    #[validate(length(max = 50, message = "Must be at most 50 characters"))]
    pub cname: String,
}

impl From<User> for UserDraft {
    fn from(user: User) -> Self {
        let User {
            email,
            name,
            surname,
            phone,
            cname,
        } = user;

        Self {
            email,
            name,
            surname,
            phone,
            cname,
        }
    }
}

impl Draft for UserDraft {
    type Payload = UserDraft;

    fn fields() -> &'static [FieldSpec] {
        USER_FIELDS
    }

    fn value(&self, name: &str) -> Option<&str> {
        match name {
            "email" => Some(&self.email),
            "name" => Some(&self.name),
            "surname" => Some(&self.surname),
            "phone" => Some(&self.phone),
            "cname" => Some(&self.cname),
            _ => None,
        }
    }

    fn set_value(&mut self, name: &str, value: &str) -> bool {
        let slot = match name {
            "email" => &mut self.email,
            "name" => &mut self.name,
            "surname" => &mut self.surname,
            "phone" => &mut self.phone,
            "cname" => &mut self.cname,
            _ => return false,
        };
        *slot = trim_string(value);
        true
    }

    fn to_payload(&self) -> AppResult<Self::Payload> {
        Ok(self.clone())
    }
}
