//! 사용자(User) 엔티티
//!
//! 백엔드 `users` 테이블의 한 행을 나타냅니다. 식별자는 이메일이며,
//! `cname`은 국가(Country)를 참조합니다.

use serde::{Deserialize, Serialize};

use crate::domain::dto::request::UserDraft;
use crate::domain::dto::response::UsersEnvelope;
use crate::domain::resource::{Resource, ResourceKind};

/// 사용자 레코드
///
/// # JSON 예제
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
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub name: String,
    pub surname: String,
    pub phone: String,
    /// 국가 이름 (Country 참조)
    pub cname: String,
}

impl Resource for User {
    type Draft = UserDraft;
    type Envelope = UsersEnvelope;

    const KIND: ResourceKind = ResourceKind::Users;
    const NEEDS_COUNTRIES: bool = true;

    fn key(&self) -> &str {
        &self.email
    }

    fn columns() -> &'static [&'static str] {
        &["Email", "Name", "Surname", "Phone", "Country"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.email.clone(),
            self.name.clone(),
            self.surname.clone(),
            self.phone.clone(),
            self.cname.clone(),
        ]
    }
}
