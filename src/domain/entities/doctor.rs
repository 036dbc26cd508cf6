//! 의사(Doctor) 엔티티

use serde::{Deserialize, Serialize};

use crate::domain::dto::request::DoctorDraft;
use crate::domain::dto::response::DoctorsEnvelope;
use crate::domain::resource::{Resource, ResourceKind};
use crate::utils::string_utils::deserialize_flexible_i64;

/// 의사 레코드
///
/// 식별자는 이메일이며, 백엔드에서는 사용자(User)의 이메일을 참조합니다.
/// `salary`는 정수지만 문자열로 저장된 값도 허용합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub email: String,
    pub degree: String,
    #[serde(deserialize_with = "deserialize_flexible_i64")]
    pub salary: i64,
}

impl Resource for Doctor {
    type Draft = DoctorDraft;
    type Envelope = DoctorsEnvelope;

    const KIND: ResourceKind = ResourceKind::Doctors;

    fn key(&self) -> &str {
        &self.email
    }

    fn columns() -> &'static [&'static str] {
        &["Email", "Degree", "Salary"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.email.clone(),
            self.degree.clone(),
            self.salary.to_string(),
        ]
    }
}
