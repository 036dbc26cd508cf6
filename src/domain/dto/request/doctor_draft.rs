//! # 의사 폼 초안
//!
//! 급여(`salary`)는 폼에서 문자열로 편집되고, 전송 시 정수로 변환됩니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::Doctor;
use crate::domain::resource::{Draft, FieldSpec, InputKind};
use crate::utils::string_utils::{trim_string, validate_not_blank, validate_required_integer};

const DOCTOR_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "email", label: "Email", input: InputKind::Email, is_key: true },
    FieldSpec { name: "degree", label: "Degree", input: InputKind::Text, is_key: false },
    FieldSpec { name: "salary", label: "Salary", input: InputKind::Number, is_key: false },
];

/// 의사 생성/수정 초안
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct DoctorDraft {
    #[validate(email(message = "Invalid email address"))]
    #[validate(length(max = 60, message = "Must be at most 60 characters"))]
    pub email: String,

    #[validate(custom(function = "validate_not_blank"))]
    #[validate(length(max = 20, message = "Must be at most 20 characters"))]
    pub degree: String,

    #[validate(custom(function = "validate_required_integer"))]
    pub salary: String,
}

/// 의사 생성/수정 요청 본문
///
/// ```json
/// { "email": "house@example.com", "degree": "MD", "salary": 150000 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorPayload {
    pub email: String,
    pub degree: String,
    pub salary: i64,
}

impl From<Doctor> for DoctorDraft {
    fn from(doctor: Doctor) -> Self {
        Self {
            email: doctor.email,
            degree: doctor.degree,
            salary: doctor.salary.to_string(),
        }
    }
}

impl Draft for DoctorDraft {
    type Payload = DoctorPayload;

    fn fields() -> &'static [FieldSpec] {
        DOCTOR_FIELDS
    }

    fn value(&self, name: &str) -> Option<&str> {
        match name {
            "email" => Some(&self.email),
            "degree" => Some(&self.degree),
            "salary" => Some(&self.salary),
            _ => None,
        }
    }

    fn set_value(&mut self, name: &str, value: &str) -> bool {
        let slot = match name {
            "email" => &mut self.email,
            "degree" => &mut self.degree,
            "salary" => &mut self.salary,
            _ => return false,
        };
        *slot = trim_string(value);
        true
    }

    fn to_payload(&self) -> AppResult<Self::Payload> {
        let salary = self.salary.trim().parse::<i64>().map_err(|e| {
            AppError::ValidationError(format!("salary: Must be a whole number ({})", e))
        })?;

        Ok(DoctorPayload {
            email: self.email.clone(),
            degree: self.degree.clone(),
            salary,
        })
    }
}
