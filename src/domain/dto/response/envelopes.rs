//! 백엔드 응답 본문 DTO
//!
//! 목록 조회 응답은 컬렉션 이름을 키로 하는 객체로 감싸져 있고,
//! 변경/에러 응답은 `message` 필드 하나를 가진 객체입니다.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Country, Doctor, User};

/// `GET /api/users` 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersEnvelope {
    pub users: Vec<User>,
}

impl From<UsersEnvelope> for Vec<User> {
    fn from(envelope: UsersEnvelope) -> Self {
        envelope.users
    }
}

/// `GET /api/doctors` 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorsEnvelope {
    pub doctors: Vec<Doctor>,
}

impl From<DoctorsEnvelope> for Vec<Doctor> {
    fn from(envelope: DoctorsEnvelope) -> Self {
        envelope.doctors
    }
}

/// `GET /api/countries` 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountriesEnvelope {
    pub countries: Vec<Country>,
}

impl From<CountriesEnvelope> for Vec<Country> {
    fn from(envelope: CountriesEnvelope) -> Self {
        envelope.countries
    }
}

/// 변경 성공/에러 응답
///
/// ```json
/// { "message": "User not found" }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl MessageResponse {
    /// 본문에서 비어 있지 않은 `message`를 꺼냅니다. JSON이 아니면 `None`.
    pub fn extract(body: &str) -> Option<String> {
        serde_json::from_str::<MessageResponse>(body)
            .ok()
            .and_then(|response| response.message)
            .map(|message| message.trim().to_string())
            .filter(|message| !message.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_envelope_from_backend_json() {
        let body = r#"{"users":[{"email":"a@b.co","name":"A","surname":"B","phone":"1","cname":"Peru"}]}"#;
        let envelope: UsersEnvelope = serde_json::from_str(body).unwrap();
        let users: Vec<User> = envelope.into();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].cname, "Peru");
    }

    #[test]
    fn test_empty_doctors_envelope() {
        let envelope: DoctorsEnvelope = serde_json::from_str(r#"{"doctors":[]}"#).unwrap();
        let doctors: Vec<Doctor> = envelope.into();

        assert!(doctors.is_empty());
    }

    #[test]
    fn test_countries_envelope() {
        let body = r#"{"countries":[{"cname":"Chile","population":19000000}]}"#;
        let countries: Vec<Country> = serde_json::from_str::<CountriesEnvelope>(body).unwrap().into();

        assert_eq!(countries[0].population, 19_000_000);
    }

    #[test]
    fn test_message_extraction() {
        assert_eq!(
            MessageResponse::extract(r#"{"message":"Invalid country"}"#),
            Some("Invalid country".to_string())
        );
        assert_eq!(MessageResponse::extract(r#"{"message":"  "}"#), None);
        assert_eq!(MessageResponse::extract(r#"{"error":"x"}"#), None);
        assert_eq!(MessageResponse::extract("<html>502</html>"), None);
    }
}
