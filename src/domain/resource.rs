//! # Resource Abstraction
//!
//! 목록/생성/수정/삭제 화면이 공유하는 리소스 추상화입니다.
//! 사용자(User)와 의사(Doctor) 화면은 같은 패턴(조회 → 렌더링 → 변경 → 재조회)을
//! 반복하므로, 리소스별 차이만 이 trait으로 표현하고 화면 로직은 한 번만 구현합니다.
//!
//! ```text
//! Resource (User, Doctor)
//! ├── KIND        - 컬렉션 경로, 화면 문구
//! ├── Envelope    - {"users": [...]} 형태의 목록 응답
//! ├── Draft       - 편집 가능한 폼 상태 + 검증 + 전송 본문
//! └── columns/cells - 목록 테이블 렌더링
//! ```

use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::utils::string_utils::validation_message;

/// 화면에서 다루는 리소스 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Users,
    Doctors,
}

impl ResourceKind {
    /// 백엔드 컬렉션 경로이자 프론트엔드 라우트 접두사 (`users`, `doctors`)
    pub fn collection(&self) -> &'static str {
        match self {
            ResourceKind::Users => "users",
            ResourceKind::Doctors => "doctors",
        }
    }

    /// 단수형 소문자 이름 (`user`, `doctor`). 알림 문구에 사용됩니다.
    pub fn singular(&self) -> &'static str {
        match self {
            ResourceKind::Users => "user",
            ResourceKind::Doctors => "doctor",
        }
    }

    /// 목록 제목 (`Users`, `Doctors`)
    pub fn title(&self) -> &'static str {
        match self {
            ResourceKind::Users => "Users",
            ResourceKind::Doctors => "Doctors",
        }
    }

    /// 삭제 확인 문구
    pub fn delete_question(&self) -> String {
        format!("Are you sure you want to delete this {}?", self.singular())
    }

    /// 단수형 제목 (`User`, `Doctor`)
    pub fn singular_title(&self) -> &'static str {
        match self {
            ResourceKind::Users => "User",
            ResourceKind::Doctors => "Doctor",
        }
    }
}

/// 폼 입력 위젯 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Email,
    Text,
    Tel,
    Number,
    /// 국가 목록(lookup)에서 고르는 select
    CountrySelect,
}

impl InputKind {
    /// `<input type="...">` 속성값. select는 `None`.
    pub fn html_type(&self) -> Option<&'static str> {
        match self {
            InputKind::Email => Some("email"),
            InputKind::Text => Some("text"),
            InputKind::Tel => Some("tel"),
            InputKind::Number => Some("number"),
            InputKind::CountrySelect => None,
        }
    }
}

/// 폼 필드 정의
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// 폼/JSON 필드 이름
    pub name: &'static str,
    /// 화면 라벨
    pub label: &'static str,
    pub input: InputKind,
    /// 식별자 필드 여부. 수정 화면에서는 읽기 전용입니다.
    pub is_key: bool,
}

/// 편집 가능한 폼 상태 (Draft)
///
/// 모든 값은 사용자가 입력한 문자열 그대로 보관하고,
/// 전송 직전에 검증 후 `Payload`로 변환합니다.
pub trait Draft: Default + Clone + Debug + Validate + Send + Sync + 'static {
    /// 백엔드로 전송되는 JSON 본문 타입
    type Payload: Serialize + Debug + Send + Sync;

    /// 폼에 표시할 필드 목록 (표시 순서)
    fn fields() -> &'static [FieldSpec];

    /// 필드의 현재 값
    fn value(&self, name: &str) -> Option<&str>;

    /// 필드 값을 설정합니다. 알 수 없는 필드면 `false`.
    fn set_value(&mut self, name: &str, value: &str) -> bool;

    /// 검증을 통과한 초안을 전송 본문으로 변환합니다.
    fn to_payload(&self) -> AppResult<Self::Payload>;

    /// 검증 후 전송 본문을 만듭니다.
    ///
    /// 검증 실패 시 `ValidationError`를 반환하며, 이 경우 요청은 전송되지 않습니다.
    fn validated_payload(&self) -> AppResult<Self::Payload> {
        if let Err(errors) = self.validate() {
            let order: Vec<&str> = Self::fields().iter().map(|f| f.name).collect();
            return Err(AppError::ValidationError(validation_message(&errors, &order)));
        }
        self.to_payload()
    }
}

/// 목록/상세 화면에서 다루는 레코드
pub trait Resource: DeserializeOwned + Serialize + Clone + Debug + Send + Sync + 'static {
    /// 이 레코드를 편집하는 초안 타입. 수정 화면에서 레코드로부터 시드됩니다.
    type Draft: Draft + From<Self>;

    /// 목록 응답 (`{"users": [...]}`)
    type Envelope: DeserializeOwned + Into<Vec<Self>> + Send;

    const KIND: ResourceKind;

    /// 생성/수정 폼이 국가 목록을 필요로 하는지 여부
    const NEEDS_COUNTRIES: bool = false;

    /// 식별자 (이메일)
    fn key(&self) -> &str;

    /// 목록 테이블 헤더
    fn columns() -> &'static [&'static str];

    /// 목록 테이블 한 행의 셀 값 (`columns()`와 같은 순서)
    fn cells(&self) -> Vec<String>;
}

/// 리소스의 전송 본문 타입 별칭
pub type PayloadOf<R> = <<R as Resource>::Draft as Draft>::Payload;
