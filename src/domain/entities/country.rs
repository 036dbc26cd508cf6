//! 국가(Country) 엔티티
//!
//! 사용자 폼의 `cname` 선택지로만 사용되는 읽기 전용 lookup 레코드입니다.

use serde::{Deserialize, Serialize};

/// 국가 레코드
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// 국가 이름 (식별자)
    pub cname: String,
    pub population: i64,
}
