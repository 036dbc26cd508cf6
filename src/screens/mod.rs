//! # Screens
//!
//! 화면 로직을 UI와 분리한 상태 기계입니다. 목록/생성/수정 화면은
//! [`Resource`](crate::domain::resource::Resource) 하나로 매개변수화되어
//! 사용자와 의사 화면을 같은 코드로 처리합니다.
//!
//! - [`load_state`] - loading / error / data 3상태
//! - [`navigation`] - 라우트, 화면 전환, 확인/알림 trait
//! - [`list_screen`] - 목록 조회와 삭제
//! - [`form_screen`] - 초안 편집과 생성/수정 전송

pub mod form_screen;
pub mod list_screen;
pub mod load_state;
pub mod navigation;

pub use form_screen::{FormMode, FormScreen, SubmitOutcome};
pub use list_screen::{DeleteOutcome, ListScreen};
pub use load_state::LoadState;
pub use navigation::{Navigator, Prompt, Route};
