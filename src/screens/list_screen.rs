//! # 목록 화면
//!
//! 컬렉션을 조회해 테이블로 보여주고, 행 단위 삭제를 처리합니다.
//!
//! ```text
//! new() ── Loading
//!   │ load()
//!   ├──► Failed(message)
//!   └──► Loaded(rows)        rows가 비어 있으면 "No users found."
//!           │ delete(key)
//!           ├── confirm = false ──► Cancelled (요청 없음)
//!           └── confirm = true ──► DELETE ─┬─ 성공 ─► load() ─► Deleted
//!                                          └─ 실패 ─► alert ──► Failed
//! ```

use log::{info, warn};

use crate::domain::resource::Resource;
use crate::screens::load_state::LoadState;
use crate::screens::navigation::Prompt;
use crate::services::api::BackendApi;

/// 삭제 요청 결과
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// 사용자가 확인하지 않아 요청을 보내지 않음
    Cancelled,
    /// 삭제 후 목록을 다시 조회함
    Deleted,
    /// 삭제 요청이 실패함 (알림 표시, 재조회 없음)
    Failed(String),
}

/// 리소스 목록 화면 상태
#[derive(Debug, Clone)]
pub struct ListScreen<R: Resource> {
    rows: LoadState<Vec<R>>,
}

impl<R: Resource> Default for ListScreen<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> ListScreen<R> {
    /// 마운트 직후 상태 (Loading)
    pub fn new() -> Self {
        Self {
            rows: LoadState::Loading,
        }
    }

    pub fn state(&self) -> &LoadState<Vec<R>> {
        &self.rows
    }

    /// 데이터는 있지만 비어 있는 경우
    pub fn is_empty(&self) -> bool {
        self.rows.data().is_some_and(|rows| rows.is_empty())
    }

    /// 컬렉션을 조회합니다. 마운트 시와 삭제 후 재조회에 사용됩니다.
    pub async fn load<A: BackendApi>(&mut self, api: &A) {
        self.rows = match api.list::<R>().await {
            Ok(rows) => LoadState::Loaded(rows),
            Err(e) => {
                warn!("{} 목록 조회 실패: {}", R::KIND.title(), e);
                LoadState::Failed(e.user_message())
            }
        };
    }

    /// 확인 후 행을 삭제하고 목록을 다시 조회합니다.
    ///
    /// 확인하지 않으면 요청을 보내지 않습니다.
    /// 삭제가 실패하면 알림을 띄우고 목록은 그대로 둡니다.
    pub async fn delete<A: BackendApi, P: Prompt>(
        &mut self,
        api: &A,
        prompt: &mut P,
        key: &str,
    ) -> DeleteOutcome {
        if !prompt.confirm(&R::KIND.delete_question()) {
            return DeleteOutcome::Cancelled;
        }

        match api.delete::<R>(key).await {
            Ok(()) => {
                info!("🗑️ {} 삭제됨: {}", R::KIND.singular(), key);
                self.load(api).await;
                DeleteOutcome::Deleted
            }
            Err(e) => {
                let message = e.user_message();
                prompt.alert(&format!("Error deleting {}: {}", R::KIND.singular(), message));
                DeleteOutcome::Failed(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;
    use crate::domain::entities::{Doctor, User};
    use crate::domain::resource::ResourceKind;
    use crate::screens::navigation::testing::ScriptedPrompt;
    use crate::services::api::fake::{fixtures, ApiCall, RecordingApi};

    #[test]
    fn test_new_screen_is_loading_before_any_response() {
        let screen: ListScreen<User> = ListScreen::new();

        assert!(screen.state().is_loading());
        assert!(!screen.is_empty());
    }

    #[actix_web::test]
    async fn test_load_success() {
        let api = RecordingApi::new().with_records(vec![fixtures::user("a@x.io"), fixtures::user("b@x.io")]);
        let mut screen: ListScreen<User> = ListScreen::new();

        screen.load(&api).await;

        assert_eq!(screen.state().data().map(Vec::len), Some(2));
        assert_eq!(api.calls(), vec![ApiCall::List(ResourceKind::Users)]);
    }

    #[actix_web::test]
    async fn test_load_failure_shows_error_state() {
        let api = RecordingApi::new().failing_reads(AppError::TransportError("connection refused".to_string()));
        let mut screen: ListScreen<Doctor> = ListScreen::new();

        screen.load(&api).await;

        assert_eq!(screen.state().error(), Some("connection refused"));
    }

    #[actix_web::test]
    async fn test_empty_collection() {
        let api = RecordingApi::new();
        let mut screen: ListScreen<Doctor> = ListScreen::new();

        screen.load(&api).await;

        assert!(screen.is_empty());
    }

    #[actix_web::test]
    async fn test_declined_delete_issues_no_request() {
        let api = RecordingApi::new().with_records(vec![fixtures::user("a@x.io")]);
        let mut screen: ListScreen<User> = ListScreen::new();
        let mut prompt = ScriptedPrompt::answering(false);

        let outcome = screen.delete(&api, &mut prompt, "a@x.io").await;

        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert!(api.calls().is_empty());
        assert_eq!(
            prompt.confirmations,
            vec!["Are you sure you want to delete this user?".to_string()]
        );
    }

    #[actix_web::test]
    async fn test_confirmed_delete_issues_one_delete_then_one_refetch() {
        let api = RecordingApi::new()
            .with_records(vec![fixtures::doctor("a@x.io"), fixtures::doctor("b@x.io")]);
        let mut screen: ListScreen<Doctor> = ListScreen::new();
        let mut prompt = ScriptedPrompt::answering(true);

        let outcome = screen.delete(&api, &mut prompt, "a@x.io").await;

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(
            api.calls(),
            vec![
                ApiCall::Delete(ResourceKind::Doctors, "a@x.io".to_string()),
                ApiCall::List(ResourceKind::Doctors),
            ]
        );
        let remaining: Vec<&str> = screen
            .state()
            .data()
            .unwrap()
            .iter()
            .map(|d| d.email.as_str())
            .collect();
        assert_eq!(remaining, vec!["b@x.io"]);
        assert!(prompt.alerts.is_empty());
    }

    #[actix_web::test]
    async fn test_failed_delete_alerts_without_refetch() {
        let api = RecordingApi::new()
            .with_records(vec![fixtures::user("a@x.io")])
            .rejecting_mutations(AppError::Rejected {
                status: 404,
                message: "User not found".to_string(),
            });
        let mut screen: ListScreen<User> = ListScreen::new();
        screen.load(&api).await;
        let mut prompt = ScriptedPrompt::answering(true);

        let outcome = screen.delete(&api, &mut prompt, "a@x.io").await;

        assert_eq!(outcome, DeleteOutcome::Failed("User not found".to_string()));
        assert_eq!(prompt.alerts, vec!["Error deleting user: User not found".to_string()]);
        assert_eq!(
            api.calls(),
            vec![
                ApiCall::List(ResourceKind::Users),
                ApiCall::Delete(ResourceKind::Users, "a@x.io".to_string()),
            ]
        );
        assert_eq!(screen.state().data().map(Vec::len), Some(1));
    }
}
