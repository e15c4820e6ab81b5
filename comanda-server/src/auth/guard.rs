//! Account lockout guard
//!
//! Per-user state is `attemptsCount`:
//!
//! ```text
//! Active(0) --fail--> Active(1) --fail--> Active(2) --fail--> Locked
//!     ^                   |                   |
//!     +------success------+-------------------+
//! ```
//!
//! `Locked` has no way out here; no operation ever lowers a count that
//! reached [`MAX_LOGIN_ATTEMPTS`]. The failing attempt that reaches the limit
//! still reports `InvalidPassword(3)`; the lock shows from the next call on.
//!
//! The read → decide → write sequence is not transactional. Two concurrent
//! failures can read the same count and both write `count + 1`.

use serde_json::json;
use shared::ObjectId;
use shared::models::User;

use crate::db::repository::{UserRepository, to_document};
use crate::db::{Filter, RepoResult, SharedStore};

/// Failed attempts after which an account is locked
pub const MAX_LOGIN_ATTEMPTS: i64 = 3;

/// Result of one login attempt
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// No user with that username. Nothing written.
    UserNotFound,
    /// Too many failures. Password not checked, nothing written.
    Locked,
    /// Wrong password; carries the count after the increment
    InvalidPassword(i64),
    /// Password matched; the count has been reset to 0
    Success(User),
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Success(_))
    }
}

/// Lock state derived from a stored attempt count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptState {
    Active(i64),
    Locked,
}

impl AttemptState {
    pub fn from_count(attempts_count: i64) -> Self {
        if attempts_count >= MAX_LOGIN_ATTEMPTS {
            AttemptState::Locked
        } else {
            AttemptState::Active(attempts_count)
        }
    }

    pub fn is_locked(&self) -> bool {
        matches!(self, AttemptState::Locked)
    }
}

#[derive(Debug, Clone)]
pub struct AccountGuard {
    users: UserRepository,
}

impl AccountGuard {
    pub fn new(store: SharedStore) -> Self {
        Self {
            users: UserRepository::new(store),
        }
    }

    /// Check a username/password pair and update the attempt counter.
    ///
    /// Store failures propagate; no retries.
    pub async fn authenticate(&self, username: &str, password: &str) -> RepoResult<LoginOutcome> {
        let filter = Filter::new().eq("username", username);
        let Some(mut user) = self.users.find_one(&filter).await? else {
            tracing::warn!(username = %username, "Login failed - user not found");
            return Ok(LoginOutcome::UserNotFound);
        };

        if AttemptState::from_count(user.attempts_count).is_locked() {
            tracing::warn!(
                username = %username,
                attempts = user.attempts_count,
                "Login rejected - account locked"
            );
            return Ok(LoginOutcome::Locked);
        }

        // Plaintext comparison: passwords are stored as sent
        if user.password != password {
            let attempts = user.attempts_count + 1;
            self.set_attempts(&user.id, attempts).await?;
            tracing::warn!(
                username = %username,
                attempts,
                locked = AttemptState::from_count(attempts).is_locked(),
                "Login failed - invalid password"
            );
            return Ok(LoginOutcome::InvalidPassword(attempts));
        }

        self.set_attempts(&user.id, 0).await?;
        user.attempts_count = 0;
        tracing::info!(user_id = %user.id, username = %username, "User logged in successfully");
        Ok(LoginOutcome::Success(user))
    }

    async fn set_attempts(&self, id: &ObjectId, attempts: i64) -> RepoResult<u64> {
        let fields = to_document(&json!({ "attemptsCount": attempts }))?;
        self.users.update_fields(&Filter::by_id(id), fields).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{Collection, Document, DocumentStore, MemoryStore, RepoError};
    use async_trait::async_trait;
    use shared::models::UserBody;
    use std::sync::Arc;

    /// Serves reads from the inner store, rejects every write
    #[derive(Debug)]
    struct ReadOnlyStore(Arc<MemoryStore>);

    #[async_trait]
    impl DocumentStore for ReadOnlyStore {
        fn engine(&self) -> &'static str {
            "read-only"
        }

        async fn ping(&self) -> RepoResult<()> {
            Ok(())
        }

        async fn find_one(
            &self,
            collection: Collection,
            filter: &Filter,
        ) -> RepoResult<Option<Document>> {
            self.0.find_one(collection, filter).await
        }

        async fn find(&self, collection: Collection, filter: &Filter) -> RepoResult<Vec<Document>> {
            self.0.find(collection, filter).await
        }

        async fn insert_one(&self, _: Collection, _: Document) -> RepoResult<ObjectId> {
            Err(RepoError::Database("write rejected".to_string()))
        }

        async fn update_one(&self, _: Collection, _: &Filter, _: Document) -> RepoResult<u64> {
            Err(RepoError::Database("write rejected".to_string()))
        }

        async fn delete_one(&self, _: Collection, _: &Filter) -> RepoResult<u64> {
            Err(RepoError::Database("write rejected".to_string()))
        }
    }

    async fn read_only_guard(attempts_count: i64) -> (AccountGuard, UserRepository, ObjectId) {
        let inner = Arc::new(MemoryStore::new());
        let users = UserRepository::new(inner.clone());
        let id = users
            .create(&UserBody {
                name: "Ana".to_string(),
                username: "ana".to_string(),
                password: "pw".to_string(),
                is_admin: false,
                is_blocked: false,
                attempts_count,
            })
            .await
            .unwrap();
        let guard = AccountGuard::new(Arc::new(ReadOnlyStore(inner)));
        (guard, users, id)
    }

    async fn setup(attempts_count: i64) -> (AccountGuard, UserRepository, ObjectId) {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let users = UserRepository::new(store.clone());
        let id = users
            .create(&UserBody {
                name: "Ana".to_string(),
                username: "ana".to_string(),
                password: "pw".to_string(),
                is_admin: false,
                is_blocked: false,
                attempts_count,
            })
            .await
            .unwrap();
        (AccountGuard::new(store), users, id)
    }

    async fn stored_count(users: &UserRepository, id: &ObjectId) -> i64 {
        users.find_by_id(id).await.unwrap().unwrap().attempts_count
    }

    #[test]
    fn test_attempt_state_threshold() {
        assert_eq!(AttemptState::from_count(0), AttemptState::Active(0));
        assert_eq!(AttemptState::from_count(2), AttemptState::Active(2));
        assert!(AttemptState::from_count(3).is_locked());
        assert!(AttemptState::from_count(7).is_locked());
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found_for_any_password() {
        let (guard, _, _) = setup(0).await;
        for password in ["pw", "wrong", ""] {
            let outcome = guard.authenticate("luis", password).await.unwrap();
            assert_eq!(outcome, LoginOutcome::UserNotFound);
        }
    }

    #[tokio::test]
    async fn test_wrong_password_increments_by_one() {
        for start in 0..MAX_LOGIN_ATTEMPTS {
            let (guard, users, id) = setup(start).await;
            let outcome = guard.authenticate("ana", "nope").await.unwrap();
            assert_eq!(outcome, LoginOutcome::InvalidPassword(start + 1));
            assert_eq!(stored_count(&users, &id).await, start + 1);
        }
    }

    #[tokio::test]
    async fn test_correct_password_resets_count() {
        for start in 0..MAX_LOGIN_ATTEMPTS {
            let (guard, users, id) = setup(start).await;
            let outcome = guard.authenticate("ana", "pw").await.unwrap();
            match outcome {
                LoginOutcome::Success(user) => {
                    assert_eq!(user.id, id);
                    assert_eq!(user.attempts_count, 0);
                }
                other => panic!("expected success, got {other:?}"),
            }
            assert_eq!(stored_count(&users, &id).await, 0);
        }
    }

    #[tokio::test]
    async fn test_locked_account_ignores_password_and_keeps_count() {
        for start in [3, 5] {
            let (guard, users, id) = setup(start).await;
            assert_eq!(guard.authenticate("ana", "pw").await.unwrap(), LoginOutcome::Locked);
            assert_eq!(guard.authenticate("ana", "nope").await.unwrap(), LoginOutcome::Locked);
            assert_eq!(stored_count(&users, &id).await, start);
        }
    }

    #[tokio::test]
    async fn test_third_failure_reports_count_then_locks() {
        let (guard, users, id) = setup(2).await;

        let first = guard.authenticate("ana", "nope").await.unwrap();
        assert_eq!(first, LoginOutcome::InvalidPassword(3));

        let second = guard.authenticate("ana", "pw").await.unwrap();
        assert_eq!(second, LoginOutcome::Locked);
        assert_eq!(stored_count(&users, &id).await, 3);
    }

    #[tokio::test]
    async fn test_full_cycle_from_zero() {
        let (guard, _, _) = setup(0).await;
        assert_eq!(guard.authenticate("ana", "x").await.unwrap(), LoginOutcome::InvalidPassword(1));
        assert_eq!(guard.authenticate("ana", "x").await.unwrap(), LoginOutcome::InvalidPassword(2));
        assert!(guard.authenticate("ana", "pw").await.unwrap().is_success());
        assert_eq!(guard.authenticate("ana", "x").await.unwrap(), LoginOutcome::InvalidPassword(1));
    }

    #[tokio::test]
    async fn test_is_blocked_flag_is_not_consulted() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let users = UserRepository::new(store.clone());
        users
            .create(&UserBody {
                name: "Bea".to_string(),
                username: "bea".to_string(),
                password: "pw".to_string(),
                is_admin: true,
                is_blocked: true,
                attempts_count: 0,
            })
            .await
            .unwrap();

        let guard = AccountGuard::new(store);
        assert!(guard.authenticate("bea", "pw").await.unwrap().is_success());
    }

    #[tokio::test]
    async fn test_failed_increment_is_an_error() {
        let (guard, users, id) = read_only_guard(1).await;
        let result = guard.authenticate("ana", "nope").await;
        assert!(matches!(result, Err(RepoError::Database(_))));
        assert_eq!(stored_count(&users, &id).await, 1);
    }

    #[tokio::test]
    async fn test_failed_reset_is_an_error() {
        let (guard, _, _) = read_only_guard(2).await;
        let result = guard.authenticate("ana", "pw").await;
        assert!(matches!(result, Err(RepoError::Database(_))));
    }

    #[tokio::test]
    async fn test_locked_and_unknown_need_no_write() {
        let (guard, _, _) = read_only_guard(3).await;
        assert_eq!(guard.authenticate("ana", "pw").await.unwrap(), LoginOutcome::Locked);
        assert_eq!(guard.authenticate("luis", "pw").await.unwrap(), LoginOutcome::UserNotFound);
    }
}
