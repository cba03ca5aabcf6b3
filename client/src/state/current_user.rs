//! Current-user resolution.
//!
//! DESIGN
//! ======
//! `resolve_current_user` is a plain async function: given the auth flag it
//! either returns nothing or queries the user collection by the fixed
//! current-user email and takes the first record. `CurrentUser` wraps it as a
//! derived value that recomputes on every `is_authenticated` transition and
//! publishes `Pending` until the lookup settles.
//!
//! Lookups are neither deduplicated nor cancelled, but each recompute bumps a
//! generation counter and a lookup only publishes while its generation is
//! still the latest. A lookup that finishes after logout, or after a newer
//! login, is discarded.

#[cfg(test)]
#[path = "current_user_test.rs"]
mod current_user_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use jsonapi::{CURRENT_USER_EMAIL, User};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::{ClientError, ResolveError};

/// Anything that can answer "users with this email".
#[async_trait]
pub trait UserSource: Send + Sync {
    async fn query_users(&self, email: &str) -> Result<Vec<User>, ClientError>;
}

/// Resolve the record for "me".
///
/// Returns `Ok(None)` without touching `source` when not authenticated.
///
/// # Errors
///
/// [`ResolveError::Fetch`] if the query fails, [`ResolveError::NoMatch`] if it
/// returns an empty collection.
pub async fn resolve_current_user(
    source: &dyn UserSource,
    is_authenticated: bool,
) -> Result<Option<User>, ResolveError> {
    if !is_authenticated {
        return Ok(None);
    }
    lookup_current_user(source).await.map(Some)
}

/// Query by the current-user email and take the first record.
async fn lookup_current_user(source: &dyn UserSource) -> Result<User, ResolveError> {
    let users = source.query_users(CURRENT_USER_EMAIL).await?;
    users.into_iter().next().ok_or(ResolveError::NoMatch)
}

/// Snapshot of the derived current-user value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrentUserState {
    /// Not authenticated; no lookup made.
    Anonymous,
    /// Authenticated and a lookup is in flight.
    Pending,
    Resolved(User),
    Failed(ResolveError),
}

impl CurrentUserState {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Resolved(user) => Some(user),
            _ => None,
        }
    }
}

/// Derived value tracking an `is_authenticated` channel.
///
/// Dropping it stops the watcher task. Lookups already in flight still run
/// to completion but their result has no remaining observer.
pub struct CurrentUser {
    state: watch::Receiver<CurrentUserState>,
    watcher: JoinHandle<()>,
}

impl CurrentUser {
    /// Start tracking `authenticated`. Must be called inside a Tokio runtime.
    ///
    /// The initial state reflects the flag's current value immediately:
    /// `Pending` if already authenticated, `Anonymous` otherwise.
    #[must_use]
    pub fn spawn(source: Arc<dyn UserSource>, mut authenticated: watch::Receiver<bool>) -> Self {
        let initial = *authenticated.borrow_and_update();
        let (tx, state) = watch::channel(if initial { CurrentUserState::Pending } else { CurrentUserState::Anonymous });
        let recompute = Recompute { source, tx: Arc::new(tx), generation: Arc::new(AtomicU64::new(0)) };

        recompute.run(initial);
        let watcher = tokio::spawn(async move {
            while authenticated.changed().await.is_ok() {
                let is_authenticated = *authenticated.borrow_and_update();
                recompute.run(is_authenticated);
            }
        });

        Self { state, watcher }
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> CurrentUserState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CurrentUserState> {
        self.state.clone()
    }

    /// Wait until the state satisfies `predicate`, then return it.
    ///
    /// If the watcher has shut down first, returns the last published state.
    pub async fn wait_for(&self, predicate: impl FnMut(&CurrentUserState) -> bool) -> CurrentUserState {
        let mut rx = self.state.clone();
        let outcome = rx.wait_for(predicate).await.map(|state| (*state).clone());
        match outcome {
            Ok(state) => state,
            Err(_) => rx.borrow().clone(),
        }
    }

    /// Wait for the first state that is not `Pending`.
    pub async fn settled(&self) -> CurrentUserState {
        self.wait_for(|s| !s.is_pending()).await
    }
}

impl Drop for CurrentUser {
    fn drop(&mut self) {
        self.watcher.abort();
    }
}

/// Shared handles for republishing the derived value.
struct Recompute {
    source: Arc<dyn UserSource>,
    tx: Arc<watch::Sender<CurrentUserState>>,
    generation: Arc<AtomicU64>,
}

impl Recompute {
    fn run(&self, is_authenticated: bool) {
        let current = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if !is_authenticated {
            self.tx.send_replace(CurrentUserState::Anonymous);
            return;
        }

        self.tx.send_replace(CurrentUserState::Pending);
        let source = Arc::clone(&self.source);
        let tx = Arc::clone(&self.tx);
        let generation = Arc::clone(&self.generation);
        tokio::spawn(async move {
            let next = match lookup_current_user(source.as_ref()).await {
                Ok(user) => {
                    tracing::debug!(user_id = %user.id, "current user resolved");
                    CurrentUserState::Resolved(user)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "current user lookup failed");
                    CurrentUserState::Failed(e)
                }
            };
            // Checked under the channel lock so a concurrent recompute either
            // sees this result or supersedes it.
            let published = tx.send_if_modified(|state| {
                if generation.load(Ordering::SeqCst) != current {
                    return false;
                }
                *state = next;
                true
            });
            if !published {
                tracing::debug!(generation = current, "stale current user lookup discarded");
            }
        });
    }
}
