//! SessionManager - the single in-memory authority for the current actor.
//!
//! One instance is constructed at application start and lives for the whole
//! process. It hydrates itself from the persisted store exactly once, then
//! owns the session outright: the store is only a durability mirror that is
//! written on sign-in and cleared on sign-out, never re-read.
//!
//! Every mutation is two-step: update the in-memory authority first, then
//! mirror to the store. A failed mirror write leaves the in-memory state in
//! place and is reported to the caller.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::session::{Session, SessionError, User};
use crate::ports::SessionStore;

pub struct SessionManager {
    store: Arc<dyn SessionStore>,
    session: RwLock<Session>,
    /// Remember-me token. Held in memory always; mirrored to the store only
    /// when the sign-in form asked for it.
    token: RwLock<Option<String>>,
    /// Whether `sign_up` also mirrors the session to the store. The original
    /// flow did not persist until a subsequent explicit sign-in; this makes
    /// that behavior a configuration choice instead of an accident.
    persist_on_sign_up: bool,
}

impl SessionManager {
    /// Constructs the manager, adopting whatever the store holds as the
    /// starting session. Happens once per process lifetime; storage changes
    /// made by other processes afterwards are never observed.
    pub async fn hydrate(store: Arc<dyn SessionStore>, persist_on_sign_up: bool) -> Self {
        let session = store.load().await;
        let token = store.load_token().await;
        if session.is_authenticated() {
            tracing::debug!("hydrated signed-in session from store");
        }
        Self {
            store,
            session: RwLock::new(session),
            token: RwLock::new(token),
            persist_on_sign_up,
        }
    }

    /// The current session, possibly signed out. Pure read.
    pub async fn current_session(&self) -> Session {
        self.session.read().await.clone()
    }

    /// Adopts `user` as the current actor and mirrors the session to the
    /// store. Idempotent: signing in twice with the same user is the same
    /// as once. The caller validates `user` before invoking.
    pub async fn sign_in(&self, user: User) -> Result<(), SessionError> {
        let session = Session::for_user(user);
        *self.session.write().await = session.clone();
        self.store.save(&session).await.map_err(|e| {
            tracing::warn!(error = %e, "session persisted mirror write failed");
            SessionError::Persistence(e.to_string())
        })
    }

    /// Adopts `user` as the current actor for a first-time registration.
    /// Mirrors to the store only when configured to.
    pub async fn sign_up(&self, user: User) -> Result<(), SessionError> {
        let session = Session::for_user(user);
        *self.session.write().await = session.clone();
        if !self.persist_on_sign_up {
            return Ok(());
        }
        self.store.save(&session).await.map_err(|e| {
            tracing::warn!(error = %e, "session persisted mirror write failed");
            SessionError::Persistence(e.to_string())
        })
    }

    /// Clears the session and both stored slots. The HTTP operation that
    /// invokes this always follows up with a redirect to the root path.
    pub async fn sign_out(&self) -> Result<(), SessionError> {
        *self.session.write().await = Session::signed_out();
        *self.token.write().await = None;
        let cleared = self.store.clear().await;
        let token_cleared = self.store.clear_token().await;
        cleared
            .and(token_cleared)
            .map_err(|e| SessionError::Persistence(e.to_string()))
    }

    /// Records the upstream bearer token; written durably only when the
    /// operator ticked "remember me".
    pub async fn remember_token(&self, token: String, persist: bool) -> Result<(), SessionError> {
        *self.token.write().await = Some(token.clone());
        if !persist {
            return Ok(());
        }
        self.store
            .save_token(&token)
            .await
            .map_err(|e| SessionError::Persistence(e.to_string()))
    }

    pub async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }
}
