use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        constant::{HOME_PATH, LOGIN_PATH},
        model::error::ApiError,
        session::{
            CookieOptions, SessionError, SessionStore, SessionStoreExt, TOKEN_KEY, USER_INFO_KEY,
        },
    },
    model::user::UserInfoDto,
};

/// Whether the browser holds a signed-in session.
///
/// Derived from the presence of a non-empty user-info value; token expiry is
/// left to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Authenticated,
    Unauthenticated,
}

impl SessionState {
    /// Reads the state from the store. Read failures count as signed out.
    pub fn read(store: &dyn SessionStore) -> Self {
        match store.get(USER_INFO_KEY) {
            Ok(Some(value)) if !value.is_empty() => SessionState::Authenticated,
            Ok(_) => SessionState::Unauthenticated,
            Err(e) => {
                tracing::warn!("Failed to read session, treating as signed out: {}", e);
                SessionState::Unauthenticated
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardPolicy {
    /// Only signed-in sessions may pass, everyone else goes to the login page.
    Protected,
    /// Login and registration pages, signed-in sessions are sent home.
    PublicOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect {
        to: String,
        replace: bool,
        /// Page to come back to once the user has signed in.
        return_to: Option<String>,
    },
}

impl GuardPolicy {
    /// Decides what to do with a navigation to `requested`.
    ///
    /// `remembered` is the page a signed-out visitor was sent away from; once
    /// the session exists the public-only guard returns there instead of home.
    pub fn decide(
        &self,
        state: SessionState,
        requested: &str,
        remembered: Option<&str>,
    ) -> GuardDecision {
        match (self, state) {
            (GuardPolicy::Protected, SessionState::Authenticated)
            | (GuardPolicy::PublicOnly, SessionState::Unauthenticated) => GuardDecision::Render,
            (GuardPolicy::Protected, SessionState::Unauthenticated) => GuardDecision::Redirect {
                to: LOGIN_PATH.to_string(),
                replace: true,
                return_to: (requested != "/" && !requested.is_empty())
                    .then(|| requested.to_string()),
            },
            (GuardPolicy::PublicOnly, SessionState::Authenticated) => GuardDecision::Redirect {
                to: return_target(remembered.unwrap_or_default()),
                replace: true,
                return_to: None,
            },
        }
    }

    /// Evaluates the policy against the current contents of the store.
    pub fn check(
        &self,
        store: &dyn SessionStore,
        requested: &str,
        remembered: Option<&str>,
    ) -> GuardDecision {
        self.decide(SessionState::read(store), requested, remembered)
    }
}

/// Where to go after signing in.
///
/// Only same-origin absolute paths are honoured, anything else falls back to
/// the home page.
pub fn return_target(redirect: &str) -> String {
    let is_local = redirect.starts_with('/') && !redirect.starts_with("//");

    if is_local && redirect != LOGIN_PATH {
        redirect.to_string()
    } else {
        HOME_PATH.to_string()
    }
}

/// Stores the credentials returned by a successful login.
pub fn sign_in(
    store: &dyn SessionStore,
    token: Option<&str>,
    user: &UserInfoDto,
    options: &CookieOptions,
) -> Result<(), SessionError> {
    if let Some(token) = token {
        store.set(TOKEN_KEY, token, options)?;
    }
    store.set_json(USER_INFO_KEY, user, options)
}

/// Removes both the token and the user profile.
pub fn sign_out(store: &dyn SessionStore) -> Result<(), SessionError> {
    store.remove(TOKEN_KEY)?;
    store.remove(USER_INFO_KEY)
}

/// Clears the session when the backend rejects the token as expired.
///
/// Returns whether anything was cleared.
pub fn expire_on_unauthorized(
    store: &dyn SessionStore,
    error: &ApiError,
) -> Result<bool, SessionError> {
    if !error.is_unauthorized() {
        return Ok(false);
    }
    sign_out(store)?;
    Ok(true)
}

/// Session handle shared through context.
///
/// The store itself is not reactive, so every write goes through this handle
/// and bumps `revision`; components reading the session subscribe to it.
#[derive(Clone)]
pub struct AuthContext {
    store: Rc<dyn SessionStore>,
    revision: Signal<u64>,
}

impl AuthContext {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        Self {
            store,
            revision: Signal::new(0),
        }
    }

    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    pub fn state(&self) -> SessionState {
        let _ = self.revision.read();
        SessionState::read(self.store())
    }

    pub fn check(
        &self,
        policy: GuardPolicy,
        requested: &str,
        remembered: Option<&str>,
    ) -> GuardDecision {
        policy.decide(self.state(), requested, remembered)
    }

    /// Profile of the signed-in user, `None` when signed out or unreadable.
    pub fn user(&self) -> Option<UserInfoDto> {
        let _ = self.revision.read();
        match self.store().get_json::<UserInfoDto>(USER_INFO_KEY) {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("Failed to read user info: {}", e);
                None
            }
        }
    }

    pub fn sign_in(
        &mut self,
        token: Option<&str>,
        user: &UserInfoDto,
        options: &CookieOptions,
    ) -> Result<(), SessionError> {
        let result = sign_in(self.store(), token, user, options);
        self.revision += 1;
        result
    }

    pub fn sign_out(&mut self) -> Result<(), SessionError> {
        let result = sign_out(self.store());
        self.revision += 1;
        result
    }

    /// Drops the session after a 401 so the protected guard sends the user to
    /// the login page.
    pub fn expire(&mut self, error: &ApiError) {
        match expire_on_unauthorized(self.store(), error) {
            Ok(true) => {
                tracing::warn!("Session rejected by the server, signing out");
                self.revision += 1;
            }
            Ok(false) => {}
            Err(e) => tracing::error!("Failed to clear expired session: {}", e),
        }
    }
}
