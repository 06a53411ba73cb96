//! Mock API trait and context
//!
//! Provides the shared context every mock API implementation works from.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::latency::SimulatedLatency;
use crate::random::SharedRandom;
use crate::token::TokenManager;
use crate::types::{AppId, UserDirectory};

/// Context holding shared resources for the mock API implementations.
///
/// Owns the credentials, the token cache, the injected user directory and
/// random source, and the OAuth session flag.
pub struct MockContext {
    pub(crate) appid: AppId,
    pub(crate) users: UserDirectory,
    pub(crate) token_manager: Arc<TokenManager>,
    pub(crate) random: SharedRandom,
    pub(crate) latency: SimulatedLatency,
    pub(crate) redirect_uri: String,
    authenticated: AtomicBool,
}

impl std::fmt::Debug for MockContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockContext")
            .field("appid", &self.appid)
            .field("users", &self.users.len())
            .field("token_manager", &"TokenManager { .. }")
            .field("redirect_uri", &self.redirect_uri)
            .finish_non_exhaustive()
    }
}

impl MockContext {
    pub(crate) fn new(
        appid: AppId,
        users: UserDirectory,
        token_manager: Arc<TokenManager>,
        random: SharedRandom,
        latency: SimulatedLatency,
        redirect_uri: String,
    ) -> Self {
        Self {
            appid,
            users,
            token_manager,
            random,
            latency,
            redirect_uri,
            authenticated: AtomicBool::new(false),
        }
    }

    pub fn appid(&self) -> &str {
        self.appid.as_str()
    }

    /// Get a reference to the user directory.
    pub fn users(&self) -> &UserDirectory {
        &self.users
    }

    /// Get a reference to the token manager.
    pub fn token_manager(&self) -> &TokenManager {
        &self.token_manager
    }

    /// Whether an OAuth code exchange has succeeded on this client
    pub fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }

    pub(crate) fn mark_authenticated(&self) {
        self.authenticated.store(true, Ordering::SeqCst);
    }
}

/// Trait for mock API implementations.
pub trait MockApi: Send + Sync {
    /// Get a reference to the mock context
    fn context(&self) -> &MockContext;

    /// Get the name of this API for logging.
    fn api_name(&self) -> &'static str {
        "unknown"
    }
}
