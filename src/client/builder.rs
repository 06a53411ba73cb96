use std::sync::Arc;
use std::time::Duration;

use crate::api::oauth::DEFAULT_REDIRECT_URI;
use crate::api::MockContext;
use crate::error::WechatError;
use crate::latency::SimulatedLatency;
use crate::random::{RandomSource, RngSource, SharedRandom};
use crate::token::{TokenManager, DEFAULT_TOKEN_TTL};
use crate::types::{AppId, AppSecret, UserDirectory};

use super::WechatMock;

/// AppID used when none is configured
pub const DEFAULT_APP_ID: &str = "wx_mock_app_id_12345";
/// AppSecret used when none is configured
pub const DEFAULT_APP_SECRET: &str = "mock_app_secret_67890abcdef";

/// Builder for [`WechatMock`]
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use wechat_mock_sdk::random::FixedRandom;
/// use wechat_mock_sdk::WechatMock;
///
/// let wechat = WechatMock::builder()
///     .appid("test_app_123")
///     .secret("test_secret_xyz")
///     .random(FixedRandom::new(0.5))
///     .token_ttl(Duration::from_secs(60))
///     .build()
///     .unwrap();
///
/// assert_eq!(wechat.appid(), "test_app_123");
/// ```
#[must_use]
#[derive(Default)]
pub struct WechatMockBuilder {
    appid: Option<String>,
    secret: Option<String>,
    users: Option<UserDirectory>,
    random: Option<Box<dyn RandomSource>>,
    token_ttl: Option<Duration>,
    redirect_uri: Option<String>,
    latency: SimulatedLatency,
}

impl std::fmt::Debug for WechatMockBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WechatMockBuilder")
            .field("appid", &self.appid)
            .field("users", &self.users)
            .field("random", &self.random.as_ref().map(|_| ".."))
            .field("token_ttl", &self.token_ttl)
            .field("redirect_uri", &self.redirect_uri)
            .field("latency", &self.latency)
            .finish_non_exhaustive()
    }
}

impl WechatMockBuilder {
    /// Set the AppID
    ///
    /// Default: [`DEFAULT_APP_ID`]
    pub fn appid(mut self, appid: impl Into<String>) -> Self {
        self.appid = Some(appid.into());
        self
    }

    /// Set the AppSecret
    ///
    /// Default: [`DEFAULT_APP_SECRET`]
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Replace the user directory
    ///
    /// Default: [`UserDirectory::default`]
    pub fn users(mut self, users: UserDirectory) -> Self {
        self.users = Some(users);
        self
    }

    /// Inject the random source
    ///
    /// Default: an OS-seeded [`RngSource`]
    pub fn random(mut self, random: impl RandomSource + 'static) -> Self {
        self.random = Some(Box::new(random));
        self
    }

    /// Set the access token lifetime
    ///
    /// Default: 2 hours
    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = Some(ttl);
        self
    }

    /// Set the OAuth redirect target embedded in authorize URLs
    pub fn redirect_uri(mut self, uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(uri.into());
        self
    }

    /// Set the simulated response delays
    ///
    /// Default: none
    pub fn latency(mut self, latency: SimulatedLatency) -> Self {
        self.latency = latency;
        self
    }

    /// Build the WechatMock
    ///
    /// # Errors
    /// - `InvalidArgument` if appid or secret is set to an empty string
    /// - `Config` if the user directory is empty
    pub fn build(self) -> Result<WechatMock, WechatError> {
        let appid = self.appid.unwrap_or_else(|| DEFAULT_APP_ID.to_string());
        let secret = self
            .secret
            .unwrap_or_else(|| DEFAULT_APP_SECRET.to_string());
        let appid = AppId::new(appid)?;
        // Validated only; the mock never authenticates with it.
        AppSecret::new(secret)?;

        let users = self.users.unwrap_or_default();
        if users.is_empty() {
            return Err(WechatError::Config(
                "user directory must contain at least one user".to_string(),
            ));
        }

        let random: Box<dyn RandomSource> = match self.random {
            Some(random) => random,
            None => Box::new(RngSource::from_os_rng()),
        };
        let random = SharedRandom::new(random);
        let token_manager = Arc::new(TokenManager::new(
            appid.clone(),
            random.clone(),
            self.token_ttl.unwrap_or(DEFAULT_TOKEN_TTL),
            self.latency.token,
        ));

        log::info!("[WechatMock] initialized for App ID: {}", appid.as_str());

        let context = MockContext::new(
            appid,
            users,
            token_manager,
            random,
            self.latency,
            self.redirect_uri
                .unwrap_or_else(|| DEFAULT_REDIRECT_URI.to_string()),
        );

        Ok(WechatMock::from(Arc::new(context)))
    }
}
