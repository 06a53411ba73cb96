//! OAuth 2.0 web authorization
//!
//! Builds the authorize redirect URL and exchanges the code handed back by
//! the platform for a user-scoped access token.

use std::sync::Arc;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::api::r#trait::{MockApi, MockContext};
use crate::error::WechatError;
use crate::latency;
use crate::types::WeChatResponse;

pub const AUTHORIZE_ENDPOINT: &str = "https://open.weixin.qq.com/connect/oauth2/authorize";
pub const DEFAULT_REDIRECT_URI: &str = "https://your_mock_redirect_uri.com/callback";
pub const DEFAULT_STATE: &str = "mock_state";
/// Prefix every code accepted by [`OAuthApi::exchange_code`] must carry
pub const AUTH_CODE_PREFIX: &str = "mock_auth_code_";
/// Lifetime in seconds reported for user access tokens
pub const USER_TOKEN_EXPIRES_IN: u64 = 7200;

/// Authorization scope
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OAuthScope {
    /// Silent authorization, openid only
    #[serde(rename = "snsapi_base")]
    Base,
    /// Prompted authorization with profile access
    #[default]
    #[serde(rename = "snsapi_userinfo")]
    UserInfo,
}

impl OAuthScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "snsapi_base",
            Self::UserInfo => "snsapi_userinfo",
        }
    }
}

impl std::fmt::Display for OAuthScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of a successful code exchange
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthAccessToken {
    pub access_token: String,
    pub expires_in: u64,
    pub refresh_token: String,
    pub openid: String,
    pub scope: OAuthScope,
    #[serde(default)]
    pub unionid: Option<String>,
}

/// OAuth API
pub struct OAuthApi {
    context: Arc<MockContext>,
}

impl OAuthApi {
    pub fn new(context: Arc<MockContext>) -> Self {
        Self { context }
    }

    /// Build the URL the user should be redirected to
    ///
    /// `state` falls back to `mock_state`. The appid, redirect URI and state
    /// are embedded verbatim.
    pub fn authorize_url(&self, scope: OAuthScope, state: Option<&str>) -> String {
        let state = state.unwrap_or(DEFAULT_STATE);
        let url = format!(
            "{}?appid={}&redirect_uri={}&response_type=code&scope={}&state={}#wechat_redirect",
            AUTHORIZE_ENDPOINT,
            self.context.appid(),
            self.context.redirect_uri,
            scope.as_str(),
            state
        );
        debug!("[WechatMock] authorize url for scope {}: {}", scope, url);
        url
    }

    /// Exchange an authorization code for a user access token
    ///
    /// Marks the session as authenticated and picks one user from the
    /// directory as the authorizing user.
    ///
    /// # Errors
    /// `InvalidArgument` (40029) when `code` lacks the `mock_auth_code_` prefix.
    pub async fn exchange_code(
        &self,
        code: &str,
    ) -> Result<WeChatResponse<OAuthAccessToken>, WechatError> {
        if !code.starts_with(AUTH_CODE_PREFIX) {
            return Err(WechatError::invalid(40029, "Invalid authorization code."));
        }

        latency::pause(self.context.latency.oauth).await;

        let random = &self.context.random;
        let access_token = format!("user_mock_token_{}", random.int_in(1000..=9999));
        let users = &self.context.users;
        let index = random.index(users.len());
        let openid = users
            .openids()
            .nth(index)
            .ok_or_else(|| WechatError::Config("user directory is empty".to_string()))?
            .to_string();

        self.context.mark_authenticated();
        info!("[WechatMock] OAuth successful for user {}", openid);

        let refresh_token = format!("user_mock_refresh_token_{}", random.int_in(1000..=9999));
        let unionid = random
            .coin()
            .then(|| format!("mock_union_id_for_{openid}"));

        Ok(WeChatResponse::ok(OAuthAccessToken {
            access_token,
            expires_in: USER_TOKEN_EXPIRES_IN,
            refresh_token,
            openid,
            scope: OAuthScope::UserInfo,
            unionid,
        }))
    }
}

impl MockApi for OAuthApi {
    fn context(&self) -> &MockContext {
        &self.context
    }

    fn api_name(&self) -> &'static str {
        "oauth"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WechatMock;

    #[test]
    fn test_oauth_api_name() {
        let wechat = WechatMock::new("test_app_123", "test_secret_xyz").unwrap();
        let api = OAuthApi::new(wechat.context());
        assert_eq!(api.api_name(), "oauth");
        assert_eq!(api.context().appid(), "test_app_123");
    }

    #[test]
    fn test_scope_strings() {
        assert_eq!(OAuthScope::default(), OAuthScope::UserInfo);
        assert_eq!(OAuthScope::Base.as_str(), "snsapi_base");
        assert_eq!(OAuthScope::UserInfo.to_string(), "snsapi_userinfo");
    }

    #[test]
    fn test_scope_serde() {
        let json = serde_json::to_string(&OAuthScope::Base).unwrap();
        assert_eq!(json, "\"snsapi_base\"");
        let scope: OAuthScope = serde_json::from_str("\"snsapi_userinfo\"").unwrap();
        assert_eq!(scope, OAuthScope::UserInfo);
    }
}
