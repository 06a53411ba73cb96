//! Unified mock client

use std::sync::Arc;
use std::time::Instant;

use crate::api::message::{MessageApi, MessageSent};
use crate::api::oauth::{OAuthAccessToken, OAuthApi, OAuthScope};
use crate::api::payment::{PaymentApi, PaymentInitiated};
use crate::api::ticket::TicketApi;
use crate::api::user::UserApi;
use crate::api::MockContext;
use crate::error::WechatError;
use crate::types::{UserDirectory, UserRecord, WeChatResponse};

/// Unified mock WeChat client
///
/// Entry point of the crate. Every call that needs an access token obtains
/// one from the internal cache, refreshing it when expired.
///
/// # Example
///
/// ```rust
/// use wechat_mock_sdk::WechatMock;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let wechat = WechatMock::new("my_test_app", "my_test_secret")?;
///
///     let response = wechat.send_text_message("user_open_id_123", "Hello!").await?;
///     assert!(response.is_success());
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct WechatMock {
    context: Arc<MockContext>,
}

impl std::fmt::Debug for WechatMock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WechatMock")
            .field("appid", &self.appid())
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

impl From<Arc<MockContext>> for WechatMock {
    fn from(context: Arc<MockContext>) -> Self {
        Self { context }
    }
}

impl WechatMock {
    pub fn builder() -> super::builder::WechatMockBuilder {
        super::builder::WechatMockBuilder::default()
    }

    /// Client with the given credentials and default settings
    ///
    /// # Errors
    /// `InvalidArgument` when either credential is empty.
    pub fn new(appid: impl Into<String>, secret: impl Into<String>) -> Result<Self, WechatError> {
        Self::builder().appid(appid).secret(secret).build()
    }

    pub fn appid(&self) -> &str {
        self.context.appid()
    }

    pub fn context(&self) -> Arc<MockContext> {
        self.context.clone()
    }

    pub fn users(&self) -> &UserDirectory {
        self.context.users()
    }

    /// Whether an OAuth code exchange has succeeded on this client
    pub fn is_authenticated(&self) -> bool {
        self.context.is_authenticated()
    }

    // Token

    pub async fn get_access_token(&self) -> String {
        self.context.token_manager.get_token().await
    }

    /// Cached token, without refreshing
    pub async fn cached_access_token(&self) -> Option<String> {
        self.context.token_manager.cached().await
    }

    pub async fn token_expires_at(&self) -> Option<Instant> {
        self.context.token_manager.expires_at().await
    }

    pub async fn expire_token(&self) {
        self.context.token_manager.force_expiry().await;
    }

    pub async fn invalidate_token(&self) {
        self.context.token_manager.invalidate().await;
    }

    // Message API

    pub async fn send_text_message(
        &self,
        openid: &str,
        content: &str,
    ) -> Result<WeChatResponse<MessageSent>, WechatError> {
        MessageApi::new(self.context.clone())
            .send_text(openid, content)
            .await
    }

    // Payment API

    pub async fn simulate_payment(
        &self,
        openid: &str,
        amount_cents: i64,
        description: &str,
    ) -> Result<WeChatResponse<PaymentInitiated>, WechatError> {
        PaymentApi::new(self.context.clone())
            .simulate(openid, amount_cents, description)
            .await
    }

    // User API

    pub async fn get_user_info(&self, openid: &str) -> Option<UserRecord> {
        UserApi::new(self.context.clone()).get_info(openid).await
    }

    // OAuth API

    pub fn oauth_authorize_url(&self, scope: OAuthScope, state: Option<&str>) -> String {
        OAuthApi::new(self.context.clone()).authorize_url(scope, state)
    }

    pub async fn oauth_exchange_code(
        &self,
        code: &str,
    ) -> Result<WeChatResponse<OAuthAccessToken>, WechatError> {
        OAuthApi::new(self.context.clone())
            .exchange_code(code)
            .await
    }

    // Ticket API

    pub async fn get_jsapi_ticket(&self) -> String {
        TicketApi::new(self.context.clone())
            .get_jsapi_ticket()
            .await
    }
}
