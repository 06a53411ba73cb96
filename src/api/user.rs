use std::sync::Arc;

use log::{debug, info};

use crate::api::r#trait::{MockApi, MockContext};
use crate::latency;
use crate::types::UserRecord;
use crate::utils::token_preview;

/// User API for retrieving user information
pub struct UserApi {
    context: Arc<MockContext>,
}

impl UserApi {
    pub fn new(context: Arc<MockContext>) -> Self {
        Self { context }
    }

    /// Look up a user by openid
    ///
    /// Returns `None` for unknown users rather than an error.
    pub async fn get_info(&self, openid: &str) -> Option<UserRecord> {
        let token = self.context.token_manager.get_token().await;
        debug!(
            "[WechatMock] fetching user info for {} with token {}...",
            openid,
            token_preview(&token)
        );
        latency::pause(self.context.latency.user).await;

        let record = self.context.users.get(openid);
        if record.is_none() {
            info!("[WechatMock] user {} not found during info fetch", openid);
        }
        record
    }
}

impl MockApi for UserApi {
    fn context(&self) -> &MockContext {
        &self.context
    }

    fn api_name(&self) -> &'static str {
        "user"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WechatMock;

    #[test]
    fn test_user_api_name() {
        let wechat = WechatMock::new("test_app_123", "test_secret_xyz").unwrap();
        let api = UserApi::new(wechat.context());
        assert_eq!(api.api_name(), "user");
        assert_eq!(api.context().appid(), "test_app_123");
    }
}
