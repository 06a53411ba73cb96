//! Text message sending

use std::sync::Arc;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::api::r#trait::{MockApi, MockContext};
use crate::error::WechatError;
use crate::latency;
use crate::types::WeChatResponse;
use crate::utils::token_preview;

/// Error code returned when the recipient is not in the user directory
pub const ERRCODE_USER_NOT_FOUND: i32 = 40003;

/// Payload of a successful send
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSent {
    pub msgid: String,
}

/// Message API
pub struct MessageApi {
    context: Arc<MockContext>,
}

impl MessageApi {
    pub fn new(context: Arc<MockContext>) -> Self {
        Self { context }
    }

    /// Send a text message to a user
    ///
    /// # Errors
    /// `InvalidArgument` (40001 / 40002) when `openid` or `content` is empty.
    /// An unknown recipient is not an error: it yields an envelope with
    /// errcode 40003.
    pub async fn send_text(
        &self,
        openid: &str,
        content: &str,
    ) -> Result<WeChatResponse<MessageSent>, WechatError> {
        if openid.is_empty() {
            return Err(WechatError::invalid(
                40001,
                "Recipient OpenID cannot be empty.",
            ));
        }
        if content.is_empty() {
            return Err(WechatError::invalid(40002, "Message content cannot be empty."));
        }

        let token = self.context.token_manager.get_token().await;
        debug!(
            "[WechatMock] sending message to {} with token {}...",
            openid,
            token_preview(&token)
        );
        latency::pause(self.context.latency.message).await;

        if !self.context.users.contains(openid) {
            warn!("[WechatMock] message not sent, user {} not found", openid);
            return Ok(WeChatResponse::failure(
                ERRCODE_USER_NOT_FOUND,
                format!("user not found: {openid}"),
            ));
        }

        let msgid = format!(
            "mock_msg_id_{}",
            self.context.random.int_in(100000..=999999)
        );
        info!("[WechatMock] message {} sent to {}", msgid, openid);

        Ok(WeChatResponse::ok(MessageSent { msgid }))
    }
}

impl MockApi for MessageApi {
    fn context(&self) -> &MockContext {
        &self.context
    }

    fn api_name(&self) -> &'static str {
        "message"
    }
}
