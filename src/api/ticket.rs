//! JS-SDK ticket issuance

use std::sync::Arc;

use log::info;

use crate::api::r#trait::{MockApi, MockContext};
use crate::client::WechatMock;
use crate::latency;
use crate::utils::unix_timestamp;

/// Ticket API
pub struct TicketApi {
    context: Arc<MockContext>,
}

impl TicketApi {
    pub fn new(context: Arc<MockContext>) -> Self {
        Self { context }
    }

    /// Issue a fresh JSAPI ticket; the client token is refreshed if needed
    pub async fn get_jsapi_ticket(&self) -> String {
        self.context.token_manager.get_token().await;
        info!(
            "[WechatMock] requesting JSAPI ticket for {}",
            self.context.appid()
        );
        latency::pause(self.context.latency.ticket).await;

        format!(
            "mock_jsapi_ticket_{}_{}",
            self.context.random.int_in(10000..=99999),
            unix_timestamp()
        )
    }
}

impl MockApi for TicketApi {
    fn context(&self) -> &MockContext {
        &self.context
    }

    fn api_name(&self) -> &'static str {
        "ticket"
    }
}

/// Obtain a JSAPI ticket for `client`
pub async fn get_jsapi_ticket(client: &WechatMock) -> String {
    client.get_jsapi_ticket().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WechatMock;

    #[test]
    fn test_ticket_api_name() {
        let wechat = WechatMock::new("test_app_123", "test_secret_xyz").unwrap();
        let api = TicketApi::new(wechat.context());
        assert_eq!(api.api_name(), "ticket");
        assert_eq!(api.context().appid(), "test_app_123");
    }
}
