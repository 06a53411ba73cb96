//! Payment initiation

use std::sync::Arc;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::api::r#trait::{MockApi, MockContext};
use crate::error::WechatError;
use crate::latency;
use crate::types::WeChatResponse;
use crate::utils::{token_preview, unix_timestamp};

/// Error code of a simulated decline
pub const ERRCODE_PAYMENT_FAILED: i32 = 50002;

/// Probability that a well-formed payment is declined
pub const DECLINE_PROBABILITY: f64 = 0.1;

/// Payload of a successful payment initiation
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentInitiated {
    pub prepay_id: String,
    pub transaction_id: String,
    /// Amount in cents, echoed from the request
    pub amount: i64,
}

/// Payment API
pub struct PaymentApi {
    context: Arc<MockContext>,
}

impl PaymentApi {
    pub fn new(context: Arc<MockContext>) -> Self {
        Self { context }
    }

    /// Simulate a payment of `amount_cents` by `openid`
    ///
    /// One draw from the random source decides the outcome: below
    /// [`DECLINE_PROBABILITY`] the payment is declined with errcode 50002.
    ///
    /// # Errors
    /// `InvalidArgument` (50001) when `amount_cents` is not positive.
    pub async fn simulate(
        &self,
        openid: &str,
        amount_cents: i64,
        description: &str,
    ) -> Result<WeChatResponse<PaymentInitiated>, WechatError> {
        if amount_cents <= 0 {
            return Err(WechatError::invalid(50001, "Payment amount must be positive."));
        }

        let token = self.context.token_manager.get_token().await;
        debug!(
            "[WechatMock] initiating payment for {} of {}.{:02} CNY with token {}...",
            openid,
            amount_cents / 100,
            amount_cents % 100,
            token_preview(&token)
        );
        latency::pause(self.context.latency.payment).await;

        if self.context.random.unit() < DECLINE_PROBABILITY {
            warn!("[WechatMock] payment for {} declined (simulated)", openid);
            return Ok(WeChatResponse::failure(
                ERRCODE_PAYMENT_FAILED,
                "payment failed due to insufficient funds (simulated)",
            ));
        }

        let transaction_id = format!(
            "mock_transaction_{}_{}",
            unix_timestamp(),
            self.context.random.int_in(1000..=9999)
        );
        let prepay_id = format!(
            "mock_prepay_id_{}",
            self.context.random.int_in(10000..=99999)
        );
        info!(
            "[WechatMock] payment for '{}' initiated, transaction {}",
            description, transaction_id
        );

        Ok(WeChatResponse::ok(PaymentInitiated {
            prepay_id,
            transaction_id,
            amount: amount_cents,
        }))
    }
}

impl MockApi for PaymentApi {
    fn context(&self) -> &MockContext {
        &self.context
    }

    fn api_name(&self) -> &'static str {
        "payment"
    }
}
