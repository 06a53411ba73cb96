//! Offline mock of the WeChat platform API
//!
//! Lets code that talks to WeChat exercise its call shapes in tests and
//! demos without network access. Responses are templates filled with
//! generated identifiers; nothing leaves the process.
//!
//! ## Coverage
//!
//! | Operation | Method |
//! |-----------|--------|
//! | Access token | [`WechatMock::get_access_token`] |
//! | Text message | [`WechatMock::send_text_message`] |
//! | Payment | [`WechatMock::simulate_payment`] |
//! | User info | [`WechatMock::get_user_info`] |
//! | OAuth authorize URL | [`WechatMock::oauth_authorize_url`] |
//! | OAuth code exchange | [`WechatMock::oauth_exchange_code`] |
//! | JSAPI ticket | [`get_jsapi_ticket`] |
//!
//! ## Quick Start
//!
//! ```rust
//! use wechat_mock_sdk::api::OAuthScope;
//! use wechat_mock_sdk::random::FixedRandom;
//! use wechat_mock_sdk::WechatMock;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let wechat = WechatMock::builder()
//!         .appid("my_test_app")
//!         .secret("my_test_secret")
//!         .random(FixedRandom::new(0.5))
//!         .build()?;
//!
//!     let payment = wechat
//!         .simulate_payment("user_open_id_456", 199, "Coffee Purchase")
//!         .await?;
//!     assert_eq!(payment.into_result()?.amount, 199);
//!
//!     let url = wechat.oauth_authorize_url(OAuthScope::Base, Some("custom_state_123"));
//!     assert!(url.contains("state=custom_state_123"));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Malformed input is raised as [`WechatError::InvalidArgument`]. Failures
//! the real platform would report (unknown recipient, declined payment)
//! come back as a [`types::WeChatResponse`] with a non-zero `errcode`:
//!
//! ```rust,ignore
//! match wechat.send_text_message(openid, content).await {
//!     Ok(response) if response.is_success() => { /* sent */ }
//!     Ok(response) => eprintln!("rejected: {} {}", response.errcode, response.errmsg),
//!     Err(WechatError::InvalidArgument { code, message }) => { /* bad input */ }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`api`] - Per-operation mock implementations
//! - [`client`] - The [`WechatMock`] facade and its builder
//! - [`error`] - Error types
//! - [`latency`] - Optional simulated response delays
//! - [`random`] - Injectable random source
//! - [`token`] - Access token cache
//! - [`types`] - Credentials, user directory and response envelope

pub mod api;
pub mod client;
pub mod error;
pub mod latency;
pub mod random;
pub mod token;
pub mod types;
mod utils;

pub use api::get_jsapi_ticket;
pub use client::{WechatMock, WechatMockBuilder};
pub use error::WechatError;
