//! Mock API modules
//!
//! - [`message`] - Text messages
//! - [`payment`] - Payment initiation
//! - [`user`] - User information lookup
//! - [`oauth`] - OAuth authorize URL and code exchange
//! - [`ticket`] - JSAPI tickets
//!
//! Each API struct works from a shared [`MockContext`]. Most callers use
//! the [`WechatMock`](crate::WechatMock) facade instead.

pub mod message;
pub mod oauth;
pub mod payment;
pub mod ticket;
pub mod r#trait;
pub mod user;

pub use message::{MessageApi, MessageSent};
pub use oauth::{OAuthAccessToken, OAuthApi, OAuthScope};
pub use payment::{PaymentApi, PaymentInitiated};
pub use r#trait::{MockApi, MockContext};
pub use ticket::{get_jsapi_ticket, TicketApi};
pub use user::UserApi;
