//! Mock client module
//!
//! This module contains the WechatMock facade and its builder.

mod wechat_mock;
pub use wechat_mock::WechatMock;

mod builder;
pub use builder::{WechatMockBuilder, DEFAULT_APP_ID, DEFAULT_APP_SECRET};
