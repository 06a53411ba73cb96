use serde::{Deserialize, Serialize};

use crate::error::WechatError;

/// Response envelope shaped like a WeChat API reply
///
/// `errcode == 0` means success, in which case `data` carries the
/// operation payload flattened into the same JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeChatResponse<T> {
    pub errcode: i32,
    pub errmsg: String,
    #[serde(flatten)]
    pub data: Option<T>,
}

impl<T> WeChatResponse<T> {
    pub(crate) fn ok(data: T) -> Self {
        Self {
            errcode: 0,
            errmsg: "ok".to_string(),
            data: Some(data),
        }
    }

    pub(crate) fn failure(errcode: i32, errmsg: impl Into<String>) -> Self {
        Self {
            errcode,
            errmsg: errmsg.into(),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.errcode == 0
    }

    /// Unwrap the payload, turning a failure envelope into [`WechatError::Api`]
    pub fn into_result(self) -> Result<T, WechatError> {
        WechatError::check_api(self.errcode, &self.errmsg)?;
        self.data.ok_or_else(|| WechatError::Api {
            code: self.errcode,
            message: "missing response payload".to_string(),
        })
    }
}
