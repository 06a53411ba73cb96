use serde::{Deserialize, Serialize};

use crate::error::WechatError;

const EMPTY_CREDENTIALS: &str = "App ID and App Secret cannot be empty.";

/// Application identifier (AppID)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppId(String);

impl AppId {
    pub fn new(id: impl Into<String>) -> Result<Self, WechatError> {
        let id = id.into();
        if id.is_empty() {
            return Err(WechatError::InvalidArgument {
                code: None,
                message: EMPTY_CREDENTIALS.to_string(),
            });
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Application secret (AppSecret)
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppSecret(String);

impl AppSecret {
    pub fn new(secret: impl Into<String>) -> Result<Self, WechatError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(WechatError::InvalidArgument {
                code: None,
                message: EMPTY_CREDENTIALS.to_string(),
            });
        }
        Ok(Self(secret))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AppSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AppSecret(***)")
    }
}
