use thiserror::Error;

/// Mock SDK error types
#[derive(Debug, Error)]
pub enum WechatError {
    /// Malformed caller input, raised instead of returned as an envelope
    #[error("{}", describe(.code, .message))]
    InvalidArgument { code: Option<i32>, message: String },

    #[error("WeChat API error (code={code}): {message}")]
    Api { code: i32, message: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl WechatError {
    pub(crate) fn invalid(code: i32, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            code: Some(code),
            message: message.into(),
        }
    }

    /// Numeric code carried by the error, if any
    pub fn code(&self) -> Option<i32> {
        match self {
            Self::InvalidArgument { code, .. } => *code,
            Self::Api { code, .. } => Some(*code),
            Self::Json(_) | Self::Config(_) => None,
        }
    }

    /// Convert a non-zero errcode into [`WechatError::Api`]
    pub fn check_api(errcode: i32, errmsg: &str) -> Result<(), WechatError> {
        if errcode != 0 {
            return Err(Self::Api {
                code: errcode,
                message: errmsg.to_string(),
            });
        }
        Ok(())
    }
}

fn describe(code: &Option<i32>, message: &str) -> String {
    match code {
        Some(code) => format!("[Error {code}] {message}"),
        None => message.to_string(),
    }
}
