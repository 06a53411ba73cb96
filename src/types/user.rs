use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::WechatError;

/// Profile fields stored per openid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub nickname: String,
    pub city: String,
}

impl UserProfile {
    pub fn new(nickname: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            city: city.into(),
        }
    }
}

/// User record as returned by user info lookups
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub openid: String,
    pub nickname: String,
    pub city: String,
}

/// Read-only table of known users, keyed by openid
///
/// Ordered so that index-based selection is stable for a given seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserDirectory {
    users: BTreeMap<String, UserProfile>,
}

impl UserDirectory {
    pub fn empty() -> Self {
        Self {
            users: BTreeMap::new(),
        }
    }

    /// Parse a directory from `{"<openid>": {"nickname": .., "city": ..}}`
    pub fn from_json(json: &str) -> Result<Self, WechatError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_user(mut self, openid: impl Into<String>, profile: UserProfile) -> Self {
        self.users.insert(openid.into(), profile);
        self
    }

    pub fn get(&self, openid: &str) -> Option<UserRecord> {
        self.users.get(openid).map(|profile| UserRecord {
            openid: openid.to_string(),
            nickname: profile.nickname.clone(),
            city: profile.city.clone(),
        })
    }

    pub fn contains(&self, openid: &str) -> bool {
        self.users.contains_key(openid)
    }

    pub fn openids(&self) -> impl Iterator<Item = &str> {
        self.users.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::empty()
            .with_user("user_open_id_123", UserProfile::new("Alice", "Shenzhen"))
            .with_user("user_open_id_456", UserProfile::new("Bob", "Beijing"))
    }
}
