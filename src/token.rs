//! Access token management for the mock client
//!
//! Handles token caching, refresh on expiry, and concurrency safety.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use log::{debug, info};
use tokio::sync::Mutex;

use crate::latency;
use crate::random::SharedRandom;
use crate::types::AppId;
use crate::utils::{token_preview, unix_timestamp};

/// Lifetime of a freshly issued access token
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(7200);

pub(crate) struct CachedToken {
    token: String,
    /// `None` when the TTL reaches past what `Instant` can represent
    expires_at: Option<Instant>,
}

impl CachedToken {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|expires_at| now >= expires_at)
    }
}

/// Manages access_token lifecycle with refresh on expiry
///
/// The check-then-refresh sequence runs under one async lock, so callers
/// sharing a client observe at most one refresh per expiry window.
pub struct TokenManager {
    appid: AppId,
    cache: Mutex<Option<CachedToken>>,
    refreshes: AtomicU64,
    ttl: Duration,
    latency: Duration,
    random: SharedRandom,
}

impl std::fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenManager")
            .field("appid", &self.appid)
            .field("ttl", &self.ttl)
            .field("refreshes", &self.refresh_count())
            .finish_non_exhaustive()
    }
}

impl TokenManager {
    pub(crate) fn new(appid: AppId, random: SharedRandom, ttl: Duration, latency: Duration) -> Self {
        Self {
            appid,
            cache: Mutex::new(None),
            refreshes: AtomicU64::new(0),
            ttl,
            latency,
            random,
        }
    }

    /// Return the cached token, minting a new one if absent or expired
    pub async fn get_token(&self) -> String {
        let mut cache = self.cache.lock().await;

        if let Some(ref cached) = *cache {
            if !cached.is_expired(Instant::now()) {
                return cached.token.clone();
            }
        }

        info!(
            "[WechatMock] requesting new access token for {}",
            self.appid.as_str()
        );
        latency::pause(self.latency).await;

        let generation = self.refreshes.fetch_add(1, Ordering::SeqCst) + 1;
        let token = format!(
            "mock_access_token_{}_{}_{}",
            self.random.int_in(10000..=99999),
            unix_timestamp(),
            generation
        );
        let expires_at = Instant::now().checked_add(self.ttl);

        debug!(
            "[WechatMock] new access token {}... valid for {:?}",
            token_preview(&token),
            self.ttl
        );

        *cache = Some(CachedToken {
            token: token.clone(),
            expires_at,
        });
        token
    }

    /// Currently cached token without triggering a refresh
    pub async fn cached(&self) -> Option<String> {
        self.cache
            .lock()
            .await
            .as_ref()
            .map(|cached| cached.token.clone())
    }

    /// Expiry of the cached token
    ///
    /// `None` if no token has been issued or the token never expires.
    pub async fn expires_at(&self) -> Option<Instant> {
        self.cache
            .lock()
            .await
            .as_ref()
            .and_then(|cached| cached.expires_at)
    }

    /// Mark the cached token as expired; the next call to
    /// [`get_token`](Self::get_token) mints a new one.
    pub async fn force_expiry(&self) {
        if let Some(cached) = self.cache.lock().await.as_mut() {
            cached.expires_at = Some(Instant::now());
        }
    }

    pub async fn invalidate(&self) {
        let mut cache = self.cache.lock().await;
        *cache = None;
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of tokens minted so far
    pub fn refresh_count(&self) -> u64 {
        self.refreshes.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::FixedRandom;

    fn create_test_manager(ttl: Duration) -> TokenManager {
        TokenManager::new(
            AppId::new("test_app_123").unwrap(),
            SharedRandom::new(Box::new(FixedRandom::new(0.5))),
            ttl,
            Duration::ZERO,
        )
    }

    #[test]
    fn test_token_manager_creation() {
        let manager = create_test_manager(DEFAULT_TOKEN_TTL);
        assert!(manager.cache.try_lock().unwrap().is_none());
        assert_eq!(manager.refresh_count(), 0);
    }

    #[test]
    fn test_cached_token_not_expired() {
        let now = Instant::now();
        let cached = CachedToken {
            token: "test_token".to_string(),
            expires_at: Some(now + Duration::from_secs(7200)),
        };
        assert!(!cached.is_expired(now));
    }

    #[test]
    fn test_cached_token_at_boundary() {
        let now = Instant::now();
        let cached = CachedToken {
            token: "test_token".to_string(),
            expires_at: Some(now),
        };
        assert!(cached.is_expired(now));
    }

    #[test]
    fn test_cached_token_without_expiry_never_expires() {
        let now = Instant::now();
        let cached = CachedToken {
            token: "test_token".to_string(),
            expires_at: None,
        };
        assert!(!cached.is_expired(now + Duration::from_secs(365 * 24 * 3600)));
    }

    #[tokio::test]
    async fn test_unrepresentable_ttl_does_not_panic() {
        let manager = create_test_manager(Duration::MAX);

        let first = manager.get_token().await;
        let second = manager.get_token().await;

        assert_eq!(first, second);
        assert!(manager.expires_at().await.is_none());

        manager.force_expiry().await;
        assert_ne!(manager.get_token().await, first);
    }

    #[tokio::test]
    async fn test_get_token_caches() {
        let manager = create_test_manager(DEFAULT_TOKEN_TTL);

        let first = manager.get_token().await;
        let second = manager.get_token().await;

        assert!(first.starts_with("mock_access_token_10000_"));
        assert_eq!(first, second);
        assert_eq!(manager.refresh_count(), 1);
        assert!(manager.expires_at().await.unwrap() > Instant::now());
    }

    #[tokio::test]
    async fn test_force_expiry_mints_distinct_token() {
        let manager = create_test_manager(DEFAULT_TOKEN_TTL);

        let first = manager.get_token().await;
        manager.force_expiry().await;
        let second = manager.get_token().await;

        // FixedRandom repeats the same digits; the generation suffix differs.
        assert_ne!(first, second);
        assert_eq!(manager.refresh_count(), 2);
    }

    #[tokio::test]
    async fn test_zero_ttl_always_refreshes() {
        let manager = create_test_manager(Duration::ZERO);

        let first = manager.get_token().await;
        let second = manager.get_token().await;

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_invalidate() {
        let manager = create_test_manager(DEFAULT_TOKEN_TTL);
        manager.get_token().await;
        assert!(manager.cached().await.is_some());

        manager.invalidate().await;

        assert!(manager.cached().await.is_none());
        assert!(manager.expires_at().await.is_none());
    }

    #[tokio::test]
    async fn test_force_expiry_without_token_is_noop() {
        let manager = create_test_manager(DEFAULT_TOKEN_TTL);
        manager.force_expiry().await;
        assert!(manager.cached().await.is_none());
    }
}
