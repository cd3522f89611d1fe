//! Fixed-window limiter for authentication attempts, keyed by client
//! address. State lives in process memory and does not survive restarts;
//! for a multi-process deployment swap in a shared [`AttemptStore`].

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use axum::http::HeaderMap;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(15 * 60);

/// Per-client counter for the current window.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitEntry {
    pub count: u32,
    pub reset_at: Instant,
}

/// Whether an attempt was admitted into the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptDecision {
    Permitted,
    Limited,
}

/// Storage seam for attempt counters.
///
/// `record_attempt` applies the whole window transition for one attempt
/// under the store's own synchronization, so concurrent callers cannot
/// lose counts (a shared external store would implement it as a single
/// atomic operation there).
pub trait AttemptStore: Send + Sync {
    fn record_attempt(
        &self,
        key: &str,
        max_attempts: u32,
        window: Duration,
        now: Instant,
    ) -> AttemptDecision;

    /// Drop entries whose window has passed.
    fn prune_expired(&self, now: Instant);
}

/// Process-local store backed by a mutexed map.
///
/// The map grows with distinct client keys; pruning on each check only
/// reclaims expired windows, so sustained traffic from many distinct
/// addresses still grows it without bound within one window.
#[derive(Default)]
pub struct InMemoryAttemptStore {
    entries: Mutex<HashMap<String, RateLimitEntry>>,
}

impl InMemoryAttemptStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, RateLimitEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AttemptStore for InMemoryAttemptStore {
    fn record_attempt(
        &self,
        key: &str,
        max_attempts: u32,
        window: Duration,
        now: Instant,
    ) -> AttemptDecision {
        let mut entries = self.lock();

        if let Some(entry) = entries.get_mut(key)
            && now < entry.reset_at
        {
            if entry.count >= max_attempts {
                return AttemptDecision::Limited;
            }
            entry.count += 1;
            return AttemptDecision::Permitted;
        }

        // First attempt from this key, or its window has passed
        entries.insert(
            key.to_string(),
            RateLimitEntry {
                count: 1,
                reset_at: now + window,
            },
        );
        AttemptDecision::Permitted
    }

    fn prune_expired(&self, now: Instant) {
        self.lock().retain(|_, entry| now < entry.reset_at);
    }
}

/// Attempt rejected: the client key exhausted its window.
#[derive(Debug)]
pub struct RateLimitExceeded;

impl fmt::Display for RateLimitExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Too many requests")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    pub max_attempts: u32,
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            window: DEFAULT_WINDOW,
        }
    }
}

#[derive(Clone)]
pub struct RateLimiter {
    store: Arc<dyn AttemptStore>,
    config: RateLimitConfig,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self::with_store(config, Arc::new(InMemoryAttemptStore::new()))
    }

    pub fn with_store(config: RateLimitConfig, store: Arc<dyn AttemptStore>) -> Self {
        Self { store, config }
    }

    /// Check the attempt behind `headers` against the window.
    pub fn check_headers(&self, headers: &HeaderMap) -> Result<(), RateLimitExceeded> {
        self.check_key_at(&client_key(headers), Instant::now())
    }

    pub fn check_key_at(&self, key: &str, now: Instant) -> Result<(), RateLimitExceeded> {
        if is_exempt(key) {
            return Ok(());
        }

        self.store.prune_expired(now);

        match self
            .store
            .record_attempt(key, self.config.max_attempts, self.config.window, now)
        {
            AttemptDecision::Permitted => Ok(()),
            AttemptDecision::Limited => {
                tracing::warn!(
                    client = key,
                    max_attempts = self.config.max_attempts,
                    window_secs = self.config.window.as_secs(),
                    "auth attempt rate limited"
                );
                Err(RateLimitExceeded)
            }
        }
    }
}

/// Client key: first address of `x-forwarded-for`, else `x-real-ip`,
/// else "unknown".
pub fn client_key(headers: &HeaderMap) -> String {
    if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok())
        && let Some(first) = forwarded.split(',').next()
        && !first.trim().is_empty()
    {
        return first.trim().to_string();
    }

    if let Some(real_ip) = headers.get("x-real-ip").and_then(|v| v.to_str().ok())
        && !real_ip.trim().is_empty()
    {
        return real_ip.trim().to_string();
    }

    "unknown".to_string()
}

/// Local and unresolvable clients are never limited.
fn is_exempt(key: &str) -> bool {
    matches!(key, "unknown" | "localhost" | "127.0.0.1" | "::1")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limiter(max_attempts: u32, window_secs: u64) -> RateLimiter {
        RateLimiter::new(RateLimitConfig {
            max_attempts,
            window: Duration::from_secs(window_secs),
        })
    }

    #[test]
    fn test_permits_up_to_limit_then_blocks() {
        let limiter = limiter(3, 60);
        let now = Instant::now();

        for _ in 0..3 {
            assert!(limiter.check_key_at("203.0.113.9", now).is_ok());
        }
        assert!(limiter.check_key_at("203.0.113.9", now).is_err());
    }

    #[test]
    fn test_window_reset_allows_again() {
        let limiter = limiter(3, 60);
        let start = Instant::now();

        for _ in 0..3 {
            assert!(limiter.check_key_at("203.0.113.9", start).is_ok());
        }
        assert!(limiter.check_key_at("203.0.113.9", start).is_err());

        // Count restarts at 1, so a full burst fits again.
        let later = start + Duration::from_secs(60);
        for _ in 0..3 {
            assert!(limiter.check_key_at("203.0.113.9", later).is_ok());
        }
        assert!(limiter.check_key_at("203.0.113.9", later).is_err());
    }

    #[test]
    fn test_keys_are_counted_independently() {
        let limiter = limiter(2, 60);
        let now = Instant::now();

        assert!(limiter.check_key_at("203.0.113.9", now).is_ok());
        assert!(limiter.check_key_at("203.0.113.9", now).is_ok());
        assert!(limiter.check_key_at("203.0.113.9", now).is_err());

        assert!(limiter.check_key_at("198.51.100.7", now).is_ok());
    }

    #[test]
    fn test_loopback_and_unknown_are_exempt() {
        let limiter = limiter(1, 60);
        let now = Instant::now();

        for key in ["unknown", "localhost", "127.0.0.1", "::1"] {
            for _ in 0..10 {
                assert!(limiter.check_key_at(key, now).is_ok());
            }
        }
    }

    #[test]
    fn test_expired_entries_are_pruned_on_later_checks() {
        let store = Arc::new(InMemoryAttemptStore::new());
        let limiter = RateLimiter::with_store(
            RateLimitConfig {
                max_attempts: 5,
                window: Duration::from_secs(60),
            },
            store.clone(),
        );
        let start = Instant::now();

        limiter.check_key_at("203.0.113.9", start).unwrap();
        assert_eq!(store.len(), 1);

        let later = start + Duration::from_secs(61);
        limiter.check_key_at("198.51.100.7", later).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_separate_stores_do_not_share_counts() {
        let a = limiter(1, 60);
        let b = limiter(1, 60);
        let now = Instant::now();

        assert!(a.check_key_at("203.0.113.9", now).is_ok());
        assert!(a.check_key_at("203.0.113.9", now).is_err());

        assert!(b.check_key_at("203.0.113.9", now).is_ok());
    }

    #[test]
    fn test_client_key_prefers_first_forwarded_address() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            "203.0.113.9, 198.51.100.7".parse().unwrap(),
        );
        headers.insert("x-real-ip", "192.0.2.1".parse().unwrap());

        assert_eq!(client_key(&headers), "203.0.113.9");
    }

    #[test]
    fn test_client_key_falls_back_to_real_ip_then_unknown() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", "192.0.2.1".parse().unwrap());
        assert_eq!(client_key(&headers), "192.0.2.1");

        assert_eq!(client_key(&HeaderMap::new()), "unknown");
    }
}
