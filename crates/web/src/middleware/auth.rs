use std::collections::HashSet;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::error::WebError;
use crate::middleware::rate_limit::RateLimiter;

/// State for the protected-route layer: accepted keys plus the limiter
/// that throttles attempts per client address.
#[derive(Clone)]
pub struct AuthState {
    pub api_keys: ApiKeys,
    pub limiter: RateLimiter,
}

/// Bearer-key check for mutating routes. The rate limiter runs first,
/// before the credential is looked at.
pub async fn require_auth(
    State(auth): State<AuthState>,
    req: Request,
    next: Next,
) -> Result<Response, WebError> {
    auth.limiter.check_headers(req.headers())?;

    let token = bearer_token(&req).ok_or(WebError::Unauthorized)?;

    if !auth.api_keys.is_valid(token) {
        tracing::warn!("Invalid API key attempt");
        return Err(WebError::Unauthorized);
    }

    Ok(next.run(req).await)
}

fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(axum::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[derive(Clone)]
pub struct ApiKeys {
    keys: HashSet<String>,
}

impl ApiKeys {
    pub fn from_comma_separated(keys_str: &str) -> Self {
        let keys = keys_str
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Self { keys }
    }

    pub fn is_valid(&self, key: &str) -> bool {
        self.keys.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_parsed_from_comma_separated_list() {
        let keys = ApiKeys::from_comma_separated(" alpha , beta,,gamma ");
        assert!(keys.is_valid("alpha"));
        assert!(keys.is_valid("beta"));
        assert!(keys.is_valid("gamma"));
        assert!(!keys.is_valid(""));
        assert!(!keys.is_valid("delta"));
    }
}
