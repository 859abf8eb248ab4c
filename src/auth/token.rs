use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::Serialize;

/// The dashboard user a bearer token was issued to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthUser {
    pub username: String,
    pub role: String,
}

struct Issued {
    user: AuthUser,
    expires_at: DateTime<Utc>,
}

/// In-process bearer tokens. Tokens do not survive a restart.
#[derive(Clone)]
pub struct TokenStore {
    tokens: Arc<Mutex<HashMap<String, Issued>>>,
    ttl: Duration,
}

impl TokenStore {
    pub fn new(ttl: Duration) -> Self {
        TokenStore {
            tokens: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    pub fn issue(&self, user: AuthUser) -> String {
        self.issue_at(user, Utc::now())
    }

    pub fn issue_at(&self, user: AuthUser, now: DateTime<Utc>) -> String {
        let token = generate_token();
        let mut map = self.tokens.lock().unwrap_or_else(|e| e.into_inner());
        map.retain(|_, issued| issued.expires_at > now);
        map.insert(
            token.clone(),
            Issued {
                user,
                expires_at: now + self.ttl,
            },
        );
        token
    }

    pub fn resolve(&self, token: &str) -> Option<AuthUser> {
        self.resolve_at(token, Utc::now())
    }

    /// The token's user, if the token exists and has not expired. An expired
    /// token is dropped on the way out.
    pub fn resolve_at(&self, token: &str, now: DateTime<Utc>) -> Option<AuthUser> {
        let mut map = self.tokens.lock().unwrap_or_else(|e| e.into_inner());
        let found = map
            .get(token)
            .map(|issued| (issued.expires_at > now, issued.user.clone()));
        match found {
            Some((true, user)) => Some(user),
            Some((false, _)) => {
                map.remove(token);
                None
            }
            None => None,
        }
    }

    /// Returns true if the token was live.
    pub fn revoke(&self, token: &str) -> bool {
        let mut map = self.tokens.lock().unwrap_or_else(|e| e.into_inner());
        map.remove(token).is_some()
    }
}

/// Random 32-byte hex token.
fn generate_token() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 32] = rng.random();
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> AuthUser {
        AuthUser {
            username: "admin".into(),
            role: "admin".into(),
        }
    }

    #[test]
    fn issued_token_resolves() {
        let store = TokenStore::new(Duration::hours(1));
        let token = store.issue(admin());
        assert_eq!(token.len(), 64);
        assert_eq!(store.resolve(&token), Some(admin()));
        assert_eq!(store.resolve("not-a-token"), None);
    }

    #[test]
    fn tokens_expire() {
        let store = TokenStore::new(Duration::hours(1));
        let now = Utc::now();
        let token = store.issue_at(admin(), now);
        assert!(store.resolve_at(&token, now + Duration::minutes(59)).is_some());
        assert!(store.resolve_at(&token, now + Duration::minutes(61)).is_none());
        // Dropped after the first expired lookup.
        assert!(store.resolve_at(&token, now).is_none());
    }

    #[test]
    fn revoke_invalidates() {
        let store = TokenStore::new(Duration::hours(1));
        let token = store.issue(admin());
        assert!(store.revoke(&token));
        assert!(!store.revoke(&token));
        assert!(store.resolve(&token).is_none());
    }

    #[test]
    fn tokens_are_unique() {
        let store = TokenStore::new(Duration::hours(1));
        assert_ne!(store.issue(admin()), store.issue(admin()));
    }
}
