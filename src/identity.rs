//! The identity source seam and the providers shipped with the site.

use crate::security::constant_time_compare;
use anyhow::{bail, Result};
use axum::http::{header, HeaderMap};
use futures::future::{self, BoxFuture, FutureExt};
use tracing::debug;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "__session";

/// The current authenticated user, as far as the pages care.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: String,
    pub primary_email: Option<String>,
}

impl UserRecord {
    pub fn new(id: impl Into<String>, primary_email: Option<String>) -> Self {
        Self {
            id: id.into(),
            primary_email,
        }
    }

    pub fn primary_email(&self) -> Option<&str> {
        self.primary_email.as_deref()
    }
}

/// Looks up the user behind a request.
///
/// Best effort: an unknown or missing credential is `None`, never an error.
pub trait IdentityProvider: Send + Sync {
    fn current_user<'a>(&'a self, headers: &'a HeaderMap) -> BoxFuture<'a, Option<UserRecord>>;
}

/// Provider for sites without sign-in: nobody is ever signed in.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

impl IdentityProvider for Anonymous {
    fn current_user<'a>(&'a self, _headers: &'a HeaderMap) -> BoxFuture<'a, Option<UserRecord>> {
        future::ready(None).boxed()
    }
}

/// Provider backed by a fixed table of session tokens.
///
/// The token is read from `Authorization: Bearer <token>` or from the
/// `__session` cookie.
#[derive(Debug, Clone, Default)]
pub struct SessionTokenIdentity {
    sessions: Vec<(String, UserRecord)>,
}

impl SessionTokenIdentity {
    pub fn new(sessions: Vec<(String, UserRecord)>) -> Self {
        Self { sessions }
    }

    /// Parse `token=email` pairs separated by `;`.
    ///
    /// An empty email (`token=`) yields a user without a primary email.
    pub fn parse(spec: &str) -> Result<Self> {
        let mut sessions = Vec::new();

        for (index, entry) in spec
            .split(';')
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .enumerate()
        {
            let Some((token, email)) = entry.split_once('=') else {
                bail!("Session entry {} is not in token=email form", index + 1);
            };
            let token = token.trim();
            if token.is_empty() {
                bail!("Session entry {} has an empty token", index + 1);
            }
            let email = Some(email.trim().to_string()).filter(|e| !e.is_empty());
            sessions.push((
                token.to_string(),
                UserRecord::new(format!("user_{}", index + 1), email),
            ));
        }

        Ok(Self { sessions })
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn lookup(&self, token: &str) -> Option<UserRecord> {
        self.sessions
            .iter()
            .find(|(known, _)| constant_time_compare(known, token))
            .map(|(_, user)| user.clone())
    }
}

impl IdentityProvider for SessionTokenIdentity {
    fn current_user<'a>(&'a self, headers: &'a HeaderMap) -> BoxFuture<'a, Option<UserRecord>> {
        let user = session_token(headers).and_then(|token| self.lookup(token));
        if user.is_none() {
            debug!("No signed-in user for request");
        }
        future::ready(user).boxed()
    }
}

/// Extract the session token from the request headers.
pub fn session_token(headers: &HeaderMap) -> Option<&str> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().split_once(' '))
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
        .map(|(_, token)| token.trim())
        .filter(|token| !token.is_empty());

    bearer.or_else(|| {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|cookies| cookies.split(';'))
            .filter_map(|cookie| cookie.trim().split_once('='))
            .find(|(name, _)| *name == SESSION_COOKIE)
            .map(|(_, token)| token.trim())
            .filter(|token| !token.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(name: header::HeaderName, value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(name, HeaderValue::from_str(value).unwrap());
        headers
    }

    // ==================== Token Extraction Tests ====================

    #[test]
    fn test_session_token_from_bearer() {
        let headers = headers_with(header::AUTHORIZATION, "Bearer abc");
        assert_eq!(session_token(&headers), Some("abc"));
    }

    #[test]
    fn test_session_token_scheme_is_case_insensitive() {
        let headers = headers_with(header::AUTHORIZATION, "bearer abc");
        assert_eq!(session_token(&headers), Some("abc"));
        let headers = headers_with(header::AUTHORIZATION, "BEARER  abc");
        assert_eq!(session_token(&headers), Some("abc"));
    }

    #[test]
    fn test_session_token_from_cookie() {
        let headers = headers_with(header::COOKIE, "theme=dark; __session=xyz; other=1");
        assert_eq!(session_token(&headers), Some("xyz"));
    }

    #[test]
    fn test_session_token_absent() {
        assert_eq!(session_token(&HeaderMap::new()), None);
        let headers = headers_with(header::AUTHORIZATION, "Basic dXNlcg==");
        assert_eq!(session_token(&headers), None);
    }

    // ==================== Parsing Tests ====================

    #[test]
    fn test_parse_sessions() {
        let identity = SessionTokenIdentity::parse("t1=a@b.com; t2=").expect("Should parse");
        assert_eq!(identity.len(), 2);
        assert_eq!(
            identity.lookup("t1"),
            Some(UserRecord::new("user_1", Some("a@b.com".to_string())))
        );
        assert_eq!(identity.lookup("t2"), Some(UserRecord::new("user_2", None)));
    }

    #[test]
    fn test_parse_empty_spec() {
        assert!(SessionTokenIdentity::parse("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(SessionTokenIdentity::parse("no-equals-sign").is_err());
        assert!(SessionTokenIdentity::parse("=a@b.com").is_err());
    }

    // ==================== Provider Tests ====================

    #[tokio::test]
    async fn test_anonymous_has_no_user() {
        let headers = headers_with(header::AUTHORIZATION, "Bearer t1");
        assert_eq!(Anonymous.current_user(&headers).await, None);
    }

    #[tokio::test]
    async fn test_session_identity_known_token() {
        let identity = SessionTokenIdentity::parse("t1=a@b.com").unwrap();
        let headers = headers_with(header::COOKIE, "__session=t1");
        let user = identity.current_user(&headers).await.expect("Should find user");
        assert_eq!(user.primary_email(), Some("a@b.com"));
    }

    #[tokio::test]
    async fn test_session_identity_unknown_token() {
        let identity = SessionTokenIdentity::parse("t1=a@b.com").unwrap();
        let headers = headers_with(header::AUTHORIZATION, "Bearer t9");
        assert_eq!(identity.current_user(&headers).await, None);
    }
}
