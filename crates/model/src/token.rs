//! Prosperity ID tokens.

use {
    serde::{Deserialize, Serialize},
    std::fmt::{self, Debug, Formatter},
};

/// An opaque bearer credential granting read access to a user's own
/// submissions. Tokens are caller supplied, expire server side and are not
/// validated here beyond the emptiness check callers perform before
/// triggering a fetch.
#[derive(Clone, Deserialize, Serialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the token contains no usable content. Whitespace-only
    /// tokens count as empty, matching the guard on the submitting side.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<String> for AuthToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

// Tokens are credentials and must not leak into logs.
impl Debug for AuthToken {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str("AuthToken(SECRET)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_counts_as_empty() {
        assert!(AuthToken::new("").is_empty());
        assert!(AuthToken::new("  \t ").is_empty());
        assert!(!AuthToken::new("eyJhbGciOi").is_empty());
    }

    #[test]
    fn debug_redacts_the_token() {
        let token = AuthToken::new("eyJhbGciOiJIUzI1NiJ9");
        assert_eq!(format!("{token:?}"), "AuthToken(SECRET)");
    }
}
