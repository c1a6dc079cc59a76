//! API bearer token handling
//!
//! The token is never written to the settings file. It comes from the
//! environment or a hidden prompt and is wiped from memory on drop.

use std::fmt;

use zeroize::Zeroizing;

use crate::error::{ProfitFirstError, ProfitFirstResult};

/// Environment variable holding the provider API token
pub const TOKEN_ENV: &str = "PROFITFIRST_API_TOKEN";

/// Bearer token for the payment provider
#[derive(Clone)]
pub struct ApiToken(Zeroizing<String>);

impl ApiToken {
    /// Wrap a token, rejecting blank values
    pub fn new(token: impl Into<String>) -> ProfitFirstResult<Self> {
        let token = Zeroizing::new(token.into());
        if token.trim().is_empty() {
            return Err(ProfitFirstError::Config("API token is empty".into()));
        }
        Ok(Self(token))
    }

    /// Read the token from `PROFITFIRST_API_TOKEN`, if set
    pub fn from_env() -> Option<ProfitFirstResult<Self>> {
        std::env::var(TOKEN_ENV).ok().map(Self::new)
    }

    /// Prompt for the token without echoing it
    pub fn prompt() -> ProfitFirstResult<Self> {
        let token = rpassword::prompt_password("Payment provider API token: ")
            .map_err(|e| ProfitFirstError::Io(format!("Failed to read token: {}", e)))?;
        Self::new(token)
    }

    /// Environment first, then the interactive prompt
    pub fn resolve() -> ProfitFirstResult<Self> {
        match Self::from_env() {
            Some(token) => token,
            None => Self::prompt(),
        }
    }

    /// Environment only; a missing token is a configuration error
    pub fn require_env() -> ProfitFirstResult<Self> {
        Self::from_env().unwrap_or_else(|| {
            Err(ProfitFirstError::Config(format!(
                "No API token configured. Set {}.",
                TOKEN_ENV
            )))
        })
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiToken([REDACTED {} bytes])", self.0.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_token_rejected() {
        assert!(matches!(
            ApiToken::new("   ").unwrap_err(),
            ProfitFirstError::Config(_)
        ));
    }

    #[test]
    fn test_debug_is_redacted() {
        let token = ApiToken::new("sk_live_secret").unwrap();
        let debug = format!("{:?}", token);
        assert!(!debug.contains("secret"));
        assert_eq!(token.expose(), "sk_live_secret");
    }
}
