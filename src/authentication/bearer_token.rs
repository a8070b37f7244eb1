use secrecy::{ExposeSecret, Secret};

/// JWT access token attached to every authenticated request.
#[derive(Clone, Debug)]
pub struct BearerToken(Secret<String>);

impl BearerToken {
    /// Returns `None` for a blank token, which the API hands out on failed logins.
    pub fn parse(token: String) -> Option<Self> {
        if token.trim().is_empty() {
            None
        } else {
            Some(Self(Secret::new(token)))
        }
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}
