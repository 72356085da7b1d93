//! Shared-secret admin gate.
//!
//! There are no accounts: a single server-held password unlocks the editor.
//! The browser keeps the password itself in the [`ADMIN_COOKIE`] cookie and
//! every request is re-checked against the secret, so there is no session
//! store and clearing the cookie is the only way back to guest.

/// Name of the cookie carrying the raw admin password.
pub const ADMIN_COOKIE: &str = "password";

/// Message returned when a submitted password does not match.
pub const INCORRECT_PASSWORD: &str = "Incorrect password";

/// Access level derived for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Guest,
    Admin,
}

impl Access {
    pub fn is_admin(self) -> bool {
        matches!(self, Access::Admin)
    }
}

/// Compares candidates against the configured secret by plain string
/// equality.
///
/// An unset or empty secret disables admin access entirely: every
/// candidate, including the empty string, is rejected.
#[derive(Debug, Clone, Default)]
pub struct AdminGate {
    secret: Option<String>,
}

impl AdminGate {
    pub fn new(secret: Option<String>) -> Self {
        Self {
            secret: secret.filter(|s| !s.is_empty()),
        }
    }

    /// Whether a secret is configured at all.
    pub fn is_enabled(&self) -> bool {
        self.secret.is_some()
    }

    pub fn verify(&self, candidate: &str) -> bool {
        match &self.secret {
            Some(secret) => secret == candidate,
            None => false,
        }
    }

    /// Derive the access level from an optional cookie value.
    pub fn access_for(&self, cookie: Option<&str>) -> Access {
        match cookie {
            Some(value) if self.verify(value) => Access::Admin,
            _ => Access::Guest,
        }
    }
}
