//! Authentication for the VegaBCH Daemon
//!
//! The daemon authenticates every RPC request with HTTP Basic credentials.
//! This module provides the opaque carrier the transport attaches to each
//! POST. How the credentials are provisioned (environment, config file,
//! keychain) is the caller's concern, not this crate's.

use std::fmt;

/// HTTP Basic credentials for the daemon endpoint.
///
/// The password never appears in `Display` output, so the carrier is safe
/// to log.
///
/// # Example
///
/// ```
/// use vegabch_client::Credentials;
///
/// let credentials = Credentials::new("alice", "hunter2");
/// assert_eq!(credentials.username(), "alice");
/// assert_eq!(format!("{}", credentials), "Basic(alice:*****)");
/// ```
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Create a credential pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The username presented to the daemon.
    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Display for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Basic({}:*****)", self.username)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"*****")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_accessors() {
        let credentials = Credentials::new("alice", "secret");
        assert_eq!(credentials.username(), "alice");
        assert_eq!(credentials.password(), "secret");
    }

    #[test]
    fn test_display_redacts_password() {
        let credentials = Credentials::new("alice", "secret");
        assert_eq!(format!("{}", credentials), "Basic(alice:*****)");
        assert!(!format!("{}", credentials).contains("secret"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let credentials = Credentials::new("alice", "secret");
        assert!(!format!("{:?}", credentials).contains("secret"));
    }
}
