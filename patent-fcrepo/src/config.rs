//! Repository connection settings
//!
//! Passed explicitly into the client; nothing here is read from globals.

use std::fmt;
use std::time::Duration;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Basic-auth credentials for the REST API
#[derive(Clone, Default)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("has_password", &!self.password.is_empty())
            .finish()
    }
}

/// How to reach a Fedora 4 repository
#[derive(Clone, Debug)]
pub struct RepositoryConfig {
    /// REST root, e.g. `http://localhost:8080/fcrepo/rest`. Trailing slashes
    /// are stripped by the client.
    pub endpoint: String,
    /// Optional container path below the root that new items are created in
    pub container: Option<String>,
    pub credentials: Credentials,
    /// Per-request timeout in seconds; a timeout counts as a failed request
    pub timeout_secs: u64,
}

impl RepositoryConfig {
    pub fn new(endpoint: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            endpoint: endpoint.into(),
            container: None,
            credentials,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_container(mut self, container: impl Into<String>) -> Self {
        self.container = Some(container.into());
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
