//! The application's own host.
//!
//! Link contracts classify an `href` as internal or external by comparing
//! its host against the application's. Hosts are case-insensitive, so the
//! comparison is too.

/// The host the application itself is served from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppHost {
    host: String,
}

impl AppHost {
    /// Create from a host name such as `app.example.com`.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into().to_ascii_lowercase(),
        }
    }

    /// The normalized (lowercase) host name.
    pub fn name(&self) -> &str {
        &self.host
    }

    /// Whether `other` names this host, ignoring case.
    pub fn matches(&self, other: &str) -> bool {
        self.host.eq_ignore_ascii_case(other)
    }
}
