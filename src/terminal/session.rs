use serde::{Deserialize, Serialize};

/// # Session Identity
///
/// The username/hostname pair attached to one interpreter instance. Both are
/// free-form strings; the interpreter only changes them through the
/// `set-username` and `set-hostname` control commands.
///
/// ```rust
/// use termquest::terminal::SessionIdentity;
///
/// let mut identity = SessionIdentity::new("guest", "termquest");
/// assert_eq!(identity.prompt(), "guest@termquest:~$");
/// identity.set_username("alice");
/// assert_eq!(identity.username(), "alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    username: String,
    hostname: String,
}

impl SessionIdentity {
    pub fn new(username: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            hostname: hostname.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn set_hostname(&mut self, hostname: impl Into<String>) {
        self.hostname = hostname.into();
    }

    /// Shell-style prompt, e.g. `alice@termquest:~$`.
    pub fn prompt(&self) -> String {
        format!("{}@{}:~$", self.username, self.hostname)
    }
}

/// Which identity field a control command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityField {
    Username,
    Hostname,
}

impl std::fmt::Display for IdentityField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentityField::Username => f.write_str("Username"),
            IdentityField::Hostname => f.write_str("Hostname"),
        }
    }
}
