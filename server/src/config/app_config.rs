//! Runtime configuration loaded from environment variables.

/// Port the original service listened on.
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Runtime configuration, fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Source of the logo composited into every code. `None` disables the logo.
    pub logo_url: Option<String>,
    pub server_port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logo_url: None,
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// A set `LOGO_URL` counts as configured even when empty; fetching it
    /// then fails at startup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("SERVER_PORT").unwrap_or_default();

        Self {
            logo_url: lookup("LOGO_URL"),
            server_port: parse_u16(&port, DEFAULT_SERVER_PORT),
        }
    }
}

fn parse_u16(s: &str, default: u16) -> u16 {
    if s.is_empty() {
        return default;
    }
    s.parse().unwrap_or(default)
}
