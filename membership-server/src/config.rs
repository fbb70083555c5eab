//! Membership configuration - paths and environment loading
//!
//! Configuration is loaded from environment variables:
//! - `MEMBERSHIP_DB_PATH`: SQLite database file (default: membership.db)
//! - `MEMBERSHIP_BIND`: Address to listen on (default: 127.0.0.1:5000)

use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_DB_PATH: &str = "membership.db";

/// Membership configuration
#[derive(Debug, Clone)]
pub struct MembershipConfig {
    /// SQLite database file holding the members table
    pub db_path: PathBuf,

    /// Address the HTTP server binds to
    pub bind_addr: SocketAddr,
}

impl MembershipConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        let db_path = std::env::var("MEMBERSHIP_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_PATH));

        let bind_addr = match std::env::var("MEMBERSHIP_BIND") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "MEMBERSHIP_BIND is not a socket address, using default");
                default_bind_addr()
            }),
            Err(_) => default_bind_addr(),
        };

        Self { db_path, bind_addr }
    }

    /// Create config with an explicit database path (for testing)
    pub fn with_db_path(db_path: PathBuf) -> Self {
        Self {
            db_path,
            bind_addr: default_bind_addr(),
        }
    }
}

impl Default for MembershipConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 5000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_db_path_keeps_default_bind() {
        let config = MembershipConfig::with_db_path(PathBuf::from("/tmp/members.db"));

        assert_eq!(config.db_path, PathBuf::from("/tmp/members.db"));
        assert_eq!(config.bind_addr.port(), 5000);
        assert!(config.bind_addr.ip().is_loopback());
    }
}
