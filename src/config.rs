//! Runtime configuration
//!
//! Two knobs only: the listen port and an optional database URL. A
//! configured database switches the service into the persistence variant,
//! which also changes the default port.

use clap::Parser;

/// Default port for the echo variant.
pub const DEFAULT_PORT: u16 = 8001;

/// Default port for the persistence variant.
pub const DEFAULT_PERSISTENCE_PORT: u16 = 3000;

/// Attendance API configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "attendance-api", version, about = "Simulated attendance registration endpoint")]
pub struct Config {
    /// Port to listen on (defaults to 8001, or 3000 with a database configured)
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Record store URL, e.g. sqlite://attendance.db; enables the persistence variant
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

impl Config {
    /// Whether the persistence variant is active.
    pub fn persistence_enabled(&self) -> bool {
        self.database_url.is_some()
    }

    /// Effective listen port: an explicit setting always wins, otherwise
    /// the variant picks its default.
    pub fn resolve_port(&self) -> u16 {
        self.port.unwrap_or(if self.persistence_enabled() {
            DEFAULT_PERSISTENCE_PORT
        } else {
            DEFAULT_PORT
        })
    }
}
