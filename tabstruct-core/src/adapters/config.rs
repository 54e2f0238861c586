//! Database connection configuration.
//!
//! This module provides the `ConnectionConfig` struct describing where the
//! schema is fetched from. It is used for validation and log output only;
//! the driver receives the full connection URL separately.

/// MySQL's default TCP port.
pub const DEFAULT_MYSQL_PORT: u16 = 3306;

/// Configuration for a database connection.
///
/// # Security
/// This struct intentionally does NOT store passwords or credentials.
///
/// # Example
/// ```rust
/// use tabstruct_core::adapters::ConnectionConfig;
///
/// let config = ConnectionConfig::new("localhost".to_string())
///     .with_port(3306)
///     .with_database("app".to_string())
///     .with_username("reader".to_string());
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Database host address
    pub host: String,
    /// Optional port number
    pub port: Option<u16>,
    /// Optional default database name
    pub database: Option<String>,
    /// Optional username (password handled separately)
    pub username: Option<String>,
    /// Unix socket path, when connecting over a socket instead of TCP
    pub socket: Option<String>,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: None,
            database: None,
            username: None,
            socket: None,
        }
    }
}

impl std::fmt::Display for ConnectionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.socket {
            Some(socket) => write!(f, "ConnectionConfig(unix:{socket}")?,
            None => write!(
                f,
                "ConnectionConfig({}{}",
                self.host,
                self.port.map_or_else(String::new, |p| format!(":{p}"))
            )?,
        }
        write!(
            f,
            "{})",
            self.database
                .as_ref()
                .map_or_else(String::new, |db| format!("/{db}"))
        )
        // Intentionally omit username and never include credentials
    }
}

impl ConnectionConfig {
    /// Validates connection configuration parameters.
    ///
    /// # Errors
    /// Returns error if configuration values are invalid
    pub fn validate(&self) -> crate::Result<()> {
        if self.host.is_empty() && self.socket.is_none() {
            return Err(crate::error::TabstructError::configuration(
                "host cannot be empty",
            ));
        }

        if self.port == Some(0) {
            return Err(crate::error::TabstructError::configuration(
                "port must be greater than 0",
            ));
        }

        if let Some(database) = &self.database
            && database.chars().count() > 64
        {
            return Err(crate::error::TabstructError::configuration(
                "Database name too long: maximum 64 characters",
            ));
        }

        Ok(())
    }

    /// Creates a new connection config with defaults.
    pub fn new(host: String) -> Self {
        Self {
            host,
            ..Default::default()
        }
    }

    /// Builder method to set port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Builder method to set database.
    #[must_use]
    pub fn with_database(mut self, database: String) -> Self {
        self.database = Some(database);
        self
    }

    /// Builder method to set username.
    #[must_use]
    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    /// Builder method to set a unix socket path.
    #[must_use]
    pub fn with_socket(mut self, socket: String) -> Self {
        self.socket = Some(socket);
        self
    }
}
