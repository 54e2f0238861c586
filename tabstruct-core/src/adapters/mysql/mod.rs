//! MySQL adapter: connection setup, schema introspection and type mapping.
//!
//! # Module Structure
//! - `connection`: Connection string normalization and connection setup
//! - `introspection`: `SHOW CREATE TABLE` execution
//! - `type_mapping`: MySQL declared type to Go type conversion

pub mod connection;
pub mod introspection;
pub mod type_mapping;

use super::{ConnectionConfig, SchemaSource};
use crate::Result;
use crate::identifier::TableName;
use async_trait::async_trait;
use sqlx::{Connection, MySqlConnection};
use tokio::sync::Mutex;

pub use connection::{normalize_connection_string, parse_mysql_connection_config};
pub use type_mapping::map_mysql_type;

/// MySQL adapter holding a single open connection.
pub struct MySqlAdapter {
    connection: Mutex<MySqlConnection>,
    config: ConnectionConfig,
}

impl std::fmt::Debug for MySqlAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlAdapter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl SchemaSource for MySqlAdapter {
    async fn show_create_table(&self, table: &TableName) -> Result<String> {
        let mut connection = self.connection.lock().await;
        introspection::show_create_table(&mut connection, table).await
    }
}

impl MySqlAdapter {
    /// Closes the connection gracefully.
    pub async fn close(self) {
        match self.connection.into_inner().close().await {
            Ok(()) => tracing::debug!("Connection to {} closed", self.config),
            Err(e) => tracing::debug!("Connection to {} closed with error: {}", self.config, e),
        }
    }
}
