use serde::{Deserialize, Serialize};

/// The `database` section of the JSON config file. Loaded once per run and
/// never mutated. `host` and `port` are required to be present even though
/// the connection itself goes over the fixed Unix socket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
}
