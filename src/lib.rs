// Config loading and validation
pub mod config;

// Fixed socket path, grant database and required config fields
pub mod constants;

// Grant-table host toggle against a live server
pub mod toggler;

pub mod utils;

// Re-export main types for convenience
pub use config::DatabaseConfig;
pub use toggler::{host_update_statement, parse_choice, set_remote_access, status_message};
