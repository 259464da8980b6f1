/// The local server refuses TCP loopback logins while the account's host
/// entry is `localhost`, so the connection always goes over the socket.
pub const MYSQL_UNIX_SOCKET: &str = "/usr/local/mysql9/tmp/mysql.sock";

/// System database holding the grant tables.
pub const MYSQL_GRANT_DATABASE: &str = "mysql";

/// Fields the `database` config section must carry.
pub const REQUIRED_DATABASE_FIELDS: &[&str] = &["host", "port", "user", "password"];

/// Config file shipped next to the installed binary.
pub const DEFAULT_CONFIG_FILE: &str = "../config";

pub const PROMPT: &str = "Enter '1' to open remote access, or '0' to close it: ";
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input! Please enter '1' or '0'.";
