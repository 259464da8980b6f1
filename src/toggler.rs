use anyhow::{Context, Result};
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{Connection, Executor};
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::constants::{MYSQL_GRANT_DATABASE, MYSQL_UNIX_SOCKET};

/// Maps one line of operator input to a toggle direction. `"1"` enables,
/// `"0"` disables, anything else is rejected. Input is trimmed and
/// lower-cased before comparison.
pub fn parse_choice(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "1" => Some(true),
        "0" => Some(false),
        _ => None,
    }
}

/// Builds the grant-table update for the given account. The username is
/// interpolated as-is: it comes from the operator's own config file, never
/// from untrusted input.
pub fn host_update_statement(user: &str, enable: bool) -> String {
    let host = if enable { "%" } else { "localhost" };
    format!("update user set host='{}' where user='{}';", host, user)
}

pub fn status_message(enable: bool) -> String {
    let state = if enable { "enabled" } else { "disabled" };
    format!("Remote access {} successfully.", state)
}

/// Rewrites the account's `mysql.user` host entry and flushes privileges.
///
/// Connects over the fixed local Unix socket with the configured
/// credentials. The config's `host`/`port` are not used for the connection
/// itself. Any connection or execution failure propagates to the caller;
/// there is no retry. The connection is closed on every path.
pub async fn set_remote_access(config: &DatabaseConfig, enable: bool) -> Result<()> {
    let options = MySqlConnectOptions::new()
        .socket(MYSQL_UNIX_SOCKET)
        .username(&config.user)
        .password(&config.password)
        .database(MYSQL_GRANT_DATABASE);

    debug!("Connecting over unix socket: {}", MYSQL_UNIX_SOCKET);

    let mut connection = MySqlConnection::connect_with(&options)
        .await
        .with_context(|| format!("Failed to connect to MySQL via '{}'", MYSQL_UNIX_SOCKET))?;

    // Close the connection whether or not the statements went through.
    let outcome = apply_host_update(&mut connection, &config.user, enable).await;
    if let Err(close_err) = connection.close().await {
        debug!("Error while closing connection: {}", close_err);
    }
    outcome?;

    println!("{}", status_message(enable));

    Ok(())
}

async fn apply_host_update(
    connection: &mut MySqlConnection,
    user: &str,
    enable: bool,
) -> Result<()> {
    let update = host_update_statement(user, enable);

    connection
        .execute(update.as_str())
        .await
        .with_context(|| format!("Failed to update host entry for user '{}'", user))?;

    // Reload the grant tables so the change takes effect without a restart.
    connection
        .execute("FLUSH PRIVILEGES;")
        .await
        .context("Failed to flush privileges")?;

    info!(
        "Set host='{}' for user '{}'",
        if enable { "%" } else { "localhost" },
        user
    );

    Ok(())
}
