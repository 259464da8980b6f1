use crate::config::{resolve_config_path, DatabaseConfig};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_config(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[tokio::test]
async fn test_load_well_formed_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "config.json",
        r#"{"database": {"host": "h", "port": 3306, "user": "admin", "password": "pw"}}"#,
    );

    let config = DatabaseConfig::load(&path).await.unwrap();

    assert_eq!(config.host, "h");
    assert_eq!(config.port, 3306);
    assert_eq!(config.user, "admin");
    assert_eq!(config.password, "pw");
}

#[tokio::test]
async fn test_load_ignores_extra_sections() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "config.json",
        r#"{
            "local": {"baseFolder": "/srv/data"},
            "database": {"host": "127.0.0.1", "port": 3307, "user": "ops", "password": "s3cret"}
        }"#,
    );

    let config = DatabaseConfig::load(&path).await.unwrap();

    assert_eq!(config.user, "ops");
    assert_eq!(config.port, 3307);
}

#[tokio::test]
async fn test_missing_database_section() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "config.json", r#"{"local": {}}"#);

    let err = DatabaseConfig::load(&path).await.unwrap_err();

    assert!(err.to_string().contains("missing the 'database' section"));
}

#[tokio::test]
async fn test_missing_required_field_is_named() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "config.json",
        r#"{"database": {"host": "h", "port": 3306, "user": "admin"}}"#,
    );

    let err = DatabaseConfig::load(&path).await.unwrap_err();

    assert!(err
        .to_string()
        .contains("missing required field: 'password'"));
}

#[tokio::test]
async fn test_nonexistent_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no-such-file.json");

    let err = DatabaseConfig::load(&path).await.unwrap_err();

    assert!(err.to_string().contains("does not exist"));
}

#[tokio::test]
async fn test_malformed_json() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "config.json", "{not json");

    let err = DatabaseConfig::load(&path).await.unwrap_err();

    assert!(err.to_string().contains("as JSON"));
}

#[test]
fn test_resolve_absolute_path_passes_through() {
    let resolved = resolve_config_path(Path::new("/etc/toggle/config.json")).unwrap();
    assert_eq!(resolved, Path::new("/etc/toggle/config.json"));
}

#[test]
fn test_resolve_relative_path_uses_exe_dir() {
    let resolved = resolve_config_path(Path::new("config.json")).unwrap();
    let exe_dir = std::env::current_exe().unwrap().parent().unwrap().to_path_buf();

    assert_eq!(resolved, exe_dir.join("config.json"));
}
