//! CLI backup integration tests
//!
//! These tests verify that the CLI commands correctly delegate to the
//! store layer's backup engine.

use rusqlite::Connection;
use std::process::Command;
use tempfile::TempDir;

fn cli_bin() -> &'static str {
    env!("CARGO_BIN_EXE_limebyte")
}

fn init_db(path: &std::path::Path) {
    let output = Command::new(cli_bin())
        .args(["init", "--db", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute CLI");
    assert!(output.status.success(), "init failed: {:?}", output);
}

#[test]
fn test_cli_export_import_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let source_db = temp_dir.path().join("source.db");
    let target_db = temp_dir.path().join("target.db");
    let dump = temp_dir.path().join("backup.json");

    init_db(&source_db);
    init_db(&target_db);

    // Seed the source store
    let conn = Connection::open(&source_db).unwrap();
    conn.execute(
        "INSERT INTO posts (subject, message, slug, author_id) VALUES ('Hello', 'body', 'hello', 1)",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO subscribers (email) VALUES ('a@example.com')",
        [],
    )
    .unwrap();
    drop(conn);

    // Export from source
    let output = Command::new(cli_bin())
        .args([
            "export",
            "--db",
            source_db.to_str().unwrap(),
            "--out",
            dump.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute CLI");
    assert!(output.status.success(), "export failed: {:?}", output);
    assert!(dump.exists());

    // Import into target
    let output = Command::new(cli_bin())
        .args([
            "import",
            "--db",
            target_db.to_str().unwrap(),
            "--file",
            dump.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute CLI");
    assert!(output.status.success(), "import failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Database imported successfully"));
    assert!(stdout.contains("posts: 1"));

    let conn = Connection::open(&target_db).unwrap();
    let posts: i64 = conn
        .query_row("SELECT COUNT(*) FROM posts", [], |row| row.get(0))
        .unwrap();
    assert_eq!(posts, 1);
    let slug: String = conn
        .query_row("SELECT slug FROM posts", [], |row| row.get(0))
        .unwrap();
    assert_eq!(slug, "hello");
}

#[test]
fn test_cli_import_rejects_invalid_file() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("store.db");
    let bad_file = temp_dir.path().join("bad.json");

    init_db(&db);
    std::fs::write(&bad_file, r#"{"no_tables": true}"#).unwrap();

    let output = Command::new(cli_bin())
        .args([
            "import",
            "--db",
            db.to_str().unwrap(),
            "--file",
            bad_file.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute CLI");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid backup file"), "stderr: {}", stderr);
}

#[test]
fn test_cli_init_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("store.db");

    init_db(&db);
    init_db(&db);

    let conn = Connection::open(&db).unwrap();
    let admins: i64 = conn
        .query_row("SELECT COUNT(*) FROM users WHERE username = 'admin'", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(admins, 1);
}
