// Integration tests for the exporter: full snapshots, ordering, and
// per-collection degradation on read failure.

use limebyte_store::backup::{export, export_with_report, TableStatus, FORMAT_VERSION};
use rusqlite::Connection;

fn setup_test_db() -> Connection {
    let mut conn = limebyte_store::db::open_in_memory().unwrap();
    limebyte_store::db::configure(&conn).unwrap();
    limebyte_store::migrations::apply_migrations(&mut conn).unwrap();
    conn
}

fn seed_sample_data(conn: &Connection) {
    conn.execute(
        "INSERT INTO posts (subject, message, slug, author_id) VALUES ('B', 'second', 'b', 1)",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO posts (subject, message, slug, author_id) VALUES ('A', 'first', 'a', 1)",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO subscribers (email, ip_address) VALUES ('a@example.com', '10.0.0.1')",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO links (title, url) VALUES ('Repo', 'https://example.com')",
        [],
    )
    .unwrap();
}

#[test]
fn test_export_covers_all_collections() {
    let conn = setup_test_db();
    seed_sample_data(&conn);

    let doc = export(&conn).unwrap();

    assert!(doc.timestamp.is_some());
    assert_eq!(doc.version.as_deref(), Some(FORMAT_VERSION));

    let tables = &doc.tables;
    assert_eq!(tables.users.as_ref().unwrap().len(), 1); // bootstrap admin
    assert_eq!(tables.posts.as_ref().unwrap().len(), 2);
    assert_eq!(tables.subscribers.as_ref().unwrap().len(), 1);
    assert_eq!(tables.links.as_ref().unwrap().len(), 1);
    assert_eq!(tables.settings.as_ref().unwrap().len(), 1); // singleton
}

#[test]
fn test_export_orders_by_id() {
    let conn = setup_test_db();
    seed_sample_data(&conn);

    let doc = export(&conn).unwrap();
    let posts = doc.tables.posts.unwrap();

    // Insertion order, not alphabetical: 'B' was inserted first
    assert_eq!(posts[0].subject.as_deref(), Some("B"));
    assert_eq!(posts[1].subject.as_deref(), Some("A"));
    assert!(posts[0].id.unwrap() < posts[1].id.unwrap());
}

#[test]
fn test_export_carries_credential_hash() {
    let conn = setup_test_db();

    let doc = export(&conn).unwrap();
    let users = doc.tables.users.unwrap();

    // A backup must round-trip the hash, whatever it is
    assert_eq!(users[0].username.as_deref(), Some("admin"));
    assert!(users[0].password.is_some());
}

#[test]
fn test_export_degrades_failed_collection() {
    let conn = setup_test_db();
    seed_sample_data(&conn);
    conn.execute("DROP TABLE links", []).unwrap();

    let (doc, report) = export_with_report(&conn);

    // Degradation, not failure: links is present but empty
    assert_eq!(doc.tables.links.as_ref().unwrap().len(), 0);
    assert_eq!(report.degraded(), vec!["links"]);
    assert!(!report.is_complete());
    assert!(matches!(report.links, TableStatus::Degraded { .. }));

    // The other collections are unaffected
    assert_eq!(doc.tables.posts.as_ref().unwrap().len(), 2);
    assert_eq!(doc.tables.subscribers.as_ref().unwrap().len(), 1);
    assert!(matches!(report.posts, TableStatus::Loaded { rows: 2 }));
}

#[test]
fn test_export_report_complete_on_healthy_store() {
    let conn = setup_test_db();

    let (_, report) = export_with_report(&conn);
    assert!(report.is_complete());
    assert!(report.degraded().is_empty());
}

#[test]
fn test_export_document_serializes() {
    let conn = setup_test_db();
    seed_sample_data(&conn);

    let doc = export(&conn).unwrap();
    let json = serde_json::to_string_pretty(&doc).unwrap();

    assert!(json.contains("\"tables\""));
    assert!(json.contains("\"a@example.com\""));

    // And parses back through the import-side validator
    let parsed = limebyte_store::backup::parse_str(&json).unwrap();
    assert_eq!(parsed.tables.posts.unwrap().len(), 2);
}
