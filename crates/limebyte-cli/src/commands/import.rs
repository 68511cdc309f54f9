//! Import command

use clap::Args;
use limebyte_store::backup::{import, parse_str};
use limebyte_store::db;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Path to the SQLite database file
    #[arg(long, default_value = "limebyte.db")]
    pub db: String,

    /// Snapshot JSON file to restore from
    #[arg(long)]
    pub file: String,
}

pub fn execute(args: ImportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(&args.file)?;

    // A rejected document never touches the store; report it as a bad file
    let document = match parse_str(&content) {
        Ok(document) => document,
        Err(e) => return Err(format!("invalid backup file: {}", e).into()),
    };

    let mut conn = db::open(&args.db)?;
    db::configure(&conn)?;

    let stats = match import(&mut conn, &document) {
        Ok(stats) => stats,
        Err(e) if e.is_format() => return Err(format!("invalid backup file: {}", e).into()),
        Err(e) => return Err(format!("import failed: {}", e).into()),
    };

    println!("Database imported successfully");
    println!("  posts: {}", stats.posts);
    println!("  subscribers: {}", stats.subscribers);
    println!("  links: {}", stats.links);
    println!("  settings: {}", stats.settings);

    Ok(())
}
