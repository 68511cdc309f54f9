//! Database initialization command

use clap::Args;
use limebyte_store::{db, migrations};

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Path to the SQLite database file
    #[arg(long, default_value = "limebyte.db")]
    pub db: String,
}

pub fn execute(args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = db::open(&args.db)?;
    db::configure(&conn)?;
    migrations::apply_migrations(&mut conn)?;

    println!("Database ready: {}", args.db);
    Ok(())
}
