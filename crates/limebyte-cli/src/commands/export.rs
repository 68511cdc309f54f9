//! Export command

use clap::Args;
use limebyte_store::backup::{export_with_report, TableStatus};
use limebyte_store::db;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Path to the SQLite database file
    #[arg(long, default_value = "limebyte.db")]
    pub db: String,

    /// Output file; defaults to limebyte_backup_<date>.json
    #[arg(long)]
    pub out: Option<String>,
}

pub fn execute(args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let conn = db::open(&args.db)?;
    db::configure(&conn)?;

    let (document, report) = export_with_report(&conn);

    let out = args.out.unwrap_or_else(|| {
        format!(
            "limebyte_backup_{}.json",
            chrono::Utc::now().format("%Y-%m-%d")
        )
    });
    let json = serde_json::to_string_pretty(&document)?;
    std::fs::write(&out, json)?;

    println!("Exported snapshot to {}", out);
    for (name, status) in [
        ("users", &report.users),
        ("posts", &report.posts),
        ("subscribers", &report.subscribers),
        ("links", &report.links),
        ("settings", &report.settings),
    ] {
        match status {
            TableStatus::Loaded { rows } => println!("  {}: {} rows", name, rows),
            TableStatus::Degraded { cause } => {
                println!("  {}: DEGRADED (exported empty): {}", name, cause)
            }
        }
    }

    Ok(())
}
