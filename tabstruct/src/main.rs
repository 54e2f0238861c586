//! Go struct generator for MySQL tables.
//!
//! Connects with the given connection string, reads the table definition
//! and prints the generated struct to standard output. Logs go to standard
//! error.

use clap::Parser;
use tabstruct::{Cli, USAGE_EXIT_CODE, usage};
use tabstruct_core::{MySqlAdapter, Result, TableName, generate, init_logging};
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some((dsn, table)) = cli.required_args() else {
        eprintln!("Error: both --dsn and --table are required");
        eprint!("{}", usage());
        std::process::exit(USAGE_EXIT_CODE);
    };

    init_logging(cli.verbose, cli.quiet)?;

    let table = TableName::parse(table)?;
    let options = cli.render_options();

    let adapter = MySqlAdapter::connect(dsn).await.map_err(|e| {
        error!("Failed to connect: {}", e);
        e
    })?;

    let result = generate(&adapter, &table, &options).await;
    adapter.close().await;

    let generated = result.map_err(|e| {
        error!("Struct generation failed: {}", e);
        e
    })?;

    print!("{}", generated.report());
    Ok(())
}
