//! orderdesk — single-user, in-memory order-taking console.

use std::io;

use clap::Parser;

use orderdesk_catalog::Catalog;
use orderdesk_cli::{Cli, ErrorLog, Shell};
use orderdesk_orders::Ledger;

fn main() -> anyhow::Result<()> {
    orderdesk_observability::init();

    let cli = Cli::parse();

    // The stores are owned here and handed to the shell by reference; there
    // is no ambient state and nothing survives the process.
    let mut catalog = Catalog::new();
    let mut ledger = Ledger::new();

    if cli.demo {
        catalog.add("Laptop", 99_900, 5);
        catalog.add("Phone", 49_900, 10);
        tracing::info!(products = catalog.len(), "seeded demo catalog");
    }

    let errlog = ErrorLog::new(cli.log_dir);
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut shell = Shell::new(stdin.lock(), stdout.lock(), cli.admin_code, errlog);
    shell.run(&mut catalog, &mut ledger)?;

    tracing::info!(orders = ledger.len(), "session ended");
    Ok(())
}
