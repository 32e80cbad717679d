use std::path::PathBuf;

use clap::Parser;

/// Command-line configuration.
#[derive(Debug, Parser)]
#[command(name = "orderdesk", about = "Single-user order-taking console", long_about = None)]
pub struct Cli {
    /// Passcode required before products can be added.
    #[arg(long, default_value = "admin123")]
    pub admin_code: String,

    /// Directory where dated error logs are written.
    #[arg(long, default_value = ".")]
    pub log_dir: PathBuf,

    /// Seed the catalog with a pair of demo products.
    #[arg(long)]
    pub demo: bool,
}
