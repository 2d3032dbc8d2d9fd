use std::ffi::OsString;

use clap::Parser;
use dump_generator_core::notice;

/// Database dump generator - compiles migrations, tables, RLS policies,
/// functions, triggers and data into one SQL file
#[derive(Parser)]
#[command(name = "generate-database-dump")]
#[command(version)] // Auto-pull version from Cargo.toml
#[command(about = "Generate a complete database dump SQL file", long_about = None)]
// No options are recognized yet: every argument, --help included, is ignored
#[command(disable_help_flag = true, disable_version_flag = true, ignore_errors = true)]
struct Cli {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    rest: Vec<OsString>,
}

fn main() -> anyhow::Result<()> {
    // Only warnings and errors reach stderr, and the success path emits neither
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::WARN)
        .init();

    let cli = Cli::parse();
    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        ignored_args = cli.rest.len(),
        "starting"
    );

    notice::run()
}
