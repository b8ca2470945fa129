//! claim-remap - edit the claim remappings of an OIDC client record
//!
//! Each remapping says "output claim X using a value derived from source Y".
//! This CLI adds, removes and updates remappings in a client record file and
//! shows validation issues next to the fields they address.

use std::io::Write;

use clap::{Parser, Subcommand};

use claim_remap::commands::{catalog, edit, show};
use claim_remap::config::{CliConfig, GlobalArgs};
use claim_remap::error::CliResult;
use claim_remap::logging;

/// claim-remap - OIDC client claim remapping editor
#[derive(Parser)]
#[command(name = "claim-remap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show remappings with inline validation errors
    Show(show::ShowArgs),

    /// Append a blank remapping
    Add(edit::AddArgs),

    /// Remove a remapping by index
    Remove(edit::RemoveArgs),

    /// Set one field of a remapping
    Set(edit::SetArgs),

    /// Pick a catalog user field for a user_field remapping
    Select(edit::SelectArgs),

    /// List source types and user fields
    Catalog(catalog::CatalogArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            e.print();
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config = CliConfig::from_args(&cli.global)?;
    logging::init_logging(&config.log_filter, config.log_format);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = dispatch(cli.command, &config, &mut out);
    out.flush()?;
    result
}

fn dispatch(command: Commands, config: &CliConfig, out: &mut dyn Write) -> CliResult<()> {
    match command {
        Commands::Show(args) => show::execute(args, config, out),
        Commands::Add(args) => edit::execute_add(args, config, out),
        Commands::Remove(args) => edit::execute_remove(args, config, out),
        Commands::Set(args) => edit::execute_set(args, config, out),
        Commands::Select(args) => edit::execute_select(args, config, out),
        Commands::Catalog(args) => catalog::execute(args, out),
    }
}
