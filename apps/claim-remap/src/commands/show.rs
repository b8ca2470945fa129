//! Show the remapping list with inline validation errors.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use xavyo_claim_remapping::{EntryView, SourceValueControl};

use super::{EditSession, OutputFormat};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Show the claim remappings of a client record
///
/// Pass --issues to display validation messages next to the fields they
/// address.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// OIDC client record (JSON)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Execute the show command
pub fn execute(args: ShowArgs, config: &CliConfig, out: &mut dyn Write) -> CliResult<()> {
    let session = EditSession::open(&args.file, config)?;
    let editor = session.view();
    let list = editor.remappings();
    let views = editor.entry_views(&list);

    match args.output {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&views)
                .map_err(|e| CliError::Output(e.to_string()))?;
            writeln!(out, "{json}")?;
        }
        OutputFormat::Table => write_table(&views, out)?,
    }
    Ok(())
}

fn source_value_display<'a>(control: &SourceValueControl<'a>) -> &'a str {
    match control {
        SourceValueControl::UserFieldSelect { label, .. } => *label,
        SourceValueControl::CustomClaimInput { value }
        | SourceValueControl::StaticInput { value }
        | SourceValueControl::RawInput { value } => *value,
    }
}

/// Render rows as an aligned table; errors go on indented lines below a row.
pub fn write_table(views: &[EntryView<'_>], out: &mut dyn Write) -> std::io::Result<()> {
    if views.is_empty() {
        return writeln!(out, "No claim remappings configured.");
    }

    let claim_width = views
        .iter()
        .map(|v| v.claim_name.chars().count())
        .chain(std::iter::once("CLAIM".len()))
        .max()
        .unwrap_or(0);
    let type_width = views
        .iter()
        .map(|v| v.source_type_label.chars().count())
        .chain(std::iter::once("SOURCE TYPE".len()))
        .max()
        .unwrap_or(0);

    writeln!(
        out,
        "{:<3}  {:<claim_width$}  {:<type_width$}  SOURCE VALUE",
        "#", "CLAIM", "SOURCE TYPE"
    )?;
    for view in views {
        writeln!(
            out,
            "{:<3}  {:<claim_width$}  {:<type_width$}  {}",
            view.index,
            view.claim_name,
            view.source_type_label,
            source_value_display(&view.source_value)
        )?;
        if let Some(message) = view.claim_name_error {
            writeln!(out, "     ! claimName: {message}")?;
        }
        if let Some(message) = view.source_value_error {
            writeln!(out, "     ! sourceValue: {message}")?;
        }
    }
    Ok(())
}
