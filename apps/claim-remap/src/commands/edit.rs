//! Commands that change the remapping list: add, remove, set, select.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use tracing::info;
use xavyo_claim_remapping::{find_option, FieldName, FieldUpdate, USER_FIELDS};

use super::EditSession;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Append a blank remapping (user_field source, empty claim and value)
#[derive(Args, Debug)]
pub struct AddArgs {
    /// OIDC client record (JSON)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Remove the remapping at INDEX; later entries shift down by one
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// OIDC client record (JSON)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Zero-based position of the remapping
    #[arg(value_name = "INDEX")]
    pub index: usize,
}

/// Set one field of the remapping at INDEX
///
/// Changing sourceType always clears sourceValue.
#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:
    # Rename the output claim
    claim-remap set client.json 0 claimName email_address

    # Switch to a static value, then fill it in
    claim-remap set client.json 0 sourceType static
    claim-remap set client.json 0 sourceValue '\"gold\"'
")]
pub struct SetArgs {
    /// OIDC client record (JSON)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Zero-based position of the remapping
    #[arg(value_name = "INDEX")]
    pub index: usize,

    /// Field to set: claimName, sourceType or sourceValue
    #[arg(value_name = "FIELD")]
    pub field: FieldName,

    /// New value
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,
}

/// Pick a catalog user field as the source of a user_field remapping
#[derive(Args, Debug)]
pub struct SelectArgs {
    /// OIDC client record (JSON)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Zero-based position of the remapping
    #[arg(value_name = "INDEX")]
    pub index: usize,

    /// User field key (see `claim-remap catalog`)
    #[arg(value_name = "USER_FIELD")]
    pub user_field: String,
}

/// Execute the add command
pub fn execute_add(args: AddArgs, config: &CliConfig, out: &mut dyn Write) -> CliResult<()> {
    let mut session = EditSession::open(&args.file, config)?;
    session.editor().add_remapping();
    let index = session.len() - 1;
    session.save_if_changed()?;

    info!(index, "Remapping added");
    writeln!(out, "Added remapping at index {index}")?;
    Ok(())
}

/// Execute the remove command
pub fn execute_remove(args: RemoveArgs, config: &CliConfig, out: &mut dyn Write) -> CliResult<()> {
    let mut session = EditSession::open(&args.file, config)?;
    if !session.editor().remove_remapping(args.index) {
        return Err(session.out_of_range(args.index));
    }
    let remaining = session.len();
    session.save_if_changed()?;

    writeln!(
        out,
        "Removed remapping at index {} ({remaining} remaining)",
        args.index
    )?;
    Ok(())
}

/// Execute the set command
pub fn execute_set(args: SetArgs, config: &CliConfig, out: &mut dyn Write) -> CliResult<()> {
    let update = FieldUpdate::parse(args.field, &args.value)?;
    let mut session = EditSession::open(&args.file, config)?;
    let previous_type = session
        .view()
        .remappings()
        .get(args.index)
        .and_then(|entry| entry.source_type());

    let value_reset = match update {
        FieldUpdate::SourceType(source_type) => {
            if !session.editor().change_source_type(args.index, source_type) {
                return Err(session.out_of_range(args.index));
            }
            previous_type != Some(source_type)
        }
        update => {
            if !session.editor().update_field(args.index, update) {
                return Err(session.out_of_range(args.index));
            }
            false
        }
    };
    session.save_if_changed()?;

    writeln!(out, "Set {} of remapping {}", args.field, args.index)?;
    if value_reset {
        writeln!(out, "sourceValue was reset")?;
    }
    Ok(())
}

/// Execute the select command
pub fn execute_select(args: SelectArgs, config: &CliConfig, out: &mut dyn Write) -> CliResult<()> {
    let option = find_option(USER_FIELDS, &args.user_field).ok_or_else(|| {
        CliError::Validation(format!(
            "Unknown user field '{}'. Valid options: {}",
            args.user_field,
            USER_FIELDS
                .iter()
                .map(|o| o.value)
                .collect::<Vec<_>>()
                .join(", ")
        ))
    })?;

    let mut session = EditSession::open(&args.file, config)?;
    let Some(source_type) = session
        .view()
        .remappings()
        .get(args.index)
        .map(|entry| entry.source_type_tag().to_string())
    else {
        return Err(session.out_of_range(args.index));
    };
    if !session.editor().select_user_field(args.index, option) {
        return Err(CliError::Validation(format!(
            "Remapping {} has source type {source_type}; set sourceType to user_field first",
            args.index
        )));
    }
    session.save_if_changed()?;

    writeln!(
        out,
        "Remapping {} now uses user field {} ({})",
        args.index, option.value, option.label
    )?;
    Ok(())
}
