//! List the selectable source types and user fields.

use std::io::Write;

use clap::Args;
use serde_json::json;
use xavyo_claim_remapping::{CatalogOption, SOURCE_TYPES, USER_FIELDS};

use super::OutputFormat;
use crate::error::{CliError, CliResult};

/// Show the source type and user field catalogs
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Execute the catalog command
pub fn execute(args: CatalogArgs, out: &mut dyn Write) -> CliResult<()> {
    match args.output {
        OutputFormat::Json => {
            let doc = json!({
                "sourceTypes": SOURCE_TYPES,
                "userFields": USER_FIELDS,
            });
            let json =
                serde_json::to_string_pretty(&doc).map_err(|e| CliError::Output(e.to_string()))?;
            writeln!(out, "{json}")?;
        }
        OutputFormat::Table => {
            write_section(out, "Source types", SOURCE_TYPES)?;
            writeln!(out)?;
            write_section(out, "User fields", USER_FIELDS)?;
        }
    }
    Ok(())
}

fn write_section(
    out: &mut dyn Write,
    title: &str,
    options: &[CatalogOption],
) -> std::io::Result<()> {
    writeln!(out, "{title}:")?;
    for option in options {
        writeln!(out, "  {:<14} {}", option.value, option.label)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_json() {
        let mut buf = Vec::new();
        execute(
            CatalogArgs {
                output: OutputFormat::Json,
            },
            &mut buf,
        )
        .unwrap();

        let doc: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(doc["sourceTypes"].as_array().unwrap().len(), 3);
        assert_eq!(doc["userFields"][0]["value"], "email");
    }

    #[test]
    fn test_catalog_table() {
        let mut buf = Vec::new();
        execute(
            CatalogArgs {
                output: OutputFormat::Table,
            },
            &mut buf,
        )
        .unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("custom_claim"));
        assert!(text.contains("Display Name"));
    }
}
