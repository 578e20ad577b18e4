//! # Catalog Subcommand
//!
//! Lists every catalog name with its universal tag, encoding and alias
//! target, as an aligned table or as JSON.

use anyhow::Result;
use clap::Args;

use charstr_core::variant::entries;

/// Arguments for the `charstr catalog` subcommand.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Print the catalog as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the catalog subcommand.
pub fn run_catalog(args: &CatalogArgs) -> Result<u8> {
    let out = if args.json {
        render_json()?
    } else {
        render_table()
    };
    println!("{out}");
    Ok(0)
}

/// Catalog as pretty-printed JSON.
pub fn render_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(entries())?)
}

/// Catalog as an aligned text table.
pub fn render_table() -> String {
    let mut lines = vec![format!("{:<16} {:>3}  {:<10} {}", "TYPE", "TAG", "ENCODING", "ALIAS OF")];
    for d in entries() {
        lines.push(
            format!(
                "{:<16} {:>3}  {:<10} {}",
                d.name,
                d.tag.number,
                d.encoding.name(),
                d.alias_of.unwrap_or("-")
            )
            .trim_end()
            .to_string(),
        );
    }
    lines.join("\n")
}
