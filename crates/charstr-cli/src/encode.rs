//! # Encode Subcommand
//!
//! Text to the byte form of a string type. Text construction never fails;
//! the encoding check happens when the byte form is produced.

use anyhow::{Context, Result};
use clap::Args;

use charstr_core::{CharacterString, Variant};

use crate::config::CliConfig;

/// Arguments for the `charstr encode` subcommand.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// String type, by catalog name (`UTF8String`, `bmp`, `T61String`, ...).
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub variant: Option<Variant>,

    /// Text to encode.
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Print byte values as decimal integers instead of hex.
    #[arg(long)]
    pub numbers: bool,

    /// Print hex digits in upper case.
    #[arg(long)]
    pub uppercase: bool,

    /// Reject characters outside the type's X.680 alphabet.
    #[arg(long)]
    pub check_alphabet: bool,
}

/// Execute the encode subcommand.
pub fn run_encode(args: &EncodeArgs, config: &CliConfig) -> Result<u8> {
    println!("{}", encode_text(args, config)?);
    Ok(0)
}

/// Produce the output line for `charstr encode`.
pub fn encode_text(args: &EncodeArgs, config: &CliConfig) -> Result<String> {
    let variant = crate::resolve_variant(args.variant, config);
    let value = CharacterString::from_text(variant, args.text.as_str());

    if args.check_alphabet || config.check_alphabet {
        value
            .check_alphabet()
            .with_context(|| format!("{variant} alphabet check failed"))?;
    }

    let bytes = value
        .to_bytes(true)
        .with_context(|| format!("cannot encode as {variant}"))?;
    tracing::info!(%variant, encoding = %variant.encoding(), len = bytes.len(), "encoded");

    if args.numbers {
        let numbers: Vec<String> = bytes.iter().map(u8::to_string).collect();
        return Ok(numbers.join(" "));
    }
    Ok(crate::to_hex(&bytes, args.uppercase || config.uppercase_hex))
}
