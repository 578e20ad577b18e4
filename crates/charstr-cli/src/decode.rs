//! # Decode Subcommand
//!
//! Byte form back to canonical text, from hex or from decimal byte values.

use anyhow::{bail, Context, Result};
use clap::Args;

use charstr_core::{CharacterString, Variant};

use crate::config::CliConfig;

/// Arguments for the `charstr decode` subcommand.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// String type, by catalog name.
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub variant: Option<Variant>,

    /// Byte form as hex (an optional `0x` prefix and whitespace are allowed).
    #[arg(value_name = "HEX")]
    pub hex: String,

    /// Reject characters outside the type's X.680 alphabet.
    #[arg(long)]
    pub check_alphabet: bool,
}

/// Arguments for the `charstr numbers` subcommand.
#[derive(Args, Debug)]
pub struct NumbersArgs {
    /// String type, by catalog name.
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub variant: Option<Variant>,

    /// Byte values, each in 0..=255.
    #[arg(value_name = "N", required = true, allow_negative_numbers = true)]
    pub values: Vec<i64>,

    /// Reject characters outside the type's X.680 alphabet.
    #[arg(long)]
    pub check_alphabet: bool,
}

/// Execute the decode subcommand.
pub fn run_decode(args: &DecodeArgs, config: &CliConfig) -> Result<u8> {
    println!("{}", decode_hex(args, config)?);
    Ok(0)
}

/// Execute the numbers subcommand.
pub fn run_numbers(args: &NumbersArgs, config: &CliConfig) -> Result<u8> {
    println!("{}", decode_numbers(args, config)?);
    Ok(0)
}

/// Canonical text for `charstr decode`.
pub fn decode_hex(args: &DecodeArgs, config: &CliConfig) -> Result<String> {
    let variant = crate::resolve_variant(args.variant, config);
    let bytes = crate::parse_hex(&args.hex)?;
    let value = CharacterString::from_bytes(variant, &bytes)
        .with_context(|| format!("cannot decode as {variant}"))?;
    finish(value, args.check_alphabet || config.check_alphabet)
}

/// Canonical text for `charstr numbers`.
pub fn decode_numbers(args: &NumbersArgs, config: &CliConfig) -> Result<String> {
    if args.values.is_empty() {
        bail!("no byte values given");
    }
    let variant = crate::resolve_variant(args.variant, config);
    let value = CharacterString::from_numbers(variant, args.values.iter().copied())
        .with_context(|| format!("cannot build {variant} from byte values"))?;
    finish(value, args.check_alphabet || config.check_alphabet)
}

fn finish(value: CharacterString, check_alphabet: bool) -> Result<String> {
    let variant = value.variant();
    if check_alphabet {
        value
            .check_alphabet()
            .with_context(|| format!("{variant} alphabet check failed"))?;
    }
    tracing::info!(%variant, chars = value.char_count(), "decoded");
    Ok(value.into_string())
}
