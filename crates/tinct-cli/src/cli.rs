//! CLI argument definitions for tinct.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tinct",
    version,
    about = "Derive a full colour theme from a wallpaper's dominant colour",
    long_about = "Derive a complete named colour palette from a single seed colour.\n\n\
                  The seed comes from an image's dominant colour (or a hex literal),\n\
                  and the palette is generated deterministically for a style variant\n\
                  and a light/dark mode."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI colour output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Derive a palette and print it as a JSON object.
    Scheme(SchemeArgs),

    /// Derive a palette and render it as a swatch table.
    Preview(SchemeArgs),

    /// List the known style variants.
    Variants,
}

#[derive(Parser)]
pub struct SchemeArgs {
    /// Image to pull the seed colour from.
    #[arg(value_name = "IMAGE", required_unless_present = "seed")]
    pub image: Option<PathBuf>,

    /// Light or dark rendition of the palette.
    ///
    /// Deliberately a plain string rather than a value enum: a bad mode must
    /// surface as the structured JSON error payload, not a clap usage error.
    #[arg(long = "mode", value_name = "MODE")]
    pub mode: String,

    /// Style variant; unknown values fall back to `vibrant`.
    #[arg(long = "variant", value_name = "VARIANT", default_value = "vibrant")]
    pub variant: String,

    /// Use a 6-digit hex seed colour instead of an image.
    #[arg(long = "seed", value_name = "RRGGBB", conflicts_with = "image")]
    pub seed: Option<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
