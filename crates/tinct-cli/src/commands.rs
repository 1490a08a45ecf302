//! Subcommand implementations.

use comfy_table::Table;
use material_colors::hct::Hct;
use tracing::debug;

use tinct_extract::dominant_color;
use tinct_model::{Mode, Result, TinctError, Variant, hct_from_hex};
use tinct_scheme::{SchemeTable, generate};

use crate::cli::SchemeArgs;
use crate::preview::{apply_table_style, render_palette};

/// Derive the palette for the `scheme` subcommand.
///
/// Validation order mirrors the external contract: seed image existence is
/// checked first, then the mode string; variant strings never fail. Any
/// error is terminal; the caller maps it to the JSON error payload.
pub fn run_scheme(args: &SchemeArgs) -> Result<SchemeTable> {
    if let Some(image) = &args.image {
        if !image.exists() {
            return Err(TinctError::InputNotFound {
                path: image.clone(),
            });
        }
    }
    let mode: Mode = args.mode.parse()?;
    let variant = parse_variant(&args.variant);
    let seed = seed_color(args)?;
    Ok(generate(seed, variant, mode))
}

/// Derive a palette and print the human-readable swatch table.
pub fn run_preview(args: &SchemeArgs) -> Result<()> {
    let palette = run_scheme(args)?;
    println!("{}", render_palette(&palette));
    Ok(())
}

/// List the known variants and what they do.
pub fn run_variants() {
    let mut table = Table::new();
    table.set_header(vec!["Variant", "Description"]);
    apply_table_style(&mut table);
    for variant in Variant::ALL {
        table.add_row(vec![variant.as_str(), variant.description()]);
    }
    println!("{table}");
}

/// Unknown variant names silently fall back to `vibrant`; the decision is
/// still visible at debug level.
fn parse_variant(input: &str) -> Variant {
    let variant = Variant::parse(input);
    if !input.trim().eq_ignore_ascii_case(variant.as_str()) {
        debug!(requested = input, fallback = %variant, "unknown variant");
    }
    variant
}

fn seed_color(args: &SchemeArgs) -> Result<Hct> {
    if let Some(seed) = &args.seed {
        return hct_from_hex(seed);
    }
    if let Some(image) = &args.image {
        return dominant_color(image);
    }
    // clap enforces one of the two; keep a structured error for direct
    // library callers.
    Err(TinctError::Upstream(
        "no seed source given: pass IMAGE or --seed".to_string(),
    ))
}
