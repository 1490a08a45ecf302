//! Palette assembly pipeline with explicit stages.
//!
//! The table is built by an ordered sequence of stage functions, each taking
//! the table-so-far and returning the updated table:
//!
//! 1. **Roles**: copy the dynamic-scheme role table
//! 2. **Terminal**: harmonized `term0..term15`
//! 3. **Accents**: the 14 named accent slots
//! 4. **Desktop**: role accents plus their `Selection` counterparts
//! 5. **Neutral**: global chroma reduction (neutral variant only)
//! 6. **Aliases**: legacy copies and surface/outline blends
//! 7. **Hex**: serialize every colour to its 6-digit RGB form
//! 8. **Success**: fixed literals, applied last so nothing upstream can
//!    affect them
//!
//! Stage order is a contract: later stages read colours produced by earlier
//! ones (the terminal and accent stages read `primary_paletteKeyColor`, the
//! alias stage reads `surface` and `outline` after any neutral reduction).

use std::collections::BTreeMap;

use material_colors::dynamic_color::DynamicScheme;
use material_colors::hct::Hct;
use tracing::debug;

use tinct_model::{Mode, Variant, hct_from_u32, hex_rgb};

use crate::palettes::{
    ACCENT_NAMES, DESKTOP_SEEDS, SUCCESS_KEYS, accent_seeds, success_literals, terminal_seeds,
};
use crate::roles::{ROLES, dynamic_scheme};
use crate::transform::{darken, grayscale, harmonize, mix};

/// Colour table while the stages are running.
pub type ColorTable = BTreeMap<String, Hct>;

/// Final serialized palette: slot name to 6-digit RGB hex.
pub type SchemeTable = BTreeMap<String, String>;

/// Blend weights for the graduated surface/outline aliases, strongest
/// outline pull first.
const OVERLAY_BLENDS: [(&str, f64); 6] = [
    ("overlay2", 0.86),
    ("overlay1", 0.71),
    ("overlay0", 0.57),
    ("surface2", 0.43),
    ("surface1", 0.29),
    ("surface0", 0.14),
];

/// Derive the complete named palette for a seed colour.
///
/// Pure and deterministic: identical inputs always produce an identical
/// table. Mode validation happens at the string boundary (see
/// [`Mode::from_str`]), so by the time a `Mode` value exists there is
/// nothing left to fail.
///
/// [`Mode::from_str`]: std::str::FromStr
pub fn generate(seed: Hct, variant: Variant, mode: Mode) -> SchemeTable {
    debug!(%variant, %mode, "assembling palette");

    let scheme = dynamic_scheme(seed, variant, mode.is_dark(), 0.0);
    let table = role_colors(&scheme);
    let table = terminal_palette(table, variant, mode);
    let table = accent_palette(table, variant, mode);
    let table = desktop_accents(table, variant, mode);
    let table = reduce_neutral_chroma(table, variant);
    let table = legacy_aliases(table);
    let table = serialize_hex(table);
    let table = success_overrides(table, mode);

    debug!(slots = table.len(), "palette assembled");
    table
}

/// Stage 1: copy every scheme role into the table under its slot name.
pub fn role_colors(scheme: &DynamicScheme) -> ColorTable {
    ROLES
        .iter()
        .map(|(name, role)| ((*name).to_string(), role().get_hct(scheme)))
        .collect()
}

/// Stage 2: the 16 terminal slots.
///
/// The first eight (normal intensity) get a stronger tone pull than the
/// bright half, and the pull direction flips between light and dark mode.
pub fn terminal_palette(mut table: ColorTable, variant: Variant, mode: Mode) -> ColorTable {
    let key_color = table["primary_paletteKeyColor"];
    for (i, &seed) in terminal_seeds(mode).iter().enumerate() {
        let seed = hct_from_u32(seed);
        let colour = if variant == Variant::Monochrome {
            grayscale(seed, mode.is_light())
        } else {
            let magnitude = if i < 8 { 0.35 } else { 0.2 };
            let boost = if mode.is_light() { -magnitude } else { magnitude };
            harmonize(seed, key_color, boost)
        };
        table.insert(format!("term{i}"), colour);
    }
    table
}

/// Stage 3: the 14 named accent slots, constant tone boost per mode.
pub fn accent_palette(mut table: ColorTable, variant: Variant, mode: Mode) -> ColorTable {
    let key_color = table["primary_paletteKeyColor"];
    let boost = if mode.is_light() { -0.2 } else { 0.05 };
    for (name, &seed) in ACCENT_NAMES.iter().zip(accent_seeds(mode)) {
        let seed = hct_from_u32(seed);
        let colour = if variant == Variant::Monochrome {
            grayscale(seed, mode.is_light())
        } else {
            harmonize(seed, key_color, boost)
        };
        table.insert((*name).to_string(), colour);
    }
    table
}

/// Stage 4: desktop role accents.
///
/// Base slots harmonize toward `primary`, selection slots toward
/// `onPrimaryFixedVariant`; monochrome additionally neutralizes both.
pub fn desktop_accents(mut table: ColorTable, variant: Variant, mode: Mode) -> ColorTable {
    let primary = table["primary"];
    let fixed_variant = table["onPrimaryFixedVariant"];
    for (name, seed) in DESKTOP_SEEDS {
        let seed = hct_from_u32(seed);
        let mut base = harmonize(seed, primary, 0.1);
        let mut selection = harmonize(seed, fixed_variant, 0.1);
        if variant == Variant::Monochrome {
            base = grayscale(base, mode.is_light());
            selection = grayscale(selection, mode.is_light());
        }
        table.insert(name.to_string(), base);
        table.insert(format!("{name}Selection"), selection);
    }
    table
}

/// Stage 5: the neutral variant subtracts 15 from every slot's chroma.
///
/// Runs before the alias stage so the blends are computed from the reduced
/// colours. The constructor clamps whatever goes below zero.
pub fn reduce_neutral_chroma(mut table: ColorTable, variant: Variant) -> ColorTable {
    if variant != Variant::Neutral {
        return table;
    }
    for colour in table.values_mut() {
        colour.set_chroma(colour.get_chroma() - 15.0);
    }
    table
}

/// Stage 6: legacy aliases kept for downstream compatibility.
pub fn legacy_aliases(mut table: ColorTable) -> ColorTable {
    let text = table["onBackground"];
    let subtext1 = table["onSurfaceVariant"];
    let subtext0 = table["outline"];
    table.insert("text".to_string(), text);
    table.insert("subtext1".to_string(), subtext1);
    table.insert("subtext0".to_string(), subtext0);

    let surface = table["surface"];
    let outline = table["outline"];
    for (name, weight) in OVERLAY_BLENDS {
        table.insert(name.to_string(), mix(surface, outline, weight));
    }
    table.insert("base".to_string(), surface);
    table.insert("mantle".to_string(), darken(surface, 0.03));
    table.insert("crust".to_string(), darken(surface, 0.05));
    table
}

/// Stage 7: serialize every slot to its 6-digit RGB hex form.
pub fn serialize_hex(table: ColorTable) -> SchemeTable {
    table
        .into_iter()
        .map(|(name, colour)| (name, hex_rgb(colour)))
        .collect()
}

/// Stage 8: the fixed success quadruple, selected purely by mode.
pub fn success_overrides(mut table: SchemeTable, mode: Mode) -> SchemeTable {
    for (key, value) in SUCCESS_KEYS.iter().zip(success_literals(mode)) {
        table.insert((*key).to_string(), (*value).to_string());
    }
    table
}
