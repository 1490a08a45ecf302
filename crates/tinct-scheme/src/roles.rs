//! Dynamic-scheme role table.
//!
//! The scheme provider exposes its roles as individual accessor functions;
//! [`ROLES`] is the explicit census of every role the palette copies, keyed
//! by the output slot name. A fixed table (rather than any reflective
//! enumeration) makes the output key set a compile-time contract.

use material_colors::dynamic_color::{DynamicColor, DynamicScheme, MaterialDynamicColors};
use material_colors::hct::Hct;
use material_colors::scheme::variant::{
    SchemeContent, SchemeExpressive, SchemeFidelity, SchemeFruitSalad, SchemeMonochrome,
    SchemeNeutral, SchemeRainbow, SchemeTonalSpot, SchemeVibrant,
};

use tinct_model::Variant;

/// Accessor for one dynamic-scheme role colour.
pub type RoleColor = fn() -> DynamicColor;

/// Every derivable role the scheme provider exposes, with its output key.
///
/// Key names follow the provider's own naming so generated palettes stay
/// drop-in compatible with consumers of the upstream scheme files.
pub const ROLES: [(&str, RoleColor); 54] = [
    (
        "primary_paletteKeyColor",
        MaterialDynamicColors::primary_palette_key_color,
    ),
    (
        "secondary_paletteKeyColor",
        MaterialDynamicColors::secondary_palette_key_color,
    ),
    (
        "tertiary_paletteKeyColor",
        MaterialDynamicColors::tertiary_palette_key_color,
    ),
    (
        "neutral_paletteKeyColor",
        MaterialDynamicColors::neutral_palette_key_color,
    ),
    (
        "neutral_variant_paletteKeyColor",
        MaterialDynamicColors::neutral_variant_palette_key_color,
    ),
    ("background", MaterialDynamicColors::background),
    ("onBackground", MaterialDynamicColors::on_background),
    ("surface", MaterialDynamicColors::surface),
    ("surfaceDim", MaterialDynamicColors::surface_dim),
    ("surfaceBright", MaterialDynamicColors::surface_bright),
    (
        "surfaceContainerLowest",
        MaterialDynamicColors::surface_container_lowest,
    ),
    (
        "surfaceContainerLow",
        MaterialDynamicColors::surface_container_low,
    ),
    ("surfaceContainer", MaterialDynamicColors::surface_container),
    (
        "surfaceContainerHigh",
        MaterialDynamicColors::surface_container_high,
    ),
    (
        "surfaceContainerHighest",
        MaterialDynamicColors::surface_container_highest,
    ),
    ("onSurface", MaterialDynamicColors::on_surface),
    ("surfaceVariant", MaterialDynamicColors::surface_variant),
    ("onSurfaceVariant", MaterialDynamicColors::on_surface_variant),
    ("inverseSurface", MaterialDynamicColors::inverse_surface),
    ("inverseOnSurface", MaterialDynamicColors::inverse_on_surface),
    ("outline", MaterialDynamicColors::outline),
    ("outlineVariant", MaterialDynamicColors::outline_variant),
    ("shadow", MaterialDynamicColors::shadow),
    ("scrim", MaterialDynamicColors::scrim),
    ("surfaceTint", MaterialDynamicColors::surface_tint),
    ("primary", MaterialDynamicColors::primary),
    ("onPrimary", MaterialDynamicColors::on_primary),
    ("primaryContainer", MaterialDynamicColors::primary_container),
    (
        "onPrimaryContainer",
        MaterialDynamicColors::on_primary_container,
    ),
    ("inversePrimary", MaterialDynamicColors::inverse_primary),
    ("secondary", MaterialDynamicColors::secondary),
    ("onSecondary", MaterialDynamicColors::on_secondary),
    (
        "secondaryContainer",
        MaterialDynamicColors::secondary_container,
    ),
    (
        "onSecondaryContainer",
        MaterialDynamicColors::on_secondary_container,
    ),
    ("tertiary", MaterialDynamicColors::tertiary),
    ("onTertiary", MaterialDynamicColors::on_tertiary),
    ("tertiaryContainer", MaterialDynamicColors::tertiary_container),
    (
        "onTertiaryContainer",
        MaterialDynamicColors::on_tertiary_container,
    ),
    ("error", MaterialDynamicColors::error),
    ("onError", MaterialDynamicColors::on_error),
    ("errorContainer", MaterialDynamicColors::error_container),
    ("onErrorContainer", MaterialDynamicColors::on_error_container),
    ("primaryFixed", MaterialDynamicColors::primary_fixed),
    ("primaryFixedDim", MaterialDynamicColors::primary_fixed_dim),
    ("onPrimaryFixed", MaterialDynamicColors::on_primary_fixed),
    (
        "onPrimaryFixedVariant",
        MaterialDynamicColors::on_primary_fixed_variant,
    ),
    ("secondaryFixed", MaterialDynamicColors::secondary_fixed),
    (
        "secondaryFixedDim",
        MaterialDynamicColors::secondary_fixed_dim,
    ),
    ("onSecondaryFixed", MaterialDynamicColors::on_secondary_fixed),
    (
        "onSecondaryFixedVariant",
        MaterialDynamicColors::on_secondary_fixed_variant,
    ),
    ("tertiaryFixed", MaterialDynamicColors::tertiary_fixed),
    ("tertiaryFixedDim", MaterialDynamicColors::tertiary_fixed_dim),
    ("onTertiaryFixed", MaterialDynamicColors::on_tertiary_fixed),
    (
        "onTertiaryFixedVariant",
        MaterialDynamicColors::on_tertiary_fixed_variant,
    ),
];

/// Build the variant's dynamic scheme for a seed colour.
pub fn dynamic_scheme(
    seed: Hct,
    variant: Variant,
    is_dark: bool,
    contrast_level: f64,
) -> DynamicScheme {
    let contrast = Some(contrast_level);
    match variant {
        Variant::Content => SchemeContent::new(seed, is_dark, contrast).scheme,
        Variant::Expressive => SchemeExpressive::new(seed, is_dark, contrast).scheme,
        Variant::Fidelity => SchemeFidelity::new(seed, is_dark, contrast).scheme,
        Variant::FruitSalad => SchemeFruitSalad::new(seed, is_dark, contrast).scheme,
        Variant::Monochrome => SchemeMonochrome::new(seed, is_dark, contrast).scheme,
        Variant::Neutral => SchemeNeutral::new(seed, is_dark, contrast).scheme,
        Variant::Rainbow => SchemeRainbow::new(seed, is_dark, contrast).scheme,
        Variant::TonalSpot => SchemeTonalSpot::new(seed, is_dark, contrast).scheme,
        Variant::Vibrant => SchemeVibrant::new(seed, is_dark, contrast).scheme,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn role_keys_are_unique() {
        let keys: BTreeSet<&str> = ROLES.iter().map(|(name, _)| *name).collect();
        assert_eq!(keys.len(), ROLES.len());
    }

    #[test]
    fn harmonization_reference_roles_are_present() {
        // The assembler reads these three slots by name.
        for required in ["primary_paletteKeyColor", "primary", "onPrimaryFixedVariant"] {
            assert!(
                ROLES.iter().any(|(name, _)| *name == required),
                "missing role {required}"
            );
        }
    }
}
