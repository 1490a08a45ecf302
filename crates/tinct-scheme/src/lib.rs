//! Deterministic palette derivation from a single seed colour.
//!
//! The entry point is [`pipeline::generate`]: given a seed [`Hct`] colour, a
//! [`Variant`] and a [`Mode`] it produces the complete named colour table
//! (dynamic-scheme roles, harmonized terminal and accent palettes, desktop
//! role accents, legacy aliases and the fixed success colours).
//!
//! Derivation is a pure function of its inputs: identical `(seed, variant,
//! mode)` always yields an identical table.
//!
//! [`Hct`]: material_colors::hct::Hct
//! [`Variant`]: tinct_model::Variant
//! [`Mode`]: tinct_model::Mode

pub mod palettes;
pub mod pipeline;
pub mod roles;
pub mod transform;

pub use pipeline::{ColorTable, SchemeTable, generate};
