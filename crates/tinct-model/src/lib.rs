//! Shared data model for the tinct palette generator.

pub mod color;
pub mod enums;
pub mod error;

pub use color::{argb_from_u32, hct_from_hex, hct_from_u32, hex_rgb};
pub use enums::{Mode, Variant};
pub use error::{Result, TinctError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_serializes_lowercase() {
        let json = serde_json::to_string(&Variant::FruitSalad).expect("serialize variant");
        assert_eq!(json, "\"fruitsalad\"");
        let round: Variant = serde_json::from_str(&json).expect("deserialize variant");
        assert_eq!(round, Variant::FruitSalad);
    }

    #[test]
    fn mode_serializes_lowercase() {
        let json = serde_json::to_string(&Mode::Dark).expect("serialize mode");
        assert_eq!(json, "\"dark\"");
    }
}
