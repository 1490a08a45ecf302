//! Helpers bridging packed ARGB seeds and hex strings to HCT.
//!
//! The perceptual colour type itself is [`material_colors::hct::Hct`]; its
//! constructor clamps hue/chroma/tone to the closest displayable colour, so
//! none of the transforms built on top of it need to clamp anything. These
//! helpers only cover the conversions the crate lacks: packed `u32` seed
//! literals and the 6-digit RGB hex strings the output format uses.

use material_colors::color::Argb;
use material_colors::hct::Hct;

use crate::error::{Result, TinctError};

/// Component form of a packed `0xAARRGGBB` integer.
pub fn argb_from_u32(packed: u32) -> Argb {
    Argb {
        alpha: (packed >> 24) as u8,
        red: (packed >> 16) as u8,
        green: (packed >> 8) as u8,
        blue: packed as u8,
    }
}

/// HCT colour from a packed `0xAARRGGBB` integer.
pub fn hct_from_u32(packed: u32) -> Hct {
    Hct::new(argb_from_u32(packed))
}

/// Parse a 6-digit RGB hex string (leading `#` tolerated) into an opaque
/// HCT colour.
pub fn hct_from_hex(value: &str) -> Result<Hct> {
    let digits = value.trim().trim_start_matches('#');
    let bytes = hex::decode(digits)
        .map_err(|error| TinctError::Upstream(format!("invalid hex colour '{value}': {error}")))?;
    let &[red, green, blue] = bytes.as_slice() else {
        return Err(TinctError::Upstream(format!(
            "invalid hex colour '{value}': expected exactly 6 hex digits"
        )));
    };
    Ok(Hct::new(Argb {
        alpha: 0xFF,
        red,
        green,
        blue,
    }))
}

/// Render a colour as its 6-lowercase-hex-digit RGB form, alpha dropped.
pub fn hex_rgb(color: Hct) -> String {
    let argb = Argb::from(color);
    hex::encode([argb.red, argb.green, argb.blue])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_seed_round_trips_to_hex() {
        // Hct::new preserves the backing ARGB exactly, so a seed literal
        // must serialize back to its own hex digits.
        assert_eq!(hex_rgb(hct_from_u32(0xFF282828)), "282828");
        assert_eq!(hex_rgb(hct_from_u32(0xFFEBDBB2)), "ebdbb2");
    }

    #[test]
    fn hex_seed_round_trips() {
        let colour = hct_from_hex("2980b9").unwrap();
        assert_eq!(hex_rgb(colour), "2980b9");

        let with_pound = hct_from_hex("#DA4453").unwrap();
        assert_eq!(hex_rgb(with_pound), "da4453");
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(hct_from_hex("xyzxyz").is_err());
        assert!(hct_from_hex("123").is_err());
        assert!(hct_from_hex("aabbccdd").is_err());
    }

    #[test]
    fn argb_components_split_correctly() {
        let argb = argb_from_u32(0xFF2980B9);
        assert_eq!(argb.alpha, 0xFF);
        assert_eq!(argb.red, 0x29);
        assert_eq!(argb.green, 0x80);
        assert_eq!(argb.blue, 0xB9);
    }
}
