//! Pure colour transforms over HCT values.
//!
//! Every function here returns a fresh colour; nothing clamps explicitly.
//! Out-of-range tone or chroma is handed to the `Hct` constructor, which
//! resolves to the closest displayable colour.

use material_colors::blend;
use material_colors::color::Argb;
use material_colors::hct::Hct;

/// Perceptually-uniform blend of `a` and `b` in CAM16-UCS space.
///
/// `weight` runs 0..=1, where 0 is pure `a` and 1 is pure `b`.
pub fn mix(a: Hct, b: Hct, weight: f64) -> Hct {
    Hct::new(blend::cam16_ucs(Argb::from(a), Argb::from(b), weight))
}

/// Raise tone toward white by `amount` of the remaining headroom, with a
/// proportional chroma bump (`diff / 5`) so lighter colours do not wash out.
pub fn lighten(color: Hct, amount: f64) -> Hct {
    let diff = (100.0 - color.get_tone()) * amount;
    Hct::from(
        color.get_hue(),
        color.get_chroma() + diff / 5.0,
        color.get_tone() + diff,
    )
}

/// Lower tone toward black by `amount` of the current tone, with the same
/// proportional chroma bump as [`lighten`].
pub fn darken(color: Hct, amount: f64) -> Hct {
    let diff = color.get_tone() * amount;
    Hct::from(
        color.get_hue(),
        color.get_chroma() + diff / 5.0,
        color.get_tone() - diff,
    )
}

/// Neutralize a colour for the monochrome variant.
///
/// Light renditions darken first (0.35), dark renditions lighten (0.65), so
/// the gray keeps contrast against its background; chroma is then forced
/// to zero.
pub fn grayscale(color: Hct, light: bool) -> Hct {
    let mut gray = if light {
        darken(color, 0.35)
    } else {
        lighten(color, 0.65)
    };
    gray.set_chroma(0.0);
    gray
}

/// Rotate `from`'s hue toward `to`'s hue and scale its tone.
///
/// The rotation is 80% of the shortest-arc angular distance, capped at 100
/// degrees, applied in the shortest-arc direction. Chroma is preserved.
/// `tone_boost` scales the tone multiplicatively and may be negative;
/// whatever falls outside 0..=100 is clamped by the constructor.
pub fn harmonize(from: Hct, to: Hct, tone_boost: f64) -> Hct {
    let delta = difference_degrees(from.get_hue(), to.get_hue());
    let rotation = (delta * 0.8).min(100.0);
    let hue = sanitize_degrees(
        from.get_hue() + rotation * rotation_direction(from.get_hue(), to.get_hue()),
    );
    Hct::from(hue, from.get_chroma(), from.get_tone() * (1.0 + tone_boost))
}

/// Wrap an angle into `[0, 360)`.
pub(crate) fn sanitize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees % 360.0;
    if wrapped < 0.0 { wrapped + 360.0 } else { wrapped }
}

/// Shortest-arc angular distance between two hues, in `[0, 180]`.
pub(crate) fn difference_degrees(a: f64, b: f64) -> f64 {
    180.0 - ((a - b).abs() - 180.0).abs()
}

/// Sign of the shortest rotation from `from` to `to`: `1.0` clockwise,
/// `-1.0` counter-clockwise.
pub(crate) fn rotation_direction(from: f64, to: f64) -> f64 {
    let increasing = sanitize_degrees(to - from);
    if increasing <= 180.0 { 1.0 } else { -1.0 }
}
