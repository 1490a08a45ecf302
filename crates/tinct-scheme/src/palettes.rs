//! Static reference palettes.
//!
//! These are fixed configuration, not derived data: the harmonization
//! stages pull each seed toward the scheme's key colour, but the seeds
//! themselves never change. Terminal seeds follow Monokai-style (light) and
//! Gruvbox (dark) conventions; accent seeds are the Catppuccin latte/mocha
//! sets; desktop role seeds are the stock KDE semantic colours.

use tinct_model::Mode;

/// Terminal seed colours for light mode, slots `term0..term15`.
pub const TERMINAL_LIGHT: [u32; 16] = [
    0xFFFDF9F3, 0xFFFF6188, 0xFFA9DC76, 0xFFFC9867, 0xFFFFD866, 0xFFF47FD4, 0xFF78DCE8, 0xFF333034,
    0xFF121212, 0xFFFF6188, 0xFFA9DC76, 0xFFFC9867, 0xFFFFD866, 0xFFF47FD4, 0xFF78DCE8, 0xFF333034,
];

/// Terminal seed colours for dark mode, slots `term0..term15`.
pub const TERMINAL_DARK: [u32; 16] = [
    0xFF282828, 0xFFCC241D, 0xFF98971A, 0xFFD79921, 0xFF458588, 0xFFB16286, 0xFF689D6A, 0xFFA89984,
    0xFF928374, 0xFFFB4934, 0xFFB8BB26, 0xFFFABD2F, 0xFF83A598, 0xFFD3869B, 0xFF8EC07C, 0xFFEBDBB2,
];

/// Accent palette slot names, in seed order.
pub const ACCENT_NAMES: [&str; 14] = [
    "rosewater",
    "flamingo",
    "pink",
    "mauve",
    "red",
    "maroon",
    "peach",
    "yellow",
    "green",
    "teal",
    "sky",
    "sapphire",
    "blue",
    "lavender",
];

/// Accent seed colours for light mode, aligned with [`ACCENT_NAMES`].
pub const ACCENT_LIGHT: [u32; 14] = [
    0xFFDC8A78, 0xFFDD7878, 0xFFEA76CB, 0xFF8839EF, 0xFFD20F39, 0xFFE64553, 0xFFFE640B, 0xFFDF8E1D,
    0xFF40A02B, 0xFF179299, 0xFF04A5E5, 0xFF209FB5, 0xFF1E66F5, 0xFF7287FD,
];

/// Accent seed colours for dark mode, aligned with [`ACCENT_NAMES`].
pub const ACCENT_DARK: [u32; 14] = [
    0xFFF5E0DC, 0xFFF2CDCD, 0xFFF5C2E7, 0xFFCBA6F7, 0xFFF38BA8, 0xFFEBA0AC, 0xFFFAB387, 0xFFF9E2AF,
    0xFFA6E3A1, 0xFF94E2D5, 0xFF89DCEB, 0xFF74C7EC, 0xFF89B4FA, 0xFFB4BEFE,
];

/// Desktop role accent seeds: link, visited link, negative, neutral and
/// positive. Each produces a base slot and a `<name>Selection` slot.
pub const DESKTOP_SEEDS: [(&str, u32); 5] = [
    ("klink", 0xFF2980B9),
    ("kvisited", 0xFF9B59B6),
    ("knegative", 0xFFDA4453),
    ("kneutral", 0xFFF67400),
    ("kpositive", 0xFF27AE60),
];

/// Output keys of the fixed success quadruple.
pub const SUCCESS_KEYS: [&str; 4] = ["success", "onSuccess", "successContainer", "onSuccessContainer"];

/// Success colours for light mode, aligned with [`SUCCESS_KEYS`].
pub const SUCCESS_LIGHT: [&str; 4] = ["4F6354", "FFFFFF", "D1E8D5", "0C1F13"];

/// Success colours for dark mode, aligned with [`SUCCESS_KEYS`].
pub const SUCCESS_DARK: [&str; 4] = ["B5CCBA", "213528", "374B3E", "D1E9D6"];

/// Mode-selected terminal seed list.
pub fn terminal_seeds(mode: Mode) -> &'static [u32; 16] {
    match mode {
        Mode::Light => &TERMINAL_LIGHT,
        Mode::Dark => &TERMINAL_DARK,
    }
}

/// Mode-selected accent seed list.
pub fn accent_seeds(mode: Mode) -> &'static [u32; 14] {
    match mode {
        Mode::Light => &ACCENT_LIGHT,
        Mode::Dark => &ACCENT_DARK,
    }
}

/// Mode-selected success literals.
pub fn success_literals(mode: Mode) -> &'static [&'static str; 4] {
    match mode {
        Mode::Light => &SUCCESS_LIGHT,
        Mode::Dark => &SUCCESS_DARK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_lists_are_opaque_argb() {
        for seed in TERMINAL_LIGHT
            .iter()
            .chain(&TERMINAL_DARK)
            .chain(&ACCENT_LIGHT)
            .chain(&ACCENT_DARK)
            .chain(DESKTOP_SEEDS.iter().map(|(_, seed)| seed))
        {
            assert_eq!(seed >> 24, 0xFF, "seed {seed:08X} is not fully opaque");
        }
    }

    #[test]
    fn bright_terminal_seeds_repeat_normal_ones_in_light_mode() {
        // Light terminal palette reuses the normal-intensity colour seeds
        // for the bright slots; only the background/foreground slots differ.
        assert_eq!(TERMINAL_LIGHT[1..8], TERMINAL_LIGHT[9..16]);
    }

    #[test]
    fn success_literals_are_six_hex_digits() {
        for value in SUCCESS_LIGHT.iter().chain(&SUCCESS_DARK) {
            assert_eq!(value.len(), 6);
            assert!(value.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }
}
