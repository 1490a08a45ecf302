//! Human-readable palette rendering.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, Color, ContentArrangement, Table};

use tinct_scheme::SchemeTable;

/// Shared table styling for human-facing listings.
pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

/// Render the palette as a slot/hex/swatch table.
pub fn render_palette(palette: &SchemeTable) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Slot", "Hex", ""]);
    apply_table_style(&mut table);
    for (name, value) in palette {
        table.add_row(vec![Cell::new(name), Cell::new(value), swatch_cell(value)]);
    }
    table
}

/// A cell painted with the slot colour, for terminals with true colour.
fn swatch_cell(value: &str) -> Cell {
    match rgb_components(value) {
        Some([r, g, b]) => Cell::new("      ").bg(Color::Rgb { r, g, b }),
        None => Cell::new(""),
    }
}

fn rgb_components(value: &str) -> Option<[u8; 3]> {
    hex::decode(value).ok()?.try_into().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_row_per_slot() {
        let mut palette = SchemeTable::new();
        palette.insert("primary".to_string(), "4285f4".to_string());
        palette.insert("onPrimary".to_string(), "ffffff".to_string());
        let rendered = render_palette(&palette).to_string();
        assert!(rendered.contains("primary"));
        assert!(rendered.contains("4285f4"));
        assert!(rendered.contains("ffffff"));
    }

    #[test]
    fn swatch_parses_hex_components() {
        assert_eq!(rgb_components("4285f4"), Some([0x42, 0x85, 0xF4]));
        assert_eq!(rgb_components("junk"), None);
    }
}
