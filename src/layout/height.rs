//! Row-height estimation for wrapped text

/// Wide glyphs take more room than the column's nominal character width.
const WIDE_GLYPH_FACTOR: f64 = 0.75;
const PADDING_PT: f64 = 5.0;

/// Estimate the height in points needed to show `text` wrapped inside a
/// column `width_chars` characters wide.
///
/// Each explicit line wraps independently; the row gets two font sizes per
/// wrapped line plus a fixed padding. Blank text gets a single unpadded line.
pub fn estimate_row_height(text: &str, width_chars: f64, font_size_pt: f64) -> f64 {
    if text.trim().is_empty() {
        return font_size_pt * 2.0;
    }

    let adjusted = (width_chars * WIDE_GLYPH_FACTOR).floor().max(1.0) as usize;

    let lines: usize = text
        .split('\n')
        .map(|line| line.chars().count().div_ceil(adjusted).max(1))
        .sum();

    lines as f64 * font_size_pt * 2.0 + PADDING_PT
}
