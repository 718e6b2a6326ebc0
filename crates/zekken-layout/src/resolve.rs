//! Layout resolution: a validated identity to concrete badge geometry.

use crate::model::LayoutSpec;
use zekken_core::IdentityRecord;

/// Left offset of the number glyphs for single-digit numbers (0..=9).
pub const NUMBER_SHORT_X: f64 = 108.0;
/// Left offset of the number glyphs for longer numbers.
pub const NUMBER_LONG_X: f64 = 66.0;
/// Top offset of the number glyphs.
pub const NUMBER_Y: f64 = 28.0;

/// Names shorter than this many characters are spread with double spaces.
const SPREAD_BELOW_CHARS: usize = 5;

/// Resolves the layout parameters for one identity.
///
/// Pure and total: every name length the validator admits has a table row,
/// and the theme table is exhaustive over categories. The same identity
/// always resolves to the same spec.
pub fn resolve(identity: &IdentityRecord) -> LayoutSpec {
    let len = identity.name_len();
    let (name_font_size, name_margin_top) = name_font(len);
    LayoutSpec {
        theme: identity.category().theme(),
        number_x: if identity.number() <= 9 {
            NUMBER_SHORT_X
        } else {
            NUMBER_LONG_X
        },
        number_y: NUMBER_Y,
        name_font_size,
        name_margin_top,
        name_margin_left: name_margin_left(len),
        rendered_name: rendered_name(identity.name(), len),
    }
}

/// Font size and top margin per name length. Longer names step down in size
/// and sit lower on the cloth.
fn name_font(len: usize) -> (f64, f64) {
    match len {
        2 | 3 => (24.0, 70.0),
        4..=6 => (22.0, 75.0),
        7 | 8 => (20.0, 80.0),
        9 => (17.0, 100.0),
        _ => unreachable!("name length {len} outside the validated 2..=9 range"),
    }
}

/// Left margin per name length. Short names walk in from the left edge in
/// 30px steps; 6 to 8 characters tighten in 12px steps; the full 9 sits at
/// a fixed 5px.
fn name_margin_left(len: usize) -> f64 {
    match len {
        2..=5 => 100.0 - ((len - 2) as f64) * 30.0,
        6..=8 => 12.0 * ((8 - len) as f64),
        9 => 5.0,
        _ => unreachable!("name length {len} outside the validated 2..=9 range"),
    }
}

/// Names under [`SPREAD_BELOW_CHARS`] characters are drawn with a double
/// space between glyphs so they fill the cloth; longer names pass through
/// unchanged.
fn rendered_name(name: &str, len: usize) -> String {
    if len >= SPREAD_BELOW_CHARS {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len() + len.saturating_sub(1) * 2);
    for (i, ch) in name.chars().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push(ch);
    }
    out
}
