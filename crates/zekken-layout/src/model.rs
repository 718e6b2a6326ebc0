use serde::Serialize;
use zekken_core::Theme;

/// Fully resolved geometry and typography for one badge.
///
/// Entirely determined by the identity it was resolved from; recomputed per
/// request and never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSpec {
    pub theme: Theme,
    /// Left offset of the number glyphs.
    pub number_x: f64,
    /// Top offset of the number glyphs.
    pub number_y: f64,
    pub name_font_size: f64,
    pub name_margin_top: f64,
    pub name_margin_left: f64,
    /// The name as drawn: short names are spread with double spaces.
    pub rendered_name: String,
}
