//! The declarative badge tree handed to the rendering collaborator.

use crate::model::LayoutSpec;
use crate::resolve;
use crate::text::FontFamily;
use serde::Serialize;
use zekken_core::IdentityRecord;

/// Badge canvas width.
pub const BADGE_WIDTH: f64 = 300.0;
/// Badge canvas height.
pub const BADGE_HEIGHT: f64 = 250.0;
/// Corner radius of the badge cloth.
pub const BADGE_CORNER_RADIUS: f64 = 12.0;
/// Font size of the number glyphs.
pub const NUMBER_FONT_SIZE: f64 = 130.0;

const NUMBER_FONT_WEIGHT: u16 = 700;
const NAME_FONT_WEIGHT: u16 = 500;
const RACE_LABEL_FONT_SIZE: f64 = 18.0;
const RACE_LABEL_FONT_WEIGHT: u16 = 500;
const RACE_LABEL_Y: f64 = 14.0;

/// Composition knobs that are not part of the validated identity.
#[derive(Debug, Clone, Default)]
pub struct ComposeOptions {
    /// Optional race label drawn centered above the number. Values that are
    /// blank after trimming are treated as absent.
    pub race: Option<String>,
}

/// Root of the declarative badge scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeTree {
    pub width: f64,
    pub height: f64,
    pub root: BadgeNode,
}

/// One node of the badge scene.
///
/// Serialized with an internal `type` tag (`"box"` / `"text"`), the shape
/// the rendering collaborator consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BadgeNode {
    Box {
        style: BoxStyle,
        children: Vec<BadgeNode>,
    },
    Text {
        run: TextRun,
        style: TextPlacement,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxStyle {
    pub background_color: String,
    pub corner_radius: f64,
}

/// A single styled piece of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    pub content: String,
    pub font_family: FontFamily,
    pub font_size: f64,
    pub font_weight: u16,
}

/// Placement of a text run within its parent box.
///
/// A run with no horizontal coordinate (`x` and `margin_left` both absent)
/// is centered horizontally by the renderer; that rule is part of the seam
/// contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextPlacement {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<f64>,
}

/// Builds the declarative badge tree for one identity.
///
/// Children are emitted in draw order: race label (when present), number,
/// name. All text runs carry the theme's font color.
pub fn compose(identity: &IdentityRecord, options: &ComposeOptions) -> BadgeTree {
    let spec = resolve::resolve(identity);
    let font_color = spec.theme.font_color;

    let mut children: Vec<BadgeNode> = Vec::new();

    if let Some(race) = race_label(options) {
        children.push(BadgeNode::Text {
            run: TextRun {
                content: race,
                font_family: FontFamily::Kana,
                font_size: RACE_LABEL_FONT_SIZE,
                font_weight: RACE_LABEL_FONT_WEIGHT,
            },
            style: TextPlacement {
                color: font_color.to_string(),
                x: None,
                y: Some(RACE_LABEL_Y),
                margin_top: None,
                margin_left: None,
            },
        });
    }

    children.push(BadgeNode::Text {
        run: TextRun {
            content: identity.number().to_string(),
            font_family: FontFamily::Numeral,
            font_size: NUMBER_FONT_SIZE,
            font_weight: NUMBER_FONT_WEIGHT,
        },
        style: TextPlacement {
            color: font_color.to_string(),
            x: Some(spec.number_x),
            y: Some(spec.number_y),
            margin_top: None,
            margin_left: None,
        },
    });

    children.push(BadgeNode::Text {
        run: TextRun {
            content: spec.rendered_name.clone(),
            font_family: FontFamily::Kana,
            font_size: spec.name_font_size,
            font_weight: NAME_FONT_WEIGHT,
        },
        style: TextPlacement {
            color: font_color.to_string(),
            x: None,
            y: None,
            margin_top: Some(spec.name_margin_top),
            margin_left: Some(spec.name_margin_left),
        },
    });

    badge_tree(&spec, children)
}

fn badge_tree(spec: &LayoutSpec, children: Vec<BadgeNode>) -> BadgeTree {
    BadgeTree {
        width: BADGE_WIDTH,
        height: BADGE_HEIGHT,
        root: BadgeNode::Box {
            style: BoxStyle {
                background_color: spec.theme.background_color.to_string(),
                corner_radius: BADGE_CORNER_RADIUS,
            },
            children,
        },
    }
}

fn race_label(options: &ComposeOptions) -> Option<String> {
    let race = options.race.as_deref()?.trim();
    if race.is_empty() {
        None
    } else {
        Some(race.to_string())
    }
}
