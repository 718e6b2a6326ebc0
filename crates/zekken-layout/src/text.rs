use serde::Serialize;

/// Logical font family of a text run.
///
/// The rendering collaborator maps these to loaded font data; serialization
/// carries the CSS family name so a tree can cross a process boundary as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FontFamily {
    /// Digits.
    #[serde(rename = "Roboto")]
    Numeral,
    /// Katakana and the race label.
    #[serde(rename = "Noto Sans JP")]
    Kana,
}

impl FontFamily {
    /// CSS family name the renderer should register.
    pub fn css_name(&self) -> &'static str {
        match self {
            FontFamily::Numeral => "Roboto",
            FontFamily::Kana => "Noto Sans JP",
        }
    }
}
