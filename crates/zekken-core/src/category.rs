//! Badge categories (race grades) and their color themes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Race-grade classification of a badge. The wire spelling is the lowercase
/// token (`"derby"`, `"g1"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Derby,
    Classic,
    G1,
    G2,
    G3,
    Listed,
    Tokubetsu,
    Normal,
}

/// Badge cloth colors for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub background_color: &'static str,
    pub font_color: &'static str,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 8] = [
        Category::Derby,
        Category::Classic,
        Category::G1,
        Category::G2,
        Category::G3,
        Category::Listed,
        Category::Tokubetsu,
        Category::Normal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Derby => "derby",
            Category::Classic => "classic",
            Category::G1 => "g1",
            Category::G2 => "g2",
            Category::G3 => "g3",
            Category::Listed => "listed",
            Category::Tokubetsu => "tokubetsu",
            Category::Normal => "normal",
        }
    }

    /// Cloth colors for this category.
    ///
    /// `classic` and `g1` share one cloth: the eight classic races are all
    /// G1 races, so the two grades carry the same colors. Each still has its
    /// own table entry so that adding a category is an exhaustiveness error
    /// rather than a silent fallback.
    pub const fn theme(&self) -> Theme {
        match self {
            Category::Derby => Theme {
                background_color: "#1c6b3c",
                font_color: "#ffffff",
            },
            Category::Classic => Theme {
                background_color: "#132a63",
                font_color: "#ffffff",
            },
            Category::G1 => Theme {
                background_color: "#132a63",
                font_color: "#ffffff",
            },
            Category::G2 => Theme {
                background_color: "#9d1c31",
                font_color: "#ffffff",
            },
            Category::G3 => Theme {
                background_color: "#00715e",
                font_color: "#ffffff",
            },
            Category::Listed => Theme {
                background_color: "#1f1f1f",
                font_color: "#ffffff",
            },
            Category::Tokubetsu => Theme {
                background_color: "#ffffff",
                font_color: "#132a63",
            },
            Category::Normal => Theme {
                background_color: "#ffffff",
                font_color: "#1f1f1f",
            },
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ();

    /// Exact-match parse of the lowercase wire token. `"G1"` and `" g1 "`
    /// are rejected; the request layer does not normalize badge types.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "derby" => Ok(Category::Derby),
            "classic" => Ok(Category::Classic),
            "g1" => Ok(Category::G1),
            "g2" => Ok(Category::G2),
            "g3" => Ok(Category::G3),
            "listed" => Ok(Category::Listed),
            "tokubetsu" => Ok(Category::Tokubetsu),
            "normal" => Ok(Category::Normal),
            _ => Err(()),
        }
    }
}
