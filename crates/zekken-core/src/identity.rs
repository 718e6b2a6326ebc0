//! Validated badge identity.

use crate::alphabet;
use crate::category::Category;
use crate::error::{Error, Result};
use serde::Serialize;

/// Shortest permitted name, in characters.
pub const NAME_MIN_CHARS: usize = 2;
/// Longest permitted name, in characters.
pub const NAME_MAX_CHARS: usize = 9;

const NAME_LENGTH_MESSAGE: &str = "名前は2 ~ 9文字です";
const NAME_CHARSET_MESSAGE: &str = "名前に使える文字は全角カタカナのみです";
const NUMBER_MESSAGE: &str = "ゼッケン番号は数字のみです";

/// A validated (name, number, category) triple.
///
/// Constructed only through [`validate_attributes`]; a value of this type
/// satisfies every badge constraint. Serializes with camelCase keys; there
/// is deliberately no `Deserialize`, which would bypass validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRecord {
    name: String,
    number: u32,
    category: Category,
}

impl IdentityRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Name length in characters (not bytes). Guaranteed to lie in
    /// [`NAME_MIN_CHARS`]`..=`[`NAME_MAX_CHARS`].
    pub fn name_len(&self) -> usize {
        self.name.chars().count()
    }
}

/// Validates raw request attributes into an [`IdentityRecord`].
///
/// Checks run in order name, number, category; the first failure wins and is
/// returned immediately. An absent category is substituted with
/// `default_category`; an absent name or number is a validation failure.
/// Error messages are the exact strings shown to the badge requester.
pub fn validate_attributes(
    name: Option<&str>,
    number: Option<&str>,
    category: Option<&str>,
    default_category: Category,
) -> Result<IdentityRecord> {
    let name = validate_name(name)?;
    let number = validate_number(number)?;
    let category = validate_category(category, default_category)?;
    Ok(IdentityRecord {
        name: name.to_string(),
        number,
        category,
    })
}

fn validate_name(raw: Option<&str>) -> Result<&str> {
    let Some(name) = raw else {
        // An absent name fails the same length rule an empty one would.
        return Err(Error::InvalidName {
            message: NAME_LENGTH_MESSAGE.to_string(),
        });
    };
    let len = name.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
        return Err(Error::InvalidName {
            message: NAME_LENGTH_MESSAGE.to_string(),
        });
    }
    if !alphabet::is_kana_name(name) {
        return Err(Error::InvalidName {
            message: NAME_CHARSET_MESSAGE.to_string(),
        });
    }
    Ok(name)
}

fn validate_number(raw: Option<&str>) -> Result<u32> {
    let Some(number) = raw else {
        return Err(Error::InvalidNumber {
            message: NUMBER_MESSAGE.to_string(),
        });
    };
    // `u32::from_str` accepts a leading `+`; the digits-only rule does not,
    // so the charset is checked first. This also rejects full-width digits.
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidNumber {
            message: NUMBER_MESSAGE.to_string(),
        });
    }
    // All-digit input can still overflow; no badge carries such a number.
    number.parse::<u32>().map_err(|_| Error::InvalidNumber {
        message: NUMBER_MESSAGE.to_string(),
    })
}

fn validate_category(raw: Option<&str>, default_category: Category) -> Result<Category> {
    let Some(raw) = raw else {
        return Ok(default_category);
    };
    raw.parse::<Category>().map_err(|_| Error::InvalidCategory {
        message: format!("不明なゼッケン種別です: {raw}"),
    })
}
