//! The permitted badge-name alphabet: full-width katakana.

use rustc_hash::FxHashSet;
use std::sync::OnceLock;

/// Every character a badge name may contain.
///
/// 46 base kana, 20 voiced (dakuten), 5 semi-voiced (handakuten), 9 small
/// kana and the prolonged sound mark. Hiragana, half-width katakana and the
/// rarer combined forms (`ヴ`, `ヵ`, `ヶ`, `ヮ`) are not part of the set.
pub const KATAKANA_ALPHABET: [char; 81] = [
    // base
    'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク', 'ケ', 'コ',
    'サ', 'シ', 'ス', 'セ', 'ソ', 'タ', 'チ', 'ツ', 'テ', 'ト',
    'ナ', 'ニ', 'ヌ', 'ネ', 'ノ', 'ハ', 'ヒ', 'フ', 'ヘ', 'ホ',
    'マ', 'ミ', 'ム', 'メ', 'モ', 'ヤ', 'ユ', 'ヨ', 'ラ', 'リ',
    'ル', 'レ', 'ロ', 'ワ', 'ヲ', 'ン',
    // dakuten
    'ガ', 'ギ', 'グ', 'ゲ', 'ゴ', 'ザ', 'ジ', 'ズ', 'ゼ', 'ゾ',
    'ダ', 'ヂ', 'ヅ', 'デ', 'ド', 'バ', 'ビ', 'ブ', 'ベ', 'ボ',
    // handakuten
    'パ', 'ピ', 'プ', 'ペ', 'ポ',
    // small kana
    'ァ', 'ィ', 'ゥ', 'ェ', 'ォ', 'ッ', 'ャ', 'ュ', 'ョ',
    // prolonged sound mark
    'ー',
];

fn alphabet_set() -> &'static FxHashSet<char> {
    static SET: OnceLock<FxHashSet<char>> = OnceLock::new();
    SET.get_or_init(|| KATAKANA_ALPHABET.iter().copied().collect())
}

/// Returns true when `ch` may appear in a badge name.
pub fn is_permitted(ch: char) -> bool {
    alphabet_set().contains(&ch)
}

/// Returns true when every character of `name` is in the permitted alphabet.
/// Length is not checked here.
pub fn is_kana_name(name: &str) -> bool {
    name.chars().all(is_permitted)
}
