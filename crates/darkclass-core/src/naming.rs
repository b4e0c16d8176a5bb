//! Naming convention utilities for dark class generation.
//!
//! Every identifier derived from user input (class name, accessor name,
//! enum member) goes through [`to_pascal_case`].
//!
//! # Supported Conversions
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `player_data` | [`to_pascal_case`] | `PlayerData` |
//! | `PlayerData` | [`enum_name`] | `PlayerDataField` |
//! | `PlayerData` | [`extension_class_name`] | `PlayerDataExt` |

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

#[allow(clippy::expect_used)] // Safe: pattern is a compile-time constant
static WORD_INITIAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-z]").expect("word-initial pattern is valid"));

/// Convert a name to PascalCase.
///
/// Underscores become word breaks, every lowercase ASCII letter that starts
/// a word is uppercased, then all whitespace is removed. Characters other
/// than `_` and whitespace are kept as they are.
///
/// # Examples
///
/// ```
/// use darkclass_core::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("player_data"), "PlayerData");
/// assert_eq!(to_pascal_case("move speed"), "MoveSpeed");
/// assert_eq!(to_pascal_case("PlayerData"), "PlayerData");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    let spaced = s.replace('_', " ");
    let capitalized = WORD_INITIAL.replace_all(&spaced, |caps: &Captures<'_>| {
        caps[0].to_ascii_uppercase()
    });
    capitalized.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Name of the index enum generated for a class.
pub fn enum_name(class_name: &str) -> String {
    format!("{}Field", to_pascal_case(class_name))
}

/// Name of the static accessor class generated for a class.
pub fn extension_class_name(class_name: &str) -> String {
    format!("{}Ext", to_pascal_case(class_name))
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn to_pascal_case___converts_snake_case() {
        assert_eq!(to_pascal_case("player_data"), "PlayerData");
        assert_eq!(to_pascal_case("max_hit_points"), "MaxHitPoints");
    }

    #[test]
    fn to_pascal_case___converts_spaced_words() {
        assert_eq!(to_pascal_case("move speed"), "MoveSpeed");
        assert_eq!(to_pascal_case("  padded  name "), "PaddedName");
    }

    #[test]
    fn to_pascal_case___handles_simple_words() {
        assert_eq!(to_pascal_case("health"), "Health");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn to_pascal_case___preserves_inner_capitals() {
        assert_eq!(to_pascal_case("hitPoints"), "HitPoints");
        assert_eq!(to_pascal_case("ALLCAPS"), "ALLCAPS");
    }

    #[test]
    fn to_pascal_case___handles_consecutive_underscores() {
        assert_eq!(to_pascal_case("foo__bar"), "FooBar");
        assert_eq!(to_pascal_case("_leading"), "Leading");
        assert_eq!(to_pascal_case("trailing_"), "Trailing");
    }

    #[test]
    fn to_pascal_case___digits_do_not_start_words() {
        assert_eq!(to_pascal_case("slot_2nd"), "Slot2nd");
        assert_eq!(to_pascal_case("item2name"), "Item2name");
    }

    #[test]
    fn to_pascal_case___keeps_punctuation_as_word_break() {
        assert_eq!(to_pascal_case("hp-max"), "Hp-Max");
    }

    #[test]
    fn to_pascal_case___is_idempotent_on_samples() {
        for input in ["player_data", "a b_c", "hp-max", "x", "__", "Already"] {
            let once = to_pascal_case(input);
            assert_eq!(to_pascal_case(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn enum_name___appends_field_suffix() {
        assert_eq!(enum_name("player_data"), "PlayerDataField");
        assert_eq!(enum_name("Item"), "ItemField");
    }

    #[test]
    fn extension_class_name___appends_ext_suffix() {
        assert_eq!(extension_class_name("player_data"), "PlayerDataExt");
    }
}
