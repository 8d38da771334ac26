use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Case family applied to derived constant names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseMode {
    /// `fooBar` (the default)
    #[default]
    #[serde(rename = "camelCase")]
    Camel,
    /// `FooBar`
    #[serde(rename = "PascalCase")]
    Pascal,
    /// `foo_bar`
    #[serde(rename = "snake_case")]
    Snake,
    /// `FOO_BAR`
    #[serde(rename = "SCREAMING_SNAKE_CASE")]
    ScreamingSnake,
    /// Passthrough, no reformatting
    #[serde(rename = "raw")]
    Raw,
}

impl CaseMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            CaseMode::Camel => "camelCase",
            CaseMode::Pascal => "PascalCase",
            CaseMode::Snake => "snake_case",
            CaseMode::ScreamingSnake => "SCREAMING_SNAKE_CASE",
            CaseMode::Raw => "raw",
        }
    }
}

static SEPARATOR_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-\s]+").unwrap());

/// Reformat `text` into the requested case family.
///
/// Word boundaries are `-`, `_` and whitespace. The snake families only
/// replace separator runs and shift the whole string's case; existing camel
/// humps are not re-split.
pub fn format(text: &str, mode: CaseMode) -> String {
    match mode {
        CaseMode::Camel => camel_case(text),
        CaseMode::Pascal => pascal_case(text),
        CaseMode::Snake => SEPARATOR_RUN.replace_all(text, "_").to_lowercase(),
        CaseMode::ScreamingSnake => SEPARATOR_RUN.replace_all(text, "_").to_uppercase(),
        CaseMode::Raw => text.to_string(),
    }
}

fn pascal_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut capitalize = true;
    for ch in text.chars() {
        if matches!(ch, '-' | '_' | ' ') {
            capitalize = true;
        } else if capitalize {
            out.extend(ch.to_uppercase());
            capitalize = false;
        } else {
            out.push(ch);
        }
    }
    out
}

fn camel_case(text: &str) -> String {
    let pascal = pascal_case(text);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => pascal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pascal_case_capitalizes_after_separators() {
        assert_eq!(format("foo-bar", CaseMode::Pascal), "FooBar");
        assert_eq!(format("foo_bar baz", CaseMode::Pascal), "FooBarBaz");
        assert_eq!(format("battery_alert", CaseMode::Pascal), "BatteryAlert");
    }

    #[test]
    fn camel_case_lowers_the_first_character() {
        assert_eq!(format("foo bar", CaseMode::Camel), "fooBar");
        assert_eq!(format("folder_icon1", CaseMode::Camel), "folderIcon1");
        assert_eq!(format("Already", CaseMode::Camel), "already");
    }

    #[test]
    fn snake_case_replaces_separator_runs_and_lowers() {
        assert_eq!(format("Foo-Bar", CaseMode::Snake), "foo_bar");
        assert_eq!(format("foo  bar--baz", CaseMode::Snake), "foo_bar_baz");
        // Existing camel humps are not re-split.
        assert_eq!(format("fooBar", CaseMode::Snake), "foobar");
    }

    #[test]
    fn screaming_snake_case_uppercases() {
        assert_eq!(format("foo bar", CaseMode::ScreamingSnake), "FOO_BAR");
        assert_eq!(format("foo-bar_baz", CaseMode::ScreamingSnake), "FOO_BAR_BAZ");
    }

    #[test]
    fn raw_is_a_passthrough() {
        assert_eq!(format("folder_icon1", CaseMode::Raw), "folder_icon1");
        assert_eq!(format("Foo-Bar", CaseMode::Raw), "Foo-Bar");
    }

    #[test]
    fn default_mode_is_camel() {
        assert_eq!(CaseMode::default(), CaseMode::Camel);
    }

    #[test]
    fn empty_input_stays_empty() {
        for mode in [
            CaseMode::Camel,
            CaseMode::Pascal,
            CaseMode::Snake,
            CaseMode::ScreamingSnake,
            CaseMode::Raw,
        ] {
            assert_eq!(format("", mode), "");
        }
    }
}
