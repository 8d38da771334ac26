use once_cell::sync::Lazy;
use regex::Regex;

static RGB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$").unwrap());

// CSS basic color keywords plus the few extended names icon sets actually use.
const NAMED: &[(&str, &str)] = &[
    ("aqua", "#00ffff"),
    ("black", "#000000"),
    ("blue", "#0000ff"),
    ("cyan", "#00ffff"),
    ("fuchsia", "#ff00ff"),
    ("gray", "#808080"),
    ("green", "#008000"),
    ("grey", "#808080"),
    ("lime", "#00ff00"),
    ("magenta", "#ff00ff"),
    ("maroon", "#800000"),
    ("navy", "#000080"),
    ("olive", "#808000"),
    ("orange", "#ffa500"),
    ("purple", "#800080"),
    ("red", "#ff0000"),
    ("silver", "#c0c0c0"),
    ("teal", "#008080"),
    ("white", "#ffffff"),
    ("yellow", "#ffff00"),
];

/// Canonicalize a paint value: color names and `rgb()` notation become hex
/// literals, and 6-digit hex with doubled pairs is shortened to 3 digits.
/// Values that are none of these (gradients, `none`, `currentColor`) pass
/// through untouched.
pub fn canonicalize(value: &str) -> String {
    let trimmed = value.trim();

    if let Some(hex) = named_to_hex(trimmed) {
        return shorten_hex(hex);
    }

    if let Some(caps) = RGB.captures(trimmed) {
        let channels: Option<Vec<u8>> = (1..=3).map(|i| caps[i].parse().ok()).collect();
        if let Some(channels) = channels {
            let hex = format!(
                "#{:02x}{:02x}{:02x}",
                channels[0], channels[1], channels[2]
            );
            return shorten_hex(&hex);
        }
    }

    if trimmed.starts_with('#') {
        return shorten_hex(trimmed);
    }

    value.to_string()
}

fn named_to_hex(value: &str) -> Option<&'static str> {
    NAMED
        .iter()
        .find(|(name, _)| value.eq_ignore_ascii_case(name))
        .map(|(_, hex)| *hex)
}

fn shorten_hex(hex: &str) -> String {
    let digits = &hex[1..];
    if digits.len() == 6 && digits.is_ascii() {
        let bytes = digits.as_bytes();
        if bytes[0] == bytes[1] && bytes[2] == bytes[3] && bytes[4] == bytes[5] {
            return format!(
                "#{}{}{}",
                bytes[0] as char, bytes[2] as char, bytes[4] as char
            );
        }
    }
    hex.to_string()
}
