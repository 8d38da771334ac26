use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static RANGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{(-?\d+),(-?\d+)\}").unwrap());
static INDEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{(-?\d+)\}").unwrap());

/// Expand `{i}` and `{a,b}` placeholders in `template` against `segments`.
///
/// An empty template joins all segments with `joiner`. Ranges are inclusive,
/// indices may be negative (end-relative), and an end index of `-1` extends
/// the range through the last segment. Ranges are resolved before single
/// indices so a template can mix both. A single index that falls out of
/// range leaves its placeholder text untouched.
pub fn expand(segments: &[String], template: &str, joiner: &str) -> String {
    if template.is_empty() {
        return segments.join(joiner);
    }

    let ranged = RANGE.replace_all(template, |caps: &Captures| {
        let (Some(start), Some(end)) = (parse_index(&caps[1]), parse_index(&caps[2])) else {
            return caps[0].to_string();
        };
        let (lo, hi) = resolve_range(start, end, segments.len());
        segments[lo..hi].join(joiner)
    });

    INDEX
        .replace_all(&ranged, |caps: &Captures| {
            match parse_index(&caps[1]).and_then(|i| resolve_index(i, segments.len())) {
                Some(i) => segments[i].clone(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn parse_index(raw: &str) -> Option<isize> {
    raw.parse().ok()
}

/// Normalize a single end-relative index; `None` when out of bounds.
fn resolve_index(index: isize, len: usize) -> Option<usize> {
    if index < 0 {
        len.checked_sub(index.unsigned_abs())
    } else {
        let index = index as usize;
        (index < len).then_some(index)
    }
}

/// Normalize an inclusive, possibly end-relative range into clamped
/// half-open bounds. An inverted or out-of-bounds range collapses to empty.
fn resolve_range(start: isize, end: isize, len: usize) -> (usize, usize) {
    let lo = if start < 0 {
        len.saturating_sub(start.unsigned_abs())
    } else {
        (start as usize).min(len)
    };
    // end is inclusive; -1 reaches through the last segment.
    let hi = if end < 0 {
        len.saturating_sub(end.unsigned_abs() - 1)
    } else {
        ((end as usize) + 1).min(len)
    };
    if lo >= hi {
        (0, 0)
    } else {
        (lo, hi)
    }
}
