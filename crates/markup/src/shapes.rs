use crate::tree::{Element, ElementKind};

/// Rewrite a basic shape element into an equivalent `<path>`, dropping the
/// geometry attributes and keeping the presentation ones. Returns `false`
/// (leaving the element untouched) when the shape cannot be expressed, e.g.
/// a rounded rect or unparsable coordinates.
pub fn convert_to_path(element: &mut Element) -> bool {
    let ElementKind::Other(name) = &element.kind else {
        return false;
    };

    let d = match name.as_str() {
        "rect" => rect_commands(element),
        "circle" => circle_commands(element),
        "ellipse" => ellipse_commands(element),
        "line" => line_commands(element),
        "polyline" => poly_commands(element, false),
        "polygon" => poly_commands(element, true),
        _ => None,
    };

    let Some(d) = d else {
        return false;
    };

    for geometry in [
        "x", "y", "width", "height", "cx", "cy", "r", "rx", "ry", "x1", "y1", "x2", "y2", "points",
    ] {
        element.attributes.remove(geometry);
    }
    element.kind = ElementKind::Path;
    element.set_attr("d", d);
    true
}

fn rect_commands(element: &Element) -> Option<String> {
    // Rounded rects are left for the encoder to flag.
    if element.attr("rx").is_some() || element.attr("ry").is_some() {
        return None;
    }
    let x = number(element, "x").unwrap_or(0.0);
    let y = number(element, "y").unwrap_or(0.0);
    let width = number(element, "width")?;
    let height = number(element, "height")?;
    Some(format!(
        "M{} {}H{}V{}H{}z",
        fmt(x),
        fmt(y),
        fmt(x + width),
        fmt(y + height),
        fmt(x)
    ))
}

fn circle_commands(element: &Element) -> Option<String> {
    let cx = number(element, "cx").unwrap_or(0.0);
    let cy = number(element, "cy").unwrap_or(0.0);
    let r = number(element, "r")?;
    Some(arc_pair(cx, cy, r, r))
}

fn ellipse_commands(element: &Element) -> Option<String> {
    let cx = number(element, "cx").unwrap_or(0.0);
    let cy = number(element, "cy").unwrap_or(0.0);
    let rx = number(element, "rx")?;
    let ry = number(element, "ry")?;
    Some(arc_pair(cx, cy, rx, ry))
}

// Full circle/ellipse as two arc segments.
fn arc_pair(cx: f64, cy: f64, rx: f64, ry: f64) -> String {
    format!(
        "M{} {}A{} {} 0 1 0 {} {}A{} {} 0 1 0 {} {}z",
        fmt(cx),
        fmt(cy - ry),
        fmt(rx),
        fmt(ry),
        fmt(cx),
        fmt(cy + ry),
        fmt(rx),
        fmt(ry),
        fmt(cx),
        fmt(cy - ry)
    )
}

fn line_commands(element: &Element) -> Option<String> {
    let x1 = number(element, "x1").unwrap_or(0.0);
    let y1 = number(element, "y1").unwrap_or(0.0);
    let x2 = number(element, "x2").unwrap_or(0.0);
    let y2 = number(element, "y2").unwrap_or(0.0);
    Some(format!("M{} {}L{} {}", fmt(x1), fmt(y1), fmt(x2), fmt(y2)))
}

fn poly_commands(element: &Element, close: bool) -> Option<String> {
    let points = element.attr("points")?;
    let coords: Vec<f64> = points
        .split(|c: char| c.is_ascii_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| part.parse().ok())
        .collect::<Option<Vec<f64>>>()?;
    if coords.len() < 4 || coords.len() % 2 != 0 {
        return None;
    }

    let mut d = String::new();
    for (i, pair) in coords.chunks_exact(2).enumerate() {
        let command = if i == 0 { 'M' } else { 'L' };
        d.push_str(&format!("{command}{} {}", fmt(pair[0]), fmt(pair[1])));
    }
    if close {
        d.push('z');
    }
    Some(d)
}

fn number(element: &Element, name: &str) -> Option<f64> {
    element.attr(name)?.trim().parse().ok()
}

fn fmt(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
