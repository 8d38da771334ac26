use crate::error::Result;
use crate::optimize::{Optimizer, OptimizerConfig};
use crate::tree::{Element, ElementKind};

/// Value recorded for a file with zero drawable paths. The broken icon stays
/// visible in the generated module instead of breaking the build.
pub const NO_PATH_SENTINEL: &str = "[ERROR]: no_path";

/// Result of encoding one file: the compact value plus everything the walk
/// noticed along the way. The fold itself never logs; callers decide what to
/// do with the diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOutput {
    pub value: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl EncodeOutput {
    pub fn is_no_path(&self) -> bool {
        self.value == NO_PATH_SENTINEL
    }
}

/// Non-fatal findings from the encoding walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Element kind the optimizer could not flatten; flagged, not fixed.
    UnsupportedElement { name: String },
    /// No path qualified for encoding; the sentinel value was emitted.
    NoDrawablePath,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::UnsupportedElement { name } => {
                write!(f, "markup has unsupported tag <{name}>")
            }
            Diagnostic::NoDrawablePath => write!(f, "no drawable path"),
        }
    }
}

/// Encodes raw markup into one compact string per file.
pub struct Encoder {
    optimizer: Optimizer,
}

impl Encoder {
    pub fn new(config: OptimizerConfig) -> Self {
        Self {
            optimizer: Optimizer::new(config),
        }
    }

    /// Optimize then encode. Malformed markup fails here with a parse error;
    /// a well-formed file without drawable paths succeeds with the sentinel
    /// value. The two cases are never conflated.
    pub fn encode(&self, markup: &str) -> Result<EncodeOutput> {
        let tree = self.optimizer.optimize(markup)?;
        Ok(encode_tree(&tree))
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new(OptimizerConfig::default())
    }
}

/// Depth-first fold over a normalized tree: collects per-path compact
/// strings in document order and joins them with single spaces.
pub fn encode_tree(root: &Element) -> EncodeOutput {
    let mut paths = Vec::new();
    let mut diagnostics = Vec::new();
    visit(root, &mut paths, &mut diagnostics);

    if paths.is_empty() {
        diagnostics.push(Diagnostic::NoDrawablePath);
        return EncodeOutput {
            value: NO_PATH_SENTINEL.to_string(),
            diagnostics,
        };
    }

    EncodeOutput {
        value: paths.join(" "),
        diagnostics,
    }
}

fn visit(element: &Element, paths: &mut Vec<String>, diagnostics: &mut Vec<Diagnostic>) {
    if let ElementKind::Other(name) = &element.kind {
        diagnostics.push(Diagnostic::UnsupportedElement { name: name.clone() });
    }

    if element.kind == ElementKind::Path {
        if let Some(encoded) = encode_path(element) {
            paths.push(encoded);
        }
    }

    for child in &element.children {
        visit(child, paths, diagnostics);
    }
}

/// One path's style tokens followed by its drawing commands. Paths without
/// commands and paths with a literal `fill="none"` contribute nothing.
fn encode_path(element: &Element) -> Option<String> {
    let d = element.attr("d").filter(|d| !d.is_empty())?;
    if element.attr("fill") == Some("none") {
        return None;
    }

    // Token order is fixed: o, O, f, F.
    let mut parts = Vec::new();
    if let Some(opacity) = element.attr("opacity") {
        if opacity != "1" {
            parts.push(format!("o{opacity}"));
        }
    }
    if let Some(fill_opacity) = element.attr("fill-opacity") {
        if fill_opacity != "1" {
            parts.push(format!("O{fill_opacity}"));
        }
    }
    if let Some(hex) = element.attr("stroke").and_then(|s| s.strip_prefix('#')) {
        parts.push(format!("f{hex}"));
    }
    if let Some(hex) = element.attr("fill").and_then(|f| f.strip_prefix('#')) {
        parts.push(format!("F{hex}"));
    }
    parts.push(d.to_string());

    Some(parts.join(" "))
}
