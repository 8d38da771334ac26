use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Element kind after optimization. Everything the encoder cannot flatten
/// ends up as [`ElementKind::Other`] and is reported, not fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    /// `<svg>` document root
    Root,
    /// `<g>` grouping element
    Group,
    /// `<path>` drawable
    Path,
    /// `<title>` metadata, ignored but tolerated
    Title,
    /// Any other tag name
    Other(String),
}

impl ElementKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "svg" => ElementKind::Root,
            "g" => ElementKind::Group,
            "path" => ElementKind::Path,
            "title" => ElementKind::Title,
            other => ElementKind::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ElementKind::Root => "svg",
            ElementKind::Group => "g",
            ElementKind::Path => "path",
            ElementKind::Title => "title",
            ElementKind::Other(name) => name,
        }
    }
}

/// One node of the normalized element tree consumed by the encoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub kind: ElementKind,
    pub attributes: HashMap<String, String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            attributes: HashMap::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Presentation attributes only, i.e. everything except the drawing
    /// commands. Two paths that agree here can be merged.
    pub fn style_attributes(&self) -> HashMap<&str, &str> {
        self.attributes
            .iter()
            .filter(|(name, _)| name.as_str() != "d")
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect()
    }
}
