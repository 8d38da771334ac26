use serde::{Deserialize, Serialize};

use crate::color;
use crate::error::Result;
use crate::shapes;
use crate::tree::{Element, ElementKind};

/// Which normalization passes run before encoding. Explicit per invocation
/// so repeated or concurrent runs cannot interfere through shared state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Drop `<defs>` subtrees that define nothing referenceable.
    pub remove_useless_defs: bool,

    /// Rewrite rect/circle/ellipse/line/polyline/polygon into `<path>`.
    pub convert_shapes: bool,

    /// Canonicalize fill/stroke paint values to (short) hex literals.
    pub convert_colors: bool,

    /// Merge adjacent sibling paths that share their presentation attributes.
    pub merge_paths: bool,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            remove_useless_defs: true,
            convert_shapes: true,
            convert_colors: true,
            merge_paths: true,
        }
    }
}

/// Parses raw markup and runs the configured normalization passes,
/// producing the element tree the encoder consumes.
pub struct Optimizer {
    config: OptimizerConfig,
}

impl Optimizer {
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    pub fn optimize(&self, markup: &str) -> Result<Element> {
        let doc = roxmltree::Document::parse(markup)?;
        let mut root = build_element(doc.root_element());

        if self.config.remove_useless_defs {
            remove_useless_defs(&mut root);
        }
        if self.config.convert_shapes {
            convert_shapes(&mut root);
        }
        if self.config.convert_colors {
            convert_colors(&mut root);
        }
        if self.config.merge_paths {
            merge_paths(&mut root);
        }

        Ok(root)
    }
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new(OptimizerConfig::default())
    }
}

fn build_element(node: roxmltree::Node<'_, '_>) -> Element {
    let mut element = Element::new(ElementKind::from_name(node.tag_name().name()));
    for attr in node.attributes() {
        element.set_attr(attr.name(), attr.value());
    }
    element.children = node
        .children()
        .filter(roxmltree::Node::is_element)
        .map(build_element)
        .collect();
    element
}

fn remove_useless_defs(element: &mut Element) {
    element.children.retain(|child| {
        let is_defs = matches!(&child.kind, ElementKind::Other(name) if name == "defs");
        !is_defs || defines_anything(child)
    });
    for child in &mut element.children {
        remove_useless_defs(child);
    }
}

fn defines_anything(element: &Element) -> bool {
    element
        .children
        .iter()
        .any(|child| child.attr("id").is_some() || defines_anything(child))
}

fn convert_shapes(element: &mut Element) {
    if let ElementKind::Other(name) = &element.kind {
        let name = name.clone();
        if shapes::convert_to_path(element) {
            log::debug!("Converted <{name}> to path");
        }
    }
    for child in &mut element.children {
        convert_shapes(child);
    }
}

fn convert_colors(element: &mut Element) {
    for name in ["fill", "stroke", "stop-color"] {
        if let Some(value) = element.attr(name) {
            let canonical = color::canonicalize(value);
            element.set_attr(name, canonical);
        }
    }
    for child in &mut element.children {
        convert_colors(child);
    }
}

fn merge_paths(element: &mut Element) {
    for child in &mut element.children {
        merge_paths(child);
    }

    let mut merged: Vec<Element> = Vec::with_capacity(element.children.len());
    for child in element.children.drain(..) {
        match merged.last_mut() {
            Some(last) if can_merge(last, &child) => {
                let addition = child.attr("d").unwrap_or_default().to_string();
                if let Some(existing) = last.attributes.get_mut("d") {
                    existing.push(' ');
                    existing.push_str(&addition);
                }
            }
            _ => merged.push(child),
        }
    }
    element.children = merged;
}

fn can_merge(a: &Element, b: &Element) -> bool {
    a.kind == ElementKind::Path
        && b.kind == ElementKind::Path
        && a.attr("d").is_some()
        && b.attr("d").is_some()
        && a.style_attributes() == b.style_attributes()
}
