//! Reading labeled paths out of an Inkscape drawing.

use std::collections::BTreeMap;

use roxmltree::{Document, Node};

use crate::foundation::core::PageSize;
use crate::foundation::error::{TraceError, TraceResult};
use crate::geometry::path::{LogoGeometry, Section, StrokePath};
use crate::parse::label::PathLabel;
use crate::parse::path_data::OpenPath;

pub(crate) const INKSCAPE_NS: &str = "http://www.inkscape.org/namespaces/inkscape";

/// A `path` child of the root element that carries an Inkscape label.
#[derive(Clone, Copy, Debug)]
pub(crate) struct LabeledPath<'a, 'input> {
    pub label: &'a str,
    pub node: Node<'a, 'input>,
}

impl LabeledPath<'_, '_> {
    pub fn open_path(&self) -> TraceResult<OpenPath> {
        let d = self.node.attribute("d").ok_or_else(|| {
            TraceError::parse(format!("path '{}' has no path data", self.label))
        })?;
        OpenPath::parse(d).map_err(|e| TraceError::parse(format!("path '{}': {e}", self.label)))
    }
}

pub(crate) fn parse_document(text: &str) -> TraceResult<Document<'_>> {
    Document::parse(text).map_err(|e| TraceError::parse(format!("invalid svg document: {e}")))
}

/// Labeled `path` elements directly under the root, in document order.
pub(crate) fn labeled_paths<'a, 'input>(doc: &'a Document<'input>) -> Vec<LabeledPath<'a, 'input>> {
    doc.root_element()
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "path")
        .filter_map(|node| {
            node.attribute((INKSCAPE_NS, "label"))
                .map(|label| LabeledPath { label, node })
        })
        .collect()
}

/// Width and height of the root element. A trailing unit such as `px` or `mm` is ignored.
pub(crate) fn page_size(doc: &Document<'_>) -> TraceResult<PageSize> {
    let root = doc.root_element();
    let dim = |name: &str| -> TraceResult<f64> {
        let raw = root
            .attribute(name)
            .ok_or_else(|| TraceError::parse(format!("document has no {name}")))?;
        let number = raw
            .trim()
            .trim_end_matches(|c: char| c.is_ascii_alphabetic() || c == '%');
        number
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| TraceError::parse(format!("document {name} '{raw}' is not a number")))
    };
    Ok(PageSize::new(dim("width")?, dim("height")?))
}

#[derive(Default)]
struct Triple<'a, 'input> {
    inner: Option<LabeledPath<'a, 'input>>,
    outer: Option<LabeledPath<'a, 'input>>,
    anim: Option<LabeledPath<'a, 'input>>,
}

impl LogoGeometry {
    /// Read `inner{n}`, `outer{n}` and `anim{n}` paths from an Inkscape drawing.
    ///
    /// Sections are collected from index 1 up to the first index for which none of the three
    /// paths exist. An index with only some of the three is an error, as is a drawing without
    /// any section. Labeled paths past the first gap are reported and ignored.
    #[tracing::instrument(skip_all)]
    pub fn from_svg_str(text: &str) -> TraceResult<Self> {
        let doc = parse_document(text)?;
        let page = page_size(&doc)?;

        let mut by_index: BTreeMap<usize, Triple<'_, '_>> = BTreeMap::new();
        for path in labeled_paths(&doc) {
            let slot = match PathLabel::parse(path.label) {
                Some(PathLabel::Inner(n)) => &mut by_index.entry(n).or_default().inner,
                Some(PathLabel::Outer(n)) => &mut by_index.entry(n).or_default().outer,
                Some(PathLabel::Anim(n)) => &mut by_index.entry(n).or_default().anim,
                _ => {
                    tracing::debug!(label = path.label, "ignoring path");
                    continue;
                }
            };
            if slot.replace(path).is_some() {
                tracing::warn!(label = path.label, "duplicate label, keeping the last path");
            }
        }

        let mut inner = Vec::new();
        let mut outer = Vec::new();
        let mut animation = Vec::new();
        for index in 1.. {
            let Some(triple) = by_index.get(&index) else {
                break;
            };
            let section = |p: &Option<LabeledPath<'_, '_>>, prefix: &str| -> TraceResult<Section> {
                let p = p.ok_or_else(|| {
                    TraceError::parse(format!("{prefix}{index} is missing for section {index}"))
                })?;
                p.open_path()?.to_section()
            };
            inner.push(section(&triple.inner, "inner")?);
            outer.push(section(&triple.outer, "outer")?);
            animation.push(section(&triple.anim, "anim")?);
        }

        if animation.is_empty() {
            return Err(TraceError::parse("no inner1/outer1/anim1 paths found"));
        }
        let unreachable = by_index.range(animation.len() + 1..).count();
        if unreachable > 0 {
            tracing::warn!(
                sections = animation.len(),
                unreachable,
                "found unreachable labeled paths after a gap in numbering"
            );
        }

        Self::new(
            page,
            StrokePath::new(inner)?,
            StrokePath::new(outer)?,
            StrokePath::new(animation)?,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/parse/document.rs"]
mod tests;
