//! Extraction of translatable text from Android string resources.
//!
//! Only `<string>` elements that are direct children of the root element are
//! considered. Inline markup inside a string (`<b>`, `<xliff:g>`, ...) is
//! flattened into its text.

use std::{fs, path::Path};

use roxmltree::{Document, Node};
use tracing::{info, warn};

use super::{
    error::{LidError, Result},
    types::TextUnit,
};

const STRING_TAG: &str = "string";
const NAME_ATTR: &str = "name";
const TRANSLATABLE_ATTR: &str = "translatable";

/// Read and parse a resource file into text units, in document order.
pub fn extract(path: &Path) -> Result<Vec<TextUnit>> {
    info!("Parsing string resource xml from {}", path.display());

    let content = fs::read_to_string(path).map_err(|source| LidError::ReadResource {
        path: path.to_path_buf(),
        source,
    })?;

    extract_from_str(&content).map_err(|source| LidError::ParseResource {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse resource XML held in memory.
pub fn extract_from_str(content: &str) -> std::result::Result<Vec<TextUnit>, roxmltree::Error> {
    let doc = Document::parse(content)?;
    let line_index = build_line_index(content);

    let units = doc
        .root_element()
        .children()
        .filter(|node| node.has_tag_name(STRING_TAG))
        .filter_map(|node| to_text_unit(node, &line_index))
        .collect();

    Ok(units)
}

/// Byte offsets where each line starts. Line 1 starts at offset 0.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    offsets.extend(content.match_indices('\n').map(|(i, _)| i + 1));
    offsets
}

/// 1-based line number of a byte offset.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}

fn to_text_unit(node: Node, line_index: &[usize]) -> Option<TextUnit> {
    let name = node.attribute(NAME_ATTR);
    let line = || offset_to_line(line_index, node.range().start);

    if is_untranslatable(node) {
        info!(
            "Skipping <string name='{}'> (translatable=false) at line {}",
            name.unwrap_or_default(),
            line()
        );
        return None;
    }

    let raw = collect_text(node);
    let text = normalize_text(&raw);
    if text.is_empty() {
        info!(
            "Skipping empty text - <string name='{}'>{}</string> at line {}",
            name.unwrap_or_default(),
            raw,
            line()
        );
        return None;
    }

    let identifier = match name {
        Some(name) => name.to_string(),
        None => {
            warn!("<string> at line {} has no 'name' attribute", line());
            String::new()
        }
    };

    Some(TextUnit { identifier, text })
}

fn is_untranslatable(node: Node) -> bool {
    node.attribute(TRANSLATABLE_ATTR)
        .is_some_and(|value| value.trim().eq_ignore_ascii_case("false"))
}

/// Concatenate the text of `node` and all of its descendants.
fn collect_text(node: Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// Collapse newlines into spaces and trim surrounding whitespace.
pub fn normalize_text(text: &str) -> String {
    text.replace('\n', " ").trim().to_string()
}
