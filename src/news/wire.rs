use roxmltree::{Document, Node};

use crate::core::{RawHeadline, ReportError};

/// Parses `rss/channel/item` entries. Items without a title or link are skipped.
pub(crate) fn parse_rss(xml: &str) -> Result<Vec<RawHeadline>, ReportError> {
    let doc = Document::parse(xml)?;

    let channel = doc
        .root_element()
        .children()
        .find(|n| n.has_tag_name("channel"))
        .ok_or_else(|| ReportError::Data("rss: missing channel".into()))?;

    let items = channel
        .children()
        .filter(|n| n.has_tag_name("item"))
        .filter_map(|item| {
            let title = child_text(&item, "title")?;
            let link = child_text(&item, "link")?;
            let mut raw = RawHeadline::new(title, link);
            raw.description = child_text(&item, "description");
            Some(raw)
        })
        .collect();

    Ok(items)
}

fn child_text(node: &Node<'_, '_>, name: &str) -> Option<String> {
    let child = node.children().find(|c| c.has_tag_name(name))?;
    // CDATA and entity-split text arrive as several text nodes.
    let text: String = child
        .children()
        .filter(|c| c.is_text())
        .filter_map(|c| c.text())
        .collect();
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
