//! Construction of typed nodes from raw ADF records.

use serde_json::{Map, Value};

use super::{Mark, MarkType, Node, NodeKind, NodeType};
use crate::error::NodeError;

impl Node {
    /// Build a typed node tree from one raw record.
    ///
    /// The record must be a JSON object with a `type` tag from the supported
    /// vocabulary; children are built depth-first from its `content` array
    /// (absent means empty). A structural error anywhere in the tree fails
    /// the whole record. Semantic anomalies (a bullet list child that is not
    /// a list item, a second header row in a table, an unusable mark) are
    /// logged and skipped instead.
    pub fn from_value(value: &Value) -> Result<Self, NodeError> {
        let record = value.as_object().ok_or(NodeError::NotAnObject)?;
        let tag = record
            .get("type")
            .and_then(Value::as_str)
            .ok_or(NodeError::MissingType)?;
        let node_type =
            NodeType::parse(tag).ok_or_else(|| NodeError::UnknownNodeType(tag.to_owned()))?;

        let attrs = record
            .get("attrs")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        let children = parse_children(record)?;

        let (kind, children) = match node_type {
            NodeType::Paragraph => (NodeKind::Paragraph, children),
            NodeType::Text => (text_kind(record)?, children),
            NodeType::HardBreak => (NodeKind::HardBreak, children),
            NodeType::BulletList => (NodeKind::BulletList, keep_list_items(children)),
            NodeType::ListItem => (NodeKind::ListItem, children),
            NodeType::Panel => (NodeKind::Panel, children),
            NodeType::Table => {
                let header_row = detect_header_row(&children);
                (NodeKind::Table { header_row }, children)
            }
            NodeType::TableRow => (NodeKind::TableRow, children),
            NodeType::TableHeader => {
                let colspan = colspan_attr(&attrs);
                (NodeKind::TableHeader { colspan }, children)
            }
            NodeType::TableCell => {
                let colspan = colspan_attr(&attrs);
                (NodeKind::TableCell { colspan }, children)
            }
        };

        Ok(Node {
            kind,
            attrs,
            children,
        })
    }
}

fn parse_children(record: &Map<String, Value>) -> Result<Vec<Node>, NodeError> {
    match record.get("content").and_then(Value::as_array) {
        Some(items) => items.iter().map(Node::from_value).collect(),
        None => Ok(Vec::new()),
    }
}

fn text_kind(record: &Map<String, Value>) -> Result<NodeKind, NodeError> {
    let text = record
        .get("text")
        .and_then(Value::as_str)
        .ok_or(NodeError::MissingText)?;
    let marks = record
        .get("marks")
        .and_then(Value::as_array)
        .map(|items| parse_marks(items))
        .unwrap_or_default();

    Ok(NodeKind::Text {
        text: text.to_owned(),
        marks,
    })
}

fn parse_marks(items: &[Value]) -> Vec<Mark> {
    let mut marks = Vec::with_capacity(items.len());
    for item in items {
        let Some(tag) = item.get("type").and_then(Value::as_str) else {
            tracing::warn!("Skipping mark without a 'type' tag");
            continue;
        };
        let Some(kind) = MarkType::parse(tag) else {
            tracing::debug!(tag, "Skipping unsupported mark");
            continue;
        };

        let href = item
            .get("attrs")
            .and_then(|attrs| attrs.get("href"))
            .and_then(Value::as_str)
            .map(str::to_owned);
        if kind == MarkType::Link && href.is_none() {
            tracing::warn!("Link mark without an 'attrs.href' target");
        }

        marks.push(Mark::new(kind, href));
    }
    marks
}

fn keep_list_items(children: Vec<Node>) -> Vec<Node> {
    children
        .into_iter()
        .filter(|child| {
            let keep = child.node_type() == NodeType::ListItem;
            if !keep {
                tracing::warn!(
                    node_type = %child.node_type(),
                    "Dropping bullet list child that is not a list item"
                );
            }
            keep
        })
        .collect()
}

/// First child row containing a `tableHeader` cell wins; later candidates
/// only produce a diagnostic.
fn detect_header_row(children: &[Node]) -> Option<usize> {
    let mut header_row = None;
    for (index, child) in children.iter().enumerate() {
        let has_header = child.node_type() == NodeType::TableRow
            && child
                .children()
                .iter()
                .any(|cell| cell.node_type() == NodeType::TableHeader);
        if has_header {
            if header_row.is_none() {
                header_row = Some(index);
            } else {
                tracing::warn!(index, "Table has more than one header row; keeping the first");
            }
        }
    }
    header_row
}

fn colspan_attr(attrs: &Map<String, Value>) -> usize {
    attrs
        .get("colspan")
        .and_then(Value::as_u64)
        .and_then(|colspan| usize::try_from(colspan).ok())
        .unwrap_or(1)
}
