//! Typed node model for ADF document trees.
//!
//! A [`Node`] tree is built once from raw records by the factory in this
//! module and never mutated afterwards; rendering is a read-only traversal.
//! Each node exclusively owns its children (strict tree, no sharing).

mod factory;

use std::fmt;

use serde_json::{Map, Value};

/// Closed set of supported node type tags.
///
/// The variants map one-to-one onto the case-sensitive wire tags recognized
/// in a record's `type` field. Records with tags outside this set are hard
/// errors at construction, never silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Paragraph,
    Text,
    HardBreak,
    BulletList,
    ListItem,
    Panel,
    Table,
    TableRow,
    TableHeader,
    TableCell,
}

impl NodeType {
    /// Every supported node type, in wire-vocabulary order.
    pub const ALL: [NodeType; 10] = [
        NodeType::Paragraph,
        NodeType::Text,
        NodeType::HardBreak,
        NodeType::BulletList,
        NodeType::ListItem,
        NodeType::Panel,
        NodeType::Table,
        NodeType::TableRow,
        NodeType::TableHeader,
        NodeType::TableCell,
    ];

    /// Parse a wire tag. Exact, case-sensitive match.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "paragraph" => Some(NodeType::Paragraph),
            "text" => Some(NodeType::Text),
            "hardBreak" => Some(NodeType::HardBreak),
            "bulletList" => Some(NodeType::BulletList),
            "listItem" => Some(NodeType::ListItem),
            "panel" => Some(NodeType::Panel),
            "table" => Some(NodeType::Table),
            "tableRow" => Some(NodeType::TableRow),
            "tableHeader" => Some(NodeType::TableHeader),
            "tableCell" => Some(NodeType::TableCell),
            _ => None,
        }
    }

    /// The wire tag for this node type. Inverse of [`parse`](Self::parse).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NodeType::Paragraph => "paragraph",
            NodeType::Text => "text",
            NodeType::HardBreak => "hardBreak",
            NodeType::BulletList => "bulletList",
            NodeType::ListItem => "listItem",
            NodeType::Panel => "panel",
            NodeType::Table => "table",
            NodeType::TableRow => "tableRow",
            NodeType::TableHeader => "tableHeader",
            NodeType::TableCell => "tableCell",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of supported inline mark tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkType {
    Strong,
    Em,
    Link,
}

impl MarkType {
    /// Parse a wire tag. Exact, case-sensitive match.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "strong" => Some(MarkType::Strong),
            "em" => Some(MarkType::Em),
            "link" => Some(MarkType::Link),
            _ => None,
        }
    }
}

/// Inline formatting annotation attached to a text node.
#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    kind: MarkType,
    href: Option<String>,
}

impl Mark {
    pub(crate) fn new(kind: MarkType, href: Option<String>) -> Self {
        Self { kind, href }
    }

    /// The mark's type tag.
    #[must_use]
    pub fn kind(&self) -> MarkType {
        self.kind
    }

    /// Link target, if this is a `link` mark with a usable `attrs.href`.
    #[must_use]
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }
}

/// Per-type payload of a [`Node`].
///
/// Structural variants carry no data of their own; their shape lives in the
/// node's child list. Derived fields (`header_row`, `colspan`) are computed
/// once at construction.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Paragraph,
    Text { text: String, marks: Vec<Mark> },
    HardBreak,
    BulletList,
    ListItem,
    Panel,
    /// `header_row` is the index of the first child row containing a
    /// `tableHeader` cell, if any.
    Table { header_row: Option<usize> },
    TableRow,
    TableHeader { colspan: usize },
    TableCell { colspan: usize },
}

/// One typed node of a parsed ADF document.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    attrs: Map<String, Value>,
    children: Vec<Node>,
}

impl Node {
    /// The node's type tag.
    #[must_use]
    pub fn node_type(&self) -> NodeType {
        match self.kind {
            NodeKind::Paragraph => NodeType::Paragraph,
            NodeKind::Text { .. } => NodeType::Text,
            NodeKind::HardBreak => NodeType::HardBreak,
            NodeKind::BulletList => NodeType::BulletList,
            NodeKind::ListItem => NodeType::ListItem,
            NodeKind::Panel => NodeType::Panel,
            NodeKind::Table { .. } => NodeType::Table,
            NodeKind::TableRow => NodeType::TableRow,
            NodeKind::TableHeader { .. } => NodeType::TableHeader,
            NodeKind::TableCell { .. } => NodeType::TableCell,
        }
    }

    /// The node's typed payload.
    #[must_use]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Raw attribute mapping from the record's `attrs` field.
    #[must_use]
    pub fn attrs(&self) -> &Map<String, Value> {
        &self.attrs
    }

    /// Ordered child nodes.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Literal text content of a text node.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Whether a text node carries a `strong` mark.
    #[must_use]
    pub fn is_bold(&self) -> bool {
        self.has_mark(MarkType::Strong)
    }

    /// Whether a text node carries an `em` mark.
    #[must_use]
    pub fn is_italic(&self) -> bool {
        self.has_mark(MarkType::Em)
    }

    /// Link target of a text node's `link` mark, if present and usable.
    #[must_use]
    pub fn link_href(&self) -> Option<&str> {
        self.marks()
            .iter()
            .find(|mark| mark.kind() == MarkType::Link)
            .and_then(Mark::href)
    }

    /// Columns spanned by a header/cell node. 1 for every other type.
    #[must_use]
    pub fn colspan(&self) -> usize {
        match self.kind {
            NodeKind::TableHeader { colspan } | NodeKind::TableCell { colspan } => colspan,
            _ => 1,
        }
    }

    /// Column count of a row: sum of the colspans of its header/cell children.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.children
            .iter()
            .filter(|child| {
                matches!(
                    child.node_type(),
                    NodeType::TableHeader | NodeType::TableCell
                )
            })
            .map(Node::colspan)
            .sum()
    }

    /// Index of a table's header row, derived at construction.
    #[must_use]
    pub fn header_row(&self) -> Option<usize> {
        match self.kind {
            NodeKind::Table { header_row } => header_row,
            _ => None,
        }
    }

    fn marks(&self) -> &[Mark] {
        match &self.kind {
            NodeKind::Text { marks, .. } => marks,
            _ => &[],
        }
    }

    fn has_mark(&self, kind: MarkType) -> bool {
        self.marks().iter().any(|mark| mark.kind() == kind)
    }
}
