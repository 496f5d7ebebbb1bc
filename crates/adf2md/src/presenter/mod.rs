//! Presenter tree: per-type Markdown rendering with positional context.
//!
//! Presenters are the ephemeral rendering counterpart of the node tree:
//! built once per render call, walked bottom-up to produce text, then
//! discarded. Each presenter borrows its node and carries the
//! [`RenderContext`] computed from its sibling position.

mod context;

pub use context::RenderContext;

use crate::error::PresenterError;
use crate::markdown;
use crate::node::{Node, NodeKind, NodeType};

/// Rendering counterpart of one [`Node`].
pub struct Presenter<'a> {
    node: &'a Node,
    context: RenderContext,
    children: Vec<Presenter<'a>>,
}

impl<'a> Presenter<'a> {
    /// Build the presenter tree for `node`.
    ///
    /// Child presenters are built left to right; each child's context is
    /// derived from its index, the type of the sibling before it, and this
    /// node's type. A child whose presenter cannot be built is skipped with
    /// a diagnostic so its siblings still render.
    pub fn new(node: &'a Node, context: RenderContext) -> Result<Self, PresenterError> {
        // Every supported node type currently has a rendering rule. The
        // match stays exhaustive so a new NodeType variant cannot compile
        // without one.
        match node.node_type() {
            NodeType::Paragraph
            | NodeType::Text
            | NodeType::HardBreak
            | NodeType::BulletList
            | NodeType::ListItem
            | NodeType::Panel
            | NodeType::Table
            | NodeType::TableRow
            | NodeType::TableHeader
            | NodeType::TableCell => {}
        }

        let mut children = Vec::with_capacity(node.children().len());
        let mut prev_sibling = None;
        for (index, child) in node.children().iter().enumerate() {
            let child_context = RenderContext::for_child(node.node_type(), index, prev_sibling);
            match Presenter::new(child, child_context) {
                Ok(presenter) => children.push(presenter),
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        node_type = %child.node_type(),
                        "Skipping child node without a renderer"
                    );
                }
            }
            prev_sibling = Some(child.node_type());
        }

        Ok(Self {
            node,
            context,
            children,
        })
    }

    /// Render this subtree to Markdown.
    ///
    /// Pure function of the node, the children's rendered text, and the
    /// context; the node tree is never mutated.
    #[must_use]
    pub fn render(&self) -> String {
        match self.node.kind() {
            NodeKind::Paragraph => self.render_paragraph(),
            NodeKind::Text { text, .. } => self.render_text(text),
            NodeKind::HardBreak => "  \n".to_owned(),
            NodeKind::BulletList => self.render_bullet_list(),
            NodeKind::ListItem | NodeKind::TableHeader { .. } | NodeKind::TableCell { .. } => {
                self.render_children()
            }
            NodeKind::Panel => self.render_panel(),
            NodeKind::Table { header_row } => self.render_table(*header_row),
            NodeKind::TableRow => self.render_table_row(),
        }
    }

    fn render_children(&self) -> String {
        self.children.iter().map(Presenter::render).collect()
    }

    /// Leading newline before the body, unless this paragraph starts its
    /// parent, follows a hard break, or sits inside a list item.
    fn render_paragraph(&self) -> String {
        let body = self.render_children();
        let suppress_newline = self.context.is_first_child
            || self.context.prev_sibling_was_hard_break
            || self.context.parent_type == Some(NodeType::ListItem);
        if suppress_newline {
            body
        } else {
            format!("\n{body}")
        }
    }

    /// Bold applied before italic (bold nests inside italic); a link mark
    /// wraps the already-formatted text.
    fn render_text(&self, text: &str) -> String {
        let mut rendered = text.to_owned();
        if self.node.is_bold() {
            rendered = markdown::bold(&rendered);
        }
        if self.node.is_italic() {
            rendered = markdown::italic(&rendered);
        }
        if let Some(href) = self.node.link_href() {
            rendered = markdown::link(&rendered, href);
        }
        rendered
    }

    fn render_bullet_list(&self) -> String {
        self.children
            .iter()
            .map(|item| format!("+ {}", item.render()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_panel(&self) -> String {
        let body = self.render_children();
        body.lines()
            .map(|line| format!("> {line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_table(&self, header_row: Option<usize>) -> String {
        let mut out = String::new();
        for (index, row) in self.children.iter().enumerate() {
            out.push_str(&row.render());
            if header_row == Some(index) {
                out.push_str(&header_separator(row.node.column_count()));
            }
        }
        out
    }

    fn render_table_row(&self) -> String {
        let cells: Vec<String> = self.children.iter().map(Presenter::render).collect();
        format!("| {} |\n", cells.join(" | "))
    }
}

/// `| --- | --- | ... |` line with one `---` per column.
fn header_separator(columns: usize) -> String {
    format!("| {} |\n", vec!["---"; columns].join(" | "))
}
