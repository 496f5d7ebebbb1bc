//! Positional rendering context.

use crate::node::NodeType;

/// Position of one node among its siblings, as seen by its presenter.
///
/// Computed once per sibling position while the presenter tree is built and
/// never mutated. The rendering rules read it to decide spacing: Markdown
/// has no syntax for "paragraph inside list item" or "blank line unless the
/// previous sibling was a hard break", so those decisions live here instead
/// of in the node tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    /// Whether the node is its parent's first child.
    pub is_first_child: bool,
    /// Whether the immediately preceding sibling was a hard break.
    pub prev_sibling_was_hard_break: bool,
    /// Type of the parent node, `None` at the document root.
    pub parent_type: Option<NodeType>,
}

impl RenderContext {
    /// Context for a top-level document node.
    #[must_use]
    pub fn root() -> Self {
        Self {
            is_first_child: true,
            prev_sibling_was_hard_break: false,
            parent_type: None,
        }
    }

    /// Context for the child at `index`, given the type of the sibling
    /// before it (skipped siblings still count as siblings).
    pub(crate) fn for_child(
        parent: NodeType,
        index: usize,
        prev_sibling: Option<NodeType>,
    ) -> Self {
        Self {
            is_first_child: index == 0,
            prev_sibling_was_hard_break: prev_sibling == Some(NodeType::HardBreak),
            parent_type: Some(parent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_context() {
        let ctx = RenderContext::root();
        assert!(ctx.is_first_child);
        assert!(!ctx.prev_sibling_was_hard_break);
        assert_eq!(ctx.parent_type, None);
    }

    #[test]
    fn test_first_child_context() {
        let ctx = RenderContext::for_child(NodeType::Paragraph, 0, None);
        assert!(ctx.is_first_child);
        assert!(!ctx.prev_sibling_was_hard_break);
        assert_eq!(ctx.parent_type, Some(NodeType::Paragraph));
    }

    #[test]
    fn test_sibling_after_hard_break() {
        let ctx = RenderContext::for_child(NodeType::Paragraph, 2, Some(NodeType::HardBreak));
        assert!(!ctx.is_first_child);
        assert!(ctx.prev_sibling_was_hard_break);
    }

    #[test]
    fn test_sibling_after_text() {
        let ctx = RenderContext::for_child(NodeType::Panel, 1, Some(NodeType::Text));
        assert!(!ctx.is_first_child);
        assert!(!ctx.prev_sibling_was_hard_break);
        assert_eq!(ctx.parent_type, Some(NodeType::Panel));
    }
}
