//! Atlassian Document Format (ADF) to Markdown conversion.
//!
//! Converts already-decoded ADF records ([`serde_json::Value`]) into Markdown
//! in two passes: the node factory builds a typed, immutable [`Node`] tree
//! from the raw records, then an ephemeral [`Presenter`] tree walks it and
//! produces text. Each presenter receives a [`RenderContext`] describing its
//! position among siblings (first child, previous sibling was a hard break,
//! parent type), which drives the spacing and nesting rules Markdown has no
//! native syntax for.
//!
//! JSON text decoding, file I/O, and Markdown→ADF conversion are out of
//! scope; callers hand in decoded values and get a string back.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//!
//! let doc = json!({
//!     "type": "paragraph",
//!     "content": [
//!         { "type": "text", "text": "plain " },
//!         { "type": "text", "text": "bold", "marks": [{ "type": "strong" }] },
//!     ],
//! });
//!
//! assert_eq!(adf2md::adf_to_markdown(&doc), "plain **bold**");
//! ```

pub mod convert;
pub mod error;
pub mod markdown;
pub mod node;
pub mod presenter;

pub use convert::{adf_to_markdown, convert_document};
pub use error::{ConvertError, NodeError, PresenterError};
pub use node::{Mark, MarkType, Node, NodeKind, NodeType};
pub use presenter::{Presenter, RenderContext};
