//! Render orchestrator: raw JSON documents in, joined Markdown out.
//!
//! This is the single recovery boundary for structural errors: a document
//! that fails to parse or render becomes a diagnostic and is skipped, never
//! aborting the rest of a batch.

use serde_json::Value;

use crate::error::ConvertError;
use crate::node::Node;
use crate::presenter::{Presenter, RenderContext};

/// Convert one raw document record, surfacing any failure.
pub fn convert_document(value: &Value) -> Result<String, ConvertError> {
    let node = Node::from_value(value)?;
    let presenter = Presenter::new(&node, RenderContext::root())?;
    Ok(presenter.render())
}

/// Convert a raw document, or an array of documents, to Markdown.
///
/// An array is an ordered batch: each element is converted independently,
/// elements that fail are skipped with a warning, and the surviving outputs
/// are joined with a blank line in input order. Any other value is treated
/// as a single document. Zero surviving documents yield an empty string —
/// a valid result, not an error.
#[must_use]
pub fn adf_to_markdown(value: &Value) -> String {
    let records = match value {
        Value::Array(records) => records.as_slice(),
        single => std::slice::from_ref(single),
    };

    let mut rendered = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        match convert_document(record) {
            Ok(markdown) => rendered.push(markdown),
            Err(e) => {
                tracing::warn!(index, error = %e, "Skipping document that failed to convert");
            }
        }
    }

    if rendered.is_empty() {
        tracing::warn!("No documents converted; producing empty output");
        return String::new();
    }
    rendered.join("\n\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_single_document() {
        let doc = json!({
            "type": "paragraph",
            "content": [{ "type": "text", "text": "hello" }],
        });
        assert_eq!(adf_to_markdown(&doc), "hello");
    }

    #[test]
    fn test_batch_joined_with_blank_line() {
        let docs = json!([
            { "type": "paragraph", "content": [{ "type": "text", "text": "one" }] },
            { "type": "paragraph", "content": [{ "type": "text", "text": "two" }] },
        ]);
        assert_eq!(adf_to_markdown(&docs), "one\n\ntwo");
    }

    #[test]
    fn test_empty_batch() {
        assert_eq!(adf_to_markdown(&json!([])), "");
    }

    #[test]
    fn test_failing_document_is_skipped() {
        let docs = json!([
            { "type": "paragraph", "content": [{ "type": "text", "text": "one" }] },
            { "type": "mediaSingle" },
            { "type": "paragraph", "content": [{ "type": "text", "text": "two" }] },
        ]);
        assert_eq!(adf_to_markdown(&docs), "one\n\ntwo");
    }

    #[test]
    fn test_single_failing_document_yields_empty_output() {
        assert_eq!(adf_to_markdown(&json!({ "type": "mediaSingle" })), "");
    }

    #[test]
    fn test_convert_document_surfaces_errors() {
        let err = convert_document(&json!({ "type": "mediaSingle" })).unwrap_err();
        assert!(matches!(err, ConvertError::Node(_)));
    }

    // End-to-end fixtures covering the element mix of real documents.

    #[test]
    fn test_fixture_bold_italic_link_paragraph() {
        let doc = json!({
            "type": "paragraph",
            "content": [
                { "type": "text", "text": "see " },
                {
                    "type": "text",
                    "text": "the docs",
                    "marks": [
                        { "type": "em" },
                        { "type": "link", "attrs": { "href": "https://example.com/docs" } },
                    ],
                },
                { "type": "text", "text": " for " },
                { "type": "text", "text": "details", "marks": [{ "type": "strong" }] },
            ],
        });

        assert_eq!(
            adf_to_markdown(&doc),
            "see [*the docs*](https://example.com/docs) for **details**"
        );
    }

    #[test]
    fn test_fixture_panel_with_hard_break() {
        let doc = json!({
            "type": "panel",
            "content": [
                {
                    "type": "paragraph",
                    "content": [
                        { "type": "text", "text": "note" },
                        { "type": "hardBreak" },
                        { "type": "text", "text": "continued" },
                    ],
                },
                {
                    "type": "paragraph",
                    "content": [{ "type": "text", "text": "postscript" }],
                },
            ],
        });

        assert_eq!(adf_to_markdown(&doc), "> note  \n> continued\n> postscript");
    }

    #[test]
    fn test_fixture_list_with_nested_paragraphs() {
        let doc = json!({
            "type": "bulletList",
            "content": [{
                "type": "listItem",
                "content": [
                    { "type": "paragraph", "content": [{ "type": "text", "text": "first" }] },
                    { "type": "paragraph", "content": [{ "type": "text", "text": "second" }] },
                ],
            }],
        });

        // Paragraphs inside a list item never get a leading newline.
        assert_eq!(adf_to_markdown(&doc), "+ firstsecond");
    }

    #[test]
    fn test_fixture_table_batch() {
        let table = json!({
            "type": "table",
            "content": [
                {
                    "type": "tableRow",
                    "content": [{
                        "type": "tableHeader",
                        "content": [{
                            "type": "paragraph",
                            "content": [{ "type": "text", "text": "Name" }],
                        }],
                    }],
                },
                {
                    "type": "tableRow",
                    "content": [{
                        "type": "tableCell",
                        "content": [{
                            "type": "paragraph",
                            "content": [{ "type": "text", "text": "adf2md" }],
                        }],
                    }],
                },
            ],
        });
        let paragraph = json!({
            "type": "paragraph",
            "content": [{ "type": "text", "text": "trailer" }],
        });

        assert_eq!(
            adf_to_markdown(&json!([table, paragraph])),
            "| Name |\n| --- |\n| adf2md |\n\n\ntrailer"
        );
    }
}
