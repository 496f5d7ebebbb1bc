//! Pure Markdown string helpers.

/// Split trailing ASCII spaces off `text`.
///
/// Returns the trimmed slice and the number of spaces removed. Inline
/// formatting markers must close before trailing whitespace
/// (`"word "` bolded is `"**word** "`, never `"**word **"`), so the
/// wrapping helpers pull spaces out first and re-append them after.
///
/// # Example
///
/// ```
/// use adf2md::markdown::remove_trailing_spaces;
///
/// assert_eq!(remove_trailing_spaces("test1 "), ("test1", 1));
/// assert_eq!(remove_trailing_spaces("   "), ("", 3));
/// ```
#[must_use]
pub fn remove_trailing_spaces(text: &str) -> (&str, usize) {
    let trimmed = text.trim_end_matches(' ');
    (trimmed, text.len() - trimmed.len())
}

/// Wrap `text` in bold markers, keeping trailing spaces outside them.
#[must_use]
pub fn bold(text: &str) -> String {
    wrap(text, "**")
}

/// Wrap `text` in italic markers, keeping trailing spaces outside them.
#[must_use]
pub fn italic(text: &str) -> String {
    wrap(text, "*")
}

fn wrap(text: &str, marker: &str) -> String {
    let (core, spaces) = remove_trailing_spaces(text);
    format!("{marker}{core}{marker}{}", " ".repeat(spaces))
}

/// Inline link syntax: `[text](href)`.
#[must_use]
pub fn link(text: &str, href: &str) -> String {
    format!("[{text}]({href})")
}

/// `#`-prefixed heading line. Levels are clamped to 1..=6.
#[must_use]
pub fn heading(level: usize, text: &str) -> String {
    format!("{} {text}", "#".repeat(level.clamp(1, 6)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_trailing_spaces() {
        let cases = [
            ("test", "test", 0),
            ("test1 ", "test1", 1),
            ("test2  ", "test2", 2),
            ("test3   ", "test3", 3),
            (" test4", " test4", 0),
            ("  test5", "  test5", 0),
            (" test1 ", " test1", 1),
            ("  test2  ", "  test2", 2),
            ("", "", 0),
            (" ", "", 1),
            ("  ", "", 2),
            ("   ", "", 3),
        ];

        for (input, expected, count) in cases {
            assert_eq!(remove_trailing_spaces(input), (expected, count));
        }
    }

    #[test]
    fn test_bold() {
        assert_eq!(bold("word"), "**word**");
    }

    #[test]
    fn test_bold_preserves_trailing_space() {
        assert_eq!(bold("word "), "**word** ");
    }

    #[test]
    fn test_italic_preserves_trailing_spaces() {
        assert_eq!(italic("word  "), "*word*  ");
    }

    #[test]
    fn test_bold_then_italic_nests() {
        assert_eq!(italic(&bold("word")), "***word***");
        assert_eq!(italic(&bold("word ")), "***word*** ");
    }

    #[test]
    fn test_link() {
        assert_eq!(
            link("docs", "https://example.com"),
            "[docs](https://example.com)"
        );
    }

    #[test]
    fn test_heading() {
        assert_eq!(heading(1, "Title"), "# Title");
        assert_eq!(heading(3, "Section"), "### Section");
    }

    #[test]
    fn test_heading_clamps_level() {
        assert_eq!(heading(0, "Title"), "# Title");
        assert_eq!(heading(9, "Deep"), "###### Deep");
    }
}
