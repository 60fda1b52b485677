// SPDX-FileCopyrightText: 2026 Folio Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Frontmatter parsing for project pages.
//!
//! A page may begin with a metadata block delimited by `---` lines:
//!
//! ```text
//! ---
//! title: Clay Bust
//! publishedDate: 20240307
//! image: "cover.webp"
//! ---
//! Body markdown...
//! ```
//!
//! This is deliberately not YAML. Each line is split at its first colon;
//! values are trimmed and lose one surrounding quote character. Keys keep
//! their camelCase spelling (`publishedDate`, `lastUpdated`, `externalLink`)
//! because that is what the content files use.

use std::collections::BTreeMap;

/// A parsed page: metadata block plus the remaining markdown body.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub meta: BTreeMap<String, String>,
    pub body: String,
}

/// Split a page into frontmatter metadata and body.
///
/// A frontmatter block exists only when the first line is `---` (trailing
/// whitespace allowed) and a later `---` line closes it before the end of
/// input. Anything else, an unterminated block included, yields empty
/// metadata and the whole text as body. CRLF line endings are normalized
/// to LF first.
pub fn parse_document(text: &str) -> Document {
    let text = text.replace("\r\n", "\n");
    let lines: Vec<&str> = text.split('\n').collect();

    if !is_delimiter(lines[0]) {
        return Document { meta: BTreeMap::new(), body: text };
    }

    // Find the closing delimiter. It must be followed by a newline, so the
    // final split element (after the last newline) cannot close the block.
    // It also cannot sit directly under the opener: the block supplies the
    // newline that precedes the closing `---`, so at least one line (even an
    // empty one) must come between the two delimiters.
    let mut close = None;
    for i in 2..lines.len().saturating_sub(1) {
        if is_delimiter(lines[i]) {
            close = Some(i);
            break;
        }
    }

    let Some(close) = close else {
        return Document { meta: BTreeMap::new(), body: text };
    };

    let mut meta = BTreeMap::new();
    for line in &lines[1..close] {
        let Some(colon) = line.find(':') else { continue };
        if colon == 0 {
            continue;
        }
        let key = line[..colon].trim();
        let value = strip_quotes(line[colon + 1..].trim());
        meta.insert(key.to_string(), value.to_string());
    }

    Document {
        meta,
        body: lines[close + 1..].join("\n"),
    }
}

/// A delimiter line is `---` with nothing but whitespace after it.
fn is_delimiter(line: &str) -> bool {
    line.strip_prefix("---")
        .is_some_and(|rest| rest.chars().all(char::is_whitespace))
}

/// Remove one leading and one trailing quote character, independently.
///
/// Matches the content convention where values may be wrapped in `"` or `'`;
/// mismatched pairs still lose both characters.
fn strip_quotes(value: &str) -> &str {
    let value = value
        .strip_prefix('"')
        .or_else(|| value.strip_prefix('\''))
        .unwrap_or(value);
    value
        .strip_suffix('"')
        .or_else(|| value.strip_suffix('\''))
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_frontmatter() {
        let doc = parse_document("---\ntitle: Clay Bust\npublishedDate: 20240307\n---\n# Body\n");
        assert_eq!(doc.meta.get("title").map(String::as_str), Some("Clay Bust"));
        assert_eq!(doc.meta.get("publishedDate").map(String::as_str), Some("20240307"));
        assert_eq!(doc.body, "# Body\n");
    }

    #[test]
    fn no_frontmatter() {
        let doc = parse_document("# Just markdown\n\nText.\n");
        assert!(doc.meta.is_empty());
        assert_eq!(doc.body, "# Just markdown\n\nText.\n");
    }

    #[test]
    fn unterminated_block_is_body() {
        let doc = parse_document("---\ntitle: Lost\nNo closing delimiter here.\n");
        assert!(doc.meta.is_empty());
        assert!(doc.body.starts_with("---\n"));
    }

    #[test]
    fn closing_delimiter_needs_trailing_newline() {
        // The final line of input cannot close the block.
        let doc = parse_document("---\ntitle: Edge\n---");
        assert!(doc.meta.is_empty());
    }

    #[test]
    fn value_keeps_embedded_colons() {
        let doc = parse_document("---\nexternalLink: https://example.com/x\n---\n");
        assert_eq!(
            doc.meta.get("externalLink").map(String::as_str),
            Some("https://example.com/x")
        );
    }

    #[test]
    fn quotes_are_stripped_once() {
        let doc = parse_document(
            "---\na: \"double\"\nb: 'single'\nc: \"mismatched'\nd: \"\"inner\"\"\n---\n",
        );
        assert_eq!(doc.meta.get("a").map(String::as_str), Some("double"));
        assert_eq!(doc.meta.get("b").map(String::as_str), Some("single"));
        assert_eq!(doc.meta.get("c").map(String::as_str), Some("mismatched"));
        // Only the outermost pair goes
        assert_eq!(doc.meta.get("d").map(String::as_str), Some("\"inner\""));
    }

    #[test]
    fn lines_without_colon_are_ignored() {
        let doc = parse_document("---\njust words\n: leading colon\ntitle: Ok\n---\n");
        assert_eq!(doc.meta.len(), 1);
        assert_eq!(doc.meta.get("title").map(String::as_str), Some("Ok"));
    }

    #[test]
    fn duplicate_keys_last_wins() {
        let doc = parse_document("---\ntitle: First\ntitle: Second\n---\n");
        assert_eq!(doc.meta.get("title").map(String::as_str), Some("Second"));
    }

    #[test]
    fn crlf_input_is_normalized() {
        let doc = parse_document("---\r\ntitle: Windows\r\n---\r\nBody\r\n");
        assert_eq!(doc.meta.get("title").map(String::as_str), Some("Windows"));
        assert_eq!(doc.body, "Body\n");
    }

    #[test]
    fn delimiter_with_extra_text_does_not_close() {
        let doc = parse_document("---\ntitle: T\n--- not a delimiter\n---\nBody\n");
        assert_eq!(doc.meta.get("title").map(String::as_str), Some("T"));
        // The bogus line stays inside the metadata block and parses as nothing
        assert_eq!(doc.body, "Body\n");
    }

    #[test]
    fn empty_body_after_block() {
        let doc = parse_document("---\ntitle: T\n---\n");
        assert_eq!(doc.body, "");
    }

    #[test]
    fn immediately_closed_block_is_not_frontmatter() {
        // The closer needs a newline supplied by the block itself, so a
        // delimiter directly under the opener does not count...
        let doc = parse_document("---\n---\nBody\n");
        assert!(doc.meta.is_empty());
        assert!(doc.body.starts_with("---\n"));

        // ...but one blank line between them makes an empty block.
        let doc = parse_document("---\n\n---\nBody\n");
        assert!(doc.meta.is_empty());
        assert_eq!(doc.body, "Body\n");
    }

    #[test]
    fn four_dashes_is_not_a_delimiter() {
        let doc = parse_document("----\ntitle: T\n---\n");
        assert!(doc.meta.is_empty());
        assert!(doc.body.starts_with("----"));
    }
}
