//! Placeholder expression scanning.
//!
//! An expression is a substring delimited by `«` and `»`, both included.
//! Expressions can contain new lines (`\n` or `\r\n`).

use regex::Regex;

/// Find every placeholder expression in `text`, left to right.
///
/// Matching is non-greedy: each `«` closes at the nearest following `»`, so
/// `«a»«b»` yields two expressions. An opening delimiter that is never closed
/// yields no match and no error.
pub fn scan(text: &str) -> Vec<String> {
    let re = Regex::new(r"(?s)«.+?»").expect("valid regex");
    re.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_without_delimiters_yields_nothing() {
        assert!(scan("plain text, no placeholders").is_empty());
        assert!(scan("").is_empty());
    }

    #[test]
    fn adjacent_expressions_match_separately() {
        assert_eq!(scan("«a»«b»"), vec!["«a»", "«b»"]);
    }

    #[test]
    fn expressions_can_span_lines() {
        assert_eq!(scan("«line1\nline2»"), vec!["«line1\nline2»"]);
        assert_eq!(scan("«line1\r\nline2»"), vec!["«line1\r\nline2»"]);
    }

    #[test]
    fn dangling_opener_is_ignored() {
        assert!(scan("before « after, never closed").is_empty());
        assert_eq!(scan("«ok» and « dangling"), vec!["«ok»"]);
    }

    #[test]
    fn expressions_keep_scan_order() {
        let found = scan("Dear «name»,\n«boolean:PS:P.S. see you»\nBye «name»");
        assert_eq!(found, vec!["«name»", "«boolean:PS:P.S. see you»", "«name»"]);
    }
}
