/// Splits a multi-line block into URLs: one per non-blank line, trimmed.
///
/// No validation, scheme inference or deduplication is done and order is kept.
pub fn parse_url_block(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_are_dropped() {
        let urls = parse_url_block("https://a.test\n\nhttps://b.test");
        assert_eq!(urls, vec!["https://a.test", "https://b.test"]);
    }

    #[test]
    fn test_lines_are_trimmed_and_kept_in_order() {
        let urls = parse_url_block("  https://b.test  \r\n\t\n https://a.test\r\nhttps://b.test\n");
        assert_eq!(
            urls,
            vec!["https://b.test", "https://a.test", "https://b.test"]
        );
    }

    #[test]
    fn test_no_validation() {
        let urls = parse_url_block("example.com\nnot a url");
        assert_eq!(urls, vec!["example.com", "not a url"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_url_block("").is_empty());
        assert!(parse_url_block(" \n\n\t\n").is_empty());
    }
}
