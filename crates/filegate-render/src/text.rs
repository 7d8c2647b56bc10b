use crate::FailureBlock;

/// Closing sentence used when a failing rule has no custom message.
pub const DEFAULT_FAILURE_MESSAGE: &str =
    "Some files produce errors, please check the error message for the individual file above.";

/// Build the single combined failure body from every failing rule's block.
///
/// Each block renders as its diagnostic lines, one per failing item, followed
/// by the rule's custom message or the default sentence. Blocks are joined by
/// a blank line. Returns `None` when nothing failed; partial failures are
/// never surfaced outside this one body.
pub fn render_failure_message(blocks: &[FailureBlock]) -> Option<String> {
    if blocks.is_empty() {
        return None;
    }

    let mut bodies = Vec::with_capacity(blocks.len());
    for block in blocks {
        let mut body = String::new();
        for line in &block.lines {
            body.push_str(line);
            body.push('\n');
        }
        body.push_str(block.message.as_deref().unwrap_or(DEFAULT_FAILURE_MESSAGE));
        bodies.push(body);
    }

    Some(bodies.join("\n\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_blocks_means_no_message() {
        assert_eq!(render_failure_message(&[]), None);
    }

    #[test]
    fn single_block_uses_default_sentence() {
        let blocks = vec![FailureBlock {
            lines: vec![
                "a.txt : Doesn't contain: \"xyz\"".to_string(),
                "b.txt : Not a file".to_string(),
            ],
            message: None,
        }];

        let body = render_failure_message(&blocks).expect("failure body");
        assert_eq!(
            body,
            format!(
                "a.txt : Doesn't contain: \"xyz\"\nb.txt : Not a file\n{}",
                DEFAULT_FAILURE_MESSAGE
            )
        );
    }

    #[test]
    fn custom_message_replaces_default() {
        let blocks = vec![FailureBlock {
            lines: vec!["a.txt : Not a file".to_string()],
            message: Some("see CONTRIBUTING.md".to_string()),
        }];

        let body = render_failure_message(&blocks).expect("failure body");
        assert!(body.ends_with("see CONTRIBUTING.md"));
        assert!(!body.contains(DEFAULT_FAILURE_MESSAGE));
    }

    #[test]
    fn blocks_join_with_a_blank_line() {
        let blocks = vec![
            FailureBlock {
                lines: vec!["first".to_string()],
                message: None,
            },
            FailureBlock {
                lines: vec!["second".to_string()],
                message: Some("custom".to_string()),
            },
        ];

        let body = render_failure_message(&blocks).expect("failure body");
        assert_eq!(
            body,
            format!("first\n{}\n\nsecond\ncustom", DEFAULT_FAILURE_MESSAGE)
        );
    }
}
