//! Report composition.
//!
//! Pure rendering of the two captured harness outputs into one Markdown
//! comment body. Same inputs always produce a byte-identical message.

/// Upper bound on embedded harness output, per block, in characters.
///
/// GitHub rejects comment bodies over 65,536 characters; two capped blocks
/// plus the fixed prose stay comfortably under that. Outputs under the cap
/// are embedded verbatim.
pub const MAX_EMBED_CHARS: usize = 30_000;

/// A composed report comment body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportMessage {
    body: String,
}

impl ReportMessage {
    /// The Markdown body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Consume the message, yielding the body.
    pub fn into_body(self) -> String {
        self.body
    }
}

/// Compose the report from the statistical and counter-based captures.
///
/// The statistical block comes first with a caveat about shared-host noise;
/// the counter-based block follows, introduced as the deterministic
/// measurement. Embedded text is passed through unchanged apart from fence
/// sizing and the size cap.
pub fn compose(statistical_output: &str, counter_based_output: &str) -> ReportMessage {
    let mut body = String::new();

    body.push_str("👋 Benchmark results for this pull request are in.\n\n");
    body.push_str(
        "The wall-clock numbers below come from repeated timed runs on a shared \
         runner. They move with whatever else the host is doing, so read them as \
         indicative rather than exact:\n\n",
    );
    body.push_str(&code_block(statistical_output));
    body.push_str(
        "\nThe instruction and cache counts below come from a deterministic \
         counting harness. They do not vary with machine load and are the better \
         signal for small regressions:\n\n",
    );
    body.push_str(&code_block(counter_based_output));

    ReportMessage { body }
}

/// Wrap text in a fenced block, capping oversized input.
fn code_block(text: &str) -> String {
    let (kept, elided) = cap(text);
    let fence = fence_for(kept);

    let mut block = format!("{fence}\n{kept}");
    if !kept.is_empty() && !kept.ends_with('\n') {
        block.push('\n');
    }
    block.push_str(&fence);
    block.push('\n');

    if elided > 0 {
        block.push_str(&format!(
            "*(output capped at {MAX_EMBED_CHARS} characters; {elided} characters elided)*\n"
        ));
    }

    block
}

/// Truncate to the embed cap on a character boundary. Returns the kept
/// prefix and the number of characters elided.
fn cap(text: &str) -> (&str, usize) {
    match text.char_indices().nth(MAX_EMBED_CHARS) {
        Some((byte_index, _)) => (&text[..byte_index], text[byte_index..].chars().count()),
        None => (text, 0),
    }
}

/// A fence strictly longer than any backtick run in the text, so the text
/// survives verbatim inside the block. Minimum three backticks.
fn fence_for(text: &str) -> String {
    let longest_run = text
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);

    "`".repeat(longest_run.max(2) + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Content of the nth fenced block: the lines between the fence line
    /// and the matching closing fence line.
    fn extract_block(body: &str, index: usize) -> String {
        let mut blocks = Vec::new();
        let mut current: Option<(String, String)> = None;

        for line in body.lines() {
            match &mut current {
                None => {
                    if line.len() >= 3 && line.chars().all(|c| c == '`') {
                        current = Some((line.to_string(), String::new()));
                    }
                }
                Some((fence, content)) => {
                    if line == fence {
                        blocks.push(content.clone());
                        current = None;
                    } else {
                        content.push_str(line);
                        content.push('\n');
                    }
                }
            }
        }

        blocks[index].clone()
    }

    #[test]
    fn test_compose_is_deterministic() {
        let first = compose("times\n", "counts\n");
        let second = compose("times\n", "counts\n");
        assert_eq!(first, second);
        assert_eq!(first.body(), second.body());
    }

    #[test]
    fn test_compose_embeds_both_outputs_verbatim() {
        let message = compose("B-metrics\n", "A-metrics\n");
        assert!(message.body().contains("B-metrics"));
        assert!(message.body().contains("A-metrics"));
    }

    #[test]
    fn test_statistical_block_comes_first() {
        let message = compose("wall-clock summary\n", "event counts\n");
        let body = message.body();

        let statistical_at = body.find("wall-clock summary").expect("missing block");
        let counter_at = body.find("event counts").expect("missing block");
        assert!(statistical_at < counter_at);
    }

    #[test]
    fn test_block_round_trip() {
        let statistical = "bench proof/small  time: [1.23 ms 1.25 ms 1.27 ms]\n";
        let counter = "instructions: 12345\nl1 accesses: 678\n";

        let body = compose(statistical, counter).into_body();
        assert_eq!(extract_block(&body, 0), statistical);
        assert_eq!(extract_block(&body, 1), counter);
    }

    #[test]
    fn test_embedded_fences_survive() {
        let hostile = "before\n```\nfenced inside\n```\nafter\n";
        let body = compose(hostile, "counts\n").into_body();

        assert!(body.contains(hostile));
        assert_eq!(extract_block(&body, 0), hostile);
    }

    #[test]
    fn test_input_without_trailing_newline_is_contained() {
        let body = compose("no newline", "counts\n").into_body();
        assert!(body.contains("no newline"));
        assert_eq!(extract_block(&body, 0), "no newline\n");
    }

    #[test]
    fn test_empty_outputs_still_compose() {
        let body = compose("", "").into_body();
        assert_eq!(extract_block(&body, 0), "");
        assert_eq!(extract_block(&body, 1), "");
    }

    #[test]
    fn test_oversized_output_is_capped_with_marker() {
        let oversized = "x".repeat(MAX_EMBED_CHARS + 500);
        let body = compose(&oversized, "counts\n").into_body();

        assert!(!body.contains(&oversized));
        assert!(body.contains("500 characters elided"));
        assert!(body.len() < 2 * MAX_EMBED_CHARS);
    }

    #[test]
    fn test_output_at_cap_is_not_marked() {
        let at_cap = "y".repeat(MAX_EMBED_CHARS);
        let body = compose(&at_cap, "counts\n").into_body();

        assert!(body.contains(&at_cap));
        assert!(!body.contains("characters elided"));
    }

    #[test]
    fn test_cap_respects_char_boundaries() {
        let multibyte = "é".repeat(MAX_EMBED_CHARS + 10);
        let body = compose(&multibyte, "counts\n").into_body();
        assert!(body.contains("10 characters elided"));
    }

    #[test]
    fn test_fence_grows_past_longest_backtick_run() {
        assert_eq!(fence_for("plain"), "```");
        assert_eq!(fence_for("has ``` inside"), "````");
        assert_eq!(fence_for("has ````` inside"), "``````");
    }
}
