//! Response formatting: pure text transforms over raw model output.

use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;

/// Opening tag of an internal reasoning segment.
const THINK_OPEN: &str = "<think>";
/// Closing tag of an internal reasoning segment.
const THINK_CLOSE: &str = "</think>";
/// Prefix marker some vision backends prepend to their raw output.
const RESPONSE_MARKER: &str = "🧠 Response:";
/// Delimiter introducing the assistant's actual reply in chat-formatted
/// model output.
const ASSISTANT_DELIMITER: &str = "Assistant:";

fn think_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            "(?s){}.*?{}",
            regex::escape(THINK_OPEN),
            regex::escape(THINK_CLOSE)
        ))
        .expect("think regex is valid")
    })
}

/// Remove every `<think>...</think>` segment from `text`.
///
/// Matching is non-greedy, case-sensitive, and spans newlines. Tags and
/// everything between them are dropped; text outside is preserved verbatim,
/// then trimmed at the ends. Unmatched or absent tags leave the text
/// unchanged (trimmed).
pub fn strip_reasoning(text: &str) -> String {
    think_regex().replace_all(text, "").trim().to_string()
}

/// Extract the assistant's reply from raw chat-formatted model output.
///
/// Drops a leading `🧠 Response:` marker if present at the very start, then
/// returns everything after the first literal `Assistant:` (trimmed). When
/// the delimiter is absent the marker-stripped text is returned trimmed.
pub fn extract_reply(text: &str) -> String {
    let cleaned = text.trim();
    let cleaned = cleaned
        .strip_prefix(RESPONSE_MARKER)
        .unwrap_or(cleaned)
        .trim_start();

    match cleaned.find(ASSISTANT_DELIMITER) {
        Some(pos) => cleaned[pos + ASSISTANT_DELIMITER.len()..].trim().to_string(),
        None => cleaned.trim().to_string(),
    }
}

/// Pick one template from `pool`, uniformly at random.
///
/// A fixed `seed` makes the choice deterministic for tests; `None` draws
/// from the thread RNG.
pub fn pick_template<'a>(pool: &[&'a str], seed: Option<u64>) -> &'a str {
    if pool.is_empty() {
        return "";
    }
    let index = match seed {
        Some(seed) => StdRng::seed_from_u64(seed).gen_range(0..pool.len()),
        None => rand::thread_rng().gen_range(0..pool.len()),
    };
    pool[index]
}

/// Substitute the `{text}` placeholder in a template.
pub fn fill_template(template: &str, text: &str) -> String {
    template.replace("{text}", text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::ACK_TEMPLATES;

    // ---- strip_reasoning ----

    #[test]
    fn test_strip_reasoning_basic() {
        assert_eq!(strip_reasoning("a<think>b</think>c"), "ac");
    }

    #[test]
    fn test_strip_reasoning_multiple_segments() {
        assert_eq!(
            strip_reasoning("x<think>1</think>y<think>2</think>z"),
            "xyz"
        );
    }

    #[test]
    fn test_strip_reasoning_spans_newlines() {
        let input = "before\n<think>line one\nline two</think>\nafter";
        assert_eq!(strip_reasoning(input), "before\n\nafter");
    }

    #[test]
    fn test_strip_reasoning_is_non_greedy() {
        let input = "<think>a</think>keep<think>b</think>";
        assert_eq!(strip_reasoning(input), "keep");
    }

    #[test]
    fn test_strip_reasoning_no_tags_trims_only() {
        assert_eq!(strip_reasoning("  plain text  "), "plain text");
    }

    #[test]
    fn test_strip_reasoning_unmatched_open_tag_unchanged() {
        assert_eq!(strip_reasoning("a<think>b"), "a<think>b");
    }

    #[test]
    fn test_strip_reasoning_case_sensitive() {
        assert_eq!(strip_reasoning("a<THINK>b</THINK>c"), "a<THINK>b</THINK>c");
    }

    #[test]
    fn test_strip_reasoning_whole_text_is_reasoning() {
        assert_eq!(strip_reasoning("<think>all of it</think>"), "");
    }

    // ---- extract_reply ----

    #[test]
    fn test_extract_reply_with_marker_and_delimiter() {
        let raw = "🧠 Response: User: is there a graph? Assistant: Yes.";
        assert_eq!(extract_reply(raw), "Yes.");
    }

    #[test]
    fn test_extract_reply_delimiter_spans_to_end() {
        let raw = "User: question Assistant: first line\nsecond line\n";
        assert_eq!(extract_reply(raw), "first line\nsecond line");
    }

    #[test]
    fn test_extract_reply_first_delimiter_wins() {
        let raw = "Assistant: outer Assistant: inner";
        assert_eq!(extract_reply(raw), "outer Assistant: inner");
    }

    #[test]
    fn test_extract_reply_no_delimiter_returns_cleaned() {
        let raw = "🧠 Response: just a plain description";
        assert_eq!(extract_reply(raw), "just a plain description");
    }

    #[test]
    fn test_extract_reply_no_marker_no_delimiter() {
        assert_eq!(extract_reply("  hello there  "), "hello there");
    }

    #[test]
    fn test_extract_reply_marker_only_at_start() {
        // The marker mid-text is not a prefix and stays put.
        let raw = "leading 🧠 Response: tail";
        assert_eq!(extract_reply(raw), "leading 🧠 Response: tail");
    }

    #[test]
    fn test_extract_reply_delimiter_is_case_sensitive() {
        let raw = "assistant: lowercase does not count";
        assert_eq!(extract_reply(raw), "assistant: lowercase does not count");
    }

    // ---- pick_template / fill_template ----

    #[test]
    fn test_pick_template_seeded_is_deterministic() {
        let a = pick_template(&ACK_TEMPLATES, Some(7));
        let b = pick_template(&ACK_TEMPLATES, Some(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_pick_template_comes_from_pool() {
        for seed in 0..50 {
            let chosen = pick_template(&ACK_TEMPLATES, Some(seed));
            assert!(ACK_TEMPLATES.contains(&chosen));
        }
    }

    #[test]
    fn test_pick_template_covers_pool_across_seeds() {
        let mut seen = std::collections::HashSet::new();
        for seed in 0..500 {
            seen.insert(pick_template(&ACK_TEMPLATES, Some(seed)));
        }
        // Uniform choice over 10 variants should hit every one in 500 draws.
        assert_eq!(seen.len(), ACK_TEMPLATES.len());
    }

    #[test]
    fn test_pick_template_empty_pool() {
        assert_eq!(pick_template(&[], Some(1)), "");
    }

    #[test]
    fn test_fill_template() {
        assert_eq!(
            fill_template("Result: 👇\n{text}", "hello"),
            "Result: 👇\nhello"
        );
    }

    #[test]
    fn test_fill_template_without_placeholder_is_identity() {
        assert_eq!(fill_template("no placeholder", "x"), "no placeholder");
    }
}
