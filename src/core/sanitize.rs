// src/core/sanitize.rs
//
// Free-text cleanup for display: decode a small fixed set of entities, then cut
// to a character budget. No general entity table, no numeric references.

use crate::config::consts::CONTINUATION;

/// Entity → replacement. Matched in one left-to-right pass, so `&amp;quot;`
/// comes out as `&quot;` and is never decoded twice.
const ENTITIES: &[(&str, &str)] = &[
    ("&lt;br/&gt;", "\n"),
    ("&quot;", "\""),
    ("&amp;", "&"),
];

pub fn decode_entities(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match ENTITIES.iter().find(|(ent, _)| tail.starts_with(ent)) {
            Some((ent, rep)) => {
                out.push_str(rep);
                rest = &tail[ent.len()..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Keep at most `budget` characters; mark the cut with [`CONTINUATION`].
/// Counts chars, not bytes, so multi-byte text is never split.
pub fn truncate(s: &str, budget: usize) -> String {
    match s.char_indices().nth(budget) {
        Some((cut, _)) => join!(&s[..cut], CONTINUATION),
        None => s!(s),
    }
}

/// Decode first, then truncate: the budget applies to what the user reads.
pub fn sanitize_text(raw: &str, budget: usize) -> String {
    truncate(&decode_entities(raw), budget)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_the_fixed_set_only() {
        assert_eq!(
            decode_entities("a&lt;br/&gt;b &quot;c&quot; d &amp; e"),
            "a\nb \"c\" d & e"
        );
        // not in the set
        assert_eq!(decode_entities("&lt;b&gt; &#10; &mdash;"), "&lt;b&gt; &#10; &mdash;");
        assert_eq!(decode_entities("&amp;quot;"), "&quot;");
        assert_eq!(decode_entities("trailing &"), "trailing &");
    }

    #[test]
    fn truncates_on_chars_with_marker() {
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("abc", 3), "abc");
        assert_eq!(truncate("ééééé", 2), "éé...");
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn budget_counts_decoded_length() {
        // 10 raw bytes of entity, 1 char decoded
        let raw = "&amp;&amp;&amp;";
        assert_eq!(sanitize_text(raw, 3), "&&&");
    }

    #[test]
    fn idempotent_and_bounded() {
        let long = "word ".repeat(100);
        for input in ["short and plain", long.as_str()] {
            let once = sanitize_text(input, 40);
            assert_eq!(sanitize_text(&once, 40), once);
            assert!(once.chars().count() <= 40 + CONTINUATION.chars().count());
        }
    }
}
