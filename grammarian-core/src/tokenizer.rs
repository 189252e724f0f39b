//! Splits an annotated sentence into the discrete parts shown to the
//! learner, and locates the part the author marked as wrong.
//!
//! The authored text carries at most one bracketed span, e.g.
//! `"What [affect] has it had on your life?"`. Tokenization partitions the
//! text into maximal runs of word characters (letters, digits, apostrophes,
//! hyphens), maximal runs of everything else (whitespace and punctuation,
//! preserved verbatim), and the literal bracket characters as standalone
//! tokens. Concatenating the returned parts in order reproduces the input
//! with the bracket markers removed, exactly.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Word runs, single brackets, then runs of anything else. The three
    // classes are disjoint, so every character lands in exactly one token.
    static ref PART_PATTERN: Regex =
        Regex::new(r"[\w'\-]+|\[|\]|[^\w'\[\]\-]+").expect("part pattern must compile");
}

/// Split `text` into parts and extract the bracket-marked answer index.
///
/// Returns the ordered part sequence (brackets stripped) and the position
/// within it of the part that was inside the brackets. The index is `None`
/// when the text carries no brackets or the annotation is unbalanced; a
/// malformed annotation is tolerated, not rejected, since it is an
/// authoring-time data issue.
///
/// Only the first `[` and the first `]` at or after it are honored. Any
/// further bracket characters are ordinary tokens and stay in the output.
/// A bracketed span enclosing nothing (`"To[]boldy go"`) yields an empty
/// part that still occupies the answer slot.
pub fn tokenize(text: &str) -> (Vec<String>, Option<usize>) {
    let mut parts: Vec<String> = PART_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();

    let Some(open) = parts.iter().position(|p| p.as_str() == "[") else {
        return (parts, None);
    };
    let Some(close) = parts[open..]
        .iter()
        .position(|p| p.as_str() == "]")
        .map(|i| open + i)
    else {
        // Unbalanced annotation: treat the text as unannotated.
        return (parts, None);
    };

    let marked: String = parts[open + 1..close].concat();
    parts.splice(open..=close, std::iter::once(marked));
    (parts, Some(open))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn parts_of(text: &str) -> (Vec<String>, Option<usize>) {
        tokenize(text)
    }

    fn owned(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_unannotated_text() {
        let (parts, answer) = parts_of("To boldy go");
        assert_eq!(parts, owned(&["To", " ", "boldy", " ", "go"]));
        assert_eq!(answer, None);
    }

    #[test]
    fn test_marked_first_word() {
        let (parts, answer) = parts_of("[To] boldy go");
        assert_eq!(parts, owned(&["To", " ", "boldy", " ", "go"]));
        assert_eq!(answer, Some(0));
    }

    #[test]
    fn test_marked_whitespace() {
        let (parts, answer) = parts_of("To[ ]boldy go");
        assert_eq!(parts, owned(&["To", " ", "boldy", " ", "go"]));
        assert_eq!(answer, Some(1));
    }

    #[test]
    fn test_marked_multi_token_span() {
        let (parts, answer) = parts_of("To [boldy go]");
        assert_eq!(parts, owned(&["To", " ", "boldy go"]));
        assert_eq!(answer, Some(2));
    }

    #[test]
    fn test_apostrophes_stay_in_word_tokens() {
        let (parts, answer) = parts_of("[It's] surface was cracked.");
        assert_eq!(
            parts,
            owned(&["It's", " ", "surface", " ", "was", " ", "cracked", "."])
        );
        assert_eq!(answer, Some(0));
    }

    #[test]
    fn test_punctuation_runs_are_single_tokens() {
        let (parts, answer) =
            parts_of("What [affect] has it had on your life, that you've noticed?");
        assert_eq!(
            parts,
            owned(&[
                "What", " ", "affect", " ", "has", " ", "it", " ", "had", " ", "on", " ", "your",
                " ", "life", ", ", "that", " ", "you've", " ", "noticed", "?"
            ])
        );
        assert_eq!(answer, Some(2));
    }

    #[test]
    fn test_unbalanced_open_bracket_is_ignored() {
        let (parts, answer) = parts_of("To [boldy go");
        assert_eq!(parts, owned(&["To", " ", "[", "boldy", " ", "go"]));
        assert_eq!(answer, None);
    }

    #[test]
    fn test_close_before_open_is_ignored() {
        let (parts, answer) = parts_of("To ]boldy[ go");
        assert_eq!(parts, owned(&["To", " ", "]", "boldy", "[", " ", "go"]));
        assert_eq!(answer, None);
    }

    #[test]
    fn test_only_first_pair_is_honored() {
        let (parts, answer) = parts_of("a [b] c [d]");
        assert_eq!(parts, owned(&["a", " ", "b", " ", "c", " ", "[", "d", "]"]));
        assert_eq!(answer, Some(2));
    }

    #[test]
    fn test_nested_brackets_close_on_first_close() {
        // The first `]` closes the first `[`, regardless of nesting depth.
        let (parts, answer) = parts_of("a [b [c] d] e");
        assert_eq!(
            parts,
            owned(&["a", " ", "b [c", " ", "d", "]", " ", "e"])
        );
        assert_eq!(answer, Some(2));
    }

    #[test]
    fn test_empty_span_yields_empty_part() {
        // The empty part still occupies the answer slot.
        let (parts, answer) = parts_of("To[]boldy go");
        assert_eq!(parts, owned(&["To", "", "boldy", " ", "go"]));
        assert_eq!(answer, Some(1));
    }

    #[test]
    fn test_empty_text() {
        let (parts, answer) = parts_of("");
        assert_eq!(parts, Vec::<String>::new());
        assert_eq!(answer, None);
    }

    #[test]
    fn test_answer_index_in_range() {
        for text in ["[a]", "a [b]", "[a b c]", "x [y] z", "To[ ]boldy go"] {
            let (parts, answer) = parts_of(text);
            let index = answer.unwrap();
            assert!(index < parts.len(), "index {} out of range for {:?}", index, parts);
        }
    }

    proptest! {
        /// Concatenating the parts reproduces the text with brackets removed.
        #[test]
        fn prop_round_trip(words in proptest::collection::vec("[a-z]{1,8}", 1..8), marked in 0usize..8) {
            let marked = marked % words.len();
            let text = words
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    if i == marked {
                        format!("[{}]", w)
                    } else {
                        w.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");
            let (parts, answer) = tokenize(&text);
            prop_assert_eq!(parts.concat(), text.replace(['[', ']'], ""));
            prop_assert_eq!(answer, Some(marked * 2));
        }

        /// Malformed or missing annotations still reconstruct the input.
        #[test]
        fn prop_round_trip_unannotated(text in "[a-z \\.,!\\?'\\-\\[]{0,40}") {
            let (parts, answer) = tokenize(&text);
            if answer.is_none() {
                prop_assert_eq!(parts.concat(), text);
            }
        }

        /// Pure function: the same input always yields the same output.
        #[test]
        fn prop_deterministic(text in "[a-z \\[\\]\\.,']{0,40}") {
            prop_assert_eq!(tokenize(&text), tokenize(&text));
        }
    }
}
