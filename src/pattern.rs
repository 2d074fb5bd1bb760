//! Literal-text pattern construction for document search
//!
//! Selected text goes straight into the host's pattern search, so every
//! metacharacter has to be neutralized. Rather than tracking the pattern
//! language's escape set, each character is wrapped in a single-character
//! bracket class: `a+b` becomes `[a][+][b]`. The pattern gets longer, but
//! nothing in it can ever be interpreted as syntax.

/// Escape `text` so it matches itself literally in a search pattern.
///
/// Every character except a backslash becomes a one-character bracket
/// class; a backslash is emitted as an escaped backslash. The few
/// characters that stay special inside a bracket class (`[`, `]`, `^`)
/// are backslash-escaped within theirs.
pub fn escape_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '[' | ']' | '^' => {
                out.push_str("[\\");
                out.push(c);
                out.push(']');
            }
            _ => {
                out.push('[');
                out.push(c);
                out.push(']');
            }
        }
    }
    out
}

/// Escape `text` and wrap it in word-boundary anchors, for whole-word
/// matching.
pub fn word_bounded(text: &str) -> String {
    format!("\\b{}\\b", escape_literal(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use regex::Regex;

    #[test]
    fn escapes_metacharacters() {
        assert_eq!(escape_literal("a+b"), "[a][+][b]");

        let re = Regex::new(&escape_literal("a+b")).unwrap();
        assert!(re.is_match("a+b"));
        assert!(!re.is_match("aab"), "`+` must not quantify");
        assert!(!re.is_match("ab"));

        let re = Regex::new(&escape_literal(".*")).unwrap();
        assert!(re.is_match(".*"));
        assert!(!re.is_match("anything"));
    }

    #[test]
    fn escapes_class_delimiters() {
        let re = Regex::new(&escape_literal("x[0]^2")).unwrap();
        assert!(re.is_match("x[0]^2"));
        assert!(!re.is_match("x0^2"));
    }

    #[test]
    fn backslash_survives_as_literal_backslash() {
        assert_eq!(escape_literal("\\"), "\\\\");

        let re = Regex::new(&escape_literal("a\\b")).unwrap();
        assert!(re.is_match("a\\b"));
        assert!(!re.is_match("ab"));
    }

    #[test]
    fn word_bounded_rejects_embedded_occurrences() {
        let re = Regex::new(&word_bounded("cat")).unwrap();
        assert!(re.is_match("a cat sat"));
        assert!(!re.is_match("catalog"));
        assert!(!re.is_match("tomcat"));
    }

    proptest! {
        /// The escaped pattern compiles for any input and matches exactly
        /// the input string, starting at the beginning and consuming all
        /// of it.
        #[test]
        fn escaped_pattern_round_trips(input in any::<String>()) {
            let re = Regex::new(&escape_literal(&input)).unwrap();
            let m = re.find(&input).expect("pattern must match its own source");
            prop_assert_eq!(m.start(), 0);
            prop_assert_eq!(m.end(), input.len());
        }

        /// Appending a character to the haystack never lets the pattern
        /// match past the original input.
        #[test]
        fn escaped_pattern_matches_nothing_longer(input in any::<String>(), extra in any::<char>()) {
            let re = Regex::new(&escape_literal(&input)).unwrap();
            let mut haystack = input.clone();
            haystack.push(extra);
            let m = re.find(&haystack).expect("prefix still present");
            prop_assert_eq!(m.end() - m.start(), input.len());
        }
    }
}
