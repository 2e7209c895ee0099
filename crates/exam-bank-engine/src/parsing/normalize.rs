//! Text cleanup shared by the extractor and the renderer.

use std::sync::LazyLock;

use regex::Regex;

/// Decorative arrows used as bullet markers in the source PDFs.
pub const ARROW_GLYPHS: [char; 4] = ['⇨', '→', '➤', '▶'];

/// Glyphs a cleaned stem may start with besides letters and digits.
const STEM_LEAD_GLYPHS: [char; 6] = ['⇨', '→', '➤', '▶', '•', '-'];

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex"));
static SPACE_BEFORE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([.,:])").expect("punctuation regex"));

/// Strips arrow glyphs, collapses whitespace runs to one space and removes
/// whitespace in front of `.`, `,` and `:`.
///
/// Total and idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
    let without_arrows: String = text.chars().filter(|c| !ARROW_GLYPHS.contains(c)).collect();
    let collapsed = WHITESPACE_RUN.replace_all(&without_arrows, " ");
    SPACE_BEFORE_PUNCT
        .replace_all(&collapsed, "$1")
        .trim()
        .to_string()
}

/// Final cleanup applied to every extracted stem.
///
/// Collapses whitespace and drops a leading run of box-border artifacts,
/// keeping arrows, bullets and hyphens that start a requirement list.
pub fn clean_stem(text: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text, " ");
    collapsed
        .trim_start_matches(|c: char| {
            !(c.is_alphanumeric() || c == '_' || STEM_LEAD_GLYPHS.contains(&c))
        })
        .trim()
        .to_string()
}

/// Unifies line breaks coming out of PDF text extraction.
///
/// CRLF and lone CR become LF; form feeds (page breaks) become LF.
pub fn unify_line_breaks(text: &str) -> String {
    text.replace("\r\n", "\n").replace(['\r', '\x0C'], "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("⇨ Minimize  development effort .", "Minimize development effort.")]
    #[case("a → b ➤ c ▶ d", "a b c d")]
    #[case("requirements :\n\tTo the manager", "requirements: To the manager")]
    #[case("one , two", "one, two")]
    #[case("", "")]
    #[case("   \n  ", "")]
    fn normalize_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize(input), expected);
    }

    #[rstest]
    #[case("| ** You have an Azure subscription.", "You have an Azure subscription.")]
    #[case("⇨ To the manager", "⇨ To the manager")]
    #[case("- item", "- item")]
    #[case("  2 virtual   machines", "2 virtual machines")]
    #[case("|||", "")]
    fn clean_stem_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(clean_stem(input), expected);
    }

    #[test]
    fn line_breaks_are_unified() {
        assert_eq!(unify_line_breaks("a\r\nb\rc\x0Cd"), "a\nb\nc\nd");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(s in "\\PC*") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn normalize_is_idempotent_on_glyph_heavy_text(s in "[a-z ⇨→➤▶.,:\\t\\n]{0,40}") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }
    }
}
