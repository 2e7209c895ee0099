//! Paragraph and requirement-list segmentation of stem context.

use std::sync::LazyLock;

use regex::Regex;

use super::RichBlock;
use crate::parsing::normalize::{ARROW_GLYPHS, normalize};

/// Glyph put in front of requirement items split out of running text.
pub const ITEM_GLYPH: char = '⇨';

static AFTER_REQUIREMENTS_CUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(requirements:)\s+(To the manager|If the manager|Minimize)")
        .expect("requirements cue regex")
});
static AFTER_SENTENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.\s+(To the manager|If the manager|Minimize)").expect("sentence cue regex")
});
static GLYPH_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:→|->|•|-|➤|▶|⇨)\s+(.*)$").expect("requirement glyph regex")
});
static LEAD_PHRASE_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:To the manager|If the manager|Minimize)").expect("lead phrase regex")
});

/// Segments context text into paragraph and requirement-list blocks.
pub fn render_requirements(text: &str) -> Vec<RichBlock> {
    segment_lines(&preprocess(text))
}

/// Normalizes `text` and breaks it before lead phrases that follow a
/// `requirements:` cue or a sentence end, so each lands on its own line.
pub fn preprocess(text: &str) -> String {
    let flat = normalize(text);
    let split = AFTER_REQUIREMENTS_CUE.replace_all(&flat, format!("$1\n{ITEM_GLYPH} $2"));
    AFTER_SENTENCE
        .replace_all(&split, format!(".\n{ITEM_GLYPH} $1"))
        .into_owned()
}

/// Line-based segmentation.
///
/// Lines following an item continue it until a blank line. A blank line
/// also ends the current paragraph.
pub fn segment_lines(text: &str) -> Vec<RichBlock> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut items: Vec<String> = Vec::new();

    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            flush_items(&mut blocks, &mut items);
            flush_paragraph(&mut blocks, &mut paragraph);
            continue;
        }
        if is_bare_glyph(line) {
            continue;
        }

        if let Some(item) = item_text(line) {
            flush_paragraph(&mut blocks, &mut paragraph);
            items.push(item.to_string());
        } else if let Some(last) = items.last_mut() {
            last.push(' ');
            last.push_str(line);
        } else {
            paragraph.push(line);
        }
    }

    flush_items(&mut blocks, &mut items);
    flush_paragraph(&mut blocks, &mut paragraph);
    blocks
}

fn item_text(line: &str) -> Option<&str> {
    if let Some(caps) = GLYPH_ITEM.captures(line) {
        return caps.get(1).map(|m| m.as_str().trim());
    }
    LEAD_PHRASE_ITEM.is_match(line).then_some(line)
}

fn is_bare_glyph(line: &str) -> bool {
    line.chars().all(|c| ARROW_GLYPHS.contains(&c) || c.is_whitespace())
}

fn flush_paragraph(blocks: &mut Vec<RichBlock>, paragraph: &mut Vec<&str>) {
    if !paragraph.is_empty() {
        blocks.push(RichBlock::Paragraph {
            text: paragraph.join(" "),
        });
        paragraph.clear();
    }
}

fn flush_items(blocks: &mut Vec<RichBlock>, items: &mut Vec<String>) {
    if !items.is_empty() {
        blocks.push(RichBlock::RequirementList {
            items: std::mem::take(items),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn paragraph(text: &str) -> RichBlock {
        RichBlock::Paragraph { text: text.into() }
    }

    fn list(items: &[&str]) -> RichBlock {
        RichBlock::RequirementList {
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn lead_phrases_after_cue_become_items() {
        let text = "The solution must meet the following requirements: To the manager of each department, send a report. Minimize administrative effort.";
        assert_eq!(
            render_requirements(text),
            vec![
                paragraph("The solution must meet the following requirements:"),
                list(&[
                    "To the manager of each department, send a report.",
                    "Minimize administrative effort.",
                ]),
            ]
        );
    }

    #[test]
    fn preprocess_is_case_insensitive() {
        assert_eq!(
            preprocess("Keep costs low. minimize downtime."),
            "Keep costs low.\n⇨ minimize downtime."
        );
    }

    #[test]
    fn plain_text_is_one_paragraph() {
        assert_eq!(
            render_requirements("  You have an Azure subscription \n named Sub1 . "),
            vec![paragraph("You have an Azure subscription named Sub1.")]
        );
    }

    #[test]
    fn continuations_join_the_previous_item() {
        let text = "Requirements\n- Encrypt data\nat rest\n• Rotate keys";
        assert_eq!(
            segment_lines(text),
            vec![
                paragraph("Requirements"),
                list(&["Encrypt data at rest", "Rotate keys"]),
            ]
        );
    }

    #[test]
    fn blank_line_closes_the_run() {
        let text = "-> First item\n\nClosing remark\nspans lines";
        assert_eq!(
            segment_lines(text),
            vec![list(&["First item"]), paragraph("Closing remark spans lines")]
        );
    }

    #[rstest]
    #[case("⇨")]
    #[case("→  ")]
    #[case("➤ ▶")]
    fn bare_glyph_lines_are_skipped(#[case] line: &str) {
        let text = format!("Intro\n{line}\nMore");
        assert_eq!(segment_lines(&text), vec![paragraph("Intro More")]);
    }

    #[test]
    fn item_text_survives_rendering_and_reextraction() {
        let items = [
            "To the manager of each department, send a monthly report.",
            "If the manager does not respond, escalate to the director.",
            "Minimize the number of administrative tasks.",
        ];
        let text = format!("You need to meet the following requirements: {}", items.join(" "));

        let rendered: Vec<String> = render_requirements(&text)
            .into_iter()
            .flat_map(|block| match block {
                RichBlock::RequirementList { items } => items,
                _ => vec![],
            })
            .collect();

        assert_eq!(rendered, items);
    }
}
