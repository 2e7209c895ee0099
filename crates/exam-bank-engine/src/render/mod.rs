//! Display structure for question stems and explanations.
//!
//! Rendering is a presentation transform over stored records: it never
//! fails and never changes what was parsed. [`html`] projects the blocks to
//! markup; the terminal UI walks them directly.

pub mod division_table;
pub mod html;
pub mod requirements;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::models::NO_EXPLANATION;
use crate::parsing::normalize::normalize;

pub use division_table::find_division_table;
pub use requirements::render_requirements;

/// Shown in place of a missing explanation.
pub const NO_DETAIL_NOTICE: &str = "Không có giải thích chi tiết.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RichBlock {
    Paragraph {
        text: String,
    },
    RequirementList {
        items: Vec<String>,
    },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// The interrogative sentence the options answer.
    Ask {
        text: String,
    },
    Explanation {
        text: String,
    },
    /// Trailing citation of an explanation. `href` is its first URL, if any.
    Reference {
        label: Option<String>,
        text: String,
        href: Option<String>,
    },
    Notice {
        text: String,
    },
}

impl RichBlock {
    /// Plain text content, without markup.
    pub fn plain_text(&self) -> String {
        match self {
            RichBlock::Paragraph { text }
            | RichBlock::Ask { text }
            | RichBlock::Explanation { text }
            | RichBlock::Notice { text } => text.clone(),
            RichBlock::RequirementList { items } => items.join("\n"),
            RichBlock::Table { headers, rows } => std::iter::once(headers)
                .chain(rows)
                .map(|row| row.join(" | "))
                .collect::<Vec<_>>()
                .join("\n"),
            RichBlock::Reference { label, text, .. } => match label {
                Some(label) => format!("{label} {text}"),
                None => text.clone(),
            },
        }
    }
}

static ASK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)What should you recommend\?|\bWhich\b.*?\bshould\b.*?\?|\bWhat\b.*?\?")
        .expect("ask regex")
});
static REFERENCE_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Tham khảo:|Reference:|https?://").expect("reference start regex")
});
static REFERENCE_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(Tham khảo:|Reference:)\s*").expect("reference label regex")
});

/// Splits a stem into context blocks followed by the ask.
///
/// The ask starts at the first question-lead phrase after the opening
/// character and runs to the end. A stem whose only lead phrase is at the very
/// start is a single ask.
pub fn render_stem(stem: &str) -> Vec<RichBlock> {
    let text = normalize(stem);
    let Some(first) = text.chars().next() else {
        return vec![];
    };

    match ASK.find_at(&text, first.len_utf8()) {
        Some(ask) => {
            let mut blocks = render_context(text[..ask.start()].trim());
            blocks.push(RichBlock::Ask {
                text: text[ask.start()..].trim().to_string(),
            });
            blocks
        }
        None if ASK.is_match(&text) => vec![RichBlock::Ask { text }],
        None => render_context(&text),
    }
}

/// Context text with the division table spliced out, if present.
pub fn render_context(text: &str) -> Vec<RichBlock> {
    let Some(range) = find_division_table(text) else {
        return render_requirements(text);
    };

    let mut blocks = render_requirements(text[..range.start].trim());
    blocks.push(division_table::division_table_block());
    blocks.extend(render_requirements(text[range.end..].trim()));
    blocks
}

/// Splits an explanation from its trailing reference.
pub fn render_explanation(explanation: &str) -> Vec<RichBlock> {
    let explanation = explanation.trim();
    if explanation.is_empty() || explanation == NO_EXPLANATION {
        return vec![RichBlock::Notice {
            text: NO_DETAIL_NOTICE.to_string(),
        }];
    }

    let Some(start) = REFERENCE_START.find(explanation).map(|m| m.start()) else {
        return vec![RichBlock::Explanation {
            text: explanation.to_string(),
        }];
    };

    let mut blocks = Vec::new();
    let main = explanation[..start].trim();
    if !main.is_empty() {
        blocks.push(RichBlock::Explanation {
            text: main.to_string(),
        });
    }
    blocks.push(reference_block(explanation[start..].trim()));
    blocks
}

fn reference_block(reference: &str) -> RichBlock {
    let (label, text) = match REFERENCE_LABEL.captures(reference) {
        Some(caps) => {
            let whole = caps.get(0).map_or(0, |m| m.end());
            let label = caps.get(1).map(|m| m.as_str().to_string());
            (label, reference[whole..].trim())
        }
        None => (None, reference),
    };
    let href = text
        .split_whitespace()
        .find(|token| token.starts_with("http://") || token.starts_with("https://"))
        .map(str::to_string);

    RichBlock::Reference {
        label,
        text: text.to_string(),
        href,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn ask(text: &str) -> RichBlock {
        RichBlock::Ask { text: text.into() }
    }

    fn paragraph(text: &str) -> RichBlock {
        RichBlock::Paragraph { text: text.into() }
    }

    #[test]
    fn stem_splits_context_from_ask() {
        let stem = "You have an Azure subscription. You need to grant access to a partner. What should you recommend?";
        assert_eq!(
            render_stem(stem),
            vec![
                paragraph("You have an Azure subscription. You need to grant access to a partner."),
                ask("What should you recommend?"),
            ]
        );
    }

    #[rstest]
    #[case("Your app needs secrets. Which service should you use for them?", "Which service should you use for them?")]
    #[case("Data must be archived. What is the cheapest tier?", "What is the cheapest tier?")]
    fn ask_patterns(#[case] stem: &str, #[case] expected_ask: &str) {
        let blocks = render_stem(stem);
        assert_eq!(blocks.last(), Some(&ask(expected_ask)));
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn ask_at_start_is_a_single_block() {
        assert_eq!(
            render_stem("What is the  maximum\nsize of a blob?"),
            vec![ask("What is the maximum size of a blob?")]
        );
    }

    #[test]
    fn leading_question_becomes_context_for_a_later_ask() {
        assert_eq!(
            render_stem("What is a storage account? Which tier should you choose?"),
            vec![
                paragraph("What is a storage account?"),
                ask("Which tier should you choose?"),
            ]
        );
    }

    #[test]
    fn stem_without_ask_is_context_only() {
        assert_eq!(
            render_stem("⇨ Configure geo-redundant storage for the account."),
            vec![paragraph("Configure geo-redundant storage for the account.")]
        );
        assert_eq!(render_stem("   "), vec![]);
    }

    #[test]
    fn division_table_is_spliced_into_context() {
        let stem = "Your company has the divisions shown in the following table. \
            Division Azure subscription Azure AD tenant East Sub1 Contoso.com West Sub2 Fabrikam.com \
            Sub1 contains an Azure App Service web app named App1. \
            You need to ensure that users in Fabrikam.com can sign in to App1. What should you recommend?";
        let blocks = render_stem(stem);

        assert_eq!(blocks.len(), 4);
        assert_eq!(
            blocks[0],
            paragraph("Your company has the divisions shown in the following table.")
        );
        assert!(matches!(blocks[1], RichBlock::Table { .. }));
        assert_eq!(
            blocks[2],
            paragraph("Sub1 contains an Azure App Service web app named App1. You need to ensure that users in Fabrikam.com can sign in to App1.")
        );
        assert_eq!(blocks[3], ask("What should you recommend?"));
    }

    #[rstest]
    #[case(NO_EXPLANATION)]
    #[case("")]
    #[case("  ")]
    fn missing_explanation_renders_notice(#[case] explanation: &str) {
        assert_eq!(
            render_explanation(explanation),
            vec![RichBlock::Notice {
                text: NO_DETAIL_NOTICE.into()
            }]
        );
    }

    #[test]
    fn explanation_without_reference() {
        assert_eq!(
            render_explanation("Access reviews recertify guest access."),
            vec![RichBlock::Explanation {
                text: "Access reviews recertify guest access.".into()
            }]
        );
    }

    #[test]
    fn labelled_reference_keeps_label_and_link() {
        let blocks =
            render_explanation("Use access reviews.\n\nTham khảo: https://learn.microsoft.com/access-reviews");
        assert_eq!(
            blocks,
            vec![
                RichBlock::Explanation {
                    text: "Use access reviews.".into()
                },
                RichBlock::Reference {
                    label: Some("Tham khảo:".into()),
                    text: "https://learn.microsoft.com/access-reviews".into(),
                    href: Some("https://learn.microsoft.com/access-reviews".into()),
                },
            ]
        );
    }

    #[test]
    fn bare_url_reference() {
        let blocks = render_explanation("See the docs https://example.com/sas for details");
        assert_eq!(
            blocks[1],
            RichBlock::Reference {
                label: None,
                text: "https://example.com/sas for details".into(),
                href: Some("https://example.com/sas".into()),
            }
        );
    }

    #[test]
    fn text_reference_has_no_link() {
        let blocks = render_explanation("Reference: AZ-305 study guide, chapter 4");
        assert_eq!(
            blocks,
            vec![RichBlock::Reference {
                label: Some("Reference:".into()),
                text: "AZ-305 study guide, chapter 4".into(),
                href: None,
            }]
        );
    }

    #[test]
    fn blocks_serialize_with_kind_tag() {
        let json = serde_json::to_value(ask("Why?")).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "ask", "text": "Why?"}));

        let json = serde_json::to_value(RichBlock::RequirementList { items: vec![] }).unwrap();
        assert_eq!(json["kind"], "requirementList");
    }

    #[test]
    fn plain_text_of_table() {
        let table = division_table::division_table_block();
        assert_eq!(
            table.plain_text().lines().next(),
            Some("Division | Azure subscription | Azure AD tenant")
        );
    }
}
