//! HTML projection of rendered blocks, using the quiz web UI's class names.

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::RichBlock;
use super::requirements::ITEM_GLYPH;

pub fn to_html(blocks: &[RichBlock]) -> String {
    blocks.iter().map(block_to_html).collect()
}

fn block_to_html(block: &RichBlock) -> String {
    match block {
        RichBlock::Paragraph { text } => format!("<p>{}</p>", encode_text(text)),
        RichBlock::RequirementList { items } => {
            let items: String = items
                .iter()
                .map(|item| {
                    format!(
                        r#"<div class="requirement-item"><span class="requirement-icon">{ITEM_GLYPH}</span><span class="requirement-text">{}</span></div>"#,
                        encode_text(item)
                    )
                })
                .collect();
            format!(r#"<div class="requirement-list">{items}</div>"#)
        }
        RichBlock::Table { headers, rows } => {
            let head: String = headers
                .iter()
                .map(|h| format!("<th>{}</th>", encode_text(h)))
                .collect();
            let body: String = rows
                .iter()
                .map(|row| {
                    let cells: String = row
                        .iter()
                        .map(|cell| format!("<td>{}</td>", encode_text(cell)))
                        .collect();
                    format!("<tr>{cells}</tr>")
                })
                .collect();
            format!(
                r#"<div class="table-content"><table><thead><tr>{head}</tr></thead><tbody>{body}</tbody></table></div>"#
            )
        }
        RichBlock::Ask { text } => {
            format!(r#"<div class="question-ask">{}</div>"#, encode_text(text))
        }
        RichBlock::Explanation { text } => format!("<div>{}</div>", encode_text(text)),
        RichBlock::Reference { label, text, href } => {
            let label = label
                .as_deref()
                .map(|l| format!("{} ", encode_text(l)))
                .unwrap_or_default();
            format!(
                r#"<div class="reference">{label}{}</div>"#,
                linked_text(text, href.as_deref())
            )
        }
        RichBlock::Notice { text } => format!("<span>{}</span>", encode_text(text)),
    }
}

/// Escaped `text` with the first occurrence of `href` turned into a link.
fn linked_text(text: &str, href: Option<&str>) -> String {
    let Some((href, start)) = href.and_then(|h| text.find(h).map(|start| (h, start))) else {
        return encode_text(text).into_owned();
    };
    let end = start + href.len();
    format!(
        r#"{}<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>{}"#,
        encode_text(&text[..start]),
        encode_double_quoted_attribute(href),
        encode_text(href),
        encode_text(&text[end..]),
    )
}
