//! The one embedded table shape the source corpus repeats: divisions with
//! their subscription and Azure AD tenant.
//!
//! Extracted text flattens the table into a run of words, so it is recognised
//! by signature and rebuilt with fixed cells. This is deliberately not a
//! general table parser.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use super::RichBlock;

pub const HEADERS: [&str; 3] = ["Division", "Azure subscription", "Azure AD tenant"];
pub const ROWS: [[&str; 3]; 2] = [
    ["East", "Sub1", "Contoso.com"],
    ["West", "Sub2", "Fabrikam.com"],
];

static SIGNATURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)Division.*?Azure.*?tenant.*?East.*?Sub1.*?Contoso(?:\.com)?.*?West.*?Sub2.*?Fabrikam(?:\.com)?",
    )
    .expect("division table regex")
});

/// Byte range of the flattened division table within `text`, if present.
pub fn find_division_table(text: &str) -> Option<Range<usize>> {
    let mentions_table = text.contains("Division")
        && (text.contains("Azure subscription") || text.contains("Sub1") || text.contains("Sub2"));
    if !mentions_table {
        return None;
    }
    SIGNATURE.find(text).map(|m| m.range())
}

pub fn division_table_block() -> RichBlock {
    RichBlock::Table {
        headers: HEADERS.iter().map(|h| h.to_string()).collect(),
        rows: ROWS
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect(),
    }
}
