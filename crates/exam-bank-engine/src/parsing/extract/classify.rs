use std::sync::LazyLock;

use regex::Regex;

static HEADER_NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:Question\s*#?\s*\d+|Topic\s*\d+)").expect("header regex")
});
static TABLE_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:Division|Azure|East|West|Sub\d+|Contoso|Fabrikam)")
        .expect("table fragment regex")
});
static OPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-D][.\s]").expect("option regex"));
static OPTION_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-D][.\s]+").expect("option prefix regex"));
static VOTE_PERCENTAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-D]\s*\(\d+%\)").expect("vote regex"));
static COMMUNITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:Community|\d+\s*\(\d+%\))").expect("community regex")
});
static CORRECT_ANSWER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i:Correct\s*Answer\s*:)\s*([A-Da-d])[A-D]*(.*)$").expect("answer regex")
});
static LOCALIZED_ANSWER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i:Đáp\s*án\s*:)\s*([A-Da-d])[A-D]*(.*)$").expect("localized answer regex")
});
static REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^Reference\s*:\s*(.*)$").expect("reference regex"));
static URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://").expect("url regex"));
static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[|\-+\s]+$").expect("separator regex"));

/// Which of the optional line rules a strategy applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    /// Treat lines opening with division/subscription/tenant tokens as table cells.
    pub table_fragments: bool,
    /// Recognise vote-percentage annotations and "Community ..." footers.
    pub community_votes: bool,
    /// Accept `Đáp án: X` as an answer marker alongside `Correct Answer: X`.
    pub localized_answers: bool,
}

impl RuleSet {
    pub const BOXED: RuleSet = RuleSet {
        table_fragments: true,
        community_votes: true,
        localized_answers: false,
    };
    pub const SIMPLE_NUMBERED: RuleSet = RuleSet {
        table_fragments: false,
        community_votes: true,
        localized_answers: true,
    };
    pub const TABLE_SECTION: RuleSet = RuleSet {
        table_fragments: false,
        community_votes: false,
        localized_answers: false,
    };
}

/// What a single trimmed line looks like, without reference to its neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `Question #N` or `Topic N`.
    HeaderNoise,
    /// A cell of the division/subscription/tenant table.
    TableFragment,
    /// A lettered option; `text` has the letter and punctuation removed.
    Option { text: String },
    /// Vote percentages and the "Community vote distribution" footer.
    CommunityVote,
    /// `Correct Answer: X`, with any text following the letter. Further
    /// answer letters (`BD`) are skipped; the first one sets the index.
    CorrectAnswer { index: usize, trailing: String },
    /// `Reference: ...`, with the text after the label.
    Reference { text: String },
    /// A line starting with an http(s) URL.
    Url,
    /// Only pipes, dashes, plus signs and whitespace.
    Separator,
    Text,
}

/// A classified line: the trimmed text plus its local kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass {
    pub text: String,
    pub kind: LineKind,
}

/// Classifies lines in the rule priority order the extractor relies on.
#[derive(Debug, Clone, Copy)]
pub struct QuestionLineClassifier {
    rules: RuleSet,
}

impl QuestionLineClassifier {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Classifies an already trimmed, non-empty line.
    pub fn classify(&self, line: &str) -> LineClass {
        LineClass {
            text: line.to_string(),
            kind: self.kind_of(line),
        }
    }

    fn kind_of(&self, line: &str) -> LineKind {
        if HEADER_NOISE.is_match(line) {
            return LineKind::HeaderNoise;
        }
        if self.rules.table_fragments && TABLE_FRAGMENT.is_match(line) {
            return LineKind::TableFragment;
        }
        let is_vote = VOTE_PERCENTAGE.is_match(line);
        if OPTION.is_match(line) && !(self.rules.community_votes && is_vote) {
            return LineKind::Option {
                text: OPTION_PREFIX.replace(line, "").trim().to_string(),
            };
        }
        if self.rules.community_votes && (is_vote || COMMUNITY.is_match(line)) {
            return LineKind::CommunityVote;
        }
        if let Some(answer) = self.answer_marker(line) {
            return answer;
        }
        if let Some(caps) = REFERENCE.captures(line) {
            return LineKind::Reference {
                text: caps[1].trim().to_string(),
            };
        }
        if URL.is_match(line) {
            return LineKind::Url;
        }
        if SEPARATOR.is_match(line) {
            return LineKind::Separator;
        }
        LineKind::Text
    }

    fn answer_marker(&self, line: &str) -> Option<LineKind> {
        let caps = CORRECT_ANSWER.captures(line).or_else(|| {
            self.rules
                .localized_answers
                .then(|| LOCALIZED_ANSWER.captures(line))
                .flatten()
        })?;
        // A letter running into lowercase text is a word, not an answer key.
        if caps[2].starts_with(char::is_lowercase) {
            return None;
        }
        Some(LineKind::CorrectAnswer {
            index: answer_index(&caps[1]),
            trailing: caps[2]
                .trim_start_matches(['.', ')', ':', '-'])
                .trim()
                .to_string(),
        })
    }
}

/// Zero-based index of an answer letter, case-insensitive.
fn answer_index(letter: &str) -> usize {
    letter
        .chars()
        .next()
        .map(|c| (c.to_ascii_uppercase() as usize).saturating_sub('A' as usize))
        .unwrap_or(0)
}

/// Splits a block into trimmed, non-empty lines.
pub fn content_lines(block: &str) -> impl Iterator<Item = &str> {
    block.lines().map(str::trim).filter(|l| !l.is_empty())
}

/// True if the line opens a lettered option under the loosest rule.
pub fn looks_like_option(line: &str) -> bool {
    OPTION.is_match(line)
}
