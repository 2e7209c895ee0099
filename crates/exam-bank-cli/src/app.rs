use exam_bank_engine::{
    AnswerSubmission, GradeResult, QuestionRecord, QuestionStore, QuizReport, RichBlock, grade,
    grade_all, render_explanation, render_stem,
};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListState,
};

/// Quiz state behind the terminal UI. Holds no terminal handles so it can be
/// driven from tests.
pub struct App {
    pub store: QuestionStore,
    pub source_label: String,
    pub question_list_state: ListState,
    selections: Vec<Option<usize>>,
    feedback: Vec<Option<GradeResult>>,
    report: Option<QuizReport>,
    status: Option<String>,
}

impl App {
    pub fn new(store: QuestionStore, source_label: String) -> Self {
        let count = store.len();
        let mut app = Self {
            store,
            source_label,
            question_list_state: ListState::default(),
            selections: vec![None; count],
            feedback: vec![None; count],
            report: None,
            status: None,
        };

        // Select first question if available
        if count > 0 {
            app.question_list_state.select(Some(0));
        }

        app
    }

    pub fn selected_position(&self) -> Option<usize> {
        self.question_list_state.selected()
    }

    pub fn current(&self) -> Option<&QuestionRecord> {
        self.selected_position()
            .and_then(|i| self.store.snapshot().get(i))
    }

    pub fn next_question(&mut self) {
        if self.store.is_empty() {
            return;
        }
        let i = match self.selected_position() {
            Some(i) => (i + 1) % self.store.len(),
            None => 0,
        };
        self.question_list_state.select(Some(i));
        self.report = None;
    }

    pub fn previous_question(&mut self) {
        if self.store.is_empty() {
            return;
        }
        let i = match self.selected_position() {
            Some(0) | None => self.store.len() - 1,
            Some(i) => i - 1,
        };
        self.question_list_state.select(Some(i));
        self.report = None;
    }

    /// Picks an option by letter. Changing the answer clears earlier feedback.
    pub fn select_letter(&mut self, letter: char) {
        let Some(position) = self.selected_position() else {
            return;
        };
        let Some(option_count) = self.current().map(|q| q.options.len()) else {
            return;
        };
        let index = (letter.to_ascii_uppercase() as usize).wrapping_sub('A' as usize);
        if index >= option_count {
            return;
        }
        if self.selections[position] != Some(index) {
            self.selections[position] = Some(index);
            self.feedback[position] = None;
        }
    }

    pub fn check_answer(&mut self) {
        let Some(position) = self.selected_position() else {
            return;
        };
        let Some(id) = self.current().map(|q| q.id) else {
            return;
        };
        let Some(selected) = self.selections[position] else {
            self.status = Some("Select an option (a-d) first".to_string());
            return;
        };

        match grade(&self.store, id, selected) {
            Ok(result) => {
                self.feedback[position] = Some(result);
                self.status = None;
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    pub fn finish(&mut self) {
        let submissions: Vec<AnswerSubmission> = self
            .store
            .snapshot()
            .iter()
            .zip(&self.selections)
            .map(|(q, selected)| AnswerSubmission {
                question_id: q.id,
                selected_index: *selected,
            })
            .collect();

        match grade_all(&self.store, &submissions) {
            Ok(report) => self.report = Some(report),
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    pub fn report(&self) -> Option<&QuizReport> {
        self.report.as_ref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn answered_count(&self) -> usize {
        self.selections.iter().filter(|s| s.is_some()).count()
    }

    /// Marker shown in the question list.
    pub fn list_marker(&self, position: usize) -> &'static str {
        match (&self.feedback[position], self.selections[position]) {
            (Some(result), _) if result.is_correct => "✔",
            (Some(_), _) => "✘",
            (None, Some(_)) => "•",
            (None, None) => " ",
        }
    }

    /// Lines for the right-hand panel.
    pub fn content_lines(&self) -> Vec<Line<'static>> {
        if let Some(report) = &self.report {
            return self.report_lines(report);
        }
        let (Some(position), Some(question)) = (self.selected_position(), self.current()) else {
            return vec![Line::from("No questions loaded")];
        };

        let mut lines = vec![
            Line::from(Span::styled(
                format!("Question {} of {}", question.id, self.store.len()),
                Style::default().add_modifier(Modifier::DIM),
            )),
            Line::default(),
        ];
        for block in render_stem(&question.stem) {
            lines.extend(block_lines(&block));
        }
        lines.push(Line::default());

        let selected = self.selections[position];
        let feedback = self.feedback[position].as_ref();
        for (i, option) in question.options.iter().enumerate() {
            let mut style = Style::default();
            if selected == Some(i) {
                style = style.add_modifier(Modifier::BOLD).fg(Color::Yellow);
            }
            if let Some(result) = feedback {
                if i == result.correct_answer_index {
                    style = style.fg(Color::Green);
                } else if selected == Some(i) {
                    style = style.fg(Color::Red);
                }
            }
            let marker = if selected == Some(i) { '●' } else { '○' };
            lines.push(Line::from(Span::styled(
                format!("{marker} {}. {option}", QuestionRecord::option_letter(i)),
                style,
            )));
        }

        if let Some(result) = feedback {
            lines.push(Line::default());
            lines.push(verdict_line(result));
            for block in render_explanation(&result.explanation) {
                lines.extend(block_lines(&block));
            }
        }

        lines
    }

    fn report_lines(&self, report: &QuizReport) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                format!(
                    "Score: {}/{} ({}%)",
                    report.score, report.total, report.percentage
                ),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];
        for result in &report.results {
            let chosen = result
                .selected_index
                .map(|i| QuestionRecord::option_letter(i).to_string())
                .unwrap_or_else(|| "-".to_string());
            let (mark, color) = if result.is_correct {
                ("✔", Color::Green)
            } else {
                ("✘", Color::Red)
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{mark} "), Style::default().fg(color)),
                Span::raw(format!(
                    "Question {}: chose {chosen}, answer {}",
                    result.question_id,
                    QuestionRecord::option_letter(result.correct_answer_index)
                )),
            ]));
        }
        lines
    }
}

fn verdict_line(result: &GradeResult) -> Line<'static> {
    let letter = QuestionRecord::option_letter(result.correct_answer_index);
    if result.is_correct {
        Line::from(Span::styled(
            "Correct!".to_string(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            format!("Incorrect. The correct answer is {letter}."),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    }
}

fn block_lines(block: &RichBlock) -> Vec<Line<'static>> {
    match block {
        RichBlock::Paragraph { text } | RichBlock::Explanation { text } => {
            vec![Line::from(text.clone()), Line::default()]
        }
        RichBlock::RequirementList { items } => {
            let mut lines: Vec<Line> = items
                .iter()
                .map(|item| {
                    Line::from(vec![
                        Span::styled("  ⇨ ", Style::default().fg(Color::Cyan)),
                        Span::raw(item.clone()),
                    ])
                })
                .collect();
            lines.push(Line::default());
            lines
        }
        RichBlock::Table { headers, rows } => {
            let mut lines = vec![Line::from(Span::styled(
                headers.join(" | "),
                Style::default().add_modifier(Modifier::BOLD),
            ))];
            lines.extend(rows.iter().map(|row| Line::from(row.join(" | "))));
            lines.push(Line::default());
            lines
        }
        RichBlock::Ask { text } => vec![Line::from(Span::styled(
            text.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ))],
        RichBlock::Reference { .. } => vec![Line::from(Span::styled(
            block.plain_text(),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        ))],
        RichBlock::Notice { text } => vec![Line::from(Span::styled(
            text.clone(),
            Style::default().add_modifier(Modifier::ITALIC),
        ))],
    }
}
