mod app;

use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use exam_bank_config::Config;
use exam_bank_engine::{QuestionStore, UploadSummary, ingest, load_source};
use log::info;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use std::{env, io::stdout, path::PathBuf, process};

const DEFAULT_LOG_FILTER: &str = "warn";

struct Args {
    json: bool,
    source: Option<PathBuf>,
}

fn parse_args(program: &str, args: &[String]) -> Args {
    let mut parsed = Args {
        json: false,
        source: None,
    };
    for arg in args {
        match arg.as_str() {
            "--json" => parsed.json = true,
            "-h" | "--help" => {
                println!("Usage: {program} [--json] [exam.pdf|exam.txt]");
                process::exit(0);
            }
            _ if parsed.source.is_none() && !arg.starts_with('-') => {
                parsed.source = Some(PathBuf::from(arg));
            }
            _ => {
                eprintln!("Usage: {program} [--json] [exam.pdf|exam.txt]");
                process::exit(1);
            }
        }
    }
    parsed
}

fn main() -> Result<()> {
    let argv: Vec<String> = env::args().collect();
    let program = argv.first().map(String::as_str).unwrap_or("exam-bank");
    let args = parse_args(program, argv.get(1..).unwrap_or_default());

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: ignoring config file: {e}");
            None
        }
    };

    let log_filter = config
        .as_ref()
        .and_then(|c| c.log_filter.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_filter)).init();

    // Source from CLI argument, else from config, else the built-in samples
    let source = args.source.or_else(|| config.map(|c| c.source_path));

    let mut store = QuestionStore::seeded();
    let mut summary: Option<UploadSummary> = None;
    let source_label = match &source {
        Some(path) => {
            let text = match load_source(path) {
                Ok(text) => text,
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(1);
                }
            };
            let result = ingest(&mut store, &text);
            if !result.replaced {
                eprintln!(
                    "Warning: no questions found in '{}'; showing sample questions",
                    path.display()
                );
            }
            info!("loaded {} questions from {}", result.questions_count, path.display());
            summary = Some(result);
            path.display().to_string()
        }
        None => "sample questions".to_string(),
    };

    if args.json {
        let output = serde_json::json!({
            "summary": summary,
            "questions": store.snapshot(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(store, source_label);

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_question(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_question(),
                KeyCode::Char(c @ 'a'..='d') | KeyCode::Char(c @ 'A'..='D') => {
                    app.select_letter(c)
                }
                KeyCode::Enter => app.check_answer(),
                KeyCode::Char('f') => app.finish(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(rows[0]);

    // Question list panel
    let question_items: Vec<ListItem> = app
        .store
        .snapshot()
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let display_text = format!("{} {:>3}. {}", app.list_marker(i), q.id, q.stem);
            ListItem::new(vec![Line::from(vec![Span::raw(display_text)])])
        })
        .collect();

    let title = format!(
        "Questions ({}/{} answered) - {}",
        app.answered_count(),
        app.store.len(),
        app.source_label
    );
    let question_list = List::new(question_items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(question_list, chunks[0], &mut app.question_list_state);

    // Content panel
    let panel_title = if app.report().is_some() {
        "Results"
    } else {
        "Question"
    };
    let content = Paragraph::new(app.content_lines())
        .block(Block::default().borders(Borders::ALL).title(panel_title))
        .wrap(Wrap { trim: true });

    f.render_widget(content, chunks[1]);

    // Instructions, or the last status message
    let help_text = match app.status() {
        Some(status) => Line::from(Span::styled(
            status.to_string(),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(vec![
            Span::raw("q: Quit | "),
            Span::raw("↑/k: Previous | "),
            Span::raw("↓/j: Next | "),
            Span::raw("a-d: Choose | Enter: Check | f: Finish"),
        ]),
    };

    let help = Paragraph::new(vec![help_text]).block(Block::default());
    f.render_widget(help, rows[1]);
}
