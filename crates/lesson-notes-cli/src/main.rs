use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use lesson_notes_config::Config;
use lesson_notes_engine::{LessonTextParser, ParseReport, TranslationEntry, io};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};

const NOTHING_PARSED: &str = "Could not parse any translations from the text.";

struct App {
    report: ParseReport,
    show_romaji: bool,
    list_state: ListState,
}

impl App {
    fn new(report: ParseReport, show_romaji: bool) -> Self {
        let mut list_state = ListState::default();
        if !report.entries.is_empty() {
            list_state.select(Some(0));
        }

        Self {
            report,
            show_romaji,
            list_state,
        }
    }

    fn next_entry(&mut self) {
        let len = self.report.entries.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn previous_entry(&mut self) {
        let len = self.report.entries.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    fn selected_entry(&self) -> Option<&TranslationEntry> {
        self.list_state
            .selected()
            .and_then(|i| self.report.entries.get(i))
    }

    fn detail_lines(&self) -> Vec<String> {
        let Some(entry) = self.selected_entry() else {
            return vec![NOTHING_PARSED.to_string()];
        };

        let mut lines = vec![
            format!("#{}", entry.sort_order),
            String::new(),
            "Original".to_string(),
            format!("  {}", entry.original_text),
            String::new(),
            "Translation".to_string(),
            format!("  {}", entry.translated_text),
        ];
        if self.show_romaji
            && let Some(romaji) = &entry.romaji_text
        {
            lines.push(String::new());
            lines.push("Romaji".to_string());
            lines.push(format!("  {romaji}"));
        }
        lines
    }

    fn list_title(&self) -> String {
        match self.report.skipped.len() {
            0 => format!("Entries ({})", self.report.entries.len()),
            skipped => format!(
                "Entries ({}, {skipped} blocks skipped)",
                self.report.entries.len()
            ),
        }
    }
}

/// One line per entry and per skipped block, as printed by `--check`.
fn check_lines(report: &ParseReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .entries
        .iter()
        .map(|entry| match &entry.romaji_text {
            Some(romaji) => format!(
                "{}. {} → {} ({romaji})",
                entry.sort_order, entry.original_text, entry.translated_text
            ),
            None => format!(
                "{}. {} → {}",
                entry.sort_order, entry.original_text, entry.translated_text
            ),
        })
        .collect();

    for skipped in &report.skipped {
        let first_line = skipped.text.lines().next().unwrap_or_default();
        lines.push(format!(
            "skipped block {}: {} ({first_line})",
            skipped.index + 1,
            skipped.reason
        ));
    }
    lines
}

struct Args {
    check: bool,
    notes_path: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Option<Args> {
    let mut check = false;
    let mut notes_path = None;

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--check" => check = true,
            _ if notes_path.is_none() && !arg.starts_with("--") => {
                notes_path = Some(PathBuf::from(arg))
            }
            _ => return None,
        }
    }

    Some(Args { check, notes_path })
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let Some(parsed) = parse_args(&args) else {
        eprintln!("Usage: {} [--check] [notes-file]", args[0]);
        process::exit(1);
    };

    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };
    let show_romaji = config.as_ref().is_none_or(|c| c.show_romaji);

    let notes_path = match (parsed.notes_path, config) {
        (Some(path), _) => path,
        (None, Some(config)) => {
            log::info!("Using notes path from {}", config_path.display());
            config.notes_path
        }
        (None, None) => {
            eprintln!("Error: No notes file provided and no config file found");
            eprintln!("Usage: {} [--check] [notes-file]", args[0]);
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
    };

    let text = match io::read_notes_file(&notes_path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: Cannot read '{}': {e}", notes_path.display());
            process::exit(1);
        }
    };

    let report = LessonTextParser::new().parse_with_report(&text);
    log::info!(
        "Parsed {} entries from {}",
        report.entries.len(),
        notes_path.display()
    );

    if parsed.check {
        for line in check_lines(&report) {
            println!("{line}");
        }
        if report.entries.is_empty() {
            eprintln!("{NOTHING_PARSED}");
            process::exit(1);
        }
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(report, show_romaji);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_entry(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_entry(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[0]);

    let items: Vec<ListItem> = app
        .report
        .entries
        .iter()
        .map(|entry| {
            let text = format!("{:>3}. {}", entry.sort_order, entry.original_text);
            ListItem::new(Line::from(Span::raw(text)))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(app.list_title()))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(list, chunks[0], &mut app.list_state);

    let detail: Vec<Line> = app.detail_lines().into_iter().map(Line::from).collect();
    let detail = Paragraph::new(detail)
        .block(Block::default().borders(Borders::ALL).title("Entry"))
        .wrap(Wrap { trim: false });

    f.render_widget(detail, chunks[1]);

    let help = Paragraph::new(Line::from("q: Quit | ↑/k: Previous | ↓/j: Next"));
    f.render_widget(help, rows[1]);
}
