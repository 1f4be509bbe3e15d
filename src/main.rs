//! tocbar: build table-of-contents sidebars for HTML and Markdown documents.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use ratatui::crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tocbar::{app_state, config, ids::IdGenerator, input, render, selector::Selector, toc, ui};

#[derive(Parser)]
#[command(name = "tocbar")]
#[command(about = "Table-of-contents sidebars for documents", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
struct Args {
    /// Document to build the TOC for
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Heading selector; repeat to build several independent outlines
    #[arg(long, short = 's', value_name = "SELECTOR")]
    selector: Vec<String>,

    /// Prefix headings with a running numeral
    #[arg(long, short = 'n')]
    numerate: bool,

    /// Seal columns at exactly the configured capacity
    #[arg(long)]
    strict_columns: bool,

    /// Insert the trigger and panel elements when the document lacks them
    #[arg(long)]
    inject: bool,

    /// Print the built columns as JSON instead of the document
    #[arg(long, conflicts_with = "preview")]
    json: bool,

    /// Open an interactive preview where hovering the trigger shows the panel
    #[arg(long)]
    preview: bool,

    /// Write the rendered document here instead of stdout
    #[arg(long, short = 'o', value_name = "OUT")]
    output: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut cfg = config::Config::load();

    // Override config with command line args
    if args.numerate {
        cfg.numerate = true;
    }
    if args.strict_columns {
        cfg.strict_columns = true;
    }
    let selectors = if args.selector.is_empty() {
        vec![cfg.selector.clone()]
    } else {
        args.selector.clone()
    };
    let selectors = selectors
        .iter()
        .map(|s| Selector::parse(s))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let mut document = input::load_document(&args.path, &cfg.file_extensions)?;
    let panel_ids = cfg.panel_ids();
    if args.inject || args.preview {
        panel_ids.ensure_in(&mut document);
    }

    let mut builder = toc::TocBuilder::new(IdGenerator::new(cfg.id_prefix.clone()))
        .with_capacity(cfg.column_capacity)
        .with_split(cfg.column_split())
        .with_panel_id(cfg.panel_id.clone());
    let mut columns = Vec::new();
    for selector in &selectors {
        columns.extend(builder.add_toc_entry(&mut document, selector, cfg.numerate));
    }

    if columns.is_empty() {
        eprintln!("No headings matched");
    }

    if args.preview {
        let title = args.path.display().to_string();
        let state = app_state::AppState::new(title, document, columns, &panel_ids);
        return run_tui(state);
    }

    let out = if args.json {
        serde_json::to_string_pretty(&columns).map_err(io::Error::other)?
    } else {
        render::to_html(&document)
    };
    match args.output {
        Some(path) => std::fs::write(path, out),
        None => {
            println!("{out}");
            Ok(())
        }
    }
}

fn run_tui(mut app: app_state::AppState) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut app_state::AppState,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        match event::read()? {
            Event::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                _ => {}
            },
            Event::Mouse(mouse) => {
                if matches!(mouse.kind, MouseEventKind::Moved | MouseEventKind::Drag(_)) {
                    app.pointer_moved(mouse.column, mouse.row);
                }
            }
            _ => {}
        }
    }
}
