mod host;
mod terminal;

use std::fs::{self, File};
use std::io;

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use datatable_pagination::render::GAP;
use datatable_pagination::{
    hit_test, ids, layout_row, render_line, Event, Key, Pagination, PaginationError,
    PaginationOptions,
};
use log::{info, warn};
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

use host::TableHost;
use terminal::Terminal;

const DEMO_ROWS: usize = 137;

/// Below this many columns the control switches to its compact layout.
const COMPACT_WIDTH: u16 = 60;

#[derive(Debug, Error)]
enum AppError {
    #[error("terminal: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Pagination(#[from] PaginationError),
    #[error("logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let log_file = File::create("pagination-tui.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    // Optional JSON options file, e.g. {"noRowsPerPage": true}
    let options = match std::env::args().nth(1) {
        Some(path) => {
            info!("loading pagination options from {path}");
            PaginationOptions::from_json(&fs::read_to_string(path)?)?
        }
        None => PaginationOptions::default(),
    };

    let rows = (1..=DEMO_ROWS).map(|n| format!("Row {n:03}")).collect();
    let mut host = TableHost::new(rows, options);
    let mut terminal = Terminal::new()?;

    loop {
        let (width, height) = terminal.size()?;
        let footer_y = height.saturating_sub(1);
        let mut pagination = host.pagination(width < COMPACT_WIDTH);
        let root = pagination.element();

        let mut lines = vec![
            "←/→ page  Home/End first/last  PgUp/PgDn page size  r flip direction  q quit"
                .to_string(),
            String::new(),
        ];
        lines.extend(host.visible_rows().iter().cloned());
        terminal.draw(&lines, footer_y, &render_line(&root, width))?;

        let layout = layout_row(&root, 0, footer_y, GAP, width);

        for event in terminal.poll(None)? {
            match event {
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('r') => host.toggle_direction(),
                    code => dispatch(&mut pagination, Event::key(Key::from(code))),
                },
                CrosstermEvent::Mouse(mouse)
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left) =>
                {
                    let Some(target) = hit_test(&layout, &root, mouse.column, mouse.row) else {
                        continue;
                    };
                    if target == ids::ROWS_PER_PAGE {
                        pagination.step_rows_per_page(true, true);
                    } else {
                        dispatch(&mut pagination, Event::click(target));
                    }
                }
                _ => {}
            }
        }

        host.apply_pending();
    }
}

fn dispatch(pagination: &mut Pagination, event: Event) {
    if let Err(e) = pagination.dispatch(&event) {
        warn!("pagination rejected event for {:?}: {e}", event.target());
    }
}
