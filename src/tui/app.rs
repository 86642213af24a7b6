//! TUI application main loop.

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use crate::catalog::Catalog;
use crate::clipboard::SystemClipboard;
use crate::config::Config;
use crate::error::{GlyphError, Result};
use crate::store::SymbolStore;

use super::events::{Event, EventHandler};
use super::state::{Action, AppState, Section};
use super::theme::Theme;

/// Width of one grid cell, including the trailing gap.
const CELL_WIDTH: u16 = 18;

/// Run the symbol picker TUI.
pub fn run(
    catalog: Catalog,
    store: SymbolStore,
    config: &Config,
    theme_name: Option<&str>,
) -> Result<()> {
    let name = theme_name.unwrap_or(&config.theme.name);
    let theme = Theme::from_name(name)
        .ok_or_else(|| GlyphError::config(format!("unknown theme: {name}")))?;

    // Setup terminal
    enable_raw_mode().map_err(|e| {
        GlyphError::io(
            "Cannot launch TUI - no interactive terminal available. \
             The TUI requires a terminal with keyboard input support",
            e,
        )
    })?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| GlyphError::io("Failed to enter alternate screen", e))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| GlyphError::io("Failed to create terminal", e))?;

    let mut app = AppState::new(
        catalog,
        store,
        theme,
        Box::new(SystemClipboard),
        Duration::from_millis(config.behavior.debounce_ms),
        config.behavior.auto_close,
    );

    // Main loop
    let result = run_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().map_err(|e| GlyphError::io("Failed to disable raw mode", e))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| GlyphError::io("Failed to leave alternate screen", e))?;
    terminal
        .show_cursor()
        .map_err(|e| GlyphError::io("Failed to show cursor", e))?;

    result
}

/// Main event loop using EventHandler.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    // 50ms tick keeps the debounce and toast timers responsive.
    let events = EventHandler::new(Duration::from_millis(50));

    loop {
        terminal
            .draw(|f| draw_ui(f, app))
            .map_err(|e| GlyphError::io("Failed to draw TUI", e))?;

        match events.next() {
            Ok(Event::Key(key)) => {
                let now = Instant::now();
                match (key.modifiers, key.code) {
                    (KeyModifiers::NONE, KeyCode::Esc)
                    | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
                        app.dispatch(Action::Close, now);
                    }
                    (KeyModifiers::NONE, KeyCode::Enter) => {
                        app.dispatch(Action::Activate, now);
                    }
                    (KeyModifiers::NONE, KeyCode::Left) => app.dispatch(Action::MoveLeft, now),
                    (KeyModifiers::NONE, KeyCode::Right) => app.dispatch(Action::MoveRight, now),
                    (KeyModifiers::NONE, KeyCode::Up) => app.dispatch(Action::MoveUp, now),
                    (KeyModifiers::NONE, KeyCode::Down) => app.dispatch(Action::MoveDown, now),
                    (KeyModifiers::CONTROL, KeyCode::Char('f')) => {
                        app.dispatch(Action::ToggleFavorite, now);
                    }
                    (KeyModifiers::NONE, KeyCode::Backspace) => {
                        let mut query = app.query.clone();
                        if query.pop().is_some() {
                            app.dispatch(Action::QueryChanged(query), now);
                        }
                    }
                    (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                        let mut query = app.query.clone();
                        query.push(c);
                        app.dispatch(Action::QueryChanged(query), now);
                    }
                    _ => {}
                }
            }
            Ok(Event::Tick) => app.tick(Instant::now()),
            Ok(Event::Resize(_, _)) => {}
            Err(_) => return Err(GlyphError::Interrupted),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Draw the full UI: search box, sectioned symbol grid, status line.
fn draw_ui(f: &mut Frame, app: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_search_box(f, app, chunks[0]);
    draw_grid(f, app, chunks[1]);
    draw_status_line(f, app, chunks[2]);
}

fn draw_search_box(f: &mut Frame, app: &AppState, area: Rect) {
    let input = Paragraph::new(Line::from(vec![
        Span::raw(app.query.as_str()),
        Span::styled("\u{2588}", app.theme.dim_style()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.theme.border_focused_style())
            .title(" Search symbols "),
    );
    f.render_widget(input, area);
}

/// Render the grid and derive the column count from the available width,
/// so keyboard rows always match what is on screen.
fn draw_grid(f: &mut Frame, app: &mut AppState, area: Rect) {
    let inner_width = area.width.saturating_sub(2).max(1);
    let columns = usize::from((inner_width / CELL_WIDTH).max(1));
    app.set_columns(columns);

    let mut lines: Vec<Line> = Vec::new();
    let mut selected_line = 0usize;
    let mut current_section: Option<Section> = None;
    let mut row: Vec<Span> = Vec::new();
    let mut row_len = 0usize;

    for (index, item) in app.items.iter().enumerate() {
        if current_section != Some(item.section) {
            if !row.is_empty() {
                lines.push(Line::from(std::mem::take(&mut row)));
                row_len = 0;
            }
            if current_section.is_some() {
                lines.push(Line::default());
            }
            lines.push(Line::styled(
                item.section.title(),
                app.theme.section_title_style(),
            ));
            current_section = Some(item.section);
        }

        if row_len == columns {
            lines.push(Line::from(std::mem::take(&mut row)));
            row_len = 0;
        }

        let selected = app.selected == Some(index);
        if selected {
            // The row the cell will land on.
            selected_line = lines.len();
        }
        row.push(grid_cell(app, index, selected));
        row_len += 1;
    }
    if !row.is_empty() {
        lines.push(Line::from(row));
    }

    if lines.is_empty() {
        lines.push(Line::styled("No symbols found", app.theme.dim_style()));
    }

    // Keep the selected row inside the viewport.
    let viewport = usize::from(area.height.saturating_sub(2).max(1));
    let offset = selected_line.saturating_sub(viewport.saturating_sub(1));

    let grid = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.theme.border_style()),
        )
        .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0));
    f.render_widget(grid, area);
}

fn grid_cell(app: &AppState, index: usize, selected: bool) -> Span<'static> {
    let item = &app.items[index];
    let marker = if item.favorite { "\u{2605} " } else { "" };
    let mut label = format!("{} {}{}", item.record.symbol, marker, item.record.name);

    // Truncate on a character boundary, then pad to the fixed cell width.
    let max = usize::from(CELL_WIDTH) - 1;
    if label.chars().count() > max {
        label = label.chars().take(max - 1).collect::<String>() + "\u{2026}";
    }
    let padding = usize::from(CELL_WIDTH) - label.chars().count();
    label.extend(std::iter::repeat(' ').take(padding));

    let style = if selected {
        app.theme.selection_style(app.accent)
    } else if item.favorite {
        app.theme.favorite_style()
    } else {
        app.theme.symbol_name_style()
    };
    Span::styled(label, style)
}

fn draw_status_line(f: &mut Frame, app: &AppState, area: Rect) {
    let now = Instant::now();
    let line = if let Some(toast) = &app.toast {
        let style = if toast.is_fading(now) {
            app.theme.toast_fading_style()
        } else {
            app.theme.toast_style()
        };
        Line::styled("Copied!", style)
    } else {
        Line::styled(
            "\u{2190}\u{2191}\u{2192}\u{2193} navigate \u{00b7} Enter copy \u{00b7} \
             Ctrl-F favorite \u{00b7} Esc close",
            app.theme.dim_style(),
        )
    };
    f.render_widget(Paragraph::new(line), area);
}
