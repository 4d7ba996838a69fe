use crate::app::{App, AppMode};
use crate::ui::keys::key_to_event;
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::theme::colors;
use crate::ui::view::{
    command_cursor_column, render_chunk, render_command_deck, render_controls, render_editor,
    render_help, render_progress_bar, render_settings, render_status,
};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Margin, Position, Rect},
    style::Style,
    widgets::{Block, Clear},
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;

/// How long to wait for input before polling the voice list again.
const TICK: Duration = Duration::from_millis(50);

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        loop {
            app.tick();
            self.render_frame(app)?;

            if app.mode() == AppMode::Quit {
                tracing::info!("Quitting");
                return Ok(());
            }

            if event::poll(TICK)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        app.handle_event(key_to_event(app.mode(), key));
                    }
                }
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let state = app.get_render_state();

        self.terminal.draw(|frame| {
            let area = frame.area();
            frame.render_widget(
                Block::default().style(Style::default().bg(colors::background())),
                area,
            );

            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(5),    // text
                    Constraint::Length(5), // chunk
                    Constraint::Length(1), // progress
                    Constraint::Length(1), // controls
                    Constraint::Length(8), // speech settings
                    Constraint::Length(1), // status
                    Constraint::Length(1), // command deck
                ])
                .split(area);

            let editor_inner = rows[0].inner(Margin::new(1, 1));
            frame.render_widget(
                render_editor(&state, editor_inner.width, editor_inner.height),
                rows[0],
            );
            frame.render_widget(render_chunk(&state), rows[1]);
            frame.render_widget(render_progress_bar(state.progress()), rows[2]);
            frame.render_widget(render_controls(&state), rows[3]);
            frame.render_widget(render_settings(&state), rows[4]);
            frame.render_widget(render_status(&state), rows[5]);
            frame.render_widget(render_command_deck(&state), rows[6]);

            if state.mode == AppMode::Command {
                let column = rows[6].x.saturating_add(command_cursor_column(&state));
                frame.set_cursor_position(Position::new(column, rows[6].y));
            }

            if state.show_help {
                let popup = centered(area, 60, 18);
                frame.render_widget(Clear, popup);
                frame.render_widget(render_help(), popup);
            }
        })?;

        Ok(())
    }
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
