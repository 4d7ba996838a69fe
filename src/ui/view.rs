use crate::app::{AppMode, RenderState, Status};
use crate::speech::settings::Bounds;
use crate::speech::{Field, Slider};
use crate::ui::theme::colors;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

const SLIDER_WIDTH: usize = 20;

fn panel(title: &str, active: bool) -> Block<'static> {
    let border = if active {
        colors::accent()
    } else {
        colors::dimmed()
    };
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors::background()))
}

/// Lead padding, focused chunk and trail padding as three styled spans.
///
/// Separating spaces only appear next to non-empty padding.
pub fn chunk_spans(lead: &str, focus: &str, trail: &str) -> Vec<Span<'static>> {
    let pad_style = Style::default().fg(colors::dimmed());
    let focus_style = Style::default()
        .fg(colors::focus_text())
        .bg(colors::focus())
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::new();
    if !lead.is_empty() {
        spans.push(Span::styled(lead.to_string(), pad_style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(focus.to_string(), focus_style));
    if !trail.is_empty() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(trail.to_string(), pad_style));
    }
    spans
}

pub fn render_chunk(state: &RenderState) -> Paragraph<'static> {
    let line = if state.word_count == 0 {
        Line::from(Span::styled(
            "Press i to type text, or @ to load a file",
            Style::default().fg(colors::dimmed()),
        ))
    } else {
        Line::from(chunk_spans(&state.lead, &state.focus, &state.trail))
    };

    Paragraph::new(line)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(panel("Chunk", state.mode == AppMode::Reading))
}

pub fn render_progress_bar(progress: (usize, usize)) -> Line<'static> {
    let (current, total) = progress;
    let ratio = if total == 0 {
        0.0
    } else {
        current as f64 / total as f64
    };

    let filled_len = ((ratio * SLIDER_WIDTH as f64) as usize).min(SLIDER_WIDTH);
    let empty_len = SLIDER_WIDTH - filled_len;

    Line::from(vec![
        Span::styled("─".repeat(filled_len), Style::default().fg(colors::text())),
        Span::styled("─".repeat(empty_len), Style::default().fg(colors::dimmed())),
        Span::styled(
            format!(" {}/{}", current, total),
            Style::default().fg(colors::dimmed()),
        ),
    ])
    .alignment(Alignment::Center)
}

pub fn render_controls(state: &RenderState) -> Line<'static> {
    let key = Style::default().fg(colors::accent());
    let text = Style::default().fg(colors::text());

    let mut spans = vec![
        Span::styled("← ", key),
        Span::styled("Retreat  ", text),
        Span::styled(format!("Position ({})", state.position), text),
        Span::styled("  Advance", text),
        Span::styled(" →", key),
        Span::styled("   r ", key),
        Span::styled("Reset", text),
        Span::styled("   s ", key),
        Span::styled("Speak", text),
        Span::styled("   -/+ ", key),
        Span::styled(format!("Display words: {}", state.display_count), text),
        Span::styled("   [/] ", key),
        Span::styled(format!("Pad words: {}", state.pad_count), text),
    ];
    if state.auto_speak {
        spans.push(Span::styled("   auto-speak", Style::default().fg(colors::dimmed())));
    }
    Line::from(spans).alignment(Alignment::Center)
}

/// Text slider like `▕██████░░░░░░▏`.
pub fn slider_bar(value: f32, bounds: Bounds, width: usize) -> String {
    let span = bounds.max - bounds.min;
    let ratio = if span > 0.0 {
        ((value - bounds.min) / span).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (ratio * width as f32).round() as usize;
    format!("▕{}{}▏", "█".repeat(filled), "░".repeat(width - filled))
}

fn error_line(message: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("    {}", message),
        Style::default().fg(colors::error()),
    ))
}

pub fn render_settings(state: &RenderState) -> Paragraph<'static> {
    let label = Style::default().fg(colors::text());
    let value = Style::default().fg(colors::accent());
    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        Span::styled(format!("{:<7}", Field::Voice.label()), label),
        Span::styled(state.voice_label(), value),
        Span::styled(
            format!("  v/V ({} voices)", state.voice_count),
            Style::default().fg(colors::dimmed()),
        ),
    ]));
    if let Some(message) = state.error_for(Field::Voice) {
        lines.push(error_line(message));
    }

    for slider in Slider::ALL {
        let current = state.settings.get(slider);
        lines.push(Line::from(vec![
            Span::styled(format!("{:<7}", slider.label()), label),
            Span::styled(slider_bar(current, slider.bounds(), SLIDER_WIDTH), value),
            Span::styled(format!(" {:.1}", current), label),
        ]));
        if let Some(message) = state.error_for(Field::Slider(slider)) {
            lines.push(error_line(message));
        }
    }

    let title = if state.speech_available {
        "Speech"
    } else {
        "Speech (unavailable)"
    };
    Paragraph::new(lines).block(panel(title, false))
}

/// Rows `text` needs when word-wrapped to `width` columns, as the editor
/// paragraph lays it out.
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    let rows = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .line_count(width.max(1));
    rows.min(u16::MAX as usize) as u16
}

pub fn render_editor(
    state: &RenderState,
    inner_width: u16,
    inner_height: u16,
) -> Paragraph<'static> {
    let editing = state.mode == AppMode::Editing;
    let mut text = state.text.clone();
    if editing {
        text.push('▏');
    }

    // Keep the end of the text, where typing happens, in view
    let scroll = wrapped_height(&text, inner_width).saturating_sub(inner_height);
    let title = if editing {
        "Text (editing, Esc to finish)"
    } else {
        "Text (i to edit)"
    };

    Paragraph::new(text)
        .style(Style::default().fg(colors::text()))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(panel(title, editing))
}

pub fn render_status(state: &RenderState) -> Line<'static> {
    match &state.status {
        Some(Status::Info(message)) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(colors::dimmed()),
        )),
        Some(Status::Warning(message)) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(colors::error()),
        )),
        None => Line::default(),
    }
}

pub fn mode_indicator(mode: AppMode) -> &'static str {
    match mode {
        AppMode::Reading => " READING ",
        AppMode::Editing => " EDITING ",
        AppMode::Command => " COMMAND ",
        AppMode::Quit => " QUIT ",
    }
}

pub fn render_command_deck(state: &RenderState) -> Paragraph<'static> {
    let indicator = Span::styled(
        mode_indicator(state.mode),
        Style::default()
            .fg(colors::background())
            .bg(colors::accent())
            .add_modifier(Modifier::BOLD),
    );

    let body = if state.mode == AppMode::Command {
        Span::styled(
            format!(" {}", state.command_input),
            Style::default().fg(colors::text()),
        )
    } else {
        Span::styled(
            " Type : for commands, @file or @@ to load, ? for help",
            Style::default().fg(colors::dimmed()),
        )
    };

    Paragraph::new(Line::from(vec![
        Span::styled("▌", Style::default().fg(colors::accent())),
        indicator,
        body,
    ]))
    .style(Style::default().bg(colors::surface()))
}

/// Column of the command deck cursor, relative to the deck's left edge.
pub fn command_cursor_column(state: &RenderState) -> u16 {
    let prefix = "▌".width() + mode_indicator(state.mode).width() + 1;
    (prefix + state.command_input.width()).min(u16::MAX as usize) as u16
}

pub fn render_help() -> Paragraph<'static> {
    let rows = [
        ("← / h", "retreat one chunk"),
        ("→ / l", "advance one full chunk"),
        ("r", "reset to the first word"),
        ("s / Space", "speak the chunk"),
        ("- / +", "display words (1-5)"),
        ("[ / ]", "pad words (0-5)"),
        (", / .", "rate"),
        ("; / '", "pitch"),
        ("9 / 0", "volume"),
        ("v / V", "next / previous voice"),
        ("i", "edit text, Esc to finish"),
        (":", "command (:d 3, :rate 1.2, :voice NAME)"),
        ("@", "load file (@notes.txt) or clipboard (@@)"),
        ("q", "quit"),
    ];

    let lines: Vec<Line> = rows
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(format!("{:>10}  ", keys), Style::default().fg(colors::accent())),
                Span::styled(action.to_string(), Style::default().fg(colors::text())),
            ])
        })
        .collect();

    Paragraph::new(lines).block(panel("Help (? to close)", true))
}
