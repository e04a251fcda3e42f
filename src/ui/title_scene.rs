//! Title screen.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Mascot art shown under the start prompt. Lines are padded to equal
/// width so per-line centering keeps them aligned.
const FROG: [&str; 4] = ["  @..@  ", " (----) ", "( >__< )", "^^ ~~ ^^"];

/// Render the title screen.
pub fn render_title(frame: &mut Frame) {
    let area = frame.size();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let mut lines = Vec::new();
    let top_pad = area.height.saturating_sub(11) / 2;
    for _ in 0..top_pad {
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Floppy Frog",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Return to start",
        Style::default().fg(Color::Yellow),
    )));
    lines.push(Line::from(""));

    for row in FROG {
        lines.push(Line::from(Span::styled(
            row,
            Style::default().fg(Color::Green),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Flap with Space. Quit with q.",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
