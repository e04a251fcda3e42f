//! Play-area rendering: obstacle columns, the bird, and the score line.

use crate::constants::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use crate::game::types::FlightState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render one frame of the run. The playfield is drawn cell by cell,
/// clipped to the terminal area; the score overlays the top-left corner.
pub fn render_play(frame: &mut Frame, state: &FlightState) {
    let area = frame.size();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let width = (area.width as i32).min(PLAYFIELD_WIDTH);
    let height = (area.height as i32).min(PLAYFIELD_HEIGHT);

    let mut lines = Vec::with_capacity(height as usize);
    for row in 0..height {
        let mut spans = Vec::with_capacity(width as usize);
        for col in 0..width {
            if col == state.bird.x && row == state.bird.y {
                spans.push(Span::styled(
                    bird_glyph(state.bird.velocity),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
            } else if state
                .obstacles
                .iter()
                .any(|o| o.occupies_column(col) && o.is_solid_at(row))
            {
                spans.push(Span::styled("|", Style::default().fg(Color::Green)));
            } else {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
    }
    frame.render_widget(Paragraph::new(lines), area);

    // Score overlays the top playfield row
    let score_area = Rect::new(area.x, area.y, area.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("Score: {}", state.score),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))),
        score_area,
    );
}

/// Bird glyph, switched on vertical velocity.
fn bird_glyph(velocity: i32) -> &'static str {
    if velocity < 0 {
        "^"
    } else if velocity > 2 {
        "v"
    } else {
        ">"
    }
}
