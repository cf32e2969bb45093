//! Status bar UI component.

use crate::app::App;
use crate::ui::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Status line text for the current simulation state.
pub fn status_text(app: &App) -> String {
    let sim = &app.simulation;
    format!(
        "t = {:.1} s | angle = {:+.3} rad | m = {} | samples: {} | {}",
        sim.pendulum().elapsed(),
        sim.pendulum().angle(),
        sim.pendulum().ball().mass(),
        sim.plot().samples().count(),
        app.status
    )
}

/// Draw the status bar.
pub fn draw_status(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let mut spans = Vec::new();
    if app.paused {
        spans.push(Span::styled(
            "PAUSED ",
            Style::default()
                .fg(colors.warning)
                .add_modifier(Modifier::BOLD),
        ));
    }
    spans.push(Span::raw(status_text(app)));

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}
