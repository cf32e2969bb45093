//! User interface rendering.

mod keymap_bar;
mod scene;
mod status_bar;
mod theme;

use crate::app::App;
use crate::surface::ShapeRecorder;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use keymap_bar::draw_keymap;
pub use scene::draw_scene;
pub use status_bar::{draw_status, status_text};
pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Scene, status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(f.area());

    let mut recorder = ShapeRecorder::new();
    app.simulation.render(&mut recorder, &colors);

    draw_scene(f, chunks[0], recorder.shapes(), app.window_size(), &colors);
    draw_status(f, chunks[1], app, &colors);
    draw_keymap(f, chunks[2], &colors);
}
