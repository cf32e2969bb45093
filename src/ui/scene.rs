//! Scene canvas: replays recorded shapes in the terminal.

use crate::surface::Shape;
use crate::ui::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Circle, Line},
        Block, Borders,
    },
    Frame,
};

/// Draw `shapes` given in window pixels (y down) onto a canvas covering
/// `width` x `height`.
pub fn draw_scene(
    f: &mut Frame<'_>,
    area: Rect,
    shapes: &[Shape],
    (width, height): (f64, f64),
    colors: &ThemeColors,
) {
    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(" Foucault ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        )
        .background_color(colors.bg)
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for shape in shapes {
                match *shape {
                    Shape::Line { from, to, color } => ctx.draw(&Line {
                        x1: from.x,
                        y1: height - from.y,
                        x2: to.x,
                        y2: height - to.y,
                        color,
                    }),
                    Shape::Circle {
                        center,
                        radius,
                        color,
                    } => ctx.draw(&Circle {
                        x: center.x,
                        y: height - center.y,
                        radius,
                        color,
                    }),
                }
            }
        });

    f.render_widget(canvas, area);
}
