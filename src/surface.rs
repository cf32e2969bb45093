//! Immediate-mode drawing target.
//!
//! Scene code issues line and circle calls against a [`Surface`] in window
//! pixel coordinates. [`ShapeRecorder`] keeps the calls so the terminal UI can
//! replay them onto a canvas, and so tests can inspect what was drawn.

use ratatui::style::Color;

use crate::vector::Vec2;

/// A target for 2D drawing calls in pixel space.
pub trait Surface {
    /// Draw a straight line from `from` to `to`.
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color);

    /// Draw a circle outline.
    fn draw_circle(&mut self, center: Vec2, radius: f64, color: Color);
}

/// One recorded drawing call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// A line segment.
    Line {
        /// Start point.
        from: Vec2,
        /// End point.
        to: Vec2,
        /// Stroke color.
        color: Color,
    },
    /// A circle.
    Circle {
        /// Center point.
        center: Vec2,
        /// Radius in pixels.
        radius: f64,
        /// Stroke color.
        color: Color,
    },
}

/// Surface that records every call in order.
#[derive(Debug, Clone, Default)]
pub struct ShapeRecorder {
    shapes: Vec<Shape>,
}

impl ShapeRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded shapes in draw order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Line segments drawn with `color`.
    pub fn lines_with_color(&self, color: Color) -> Vec<(Vec2, Vec2)> {
        self.shapes
            .iter()
            .filter_map(|shape| match *shape {
                Shape::Line { from, to, color: c } if c == color => Some((from, to)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for ShapeRecorder {
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.shapes.push(Shape::Line { from, to, color });
    }

    fn draw_circle(&mut self, center: Vec2, radius: f64, color: Color) {
        self.shapes.push(Shape::Circle {
            center,
            radius,
            color,
        });
    }
}
