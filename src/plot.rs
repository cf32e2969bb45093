//! Angle-over-time plot.
//!
//! The plot maps logical `(time, value)` samples into window pixels through
//! `origin + logical * unit * unit_scale`, then draws both axes with
//! arrowheads, tick marks every grid step, and the sample curve.
//!
//! Axis boundaries are computed once after configuration. The curve stops at
//! the first sample past the right boundary, so it freezes once simulated
//! time runs beyond the configured x range while samples keep accumulating.

use crate::config::{PlotConfig, WindowConfig};
use crate::error::Result;
use crate::sample_buffer::SampleBuffer;
use crate::surface::Surface;
use crate::ui::ThemeColors;
use crate::vector::Vec2;

/// Pixel-space extent of both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBoundaries {
    /// Leftmost x pixel of the time axis.
    pub left: f64,
    /// Rightmost x pixel of the time axis.
    pub right: f64,
    /// Lowest (largest y) pixel of the value axis.
    pub bottom: f64,
    /// Highest (smallest y) pixel of the value axis.
    pub top: f64,
}

/// Plot state.
#[derive(Debug)]
pub struct Plot {
    config: PlotConfig,
    window: WindowConfig,
    origin: Vec2,
    boundaries: Option<AxisBoundaries>,
    samples: SampleBuffer,
    elapsed: f64,
}

impl Plot {
    /// Set up the coordinate mapping for `window`.
    pub fn configure(window: &WindowConfig, config: &PlotConfig) -> Self {
        let scale = config.unit_scale;
        let origin = Vec2::new(
            config.unit.x * 2.0 * scale * (2.0 - config.x_range.min),
            window.height() + config.unit.y * scale * (config.y_range.min - 2.0)
                - config.padding,
        );
        tracing::debug!("Plot origin at ({:.1}, {:.1})", origin.x, origin.y);

        Self {
            config: config.clone(),
            window: window.clone(),
            origin,
            boundaries: None,
            samples: SampleBuffer::new(),
            elapsed: 0.0,
        }
    }

    /// Advance the plot clock by `dt` and record `(elapsed, value)`.
    pub fn record_sample(&mut self, dt: f64, value: f64) -> Result<()> {
        self.elapsed += dt;
        self.samples.append(Vec2::new(self.elapsed, value))
    }

    /// Derive the pixel boundaries of both axes.
    ///
    /// The top of the value axis never rises above the vertical middle of
    /// the window.
    pub fn compute_axis_boundaries(&mut self) -> AxisBoundaries {
        let step = self.step();
        let bottom = self.origin.y - self.config.y_range.min * step.y;
        let top = (self.origin.y - self.config.y_range.max * step.y)
            .max(self.window.height() / 2.0);
        let left = self.origin.x + self.config.x_range.min * step.x;
        let right = self.origin.x + self.config.x_range.max * step.x;

        let boundaries = AxisBoundaries {
            left,
            right,
            bottom,
            top,
        };
        tracing::debug!("Axis boundaries: {:?}", boundaries);
        self.boundaries = Some(boundaries);
        boundaries
    }

    /// Pixels per logical unit on each axis.
    fn step(&self) -> Vec2 {
        Vec2::new(
            self.config.unit.x * self.config.unit_scale,
            self.config.unit.y * self.config.unit_scale,
        )
    }

    /// Map a logical sample into window pixels.
    pub fn to_pixel(&self, logical: Vec2) -> Vec2 {
        let step = self.step();
        self.origin.add(Vec2::new(logical.x * step.x, logical.y * step.y))
    }

    /// Largest logical time whose segment is still drawn, once boundaries
    /// are known.
    pub fn curve_cutoff(&self) -> Option<f64> {
        self.boundaries
            .map(|b| (b.right - self.config.padding) / self.step().x)
    }

    /// Draw axes, ticks and the curve.
    pub fn render<S: Surface>(&self, surface: &mut S, colors: &ThemeColors) {
        let Some(bounds) = self.boundaries else {
            tracing::warn!("Plot rendered before axis boundaries were computed");
            return;
        };

        self.render_axes(surface, &bounds, colors);
        self.render_ticks(surface, &bounds, colors);
        self.render_curve(surface, &bounds, colors);
    }

    fn render_axes<S: Surface>(&self, surface: &mut S, b: &AxisBoundaries, colors: &ThemeColors) {
        let pad = self.config.padding;
        let o = self.origin;

        // Value axis with its arrowhead at the top
        let tip = Vec2::new(o.x, b.top - pad);
        surface.draw_line(Vec2::new(o.x, b.bottom + pad), tip, colors.axis);
        surface.draw_line(Vec2::new(o.x - pad, b.top), tip, colors.axis);
        surface.draw_line(Vec2::new(o.x + pad, b.top), tip, colors.axis);

        // Time axis with its arrowhead on the right
        let tip = Vec2::new(b.right + pad, o.y);
        surface.draw_line(Vec2::new(b.left - pad, o.y), tip, colors.axis);
        surface.draw_line(Vec2::new(b.right - pad, o.y + pad), tip, colors.axis);
        surface.draw_line(Vec2::new(b.right - pad, o.y - pad), tip, colors.axis);
    }

    fn render_ticks<S: Surface>(&self, surface: &mut S, b: &AxisBoundaries, colors: &ThemeColors) {
        let step = self.step();
        let half = self.config.tick_half_length;
        let o = self.origin;

        let mut x = b.left;
        while x < b.right {
            surface.draw_line(Vec2::new(x, o.y - half), Vec2::new(x, o.y + half), colors.axis);
            x += step.x;
        }

        let mut y = b.bottom;
        while y > b.top {
            surface.draw_line(Vec2::new(o.x - half, y), Vec2::new(o.x + half, y), colors.axis);
            y -= step.y;
        }
    }

    fn render_curve<S: Surface>(&self, surface: &mut S, b: &AxisBoundaries, colors: &ThemeColors) {
        let cutoff = (b.right - self.config.padding) / self.step().x;

        for pair in self.samples.as_slice().windows(2) {
            if pair[0].x > cutoff {
                return;
            }
            surface.draw_line(self.to_pixel(pair[0]), self.to_pixel(pair[1]), colors.curve);
        }
    }

    /// Recorded samples.
    pub fn samples(&self) -> &SampleBuffer {
        &self.samples
    }

    /// Seconds recorded on the plot clock.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Origin in window pixels.
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Boundaries, if computed.
    pub fn boundaries(&self) -> Option<AxisBoundaries> {
        self.boundaries
    }

    /// The mapping configuration.
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Theme;
    use crate::config::AxisRange;
    use crate::surface::ShapeRecorder;
    use approx::assert_abs_diff_eq;

    fn default_plot() -> Plot {
        let mut plot = Plot::configure(&WindowConfig::default(), &PlotConfig::default());
        plot.compute_axis_boundaries();
        plot
    }

    fn colors() -> ThemeColors {
        ThemeColors::from_theme(&Theme::Classic)
    }

    #[test]
    fn origin_and_boundaries_match_default_layout() {
        let plot = default_plot();
        assert_eq!(plot.origin(), Vec2::new(90.0, 578.0));

        let b = plot.boundaries().unwrap();
        assert_abs_diff_eq!(b.left, 75.0);
        assert_abs_diff_eq!(b.right, 1290.0);
        assert_abs_diff_eq!(b.bottom, 698.0);
        assert_abs_diff_eq!(b.top, 458.0);
    }

    #[test]
    fn top_boundary_clamps_to_window_middle() {
        let config = PlotConfig {
            y_range: AxisRange::new(-4.0, 40.0),
            ..PlotConfig::default()
        };
        let mut plot = Plot::configure(&WindowConfig::default(), &config);
        let b = plot.compute_axis_boundaries();
        assert_eq!(b.top, 384.0);
    }

    #[test]
    fn record_sample_tracks_its_own_clock() {
        let mut plot = default_plot();
        plot.record_sample(0.1, 1.0).unwrap();
        plot.record_sample(0.1, 0.5).unwrap();

        assert_abs_diff_eq!(plot.elapsed(), 0.2, epsilon = 1e-12);
        assert_eq!(plot.samples().count(), 2);
        assert_abs_diff_eq!(plot.samples().at(1).unwrap().x, 0.2, epsilon = 1e-12);
        assert_eq!(plot.samples().at(1).unwrap().y, 0.5);
    }

    #[test]
    fn to_pixel_applies_origin_and_scale() {
        let plot = default_plot();
        assert_eq!(plot.to_pixel(Vec2::new(2.0, -1.0)), Vec2::new(120.0, 548.0));
    }

    #[test]
    fn render_without_boundaries_draws_nothing() {
        let plot = Plot::configure(&WindowConfig::default(), &PlotConfig::default());
        let mut recorder = ShapeRecorder::new();
        plot.render(&mut recorder, &colors());
        assert!(recorder.shapes().is_empty());
    }

    #[test]
    fn single_sample_draws_no_curve() {
        let mut plot = default_plot();
        plot.record_sample(0.1, 1.0).unwrap();
        let mut recorder = ShapeRecorder::new();
        plot.render(&mut recorder, &colors());
        assert!(recorder.lines_with_color(colors().curve).is_empty());
    }

    #[test]
    fn axes_come_first_then_ticks() {
        let plot = default_plot();
        let colors = colors();
        let mut recorder = ShapeRecorder::new();
        plot.render(&mut recorder, &colors);

        let lines = recorder.lines_with_color(colors.axis);
        assert_eq!(lines[0], (Vec2::new(90.0, 708.0), Vec2::new(90.0, 448.0)));
        assert_eq!(lines[3], (Vec2::new(65.0, 578.0), Vec2::new(1300.0, 578.0)));

        // 6 axis strokes, 81 time ticks, 8 value ticks
        assert_eq!(lines.len(), 6 + 81 + 8);
    }

    #[test]
    fn curve_stops_past_the_cutoff() {
        let mut plot = default_plot();
        let cutoff = plot.curve_cutoff().unwrap();
        assert_abs_diff_eq!(cutoff, 1280.0 / 15.0, epsilon = 1e-9);

        for i in 1..=100 {
            plot.record_sample(1.0, (i as f64).sin()).unwrap();
        }

        let colors = colors();
        let mut recorder = ShapeRecorder::new();
        plot.render(&mut recorder, &colors);
        let segments = recorder.lines_with_color(colors.curve);

        // Samples at t = 1..=85 start a segment; t = 86 is past the cutoff.
        assert_eq!(segments.len(), 85);
        assert_eq!(segments[0].0, plot.to_pixel(plot.samples().at(0).unwrap()));
        assert_eq!(plot.samples().count(), 100);
    }
}
