//! Library-level scenarios: pendulum periodicity and plot clipping.

use approx::assert_abs_diff_eq;
use foucault::app::Theme;
use foucault::config::{PendulumConfig, PlotConfig, SimulationConfig, WindowConfig};
use foucault::pendulum::Pendulum;
use foucault::plot::Plot;
use foucault::simulation::Simulation;
use foucault::surface::ShapeRecorder;
use foucault::ui::ThemeColors;
use foucault::vector::Vec2;
use std::f64::consts::{FRAC_PI_2, TAU};

fn pendulum_config() -> PendulumConfig {
    PendulumConfig {
        pivot: Vec2::new(683.0, 76.8),
        length: 120.0,
        gravity: 10.0,
        mass: 10.0,
        radius: 20.0,
        initial_angle: FRAC_PI_2,
        initial_velocity: 0.0,
    }
}

#[test]
fn pendulum_returns_to_initial_angle_every_period() {
    let mut pendulum = Pendulum::new(&pendulum_config()).unwrap();
    pendulum.advance(0.0);
    assert_eq!(pendulum.angle(), FRAC_PI_2);

    let period = TAU * (120.0_f64 / 10.0).sqrt();
    assert_abs_diff_eq!(pendulum.period(), period, epsilon = 1e-12);

    let steps_per_period = 10_000;
    let dt = period / steps_per_period as f64;
    let mut min_angle = f64::INFINITY;

    for cycle in 1..=3 {
        for _ in 0..steps_per_period {
            pendulum.advance(dt);
            min_angle = min_angle.min(pendulum.angle());
        }
        assert_abs_diff_eq!(pendulum.elapsed(), cycle as f64 * period, epsilon = 1e-8);
        assert_abs_diff_eq!(pendulum.angle(), FRAC_PI_2, epsilon = 1e-6);
    }

    // It swung through to the other side
    assert_abs_diff_eq!(min_angle, -FRAC_PI_2, epsilon = 1e-6);
}

#[test]
fn plot_truncates_curve_at_configured_boundary() {
    let mut plot = Plot::configure(&WindowConfig::default(), &PlotConfig::default());
    let config = plot.config().clone();
    let bounds = plot.compute_axis_boundaries();
    let cutoff = (bounds.right - config.padding) / (config.unit_scale * config.unit.x);

    // Strictly increasing samples on both sides of the cutoff
    for _ in 0..2000 {
        plot.record_sample(0.1, 0.5).unwrap();
    }
    assert!(plot.samples().last().unwrap().x > cutoff);

    let colors = ThemeColors::from_theme(&Theme::Classic);
    let mut recorder = ShapeRecorder::new();
    plot.render(&mut recorder, &colors);
    let segments = recorder.lines_with_color(colors.curve);

    let expected = plot
        .samples()
        .as_slice()
        .windows(2)
        .take_while(|pair| pair[0].x <= cutoff)
        .count();
    assert_eq!(segments.len(), expected);
    assert!(expected < plot.samples().count() - 1);

    for (from, _) in &segments {
        let logical_x = (from.x - plot.origin().x) / (config.unit_scale * config.unit.x);
        assert!(logical_x <= cutoff + 1e-9);
    }
}

#[test]
fn curve_freezes_while_samples_keep_growing() {
    let mut sim = Simulation::new(&SimulationConfig::default()).unwrap();
    let colors = ThemeColors::from_theme(&Theme::Classic);

    let count_segments = |sim: &Simulation| {
        let mut recorder = ShapeRecorder::new();
        sim.render(&mut recorder, &colors);
        recorder.lines_with_color(colors.curve).len()
    };

    for _ in 0..1000 {
        sim.step().unwrap();
    }
    let frozen = count_segments(&sim);

    for _ in 0..500 {
        sim.step().unwrap();
    }
    assert_eq!(count_segments(&sim), frozen);
    assert_eq!(sim.plot().samples().count(), 1500);
}
