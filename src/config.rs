//! Simulation, pendulum, and plot configuration.
//!
//! Every value the app needs at startup lives here; defaults reproduce the
//! classic 1366x768 pendulum scene.

use crate::error::{FoucaultError, Result};
use crate::vector::{IVec2, Vec2};

/// Configuration for the virtual drawing window.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    /// Window size in pixels. Pixel y grows downward.
    pub size: IVec2,
}

impl WindowConfig {
    /// Window width in pixels.
    pub fn width(&self) -> f64 {
        f64::from(self.size.x)
    }

    /// Window height in pixels.
    pub fn height(&self) -> f64 {
        f64::from(self.size.y)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            size: IVec2::new(1366, 768),
        }
    }
}

/// Physical parameters of the pendulum.
#[derive(Debug, Clone)]
pub struct PendulumConfig {
    /// Pivot location in pixels.
    pub pivot: Vec2,
    /// Arm length in pixels.
    pub length: f64,
    /// Gravitational constant.
    pub gravity: f64,
    /// Ball mass.
    pub mass: f64,
    /// Ball radius in pixels.
    pub radius: f64,
    /// Initial angle from the vertical, in radians.
    pub initial_angle: f64,
    /// Initial angular velocity, in radians per second.
    pub initial_velocity: f64,
}

impl PendulumConfig {
    /// Default pendulum hung at the top centre of `window`.
    pub fn for_window(window: &WindowConfig) -> Self {
        let size = Vec2::from(window.size);
        Self {
            pivot: Vec2::new(size.x / 2.0, size.y / 10.0),
            length: 2.0 * 300.0 / 5.0,
            gravity: 10.0,
            mass: 10.0,
            radius: 20.0,
            initial_angle: std::f64::consts::FRAC_PI_2,
            initial_velocity: 0.0,
        }
    }
}

impl Default for PendulumConfig {
    fn default() -> Self {
        Self::for_window(&WindowConfig::default())
    }
}

/// Inclusive `(min, max)` bounds of one plot axis, in logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl AxisRange {
    /// Create a range.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Coordinate mapping for the angle plot.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Logical units per grid step on each axis.
    pub unit: Vec2,
    /// Time axis bounds.
    pub x_range: AxisRange,
    /// Value axis bounds.
    pub y_range: AxisRange,
    /// Pixels per grid step.
    pub unit_scale: f64,
    /// Inner padding in pixels around axes and arrowheads.
    pub padding: f64,
    /// Half length of a tick mark in pixels.
    pub tick_half_length: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            unit: Vec2::new(0.5, 1.0),
            x_range: AxisRange::new(-1.0, 80.0),
            y_range: AxisRange::new(-4.0, 4.0),
            unit_scale: 30.0,
            padding: 10.0,
            tick_half_length: 10.0,
        }
    }
}

/// Everything needed to build and drive a simulation.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Drawing window.
    pub window: WindowConfig,
    /// Pendulum parameters.
    pub pendulum: PendulumConfig,
    /// Plot mapping.
    pub plot: PlotConfig,
    /// Fixed simulation timestep in seconds.
    pub dt: f64,
    /// Target frames per second.
    pub target_fps: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let window = WindowConfig::default();
        let pendulum = PendulumConfig::for_window(&window);
        Self {
            window,
            pendulum,
            plot: PlotConfig::default(),
            dt: 0.1,
            target_fps: 60,
        }
    }
}

impl SimulationConfig {
    /// Check that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if self.window.size.x <= 0 || self.window.size.y <= 0 {
            return Err(FoucaultError::invalid_config("window size must be positive"));
        }
        if !self.dt.is_finite() || self.dt < 0.0 {
            return Err(FoucaultError::invalid_config(format!(
                "timestep must be a non-negative number, got {}",
                self.dt
            )));
        }
        if self.target_fps == 0 {
            return Err(FoucaultError::invalid_config("target FPS must be at least 1"));
        }

        let p = &self.pendulum;
        if !(p.length > 0.0) {
            return Err(FoucaultError::invalid_config("pendulum length must be positive"));
        }
        if !(p.gravity > 0.0) {
            return Err(FoucaultError::invalid_config("gravity must be positive"));
        }
        if !(p.mass > 0.0) {
            return Err(FoucaultError::invalid_config("ball mass must be positive"));
        }
        if !(p.radius >= 0.0) {
            return Err(FoucaultError::invalid_config("ball radius must not be negative"));
        }
        if !p.initial_angle.is_finite() || !p.initial_velocity.is_finite() {
            return Err(FoucaultError::invalid_config(
                "initial angle and velocity must be finite",
            ));
        }

        let plot = &self.plot;
        if !(plot.unit.x > 0.0 && plot.unit.y > 0.0) {
            return Err(FoucaultError::invalid_config("plot units must be positive"));
        }
        if !(plot.unit_scale > 0.0) {
            return Err(FoucaultError::invalid_config("plot unit scale must be positive"));
        }
        if !(plot.x_range.min < plot.x_range.max) || !(plot.y_range.min < plot.y_range.max) {
            return Err(FoucaultError::invalid_config("axis ranges must satisfy min < max"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SimulationConfig::default();
        config.validate().unwrap();
        assert_eq!(config.pendulum.pivot, Vec2::new(683.0, 76.8));
        assert_eq!(config.pendulum.length, 120.0);
    }

    #[test]
    fn rejects_bad_values() {
        let mut config = SimulationConfig::default();
        config.dt = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = SimulationConfig::default();
        config.target_fps = 0;
        assert!(config.validate().is_err());

        let mut config = SimulationConfig::default();
        config.pendulum.length = 0.0;
        assert!(config.validate().is_err());

        let mut config = SimulationConfig::default();
        config.plot.x_range = AxisRange::new(5.0, 5.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_timestep_is_allowed() {
        let mut config = SimulationConfig::default();
        config.dt = 0.0;
        config.validate().unwrap();
    }
}
