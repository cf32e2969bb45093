//! Simple pendulum driven by the closed-form small-angle solution.

use crate::config::PendulumConfig;
use crate::error::{FoucaultError, Result};
use crate::surface::Surface;
use crate::ui::ThemeColors;
use crate::vector::Vec2;

/// Half width of the bar drawn at the pivot.
const PIVOT_HALF_WIDTH: f64 = 10.0;

/// The swinging ball.
#[derive(Debug, Clone)]
pub struct Ball {
    /// Current center in pixels.
    pub center: Vec2,
    /// Angle at `t = 0`.
    pub initial_angle: f64,
    /// Angular velocity at `t = 0`.
    pub initial_velocity: f64,
    /// Angular acceleration from the last step.
    pub acceleration: f64,
    /// Current angle from the vertical.
    pub angle: f64,
    mass: f64,
    radius: f64,
}

impl Ball {
    /// Ball mass.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Ball radius in pixels.
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

/// Pendulum state.
#[derive(Debug, Clone)]
pub struct Pendulum {
    pivot: Vec2,
    length: f64,
    gravity: f64,
    ball: Ball,
    elapsed: f64,
}

impl Pendulum {
    /// Build a pendulum at rest time `t = 0`.
    pub fn new(config: &PendulumConfig) -> Result<Self> {
        if !(config.length > 0.0 && config.gravity > 0.0) {
            return Err(FoucaultError::invalid_config(
                "pendulum length and gravity must be positive",
            ));
        }

        let mut pendulum = Self {
            pivot: config.pivot,
            length: config.length,
            gravity: config.gravity,
            ball: Ball {
                center: config.pivot,
                initial_angle: config.initial_angle,
                initial_velocity: config.initial_velocity,
                acceleration: 0.0,
                angle: config.initial_angle,
                mass: config.mass,
                radius: config.radius,
            },
            elapsed: 0.0,
        };
        pendulum.update_center();
        Ok(pendulum)
    }

    /// Advance the clock by `dt` seconds and recompute the state.
    pub fn advance(&mut self, dt: f64) {
        self.ball.acceleration = -self.gravity * self.ball.angle.sin() / self.length;
        self.elapsed += dt;

        let omega = self.natural_frequency();
        let phase = omega * self.elapsed;
        self.ball.angle = self.ball.initial_angle * phase.cos()
            + (self.ball.initial_velocity / omega) * phase.sin();

        self.update_center();
    }

    fn update_center(&mut self) {
        let angle = self.ball.angle;
        self.ball.center = self
            .pivot
            .add(Vec2::new(self.length * angle.sin(), self.length * angle.cos()));
    }

    /// Angular frequency `sqrt(g / length)`.
    pub fn natural_frequency(&self) -> f64 {
        (self.gravity / self.length).sqrt()
    }

    /// Small-angle period `2 * pi * sqrt(length / g)`.
    pub fn period(&self) -> f64 {
        std::f64::consts::TAU / self.natural_frequency()
    }

    /// Current angle in radians.
    pub fn angle(&self) -> f64 {
        self.ball.angle
    }

    /// Angular acceleration computed on the last step.
    pub fn angular_acceleration(&self) -> f64 {
        self.ball.acceleration
    }

    /// Ball center in pixels.
    pub fn ball_center(&self) -> Vec2 {
        self.ball.center
    }

    /// Seconds simulated so far.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Pivot location in pixels.
    pub fn pivot(&self) -> Vec2 {
        self.pivot
    }

    /// Arm length in pixels.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// The ball.
    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    /// Draw the pivot bar, the arm and the ball.
    pub fn render<S: Surface>(&self, surface: &mut S, colors: &ThemeColors) {
        surface.draw_line(
            self.pivot.sub(Vec2::new(PIVOT_HALF_WIDTH, 0.0)),
            self.pivot.add(Vec2::new(PIVOT_HALF_WIDTH, 0.0)),
            colors.arm,
        );
        surface.draw_line(self.pivot, self.ball.center, colors.arm);
        surface.draw_circle(self.ball.center, self.ball.radius, colors.ball);
    }
}
