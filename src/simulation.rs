//! One pendulum feeding one plot.

use std::io::Write;

use csv::Writer;

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::pendulum::Pendulum;
use crate::plot::Plot;
use crate::surface::Surface;
use crate::ui::ThemeColors;

/// Pendulum plus the plot of its angle, stepped with a fixed timestep.
#[derive(Debug)]
pub struct Simulation {
    pendulum: Pendulum,
    plot: Plot,
    dt: f64,
    steps: u64,
}

impl Simulation {
    /// Build a simulation from a validated configuration.
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;

        let pendulum = Pendulum::new(&config.pendulum)?;
        let mut plot = Plot::configure(&config.window, &config.plot);
        plot.compute_axis_boundaries();

        Ok(Self {
            pendulum,
            plot,
            dt: config.dt,
            steps: 0,
        })
    }

    /// Advance the pendulum by one timestep and record its angle.
    pub fn step(&mut self) -> Result<()> {
        self.pendulum.advance(self.dt);
        self.plot.record_sample(self.dt, self.pendulum.angle())?;
        self.steps += 1;
        Ok(())
    }

    /// Draw the pendulum followed by the plot.
    pub fn render<S: Surface>(&self, surface: &mut S, colors: &ThemeColors) {
        self.pendulum.render(surface, colors);
        self.plot.render(surface, colors);
    }

    /// The pendulum.
    pub fn pendulum(&self) -> &Pendulum {
        &self.pendulum
    }

    /// The plot.
    pub fn plot(&self) -> &Plot {
        &self.plot
    }

    /// Fixed timestep in seconds.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Number of steps taken.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Write every recorded sample as `time,angle` CSV rows.
    pub fn write_samples<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = Writer::from_writer(writer);
        wtr.write_record(["time", "angle"])?;
        for sample in self.plot.samples().iter() {
            wtr.write_record([format!("{:.4}", sample.x), format!("{:.6}", sample.y)])?;
        }
        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Theme;
    use crate::surface::{Shape, ShapeRecorder};
    use approx::assert_abs_diff_eq;

    #[test]
    fn step_feeds_angle_into_plot() {
        let mut sim = Simulation::new(&SimulationConfig::default()).unwrap();
        for _ in 0..10 {
            sim.step().unwrap();
        }

        assert_eq!(sim.steps(), 10);
        assert_eq!(sim.plot().samples().count(), 10);
        let last = sim.plot().samples().last().unwrap();
        assert_abs_diff_eq!(last.x, sim.pendulum().elapsed(), epsilon = 1e-12);
        assert_eq!(last.y, sim.pendulum().angle());
    }

    #[test]
    fn writes_samples_as_csv() {
        let mut sim = Simulation::new(&SimulationConfig::default()).unwrap();
        assert_eq!(sim.dt(), 0.1);
        sim.step().unwrap();
        sim.step().unwrap();

        let mut out = Vec::new();
        sim.write_samples(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "time,angle");
        assert_eq!(lines[1], "0.1000,1.570142");
        assert!(lines[2].starts_with("0.2000,"));
    }

    #[test]
    fn empty_simulation_writes_header_only() {
        let sim = Simulation::new(&SimulationConfig::default()).unwrap();
        let mut out = Vec::new();
        sim.write_samples(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "time,angle\n");
    }

    #[test]
    fn rejects_invalid_config() {
        let mut config = SimulationConfig::default();
        config.dt = -1.0;
        assert!(Simulation::new(&config).is_err());
    }

    #[test]
    fn render_draws_pendulum_before_plot() {
        let sim = Simulation::new(&SimulationConfig::default()).unwrap();
        let mut recorder = ShapeRecorder::new();
        sim.render(&mut recorder, &ThemeColors::from_theme(&Theme::Classic));

        assert!(matches!(recorder.shapes()[2], Shape::Circle { .. }));
        assert!(recorder.shapes().len() > 3);
    }
}
