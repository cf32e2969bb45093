//! Foucault - a terminal pendulum simulator with a live angle plot.
//!
//! A simple pendulum follows the closed-form small-angle solution while its
//! angle is recorded into a scrolling time plot. Both are drawn through the
//! [`surface::Surface`] trait and replayed onto a terminal canvas.
//!
//! # Features
//!
//! - Closed-form pendulum with configurable length, gravity and initial state
//! - Angle-over-time plot with axes, ticks and a clipped curve
//! - Hold Space to pause the simulation
//! - Classic and Gruvbox color themes
//! - Headless mode that prints recorded samples
//!
//! # Example
//!
//! ```
//! use foucault::config::SimulationConfig;
//! use foucault::simulation::Simulation;
//!
//! let mut sim = Simulation::new(&SimulationConfig::default())?;
//! for _ in 0..10 {
//!     sim.step()?;
//! }
//! assert_eq!(sim.plot().samples().count(), 10);
//! # Ok::<(), foucault::FoucaultError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod pendulum;
pub mod plot;
pub mod sample_buffer;
pub mod simulation;
pub mod surface;
pub mod timing;
pub mod ui;
pub mod vector;

pub use error::{FoucaultError, Result};
