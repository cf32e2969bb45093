//! Application state and logic.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::input::KeyboardState;
use crate::simulation::Simulation;

/// Key that pauses the simulation while held.
pub const PAUSE_KEY: KeyCode = KeyCode::Char(' ');

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// White on black with a red curve.
    Classic,
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::Classic => Theme::GruvboxDark,
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::Classic,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Classic => "Classic",
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// The running simulation.
    pub simulation: Simulation,
    /// Held-key tracking.
    pub keyboard: KeyboardState,
    /// Current theme.
    pub theme: Theme,
    /// Status message.
    pub status: String,
    /// Whether the last update skipped the step.
    pub paused: bool,
    /// Set once the user asked to quit.
    pub should_quit: bool,
    window_size: (f64, f64),
}

impl App {
    /// Create a new application instance.
    pub fn new(config: &SimulationConfig, keyboard: KeyboardState) -> Result<Self> {
        Ok(Self {
            simulation: Simulation::new(config)?,
            keyboard,
            theme: Theme::Classic,
            status: "Hold Space to pause".to_string(),
            paused: false,
            should_quit: false,
            window_size: (config.window.width(), config.window.height()),
        })
    }

    /// Run one frame of simulation unless the pause key is held.
    pub fn update(&mut self, now: Instant) -> Result<()> {
        let paused = self.keyboard.is_key_held(PAUSE_KEY, now);
        if paused != self.paused {
            tracing::debug!("Simulation {}", if paused { "paused" } else { "resumed" });
            self.paused = paused;
        }

        if !paused {
            self.simulation.step()?;
        }
        Ok(())
    }

    /// Handle a key event received at `now`.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        self.keyboard.record(&key, now);

        if key.kind == KeyEventKind::Release {
            return;
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('q'))
            | (KeyModifiers::NONE, KeyCode::Esc)
            | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
                self.should_quit = true;
            }
            (KeyModifiers::SHIFT, KeyCode::Char('T'))
            | (KeyModifiers::NONE, KeyCode::Char('T')) => {
                self.cycle_theme();
            }
            _ => {}
        }
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
        tracing::debug!("Theme changed to {}", self.theme.name());
    }

    /// Size of the drawing window in pixels.
    pub fn window_size(&self) -> (f64, f64) {
        self.window_size
    }
}
