//! Foucault - a terminal pendulum simulator.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use foucault::{
    app::App, config::SimulationConfig, input::KeyboardState, simulation::Simulation,
    timing::FrameLimiter, ui,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "foucault")]
#[command(about = "A terminal pendulum simulator with a live angle plot", long_about = None)]
struct Args {
    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Simulation timestep in seconds
    #[arg(long, allow_negative_numbers = true)]
    dt: Option<f64>,

    /// Target frames per second
    #[arg(long)]
    fps: Option<u32>,

    /// Initial angle in radians
    #[arg(long, allow_negative_numbers = true)]
    angle: Option<f64>,

    /// Initial angular velocity in radians per second
    #[arg(long, allow_negative_numbers = true)]
    velocity: Option<f64>,

    /// Run without a terminal UI and print the recorded samples
    #[arg(long)]
    headless: bool,

    /// Number of steps to run in headless mode
    #[arg(long, default_value_t = 600)]
    steps: u64,
}

impl Args {
    fn config(&self) -> SimulationConfig {
        let mut config = SimulationConfig::default();
        if let Some(dt) = self.dt {
            config.dt = dt;
        }
        if let Some(fps) = self.fps {
            config.target_fps = fps;
        }
        if let Some(angle) = self.angle {
            config.pendulum.initial_angle = angle;
        }
        if let Some(velocity) = self.velocity {
            config.pendulum.initial_velocity = velocity;
        }
        config
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(log_file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Foucault");
    }

    let config = args.config();
    config.validate()?;

    if args.headless {
        run_headless(&config, args.steps)?;
        tracing::info!("Foucault exited");
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let reports_release = matches!(supports_keyboard_enhancement(), Ok(true));
    if reports_release {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    tracing::debug!("Key release events: {}", reports_release);
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = App::new(&config, KeyboardState::new(reports_release))
        .map_err(anyhow::Error::from)
        .and_then(|mut app| run_app(&mut terminal, &mut app, &config));

    // Restore terminal
    if reports_release {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("Fatal: {}", err);
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    tracing::info!("Foucault exited");
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    config: &SimulationConfig,
) -> Result<()> {
    let mut limiter = FrameLimiter::new(config.target_fps)?;

    while !app.should_quit {
        limiter.begin_frame(Instant::now());

        app.update(Instant::now())?;
        terminal.draw(|f| ui::draw(f, app))?;

        // Wait out the rest of the frame while handling input
        loop {
            let remaining = limiter.remaining(Instant::now());
            if remaining.is_zero() || !event::poll(remaining)? {
                break;
            }
            if let Event::Key(key) = event::read()? {
                app.handle_key(key, Instant::now());
            }
        }
    }

    Ok(())
}

fn run_headless(config: &SimulationConfig, steps: u64) -> Result<()> {
    let mut sim = Simulation::new(config)?;
    for _ in 0..steps {
        sim.step()?;
    }
    tracing::info!(
        "Headless run finished after {} steps of {} s ({:.2} s simulated)",
        sim.steps(),
        sim.dt(),
        sim.pendulum().elapsed()
    );

    sim.write_samples(io::stdout().lock())?;
    Ok(())
}
