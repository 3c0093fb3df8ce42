#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

use std::error::Error;
use std::fs::{self, File};
use std::io;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use muscle_plant::simulation::{
    params::{
        DEMO_INITIAL_STATE, DEMO_LOG_FILE, DEMO_MAX_VAR, DEMO_MIN_VAR, DEMO_MNOISE_SD,
        DEMO_PREDICTION_VAR, DEMO_SEED, DEMO_SETPOINT, DEMO_SETPOINT_STEP, DEMO_TICK_MS,
        DEMO_VAR_FACTOR, PAIR_INITIAL_STATES,
    },
    Actuator, ActuatorError, ActuatorParams, AntagonistPair, Gaussian, Muscle,
};
use muscle_plant::ui::{
    gauge::gauge_line,
    render::{draw_ui, GAUGE_CHROME},
};

/// A muscle and an antagonist pair tracking one set-point.
///
/// The "estimator" is a stand-in: it predicts the set-point (and its mirror
/// image for the opposing side) with a fixed, user-adjustable variance.
struct Rig {
    muscle: Muscle,
    pair: AntagonistPair,
    setpoint: f64,
    variance: f64,
    muscle_reading: f64,
    pair_readings: [f64; 2],
    rng: StdRng,
    ticks: u64,
}

impl Rig {
    fn new(params: ActuatorParams) -> Result<Self, ActuatorError> {
        let muscle = Muscle::with_params(DEMO_INITIAL_STATE, params)?;
        let pair = AntagonistPair::with_params(PAIR_INITIAL_STATES, params)?;
        Ok(Self {
            muscle_reading: muscle.state(),
            pair_readings: pair.state(),
            muscle,
            pair,
            setpoint: params.state_lims.clamp(DEMO_SETPOINT),
            variance: DEMO_PREDICTION_VAR,
            rng: StdRng::seed_from_u64(DEMO_SEED),
            ticks: 0,
        })
    }

    fn tick(&mut self) -> Result<(), ActuatorError> {
        let lims = self.muscle.params().state_lims;
        let mirror = lims.hi + lims.lo - self.setpoint;
        let predict = |mean| Gaussian::from_mean_variance(mean, self.variance);

        self.muscle.step(predict(self.setpoint))?;
        self.pair.step([predict(self.setpoint), predict(mirror)])?;

        self.muscle_reading = self.muscle.read(&mut self.rng)?;
        self.pair_readings = self.pair.read(&mut self.rng)?;
        self.ticks += 1;
        Ok(())
    }

    fn nudge_setpoint(&mut self, delta: f64) {
        let lims = self.muscle.params().state_lims;
        self.setpoint = lims.clamp(self.setpoint + delta);
        info!(setpoint = self.setpoint, "set-point moved");
    }

    fn scale_variance(&mut self, factor: f64) {
        self.variance = (self.variance * factor).clamp(DEMO_MIN_VAR, DEMO_MAX_VAR);
        info!(variance = self.variance, "prediction variance changed");
    }

    fn hud(&self) -> String {
        format!(
            "Tick: {} | Set: {:.2} | Var: {:.2} | Gain: {:.2}",
            self.ticks,
            self.setpoint,
            self.variance,
            self.muscle.params().dt / self.variance
        )
    }

    fn gauge_lines(&self, width: usize) -> Vec<String> {
        let lims = self.muscle.params().state_lims;
        let mirror = lims.hi + lims.lo - self.setpoint;
        let [flexor, extensor] = self.pair.state();
        let [flexor_read, extensor_read] = self.pair_readings;
        vec![
            gauge_line("muscle", self.muscle.state(), Some(self.setpoint), lims, width),
            gauge_line("  reading", self.muscle_reading, None, lims, width),
            String::new(),
            gauge_line("flexor", flexor, Some(self.setpoint), lims, width),
            gauge_line("  reading", flexor_read, None, lims, width),
            gauge_line("extensor", extensor, Some(mirror), lims, width),
            gauge_line("  reading", extensor_read, None, lims, width),
        ]
    }
}

fn load_params() -> Result<ActuatorParams, Box<dyn Error>> {
    match std::env::args().nth(1) {
        Some(path) => Ok(ActuatorParams::from_toml_str(&fs::read_to_string(path)?)?),
        None => Ok(ActuatorParams::default().with_mnoise_sd(DEMO_MNOISE_SD)),
    }
}

/// The terminal belongs to the UI, so logs go to a file and only when
/// `RUST_LOG` is set.
fn init_logging() -> io::Result<()> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        let file = File::create(DEMO_LOG_FILE)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging()?;
    let params = load_params()?;
    let mut rig = Rig::new(params)?;
    info!(?params, "plant configured");

    // Setup Terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut rig, Duration::from_millis(DEMO_TICK_MS));

    // Restore Terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    rig: &mut Rig,
    tick_rate: Duration,
) -> Result<(), Box<dyn Error>> {
    let mut last_tick = Instant::now();
    loop {
        if last_tick.elapsed() >= tick_rate {
            rig.tick()?;
            last_tick = Instant::now();
        }

        terminal.draw(|f| {
            let width = f.area().width.saturating_sub(GAUGE_CHROME) as usize;
            draw_ui(f, rig.gauge_lines(width), &rig.hud());
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Up => rig.nudge_setpoint(DEMO_SETPOINT_STEP),
                    KeyCode::Down => rig.nudge_setpoint(-DEMO_SETPOINT_STEP),
                    KeyCode::Char('+') => rig.scale_variance(DEMO_VAR_FACTOR),
                    KeyCode::Char('-') => rig.scale_variance(1.0 / DEMO_VAR_FACTOR),
                    _ => {}
                }
            }
        }
    }
}
