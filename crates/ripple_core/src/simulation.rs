//! Simulation driver: owns one run's grid, time step, and state.

use crate::boundary::Dirichlet;
use crate::derivatives::{DiffusionDerivative, WaveDerivative};
use crate::error::{Result, RippleError};
use crate::grid::{Grid, GridSamples, MIN_POINTS};
use crate::solvers::RK4;
use crate::state::State;
use crate::traits::{Derivative, Steppable};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    /// df/dt = c² f_xx on one field.
    Diffusion,
    /// u_tt = c² u_xx as the coupled pair (u, v).
    #[default]
    Wave,
}

/// Named initial conditions a host can select without passing a closure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InitialProfile {
    #[default]
    Sine,
    Gaussian { center: f64, width: f64 },
}

impl InitialProfile {
    /// Gaussian bump centred in the domain.
    pub fn centered_gaussian(width: f64) -> Self {
        InitialProfile::Gaussian { center: PI, width }
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        match *self {
            InitialProfile::Sine => x.sin(),
            InitialProfile::Gaussian { center, width } => {
                let z = (x - center) / width;
                (-0.5 * z * z).exp()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    pub point_count: usize,
    /// Keep at or below 0.2 for the wave model.
    pub cfl_fraction: f64,
    pub model: ModelKind,
    pub wave_speed: f64,
    pub profile: InitialProfile,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            point_count: 100,
            cfl_fraction: 0.15,
            model: ModelKind::Wave,
            wave_speed: 1.0,
            profile: InitialProfile::Sine,
        }
    }
}

impl SimulationSettings {
    pub fn validate(&self) -> Result<()> {
        if self.point_count < MIN_POINTS {
            return Err(RippleError::Configuration(format!(
                "point_count must be at least {MIN_POINTS}, got {}.",
                self.point_count
            )));
        }
        validate_cfl(self.cfl_fraction)?;
        validate_speed(self.wave_speed)?;
        if let InitialProfile::Gaussian { center, width } = self.profile {
            if !center.is_finite() || !width.is_finite() || width <= 0.0 {
                return Err(RippleError::Configuration(format!(
                    "Gaussian profile needs a finite center and positive width (center={center}, width={width})."
                )));
            }
        }
        Ok(())
    }
}

fn validate_cfl(cfl_fraction: f64) -> Result<()> {
    if !(cfl_fraction > 0.0 && cfl_fraction <= 1.0) {
        return Err(RippleError::Configuration(format!(
            "cfl_fraction must lie in (0, 1], got {cfl_fraction}."
        )));
    }
    Ok(())
}

fn validate_speed(wave_speed: f64) -> Result<()> {
    if !wave_speed.is_finite() || wave_speed <= 0.0 {
        return Err(RippleError::Configuration(format!(
            "wave_speed must be positive and finite, got {wave_speed}."
        )));
    }
    Ok(())
}

/// Fixed step size derived from the grid: dt = cfl_fraction * dx.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeStepConfig {
    pub cfl_fraction: f64,
    pub dt: f64,
}

impl TimeStepConfig {
    pub fn new(cfl_fraction: f64, grid: &Grid) -> Result<Self> {
        validate_cfl(cfl_fraction)?;
        Ok(Self {
            cfl_fraction,
            dt: cfl_fraction * grid.spacing(),
        })
    }
}

enum ModelDerivative {
    Diffusion(DiffusionDerivative<f64>),
    Wave(WaveDerivative<f64>),
}

impl Derivative<f64> for ModelDerivative {
    fn evaluate(&self, state: &State<f64>) -> Result<State<f64>> {
        match self {
            ModelDerivative::Diffusion(d) => d.evaluate(state),
            ModelDerivative::Wave(d) => d.evaluate(state),
        }
    }
}

struct Run {
    grid: Grid,
    time_step: TimeStepConfig,
    derivative: ModelDerivative,
    boundary: Dirichlet,
    state: State<f64>,
    steps_taken: u64,
}

/// Fixed-step RK4 driver for one model.
///
/// Starts uninitialized; `initialize` moves it to ready and may be called
/// again to restart. Each instance owns its state outright, so independent
/// simulations never interfere.
pub struct Simulation {
    model: ModelKind,
    wave_speed: f64,
    stepper: RK4,
    run: Option<Run>,
}

impl Simulation {
    pub fn new(model: ModelKind, wave_speed: f64) -> Self {
        Self {
            model,
            wave_speed,
            stepper: RK4::new(),
            run: None,
        }
    }

    /// Builds and initializes a simulation in one go.
    pub fn from_settings(settings: &SimulationSettings) -> Result<Self> {
        settings.validate()?;
        let mut sim = Self::new(settings.model, settings.wave_speed);
        let profile = settings.profile;
        sim.initialize(settings.point_count, settings.cfl_fraction, |x| profile.evaluate(x))?;
        Ok(sim)
    }

    pub fn model(&self) -> ModelKind {
        self.model
    }

    pub fn is_initialized(&self) -> bool {
        self.run.is_some()
    }

    /// Samples `initial_condition` on a fresh grid and pins the endpoints.
    ///
    /// On error the previous run, if any, is kept.
    pub fn initialize(
        &mut self,
        point_count: usize,
        cfl_fraction: f64,
        initial_condition: impl Fn(f64) -> f64,
    ) -> Result<()> {
        let grid = Grid::new(point_count)?;
        self.initialize_with_samples(cfl_fraction, grid.sample(initial_condition))
    }

    /// Like [`Simulation::initialize`], but with the displacement already
    /// sampled at the grid coordinates; the point count is `samples.len()`.
    pub fn initialize_with_samples(
        &mut self,
        cfl_fraction: f64,
        samples: Vec<f64>,
    ) -> Result<()> {
        validate_speed(self.wave_speed)?;
        let point_count = samples.len();
        let grid = Grid::new(point_count)?;
        let time_step = TimeStepConfig::new(cfl_fraction, &grid)?;
        let boundary = Dirichlet::default();

        let mut displacement = samples;
        boundary.enforce(&mut displacement);

        let (derivative, state) = match self.model {
            ModelKind::Diffusion => (
                ModelDerivative::Diffusion(DiffusionDerivative::new(
                    self.wave_speed,
                    grid.spacing(),
                )),
                State::scalar(displacement),
            ),
            ModelKind::Wave => (
                ModelDerivative::Wave(WaveDerivative::new(self.wave_speed, grid.spacing())),
                State::pair(displacement, vec![0.0; point_count])?,
            ),
        };

        self.run = Some(Run {
            grid,
            time_step,
            derivative,
            boundary,
            state,
            steps_taken: 0,
        });
        Ok(())
    }

    /// Applies `steps` rounds of {RK4 step, Dirichlet} and returns a copy of
    /// the displacement field.
    pub fn advance(&mut self, steps: usize) -> Result<Vec<f64>> {
        let stepper = self.stepper;
        let run = self.run.as_mut().ok_or(RippleError::NotInitialized)?;
        let dt = run.time_step.dt;
        for _ in 0..steps {
            let mut next = stepper.step(&run.derivative, &run.state, dt)?;
            run.boundary.enforce(next.displacement_mut());
            run.state = next;
            run.steps_taken += 1;
        }
        Ok(run.state.displacement().to_vec())
    }

    pub fn current_time_step(&self) -> Result<f64> {
        Ok(self.active_run()?.time_step.dt)
    }

    /// Elapsed simulated time, `steps_taken * dt`.
    pub fn simulated_time(&self) -> Result<f64> {
        let run = self.active_run()?;
        Ok(run.steps_taken as f64 * run.time_step.dt)
    }

    pub fn steps_taken(&self) -> Result<u64> {
        Ok(self.active_run()?.steps_taken)
    }

    pub fn grid(&self) -> Result<&Grid> {
        Ok(&self.active_run()?.grid)
    }

    pub fn time_step(&self) -> Result<TimeStepConfig> {
        Ok(self.active_run()?.time_step)
    }

    pub fn displacement(&self) -> Result<Vec<f64>> {
        Ok(self.active_run()?.state.displacement().to_vec())
    }

    /// Velocity field; `None` for the diffusion model.
    pub fn velocity(&self) -> Result<Option<Vec<f64>>> {
        Ok(self.active_run()?.state.field(1).map(<[f64]>::to_vec))
    }

    /// Grid coordinates paired with the current displacement.
    pub fn samples(&self) -> Result<GridSamples> {
        let run = self.active_run()?;
        Ok(GridSamples::new(&run.grid, run.state.displacement().to_vec()))
    }

    fn active_run(&self) -> Result<&Run> {
        self.run.as_ref().ok_or(RippleError::NotInitialized)
    }
}
