//! System catalog: parameter sets, the generic solve driver and the built-in presets.

use crate::error::SolveError;
use crate::solvers::{integrate, RK4};
use crate::systems::{DampedPendulum, Lorenz, Rossler, VanDerPol};
use crate::traits::{State, VectorField};
use crate::trajectory::Trajectory;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "system", rename_all = "snake_case")]
pub enum SystemParams {
    Lorenz(Lorenz),
    VanDerPol(VanDerPol),
    DampedPendulum(DampedPendulum),
    Rossler(Rossler),
}

impl SystemParams {
    pub fn id(&self) -> &'static str {
        match self {
            SystemParams::Lorenz(_) => "lorenz",
            SystemParams::VanDerPol(_) => "van_der_pol",
            SystemParams::DampedPendulum(_) => "damped_pendulum",
            SystemParams::Rossler(_) => "rossler",
        }
    }

    pub fn dimension(&self) -> usize {
        match self {
            SystemParams::Lorenz(_) | SystemParams::Rossler(_) => 3,
            SystemParams::VanDerPol(_) | SystemParams::DampedPendulum(_) => 2,
        }
    }

    /// Named scalar parameters in declaration order.
    pub fn parameters(&self) -> Vec<(&'static str, f64)> {
        match *self {
            SystemParams::Lorenz(Lorenz { sigma, rho, beta }) => {
                vec![("sigma", sigma), ("rho", rho), ("beta", beta)]
            }
            SystemParams::VanDerPol(VanDerPol { mu }) => vec![("mu", mu)],
            SystemParams::DampedPendulum(DampedPendulum { gamma, omega0 }) => {
                vec![("gamma", gamma), ("omega0", omega0)]
            }
            SystemParams::Rossler(Rossler { a, b, c }) => vec![("a", a), ("b", b), ("c", c)],
        }
    }

    /// Evaluates the selected vector field.
    /// y and out must both hold `dimension()` coordinates.
    pub fn derivative_into(&self, t: f64, y: &[f64], out: &mut [f64]) {
        match self {
            SystemParams::Lorenz(system) => {
                let dy = system.derivative(t, &State::<3>::from_column_slice(y));
                out.copy_from_slice(dy.as_slice());
            }
            SystemParams::Rossler(system) => {
                let dy = system.derivative(t, &State::<3>::from_column_slice(y));
                out.copy_from_slice(dy.as_slice());
            }
            SystemParams::VanDerPol(system) => {
                let dy = system.derivative(t, &State::<2>::from_column_slice(y));
                out.copy_from_slice(dy.as_slice());
            }
            SystemParams::DampedPendulum(system) => {
                let dy = system.derivative(t, &State::<2>::from_column_slice(y));
                out.copy_from_slice(dy.as_slice());
            }
        }
    }
}

/// One checked solve: parameters, initial state and step configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveRequest {
    pub params: SystemParams,
    pub initial: Vec<f64>,
    pub dt: f64,
    pub steps: usize,
}

impl SolveRequest {
    /// Rejects malformed input before any stepping takes place. Zero and negative
    /// step sizes are valid.
    pub fn validate(&self) -> Result<(), SolveError> {
        for (name, value) in self.params.parameters() {
            if !value.is_finite() {
                return Err(SolveError::invalid(name, format!("must be finite, got {value}")));
            }
        }
        let expected = self.params.dimension();
        if self.initial.len() != expected {
            return Err(SolveError::DimensionMismatch {
                expected,
                actual: self.initial.len(),
            });
        }
        if let Some((idx, value)) = self
            .initial
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite())
        {
            return Err(SolveError::invalid(
                format!("initial[{idx}]"),
                format!("must be finite, got {value}"),
            ));
        }
        if !self.dt.is_finite() {
            return Err(SolveError::invalid("dt", format!("must be finite, got {}", self.dt)));
        }
        Ok(())
    }
}

/// Validates `request` and integrates it with RK4.
pub fn solve(request: &SolveRequest) -> Result<Trajectory, SolveError> {
    request.validate()?;
    let trajectory = match request.params.dimension() {
        2 => run::<2>(&request.params, &request.initial, request.dt, request.steps),
        _ => run::<3>(&request.params, &request.initial, request.dt, request.steps),
    };
    Ok(trajectory)
}

fn run<const N: usize>(
    params: &SystemParams,
    initial: &[f64],
    dt: f64,
    steps: usize,
) -> Trajectory {
    let field = |t: f64, y: &State<N>| {
        let mut out = State::<N>::zeros();
        params.derivative_into(t, y.as_slice(), out.as_mut_slice());
        out
    };
    integrate(&RK4, &field, State::<N>::from_column_slice(initial), dt, steps)
}

/// Solve the Lorenz system.
///
/// Returns a flat array of [x0, y0, z0, x1, y1, z1, ...] values.
#[allow(clippy::too_many_arguments)]
pub fn solve_lorenz(
    sigma: f64,
    rho: f64,
    beta: f64,
    x0: f64,
    y0: f64,
    z0: f64,
    dt: f64,
    steps: usize,
) -> Vec<f64> {
    let lorenz = Lorenz::new(sigma, rho, beta);
    integrate(&RK4, &lorenz, State::<3>::new(x0, y0, z0), dt, steps).into_values()
}

/// Solve the Van der Pol oscillator.
///
/// Returns a flat array of [x0, y0, x1, y1, ...] values.
pub fn solve_van_der_pol(mu: f64, x0: f64, y0: f64, dt: f64, steps: usize) -> Vec<f64> {
    let vdp = VanDerPol::new(mu);
    integrate(&RK4, &vdp, State::<2>::new(x0, y0), dt, steps).into_values()
}

/// Solve the damped pendulum.
///
/// Returns a flat array of [θ0, ω0, θ1, ω1, ...] values.
pub fn solve_damped_pendulum(
    gamma: f64,
    omega0: f64,
    theta0: f64,
    omega_init: f64,
    dt: f64,
    steps: usize,
) -> Vec<f64> {
    let pendulum = DampedPendulum::new(gamma, omega0);
    integrate(&RK4, &pendulum, State::<2>::new(theta0, omega_init), dt, steps).into_values()
}

/// Solve the Rössler system.
///
/// Returns a flat array of [x0, y0, z0, x1, y1, z1, ...] values.
#[allow(clippy::too_many_arguments)]
pub fn solve_rossler(
    a: f64,
    b: f64,
    c: f64,
    x0: f64,
    y0: f64,
    z0: f64,
    dt: f64,
    steps: usize,
) -> Vec<f64> {
    let rossler = Rossler::new(a, b, c);
    integrate(&RK4, &rossler, State::<3>::new(x0, y0, z0), dt, steps).into_values()
}

/// A named parameter set with default initial conditions and step configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub params: SystemParams,
    pub initial: Vec<f64>,
    pub dt: f64,
    pub steps: usize,
}

impl Preset {
    pub fn request(&self) -> SolveRequest {
        SolveRequest {
            params: self.params,
            initial: self.initial.clone(),
            dt: self.dt,
            steps: self.steps,
        }
    }
}

pub fn presets() -> Vec<Preset> {
    let entry = |id: &str, name: &str, params, initial: &[f64], steps| Preset {
        id: id.to_string(),
        name: name.to_string(),
        params,
        initial: initial.to_vec(),
        dt: 0.01,
        steps,
    };
    vec![
        entry(
            "lorenz",
            "Lorenz Attractor",
            SystemParams::Lorenz(Lorenz::default()),
            &[1.0, 1.0, 1.0],
            5000,
        ),
        entry(
            "van_der_pol",
            "Van der Pol Oscillator",
            SystemParams::VanDerPol(VanDerPol::default()),
            &[2.0, 0.0],
            3000,
        ),
        entry(
            "damped_pendulum",
            "Damped Pendulum",
            SystemParams::DampedPendulum(DampedPendulum::default()),
            &[1.0, 0.0],
            3000,
        ),
        entry(
            "rossler",
            "Rössler Attractor",
            SystemParams::Rossler(Rossler::default()),
            &[1.0, 1.0, 1.0],
            8000,
        ),
    ]
}

pub fn preset(id: &str) -> Result<Preset, SolveError> {
    presets()
        .into_iter()
        .find(|p| p.id == id)
        .ok_or_else(|| SolveError::UnknownPreset(id.to_string()))
}
