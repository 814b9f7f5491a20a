//! Trajectory entry points exposed to JavaScript.

use crate::logging::console_log;
use anyhow::{Context, Result};
use attractor_core::{
    catalog, display_points as core_display_points, solve, SolveRequest, Trajectory,
};
use js_sys::Float64Array;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Solve the Lorenz system.
///
/// Returns a flat array of [x0, y0, z0, x1, y1, z1, ...] values.
#[wasm_bindgen]
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
    catalog::solve_lorenz(sigma, rho, beta, x0, y0, z0, dt, steps)
}

/// Solve the Van der Pol oscillator.
///
/// Returns a flat array of [x0, y0, x1, y1, ...] values.
/// For 3D visualization, pass the result through `display_points`.
#[wasm_bindgen]
pub fn solve_van_der_pol(mu: f64, x0: f64, y0: f64, dt: f64, steps: usize) -> Vec<f64> {
    catalog::solve_van_der_pol(mu, x0, y0, dt, steps)
}

/// Solve the damped pendulum.
///
/// Returns a flat array of [θ0, ω0, θ1, ω1, ...] values.
#[wasm_bindgen]
pub fn solve_damped_pendulum(
    gamma: f64,
    omega0: f64,
    theta0: f64,
    omega_init: f64,
    dt: f64,
    steps: usize,
) -> Vec<f64> {
    catalog::solve_damped_pendulum(gamma, omega0, theta0, omega_init, dt, steps)
}

/// Solve the Rössler system.
///
/// Returns a flat array of [x0, y0, z0, x1, y1, z1, ...] values.
#[wasm_bindgen]
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
    catalog::solve_rossler(a, b, c, x0, y0, z0, dt, steps)
}

/// Checked solve from a `{ params: { system, ... }, initial, dt, steps }` object.
#[wasm_bindgen]
pub fn solve_system(config: JsValue) -> Result<Float64Array, JsValue> {
    console_error_panic_hook::set_once();

    let request: SolveRequest = from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Invalid solve request: {}", e)))?;
    let trajectory = run_request(&request).map_err(to_js_error)?;
    Ok(Float64Array::from(trajectory.as_slice()))
}

/// Regroups a flat 2D or 3D trajectory into xyz triples, padding planar points with z = 0.
#[wasm_bindgen]
pub fn display_points(flat: Vec<f64>, dim: usize) -> Result<Float64Array, JsValue> {
    let xyz = core_display_points(&flat, dim)
        .context("Failed to build display points")
        .map_err(to_js_error)?;
    Ok(Float64Array::from(xyz.as_slice()))
}

pub(crate) fn run_request(request: &SolveRequest) -> Result<Trajectory> {
    let system = request.params.id();
    console_log!(
        "Solving {} for {} steps (dt = {})",
        system,
        request.steps,
        request.dt
    );
    let trajectory = solve(request).with_context(|| format!("Failed to solve {}", system))?;
    if trajectory.has_non_finite() {
        console_log!(
            "Trajectory for {} contains non-finite values; consider a step smaller than dt = {}",
            system,
            trajectory.dt()
        );
    }
    Ok(trajectory)
}

/// Checked solve returning `{ dimension, dt, times, values }`, where `times[i]` is the time
/// of point `i`, for hosts that index playback by elapsed time.
#[wasm_bindgen]
pub fn solve_system_timed(config: JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let request: SolveRequest = from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Invalid solve request: {}", e)))?;
    let trajectory = run_request(&request).map_err(to_js_error)?;
    to_value(&TimedTrajectoryPayload::from(&trajectory))
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

#[derive(Debug, Serialize)]
pub(crate) struct TimedTrajectoryPayload {
    dimension: usize,
    dt: f64,
    times: Vec<f64>,
    values: Vec<f64>,
}

impl From<&Trajectory> for TimedTrajectoryPayload {
    fn from(trajectory: &Trajectory) -> Self {
        Self {
            dimension: trajectory.dimension(),
            dt: trajectory.dt(),
            times: trajectory.times(),
            values: trajectory.as_slice().to_vec(),
        }
    }
}

pub(crate) fn to_js_error(err: anyhow::Error) -> JsValue {
    let message = format!("{:#}", err);
    console_log!("{}", message);
    JsValue::from_str(&message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use attractor_core::systems::{DampedPendulum, Lorenz};
    use attractor_core::SystemParams;

    #[test]
    fn lorenz_entry_point_returns_flat_points() {
        let result = solve_lorenz(10.0, 28.0, 8.0 / 3.0, 1.0, 1.0, 1.0, 0.01, 100);
        assert_eq!(result.len(), 303);
        assert_eq!(&result[..3], &[1.0, 1.0, 1.0]);
    }

    #[test]
    fn van_der_pol_entry_point_returns_flat_points() {
        let result = solve_van_der_pol(1.0, 2.0, 0.0, 0.01, 100);
        assert_eq!(result.len(), 202);
        assert_eq!(&result[..2], &[2.0, 0.0]);
    }

    #[test]
    fn damped_pendulum_entry_point_returns_flat_points() {
        let result = solve_damped_pendulum(0.5, 1.0, 1.0, 0.0, 0.01, 100);
        assert_eq!(result.len(), 202);
        assert_eq!(&result[..2], &[1.0, 0.0]);
    }

    #[test]
    fn rossler_entry_point_returns_flat_points() {
        let result = solve_rossler(0.2, 0.2, 5.7, 1.0, 1.0, 1.0, 0.01, 100);
        assert_eq!(result.len(), 303);
        assert_eq!(&result[..3], &[1.0, 1.0, 1.0]);
    }

    #[test]
    fn run_request_matches_entry_point() {
        let request = SolveRequest {
            params: SystemParams::DampedPendulum(DampedPendulum::new(0.5, 1.0)),
            initial: vec![1.0, 0.0],
            dt: 0.01,
            steps: 100,
        };
        let trajectory = run_request(&request).expect("solve should succeed");
        assert_eq!(
            trajectory.into_values(),
            solve_damped_pendulum(0.5, 1.0, 1.0, 0.0, 0.01, 100)
        );
    }

    #[test]
    fn timed_payload_carries_point_times() {
        let request = SolveRequest {
            params: SystemParams::Lorenz(Lorenz::default()),
            initial: vec![1.0, 1.0, 1.0],
            dt: 0.25,
            steps: 4,
        };
        let trajectory = run_request(&request).expect("solve should succeed");
        let payload = TimedTrajectoryPayload::from(&trajectory);
        assert_eq!(payload.dimension, 3);
        assert_eq!(payload.dt, 0.25);
        assert_eq!(payload.times, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(payload.values.len(), 15);
    }

    #[test]
    fn run_request_reports_invalid_parameter_with_context() {
        let request = SolveRequest {
            params: SystemParams::Lorenz(Lorenz::new(10.0, f64::INFINITY, 8.0 / 3.0)),
            initial: vec![1.0, 1.0, 1.0],
            dt: 0.01,
            steps: 10,
        };
        let err = run_request(&request).expect_err("expected invalid parameter");
        let message = format!("{:#}", err);
        assert!(message.starts_with("Failed to solve lorenz"), "{message}");
        assert!(message.contains("Invalid parameter `rho`"), "{message}");
    }
}
