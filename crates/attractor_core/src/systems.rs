//! Vector fields of the built-in systems.
//!
//! All four are autonomous: they accept `t` and ignore it.

use crate::traits::{State, VectorField};
use serde::{Deserialize, Serialize};

/// Lorenz attractor.
///
/// dx/dt = σ(y - x)
/// dy/dt = x(ρ - z) - y
/// dz/dt = xy - βz
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lorenz {
    pub sigma: f64,
    pub rho: f64,
    pub beta: f64,
}

impl Lorenz {
    pub fn new(sigma: f64, rho: f64, beta: f64) -> Self {
        Self { sigma, rho, beta }
    }
}

impl Default for Lorenz {
    fn default() -> Self {
        Self::new(10.0, 28.0, 8.0 / 3.0)
    }
}

impl VectorField<3> for Lorenz {
    fn derivative(&self, _t: f64, s: &State<3>) -> State<3> {
        let (x, y, z) = (s[0], s[1], s[2]);
        State::<3>::new(
            self.sigma * (y - x),
            x * (self.rho - z) - y,
            x * y - self.beta * z,
        )
    }
}

/// Van der Pol oscillator.
///
/// dx/dt = y
/// dy/dt = μ(1 - x²)y - x
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VanDerPol {
    pub mu: f64,
}

impl VanDerPol {
    pub fn new(mu: f64) -> Self {
        Self { mu }
    }
}

impl Default for VanDerPol {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl VectorField<2> for VanDerPol {
    fn derivative(&self, _t: f64, s: &State<2>) -> State<2> {
        let (x, y) = (s[0], s[1]);
        State::<2>::new(y, self.mu * (1.0 - x * x) * y - x)
    }
}

/// Damped pendulum with state (θ, ω).
///
/// dθ/dt = ω
/// dω/dt = -γω - ω₀²sin(θ)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DampedPendulum {
    pub gamma: f64,
    pub omega0: f64,
}

impl DampedPendulum {
    pub fn new(gamma: f64, omega0: f64) -> Self {
        Self { gamma, omega0 }
    }
}

impl Default for DampedPendulum {
    fn default() -> Self {
        Self::new(0.5, 1.0)
    }
}

impl VectorField<2> for DampedPendulum {
    fn derivative(&self, _t: f64, s: &State<2>) -> State<2> {
        let (theta, omega) = (s[0], s[1]);
        State::<2>::new(
            omega,
            -self.gamma * omega - self.omega0 * self.omega0 * theta.sin(),
        )
    }
}

/// Rössler attractor.
///
/// dx/dt = -y - z
/// dy/dt = x + ay
/// dz/dt = b + z(x - c)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rossler {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Rossler {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }
}

impl Default for Rossler {
    fn default() -> Self {
        Self::new(0.2, 0.2, 5.7)
    }
}

impl VectorField<3> for Rossler {
    fn derivative(&self, _t: f64, s: &State<3>) -> State<3> {
        let (x, y, z) = (s[0], s[1], s[2]);
        State::<3>::new(-y - z, x + self.a * y, self.b + z * (x - self.c))
    }
}
