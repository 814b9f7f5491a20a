use crate::traits::{State, Steppable, VectorField};
use crate::trajectory::Trajectory;

/// Classic Runge-Kutta 4th Order Solver
///
/// Fixed step, no error estimate and no step rejection. Not symplectic: stepping
/// forward by dt and back by -dt does not return exactly to the starting point.
#[derive(Debug, Clone, Copy, Default)]
pub struct RK4;

impl RK4 {
    pub fn new() -> Self {
        Self
    }
}

impl<const N: usize> Steppable<N> for RK4 {
    fn step(&self, field: &impl VectorField<N>, t: f64, y: &State<N>, dt: f64) -> State<N> {
        let half = dt / 2.0;

        // k1 = f(t, y)
        let k1 = field.derivative(t, y);
        // k2 = f(t + dt/2, y + k1*dt/2)
        let k2 = field.derivative(t + half, &(y + k1 * half));
        // k3 = f(t + dt/2, y + k2*dt/2)
        let k3 = field.derivative(t + half, &(y + k2 * half));
        // k4 = f(t + dt, y + k3*dt)
        let k4 = field.derivative(t + dt, &(y + k3 * dt));

        y + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0)
    }
}

/// Integrates `field` from `initial` for `steps` fixed steps of size `dt`.
///
/// Step i (1-based) is taken from time `(i - 1) * dt`. The returned trajectory holds
/// `steps + 1` states, the first being `initial`.
pub fn integrate<const N: usize>(
    stepper: &impl Steppable<N>,
    field: &impl VectorField<N>,
    initial: State<N>,
    dt: f64,
    steps: usize,
) -> Trajectory {
    let mut values = Vec::with_capacity((steps + 1) * N);
    values.extend_from_slice(initial.as_slice());

    let mut y = initial;
    for i in 0..steps {
        y = stepper.step(field, i as f64 * dt, &y, dt);
        values.extend_from_slice(y.as_slice());
    }

    Trajectory::from_raw(N, dt, values)
}
