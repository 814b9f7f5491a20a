use nalgebra::SVector;

/// State of an N-dimensional system.
pub type State<const N: usize> = SVector<f64, N>;

/// Represents an autonomous or non-autonomous vector field dy/dt = f(t, y).
pub trait VectorField<const N: usize> {
    /// Returns the dimension of the state space.
    fn dimension(&self) -> usize {
        N
    }

    /// Evaluates the vector field.
    /// t: current time
    /// y: current state
    fn derivative(&self, t: f64, y: &State<N>) -> State<N>;
}

impl<const N: usize, F> VectorField<N> for F
where
    F: Fn(f64, &State<N>) -> State<N>,
{
    fn derivative(&self, t: f64, y: &State<N>) -> State<N> {
        self(t, y)
    }
}

/// A trait for solvers that can step a system forward.
pub trait Steppable<const N: usize> {
    /// Performs one step of size dt starting from (t, y) and returns the new state.
    /// The input state is left untouched.
    fn step(&self, field: &impl VectorField<N>, t: f64, y: &State<N>, dt: f64) -> State<N>;
}
