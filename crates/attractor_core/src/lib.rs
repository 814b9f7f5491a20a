pub mod catalog;
pub mod error;
pub mod solvers;
pub mod systems;
pub mod trajectory;
/// The `attractor_core` crate is the numerical engine behind the attractor gallery.
/// It integrates low-dimensional ODEs with a fixed-step classical RK4 scheme and returns
/// flat, row-major trajectories for a rendering layer to consume.
///
/// Key components:
/// - **Traits**: `State` (fixed-size state vector), `VectorField` (ODE right-hand side), `Steppable` (Solvers).
/// - **Solvers**: `RK4` and the `integrate` driver.
/// - **Systems**: Lorenz, Van der Pol, damped pendulum and Rössler vector fields.
/// - **Catalog**: `SystemParams`, the checked `solve` driver, flat `solve_*` entry points and presets.
/// - **Trajectory**: the owned flat buffer and its xyz display conversion.
pub mod traits;

pub use catalog::{
    preset, presets, solve, solve_damped_pendulum, solve_lorenz, solve_rossler,
    solve_van_der_pol, Preset, SolveRequest, SystemParams,
};
pub use error::SolveError;
pub use trajectory::{display_points, Trajectory};
