//! WASM bridge for `attractor_core`.
//!
//! Exposes the flat `solve_*` entry points, the checked `solve_system` driver and the
//! preset catalog to the JavaScript gallery.

mod logging;
mod presets;
mod solve;

pub use presets::{preset_catalog, solve_preset};
pub use solve::{
    display_points, solve_damped_pendulum, solve_lorenz, solve_rossler, solve_system,
    solve_system_timed, solve_van_der_pol,
};
