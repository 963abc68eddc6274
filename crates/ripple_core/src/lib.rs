pub mod boundary;
pub mod derivatives;
pub mod error;
pub mod grid;
pub mod simulation;
pub mod solvers;
pub mod state;
pub mod stencil;
/// The `ripple_core` crate is the numerical engine behind Ripple.
/// It advances 1-D wave-type PDEs with second-order finite differences in space
/// and a fixed-step RK4 integrator in time.
///
/// Key components:
/// - **Traits**: `Scalar` (numeric type abstraction), `Derivative` (state to rate of change), `Steppable` (Solvers).
/// - **Stencils**: first and second derivatives with one-sided boundary closures.
/// - **Solvers**: the classic RK4 stepper, shared by scalar and coupled states.
/// - **Simulation**: the driver owning grid, dt, state, and Dirichlet enforcement.
pub mod traits;

pub use error::{Result, RippleError};
pub use simulation::{InitialProfile, ModelKind, Simulation, SimulationSettings};
