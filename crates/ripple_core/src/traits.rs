use crate::error::Result;
use crate::state::State;
use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// A trait for types that can be used as field samples.
/// Must support basic arithmetic, debug printing, and conversion from f64.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// Maps a state snapshot to its rate of change.
///
/// The returned state must have the same shape as the input (same number of
/// fields, each of the same length). Implementations must be pure.
pub trait Derivative<T: Scalar> {
    fn evaluate(&self, state: &State<T>) -> Result<State<T>>;
}

impl<T, F> Derivative<T> for F
where
    T: Scalar,
    F: Fn(&State<T>) -> Result<State<T>>,
{
    fn evaluate(&self, state: &State<T>) -> Result<State<T>> {
        self(state)
    }
}

/// A trait for solvers that can step a state forward.
pub trait Steppable<T: Scalar> {
    /// Performs one step of size dt and returns the advanced state.
    /// The input state is left untouched.
    fn step(&self, derivative: &impl Derivative<T>, state: &State<T>, dt: T) -> Result<State<T>>;
}
