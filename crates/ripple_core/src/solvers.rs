use crate::error::{Result, RippleError};
use crate::state::State;
use crate::traits::{Derivative, Scalar, Steppable};

/// Classic Runge-Kutta 4th Order Solver
///
/// Every field of the state is advanced with the same four stage evaluations,
/// so coupled systems (u, v) stay consistent inside a step.
#[derive(Debug, Clone, Copy, Default)]
pub struct RK4;

impl RK4 {
    pub fn new() -> Self {
        Self
    }
}

fn stage<T: Scalar>(
    derivative: &impl Derivative<T>,
    state: &State<T>,
    label: &str,
) -> Result<State<T>> {
    let rate = derivative.evaluate(state)?;
    if !rate.same_shape(state) {
        return Err(RippleError::Implementation(format!(
            "Derivative stage {label} changed the state shape ({} fields of {} -> {} fields of {}).",
            state.field_count(),
            state.point_count(),
            rate.field_count(),
            rate.point_count()
        )));
    }
    Ok(rate)
}

impl<T: Scalar> Steppable<T> for RK4 {
    fn step(&self, derivative: &impl Derivative<T>, state: &State<T>, dt: T) -> Result<State<T>> {
        let two = T::one() + T::one();
        let half = dt / two;
        let sixth = dt / (two + two + two);

        // k1 = f(y)
        let k1 = stage(derivative, state, "k1")?;

        // k2 = f(y + dt*k1/2)
        let k2 = stage(derivative, &state.offset(half, &k1)?, "k2")?;

        // k3 = f(y + dt*k2/2)
        let k3 = stage(derivative, &state.offset(half, &k2)?, "k3")?;

        // k4 = f(y + dt*k3)
        let k4 = stage(derivative, &state.offset(dt, &k3)?, "k4")?;

        // y_next = y + dt/6 * (k1 + 2k2 + 2k3 + k4)
        let fields = state
            .fields()
            .iter()
            .enumerate()
            .map(|(f, y)| {
                let (a, b) = (&k1.fields()[f], &k2.fields()[f]);
                let (c, d) = (&k3.fields()[f], &k4.fields()[f]);
                (0..y.len())
                    .map(|i| y[i] + sixth * (a[i] + two * b[i] + two * c[i] + d[i]))
                    .collect()
            })
            .collect();
        State::new(fields)
    }
}
