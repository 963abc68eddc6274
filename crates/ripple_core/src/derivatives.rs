//! Right-hand sides for the two supported models.

use crate::error::{Result, RippleError};
use crate::state::State;
use crate::stencil::second_derivative;
use crate::traits::{Derivative, Scalar};

/// df/dt = c² · d²f/dx² on a single field.
#[derive(Debug, Clone, Copy)]
pub struct DiffusionDerivative<T: Scalar> {
    speed_squared: T,
    spacing: T,
}

impl<T: Scalar> DiffusionDerivative<T> {
    pub fn new(speed: T, spacing: T) -> Self {
        Self {
            speed_squared: speed * speed,
            spacing,
        }
    }
}

impl<T: Scalar> Derivative<T> for DiffusionDerivative<T> {
    fn evaluate(&self, state: &State<T>) -> Result<State<T>> {
        if state.field_count() != 1 {
            return Err(RippleError::Implementation(format!(
                "Diffusion model expects 1 field, got {}.",
                state.field_count()
            )));
        }
        let mut rate = second_derivative(state.displacement(), self.spacing)?;
        for value in &mut rate {
            *value = self.speed_squared * *value;
        }
        Ok(State::scalar(rate))
    }
}

/// First-order form of u_tt = c² u_xx: du/dt = v, dv/dt = c² u_xx.
#[derive(Debug, Clone, Copy)]
pub struct WaveDerivative<T: Scalar> {
    speed_squared: T,
    spacing: T,
}

impl<T: Scalar> WaveDerivative<T> {
    pub fn new(speed: T, spacing: T) -> Self {
        Self {
            speed_squared: speed * speed,
            spacing,
        }
    }
}

impl<T: Scalar> Derivative<T> for WaveDerivative<T> {
    fn evaluate(&self, state: &State<T>) -> Result<State<T>> {
        let [u, v] = state.fields() else {
            return Err(RippleError::Implementation(format!(
                "Wave model expects 2 fields, got {}.",
                state.field_count()
            )));
        };
        let curvature = second_derivative(u, self.spacing)?;
        let accel = curvature
            .into_iter()
            .map(|value| self.speed_squared * value)
            .collect();
        State::pair(v.to_vec(), accel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    #[test]
    fn diffusion_scales_curvature_by_speed_squared() {
        let grid = Grid::new(16).expect("grid should build");
        let f = grid.sample(|x| x * x);
        let rate = DiffusionDerivative::new(3.0, grid.spacing())
            .evaluate(&State::scalar(f))
            .expect("rate should evaluate");
        for value in rate.displacement() {
            assert!((value - 18.0).abs() < 1e-9);
        }
    }

    #[test]
    fn wave_rate_swaps_velocity_into_displacement_slot() {
        let grid = Grid::new(12).expect("grid should build");
        let u = grid.sample(|x| 0.5 * x * x);
        let v: Vec<f64> = (0..12).map(|i| i as f64).collect();
        let state = State::pair(u, v.clone()).expect("valid pair");
        let rate = WaveDerivative::new(2.0, grid.spacing())
            .evaluate(&state)
            .expect("rate should evaluate");
        assert_eq!(rate.displacement(), v.as_slice());
        for value in rate.field(1).expect("velocity rate") {
            assert!((value - 4.0).abs() < 1e-9);
        }
    }

    #[test]
    fn models_reject_wrong_field_count() {
        let scalar = State::scalar(vec![0.0; 8]);
        let pair = State::pair(vec![0.0; 8], vec![0.0; 8]).expect("valid pair");
        assert!(matches!(
            WaveDerivative::new(1.0, 0.1).evaluate(&scalar),
            Err(RippleError::Implementation(_))
        ));
        assert!(matches!(
            DiffusionDerivative::new(1.0, 0.1).evaluate(&pair),
            Err(RippleError::Implementation(_))
        ));
    }
}
