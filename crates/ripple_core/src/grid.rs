use crate::error::{Result, RippleError};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Smallest grid the one-sided boundary stencils can work on.
pub const MIN_POINTS: usize = 4;

/// Uniform sampling of [0, 2π] with `point_count` points, endpoints included.
///
/// Only serialized, never deserialized: construction goes through [`Grid::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Grid {
    point_count: usize,
    spacing: f64,
}

impl Grid {
    pub fn new(point_count: usize) -> Result<Self> {
        if point_count < MIN_POINTS {
            return Err(RippleError::Configuration(format!(
                "point_count must be at least {MIN_POINTS}, got {point_count}."
            )));
        }
        Ok(Self {
            point_count,
            spacing: 2.0 * PI / (point_count - 1) as f64,
        })
    }

    pub fn point_count(&self) -> usize {
        self.point_count
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn coordinate(&self, index: usize) -> f64 {
        index as f64 * self.spacing
    }

    pub fn coordinates(&self) -> Vec<f64> {
        (0..self.point_count).map(|i| self.coordinate(i)).collect()
    }

    /// Evaluates `profile` at every grid coordinate.
    pub fn sample(&self, profile: impl Fn(f64) -> f64) -> Vec<f64> {
        (0..self.point_count)
            .map(|i| profile(self.coordinate(i)))
            .collect()
    }
}

/// Coordinates and values of a sampled field, ready for a host to plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSamples {
    pub x: Vec<f64>,
    pub f: Vec<f64>,
}

impl GridSamples {
    pub fn new(grid: &Grid, f: Vec<f64>) -> Self {
        Self {
            x: grid.coordinates(),
            f,
        }
    }
}

/// One full period of sin(x) on a fresh grid.
pub fn sample_sine_wave(point_count: usize) -> Result<GridSamples> {
    let grid = Grid::new(point_count)?;
    Ok(GridSamples::new(&grid, grid.sample(f64::sin)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_covers_full_period() {
        let grid = Grid::new(100).expect("grid should build");
        assert!((grid.spacing() - 2.0 * PI / 99.0).abs() < 1e-15);
        let x = grid.coordinates();
        assert_eq!(x.len(), 100);
        assert_eq!(x[0], 0.0);
        assert!((x[99] - 2.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn rejects_too_few_points() {
        for n in 0..MIN_POINTS {
            assert!(matches!(Grid::new(n), Err(RippleError::Configuration(_))));
        }
        assert!(Grid::new(MIN_POINTS).is_ok());
    }

    #[test]
    fn sine_samples_align_with_coordinates() {
        let samples = sample_sine_wave(100).expect("samples should build");
        assert_eq!(samples.x.len(), samples.f.len());
        for (x, f) in samples.x.iter().zip(&samples.f) {
            assert_eq!(*f, x.sin());
        }
    }
}
