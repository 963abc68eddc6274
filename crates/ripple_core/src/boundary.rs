use crate::traits::Scalar;
use serde::Serialize;

/// Fixed endpoint values for the displacement field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dirichlet {
    pub left: f64,
    pub right: f64,
}

impl Default for Dirichlet {
    /// Homogeneous: both ends pinned to zero.
    fn default() -> Self {
        Self {
            left: 0.0,
            right: 0.0,
        }
    }
}

impl Dirichlet {
    pub fn enforce(&self, field: &mut [f64]) {
        enforce_dirichlet(field, self.left, self.right);
    }
}

/// Returns a copy of `field` with its first and last samples replaced.
pub fn apply_dirichlet<T: Scalar>(field: &[T], left: T, right: T) -> Vec<T> {
    let mut out = field.to_vec();
    enforce_dirichlet(&mut out, left, right);
    out
}

/// In-place variant of [`apply_dirichlet`]; empty fields are left alone.
pub fn enforce_dirichlet<T: Scalar>(field: &mut [T], left: T, right: T) {
    if let Some(first) = field.first_mut() {
        *first = left;
    }
    if let Some(last) = field.last_mut() {
        *last = right;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_dirichlet_touches_only_endpoints() {
        let field = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let out = apply_dirichlet(&field, 0.0, -1.0);
        assert_eq!(out, vec![0.0, 2.0, 3.0, 4.0, -1.0]);
        assert_eq!(field, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn default_condition_is_homogeneous() {
        let mut field = vec![f64::NAN, 1.0, 1.0, f64::INFINITY];
        Dirichlet::default().enforce(&mut field);
        assert_eq!(field, vec![0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn enforce_on_empty_field_is_noop() {
        let mut field: Vec<f64> = Vec::new();
        enforce_dirichlet(&mut field, 1.0, 2.0);
        assert!(field.is_empty());
    }
}
