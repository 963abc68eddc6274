//! Simulation state: one or more index-aligned fields of equal length.

use crate::error::{Result, RippleError};
use crate::traits::Scalar;

/// A set of fields advanced together by the integrator.
///
/// Field 0 is always the displacement. The wave model carries the velocity as
/// field 1; the diffusion model has no second field.
#[derive(Debug, Clone, PartialEq)]
pub struct State<T: Scalar> {
    fields: Vec<Vec<T>>,
}

impl<T: Scalar> State<T> {
    /// Builds a state from its fields. All fields must share one length.
    pub fn new(fields: Vec<Vec<T>>) -> Result<Self> {
        let Some(first) = fields.first() else {
            return Err(RippleError::Implementation(
                "State needs at least one field.".to_string(),
            ));
        };
        let len = first.len();
        if let Some(bad) = fields.iter().find(|f| f.len() != len) {
            return Err(RippleError::Implementation(format!(
                "State fields have mismatched lengths ({} vs {}).",
                bad.len(),
                len
            )));
        }
        Ok(Self { fields })
    }

    pub fn scalar(field: Vec<T>) -> Self {
        Self {
            fields: vec![field],
        }
    }

    /// Displacement/velocity pair for the wave model.
    pub fn pair(u: Vec<T>, v: Vec<T>) -> Result<Self> {
        Self::new(vec![u, v])
    }

    pub fn fields(&self) -> &[Vec<T>] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Option<&[T]> {
        self.fields.get(index).map(Vec::as_slice)
    }

    pub fn displacement(&self) -> &[T] {
        &self.fields[0]
    }

    pub fn displacement_mut(&mut self) -> &mut [T] {
        &mut self.fields[0]
    }

    /// Number of samples per field.
    pub fn point_count(&self) -> usize {
        self.fields[0].len()
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn into_fields(self) -> Vec<Vec<T>> {
        self.fields
    }

    pub fn same_shape(&self, other: &State<T>) -> bool {
        self.fields.len() == other.fields.len()
            && self
                .fields
                .iter()
                .zip(&other.fields)
                .all(|(a, b)| a.len() == b.len())
    }

    /// Returns `self + scale * direction`, field by field.
    pub fn offset(&self, scale: T, direction: &State<T>) -> Result<State<T>> {
        if !self.same_shape(direction) {
            return Err(RippleError::Implementation(format!(
                "Cannot offset a state of {} fields of {} by one of {} fields of {}.",
                self.field_count(),
                self.point_count(),
                direction.field_count(),
                direction.point_count()
            )));
        }
        let fields = self
            .fields
            .iter()
            .zip(&direction.fields)
            .map(|(base, dir)| {
                base.iter()
                    .zip(dir)
                    .map(|(&b, &d)| b + scale * d)
                    .collect()
            })
            .collect();
        Ok(State { fields })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_mismatched_fields() {
        let err = State::new(vec![vec![1.0, 2.0], vec![1.0]]).expect_err("lengths differ");
        assert!(matches!(err, RippleError::Implementation(_)));
    }

    #[test]
    fn new_rejects_empty_field_list() {
        let err = State::<f64>::new(Vec::new()).expect_err("no fields");
        assert!(matches!(err, RippleError::Implementation(_)));
    }

    #[test]
    fn offset_combines_every_field() {
        let base = State::pair(vec![1.0, 2.0], vec![3.0, 4.0]).expect("valid pair");
        let dir = State::pair(vec![1.0, 1.0], vec![-2.0, 0.5]).expect("valid pair");
        let out = base.offset(0.5, &dir).expect("shapes match");
        assert_eq!(out.fields(), &[vec![1.5, 2.5], vec![2.0, 4.25]]);
        assert_eq!(base.fields()[0], vec![1.0, 2.0]);
    }

    #[test]
    fn offset_rejects_mismatched_shapes() {
        let base = State::pair(vec![1.0; 5], vec![2.0; 5]).expect("valid pair");
        for dir in [
            State::scalar(vec![1.0; 3]),
            State::scalar(vec![1.0; 5]),
            State::pair(vec![1.0; 4], vec![1.0; 4]).expect("valid pair"),
        ] {
            let err = base.offset(1.0, &dir).expect_err("shape mismatch must fail");
            assert!(matches!(err, RippleError::Implementation(_)));
        }
    }

    #[test]
    fn same_shape_checks_field_count_and_length() {
        let a = State::scalar(vec![0.0; 4]);
        let b = State::pair(vec![0.0; 4], vec![0.0; 4]).expect("valid pair");
        let c = State::scalar(vec![0.0; 5]);
        assert!(a.same_shape(&a.clone()));
        assert!(!a.same_shape(&b));
        assert!(!a.same_shape(&c));
    }
}
