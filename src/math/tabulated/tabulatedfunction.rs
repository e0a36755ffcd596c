use std::any::Any;
use std::fmt;

use serde::{
    Deserialize,
    Serialize
};

use crate::math::function::function::Function;
use crate::math::function::functionerror::FunctionError;
use crate::math::function::functionpoint::FunctionPoint;
use crate::math::tabulated::linkedtabulatedfunction::LinkedTabulatedFunction;

/// Storage strategy behind a [`TabulatedFunction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TabulatedStorage {
    Array,
    Linked
}

/// A [`Function`] backed by a finite set of samples, linearly interpolated.
///
/// Implementations keep at least two points, strictly increasing in `x`, and
/// their domain is exactly `[first x, last x]`. Every mutation either succeeds
/// or leaves the function untouched.
pub trait TabulatedFunction: Function + fmt::Debug + fmt::Display {
    fn storage(&self) -> TabulatedStorage;

    fn points_count(&self) -> usize;

    fn point(&self, index: usize) -> Result<FunctionPoint, FunctionError>;

    fn set_point(&mut self, index: usize, point: FunctionPoint) -> Result<(), FunctionError>;

    fn point_x(&self, index: usize) -> Result<f64, FunctionError>;

    fn set_point_x(&mut self, index: usize, x: f64) -> Result<(), FunctionError>;

    fn point_y(&self, index: usize) -> Result<f64, FunctionError>;

    fn set_point_y(&mut self, index: usize, y: f64) -> Result<(), FunctionError>;

    fn delete_point(&mut self, index: usize) -> Result<(), FunctionError>;

    fn add_point(&mut self, point: FunctionPoint) -> Result<(), FunctionError>;

    /// Copies of the samples in ascending `x` order. Each call starts over.
    fn points(&self) -> Box<dyn Iterator<Item = FunctionPoint> + '_>;

    fn clone_box(&self) -> Box<dyn TabulatedFunction>;

    fn as_any(&self) -> &dyn Any;

    fn to_vec(&self) -> Vec<FunctionPoint> {
        self.points().collect()
    }
}

impl Clone for Box<dyn TabulatedFunction> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Equal point counts and pointwise equal samples, whatever the storage.
impl PartialEq for dyn TabulatedFunction {
    fn eq(&self, other: &Self) -> bool {
        let lhs_linked = self.as_any().downcast_ref::<LinkedTabulatedFunction>();
        let rhs_linked = other.as_any().downcast_ref::<LinkedTabulatedFunction>();
        match (lhs_linked, rhs_linked) {
            (Some(lhs), Some(rhs)) => lhs == rhs,
            _ => positional_eq(self, other)
        }
    }
}

pub(crate) fn positional_eq(lhs: &dyn TabulatedFunction, rhs: &dyn TabulatedFunction) -> bool {
    lhs.points_count() == rhs.points_count()
        && (0..lhs.points_count()).all(|i| match (lhs.point(i), rhs.point(i)) {
            (Ok(lhs_pt), Ok(rhs_pt)) => lhs_pt == rhs_pt,
            _ => false
        })
}

// ─────────────────────────────────────────────────────────────────────────────
// Validation shared by both storages
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) fn uniform_grid(left_x: f64, right_x: f64, values: &[f64]) -> Result<Vec<FunctionPoint>, FunctionError> {
    if !(left_x < right_x) {
        return Err(FunctionError::InvalidConstructionArgument(
            format!("left border {left_x:?} must be less than right border {right_x:?}")
        ));
    }
    if values.len() < 2 {
        return Err(FunctionError::InvalidConstructionArgument(
            format!("at least 2 points are required, got {}", values.len())
        ));
    }
    if !left_x.is_finite() || !right_x.is_finite() {
        return Err(FunctionError::InvalidConstructionArgument(
            format!("borders [{left_x:?}, {right_x:?}] must be finite")
        ));
    }
    let step = (right_x - left_x) / (values.len() - 1) as f64;
    if !step.is_finite() {
        return Err(FunctionError::InvalidConstructionArgument(
            format!("the span of [{left_x:?}, {right_x:?}] overflows")
        ));
    }
    let points: Vec<FunctionPoint> = values
        .iter()
        .enumerate()
        .map(|(i, &y)| FunctionPoint::new(left_x + i as f64 * step, y))
        .collect();
    // too narrow a span for the count rounds neighbours onto the same x
    check_points(&points)?;
    Ok(points)
}

pub(crate) fn check_points(points: &[FunctionPoint]) -> Result<(), FunctionError> {
    if points.len() < 2 {
        return Err(FunctionError::InvalidConstructionArgument(
            format!("at least 2 points are required, got {}", points.len())
        ));
    }
    for (i, pair) in points.windows(2).enumerate() {
        if !(pair[0].x() < pair[1].x()) {
            return Err(FunctionError::InvalidConstructionArgument(
                format!("points {} and {} are not strictly increasing in x", i, i + 1)
            ));
        }
    }
    Ok(())
}

/// `x` must lie strictly between the neighbours of the point being replaced.
pub(crate) fn check_between(index: usize,
                            x: f64,
                            prev: Option<FunctionPoint>,
                            next: Option<FunctionPoint>) -> Result<(), FunctionError> {
    if let Some(prev) = prev {
        if !(x > prev.x()) {
            return Err(FunctionError::OrderViolation(
                format!("x = {x:?} at index {index} must be greater than previous x = {:?}", prev.x())
            ));
        }
    }
    if let Some(next) = next {
        if !(x < next.x()) {
            return Err(FunctionError::OrderViolation(
                format!("x = {x:?} at index {index} must be less than next x = {:?}", next.x())
            ));
        }
    }
    Ok(())
}

/// A new abscissa has to be comparable with the stored ones.
pub(crate) fn check_insertable(x: f64) -> Result<(), FunctionError> {
    if x.is_nan() {
        return Err(FunctionError::OrderViolation(format!("x = {x:?} cannot be ordered")));
    }
    Ok(())
}

pub(crate) fn check_deletable(count: usize) -> Result<(), FunctionError> {
    if count < 3 {
        return Err(FunctionError::StateError(
            format!("cannot delete a point: {count} points left, at least 2 must remain")
        ));
    }
    Ok(())
}

pub(crate) fn fmt_points<I>(f: &mut fmt::Formatter<'_>, points: I) -> fmt::Result where
    I: Iterator<Item = FunctionPoint> {
    write!(f, "{{")?;
    for (i, point) in points.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{point}")?;
    }
    write!(f, "}}")
}
