use std::any::Any;
use std::fmt;
use std::hash::{
    Hash,
    Hasher
};

use serde::{
    Deserialize,
    Serialize
};
use tracing::trace;

use crate::math::function::function::Function;
use crate::math::function::functionerror::FunctionError;
use crate::math::function::functionpoint::FunctionPoint;
use crate::math::tabulated::linkedtabulatedfunction::LinkedTabulatedFunction;
use crate::math::tabulated::tabulatedfunction::{
    check_between,
    check_deletable,
    check_insertable,
    check_points,
    fmt_points,
    positional_eq,
    uniform_grid,
    TabulatedFunction,
    TabulatedStorage
};

/// Tabulated function stored in one contiguous buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FunctionPoint>", into = "Vec<FunctionPoint>")]
pub struct ArrayTabulatedFunction {
    points: Vec<FunctionPoint>
}

impl ArrayTabulatedFunction {
    /// `points_count` samples evenly spaced over `[left_x, right_x]`, all with `y = 0`.
    pub fn new(left_x: f64, right_x: f64, points_count: usize) -> Result<ArrayTabulatedFunction, FunctionError> {
        Self::from_values(left_x, right_x, &vec![0.0; points_count])
    }

    /// One sample per value, evenly spaced over `[left_x, right_x]`.
    pub fn from_values(left_x: f64, right_x: f64, values: &[f64]) -> Result<ArrayTabulatedFunction, FunctionError> {
        let points = uniform_grid(left_x, right_x, values)?;
        Ok(ArrayTabulatedFunction { points })
    }

    /// Copies `points`, which must be at least two and strictly increasing in `x`.
    pub fn from_points(points: &[FunctionPoint]) -> Result<ArrayTabulatedFunction, FunctionError> {
        check_points(points)?;
        Ok(ArrayTabulatedFunction { points: points.to_vec() })
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, FunctionPoint>> {
        self.points.iter().copied()
    }

    fn neighbours(&self, index: usize) -> (Option<FunctionPoint>, Option<FunctionPoint>) {
        let prev = index.checked_sub(1).map(|i| self.points[i]);
        let next = self.points.get(index + 1).copied();
        (prev, next)
    }
}

impl Function for ArrayTabulatedFunction {
    fn left_domain_border(&self) -> f64 {
        self.points[0].x()
    }

    fn right_domain_border(&self) -> f64 {
        self.points[self.points.len() - 1].x()
    }

    fn value(&self, x: f64) -> f64 {
        if !self.in_domain(x) {
            return f64::NAN;
        }
        for pair in self.points.windows(2) {
            let (lhs_pt, rhs_pt) = (&pair[0], &pair[1]);
            if lhs_pt.same_x(x) {
                return lhs_pt.y();
            }
            if x > lhs_pt.x() && x < rhs_pt.x() {
                return FunctionPoint::interpolate(lhs_pt, rhs_pt, x);
            }
            if rhs_pt.same_x(x) {
                return rhs_pt.y();
            }
        }
        self.points[self.points.len() - 1].y()
    }
}

impl TabulatedFunction for ArrayTabulatedFunction {
    fn storage(&self) -> TabulatedStorage {
        TabulatedStorage::Array
    }

    fn points_count(&self) -> usize {
        self.points.len()
    }

    fn point(&self, index: usize) -> Result<FunctionPoint, FunctionError> {
        FunctionError::check_index(index, self.points.len())?;
        Ok(self.points[index])
    }

    fn set_point(&mut self, index: usize, point: FunctionPoint) -> Result<(), FunctionError> {
        FunctionError::check_index(index, self.points.len())?;
        let (prev, next) = self.neighbours(index);
        check_between(index, point.x(), prev, next)?;
        trace!(index, %point, "array: set point");
        self.points[index] = point;
        Ok(())
    }

    fn point_x(&self, index: usize) -> Result<f64, FunctionError> {
        self.point(index).map(|pt| pt.x())
    }

    fn set_point_x(&mut self, index: usize, x: f64) -> Result<(), FunctionError> {
        FunctionError::check_index(index, self.points.len())?;
        let (prev, next) = self.neighbours(index);
        check_between(index, x, prev, next)?;
        self.points[index].set_x(x);
        Ok(())
    }

    fn point_y(&self, index: usize) -> Result<f64, FunctionError> {
        self.point(index).map(|pt| pt.y())
    }

    fn set_point_y(&mut self, index: usize, y: f64) -> Result<(), FunctionError> {
        FunctionError::check_index(index, self.points.len())?;
        self.points[index].set_y(y);
        Ok(())
    }

    fn delete_point(&mut self, index: usize) -> Result<(), FunctionError> {
        FunctionError::check_index(index, self.points.len())?;
        check_deletable(self.points.len())?;
        trace!(index, "array: delete point");
        self.points.remove(index);
        Ok(())
    }

    fn add_point(&mut self, point: FunctionPoint) -> Result<(), FunctionError> {
        check_insertable(point.x())?;
        if self.points.iter().any(|pt| pt.same_x(point.x())) {
            return Err(FunctionError::DuplicateX(point.x()));
        }
        let insert_index = self.points
            .iter()
            .position(|pt| !(pt.x() < point.x()))
            .unwrap_or(self.points.len());
        trace!(insert_index, %point, "array: add point");
        self.points.insert(insert_index, point);
        Ok(())
    }

    fn points(&self) -> Box<dyn Iterator<Item = FunctionPoint> + '_> {
        Box::new(self.iter())
    }

    fn clone_box(&self) -> Box<dyn TabulatedFunction> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl PartialEq<LinkedTabulatedFunction> for ArrayTabulatedFunction {
    fn eq(&self, other: &LinkedTabulatedFunction) -> bool {
        positional_eq(self, other)
    }
}

impl Hash for ArrayTabulatedFunction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.points.len().hash(state);
        for point in &self.points {
            point.hash(state);
        }
    }
}

impl fmt::Display for ArrayTabulatedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_points(f, self.iter())
    }
}

impl<'a> IntoIterator for &'a ArrayTabulatedFunction {
    type Item = FunctionPoint;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, FunctionPoint>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter().copied()
    }
}

impl TryFrom<Vec<FunctionPoint>> for ArrayTabulatedFunction {
    type Error = FunctionError;

    fn try_from(points: Vec<FunctionPoint>) -> Result<Self, Self::Error> {
        check_points(&points)?;
        Ok(ArrayTabulatedFunction { points })
    }
}

impl From<ArrayTabulatedFunction> for Vec<FunctionPoint> {
    fn from(function: ArrayTabulatedFunction) -> Self {
        function.points
    }
}
