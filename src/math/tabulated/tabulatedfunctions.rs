use std::sync::Arc;

use tracing::debug;

use crate::math::function::function::{
    check_interval_in_domain,
    Function
};
use crate::math::function::functionerror::FunctionError;
use crate::math::function::functionpoint::FunctionPoint;
use crate::math::tabulated::tabulatedfunction::{
    TabulatedFunction,
    TabulatedStorage
};
use crate::math::tabulated::tabulatedfunctionfactory::TabulatedFunctionFactory;

/// Construction context holding the active [`TabulatedFunctionFactory`].
///
/// Every creation call that does not name a storage goes through the factory
/// held here. Swapping it only affects functions created afterwards.
#[derive(Clone)]
pub struct TabulatedFunctions {
    factory: Arc<dyn TabulatedFunctionFactory>
}

impl TabulatedFunctions {
    pub fn new() -> TabulatedFunctions {
        Self::with_factory(TabulatedStorage::Array.factory())
    }

    pub fn with_factory(factory: Arc<dyn TabulatedFunctionFactory>) -> TabulatedFunctions {
        TabulatedFunctions { factory }
    }

    pub fn factory(&self) -> &Arc<dyn TabulatedFunctionFactory> {
        &self.factory
    }

    pub fn storage(&self) -> TabulatedStorage {
        self.factory.storage()
    }

    pub fn set_tabulated_function_factory(&mut self, factory: Arc<dyn TabulatedFunctionFactory>) {
        debug!(from = ?self.factory.storage(), to = ?factory.storage(), "swapping tabulated function factory");
        self.factory = factory;
    }

    pub fn create_tabulated_function(&self,
                                     left_x: f64,
                                     right_x: f64,
                                     points_count: usize) -> Result<Box<dyn TabulatedFunction>, FunctionError> {
        self.factory.create_tabulated_function(left_x, right_x, points_count)
    }

    pub fn create_tabulated_function_from_values(&self,
                                                 left_x: f64,
                                                 right_x: f64,
                                                 values: &[f64]) -> Result<Box<dyn TabulatedFunction>, FunctionError> {
        self.factory.create_tabulated_function_from_values(left_x, right_x, values)
    }

    pub fn create_tabulated_function_from_points(&self,
                                                 points: &[FunctionPoint]) -> Result<Box<dyn TabulatedFunction>, FunctionError> {
        self.factory.create_tabulated_function_from_points(points)
    }

    /// Samples `function` at `points_count` evenly spaced abscissas of `[left_x, right_x]`.
    pub fn tabulate(&self,
                    function: &dyn Function,
                    left_x: f64,
                    right_x: f64,
                    points_count: usize) -> Result<Box<dyn TabulatedFunction>, FunctionError> {
        let values = sample(function, left_x, right_x, points_count)?;
        self.create_tabulated_function_from_values(left_x, right_x, &values)
    }
}

impl Default for TabulatedFunctions {
    fn default() -> Self {
        Self::new()
    }
}

/// Values of `function` on a uniform grid; the interval must lie in its domain.
pub fn sample(function: &dyn Function,
              left_x: f64,
              right_x: f64,
              points_count: usize) -> Result<Vec<f64>, FunctionError> {
    if !(left_x < right_x) {
        return Err(FunctionError::InvalidConstructionArgument(
            format!("left border {left_x:?} must be less than right border {right_x:?}")
        ));
    }
    if points_count < 2 {
        return Err(FunctionError::InvalidConstructionArgument(
            format!("at least 2 points are required, got {points_count}")
        ));
    }
    check_interval_in_domain(function, left_x, right_x)?;

    let step = (right_x - left_x) / (points_count - 1) as f64;
    Ok((0..points_count)
        .map(|i| function.value(left_x + i as f64 * step))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::function::basic::log::Log;
    use crate::math::function::basic::trigonometricfunction::Sin;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_factory_is_array() {
        let context = TabulatedFunctions::default();
        assert_eq!(context.storage(), TabulatedStorage::Array);
        let f = context.create_tabulated_function(0.0, 1.0, 2).unwrap();
        assert_eq!(f.storage(), TabulatedStorage::Array);
    }

    #[test]
    fn test_swapping_factory() {
        let mut context = TabulatedFunctions::new();
        let before = context.create_tabulated_function_from_values(0.0, 1.0, &[1.0, 2.0]).unwrap();
        context.set_tabulated_function_factory(TabulatedStorage::Linked.factory());
        let after = context.create_tabulated_function_from_values(0.0, 1.0, &[1.0, 2.0]).unwrap();
        assert_eq!(before.storage(), TabulatedStorage::Array);
        assert_eq!(after.storage(), TabulatedStorage::Linked);
        assert!(*before == *after);
    }

    #[test]
    fn test_tabulate() {
        let context = TabulatedFunctions::new();
        let sin = Sin::new();
        let f = context.tabulate(&sin, 0.0, std::f64::consts::PI, 11).unwrap();
        assert_eq!(f.points_count(), 11);
        assert_relative_eq!(f.left_domain_border(), 0.0);
        assert_relative_eq!(f.right_domain_border(), std::f64::consts::PI);
        for point in f.points() {
            assert_relative_eq!(point.y(), point.x().sin(), epsilon = 1e-12);
        }
        assert_relative_eq!(f.value(1.0), 1.0_f64.sin(), epsilon = 2e-2);
    }

    #[test]
    fn test_tabulate_rejects_interval_outside_domain() {
        let context = TabulatedFunctions::new();
        let log = Log::new(10.0).unwrap();
        assert!(matches!(context.tabulate(&log, -1.0, 10.0, 5), Err(FunctionError::DomainViolation { .. })));
        assert!(matches!(context.tabulate(&log, 5.0, 1.0, 5), Err(FunctionError::InvalidConstructionArgument(_))));
        assert!(matches!(context.tabulate(&log, 1.0, 5.0, 1), Err(FunctionError::InvalidConstructionArgument(_))));

        let sin = Sin::new();
        assert!(matches!(context.tabulate(&sin, f64::NEG_INFINITY, f64::INFINITY, 5), Err(FunctionError::InvalidConstructionArgument(_))));
        assert!(matches!(context.tabulate(&sin, -1e308, 1e308, 5), Err(FunctionError::InvalidConstructionArgument(_))));

        let bounded = context.create_tabulated_function_from_values(0.0, 1.0, &[0.0, 1.0]).unwrap();
        assert!(matches!(context.tabulate(&bounded, 0.0, 1.5, 3), Err(FunctionError::DomainViolation { .. })));
    }
}
