use std::sync::Arc;

use crate::math::function::functionerror::FunctionError;
use crate::math::function::functionpoint::FunctionPoint;
use crate::math::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
use crate::math::tabulated::linkedtabulatedfunction::LinkedTabulatedFunction;
use crate::math::tabulated::tabulatedfunction::{
    TabulatedFunction,
    TabulatedStorage
};

/// Arguments of the three construction shapes shared by every storage.
#[derive(Debug, Clone, PartialEq)]
pub enum TabulatedFunctionArgs {
    Count {
        left_x: f64,
        right_x: f64,
        points_count: usize
    },
    Values {
        left_x: f64,
        right_x: f64,
        values: Vec<f64>
    },
    Points(Vec<FunctionPoint>)
}

/// Builds tabulated functions of one storage kind.
pub trait TabulatedFunctionFactory: Send + Sync {
    fn storage(&self) -> TabulatedStorage;

    fn create_tabulated_function(&self,
                                 left_x: f64,
                                 right_x: f64,
                                 points_count: usize) -> Result<Box<dyn TabulatedFunction>, FunctionError>;

    fn create_tabulated_function_from_values(&self,
                                             left_x: f64,
                                             right_x: f64,
                                             values: &[f64]) -> Result<Box<dyn TabulatedFunction>, FunctionError>;

    fn create_tabulated_function_from_points(&self,
                                             points: &[FunctionPoint]) -> Result<Box<dyn TabulatedFunction>, FunctionError>;

    fn create(&self, args: &TabulatedFunctionArgs) -> Result<Box<dyn TabulatedFunction>, FunctionError> {
        match args {
            TabulatedFunctionArgs::Count { left_x, right_x, points_count } => {
                self.create_tabulated_function(*left_x, *right_x, *points_count)
            },
            TabulatedFunctionArgs::Values { left_x, right_x, values } => {
                self.create_tabulated_function_from_values(*left_x, *right_x, values)
            },
            TabulatedFunctionArgs::Points(points) => {
                self.create_tabulated_function_from_points(points)
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Array
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayTabulatedFunctionFactory;

impl ArrayTabulatedFunctionFactory {
    pub fn new() -> ArrayTabulatedFunctionFactory {
        ArrayTabulatedFunctionFactory
    }
}

impl TabulatedFunctionFactory for ArrayTabulatedFunctionFactory {
    fn storage(&self) -> TabulatedStorage {
        TabulatedStorage::Array
    }

    fn create_tabulated_function(&self,
                                 left_x: f64,
                                 right_x: f64,
                                 points_count: usize) -> Result<Box<dyn TabulatedFunction>, FunctionError> {
        Ok(Box::new(ArrayTabulatedFunction::new(left_x, right_x, points_count)?))
    }

    fn create_tabulated_function_from_values(&self,
                                             left_x: f64,
                                             right_x: f64,
                                             values: &[f64]) -> Result<Box<dyn TabulatedFunction>, FunctionError> {
        Ok(Box::new(ArrayTabulatedFunction::from_values(left_x, right_x, values)?))
    }

    fn create_tabulated_function_from_points(&self,
                                             points: &[FunctionPoint]) -> Result<Box<dyn TabulatedFunction>, FunctionError> {
        Ok(Box::new(ArrayTabulatedFunction::from_points(points)?))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Linked
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedTabulatedFunctionFactory;

impl LinkedTabulatedFunctionFactory {
    pub fn new() -> LinkedTabulatedFunctionFactory {
        LinkedTabulatedFunctionFactory
    }
}

impl TabulatedFunctionFactory for LinkedTabulatedFunctionFactory {
    fn storage(&self) -> TabulatedStorage {
        TabulatedStorage::Linked
    }

    fn create_tabulated_function(&self,
                                 left_x: f64,
                                 right_x: f64,
                                 points_count: usize) -> Result<Box<dyn TabulatedFunction>, FunctionError> {
        Ok(Box::new(LinkedTabulatedFunction::new(left_x, right_x, points_count)?))
    }

    fn create_tabulated_function_from_values(&self,
                                             left_x: f64,
                                             right_x: f64,
                                             values: &[f64]) -> Result<Box<dyn TabulatedFunction>, FunctionError> {
        Ok(Box::new(LinkedTabulatedFunction::from_values(left_x, right_x, values)?))
    }

    fn create_tabulated_function_from_points(&self,
                                             points: &[FunctionPoint]) -> Result<Box<dyn TabulatedFunction>, FunctionError> {
        Ok(Box::new(LinkedTabulatedFunction::from_points(points)?))
    }
}

impl TabulatedStorage {
    pub fn factory(self) -> Arc<dyn TabulatedFunctionFactory> {
        match self {
            TabulatedStorage::Array => Arc::new(ArrayTabulatedFunctionFactory::new()),
            TabulatedStorage::Linked => Arc::new(LinkedTabulatedFunctionFactory::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factories_build_their_storage() {
        for storage in [TabulatedStorage::Array, TabulatedStorage::Linked] {
            let factory = storage.factory();
            assert_eq!(factory.storage(), storage);
            let f = factory.create_tabulated_function(0.0, 1.0, 3).unwrap();
            assert_eq!(f.storage(), storage);
            assert_eq!(f.points_count(), 3);
        }
    }

    #[test]
    fn test_create_dispatches_on_args() {
        let factory = LinkedTabulatedFunctionFactory::new();
        let points = vec![FunctionPoint::new(0.0, 1.0), FunctionPoint::new(2.0, 3.0)];
        let from_points = factory.create(&TabulatedFunctionArgs::Points(points)).unwrap();
        let from_values = factory
            .create(&TabulatedFunctionArgs::Values { left_x: 0.0, right_x: 2.0, values: vec![1.0, 3.0] })
            .unwrap();
        assert!(*from_points == *from_values);
        let bad = factory.create(&TabulatedFunctionArgs::Count { left_x: 0.0, right_x: 2.0, points_count: 1 });
        assert!(matches!(bad, Err(FunctionError::InvalidConstructionArgument(_))));
    }
}
