use std::sync::Arc;

use serde::Deserialize;

use crate::manager::manager::{
    IManager,
    Manager
};
use crate::manager::managererror::ManagerError;
use crate::math::function::basic::exp::Exp;
use crate::math::function::basic::log::Log;
use crate::math::function::basic::trigonometricfunction::{
    Cos,
    Sin,
    Tan
};
use crate::math::function::function::Function;
use crate::math::function::functionerror::FunctionError;
use crate::math::tabulated::tabulatedfunction::{
    TabulatedFunction,
    TabulatedStorage
};
use crate::math::tabulated::tabulatedfunctionfactory::{
    TabulatedFunctionArgs,
    TabulatedFunctionFactory
};
use crate::math::tabulated::tabulatedfunctions::sample;

/// A named entry of the function type registry.
///
/// Only `Tabulated` entries can be used for construction; `Analytic` entries
/// are shared, ready-made functions.
#[derive(Clone)]
pub enum FunctionType {
    Tabulated(Arc<dyn TabulatedFunctionFactory>),
    Analytic(Arc<dyn Function>)
}

#[derive(Deserialize)]
#[serde(tag = "kind")]
enum FunctionTypeJsonProp {
    Tabulated { storage: TabulatedStorage },
    Exp,
    Log { base: f64 },
    Sin,
    Cos,
    Tan
}

fn get_function_type_from_json(json_value: serde_json::Value) -> Result<FunctionType, ManagerError> {
    let json_prop: FunctionTypeJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
    let function_type = match json_prop {
        FunctionTypeJsonProp::Tabulated { storage } => FunctionType::Tabulated(storage.factory()),
        FunctionTypeJsonProp::Exp => FunctionType::Analytic(Arc::new(Exp::new())),
        FunctionTypeJsonProp::Log { base } => FunctionType::Analytic(Arc::new(Log::new(base)?)),
        FunctionTypeJsonProp::Sin => FunctionType::Analytic(Arc::new(Sin::new())),
        FunctionTypeJsonProp::Cos => FunctionType::Analytic(Arc::new(Cos::new())),
        FunctionTypeJsonProp::Tan => FunctionType::Analytic(Arc::new(Tan::new()))
    };
    Ok(function_type)
}


pub struct FunctionTypeManager;


impl FunctionTypeManager {
    pub const ARRAY: &'static str = "ArrayTabulatedFunction";
    pub const LINKED: &'static str = "LinkedTabulatedFunction";

    /// A registry holding both storages and the parameterless basic functions.
    pub fn new() -> Manager<FunctionType> {
        let manager = Manager::new(get_function_type_from_json);
        manager.insert(Self::ARRAY, FunctionType::Tabulated(TabulatedStorage::Array.factory()));
        manager.insert(Self::LINKED, FunctionType::Tabulated(TabulatedStorage::Linked.factory()));
        manager.insert("Exp", FunctionType::Analytic(Arc::new(Exp::new())));
        manager.insert("Sin", FunctionType::Analytic(Arc::new(Sin::new())));
        manager.insert("Cos", FunctionType::Analytic(Arc::new(Cos::new())));
        manager.insert("Tan", FunctionType::Analytic(Arc::new(Tan::new())));
        manager
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Construction by registered name
// ─────────────────────────────────────────────────────────────────────────────

fn tabulated_factory(manager: &Manager<FunctionType>,
                     name: &str) -> Result<Arc<dyn TabulatedFunctionFactory>, FunctionError> {
    match manager.get(name) {
        Ok(FunctionType::Tabulated(factory)) => Ok(factory),
        Ok(FunctionType::Analytic(_)) => Err(FunctionError::NotATabulatedFunction(name.to_owned())),
        Err(error) => Err(FunctionError::construction_failure(name, error))
    }
}

/// Builds a tabulated function with the factory registered under `name`.
///
/// Unknown names and constructor errors are both reported as
/// [`FunctionError::ConstructionFailure`] with the underlying cause attached.
pub fn create_tabulated_function_of_type(manager: &Manager<FunctionType>,
                                         name: &str,
                                         args: &TabulatedFunctionArgs) -> Result<Box<dyn TabulatedFunction>, FunctionError> {
    let factory = tabulated_factory(manager, name)?;
    factory
        .create(args)
        .map_err(|error| FunctionError::construction_failure(name, error))
}

/// Samples `function` like [`TabulatedFunctions::tabulate`](crate::math::tabulated::tabulatedfunctions::TabulatedFunctions::tabulate)
/// and stores the result with the factory registered under `name`.
pub fn tabulate_of_type(manager: &Manager<FunctionType>,
                        name: &str,
                        function: &dyn Function,
                        left_x: f64,
                        right_x: f64,
                        points_count: usize) -> Result<Box<dyn TabulatedFunction>, FunctionError> {
    let values = sample(function, left_x, right_x, points_count)?;
    let args = TabulatedFunctionArgs::Values { left_x, right_x, values };
    create_tabulated_function_of_type(manager, name, &args)
}

pub fn analytic_function(manager: &Manager<FunctionType>, name: &str) -> Result<Arc<dyn Function>, ManagerError> {
    match manager.get(name)? {
        FunctionType::Analytic(function) => Ok(function),
        FunctionType::Tabulated(_) => Err(ManagerError::map_elem_not_found(name))
    }
}
