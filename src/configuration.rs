use std::cell::{
    RefCell,
    RefMut
};
use std::fs::File;
use std::io::BufReader;

use serde::Deserialize;
use tracing::debug;

use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::math::tabulated::functiontypemanager::{
    FunctionType,
    FunctionTypeManager
};
use crate::math::tabulated::tabulatedfunction::TabulatedStorage;
use crate::math::tabulated::tabulatedfunctions::TabulatedFunctions;


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    default_storage: Option<TabulatedStorage>,
    #[serde(default)]
    function_types: Vec<serde_json::Value>
}

/// Session state: the construction context and the function type registry.
///
/// ```json
/// {
///     "default_storage": "Linked",
///     "function_types": [
///         { "name": "compact", "kind": "Tabulated", "storage": "Array" },
///         { "name": "log2", "kind": "Log", "base": 2.0 }
///     ]
/// }
/// ```
pub struct Configuration {
    tabulated_functions_cell: RefCell<TabulatedFunctions>,
    function_type_manager_cell: RefCell<Manager<FunctionType>>
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            tabulated_functions_cell: RefCell::new(TabulatedFunctions::new()),
            function_type_manager_cell: RefCell::new(FunctionTypeManager::new())
        }
    }

    pub fn tabulated_functions(&self) -> RefMut<'_, TabulatedFunctions> {
        self.tabulated_functions_cell.borrow_mut()
    }

    pub fn function_type_manager(&self) -> RefMut<'_, Manager<FunctionType>> {
        self.function_type_manager_cell.borrow_mut()
    }

    pub fn load_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
        if let Some(storage) = json_prop.default_storage {
            self.tabulated_functions().set_tabulated_function_factory(storage.factory());
        }
        let function_type_manager = self.function_type_manager();
        function_type_manager.insert_obj_from_json_vec(&json_prop.function_types, &())?;
        debug!(function_types = json_prop.function_types.len(), "configuration loaded");
        Ok(())
    }

    pub fn from_reader(&self, file_path: &str) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        self.load_json(json_value)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = Configuration::new();
        assert_eq!(config.tabulated_functions().storage(), TabulatedStorage::Array);
        let names = config.function_type_manager().names();
        for name in ["ArrayTabulatedFunction", "LinkedTabulatedFunction", "Exp", "Sin", "Cos", "Tan"] {
            assert!(names.iter().any(|n| n == name), "missing {name}");
        }
    }

    #[test]
    fn test_load_json() {
        let config = Configuration::new();
        config.load_json(json!({
            "default_storage": "Linked",
            "function_types": [{"name": "log10", "kind": "Log", "base": 10.0}]
        })).unwrap();
        assert_eq!(config.tabulated_functions().storage(), TabulatedStorage::Linked);
        assert!(config.function_type_manager().contains("log10"));
    }

    #[test]
    fn test_unknown_storage_is_rejected() {
        let config = Configuration::new();
        let result = config.load_json(json!({"default_storage": "Tree"}));
        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
        assert_eq!(config.tabulated_functions().storage(), TabulatedStorage::Array);
    }

    #[test]
    fn test_missing_file() {
        let config = Configuration::new();
        assert!(matches!(config.from_reader("/nonexistent/tabulated.json"), Err(ManagerError::IOError(_))));
    }
}
