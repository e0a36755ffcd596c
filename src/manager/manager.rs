use std::cell::{
    RefCell,
    RefMut
};
use std::collections::HashMap;

use tracing::debug;

use super::managererror::ManagerError;
use super::namedobject::NamedJsonObject;


pub trait IManager<V, S> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>>;

    fn insert_obj_from_json(&self,
                            json_value: serde_json::Value,
                            supports: &S) -> Result<(), ManagerError>;

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        let map = self.map();
        map.get(name)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    fn insert(&self, name: &str, value: V) -> Option<V> {
        debug!(name, "registering object");
        self.map().insert(name.to_owned(), value)
    }

    fn contains(&self, name: &str) -> bool {
        self.map().contains_key(name)
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map().keys().cloned().collect();
        names.sort();
        names
    }

    fn insert_obj_from_json_vec(&self,
                                json_vec: &[serde_json::Value],
                                supports: &S) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone(), supports)?;
        }
        Ok(())
    }

    fn from_json(&self,
                 json_value: serde_json::Value,
                 supports: &S) -> Result<(), ManagerError> {
        if json_value.is_array() {
            let json_array: Vec<serde_json::Value> = ManagerError::from_json_or_json_parse_error(json_value)?;
            self.insert_obj_from_json_vec(&json_array, supports)
        } else {
            self.insert_obj_from_json(json_value, supports)
        }
    }
}


pub struct Manager<V> {
    map_cell: RefCell<HashMap<String, V>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>
}


impl<V> Manager<V> where
    V: Clone {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>) -> Manager<V> {
        Manager { map_cell: RefCell::new(HashMap::new()), get_obj_from_json }
    }
}

impl<V> IManager<V, ()> for Manager<V> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>> {
        self.map_cell.borrow_mut()
    }

    fn insert_obj_from_json(&self,
                            json_value: serde_json::Value,
                            _supports: &()) -> Result<(), ManagerError> {
        let named_object: NamedJsonObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
        let v = (self.get_obj_from_json)(json_value)?;
        self.insert(named_object.name(), v);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse_number(json_value: serde_json::Value) -> Result<f64, ManagerError> {
        json_value
            .get("value")
            .and_then(serde_json::Value::as_f64)
            .ok_or_else(|| ManagerError::json_missing_field("value"))
    }

    #[test]
    fn test_insert_and_get() {
        let manager = Manager::new(parse_number);
        manager.from_json(json!([{"name": "a", "value": 1.5}, {"name": "b", "value": 2.5}]), &()).unwrap();
        assert_eq!(manager.get("a").unwrap(), 1.5);
        assert_eq!(manager.names(), vec!["a".to_owned(), "b".to_owned()]);
        assert!(matches!(manager.get("c"), Err(ManagerError::NameNotFoundError(name)) if name == "c"));
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let manager = Manager::new(parse_number);
        assert!(matches!(manager.from_json(json!({"value": 1.0}), &()), Err(ManagerError::JsonParseError(_))));
        assert!(matches!(manager.from_json(json!({"name": "x"}), &()), Err(ManagerError::JsonParseError(_))));
        assert!(!manager.contains("x"));
    }
}
