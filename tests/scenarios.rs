use std::sync::Arc;

use approx::assert_relative_eq;
use serde_json::json;

use tabfun::configuration::Configuration;
use tabfun::math::function::function::Function;
use tabfun::math::function::functionerror::FunctionError;
use tabfun::math::function::functionpoint::FunctionPoint;
use tabfun::math::function::functions;
use tabfun::math::integration::trapezoid::integrate;
use tabfun::math::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
use tabfun::math::tabulated::functiontypemanager::{
    create_tabulated_function_of_type,
    tabulate_of_type
};
use tabfun::math::tabulated::linkedtabulatedfunction::LinkedTabulatedFunction;
use tabfun::math::tabulated::tabulatedfunction::{
    TabulatedFunction,
    TabulatedStorage
};
use tabfun::math::tabulated::tabulatedfunctionfactory::TabulatedFunctionArgs;
use tabfun::math::tabulated::tabulatedfunctions::TabulatedFunctions;

fn parabola_points() -> Vec<FunctionPoint> {
    vec![
        FunctionPoint::new(0.0, 0.0),
        FunctionPoint::new(5.0, 25.0),
        FunctionPoint::new(10.0, 100.0)
    ]
}

fn both_storages(points: &[FunctionPoint]) -> Vec<Box<dyn TabulatedFunction>> {
    [TabulatedStorage::Array, TabulatedStorage::Linked]
        .into_iter()
        .map(|storage| storage.factory().create_tabulated_function_from_points(points).unwrap())
        .collect()
}

#[test]
fn interpolates_between_samples() {
    for function in both_storages(&parabola_points()) {
        assert_relative_eq!(function.value(2.5), 12.5);
    }
}

#[test]
fn integrates_straight_line_exactly() {
    let points = [FunctionPoint::new(0.0, 0.0), FunctionPoint::new(10.0, 10.0)];
    for function in both_storages(&points) {
        assert_eq!(integrate(&function, 0.0, 10.0, 5.0).unwrap(), 50.0);
    }
}

#[test]
fn duplicate_x_is_rejected() {
    for mut function in both_storages(&parabola_points()) {
        let result = function.add_point(FunctionPoint::new(5.0 + 5e-11, 1.0));
        assert!(matches!(result, Err(FunctionError::DuplicateX(_))));
        assert_eq!(function.points_count(), 3);
    }
}

#[test]
fn two_points_cannot_shrink() {
    let points = [FunctionPoint::new(0.0, 0.0), FunctionPoint::new(1.0, 1.0)];
    for mut function in both_storages(&points) {
        assert!(matches!(function.delete_point(0), Err(FunctionError::StateError(_))));
        assert_eq!(function.points_count(), 2);
    }
}

#[test]
fn analytic_type_is_not_tabulated() {
    let config = Configuration::new();
    let manager = config.function_type_manager();
    let args = TabulatedFunctionArgs::Count { left_x: 0.0, right_x: 1.0, points_count: 2 };
    let result = create_tabulated_function_of_type(&manager, "Exp", &args);
    assert!(matches!(result, Err(FunctionError::NotATabulatedFunction(_))));
}

#[test]
fn storages_compare_equal_and_clones_are_independent() {
    let array = ArrayTabulatedFunction::from_points(&parabola_points()).unwrap();
    let linked = LinkedTabulatedFunction::from_points(&parabola_points()).unwrap();
    assert!(array == linked);
    assert!(linked == array);

    let boxed: Box<dyn TabulatedFunction> = Box::new(linked);
    let mut copy = boxed.clone();
    assert!(*copy == *boxed);
    copy.set_point_y(0, -1.0).unwrap();
    assert!(*copy != *boxed);
    assert_relative_eq!(boxed.point_y(0).unwrap(), 0.0);
}

#[test]
fn combinators_are_nan_outside_their_domain() {
    let base: Arc<dyn Function> = Arc::new(ArrayTabulatedFunction::from_points(&parabola_points()).unwrap());
    let other: Arc<dyn Function> = Arc::new(LinkedTabulatedFunction::from_values(5.0, 20.0, &[1.0, 1.0]).unwrap());
    let trees = [
        functions::shift(base.clone(), 1.0, 1.0),
        functions::scale(base.clone(), -1.0, 2.0),
        functions::power(base.clone(), 0.5),
        functions::sum(base.clone(), other.clone()),
        functions::mult(base.clone(), other.clone()),
        functions::composition(base.clone(), other)
    ];
    for tree in &trees {
        let left = tree.left_domain_border();
        let right = tree.right_domain_border();
        assert!(left <= right);
        assert!(tree.value(left - 1.0).is_nan());
        assert!(tree.value(right + 1.0).is_nan());
    }
}

#[test]
fn configured_session_tabulates_and_integrates() {
    let config = Configuration::new();
    config.load_json(json!({
        "default_storage": "Linked",
        "function_types": [{"name": "log2", "kind": "Log", "base": 2.0}]
    })).unwrap();

    let manager = config.function_type_manager();
    let log2 = tabfun::math::tabulated::functiontypemanager::analytic_function(&manager, "log2").unwrap();
    let tabulated = config.tabulated_functions().tabulate(log2.as_ref(), 1.0, 8.0, 50).unwrap();
    assert_eq!(tabulated.storage(), TabulatedStorage::Linked);
    let array = tabulate_of_type(&manager, "ArrayTabulatedFunction", log2.as_ref(), 1.0, 8.0, 50).unwrap();
    assert!(*tabulated == *array);

    // integral of log2(x) over [1, 8] is (8 ln 8 - 7) / ln 2
    let exact = (8.0 * 8.0_f64.ln() - 7.0) / 2.0_f64.ln();
    assert_relative_eq!(integrate(&tabulated, 1.0, 8.0, 0.01).unwrap(), exact, epsilon = 1e-2);
}

#[test]
fn context_without_configuration() {
    let mut context = TabulatedFunctions::new();
    context.set_tabulated_function_factory(TabulatedStorage::Linked.factory());
    let function = context.create_tabulated_function(0.0, 1.0, 4).unwrap();
    assert_eq!(function.storage(), TabulatedStorage::Linked);
    assert_eq!(function.points().count(), 4);
}
