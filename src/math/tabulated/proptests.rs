//! Property-based tests for the tabulated function invariants.

use proptest::prelude::*;

use crate::math::function::function::Function;
use crate::math::function::functionpoint::FunctionPoint;
use crate::math::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
use crate::math::tabulated::linkedtabulatedfunction::LinkedTabulatedFunction;
use crate::math::tabulated::tabulatedfunction::TabulatedFunction;

#[derive(Debug, Clone)]
enum Mutation {
    Add(f64, f64),
    Delete(usize),
    Set(usize, f64, f64),
    SetX(usize, f64),
    SetY(usize, f64),
    Read(usize)
}

fn mutation() -> impl Strategy<Value = Mutation> {
    // a coarse grid of abscissas makes duplicate and out-of-order attempts likely
    let coord = prop_oneof![
        9 => (-40i32..40).prop_map(|i| i as f64 * 0.5),
        1 => Just(f64::NAN)
    ];
    let index = 0usize..12;
    prop_oneof![
        (coord.clone(), -10.0..10.0f64).prop_map(|(x, y)| Mutation::Add(x, y)),
        index.clone().prop_map(Mutation::Delete),
        (index.clone(), coord.clone(), -10.0..10.0f64).prop_map(|(i, x, y)| Mutation::Set(i, x, y)),
        (index.clone(), coord).prop_map(|(i, x)| Mutation::SetX(i, x)),
        (index.clone(), -10.0..10.0f64).prop_map(|(i, y)| Mutation::SetY(i, y)),
        index.prop_map(Mutation::Read)
    ]
}

fn apply(function: &mut dyn TabulatedFunction, mutation: &Mutation) -> bool {
    match *mutation {
        Mutation::Add(x, y) => function.add_point(FunctionPoint::new(x, y)).is_ok(),
        Mutation::Delete(i) => function.delete_point(i).is_ok(),
        Mutation::Set(i, x, y) => function.set_point(i, FunctionPoint::new(x, y)).is_ok(),
        Mutation::SetX(i, x) => function.set_point_x(i, x).is_ok(),
        Mutation::SetY(i, y) => function.set_point_y(i, y).is_ok(),
        Mutation::Read(i) => function.point(i).is_ok()
    }
}

fn assert_invariants(function: &dyn TabulatedFunction) -> Result<(), TestCaseError> {
    let points = function.to_vec();
    prop_assert!(points.len() >= 2);
    prop_assert_eq!(points.len(), function.points_count());
    for pair in points.windows(2) {
        prop_assert!(pair[0].x() < pair[1].x());
    }
    prop_assert_eq!(function.left_domain_border(), points[0].x());
    prop_assert_eq!(function.right_domain_border(), points[points.len() - 1].x());
    Ok(())
}

proptest! {
    #[test]
    fn mutations_preserve_invariants_and_storages_agree(
        count in 2usize..6,
        mutations in proptest::collection::vec(mutation(), 0..40)
    ) {
        let values: Vec<f64> = (0..count).map(|i| i as f64).collect();
        let mut array = ArrayTabulatedFunction::from_values(0.0, 5.0, &values).unwrap();
        let mut linked = LinkedTabulatedFunction::from_values(0.0, 5.0, &values).unwrap();

        for step in &mutations {
            let before = array.points_count();
            let array_ok = apply(&mut array, step);
            let linked_ok = apply(&mut linked, step);
            prop_assert_eq!(array_ok, linked_ok, "{:?}", step);
            if !array_ok {
                prop_assert_eq!(array.points_count(), before);
            }
            assert_invariants(&array)?;
            assert_invariants(&linked)?;
            prop_assert!(array == linked);
        }

        // random access through the cursor sees the same points as iteration
        for (i, point) in array.iter().enumerate().rev() {
            prop_assert_eq!(linked.point(i).unwrap(), point);
        }
    }

    #[test]
    fn value_hits_samples_and_interpolates(
        ys in proptest::collection::vec(-100.0..100.0f64, 2..10),
        t in 0.0..1.0f64
    ) {
        let right = (ys.len() - 1) as f64;
        let array = ArrayTabulatedFunction::from_values(0.0, right, &ys).unwrap();
        let linked = LinkedTabulatedFunction::from_values(0.0, right, &ys).unwrap();
        for (i, &y) in ys.iter().enumerate() {
            prop_assert_eq!(array.value(i as f64), y);
            prop_assert_eq!(linked.value(i as f64), y);
        }
        let segment = ((ys.len() - 1) as f64 * t).floor().min((ys.len() - 2) as f64) as usize;
        let x = segment as f64 + 0.5;
        let expected = ys[segment] + (ys[segment + 1] - ys[segment]) * 0.5;
        prop_assert!((array.value(x) - expected).abs() < 1e-9);
        prop_assert!((linked.value(x) - expected).abs() < 1e-9);
        prop_assert!(array.value(-0.5).is_nan());
        prop_assert!(linked.value(right + 0.5).is_nan());
    }
}
