use std::sync::Arc;

use crate::math::function::function::Function;
use crate::math::function::meta::composition::Composition;
use crate::math::function::meta::mult::Mult;
use crate::math::function::meta::power::Power;
use crate::math::function::meta::scale::Scale;
use crate::math::function::meta::shift::Shift;
use crate::math::function::meta::sum::Sum;

// ─────────────────────────────────────────────────────────────────────────────
// Combinator constructors
// ─────────────────────────────────────────────────────────────────────────────

pub fn shift(function: Arc<dyn Function>, shift_x: f64, shift_y: f64) -> Arc<dyn Function> {
    Arc::new(Shift::new(function, shift_x, shift_y))
}

pub fn scale(function: Arc<dyn Function>, scale_x: f64, scale_y: f64) -> Arc<dyn Function> {
    Arc::new(Scale::new(function, scale_x, scale_y))
}

pub fn power(function: Arc<dyn Function>, power: f64) -> Arc<dyn Function> {
    Arc::new(Power::new(function, power))
}

pub fn sum(first: Arc<dyn Function>, second: Arc<dyn Function>) -> Arc<dyn Function> {
    Arc::new(Sum::new(first, second))
}

pub fn mult(first: Arc<dyn Function>, second: Arc<dyn Function>) -> Arc<dyn Function> {
    Arc::new(Mult::new(first, second))
}

/// `outer(inner(x))`.
pub fn composition(inner: Arc<dyn Function>, outer: Arc<dyn Function>) -> Arc<dyn Function> {
    Arc::new(Composition::new(inner, outer))
}
