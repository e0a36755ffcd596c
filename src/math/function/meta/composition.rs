use std::sync::Arc;

use crate::math::function::function::Function;

/// `f2(f1(x))`, defined where `f1` is defined and `f1(x)` falls in the domain of `f2`.
pub struct Composition {
    inner: Arc<dyn Function>,
    outer: Arc<dyn Function>
}

impl Composition {
    pub fn new(inner: Arc<dyn Function>, outer: Arc<dyn Function>) -> Composition {
        Composition { inner, outer }
    }

    pub fn inner(&self) -> &Arc<dyn Function> {
        &self.inner
    }

    pub fn outer(&self) -> &Arc<dyn Function> {
        &self.outer
    }
}

impl Function for Composition {
    fn left_domain_border(&self) -> f64 {
        self.inner.left_domain_border()
    }

    fn right_domain_border(&self) -> f64 {
        self.inner.right_domain_border()
    }

    fn value(&self, x: f64) -> f64 {
        if !self.in_domain(x) {
            return f64::NAN;
        }
        let inner_value = self.inner.value(x);
        if !self.outer.in_domain(inner_value) {
            return f64::NAN;
        }
        self.outer.value(inner_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::function::basic::log::Log;
    use crate::math::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
    use approx::assert_relative_eq;

    #[test]
    fn test_composition() {
        let inner = ArrayTabulatedFunction::from_values(0.0, 10.0, &[0.0, 10.0]).unwrap();
        let outer = ArrayTabulatedFunction::from_values(0.0, 5.0, &[0.0, 50.0]).unwrap();
        let composed = Composition::new(Arc::new(inner), Arc::new(outer));
        assert_relative_eq!(composed.left_domain_border(), 0.0);
        assert_relative_eq!(composed.right_domain_border(), 10.0);
        assert_relative_eq!(composed.value(2.0), 20.0);
        // f1(7) = 7 lies outside [0, 5]
        assert!(composed.value(7.0).is_nan());
        assert!(composed.value(-1.0).is_nan());
    }

    #[test]
    fn test_composition_into_log() {
        let inner = ArrayTabulatedFunction::from_values(0.0, 2.0, &[1.0, 4.0]).unwrap();
        let composed = Composition::new(Arc::new(inner), Arc::new(Log::new(2.0).unwrap()));
        assert_relative_eq!(composed.value(2.0), 2.0, epsilon = 1e-12);
    }
}
