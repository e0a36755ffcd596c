use std::sync::Arc;

use crate::math::function::function::Function;

/// `f(x)^power` on the domain of `f`.
pub struct Power {
    function: Arc<dyn Function>,
    power: f64
}

impl Power {
    pub fn new(function: Arc<dyn Function>, power: f64) -> Power {
        Power { function, power }
    }

    pub fn power(&self) -> f64 {
        self.power
    }
}

impl Function for Power {
    fn left_domain_border(&self) -> f64 {
        self.function.left_domain_border()
    }

    fn right_domain_border(&self) -> f64 {
        self.function.right_domain_border()
    }

    fn value(&self, x: f64) -> f64 {
        if !self.in_domain(x) {
            return f64::NAN;
        }
        self.function.value(x).powf(self.power)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
    use approx::assert_relative_eq;

    #[test]
    fn test_power() {
        let base = ArrayTabulatedFunction::from_values(0.0, 4.0, &[0.0, 4.0]).unwrap();
        let squared = Power::new(Arc::new(base), 2.0);
        assert_relative_eq!(squared.value(3.0), 9.0);
        assert_relative_eq!(squared.left_domain_border(), 0.0);
        assert_relative_eq!(squared.right_domain_border(), 4.0);
        assert!(squared.value(-0.1).is_nan());
    }
}
