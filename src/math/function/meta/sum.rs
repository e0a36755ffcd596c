use std::sync::Arc;

use crate::math::function::function::Function;

/// `f1(x) + f2(x)` on the intersection of both domains.
pub struct Sum {
    first: Arc<dyn Function>,
    second: Arc<dyn Function>
}

impl Sum {
    pub fn new(first: Arc<dyn Function>, second: Arc<dyn Function>) -> Sum {
        Sum { first, second }
    }

    pub fn first(&self) -> &Arc<dyn Function> {
        &self.first
    }

    pub fn second(&self) -> &Arc<dyn Function> {
        &self.second
    }
}

impl Function for Sum {
    fn left_domain_border(&self) -> f64 {
        self.first.left_domain_border().max(self.second.left_domain_border())
    }

    fn right_domain_border(&self) -> f64 {
        self.first.right_domain_border().min(self.second.right_domain_border())
    }

    fn value(&self, x: f64) -> f64 {
        if !self.in_domain(x) {
            return f64::NAN;
        }
        self.first.value(x) + self.second.value(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
    use approx::assert_relative_eq;

    #[test]
    fn test_sum_on_intersection() {
        let f1 = ArrayTabulatedFunction::from_values(0.0, 10.0, &[0.0, 10.0]).unwrap();
        let f2 = ArrayTabulatedFunction::from_values(5.0, 15.0, &[1.0, 1.0]).unwrap();
        let sum = Sum::new(Arc::new(f1), Arc::new(f2));
        assert_relative_eq!(sum.left_domain_border(), 5.0);
        assert_relative_eq!(sum.right_domain_border(), 10.0);
        assert_relative_eq!(sum.value(7.0), 8.0);
        assert!(sum.value(4.0).is_nan());
        assert!(sum.value(11.0).is_nan());
    }
}
