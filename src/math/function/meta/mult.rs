use std::sync::Arc;

use crate::math::function::function::Function;

/// `f1(x) * f2(x)` on the intersection of both domains.
pub struct Mult {
    first: Arc<dyn Function>,
    second: Arc<dyn Function>
}

impl Mult {
    pub fn new(first: Arc<dyn Function>, second: Arc<dyn Function>) -> Mult {
        Mult { first, second }
    }

    pub fn first(&self) -> &Arc<dyn Function> {
        &self.first
    }

    pub fn second(&self) -> &Arc<dyn Function> {
        &self.second
    }
}

impl Function for Mult {
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
        self.first.value(x) * self.second.value(x)
    }
}
