use super::functionerror::FunctionError;

/// A real function defined on `[left_domain_border, right_domain_border]`.
///
/// Evaluating outside the domain is not an error: implementations return
/// `f64::NAN` and callers are expected to check for it.
pub trait Function: Send + Sync {
    fn left_domain_border(&self) -> f64;

    fn right_domain_border(&self) -> f64;

    fn value(&self, x: f64) -> f64;

    fn in_domain(&self, x: f64) -> bool {
        x >= self.left_domain_border() && x <= self.right_domain_border()
    }
}

impl<F> Function for std::sync::Arc<F> where
    F: Function + ?Sized {
    fn left_domain_border(&self) -> f64 {
        (**self).left_domain_border()
    }

    fn right_domain_border(&self) -> f64 {
        (**self).right_domain_border()
    }

    fn value(&self, x: f64) -> f64 {
        (**self).value(x)
    }
}

impl<F> Function for Box<F> where
    F: Function + ?Sized {
    fn left_domain_border(&self) -> f64 {
        (**self).left_domain_border()
    }

    fn right_domain_border(&self) -> f64 {
        (**self).right_domain_border()
    }

    fn value(&self, x: f64) -> f64 {
        (**self).value(x)
    }
}

/// Fails with [`FunctionError::DomainViolation`] unless
/// `[left, right]` lies inside the domain of `function`.
pub fn check_interval_in_domain(function: &dyn Function,
                                left: f64,
                                right: f64) -> Result<(), FunctionError> {
    let domain_left = function.left_domain_border();
    let domain_right = function.right_domain_border();
    if left < domain_left || right > domain_right {
        Err(FunctionError::DomainViolation { left, right, domain_left, domain_right })
    } else {
        Ok(())
    }
}
