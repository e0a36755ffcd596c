use crate::math::function::function::Function;
use crate::math::function::functionerror::FunctionError;

/// Logarithm to a fixed base, defined on `[0, +inf)`.
///
/// The left border is inclusive only nominally: `value(0.0)` is `NaN`.
#[derive(Debug, Clone, Copy)]
pub struct Log {
    base: f64
}

impl Log {
    pub fn new(base: f64) -> Result<Log, FunctionError> {
        if !(base > 0.0) || base == 1.0 {
            return Err(FunctionError::InvalidConstructionArgument(
                format!("logarithm base must be positive and not 1, got {base:?}")
            ));
        }
        Ok(Log { base })
    }

    pub fn base(&self) -> f64 {
        self.base
    }
}

impl Function for Log {
    fn left_domain_border(&self) -> f64 {
        0.0
    }

    fn right_domain_border(&self) -> f64 {
        f64::INFINITY
    }

    fn value(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return f64::NAN;
        }
        x.ln() / self.base.ln()
    }
}
