use tracing::trace;

use crate::math::function::function::{
    check_interval_in_domain,
    Function
};
use crate::math::function::functionerror::FunctionError;

/// Definite integral of `function` over `[left, right]` by the composite
/// trapezoidal rule.
///
/// Sub-intervals have width `step`, except the last one which is clipped to
/// `right`. The interval must lie inside the domain of `function`.
pub fn integrate(function: &dyn Function,
                 left: f64,
                 right: f64,
                 step: f64) -> Result<f64, FunctionError> {
    if !(left < right) {
        return Err(FunctionError::InvalidArgument(
            format!("left border {left:?} must be less than right border {right:?}")
        ));
    }
    if !(step > 0.0) {
        return Err(FunctionError::InvalidArgument(format!("step must be positive, got {step:?}")));
    }
    check_interval_in_domain(function, left, right)?;

    let segments = ((right - left) / step).ceil();
    if !segments.is_finite() || segments > u32::MAX as f64 {
        return Err(FunctionError::InvalidArgument(
            format!("step {step:?} is too small for [{left:?}, {right:?}]")
        ));
    }
    let segments = segments as u64;
    trace!(left, right, step, segments, "trapezoidal integration");

    let mut integral = 0.0;
    let mut x1 = left;
    let mut y1 = function.value(x1);
    for i in 1..=segments {
        let x2 = if i == segments { right } else { (left + i as f64 * step).min(right) };
        let y2 = function.value(x2);
        integral += (y1 + y2) * (x2 - x1) / 2.0;
        x1 = x2;
        y1 = y2;
    }
    Ok(integral)
}
