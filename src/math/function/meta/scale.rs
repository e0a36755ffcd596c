use std::sync::Arc;

use crate::math::function::function::Function;

/// `f` stretched by `scale_x` along the abscissa and `scale_y` along the ordinate.
///
/// A negative `scale_x` mirrors the domain, so the borders are swapped to keep
/// `left <= right`.
pub struct Scale {
    function: Arc<dyn Function>,
    scale_x: f64,
    scale_y: f64
}

impl Scale {
    pub fn new(function: Arc<dyn Function>, scale_x: f64, scale_y: f64) -> Scale {
        Scale { function, scale_x, scale_y }
    }

    pub fn scale_x(&self) -> f64 {
        self.scale_x
    }

    pub fn scale_y(&self) -> f64 {
        self.scale_y
    }
}

impl Function for Scale {
    fn left_domain_border(&self) -> f64 {
        if self.scale_x >= 0.0 {
            self.function.left_domain_border() * self.scale_x
        } else {
            self.function.right_domain_border() * self.scale_x
        }
    }

    fn right_domain_border(&self) -> f64 {
        if self.scale_x >= 0.0 {
            self.function.right_domain_border() * self.scale_x
        } else {
            self.function.left_domain_border() * self.scale_x
        }
    }

    fn value(&self, x: f64) -> f64 {
        if !self.in_domain(x) {
            return f64::NAN;
        }
        self.function.value(x / self.scale_x) * self.scale_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::function::functionpoint::FunctionPoint;
    use crate::math::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
    use approx::assert_relative_eq;

    fn base() -> Arc<dyn Function> {
        let points = [FunctionPoint::new(1.0, 1.0), FunctionPoint::new(3.0, 5.0)];
        Arc::new(ArrayTabulatedFunction::from_points(&points).unwrap())
    }

    #[test]
    fn test_positive_scale() {
        let scaled = Scale::new(base(), 2.0, 3.0);
        assert_relative_eq!(scaled.left_domain_border(), 2.0);
        assert_relative_eq!(scaled.right_domain_border(), 6.0);
        // f(2) = 3
        assert_relative_eq!(scaled.value(4.0), 9.0);
        assert!(scaled.value(1.9).is_nan());
    }

    #[test]
    fn test_negative_scale_swaps_borders() {
        let scaled = Scale::new(base(), -2.0, 1.0);
        assert_relative_eq!(scaled.left_domain_border(), -6.0);
        assert_relative_eq!(scaled.right_domain_border(), -2.0);
        assert!(scaled.left_domain_border() <= scaled.right_domain_border());
        // x = -4 maps back to f(2) = 3
        assert_relative_eq!(scaled.value(-4.0), 3.0);
        assert_relative_eq!(scaled.value(-6.0), 5.0);
        assert_relative_eq!(scaled.value(-2.0), 1.0);
        assert!(scaled.value(4.0).is_nan());
        assert!(scaled.value(-6.5).is_nan());
    }

    #[test]
    fn test_negative_scale_of_domain_straddling_zero() {
        let points = [FunctionPoint::new(-1.0, 0.0), FunctionPoint::new(3.0, 4.0)];
        let f: Arc<dyn Function> = Arc::new(ArrayTabulatedFunction::from_points(&points).unwrap());
        let scaled = Scale::new(f, -0.5, 2.0);
        assert_relative_eq!(scaled.left_domain_border(), -1.5);
        assert_relative_eq!(scaled.right_domain_border(), 0.5);
        // x = 0.5 maps back to f(-1) = 0
        assert_relative_eq!(scaled.value(0.5), 0.0);
        // x = -1.5 maps back to f(3) = 4
        assert_relative_eq!(scaled.value(-1.5), 8.0);
    }
}
