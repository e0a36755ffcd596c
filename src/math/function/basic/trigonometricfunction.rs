use crate::math::function::function::Function;

// ─────────────────────────────────────────────────────────────────────────────
// Trigonometric functions, all defined on the whole real line
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! trigonometric_function {
    ($name:ident, $method:ident) => {
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl $name {
            pub fn new() -> $name {
                $name
            }
        }

        impl Function for $name {
            fn left_domain_border(&self) -> f64 {
                f64::NEG_INFINITY
            }

            fn right_domain_border(&self) -> f64 {
                f64::INFINITY
            }

            fn value(&self, x: f64) -> f64 {
                x.$method()
            }
        }
    };
}

trigonometric_function!(Sin, sin);
trigonometric_function!(Cos, cos);
trigonometric_function!(Tan, tan);
