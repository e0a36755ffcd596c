use thiserror::Error;

/// Structural failures of function construction and mutation.
///
/// Values outside a domain are never reported here; evaluation signals them
/// with `NaN`.
#[derive(Debug, Error)]
pub enum FunctionError {
    #[error("invalid construction argument: {0}")]
    InvalidConstructionArgument(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("point index {index} out of range for {count} points")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("order violation: {0}")]
    OrderViolation(String),

    #[error("a point with x = {0:?} already exists")]
    DuplicateX(f64),

    #[error("invalid state: {0}")]
    StateError(String),

    #[error("interval [{left:?}, {right:?}] exceeds the domain [{domain_left:?}, {domain_right:?}]")]
    DomainViolation {
        left: f64,
        right: f64,
        domain_left: f64,
        domain_right: f64
    },

    #[error("type '{0}' is not a tabulated function")]
    NotATabulatedFunction(String),

    #[error("failed to construct '{name}'")]
    ConstructionFailure {
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>
    }
}

impl FunctionError {
    pub fn construction_failure<E>(name: &str, source: E) -> FunctionError where
        E: std::error::Error + Send + Sync + 'static {
        FunctionError::ConstructionFailure {
            name: name.to_owned(),
            source: Box::new(source)
        }
    }

    pub fn check_index(index: usize, count: usize) -> Result<(), FunctionError> {
        if index < count {
            Ok(())
        } else {
            Err(FunctionError::IndexOutOfRange { index, count })
        }
    }
}
