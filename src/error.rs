use thiserror::Error;

/// Top-level error type for geoprim.
///
/// Every variant describes an invalid argument handed to a constructor,
/// setter or operation. Nothing is built when one of these is returned.
#[derive(Debug, Error)]
pub enum GeoprimError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

impl GeoprimError {
    /// Returns `true` if the error was caused by an invalid argument.
    ///
    /// All current variants are argument errors; this exists so callers can
    /// match on the condition without naming individual variants.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Self::Geometry(GeometryError::NonFinite { .. } | GeometryError::Negative { .. })
            | Self::Operation(OperationError::CapacityExceeded { .. }) => true,
        }
    }
}

/// Errors raised while constructing or mutating a geometric value.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("{parameter} must be finite, got {value}")]
    NonFinite { parameter: &'static str, value: f64 },

    #[error("{parameter} cannot be negative, got {value}")]
    Negative { parameter: &'static str, value: f64 },
}

/// Errors related to operations over collections of geometry.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("path has {count} points, capacity is {max}")]
    CapacityExceeded { count: usize, max: usize },
}

/// Convenience type alias for results using [`GeoprimError`].
pub type Result<T> = std::result::Result<T, GeoprimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_parameter() {
        let err: GeoprimError = GeometryError::Negative {
            parameter: "radius",
            value: -1.5,
        }
        .into();
        assert_eq!(err.to_string(), "radius cannot be negative, got -1.5");
    }

    #[test]
    fn every_variant_is_invalid_argument() {
        let errors: [GeoprimError; 3] = [
            GeometryError::NonFinite {
                parameter: "x",
                value: f64::NAN,
            }
            .into(),
            GeometryError::Negative {
                parameter: "width",
                value: -1.0,
            }
            .into(),
            OperationError::CapacityExceeded { count: 3, max: 2 }.into(),
        ];
        assert!(errors.iter().all(GeoprimError::is_invalid_argument));
    }
}
