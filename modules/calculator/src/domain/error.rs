use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An operand violates the operation's domain rule.
    #[error("{message}")]
    InvalidArgument { message: String },
}

impl DomainError {
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn division_by_zero() -> Self {
        Self::invalid_argument("Division by zero is not allowed")
    }

    #[must_use]
    pub fn negative_square_root() -> Self {
        Self::invalid_argument("Square root of a negative number is not allowed")
    }

    #[must_use]
    pub fn non_positive_logarithm() -> Self {
        Self::invalid_argument("Argument must be greater than 0")
    }

    #[must_use]
    pub fn negative_factorial() -> Self {
        Self::invalid_argument("Argument must be greater than or equal to 0")
    }

    #[must_use]
    pub fn factorial_overflow(n: i64) -> Self {
        Self::invalid_argument(format!("Factorial of {n} overflows a 64-bit integer"))
    }
}
