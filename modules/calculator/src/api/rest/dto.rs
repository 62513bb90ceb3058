//! REST DTOs for the calculator module
//!
//! Query-string operands. Responses are bare JSON numbers.

use serde::{Deserialize, Serialize};

/// Operands for `add`, `subtract`, `multiply`, `divide` and `power`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BinaryOperands {
    /// First operand
    pub a: f64,
    /// Second operand
    pub b: f64,
}

/// Operand for the single-argument real functions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UnaryOperand {
    pub a: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FactorialOperand {
    pub n: i64,
}
