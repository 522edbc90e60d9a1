use thiserror::Error;

use crate::{parser::prelude::Operator, utils::prelude::SrcSpan};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("variable `{name}` is not defined")]
    UndefinedVariable {
        name: String,
        location: SrcSpan
    },
    #[error("division by zero")]
    DivisionByZero {
        location: SrcSpan
    },
    #[error("integer overflow in `{operator}`")]
    Overflow {
        operator: Operator,
        location: SrcSpan
    },
}

impl EvalError {
    pub fn location(&self) -> SrcSpan {
        match self {
            Self::UndefinedVariable { location, .. }
            | Self::DivisionByZero { location }
            | Self::Overflow { location, .. } => *location
        }
    }

    pub fn details(&self) -> (&'static str, Vec<String>) {
        match self {
            Self::UndefinedVariable { name, .. } => (
                "This variable has no value",
                vec![format!("Assign it first, e.g. `{name} = 0`.")]
            ),
            Self::DivisionByZero { .. } => (
                "The divisor evaluates to zero",
                vec![]
            ),
            Self::Overflow { operator, .. } => (
                "The result does not fit in 64 bits",
                vec![format!(
                    "`{operator}` overflowed; values range from {} to {}.",
                    i64::MIN,
                    i64::MAX
                )]
            ),
        }
    }
}
