use thiserror::Error;

use crate::{lexer::prelude::Token, utils::prelude::SrcSpan};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseErrorType {
    #[error("found {}, expected {}", .token.describe(), .expected.join(" or "))]
    UnexpectedToken {
        token: Token,
        expected: Vec<String>,
    },
    #[error("unexpected end of input, expected {}", .expected.join(" or "))]
    UnexpectedEof {
        expected: Vec<String>,
    },
    #[error("parentheses nested deeper than {max_depth} levels")]
    NestingTooDeep {
        max_depth: usize,
    },
    #[error("more than {max_operators} operators in one line")]
    TooManyOperators {
        max_operators: usize,
    },
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("{error} at {span}")]
pub struct ParseError {
    pub error: ParseErrorType,
    pub span: SrcSpan
}

impl ParseError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match &self.error {
            ParseErrorType::UnexpectedToken { token, expected } => {
                let found = token.describe();

                let messages = std::iter::once(format!("Found {found}, expected one of: "))
                    .chain(expected.iter().map(|s| format!("- {s}")))
                    .collect();

                ("Not expected this", messages)
            },
            ParseErrorType::UnexpectedEof { expected } => {
                let messages = std::iter::once("Expected one of: ".to_string())
                    .chain(expected.iter().map(|s| format!("- {s}")))
                    .collect();

                ("Unexpected end of input", messages)
            },
            ParseErrorType::NestingTooDeep { max_depth } => (
                "Too many nested parentheses",
                vec![format!("At most {max_depth} levels of parentheses are allowed.")]
            ),
            ParseErrorType::TooManyOperators { max_operators } => (
                "One operator too many",
                vec![
                    format!("A line may contain at most {max_operators} operators."),
                    "Split the calculation over several assignments.".to_string(),
                ]
            ),
        }
    }
}
