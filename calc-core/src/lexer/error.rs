use thiserror::Error;

use crate::utils::prelude::SrcSpan;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LexicalErrorType {
    #[error("unrecognized character `{tok}`")]
    UnrecognizedToken { tok: char },
    #[error("integer literal does not fit in 64 bits")]
    IntegerOverflow,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{error} at {location}")]
pub struct LexicalError {
    pub error: LexicalErrorType,
    pub location: SrcSpan
}

impl LexicalError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match self.error {
            LexicalErrorType::UnrecognizedToken { tok } => {
                ("I don't know what to do with this character", vec![
                    format!("`{tok}` is not part of the language."),
                    "Expected an integer, a variable name or one of `+ - * / = ( )`.".to_string(),
                ])
            },
            LexicalErrorType::IntegerOverflow => {
                ("This number is too large", vec![
                    format!("Integers range from {} to {}.", i64::MIN, i64::MAX),
                ])
            }
        }
    }
}
