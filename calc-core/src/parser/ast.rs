use std::fmt::Display;

use crate::{
    environment::prelude::Value,
    lexer::prelude::Token,
    utils::prelude::SrcSpan
};

pub trait Postfix {
    fn postfix(&self) -> String;
}

// statement -> <assignment> | <expression>
// Only a statement can be an assignment, so `Assignment` never appears
// below the root of a tree.
#[derive(Debug, Clone, PartialEq)]
pub enum SyntaxTree {
    Literal {
        value: Value,
        location: SrcSpan
    },
    Variable(Identifier),
    BinaryOp(BinaryOp),
    Assignment(Assignment),
}

impl Display for SyntaxTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Variable(ident) => write!(f, "{ident}"),
            Self::BinaryOp(binary) => write!(f, "{binary}"),
            Self::Assignment(assignment) => write!(f, "{assignment}"),
        }
    }
}

impl Postfix for SyntaxTree {
    fn postfix(&self) -> String {
        match self {
            Self::Literal { value, .. } => format!("{value}"),
            Self::Variable(ident) => format!("{ident}"),
            Self::BinaryOp(binary) => binary.postfix(),
            Self::Assignment(assignment) => assignment.postfix(),
        }
    }
}

impl SyntaxTree {
    pub fn location(&self) -> SrcSpan {
        match self {
            Self::Literal { location, .. } => *location,
            Self::Variable(ident) => ident.location,
            Self::BinaryOp(binary) => binary.location,
            Self::Assignment(assignment) => assignment.location,
        }
    }
}

// identifier -> (<letter> | _) { <letter> | <digit> | _ }
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub value: String,
    pub location: SrcSpan
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<(u32, String, u32)> for Identifier {
    fn from(value: (u32, String, u32)) -> Self {
        Identifier {
            value: value.1,
            location: SrcSpan { start: value.0, end: value.2 }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_token(token: &Token) -> Option<Self> {
        Some(match token {
            Token::Plus => Self::Add,
            Token::Minus => Self::Subtract,
            Token::Asterisk => Self::Multiply,
            Token::Slash => Self::Divide,
            _ => return None
        })
    }

    pub fn as_literal(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_literal())
    }
}

// binary -> <expression> <operator> <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub operator: Operator,
    pub left: Box<SyntaxTree>,
    pub right: Box<SyntaxTree>,
    pub location: SrcSpan
}

impl BinaryOp {
    pub fn new(left: SyntaxTree, operator: Operator, right: SyntaxTree) -> Self {
        let location = left.location().to(right.location());

        Self {
            operator,
            left: Box::new(left),
            right: Box::new(right),
            location
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

impl Postfix for BinaryOp {
    fn postfix(&self) -> String {
        format!("{} {} {}", self.left.postfix(), self.right.postfix(), self.operator)
    }
}

// assignment -> <identifier> = <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub identifier: Identifier,
    pub value: Box<SyntaxTree>,
    pub location: SrcSpan
}

impl Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.identifier, self.value)
    }
}

impl Postfix for Assignment {
    fn postfix(&self) -> String {
        format!("{} {} =", self.identifier, self.value.postfix())
    }
}
