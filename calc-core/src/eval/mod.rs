pub mod error;

pub mod prelude {
    pub use super::{
        error::*,
        eval
    };
}


use tracing::debug;

use crate::{
    parser::prelude::{Assignment, BinaryOp, Identifier, Operator, SyntaxTree},
    environment::prelude::{Environment, Value},
};
use self::error::EvalError;

/// Evaluates one tree against `env`. Only an `Assignment` root writes to the
/// store, and only after its right-hand side evaluated successfully.
pub fn eval(tree: &SyntaxTree, env: &mut Environment) -> Result<Value, EvalError> {
    match tree {
        SyntaxTree::Literal { value, .. } => Ok(*value),
        SyntaxTree::Variable(ident) => eval_variable(ident, env),
        SyntaxTree::BinaryOp(binary) => eval_binary(binary, env),
        SyntaxTree::Assignment(assignment) => eval_assignment(assignment, env),
    }
}

fn eval_variable(ident: &Identifier, env: &Environment) -> Result<Value, EvalError> {
    env.get(&ident.value).ok_or_else(|| EvalError::UndefinedVariable {
        name: ident.value.clone(),
        location: ident.location,
    })
}

fn eval_assignment(assignment: &Assignment, env: &mut Environment) -> Result<Value, EvalError> {
    let value = eval(&assignment.value, env)?;

    debug!(name = %assignment.identifier, value, "assigned");
    env.set(assignment.identifier.value.clone(), value);

    Ok(value)
}

fn eval_binary(binary: &BinaryOp, env: &mut Environment) -> Result<Value, EvalError> {
    let left = eval(&binary.left, env)?;
    let right = eval(&binary.right, env)?;

    let overflow = || EvalError::Overflow {
        operator: binary.operator,
        location: binary.location,
    };

    match binary.operator {
        Operator::Add => left.checked_add(right).ok_or_else(overflow),
        Operator::Subtract => left.checked_sub(right).ok_or_else(overflow),
        Operator::Multiply => left.checked_mul(right).ok_or_else(overflow),
        Operator::Divide => {
            if right == 0 {
                return Err(EvalError::DivisionByZero {
                    location: binary.right.location(),
                });
            }

            // truncates toward zero
            left.checked_div(right).ok_or_else(overflow)
        }
    }
}
