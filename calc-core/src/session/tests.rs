use crate::{
    eval::prelude::EvalError,
    lexer::prelude::LexicalErrorType,
    parser::prelude::ParseErrorType,
    utils::prelude::Error
};

use super::prelude::{new_session, Session, SessionConfig, DEFAULT_MAX_DEPTH, DEFAULT_MAX_OPERATORS};

#[test]
fn test_round_trip() -> Result<(), Error> {
    let mut session = new_session();

    assert_eq!(session.evaluate("x = 10")?, 10);
    assert_eq!(session.evaluate("x")?, 10);

    Ok(())
}

#[test]
fn test_last_write_wins() -> Result<(), Error> {
    let mut session = Session::new();

    session.evaluate("x = 1 + 1")?;
    session.evaluate("x = 7 * 3")?;

    assert_eq!(session.evaluate("x")?, 21);
    assert_eq!(session.get("x"), Some(21));

    Ok(())
}

#[test]
fn test_precedence_and_associativity() -> Result<(), Error> {
    let mut session = Session::new();

    assert_eq!(session.evaluate("8 - 3 - 2")?, 3);
    assert_eq!(session.evaluate("2 + 3 * 4")?, 14);
    assert_eq!(session.evaluate("(2 + 3) * 4")?, 20);

    Ok(())
}

#[test]
fn test_pure_expressions_are_idempotent() -> Result<(), Error> {
    let mut session = Session::new();
    session.evaluate("a = 6")?;
    session.evaluate("b = 4")?;

    let before = session.environment().clone();
    let first = session.evaluate("(a + b) * a / b - 1")?;
    let second = session.evaluate("(a + b) * a / b - 1")?;

    assert_eq!(first, second);
    assert_eq!(first, 14);
    assert_eq!(session.environment(), &before);

    Ok(())
}

#[test]
fn test_division_by_zero_keeps_store() -> Result<(), Error> {
    let mut session = Session::new();
    session.evaluate("x = 3")?;

    let err = session.evaluate("5 / 0").unwrap_err();
    assert!(matches!(err, Error::Eval { error: EvalError::DivisionByZero { .. }, .. }));

    let err = session.evaluate("x = 5 / 0").unwrap_err();
    assert!(matches!(err, Error::Eval { error: EvalError::DivisionByZero { .. }, .. }));

    assert_eq!(session.get("x"), Some(3));
    assert_eq!(session.environment().len(), 1);

    Ok(())
}

#[test]
fn test_undefined_variable_on_fresh_session() {
    let mut session = Session::new();

    match session.evaluate("y + 1") {
        Err(Error::Eval { error: EvalError::UndefinedVariable { name, .. }, src }) => {
            assert_eq!(name, "y");
            assert_eq!(src, "y + 1");
        },
        other => panic!("expected an undefined variable error, got {other:?}")
    }

    assert!(session.environment().is_empty());
}

#[test]
fn test_malformed_input() {
    let mut session = Session::new();

    assert!(matches!(session.evaluate("2 +"), Err(Error::Parse { .. })));
    assert!(matches!(
        session.evaluate("2 @ 3"),
        Err(Error::Lex { error, .. }) if error.error == LexicalErrorType::UnrecognizedToken { tok: '@' }
    ));
}

#[test]
fn test_lex_error_wins_over_parse_error() {
    let mut session = Session::new();

    // `+ +` alone would be a syntax error, but lexing fails first
    assert!(matches!(session.evaluate("+ + #"), Err(Error::Lex { .. })));
}

#[test]
fn test_failed_lines_do_not_mutate() -> Result<(), Error> {
    let mut session = Session::new();
    session.evaluate("x = 1")?;

    for line in ["x = 2 +", "x = 2 @", "x = (2", "x = y", "x = 1 + (x = 2)"] {
        assert!(session.evaluate(line).is_err(), "{line:?} should fail");
    }

    assert_eq!(session.get("x"), Some(1));
    assert_eq!(session.environment().len(), 1);

    // the session keeps working after errors
    assert_eq!(session.evaluate("x = x + 1")?, 2);

    Ok(())
}

#[test]
fn test_configured_nesting_limit() -> Result<(), Error> {
    let mut session = Session::with_config(SessionConfig::default().with_max_depth(2));

    assert_eq!(session.config().max_depth, 2);
    assert_eq!(session.evaluate("((1 + 1))")?, 2);

    match session.evaluate("(((1)))") {
        Err(Error::Parse { error, .. }) => {
            assert_eq!(error.error, ParseErrorType::NestingTooDeep { max_depth: 2 });
        },
        other => panic!("expected a nesting error, got {other:?}")
    }

    assert_eq!(Session::new().config().max_depth, DEFAULT_MAX_DEPTH);

    Ok(())
}

#[test]
fn test_long_flat_chain_is_rejected() -> Result<(), Error> {
    let mut session = Session::new();
    session.evaluate("x = 5")?;

    let line = format!("x = {}", vec!["1"; 100_000].join(" + "));

    match session.evaluate(&line) {
        Err(Error::Parse { error, .. }) => {
            assert_eq!(error.error, ParseErrorType::TooManyOperators { max_operators: DEFAULT_MAX_OPERATORS });
        },
        other => panic!("expected an operator limit error, got {other:?}")
    }
    assert_eq!(session.get("x"), Some(5));

    let at_limit = vec!["1"; DEFAULT_MAX_OPERATORS + 1].join(" + ");
    assert_eq!(session.evaluate(&at_limit)?, DEFAULT_MAX_OPERATORS as i64 + 1);

    Ok(())
}

#[test]
fn test_configured_operator_limit() -> Result<(), Error> {
    let mut session = Session::with_config(SessionConfig::default().with_max_operators(3));

    assert_eq!(session.config().max_operators, 3);
    assert_eq!(session.evaluate("(1 + 2) * (3 - 1)")?, 6);
    assert!(matches!(
        session.evaluate("1 + 1 + 1 + 1"),
        Err(Error::Parse { error, .. }) if error.error == ParseErrorType::TooManyOperators { max_operators: 3 }
    ));

    Ok(())
}

#[test]
fn test_bindings_are_listed_by_name() -> Result<(), Error> {
    let mut session = Session::new();

    session.evaluate("zeta = 3")?;
    session.evaluate("alpha = 1")?;
    session.evaluate("mid = alpha + zeta")?;

    let bindings = session.environment().iter().collect::<Vec<_>>();
    assert_eq!(bindings, vec![("alpha", 1), ("mid", 4), ("zeta", 3)]);

    Ok(())
}

#[test]
fn test_pretty_errors() {
    let mut session = Session::new();

    let err = session.evaluate("2 @ 3").unwrap_err();
    let pretty = err.pretty_string("<stdin>");
    assert!(pretty.contains("Lexical error"), "{pretty}");
    assert!(pretty.contains("<stdin>"), "{pretty}");

    let err = session.evaluate("y + 1").unwrap_err();
    assert_eq!(err.to_string(), "variable `y` is not defined");
    let pretty = err.pretty_string("<stdin>");
    assert!(pretty.contains("Evaluation error"), "{pretty}");
    assert!(pretty.contains("y = 0"), "{pretty}");

    let err = session.evaluate("(1 + 2").unwrap_err();
    assert!(err.pretty_string("<stdin>").contains("Syntax error"));
    assert_eq!(err.src(), "(1 + 2");
}

#[test]
fn test_session_is_send() {
    fn assert_send<T: Send>() {}

    assert_send::<Session>();
}
