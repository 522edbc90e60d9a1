use tracing::{debug, trace};

use crate::{
    environment::prelude::{Environment, Value},
    eval::prelude::eval,
    lexer::prelude::tokenize,
    parser::prelude::Parser,
    utils::prelude::Error,
};
use super::config::SessionConfig;

/// Starts a session with the default configuration and an empty store.
pub fn new_session() -> Session {
    Session::new()
}

/// A calculator session: one variable store shared by every line evaluated
/// through it.
#[derive(Debug, Default, Clone)]
pub struct Session {
    env: Environment,
    config: SessionConfig,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            env: Environment::new(),
            config,
        }
    }

    /// Lexes, parses and evaluates one line.
    ///
    /// The first failing stage decides the error. The store is written only
    /// when the line is an assignment whose value evaluated successfully, so
    /// a failed line leaves every binding as it was.
    pub fn evaluate(&mut self, line: &str) -> Result<Value, Error> {
        debug!(line, "evaluating");

        let tokens = tokenize(line)
            .map_err(|error| Error::Lex { src: line.to_string(), error })?;
        trace!(count = tokens.len(), "tokenized");

        let tree = Parser::new(tokens.into_iter())
            .with_max_depth(self.config.max_depth)
            .with_max_operators(self.config.max_operators)
            .parse()
            .map_err(|error| Error::Parse { src: line.to_string(), error })?;
        trace!(%tree, "parsed");

        eval(&tree, &mut self.env)
            .map_err(|error| Error::Eval { src: line.to_string(), error })
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.env.get(name)
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}
