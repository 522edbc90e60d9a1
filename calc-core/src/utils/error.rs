use termcolor::Buffer;
use thiserror::Error;

use crate::{
    eval::prelude::EvalError,
    lexer::prelude::LexicalError,
    parser::prelude::ParseError,
    utils::prelude::SrcSpan,
};
use super::diagnostic::{Diagnostic, Label, Location};

/// Everything that can go wrong while handling one line of input.
///
/// Each variant keeps the offending line so the error can be rendered
/// against it later.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("{error}")]
    Lex {
        src: String,
        error: LexicalError
    },
    #[error("{error}")]
    Parse {
        src: String,
        error: ParseError
    },
    #[error("{error}")]
    Eval {
        src: String,
        error: EvalError
    }
}

impl Error {
    pub fn src(&self) -> &str {
        match self {
            Error::Lex { src, .. }
            | Error::Parse { src, .. }
            | Error::Eval { src, .. } => src
        }
    }

    pub fn pretty_string(&self, name: &str) -> String {
        let mut nocolor = Buffer::no_color();
        self.pretty(&mut nocolor, name);
        String::from_utf8(nocolor.into_inner()).expect("Error printing produced invalid utf8")
    }

    pub fn pretty(&self, buf: &mut Buffer, name: &str) {
        self.to_diagnostic(name).write(buf);
    }

    pub fn to_diagnostic(&self, name: &str) -> Diagnostic {
        match self {
            Error::Lex { src, error } => {
                let (label, extra) = error.details();

                spanned("Lexical error", src, name, label, extra, error.location)
            },
            Error::Parse { src, error } => {
                let (label, extra) = error.details();

                spanned("Syntax error", src, name, label, extra, error.span)
            },
            Error::Eval { src, error } => {
                let (label, extra) = error.details();

                spanned(
                    "Evaluation error",
                    src,
                    name,
                    label,
                    extra,
                    error.location()
                )
            },
        }
    }
}

fn spanned<'a>(
    title: &str,
    src: &'a str,
    name: &str,
    label: &str,
    extra: Vec<String>,
    span: SrcSpan
) -> Diagnostic<'a> {
    Diagnostic {
        title: title.into(),
        text: extra.join("\n"),
        location: Location {
            src,
            name: name.to_string(),
            label: Label {
                text: Some(label.to_string()),
                span,
            },
        },
    }
}
