use crate::{lexer::prelude::{tokenize, Spanned, Token}, utils::prelude::{Error, SrcSpan}};
use super::error::{ParseError, ParseErrorType};
use super::ast::{Assignment, BinaryOp, Identifier, Operator, SyntaxTree};

/// How many parentheses may be open at once before parsing gives up.
pub const DEFAULT_MAX_DEPTH: usize = 256;
/// How many binary operators one line may contain. Every operator adds a
/// level to the tree, which evaluation and drop walk recursively.
pub const DEFAULT_MAX_OPERATORS: usize = 1024;

// statement  -> <assignment> | <expression>
// assignment -> <identifier> = <expression>
// expression -> <term> { (+ | -) <term> }
// term       -> <factor> { (* | /) <factor> }
// factor     -> <integer> | <identifier> | ( <expression> )
pub struct Parser<T: Iterator<Item = Spanned>> {
    pub current_token: Option<Spanned>,
    pub next_token: Option<Spanned>,

    depth: usize,
    max_depth: usize,
    operators: usize,
    max_operators: usize,
    tokens: T,
}

impl<T: Iterator<Item = Spanned>> Parser<T> {
    pub fn new(input: T) -> Self {
        let mut parser = Self {
            current_token: None,
            next_token: None,

            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
            operators: 0,
            max_operators: DEFAULT_MAX_OPERATORS,
            tokens: input,
        };

        parser.step();
        parser.step();

        parser
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_operators(mut self, max_operators: usize) -> Self {
        self.max_operators = max_operators;
        self
    }

    pub fn step(&mut self) {
        let _ = self.next_token();
    }

    pub fn next_token(&mut self) -> Option<Spanned> {
        let t = self.current_token.take();

        self.current_token = self.next_token.take();
        self.next_token = self.tokens.next();

        t
    }

    pub fn current_precedence(&self) -> Option<Precedence> {
        match &self.current_token {
            Some((_, token, _)) => Precedence::from_token(token),
            None => None
        }
    }

    /// Parses exactly one statement; anything left after it is an error.
    pub fn parse(&mut self) -> Result<SyntaxTree, ParseError> {
        let tree = self.parse_statement()?;

        match self.current_token.take() {
            Some((_, Token::Eof, _)) | None => Ok(tree),
            Some((start, token, end)) => parse_error(
                ParseErrorType::UnexpectedToken {
                    token,
                    expected: expected_after_operand()
                },
                SrcSpan { start, end }
            )
        }
    }

    pub fn parse_statement(&mut self) -> Result<SyntaxTree, ParseError> {
        let is_assignment = matches!(
            (&self.current_token, &self.next_token),
            (Some((_, Token::Ident(_), _)), Some((_, Token::Assign, _)))
        );

        if is_assignment {
            self.parse_assignment()
        } else {
            self.parse_expression()
        }
    }

    pub fn parse_assignment(&mut self) -> Result<SyntaxTree, ParseError> {
        let identifier = Identifier::from(self.expect_ident()?);
        let start = identifier.location.start;

        self.expect_one(Token::Assign)?;

        let value = self.parse_expression()?;
        let end = value.location().end;

        Ok(SyntaxTree::Assignment(Assignment {
            identifier,
            value: Box::new(value),
            location: SrcSpan { start, end }
        }))
    }

    pub fn parse_expression(&mut self) -> Result<SyntaxTree, ParseError> {
        self.parse_binary(Precedence::Sum)
    }

    // One level of precedence climbing: operands come from the next tighter
    // level, operators of this level fold to the left.
    fn parse_binary(&mut self, precedence: Precedence) -> Result<SyntaxTree, ParseError> {
        let mut left = self.parse_operand(precedence)?;

        while self.current_precedence() == Some(precedence) {
            let (operator, span) = match self.next_token() {
                Some((start, token, end)) => (Operator::from_token(&token), SrcSpan { start, end }),
                None => break
            };

            // current_precedence only matches operator tokens
            let Some(operator) = operator else { break };

            if self.operators >= self.max_operators {
                return parse_error(
                    ParseErrorType::TooManyOperators { max_operators: self.max_operators },
                    span
                );
            }
            self.operators += 1;

            let right = self.parse_operand(precedence)?;

            left = SyntaxTree::BinaryOp(BinaryOp::new(left, operator, right));
        }

        Ok(left)
    }

    fn parse_operand(&mut self, precedence: Precedence) -> Result<SyntaxTree, ParseError> {
        match precedence.tighter() {
            Some(tighter) => self.parse_binary(tighter),
            None => self.parse_factor()
        }
    }

    pub fn parse_factor(&mut self) -> Result<SyntaxTree, ParseError> {
        match self.current_token.take() {
            Some((start, Token::Int(value), end)) => {
                self.step();

                Ok(SyntaxTree::Literal {
                    value,
                    location: SrcSpan { start, end }
                })
            },
            Some((start, Token::Ident(name), end)) => {
                self.step();

                Ok(SyntaxTree::Variable(Identifier::from((start, name, end))))
            },
            Some((start, Token::LParen, end)) => {
                self.step();

                if self.depth >= self.max_depth {
                    return parse_error(
                        ParseErrorType::NestingTooDeep { max_depth: self.max_depth },
                        SrcSpan { start, end }
                    );
                }

                self.depth += 1;
                let expression = self.parse_expression()?;
                self.expect_one(Token::RParen)?;
                self.depth -= 1;

                Ok(expression)
            },
            Some((start, Token::Eof, end)) => parse_error(
                ParseErrorType::UnexpectedEof { expected: expected_operand() },
                SrcSpan { start, end }
            ),
            Some((start, token, end)) => parse_error(
                ParseErrorType::UnexpectedToken {
                    token,
                    expected: expected_operand()
                },
                SrcSpan { start, end }
            ),
            None => parse_error(
                ParseErrorType::UnexpectedEof { expected: expected_operand() },
                SrcSpan { start: 0, end: 0 }
            )
        }
    }

    pub fn expect_one(&mut self, token: Token) -> Result<(u32, u32), ParseError> {
        match self.current_token.take() {
            Some((start, tok, end)) if tok == token => {
                self.step();
                Ok((start, end))
            },
            Some((start, Token::Eof, end)) => {
                self.current_token = Some((start, Token::Eof, end));

                parse_error(
                    ParseErrorType::UnexpectedEof { expected: vec![format!("`{}`", token.as_literal())] },
                    SrcSpan { start, end }
                )
            },
            Some(t) => {
                let (start, tok, end) = t.clone();
                self.current_token = Some(t);

                parse_error(
                    ParseErrorType::UnexpectedToken {
                        token: tok,
                        expected: vec![format!("`{}`", token.as_literal())],
                    },
                    SrcSpan { start, end }
                )
            },
            None => parse_error(
                ParseErrorType::UnexpectedEof { expected: vec![format!("`{}`", token.as_literal())] },
                SrcSpan { start: 0, end: 0 }
            )
        }
    }

    pub fn expect_ident(&mut self) -> Result<(u32, String, u32), ParseError> {
        match self.current_token.take() {
            Some((start, Token::Ident(value), end)) => {
                self.step();
                Ok((start, value, end))
            },
            Some(t) => {
                let (start, tok, end) = t.clone();
                self.current_token = Some(t);

                parse_error(
                    ParseErrorType::UnexpectedToken {
                        token: tok,
                        expected: vec!["an identifier".to_string()]
                    },
                    SrcSpan { start, end }
                )
            },
            None => parse_error(
                ParseErrorType::UnexpectedEof { expected: vec!["an identifier".to_string()] },
                SrcSpan { start: 0, end: 0 }
            )
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Sum,
    Product,
}

impl Precedence {
    pub fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Plus | Token::Minus => Some(Self::Sum),
            Token::Asterisk | Token::Slash => Some(Self::Product),
            _ => None,
        }
    }

    /// The level that binds one step tighter, `None` for the last one.
    pub fn tighter(self) -> Option<Self> {
        match self {
            Self::Sum => Some(Self::Product),
            Self::Product => None,
        }
    }
}

fn expected_operand() -> Vec<String> {
    vec![
        "an integer".to_string(),
        "an identifier".to_string(),
        "`(`".to_string(),
    ]
}

fn expected_after_operand() -> Vec<String> {
    vec![
        "an operator".to_string(),
        "end of input".to_string(),
    ]
}

/// Tokenizes and parses one line, for tools that only need the tree.
pub fn parse_line(src: &str, max_depth: usize, max_operators: usize) -> Result<SyntaxTree, Error> {
    let tokens = tokenize(src)
        .map_err(|error| Error::Lex { src: src.to_string(), error })?;

    Parser::new(tokens.into_iter())
        .with_max_depth(max_depth)
        .with_max_operators(max_operators)
        .parse()
        .map_err(|error| Error::Parse { src: src.to_string(), error })
}

pub fn parse_error<T>(error: ParseErrorType, span: SrcSpan) -> Result<T, ParseError> {
    Err(ParseError { error, span })
}
