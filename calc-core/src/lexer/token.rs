#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    // (<letter> | _) {<letter> | <digit> | _}
    Ident(String),
    // {/ <digit> /}
    Int(i64),

    // Operations of the addition group
    Plus, // +
    Minus, // -

    // Operations of the multiplication group
    Asterisk, // *
    Slash, // /

    Assign, // =

    LParen, // (
    RParen, // )

    Eof,
}

impl Token {
    pub fn as_literal(&self) -> String {
        match self {
            Token::Ident(value) => value.clone(),
            Token::Int(value) => value.to_string(),
            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Asterisk => "*".to_string(),
            Token::Slash => "/".to_string(),
            Token::Assign => "=".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
            Token::Eof => "end of input".to_string(),
        }
    }

    /// How the token is named in "found ..." parts of error messages.
    pub fn describe(&self) -> String {
        match self {
            Token::Int(value) => format!("the integer `{value}`"),
            Token::Ident(name) => format!("the identifier `{name}`"),
            Token::Eof => "end of input".to_string(),
            _ => format!("`{}`", self.as_literal())
        }
    }
}
