use std::fmt;

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Token {
    Ident(String),
    Int(String),
    Float(String),
    Illegal(String),

    Assign,
    Plus,
    Minus,
    Asterisk,
    Slash,
    Percent,

    Lparen,
    Rparen,
    Semicolon,
}

impl Token {
    pub fn variant_eq(&self, other: Token) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(&other)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Ident(ident) => write!(f, "{}", ident),
            Token::Int(value) => write!(f, "{}", value),
            Token::Float(value) => write!(f, "{}", value),
            Token::Illegal(value) => write!(f, "{}", value),

            Token::Assign => write!(f, "="),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Asterisk => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Percent => write!(f, "%"),

            Token::Lparen => write!(f, "("),
            Token::Rparen => write!(f, ")"),
            Token::Semicolon => write!(f, ";"),
        }
    }
}
