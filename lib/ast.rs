use std::fmt;

use crate::{object::Object, token::Token};

/// A parsed input. `None` means the input held no statement at all.
#[derive(Debug, PartialEq, Clone)]
pub struct Program {
    pub expression: Option<Expression>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    NumberLiteral(Object),
    Identifier(String),
    Prefix {
        operator: Token,
        right: Box<Expression>,
    },
    Infix {
        left: Box<Expression>,
        operator: Token,
        right: Box<Expression>,
    },
    Assign {
        name: String,
        value: Box<Expression>,
    },
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.expression {
            Some(expression) => write!(f, "{}", expression),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::NumberLiteral(value) => write!(f, "{}", value),
            Expression::Identifier(name) => write!(f, "{}", name),
            Expression::Prefix { operator, right } => write!(f, "({}{})", operator, right),
            Expression::Infix {
                left,
                operator,
                right,
            } => write!(f, "({} {} {})", left, operator, right),
            Expression::Assign { name, value } => write!(f, "({} = {})", name, value),
        }
    }
}
