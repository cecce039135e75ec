use crate::{object::Object, token::Token};

pub type Result<T> = std::result::Result<T, Error>;

/// Every way a single evaluation can fail. None of them are recovered from.
#[derive(thiserror::Error, Debug, PartialEq, Clone)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("identifier not found: {0}")]
    UndefinedVariable(String),
    #[error("division by zero: {left} {operator} {right}")]
    DivisionByZero {
        left: Object,
        operator: Token,
        right: Object,
    },
    #[error("unknown operator: {0}")]
    UnknownOperator(String),
    #[error("integer overflow: {0}")]
    IntegerOverflow(String),
}

macro_rules! parse_bail {
    ($($arg:tt)*) => {
        return Err($crate::error::Error::Parse(format!($($arg)*)))
    };
}

pub(crate) use parse_bail;
