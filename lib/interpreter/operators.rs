use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    error::{Error, Result},
    object::Object,
    token::Token,
};

/// A binary arithmetic operator. `apply` returns `None` on integer overflow.
struct Operator {
    name: &'static str,
    rejects_zero_divisor: bool,
    apply: fn(Object, Object) -> Option<Object>,
}

lazy_static! {
    static ref OPERATORS: HashMap<Token, Operator> = {
        let mut operators = HashMap::new();
        operators.insert(
            Token::Plus,
            Operator {
                name: "Add",
                rejects_zero_divisor: false,
                apply: add,
            },
        );
        operators.insert(
            Token::Minus,
            Operator {
                name: "Sub",
                rejects_zero_divisor: false,
                apply: subtract,
            },
        );
        operators.insert(
            Token::Asterisk,
            Operator {
                name: "Mult",
                rejects_zero_divisor: false,
                apply: multiply,
            },
        );
        operators.insert(
            Token::Slash,
            Operator {
                name: "Div",
                rejects_zero_divisor: true,
                apply: divide,
            },
        );
        operators.insert(
            Token::Percent,
            Operator {
                name: "Mod",
                rejects_zero_divisor: true,
                apply: modulo,
            },
        );
        operators
    };
}

fn lookup(operator: &Token) -> Result<&'static Operator> {
    OPERATORS
        .get(operator)
        .ok_or_else(|| Error::UnknownOperator(operator.to_string()))
}

/// Applies `operator` to already evaluated operands.
pub fn apply(left: Object, operator: Token, right: Object) -> Result<Object> {
    let op = lookup(&operator)?;
    log::trace!("{} {} {}", op.name, left, right);

    if op.rejects_zero_divisor && right.is_zero() {
        return Err(Error::DivisionByZero {
            left,
            operator,
            right,
        });
    }

    (op.apply)(left, right)
        .ok_or_else(|| Error::IntegerOverflow(format!("{} {} {}", left, operator, right)))
}

fn integer_or_float(
    left: Object,
    right: Object,
    integer_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Option<Object> {
    match (left, right) {
        (Object::Integer(left), Object::Integer(right)) => {
            integer_op(left, right).map(Object::Integer)
        }
        (left, right) => Some(Object::Float(float_op(left.as_f64(), right.as_f64()))),
    }
}

fn add(left: Object, right: Object) -> Option<Object> {
    integer_or_float(left, right, i64::checked_add, |left, right| left + right)
}

fn subtract(left: Object, right: Object) -> Option<Object> {
    integer_or_float(left, right, i64::checked_sub, |left, right| left - right)
}

fn multiply(left: Object, right: Object) -> Option<Object> {
    integer_or_float(left, right, i64::checked_mul, |left, right| left * right)
}

/// True division: integers in, float out.
///
/// An exact integer quotient is converted once. Otherwise both integers are
/// converted before dividing, which can round twice when an operand is
/// above 2^53.
fn divide(left: Object, right: Object) -> Option<Object> {
    if let (Object::Integer(left), Object::Integer(right)) = (left, right) {
        if left.checked_rem(right) == Some(0) {
            if let Some(quotient) = left.checked_div(right) {
                return Some(Object::Float(quotient as f64));
            }
        }
    }
    Some(Object::Float(left.as_f64() / right.as_f64()))
}

fn modulo(left: Object, right: Object) -> Option<Object> {
    integer_or_float(left, right, floored_rem, floored_rem_f64)
}

// The result takes the sign of the divisor.
fn floored_rem(left: i64, right: i64) -> Option<i64> {
    if right == -1 {
        return Some(0);
    }
    let rem = left.checked_rem(right)?;
    if rem != 0 && (rem < 0) != (right < 0) {
        Some(rem + right)
    } else {
        Some(rem)
    }
}

fn floored_rem_f64(left: f64, right: f64) -> f64 {
    let rem = left % right;
    if rem == 0.0 {
        0.0f64.copysign(right)
    } else if (rem < 0.0) != (right < 0.0) {
        rem + right
    } else {
        rem
    }
}
