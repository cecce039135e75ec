use core::fmt;

/// A numeric value produced by evaluation.
///
/// Integers stay integers under `+`, `-`, `*` and `%`. Any float operand, or
/// the `/` operator, produces a float.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Object {
    Integer(i64),
    Float(f64),
}

impl Object {
    pub fn as_f64(&self) -> f64 {
        match self {
            Object::Integer(value) => *value as f64,
            Object::Float(value) => *value,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Object::Integer(value) => *value == 0,
            Object::Float(value) => *value == 0.0,
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Object::Integer(value) => write!(f, "{}", value),
            Object::Float(value) if value.is_nan() => write!(f, "nan"),
            Object::Float(value) => write!(f, "{:?}", value),
        }
    }
}
