//! Values of variables.

/// The value of a variable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Rat(f64),
}

impl Value {
    /// The value as a boolean, if the value is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::Rat(_) => None,
        }
    }

    /// The value as a rational, if the value is a rational.
    pub fn as_rat(&self) -> Option<f64> {
        match self {
            Value::Bool(_) => None,
            Value::Rat(r) => Some(*r),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Rat(r) => write!(f, "{r}"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}
