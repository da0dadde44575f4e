//! Runtime values and the environments they live in.
//!
//! A [`Value`] is a tagged variant over everything evaluation can
//! produce. Reference-shaped values (`Str`, `Array`, `Function`) are
//! reference-counted so cloning a value is cheap and `==`/`!=` can
//! compare by identity. `Return` and `Error` are propagation wrappers:
//! `Return` carries a `return` result out of nested blocks, `Error`
//! short-circuits every enclosing operation. Neither is ever observable
//! as a normal value to user code.

use crate::ast::{BlockStatement, Identifier};
use core::fmt;
use std::rc::Rc;

pub mod environment;


pub use environment::{Env, Environment};

/// A runtime value.
#[derive(Debug, Clone)]
pub enum Value<'a> {
    Integer(i64),
    Boolean(bool),
    Null,
    Str(Rc<str>),
    Array(Rc<Vec<Value<'a>>>),
    /// Internal wrapper that carries a `return` result outward through
    /// nested blocks; unwrapped at call boundaries and program top level.
    Return(Box<Value<'a>>),
    /// A runtime diagnostic. Any operation whose operand is an `Error`
    /// returns it unchanged.
    Error(String),
    /// A closure: parameter list, body, and the environment captured at
    /// the definition site.
    Function(Rc<Function<'a>>),
    /// A host-provided function from the built-in table.
    Builtin(Builtin),
}

/// A user-defined function value.
pub struct Function<'a> {
    pub parameters: &'a [Identifier<'a>],
    pub body: &'a BlockStatement<'a>,
    pub env: Env<'a>,
}

// The captured environment is deliberately left out: it can contain the
// function itself, and the chain is not part of the function's identity.
impl fmt::Debug for Function<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.parameters.iter().map(|p| p.value).collect();
        write!(f, "Function({})", names.join(", "))
    }
}

/// Signature shared by every built-in function.
pub type BuiltinFn = for<'a> fn(&[Value<'a>]) -> Value<'a>;

#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub apply: BuiltinFn,
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}

impl<'a> Value<'a> {
    /// Canonical true. All producers of booleans return these constants,
    /// so boolean equality is identity.
    pub const TRUE: Value<'a> = Value::Boolean(true);
    /// Canonical false.
    pub const FALSE: Value<'a> = Value::Boolean(false);
    /// Canonical null.
    pub const NULL: Value<'a> = Value::Null;

    pub fn from_bool(value: bool) -> Value<'a> {
        if value { Value::TRUE } else { Value::FALSE }
    }

    /// The stable type tag used in diagnostics and type dispatch.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::Null => "NULL",
            Value::Str(_) => "STRING",
            Value::Array(_) => "ARRAY",
            Value::Return(_) => "RETURN_VALUE",
            Value::Error(_) => "ERROR",
            Value::Function(_) => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Everything is truthy except canonical false and null.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false) | Value::Null)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value<'a>]> {
        match self {
            Value::Array(elements) => Some(elements),
            _ => None,
        }
    }
}

/// The printable inspection form. Strings render without quotes; errors
/// render as their bare message.
impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(value) => write!(f, "{}", value),
            Value::Boolean(value) => write!(f, "{}", value),
            Value::Null => f.write_str("null"),
            Value::Str(value) => f.write_str(value),
            Value::Array(elements) => {
                write!(f, "[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", element)?;
                }
                write!(f, "]")
            }
            Value::Return(inner) => write!(f, "{}", inner),
            Value::Error(message) => f.write_str(message),
            Value::Function(function) => {
                write!(f, "fn(")?;
                for (i, parameter) in function.parameters.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", parameter)?;
                }
                write!(f, ") {}", function.body)
            }
            Value::Builtin(_) => f.write_str("builtin function"),
        }
    }
}
