//! Built-ins over arrays and strings.
//!
//! None of these mutate their argument: `rest` and `push` build new
//! arrays and leave the original untouched.

use super::wrong_argument_count;
use crate::values::Value;
use std::rc::Rc;

/// Reject non-array arguments with the stable contract message.
fn expect_array<'v, 'a>(
    name: &str,
    arg: &'v Value<'a>,
) -> Result<&'v [Value<'a>], Value<'a>> {
    match arg {
        Value::Array(elements) => Ok(elements),
        other => Err(Value::Error(format!(
            "Argument to `{}` must be ARRAY! Instead received an {}",
            name,
            other.type_name()
        ))),
    }
}

/// `len(x)`: the byte length of a string, or the element count of an
/// array.
pub(super) fn len<'a>(args: &[Value<'a>]) -> Value<'a> {
    if args.len() != 1 {
        return wrong_argument_count(1, args.len());
    }
    match &args[0] {
        Value::Str(value) => Value::Integer(value.len() as i64),
        Value::Array(elements) => Value::Integer(elements.len() as i64),
        other => Value::Error(format!(
            "Argument to `len` is not supported! Instead received an {}!",
            other.type_name()
        )),
    }
}

/// `first(a)`: the first element of an array, or null if it is empty.
pub(super) fn first<'a>(args: &[Value<'a>]) -> Value<'a> {
    if args.len() != 1 {
        return wrong_argument_count(1, args.len());
    }
    match expect_array("first", &args[0]) {
        Ok(elements) => elements.first().cloned().unwrap_or(Value::NULL),
        Err(error) => error,
    }
}

/// `last(a)`: the last element of an array, or null if it is empty.
pub(super) fn last<'a>(args: &[Value<'a>]) -> Value<'a> {
    if args.len() != 1 {
        return wrong_argument_count(1, args.len());
    }
    match expect_array("last", &args[0]) {
        Ok(elements) => elements.last().cloned().unwrap_or(Value::NULL),
        Err(error) => error,
    }
}

/// `rest(a)`: a new array of everything but the first element, or null
/// if the array is empty.
pub(super) fn rest<'a>(args: &[Value<'a>]) -> Value<'a> {
    if args.len() != 1 {
        return wrong_argument_count(1, args.len());
    }
    match expect_array("rest", &args[0]) {
        Ok(elements) => {
            if elements.is_empty() {
                Value::NULL
            } else {
                Value::Array(Rc::new(elements[1..].to_vec()))
            }
        }
        Err(error) => error,
    }
}

/// `push(a, x)`: a new array equal to `a` with `x` appended.
pub(super) fn push<'a>(args: &[Value<'a>]) -> Value<'a> {
    if args.len() != 2 {
        return wrong_argument_count(2, args.len());
    }
    match expect_array("push", &args[0]) {
        Ok(elements) => {
            let mut extended = elements.to_vec();
            extended.push(args[1].clone());
            Value::Array(Rc::new(extended))
        }
        Err(error) => error,
    }
}
