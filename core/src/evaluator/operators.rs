//! Prefix, infix, and index operator implementations.
//!
//! Operands arriving here are already checked for `Error`; these helpers
//! only decide type dispatch and produce the stable diagnostic strings.

use crate::values::Value;
use std::rc::Rc;

pub(super) fn eval_prefix<'a>(operator: &str, right: Value<'a>) -> Value<'a> {
    match operator {
        "!" => Value::from_bool(!right.is_truthy()),
        "-" => eval_minus(right),
        _ => Value::Error(format!(
            "Unknown Operator: {}{}",
            operator,
            right.type_name()
        )),
    }
}

fn eval_minus(right: Value<'_>) -> Value<'_> {
    match right {
        Value::Integer(value) => Value::Integer(value.wrapping_neg()),
        other => Value::Error(format!("Unknown Operator: -{}", other.type_name())),
    }
}

/// Infix dispatch. Order matters: integer pairs first, then string
/// pairs, then identity equality for everything else, then the type
/// mismatch / unknown operator diagnostics.
pub(super) fn eval_infix<'a>(left: Value<'a>, operator: &str, right: Value<'a>) -> Value<'a> {
    match (&left, &right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(*l, operator, *r),
        (Value::Str(l), Value::Str(r)) => eval_string_infix(l, operator, r),
        _ if operator == "==" => Value::from_bool(identical(&left, &right)),
        _ if operator == "!=" => Value::from_bool(!identical(&left, &right)),
        _ if left.type_name() != right.type_name() => Value::Error(format!(
            "Type Mismatch: {} {} {}",
            left.type_name(),
            operator,
            right.type_name()
        )),
        _ => Value::Error(format!(
            "Unknown Operator: {} {} {}",
            left.type_name(),
            operator,
            right.type_name()
        )),
    }
}

/// Integer arithmetic and comparison. Arithmetic wraps on overflow;
/// division truncates toward zero and rejects a zero divisor.
fn eval_integer_infix<'a>(left: i64, operator: &str, right: i64) -> Value<'a> {
    match operator {
        "+" => Value::Integer(left.wrapping_add(right)),
        "-" => Value::Integer(left.wrapping_sub(right)),
        "*" => Value::Integer(left.wrapping_mul(right)),
        "/" => {
            if right == 0 {
                Value::Error(String::from("Division by Zero detected!"))
            } else {
                // wrapping_div covers i64::MIN / -1.
                Value::Integer(left.wrapping_div(right))
            }
        }
        "<" => Value::from_bool(left < right),
        ">" => Value::from_bool(left > right),
        "==" => Value::from_bool(left == right),
        "!=" => Value::from_bool(left != right),
        _ => Value::Error(format!("Unknown Operator: INTEGER {} INTEGER", operator)),
    }
}

/// Strings support `+` (concatenation) only.
fn eval_string_infix<'a>(left: &str, operator: &str, right: &str) -> Value<'a> {
    match operator {
        "+" => {
            let mut concatenated = String::with_capacity(left.len() + right.len());
            concatenated.push_str(left);
            concatenated.push_str(right);
            Value::Str(Rc::from(concatenated))
        }
        _ => Value::Error(format!("Unknown Operator: STRING {} STRING", operator)),
    }
}

/// Value identity, the meaning of `==` outside the integer and string
/// cases. Booleans and null are canonical, so comparing by value is
/// comparing identity; reference-shaped values compare by pointer.
fn identical<'a>(left: &Value<'a>, right: &Value<'a>) -> bool {
    match (left, right) {
        (Value::Boolean(l), Value::Boolean(r)) => l == r,
        (Value::Null, Value::Null) => true,
        (Value::Str(l), Value::Str(r)) => Rc::ptr_eq(l, r),
        (Value::Array(l), Value::Array(r)) => Rc::ptr_eq(l, r),
        (Value::Function(l), Value::Function(r)) => Rc::ptr_eq(l, r),
        (Value::Builtin(l), Value::Builtin(r)) => l.name == r.name,
        _ => false,
    }
}

/// Index expressions: `array[integer]`. Out-of-range indexes (including
/// negative ones) yield null rather than an error.
pub(super) fn eval_index<'a>(left: Value<'a>, index: Value<'a>) -> Value<'a> {
    match (&left, &index) {
        (Value::Array(elements), Value::Integer(i)) => {
            if *i < 0 || *i as usize >= elements.len() {
                Value::NULL
            } else {
                elements[*i as usize].clone()
            }
        }
        _ => Value::Error(format!(
            "Index Operator not supported for '{}'!",
            left.type_name()
        )),
    }
}
