//! The evaluator's node dispatch.

use crate::ast::{BlockStatement, Expression, Program, Statement};
use crate::evaluator::operators;
use crate::stdlib;
use crate::values::{Env, Environment, Function, Value};
use std::rc::Rc;

/// Evaluate a whole program in `env`.
///
/// Statements run in order; the last statement's value is the program
/// result. A top-level `Return` is unwrapped here, and a top-level
/// `Error` ends evaluation immediately.
pub fn eval<'a>(program: &Program<'a>, env: &Env<'a>) -> Value<'a> {
    let mut result = Value::NULL;

    for statement in program.statements {
        result = eval_statement(statement, env);
        match result {
            Value::Return(inner) => return *inner,
            error @ Value::Error(_) => return error,
            other => result = other,
        }
    }

    result
}

fn eval_statement<'a>(statement: &Statement<'a>, env: &Env<'a>) -> Value<'a> {
    match *statement {
        Statement::Expression { expression, .. } => eval_expression(expression, env),
        Statement::Let { name, value, .. } => {
            let value = eval_expression(value, env);
            if value.is_error() {
                return value;
            }
            env.borrow_mut().set(name.value, value);
            // A binding produces no observable value.
            Value::NULL
        }
        Statement::Return { value, .. } => {
            let value = eval_expression(value, env);
            if value.is_error() {
                return value;
            }
            Value::Return(Box::new(value))
        }
    }
}

/// Evaluate a block, stopping at the first `Return` or `Error` and
/// passing it upward *without* unwrapping, so a `return` deep inside
/// nested blocks still reaches the enclosing call boundary.
fn eval_block<'a>(block: &BlockStatement<'a>, env: &Env<'a>) -> Value<'a> {
    let mut result = Value::NULL;

    for statement in block.statements {
        result = eval_statement(statement, env);
        if matches!(result, Value::Return(_) | Value::Error(_)) {
            return result;
        }
    }

    result
}

fn eval_expression<'a>(expression: &Expression<'a>, env: &Env<'a>) -> Value<'a> {
    // AST nodes are plain `Copy` arena references; matching by value keeps
    // the `'a` lifetimes of the children intact.
    match *expression {
        Expression::Integer { value, .. } => Value::Integer(value),
        Expression::Boolean { value, .. } => Value::from_bool(value),
        Expression::Str { value, .. } => Value::Str(Rc::from(value)),

        Expression::Array { elements, .. } => {
            let mut values = Vec::with_capacity(elements.len());
            for element in elements.iter().copied() {
                let value = eval_expression(element, env);
                if value.is_error() {
                    return value;
                }
                values.push(value);
            }
            Value::Array(Rc::new(values))
        }

        Expression::Identifier(identifier) => {
            let bound = env.borrow().get(identifier.value);
            bound
                .or_else(|| stdlib::lookup(identifier.value))
                .unwrap_or_else(|| {
                    Value::Error(format!("Identifier Not Found: {}", identifier.value))
                })
        }

        Expression::Prefix {
            operator, right, ..
        } => {
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            operators::eval_prefix(operator, right)
        }

        Expression::Infix {
            operator,
            left,
            right,
            ..
        } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            operators::eval_infix(left, operator, right)
        }

        Expression::Index { left, index, .. } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }
            let index = eval_expression(index, env);
            if index.is_error() {
                return index;
            }
            operators::eval_index(left, index)
        }

        Expression::If {
            condition,
            consequence,
            alternative,
            ..
        } => {
            let condition = eval_expression(condition, env);
            if condition.is_error() {
                return condition;
            }
            if condition.is_truthy() {
                eval_block(consequence, env)
            } else if let Some(alternative) = alternative {
                eval_block(alternative, env)
            } else {
                Value::NULL
            }
        }

        Expression::Function {
            parameters, body, ..
        } => Value::Function(Rc::new(Function {
            parameters,
            body,
            env: env.clone(),
        })),

        Expression::Call {
            function,
            arguments,
            ..
        } => {
            let function = eval_expression(function, env);
            if function.is_error() {
                return function;
            }

            let mut args = Vec::with_capacity(arguments.len());
            for argument in arguments.iter().copied() {
                let value = eval_expression(argument, env);
                if value.is_error() {
                    return value;
                }
                args.push(value);
            }

            apply_function(function, &args)
        }
    }
}

/// Apply a callable to already-evaluated arguments.
///
/// User functions run their body in a fresh environment enclosed by the
/// captured one, with parameters bound positionally; a `Return` from the
/// body is unwrapped here. Built-ins are invoked directly.
fn apply_function<'a>(function: Value<'a>, args: &[Value<'a>]) -> Value<'a> {
    match function {
        Value::Function(function) => {
            if args.len() != function.parameters.len() {
                return stdlib::wrong_argument_count(function.parameters.len(), args.len());
            }

            let env = Environment::new_enclosed(function.env.clone());
            for (parameter, argument) in function.parameters.iter().zip(args) {
                env.borrow_mut().set(parameter.value, argument.clone());
            }

            match eval_block(function.body, &env) {
                Value::Return(inner) => *inner,
                other => other,
            }
        }
        Value::Builtin(builtin) => (builtin.apply)(args),
        other => Value::Error(format!(
            "Object is not a Function! Received a '{}'",
            other.type_name()
        )),
    }
}
