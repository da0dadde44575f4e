//! The Minnow interpretation engine.

use super::Error;
use crate::evaluator;
use crate::parser;
use crate::values::{Env, Environment, Value};
use bumpalo::Bump;

/// A session over the whole pipeline: one arena, one root environment.
///
/// Source handed to [`Interpreter::eval`] is copied into the arena, so
/// the ASTs it produces, and the closures that keep pointing into them,
/// stay alive for the rest of the session. The root environment persists
/// across calls, which is what lets a REPL define a function on one line
/// and call it on a later one.
///
/// # Example
///
/// ```
/// use bumpalo::Bump;
/// use minnow_core::Interpreter;
///
/// let arena = Bump::new();
/// let interpreter = Interpreter::new(&arena);
///
/// interpreter.run("let double = fn(x) { x * 2 };").unwrap();
/// let value = interpreter.run("double(21)").unwrap();
/// assert_eq!(value.as_int(), Some(42));
/// ```
pub struct Interpreter<'arena> {
    arena: &'arena Bump,
    env: Env<'arena>,
}

impl<'arena> Interpreter<'arena> {
    /// Create a session with an empty root environment.
    pub fn new(arena: &'arena Bump) -> Self {
        Interpreter {
            arena,
            env: Environment::new(),
        }
    }

    /// The session's root environment.
    pub fn environment(&self) -> &Env<'arena> {
        &self.env
    }

    /// Lex, parse, and evaluate one program.
    ///
    /// Any parse diagnostics abort before evaluation. Runtime errors come
    /// back as ordinary [`Value::Error`] values so a driver can print
    /// their inspection string like any other result.
    pub fn eval(&self, source: &str) -> Result<Value<'arena>, Error> {
        let source = self.arena.alloc_str(source);
        let program =
            parser::parse(self.arena, source).map_err(|diagnostics| Error::Parse { diagnostics })?;
        Ok(evaluator::eval(&program, &self.env))
    }

    /// Like [`Interpreter::eval`], but strict: a resulting `Error` value
    /// becomes `Err(Error::Runtime)`.
    pub fn run(&self, source: &str) -> Result<Value<'arena>, Error> {
        match self.eval(source)? {
            Value::Error(message) => Err(Error::Runtime(message)),
            value => Ok(value),
        }
    }
}
