//! Minnow core: the execution pipeline for the Minnow language.
//!
//! Source text flows strictly forward through three stages that share a
//! token taxonomy, an arena-allocated AST, and a runtime value model:
//!
//! 1. [`lexer`] streams tokens from a source string on demand.
//! 2. [`parser`] builds the AST with a Pratt expression parser, collecting
//!    diagnostics instead of halting.
//! 3. [`evaluator`] walks the AST against lexically scoped, chained
//!    environments. Runtime errors are ordinary values that short-circuit
//!    evaluation; nothing in the pipeline panics on user input.
//!
//! The [`api`] module ties the stages together behind a small embedding
//! surface; [`stdlib`] provides the built-in functions.

pub mod api;
pub mod ast;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod stdlib;
pub mod token;
pub mod values;

pub use api::{Error, Interpreter};
pub use values::Value;
