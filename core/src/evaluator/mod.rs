//! Tree-walking evaluation of Minnow programs.
//!
//! Evaluation is a direct recursive walk of the AST against lexically
//! scoped, chained environments. Two invariants shape everything here:
//!
//! - **Errors are values.** Every operation inspects its sub-results and
//!   returns an `Error` value unchanged instead of continuing; nothing is
//!   thrown and nothing panics on user input.
//! - **`return` is a wrapper.** A `Return` value propagates outward
//!   through blocks untouched and is unwrapped only at a function-call
//!   boundary or at program top level.

mod eval;
mod operators;


pub use eval::eval;
