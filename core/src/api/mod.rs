//! The public embedding surface.
//!
//! [`Interpreter`] ties the pipeline together behind two calls: `eval`
//! for drivers that want runtime errors back as inspectable values (the
//! REPL), and `run` for embedders that want them as `Err`. [`Error`] is
//! the stable boundary type; internal diagnostics are converted at this
//! layer and nowhere else.

mod error;
mod interpreter;

pub use error::Error;
pub use interpreter::Interpreter;
