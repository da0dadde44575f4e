//! The built-in function table.
//!
//! Built-ins are host functions registered once in a process-wide,
//! read-only table. The table is sorted by name and searched with binary
//! search; the evaluator consults it when an identifier is not found in
//! the environment chain.

mod array;
mod io;


use crate::values::{Builtin, Value};

/// Name-sorted registry. Keep entries in lexicographic order; `lookup`
/// relies on it.
static BUILTINS: &[Builtin] = &[
    Builtin {
        name: "first",
        apply: array::first,
    },
    Builtin {
        name: "last",
        apply: array::last,
    },
    Builtin {
        name: "len",
        apply: array::len,
    },
    Builtin {
        name: "push",
        apply: array::push,
    },
    Builtin {
        name: "puts",
        apply: io::puts,
    },
    Builtin {
        name: "rest",
        apply: array::rest,
    },
];

/// Resolve a built-in function by name.
pub fn lookup<'a>(name: &str) -> Option<Value<'a>> {
    BUILTINS
        .binary_search_by_key(&name, |builtin| builtin.name)
        .ok()
        .map(|index| Value::Builtin(BUILTINS[index]))
}

/// The arity-violation diagnostic shared by every built-in.
pub(crate) fn wrong_argument_count<'a>(expected: usize, got: usize) -> Value<'a> {
    Value::Error(format!(
        "Incorrect number of arguments detected! Only needed {} but instead received {}!",
        expected, got
    ))
}
