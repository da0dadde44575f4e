//! Built-ins that talk to the host.

use crate::values::Value;

/// `puts(...)`: print each argument's inspection string followed by a
/// newline to standard output. Returns null.
pub(super) fn puts<'a>(args: &[Value<'a>]) -> Value<'a> {
    for arg in args {
        println!("{}", arg);
    }
    Value::NULL
}
