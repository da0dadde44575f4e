//! Lexically scoped environments.
//!
//! An environment maps names to values and optionally points at an
//! enclosing environment; lookups walk outward until the chain is
//! exhausted. Environments are shared, reference-counted nodes: several
//! closures may capture the same frame, and a frame outlives every
//! closure that captured it. No cycle is constructible through user
//! code, since a function literal captures only the environment that
//! already existed when the literal was evaluated.

use super::Value;
use hashbrown::HashMap;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to an environment frame.
pub type Env<'a> = Rc<RefCell<Environment<'a>>>;

#[derive(Debug)]
pub struct Environment<'a> {
    store: HashMap<&'a str, Value<'a>>,
    outer: Option<Env<'a>>,
}

impl<'a> Environment<'a> {
    /// Create an empty root environment.
    pub fn new() -> Env<'a> {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: None,
        }))
    }

    /// Create a child environment whose lookups fall through to `outer`.
    pub fn new_enclosed(outer: Env<'a>) -> Env<'a> {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: Some(outer),
        }))
    }

    /// Look up a name, walking outward through the chain.
    pub fn get(&self, name: &str) -> Option<Value<'a>> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self
                .outer
                .as_ref()
                .and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Bind a name in this frame, overwriting any existing binding here.
    /// Bindings in outer frames are shadowed, never modified.
    pub fn set(&mut self, name: &'a str, value: Value<'a>) {
        self.store.insert(name, value);
    }
}
