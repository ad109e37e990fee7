// ABOUTME: Environment frames for variable bindings with parent chaining

use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// One binding frame. Lookup walks the parent chain; binds land either here
/// (`put`) or in the root frame (`def`). The parent link is interior-mutable
/// because a lambda's frame is reparented onto the caller at call time.
#[derive(Debug, Default)]
pub struct Environment {
    bindings: RefCell<HashMap<String, Value>>,
    parent: RefCell<Option<Rc<Environment>>>,
}

impl Environment {
    /// Creates a root frame with no parent.
    pub fn new() -> Rc<Self> {
        Rc::new(Environment::default())
    }

    /// Looks up a symbol here, then up the parent chain. The result is a
    /// copy; the first match wins.
    pub fn get(&self, name: &str) -> Value {
        if let Some(value) = self.bindings.borrow().get(name) {
            return value.clone();
        }
        match &*self.parent.borrow() {
            Some(parent) => parent.get(name),
            None => Value::error(format!("unbound Symbol '{}'", name)),
        }
    }

    /// Binds in THIS frame; a duplicate name rebinds in place.
    pub fn put(&self, name: String, value: Value) {
        self.bindings.borrow_mut().insert(name, value);
    }

    /// Binds in the root frame, reached by walking the parent chain.
    pub fn def(self: &Rc<Self>, name: String, value: Value) {
        let mut frame = Rc::clone(self);
        loop {
            let parent = frame.parent.borrow().clone();
            match parent {
                Some(p) => frame = p,
                None => break,
            }
        }
        frame.put(name, value);
    }

    /// Hangs this frame under `parent` for the duration of a call.
    pub fn set_parent(&self, parent: Rc<Environment>) {
        *self.parent.borrow_mut() = Some(parent);
    }

    /// Clones the bindings into a fresh frame. The parent pointer is shared,
    /// not deep-copied.
    pub fn copy_frame(&self) -> Rc<Environment> {
        let copy = Environment::default();
        *copy.bindings.borrow_mut() = self.bindings.borrow().clone();
        *copy.parent.borrow_mut() = self.parent.borrow().clone();
        Rc::new(copy)
    }
}
