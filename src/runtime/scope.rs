//! Name resolution: global scopes and function frames.
//!
//! [`Scope`] is a chain of symbol tables searched innermost first; a name that
//! no table binds is an unresolved reference. [`Frame`] models a function's
//! locals, whose names are all known up front but whose slots only fill when an
//! assignment actually executes.

use std::collections::BTreeMap;

use crate::runtime::Value;
use crate::types::Fault;

/// Symbol table with an optional enclosing scope.
#[derive(Debug, Default)]
pub struct Scope<'p> {
    bindings: BTreeMap<String, Value>,
    parent: Option<&'p Scope<'p>>,
}

impl<'p> Scope<'p> {
    /// Creates an empty outermost scope.
    pub fn new() -> Self {
        Self { bindings: BTreeMap::new(), parent: None }
    }

    /// Creates an empty scope nested inside `self`.
    pub fn child(&'p self) -> Scope<'p> {
        Scope { bindings: BTreeMap::new(), parent: Some(self) }
    }

    pub fn bind(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Resolves `name` in this scope or any enclosing one.
    pub fn lookup(&self, name: &str) -> Result<&Value, Fault> {
        let mut scope = Some(self);
        while let Some(current) = scope {
            if let Some(value) = current.bindings.get(name) {
                return Ok(value);
            }
            scope = current.parent;
        }
        Err(Fault::UnresolvedReference { name: name.to_string() })
    }
}

/// Local slots of a single call.
#[derive(Debug)]
pub struct Frame {
    slots: Vec<(&'static str, Option<Value>)>,
}

impl Frame {
    /// Declares `names` as locals, all initially unset.
    pub fn declare(names: &[&'static str]) -> Self {
        Self { slots: names.iter().map(|name| (*name, None)).collect() }
    }

    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), Fault> {
        let slot = self.slot_mut(name)?;
        *slot = Some(value);
        Ok(())
    }

    /// Reads a local. Declared-but-unassigned is [`Fault::UnsetLocal`];
    /// undeclared is [`Fault::UnresolvedReference`].
    pub fn load(&self, name: &str) -> Result<&Value, Fault> {
        match self.slots.iter().find(|(slot, _)| *slot == name) {
            Some((_, Some(value))) => Ok(value),
            Some((_, None)) => Err(Fault::UnsetLocal { name: name.to_string() }),
            None => Err(Fault::UnresolvedReference { name: name.to_string() }),
        }
    }

    fn slot_mut(&mut self, name: &str) -> Result<&mut Option<Value>, Fault> {
        self.slots
            .iter_mut()
            .find(|(slot, _)| *slot == name)
            .map(|(_, value)| value)
            .ok_or_else(|| Fault::UnresolvedReference { name: name.to_string() })
    }
}
