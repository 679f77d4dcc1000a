//! Callable registry.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use clue_ir::{CallableDef, Name};

/// User-defined callables by name. Redefinition replaces the old entry.
#[derive(Clone, Debug, Default)]
pub struct CallableRegistry {
    defs: FxHashMap<Name, Arc<CallableDef>>,
}

impl CallableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `def`, returning the definition it replaced, if any.
    pub fn define(&mut self, def: Arc<CallableDef>) -> Option<Arc<CallableDef>> {
        self.defs.insert(def.name, def)
    }

    pub fn get(&self, name: Name) -> Option<&Arc<CallableDef>> {
        self.defs.get(&name)
    }

    pub fn contains(&self, name: Name) -> bool {
        self.defs.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}
