use std::collections::HashMap;

use tracing::trace;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        symbol_table::ScopeId,
        value::core::Value,
    },
};

/// The values bound in one entered scope.
#[derive(Debug)]
pub struct Frame {
    /// The scope this frame holds values for.
    pub scope:  ScopeId,
    /// Bound values, by name.
    pub values: HashMap<String, Value>,
}

impl Frame {
    /// Creates an empty frame for `scope`.
    #[must_use]
    pub fn new(scope: ScopeId) -> Self {
        Self { scope,
               values: HashMap::new() }
    }
}

impl Context<'_, '_> {
    /// The scope of the innermost frame.
    #[must_use]
    pub const fn current_scope(&self) -> ScopeId {
        self.current
    }

    /// Pushes an empty frame for `scope` and makes it current.
    ///
    /// `scope` must come from this context's scope tree; names are then
    /// resolved from `scope` outward along the tree.
    pub fn enter_scope(&mut self, scope: ScopeId) {
        trace!(scope = scope.index(), "entering scope");
        self.frames.push(Frame::new(scope));
        self.current = scope;
    }

    /// Pops the innermost frame. The global frame is never popped.
    pub fn leave_scope(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
        self.current = self.frames
                           .last()
                           .map_or(ScopeId::GLOBAL, |frame| frame.scope);
    }

    /// Looks up the value bound to `name`.
    ///
    /// Walks from the current scope to the global scope; in each, the most
    /// recently entered frame for that scope is consulted.
    ///
    /// # Errors
    /// [`RuntimeError::UnboundName`] if no frame on the chain binds the name.
    pub fn get_variable(&self, name: &str, line: usize) -> EvalResult<&Value> {
        self.scopes
            .ancestors(self.current)
            .find_map(|scope| self.frame_index(scope).and_then(|i| self.frames[i].values.get(name)))
            .ok_or_else(|| RuntimeError::UnboundName { name: name.to_string(),
                                                       line })
    }

    /// Binds `name` in the current frame, replacing any previous value there.
    pub fn declare_variable(&mut self, name: &str, value: Value) {
        trace!(name, %value, "bind");
        if let Some(frame) = self.frames.last_mut() {
            frame.values.insert(name.to_string(), value);
        }
    }

    /// Updates the nearest existing binding of `name`.
    ///
    /// # Errors
    /// [`RuntimeError::UnboundName`] if no frame on the chain binds the name.
    pub fn assign_variable(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        let index = self.scopes
                        .ancestors(self.current)
                        .filter_map(|scope| self.frame_index(scope))
                        .find(|&i| self.frames[i].values.contains_key(name));

        let Some(index) = index else {
            return Err(RuntimeError::UnboundName { name: name.to_string(),
                                                   line });
        };

        trace!(name, %value, "update");
        self.frames[index].values.insert(name.to_string(), value);
        Ok(())
    }

    /// The index of the most recent frame for `scope`.
    fn frame_index(&self, scope: ScopeId) -> Option<usize> {
        self.frames.iter().rposition(|frame| frame.scope == scope)
    }
}
