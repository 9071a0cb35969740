use std::collections::HashMap;

use crate::{ast::Block, interpreter::value::type_tag::TypeTag};

/// Index of a scope inside a [`ScopeTree`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

impl ScopeId {
    /// The global scope, created with every tree.
    pub const GLOBAL: Self = Self(0);

    /// The position of the scope in its tree.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A declared variable or parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarSymbol {
    /// The variable name.
    pub name:     String,
    /// The declared type.
    pub type_tag: TypeTag,
}

/// A declared function.
///
/// Borrows its body from the AST and records the scope created for it, so
/// later passes can walk the body against the same bindings.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSymbol<'ast> {
    /// The function name.
    pub name:   String,
    /// Parameters in declaration order.
    pub params: Vec<VarSymbol>,
    /// The function body.
    pub body:   &'ast Block,
    /// The scope holding the parameters and the body's declarations.
    pub scope:  ScopeId,
}

/// Anything a name can be bound to.
#[derive(Debug, Clone, PartialEq)]
pub enum Symbol<'ast> {
    /// A variable.
    Var(VarSymbol),
    /// A function.
    Function(FunctionSymbol<'ast>),
}

impl Symbol<'_> {
    /// The bound name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Var(var) => &var.name,
            Self::Function(function) => &function.name,
        }
    }
}

/// One binding context: a name table and a link to its enclosing scope.
#[derive(Debug)]
pub struct Scope<'ast> {
    symbols: HashMap<String, Symbol<'ast>>,
    /// Nesting depth; the global scope is level 1.
    pub level:  usize,
    /// A label for diagnostics: `global`, the function name, `if` or `else`.
    pub name:   String,
    /// The enclosing scope. `None` only for the global scope.
    pub parent: Option<ScopeId>,
}

impl<'ast> Scope<'ast> {
    /// Looks up a name bound directly in this scope.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Symbol<'ast>> {
        self.symbols.get(name)
    }

    /// Iterates over the symbols bound in this scope, in no particular order.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol<'ast>> {
        self.symbols.values()
    }
}

/// Arena of every scope in a program.
///
/// Scopes are never removed, so a [`ScopeId`] stays valid for the life of the
/// tree. Built by the semantic analyzer and read by the evaluator, which finds
/// the scope of an `if` or `else` body through [`ScopeTree::block_scope`].
///
/// # Example
/// ```
/// use quill::interpreter::{
///     symbol_table::{ScopeId, ScopeTree, Symbol, VarSymbol},
///     value::type_tag::TypeTag,
/// };
///
/// let mut scopes = ScopeTree::new();
/// let x = Symbol::Var(VarSymbol { name:     "x".to_string(),
///                                 type_tag: TypeTag::Int, });
/// assert!(scopes.insert(ScopeId::GLOBAL, x.clone()));
/// assert!(!scopes.insert(ScopeId::GLOBAL, x));
///
/// let inner = scopes.push_scope(ScopeId::GLOBAL, "f");
/// assert_eq!(scopes.get(inner).level, 2);
/// assert_eq!(scopes.lookup(inner, "x").map(|(id, _)| id), Some(ScopeId::GLOBAL));
/// assert!(scopes.lookup_local(inner, "x").is_none());
/// ```
#[derive(Debug)]
pub struct ScopeTree<'ast> {
    scopes: Vec<Scope<'ast>>,
    /// Scopes opened for blocks, keyed by the block's address in the AST.
    blocks: HashMap<*const Block, ScopeId>,
}

impl Default for ScopeTree<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'ast> ScopeTree<'ast> {
    /// Creates a tree holding only the empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes: vec![Scope { symbols: HashMap::new(),
                                    level:   1,
                                    name:    "global".to_string(),
                                    parent:  None, }],
               blocks: HashMap::new(), }
    }

    /// Adds a child scope of `parent` and returns its id.
    pub fn push_scope(&mut self, parent: ScopeId, name: &str) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        let level = self.get(parent).level + 1;
        self.scopes.push(Scope { symbols: HashMap::new(),
                                 level,
                                 name: name.to_string(),
                                 parent: Some(parent) });
        id
    }

    /// Records `scope` as the scope opened for `block`.
    ///
    /// The `'ast` borrow keeps the block in place for as long as the tree
    /// lives, so its address identifies it.
    pub fn bind_block(&mut self, block: &'ast Block, scope: ScopeId) {
        self.blocks.insert(std::ptr::from_ref(block), scope);
    }

    /// The scope opened for `block`, if analysis gave it one.
    #[must_use]
    pub fn block_scope(&self, block: &Block) -> Option<ScopeId> {
        self.blocks.get(&std::ptr::from_ref(block)).copied()
    }

    /// Binds a symbol in `scope`.
    ///
    /// Returns `false`, leaving the scope unchanged, if the name is already
    /// bound there.
    pub fn insert(&mut self, scope: ScopeId, symbol: Symbol<'ast>) -> bool {
        let symbols = &mut self.scopes[scope.0].symbols;
        if symbols.contains_key(symbol.name()) {
            return false;
        }
        symbols.insert(symbol.name().to_string(), symbol);
        true
    }

    /// Finds the nearest binding of `name`, starting at `scope` and walking
    /// outward. Returns the binding scope together with the symbol.
    #[must_use]
    pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<(ScopeId, &Symbol<'ast>)> {
        self.ancestors(scope)
            .find_map(|id| self.get(id).get(name).map(|symbol| (id, symbol)))
    }

    /// Finds a binding of `name` in `scope` only.
    #[must_use]
    pub fn lookup_local(&self, scope: ScopeId, name: &str) -> Option<&Symbol<'ast>> {
        self.get(scope).get(name)
    }

    /// Iterates from `scope` up to the global scope, inclusive.
    pub fn ancestors(&self, scope: ScopeId) -> impl Iterator<Item = ScopeId> + '_ {
        std::iter::successors(Some(scope), |id| self.get(*id).parent)
    }

    /// Returns the scope with the given id.
    ///
    /// # Panics
    /// If `id` was not issued by this tree.
    #[must_use]
    pub fn get(&self, id: ScopeId) -> &Scope<'ast> {
        &self.scopes[id.0]
    }

    /// The number of scopes, including the global one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Always `false`: a tree has at least the global scope.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}
