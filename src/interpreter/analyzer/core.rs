use tracing::trace;

use crate::{
    ast::{Block, Expr, FunctionDef, Statement},
    error::SemanticError,
    interpreter::{
        symbol_table::{FunctionSymbol, ScopeId, ScopeTree, Symbol, VarSymbol},
        value::type_tag::TypeTag,
    },
};

pub type AnalysisResult<T> = Result<T, SemanticError>;

/// Walks a program once, building its scope tree and checking every name and
/// type on the way.
pub struct Analyzer<'ast> {
    pub(super) scopes:  ScopeTree<'ast>,
    pub(super) current: ScopeId,
}

/// Checks a parsed program and returns its scope tree.
///
/// # Example
/// ```
/// use quill::{
///     interpreter::{analyzer::core::analyze, symbol_table::ScopeId},
///     parse,
/// };
///
/// let program = parse("x: int = 1; func f(y: int) { z: float = y / 2 }").unwrap();
/// let scopes = analyze(&program).unwrap();
///
/// assert_eq!(scopes.len(), 2);
/// assert!(scopes.lookup_local(ScopeId::GLOBAL, "f").is_some());
/// ```
///
/// # Errors
/// The first declaration or type error, in source order.
pub fn analyze(program: &Block) -> AnalysisResult<ScopeTree<'_>> {
    let mut analyzer = Analyzer::new();
    analyzer.visit_block(program)?;
    Ok(analyzer.scopes)
}

impl Default for Analyzer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'ast> Analyzer<'ast> {
    /// Creates an analyzer positioned in a fresh global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes:  ScopeTree::new(),
               current: ScopeId::GLOBAL, }
    }

    /// Checks each statement of a block in order, in the current scope.
    ///
    /// # Errors
    /// The first error found.
    pub fn visit_block(&mut self, block: &'ast Block) -> AnalysisResult<()> {
        block.statements
             .iter()
             .try_for_each(|statement| self.visit_statement(statement))
    }

    /// Checks a single statement.
    ///
    /// # Errors
    /// The first error found in the statement.
    pub fn visit_statement(&mut self, statement: &'ast Statement) -> AnalysisResult<()> {
        match statement {
            Statement::Assign { name,
                                declared_type: Some(declared),
                                value,
                                line, } => self.declare(name, *declared, value, *line),
            Statement::Assign { name,
                                declared_type: None,
                                value,
                                line, } => self.reassign(name, value, *line),
            Statement::If { condition,
                            then_block,
                            else_block,
                            .. } => {
                self.type_of(condition)?;
                self.visit_branch(then_block, "if")?;
                if let Some(block) = else_block {
                    self.visit_branch(block, "else")?;
                }
                Ok(())
            },
            Statement::FuncDecl(function) => self.declare_function(function),
            Statement::Print { expr, .. } => self.type_of(expr).map(|_| ()),
            Statement::Empty => Ok(()),
        }
    }

    /// `name: declared = value`
    fn declare(&mut self,
               name: &str,
               declared: TypeTag,
               value: &Expr,
               line: usize)
               -> AnalysisResult<()> {
        let found = self.type_of(value)?;
        if found != declared {
            return Err(SemanticError::InvalidAssignment { name: name.to_string(),
                                                          declared,
                                                          found,
                                                          line });
        }

        self.bind(Symbol::Var(VarSymbol { name:     name.to_string(),
                                          type_tag: declared, }),
                  line)?;
        trace!(name, %declared, scope = self.current.index(), "declared variable");
        Ok(())
    }

    /// `name = value`
    fn reassign(&self, name: &str, value: &Expr, line: usize) -> AnalysisResult<()> {
        let declared = self.variable_type(name, line)?;
        let found = self.type_of(value)?;

        if found != declared {
            return Err(SemanticError::InvalidAssignment { name: name.to_string(),
                                                          declared,
                                                          found,
                                                          line });
        }
        Ok(())
    }

    /// Binds the function in the current scope, then checks its body in a new
    /// child scope holding the parameters.
    fn declare_function(&mut self, function: &'ast FunctionDef) -> AnalysisResult<()> {
        let params: Vec<VarSymbol> = function.params
                                             .iter()
                                             .map(|param| VarSymbol { name:     param.name.clone(),
                                                                      type_tag: param.type_tag, })
                                             .collect();

        let scope = self.scopes.push_scope(self.current, &function.name);
        self.bind(Symbol::Function(FunctionSymbol { name: function.name.clone(),
                                                    params: params.clone(),
                                                    body: &function.body,
                                                    scope }),
                  function.line)?;
        trace!(name = %function.name, scope = scope.index(), "entering function scope");

        let enclosing = std::mem::replace(&mut self.current, scope);
        let result = function.params
                             .iter()
                             .zip(params)
                             .try_for_each(|(param, symbol)| self.bind(Symbol::Var(symbol), param.line))
                             .and_then(|()| self.visit_block(&function.body));
        self.current = enclosing;

        result
    }

    /// Checks an `if` or `else` body in a new child scope of the current one.
    fn visit_branch(&mut self, block: &'ast Block, name: &str) -> AnalysisResult<()> {
        let scope = self.scopes.push_scope(self.current, name);
        self.scopes.bind_block(block, scope);
        trace!(name, scope = scope.index(), "entering block scope");

        let enclosing = std::mem::replace(&mut self.current, scope);
        let result = self.visit_block(block);
        self.current = enclosing;

        result
    }

    /// Binds a symbol in the current scope.
    fn bind(&mut self, symbol: Symbol<'ast>, line: usize) -> AnalysisResult<()> {
        let name = symbol.name().to_string();
        if self.scopes.insert(self.current, symbol) {
            Ok(())
        } else {
            Err(SemanticError::DuplicateDeclaration { name, line })
        }
    }

    /// Resolves `name` through the scope chain and returns its variable type.
    ///
    /// # Errors
    /// `UndefinedVariable` if nothing binds the name, `NotAVariable` if it
    /// names a function.
    pub(super) fn variable_type(&self, name: &str, line: usize) -> AnalysisResult<TypeTag> {
        match self.scopes.lookup(self.current, name) {
            Some((_, Symbol::Var(var))) => Ok(var.type_tag),
            Some((_, Symbol::Function(_))) => Err(SemanticError::NotAVariable { name: name.to_string(),
                                                                                 line }),
            None => Err(SemanticError::UndefinedVariable { name: name.to_string(),
                                                           line }),
        }
    }
}
