use quill::{
    ast::Statement,
    error::SemanticError,
    interpreter::{
        analyzer::core::analyze,
        symbol_table::{ScopeId, Symbol, VarSymbol},
        value::type_tag::TypeTag,
    },
    parse,
};

fn var(name: &str, type_tag: TypeTag) -> Symbol<'static> {
    Symbol::Var(VarSymbol { name: name.to_string(),
                            type_tag })
}

#[test]
fn global_declarations_are_recorded() {
    let program = parse("a: int = 1; b: float = a / 2; c: str = \"c\";").unwrap();
    let scopes = analyze(&program).unwrap();

    assert_eq!(scopes.len(), 1);
    let global = scopes.get(ScopeId::GLOBAL);
    assert_eq!(global.level, 1);
    assert_eq!(global.parent, None);
    assert_eq!(global.name, "global");

    assert_eq!(global.get("a"), Some(&var("a", TypeTag::Int)));
    assert_eq!(global.get("b"), Some(&var("b", TypeTag::Float)));
    assert_eq!(global.get("c"), Some(&var("c", TypeTag::Str)));
    assert_eq!(global.symbols().count(), 3);
}

#[test]
fn function_declarations_open_a_scope() {
    let program = parse("x: int = 1;\nfunc area(w: int, h: int) { size: int = w * h }").unwrap();
    let scopes = analyze(&program).unwrap();
    assert_eq!(scopes.len(), 2);

    let Some(Symbol::Function(area)) = scopes.lookup_local(ScopeId::GLOBAL, "area") else {
        panic!("'area' should be a function");
    };
    assert_eq!(area.params,
               [VarSymbol { name:     "w".to_string(),
                            type_tag: TypeTag::Int, },
                VarSymbol { name:     "h".to_string(),
                            type_tag: TypeTag::Int, }]);
    assert_eq!(area.body.statements.len(), 1);

    let body = scopes.get(area.scope);
    assert_eq!(body.level, 2);
    assert_eq!(body.name, "area");
    assert_eq!(body.parent, Some(ScopeId::GLOBAL));
    assert_eq!(body.get("size"), Some(&var("size", TypeTag::Int)));
    assert_eq!(body.get("w"), Some(&var("w", TypeTag::Int)));

    // Body names stay out of the global scope; global names are reachable
    // from the body.
    assert!(scopes.lookup(ScopeId::GLOBAL, "size").is_none());
    assert_eq!(scopes.lookup(area.scope, "x").map(|(id, _)| id), Some(ScopeId::GLOBAL));
    assert_eq!(scopes.ancestors(area.scope).collect::<Vec<_>>(),
               [area.scope, ScopeId::GLOBAL]);
}

#[test]
fn shadowing_resolves_to_the_nearest_scope() {
    let program = parse("n: int = 1; func f() { n: str = \"inner\" }").unwrap();
    let scopes = analyze(&program).unwrap();

    let Some(Symbol::Function(f)) = scopes.lookup_local(ScopeId::GLOBAL, "f") else {
        panic!("'f' should be a function");
    };
    assert_eq!(scopes.lookup(f.scope, "n"), Some((f.scope, &var("n", TypeTag::Str))));
    assert_eq!(scopes.lookup(ScopeId::GLOBAL, "n"),
               Some((ScopeId::GLOBAL, &var("n", TypeTag::Int))));
}

#[test]
fn if_blocks_open_scopes() {
    let program = parse("n: int = 1; if (True) { a: int = n } else { a: bool = False }").unwrap();
    let scopes = analyze(&program).unwrap();
    assert_eq!(scopes.len(), 3);

    let Statement::If { then_block,
                        else_block: Some(else_block),
                        .. } = &program.statements[1]
    else {
        panic!("expected an if/else statement");
    };
    let then_scope = scopes.block_scope(then_block).unwrap();
    let else_scope = scopes.block_scope(else_block).unwrap();
    assert_ne!(then_scope, else_scope);

    for (scope, name) in [(then_scope, "if"), (else_scope, "else")] {
        let branch = scopes.get(scope);
        assert_eq!(branch.level, 2);
        assert_eq!(branch.name, name);
        assert_eq!(branch.parent, Some(ScopeId::GLOBAL));
    }
    assert_eq!(scopes.lookup_local(then_scope, "a"), Some(&var("a", TypeTag::Int)));
    assert_eq!(scopes.lookup_local(else_scope, "a"), Some(&var("a", TypeTag::Bool)));
    assert!(scopes.lookup_local(ScopeId::GLOBAL, "a").is_none());
    assert_eq!(scopes.lookup(then_scope, "n").map(|(id, _)| id), Some(ScopeId::GLOBAL));

    // The top-level block and function bodies are not branch blocks.
    assert_eq!(scopes.block_scope(&program), None);
}

#[test]
fn branch_scopes_nest_inside_functions() {
    let program = parse("func f(p: int) { if (p > 0) { q: int = p } }").unwrap();
    let scopes = analyze(&program).unwrap();
    assert_eq!(scopes.len(), 3);

    let Some(Symbol::Function(f)) = scopes.lookup_local(ScopeId::GLOBAL, "f") else {
        panic!("'f' should be a function");
    };
    let Statement::If { then_block, .. } = &f.body.statements[0] else {
        panic!("expected an if statement");
    };
    let branch = scopes.block_scope(then_block).unwrap();
    assert_eq!(scopes.get(branch).level, 3);
    assert_eq!(scopes.ancestors(branch).collect::<Vec<_>>(),
               [branch, f.scope, ScopeId::GLOBAL]);
    assert!(scopes.lookup_local(f.scope, "q").is_none());
}

#[test]
fn names_declared_in_a_branch_stay_there() {
    let program = parse("if (False) { x: int = 1 } print(x)").unwrap();
    assert_eq!(analyze(&program).unwrap_err(),
               SemanticError::UndefinedVariable { name: "x".to_string(),
                                                  line: 1, });
}

#[test]
fn nested_function_scopes() {
    let program = parse("func outer() { func inner(v: bool) { w: bool = v } }").unwrap();
    let scopes = analyze(&program).unwrap();
    assert_eq!(scopes.len(), 3);

    let Some(Symbol::Function(outer)) = scopes.lookup_local(ScopeId::GLOBAL, "outer") else {
        panic!("'outer' should be a function");
    };
    let Some(Symbol::Function(inner)) = scopes.lookup_local(outer.scope, "inner") else {
        panic!("'inner' should be declared inside 'outer'");
    };
    assert_eq!(scopes.get(inner.scope).level, 3);
    assert_eq!(scopes.get(inner.scope).parent, Some(outer.scope));
}

#[test]
fn semantic_errors() {
    let error = |source: &str| analyze(&parse(source).unwrap()).unwrap_err();

    assert_eq!(error("a: int = 1;\na: int = 2;"),
               SemanticError::DuplicateDeclaration { name: "a".to_string(),
                                                     line: 2, });
    assert_eq!(error("print(ghost)"),
               SemanticError::UndefinedVariable { name: "ghost".to_string(),
                                                  line: 1, });
    assert_eq!(error("a: int = \"text\";"),
               SemanticError::InvalidAssignment { name:     "a".to_string(),
                                                  declared: TypeTag::Int,
                                                  found:    TypeTag::Str,
                                                  line:     1, });
    assert_eq!(error("s: str = \"s\"; t: str = s * 2;"),
               SemanticError::InvalidOperands { op:    "*".to_string(),
                                                left:  TypeTag::Str,
                                                right: TypeTag::Int,
                                                line:  1, });
    assert_eq!(error("func g() {} print(g)"),
               SemanticError::NotAVariable { name: "g".to_string(),
                                             line: 1, });
    assert!(error("func f(p: int, p: bool) {}").is_declaration_error());
    assert!(!error("b: bool = True; c: int = -b;").is_declaration_error());
}

#[test]
fn declaration_type_is_checked_before_duplicates() {
    let program = parse("a: int = 1; a: str = 2;").unwrap();
    assert!(matches!(analyze(&program),
                     Err(SemanticError::InvalidAssignment { found: TypeTag::Int, .. })));
}
