use std::{fs, path::Path};

use quill::{
    check,
    error::{Error, ErrorKind, ParseError},
    get_result,
    interpreter::{
        analyzer::core::analyze,
        evaluator::core::Context,
        parser::core::MAX_NESTING,
        symbol_table::{ScopeId, Symbol},
        value::core::Value,
    },
    parse, run,
};
use walkdir::WalkDir;

#[test]
fn script_examples_work() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/scripts");
    let mut count = 0;

    for entry in
        WalkDir::new(&root).into_iter()
                           .filter_map(Result::ok)
                           .filter(|e| e.path().extension().is_some_and(|ext| ext == "ql"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read {expected_path:?}: {e}")
                                                         });

        count += 1;
        match get_result(&source) {
            Ok(output) => assert_eq!(output, expected, "Output of {path:?} differs"),
            Err(e) => panic!("Script {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No scripts found in {root:?}");
}

fn assert_output(src: &str, expected: &str) {
    match get_result(src) {
        Ok(output) => assert_eq!(output, expected, "Unexpected output for:\n{src}"),
        Err(e) => panic!("Expected success but got error for:\n{src}\nError: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match get_result(src) {
        Ok(output) => panic!("Expected failure but got success for:\n{src}\nOutput: {output}"),
        Err(e) => assert_eq!(e.kind(), kind, "Wrong error category for:\n{src}\nError: {e}"),
    }
}

#[test]
fn arithmetic_precedence() {
    assert_output("print(2 + 3 * 4)", "14\n");
    assert_output("print((2 + 3) * 4)", "20\n");
    assert_output("print(2 * 3 + 4)", "10\n");
    assert_output("print(-(2 + 3) * 2)", "-10\n");
}

#[test]
fn arithmetic_is_left_associative() {
    assert_output("print(10 - 4 - 3)", "3\n");
    assert_output("print(8 / 2 / 2)", "2.0\n");
}

#[test]
fn division_always_yields_float() {
    assert_output("print(4 / 2)", "2.0\n");
    assert_output("a: float = 1 / 4; print(a)", "0.25\n");
    assert_failure("a: int = 4 / 2;", ErrorKind::Type);
}

#[test]
fn mixed_arithmetic_promotes() {
    assert_output("h: float = 1 / 2; print(h + 1)", "1.5\n");
    assert_output("h: float = 1 / 2; print(3 * h)", "1.5\n");
    assert_failure("h: float = 1 / 2; i: int = h + 1;", ErrorKind::Type);
}

#[test]
fn duplicate_declaration_is_rejected() {
    assert_failure("a: int = 1; a: int = 2;", ErrorKind::Declaration);
    assert_failure("a: int = 1; a: str = \"again\";", ErrorKind::Declaration);
}

#[test]
fn undeclared_names_are_rejected() {
    assert_failure("print(b)", ErrorKind::Declaration);
    assert_failure("b = 1", ErrorKind::Declaration);
    assert_failure("a: int = b + 1;", ErrorKind::Declaration);
}

#[test]
fn declared_type_must_match() {
    assert_failure("a: int = \"text\";", ErrorKind::Type);
    assert_failure("a: bool = 1;", ErrorKind::Type);
    assert_failure("a: str = True;", ErrorKind::Type);
    assert_output("a: bool = True; print(a)", "True\n");
}

#[test]
fn reassignment_keeps_the_declared_type() {
    assert_output("a: int = 1; a = a + 1; print(a)", "2\n");
    assert_output("s: str = \"one\"; s = \"two\"; print(s)", "two\n");
    assert_failure("a: int = 1; a = True", ErrorKind::Type);
    assert_failure("a: int = 1; a = 3 / 1", ErrorKind::Type);
}

#[test]
fn operands_must_have_compatible_types() {
    assert_failure("a: str = \"x\"; b: int = a + 1;", ErrorKind::Type);
    assert_failure("a: bool = True; b: int = -a;", ErrorKind::Type);
    assert_failure("s: str = \"a\"; if (s > 1) { print(s) }", ErrorKind::Type);
    assert_failure("t: bool = True; if (1 < t) { print(t) }", ErrorKind::Type);
}

#[test]
fn if_else_runs_one_branch() {
    assert_output("if (1 > 2) { print(\"a\") } else { print(\"b\") }", "b\n");
    assert_output("if (2 > 1) { print(\"a\") } else { print(\"b\") }", "a\n");
    assert_output("if (False) { print(\"a\") }", "");
    assert_output("if (True) { print(\"a\") }", "a\n");
}

#[test]
fn comparisons() {
    assert_output("h: float = 1 / 2; if (h < 1) { print(\"lt\") }", "lt\n");
    assert_output("if (3 > 3) { print(\"gt\") } else { print(\"not gt\") }", "not gt\n");
    assert_output("t: bool = True; if (False < t) { print(\"ordered\") }", "ordered\n");
}

#[test]
fn if_bodies_open_their_own_scope() {
    assert_output("a: int = 1; if (a < 2) { a = a + 1 } print(a)", "2\n");
    assert_output("a: int = 1; if (True) { a: str = \"inner\"; print(a) } print(a)",
                  "inner\n1\n");
    assert_output("a: int = 1; if (False) {} else { a: int = 2; a = a + 1; print(a) } print(a)",
                  "3\n1\n");
    assert_failure("if (True) { inner: int = 5 } print(inner)", ErrorKind::Declaration);
    assert_failure("if (True) { x: int = 1; x: int = 2 }", ErrorKind::Declaration);
}

#[test]
fn branch_declarations_do_not_leak() {
    let source = "if (False) { x: int = 1 } print(x)";
    assert_eq!(check(source).unwrap_err().kind(), ErrorKind::Declaration);
    assert_failure(source, ErrorKind::Declaration);
}

#[test]
fn both_branches_may_declare_the_same_name() {
    assert_output("if (True) { x: int = 1 } else { x: int = 2 }", "");
    assert_output("if (False) { x: int = 1; print(x) } else { x: str = \"two\"; print(x) }",
                  "two\n");
    assert_output("if (True) { if (True) { x: int = 1; print(x) } x: int = 2; print(x) }",
                  "1\n2\n");
}

#[test]
fn brace_terminated_statements_need_no_separator() {
    assert_output("if (True) { print(1) }", "1\n");
    assert_output("func f(x: int) { print(x) }", "");
    assert_output("if (True) { print(1) } print(2)", "1\n2\n");
    assert_output("func f() {} print(2);", "2\n");
}

#[test]
fn missing_separator_is_a_syntax_error() {
    assert_failure("a: int = 1 print(a)", ErrorKind::Syntax);
    assert!(matches!(parse("print(1) print(2)"),
                     Err(ParseError::MissingSeparator { line: 1, .. })));
}

#[test]
fn syntax_errors() {
    assert_failure("print(1", ErrorKind::Syntax);
    assert_failure("a int = 1", ErrorKind::Syntax);
    assert_failure("if (1) { print(1) }", ErrorKind::Syntax);
    assert_failure("if (True) print(1)", ErrorKind::Syntax);
    assert_failure("a: int = (1 + 2;", ErrorKind::Syntax);
    assert_failure("a: int = 1 +;", ErrorKind::Syntax);
    assert_failure("func (a: int) {}", ErrorKind::Syntax);
    assert_failure("}", ErrorKind::Syntax);
}

#[test]
fn deep_nesting_is_a_syntax_error() {
    let negations = format!("print({}1)", "-".repeat(200_000));
    assert_failure(&negations, ErrorKind::Syntax);
    assert!(matches!(parse(&negations),
                     Err(ParseError::NestingTooDeep { limit: MAX_NESTING,
                                                      line:  1, })));

    let parens = format!("print({}1{})", "(".repeat(100_000), ")".repeat(100_000));
    assert_failure(&parens, ErrorKind::Syntax);

    let blocks = format!("{}{}", "if (True) {".repeat(10_000), "}".repeat(10_000));
    assert_failure(&blocks, ErrorKind::Syntax);
}

#[test]
fn moderate_nesting_parses() {
    assert_output(&format!("print({}1)", "- ".repeat(64)), "1\n");
    assert_output(&format!("print({}7{})", "(".repeat(64), ")".repeat(64)), "7\n");
    assert_output(&format!("{}print(1){}", "if (True) {".repeat(32), "}".repeat(32)),
                  "1\n");
}

#[test]
fn empty_statements_are_allowed() {
    assert_output("", "");
    assert_output(";;print(1);;", "1\n");
    assert_output("if (True) {} else {}", "");
}

#[test]
fn comments_are_skipped() {
    assert_output("/* hello\n world */ print(1) /* trailing */", "1\n");
    assert_output("print(2 /* inline */ * 3)", "6\n");
}

#[test]
fn lexical_errors_surface_through_the_pipeline() {
    assert_failure("a: float = 1.5;", ErrorKind::Lexical);
    assert_failure("print(\"abc", ErrorKind::Lexical);
    assert_failure("print(1) /* never closed", ErrorKind::Lexical);
    assert_failure("a: int = 1 $ 2;", ErrorKind::Lexical);
    assert_failure("a: int = 99999999999999999999;", ErrorKind::Lexical);

    let err = check("a: int = 1 $ 2;").unwrap_err();
    assert!(matches!(&err, Error::Parse(ParseError::Lexical(lexical)) if lexical.fragment == "$"),
            "{err:?}");
    assert_eq!(err.kind(), ErrorKind::Lexical);
    assert_eq!(err.to_string(),
               "Error on line 1: LexicalError: unrecognized character: '$'.");
}

#[test]
fn arithmetic_errors() {
    assert_failure("a: int = 0; print(1 / a)", ErrorKind::Arithmetic);
    assert_failure("a: int = 9223372036854775807; b: int = a + 1;", ErrorKind::Arithmetic);
    assert_failure("a: int = 0 - 9223372036854775807 - 1; b: int = -a;", ErrorKind::Arithmetic);
    assert_failure("a: int = 9007199254740993; b: float = a / 1;", ErrorKind::Arithmetic);
}

#[test]
fn functions_are_declared_not_run() {
    assert_output("func f() { print(1) } print(2)", "2\n");
    assert_failure("func f() { print(missing) }", ErrorKind::Declaration);
    assert_failure("func f(a: int) { b: str = a }", ErrorKind::Type);
}

#[test]
fn function_scopes() {
    // Shadowing an outer name inside a body is fine.
    assert_output("x: int = 1; func f(y: int) { x: str = \"inner\"; print(x) } print(x)",
                  "1\n");
    // Outer names are visible inside a body.
    assert_output("a: int = 1; func f() { b: int = a + 1 }", "");
    // Parameters are not visible outside.
    assert_failure("func f(p: int) {} print(p)", ErrorKind::Declaration);
    assert_failure("func f(a: int, a: int) {}", ErrorKind::Declaration);
    assert_failure("func f(a: int) { a: int = 2 }", ErrorKind::Declaration);
    assert_failure("func f() {} func f() {}", ErrorKind::Declaration);
}

#[test]
fn function_names_are_not_values() {
    assert_failure("func f() {} a: int = f;", ErrorKind::Type);
    assert_failure("func f() {} f = 1", ErrorKind::Type);
}

#[test]
fn errors_report_their_line() {
    let err = get_result("a: int = 1;\nprint(b)").unwrap_err();
    assert_eq!(err.to_string(),
               "Error on line 2: DeclarationError: Variable not defined: 'b'.");

    let err = get_result("a: int = 1;\n\nb: int = \"x\";").unwrap_err();
    assert!(err.to_string().starts_with("Error on line 3: TypeError"), "{err}");
}

#[test]
fn nothing_runs_when_analysis_fails() {
    let mut out = Vec::new();
    let err = run("print(1); print(missing)", &mut out).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Declaration);
    assert!(out.is_empty());
}

#[test]
fn output_before_a_runtime_error_is_kept() {
    let mut out = Vec::new();
    let err = run("print(1); a: int = 0; print(1 / a)", &mut out).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Arithmetic);
    assert_eq!(out, b"1\n");
}

#[test]
fn function_scope_frames() {
    let program = parse("x: int = 1; func f(y: int) { print(x); print(y) }").unwrap();
    let scopes = analyze(&program).unwrap();

    let (scope, body) = match scopes.lookup_local(ScopeId::GLOBAL, "f") {
        Some(Symbol::Function(function)) => (function.scope, function.body),
        other => panic!("expected a function symbol, found {other:?}"),
    };

    let mut out = Vec::new();
    let mut context = Context::new(scopes, &mut out);
    context.run(&program).unwrap();

    context.enter_scope(scope);
    context.declare_variable("y", Value::Integer(5));
    context.run(body).unwrap();
    assert_eq!(context.get_variable("y", 1).unwrap(), &Value::Integer(5));

    context.leave_scope();
    assert_eq!(context.current_scope(), ScopeId::GLOBAL);
    assert!(context.get_variable("y", 1).is_err());
    assert_eq!(context.get_variable("x", 1).unwrap(), &Value::Integer(1));

    drop(context);
    assert_eq!(String::from_utf8(out).unwrap(), "1\n5\n");
}
