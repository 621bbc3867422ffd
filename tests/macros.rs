use monkey::{
    Interpreter,
    ast::{Expr, Program},
    error::MacroError,
    interpreter::{
        evaluator::evaluate,
        macro_expander::{define_macros, expand_macros},
        object::{Environment, Object, ObjectType},
        parser::parse,
    },
};

fn parse_ok(source: &str) -> Program {
    let (program, errors) = parse(source);
    assert!(errors.is_empty(), "parser had errors for {source:?}: {errors:?}");
    program
}

fn quoted(source: &str) -> String {
    match evaluate(&parse_ok(source), &Environment::new()) {
        Object::Quote(node) => node.to_string(),
        other => panic!("expected a quote for {source:?}, got {other}"),
    }
}

fn expand(source: &str) -> Result<Program, MacroError> {
    let mut program = parse_ok(source);
    let env = Environment::new();

    define_macros(&mut program, &env);
    expand_macros(program, &env)
}

#[test]
fn quote_keeps_its_argument_unevaluated() {
    let cases = [("quote(5)", "5"),
                 ("quote(5 + 8)", "(5 + 8)"),
                 ("quote(foobar)", "foobar"),
                 ("quote(foobar + barfoo)", "(foobar + barfoo)")];

    for (source, expected) in cases {
        assert_eq!(quoted(source), expected, "source: {source}");
    }
}

#[test]
fn unquote_splices_evaluated_values() {
    let cases = [("quote(unquote(4))", "4"),
                 ("quote(unquote(4 + 4))", "8"),
                 ("quote(8 + unquote(4 + 4))", "(8 + 8)"),
                 ("quote(unquote(4 + 4) + 8)", "(8 + 8)"),
                 ("let foobar = 8; quote(foobar)", "foobar"),
                 ("let foobar = 8; quote(unquote(foobar))", "8"),
                 ("quote(unquote(true))", "true"),
                 ("quote(unquote(true == false))", "false"),
                 ("quote(unquote(quote(4 + 4)))", "(4 + 4)"),
                 ("let quotedInfixExpression = quote(4 + 4);
                   quote(unquote(4 + 4) + unquote(quotedInfixExpression))",
                  "(8 + (4 + 4))"),
                 ("quote(unquote(1.5 * 2))", "3"),
                 ("quote(unquote(\"a\" + \"b\"))", "\"ab\""),
                 ("quote([unquote(1 + 1), fn(x) { unquote(2 * 2) }])", "[2, fn(x) { 4 }]")];

    for (source, expected) in cases {
        assert_eq!(quoted(source), expected, "source: {source}");
    }
}

#[test]
fn unquote_of_unrepresentable_values_leaves_the_call() {
    assert_eq!(quoted("quote(unquote([1]))"), "unquote([1])");
}

#[test]
fn quote_takes_exactly_one_argument() {
    let result = evaluate(&parse_ok("quote(1, 2)"), &Environment::new());

    assert_eq!(result,
               Object::Error("wrong number of arguments. want=1, got=2".to_string()));
}

#[test]
fn quote_renders_as_quote_object() {
    let result = evaluate(&parse_ok("quote(1 + 2)"), &Environment::new());

    assert_eq!(result.kind(), ObjectType::Quote);
    assert_eq!(result.to_string(), "QUOTE((1 + 2))");
}

#[test]
fn define_macros_registers_and_removes_definitions() {
    let mut program = parse_ok("let number = 1;
                                let function = fn(x, y) { x + y };
                                let mymacro = macro(x, y) { x + y; };");
    let env = Environment::new();

    define_macros(&mut program, &env);

    assert_eq!(program.statements.len(), 2);
    assert!(env.get("number").is_none());
    assert!(env.get("function").is_none());

    let Some(Object::Macro(mac)) = env.get("mymacro") else {
        panic!("mymacro is not a macro");
    };
    assert_eq!(mac.parameters.len(), 2);
    assert_eq!(mac.parameters[0].name, "x");
    assert_eq!(mac.parameters[1].name, "y");
    assert_eq!(mac.body.to_string(), "(x + y)");
    assert!(mac.env.ptr_eq(&env));
}

#[test]
fn nested_macro_definitions_are_not_registered() {
    let mut program = parse_ok("let f = fn() { let m = macro() { quote(1) }; 1 };");
    let env = Environment::new();

    define_macros(&mut program, &env);

    assert_eq!(program.statements.len(), 1);
    assert!(env.get("m").is_none());
}

#[test]
fn expand_macros_replaces_calls() {
    let cases = [("let infixExpression = macro() { quote(1 + 2); };
                   infixExpression();",
                  "(1 + 2)"),
                 ("let reverse = macro(a, b) { quote(unquote(b) - unquote(a)); };
                   reverse(2 + 2, 10 - 5);",
                  "((10 - 5) - (2 + 2))"),
                 (r#"let unless = macro(condition, consequence, alternative) {
                       quote(if (!(unquote(condition))) {
                           unquote(consequence);
                       } else {
                           unquote(alternative);
                       });
                   };
                   unless(10 > 5, puts("not greater"), puts("greater"));"#,
                  r#"if (!(10 > 5)) { puts("not greater") } else { puts("greater") }"#)];

    for (source, expected) in cases {
        let expanded = expand(source).unwrap_or_else(|e| panic!("{source}: {e}"));
        let expected = parse_ok(expected);

        assert_eq!(expanded, expected, "source: {source}");
    }
}

#[test]
fn macro_arguments_are_not_evaluated() {
    let expanded = expand("let ignore = macro(x) { quote(0) }; ignore(undefined_name(1, 2));");

    assert_eq!(expanded.unwrap().to_string(), "0");
}

#[test]
fn macro_calls_inside_other_expressions_are_expanded() {
    let expanded = expand("let two = macro() { quote(2) }; [two(), fn() { two() * 3 }];");

    assert_eq!(expanded.unwrap().to_string(), "[2, fn() { (2 * 3) }]");
}

#[test]
fn macro_must_return_a_quote() {
    let error = expand("let bad = macro() { 1 }; bad();").unwrap_err();

    assert_eq!(error,
               MacroError::NotQuote { name: "bad".to_string(),
                                      kind: ObjectType::Integer, });
    assert_eq!(error.to_string(), "macro `bad` must return a Quote, got Integer");
}

#[test]
fn macro_return_statement_is_unwrapped() {
    let expanded = expand("let early = macro() { return quote(7); quote(8) }; early();");

    assert_eq!(expanded.unwrap().to_string(), "7");
}

#[test]
fn macro_errors_abort_expansion() {
    let error = expand("let broken = macro() { nope }; broken();").unwrap_err();
    assert_eq!(error.to_string(), "macro `broken` failed: identifier not found: nope");

    let error = expand("let two = macro(a, b) { quote(a) }; two(1);").unwrap_err();
    assert_eq!(error,
               MacroError::WrongArgumentCount { name:     "two".to_string(),
                                                expected: 2,
                                                got:      1, });
}

#[test]
fn interpreter_runs_expanded_programs() {
    let mut interpreter = Interpreter::new();

    let source = r#"
        let unless = macro(condition, consequence, alternative) {
            quote(if (!(unquote(condition))) {
                unquote(consequence);
            } else {
                unquote(alternative);
            });
        };
        unless(10 > 5, "not greater", "greater");
    "#;

    assert_eq!(interpreter.run(source).unwrap(), Object::from("greater"));
    assert!(interpreter.run("let bad = macro() { 1 }; bad()").is_err());
    assert!(interpreter.run("let = 1").is_err());
}

#[test]
fn macro_literal_outside_top_level_is_a_value() {
    let result = evaluate(&parse_ok("let f = fn() { macro(x) { x } }; f()"),
                          &Environment::new());

    assert_eq!(result.kind(), ObjectType::Macro);
    assert_eq!(result.to_string(), "macro(x) {\nx\n}");

    let result = evaluate(&parse_ok("let f = fn() { macro() { 1 } }; f()()"),
                          &Environment::new());
    assert_eq!(result, Object::Error("not a function: Macro".to_string()));
}

#[test]
fn quoted_arguments_can_be_inspected_by_expr() {
    let expanded = expand("let first_arg = macro(a, b) { a }; first_arg(1 + 1, 2);").unwrap();

    assert_eq!(expanded.statements.len(), 1);
    assert_eq!(expanded.to_string(), "(1 + 1)");
    assert!(matches!(&expanded.statements[0],
                     monkey::ast::Statement::Expression { expr: Expr::Infix { .. } }));
}
