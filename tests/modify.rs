use monkey::{
    ast::{Expr, Identifier, Modify, Program},
    interpreter::parser::parse,
};

fn parse_ok(source: &str) -> Program {
    let (program, errors) = parse(source);
    assert!(errors.is_empty(), "parser had errors for {source:?}: {errors:?}");
    program
}

fn turn_one_into_two(expr: Expr) -> Expr {
    match expr {
        Expr::IntegerLiteral { value: 1, .. } => Expr::integer(2),
        other => other,
    }
}

#[test]
fn every_child_slot_is_rewritten() {
    let cases = [("1", "2"),
                 ("1 + 2", "2 + 2"),
                 ("2 + 1", "2 + 2"),
                 ("-1", "-2"),
                 ("!(1 < 1)", "!(2 < 2)"),
                 ("1[1]", "2[2]"),
                 ("if (1) { 1 } else { 1 }", "if (2) { 2 } else { 2 }"),
                 ("if (1) { 1; 1 }", "if (2) { 2; 2 }"),
                 ("return 1;", "return 2;"),
                 ("let a = 1;", "let a = 2;"),
                 ("fn(x) { 1 }", "fn(x) { 2 }"),
                 ("macro(x) { 1 }", "macro(x) { 2 }"),
                 ("[1, 1]", "[2, 2]"),
                 ("{1: 1, 2: 1}", "{2: 2, 2: 2}"),
                 ("fn() { 1 }(1, 1)", "fn() { 2 }(2, 2)"),
                 ("[fn() { [{1: if (1) { return 1; }}] }]",
                  "[fn() { [{2: if (2) { return 2; }}] }]"),
                 ("1; let b = 1; return 1", "2; let b = 2; return 2")];

    for (source, expected) in cases {
        let modified = parse_ok(source).modify(turn_one_into_two);

        assert_eq!(modified, parse_ok(expected), "source: {source}");
    }
}

#[test]
fn leaves_are_kept_when_the_transform_passes_them_through() {
    let source = r#"let s = "one"; let t = true; let f = 1.5; f"#;

    assert_eq!(parse_ok(source).modify(|expr| expr), parse_ok(source));
}

#[test]
fn children_are_visited_before_their_parent() {
    let mut visited = Vec::new();

    let _ = parse_ok("1 + 2 * 3").modify(|expr| {
                                     visited.push(expr.to_string());
                                     expr
                                 });

    assert_eq!(visited, ["1", "2", "3", "(2 * 3)", "(1 + (2 * 3))"]);
}

#[test]
fn parameters_are_renamed_through_identifiers() {
    let rename = |expr: Expr| match expr {
        Expr::Identifier(Identifier { name }) if name == "x" => Expr::ident("y"),
        other => other,
    };

    let modified = parse_ok("fn(x, z) { x + z }").modify(rename);
    assert_eq!(modified, parse_ok("fn(y, z) { y + z }"));

    let modified = parse_ok("macro(x) { x }").modify(rename);
    assert_eq!(modified, parse_ok("macro(y) { y }"));
}

#[test]
fn non_identifier_replacement_keeps_the_parameter() {
    let modified = parse_ok("fn(x) { x }").modify(|expr| match expr {
                                              Expr::Identifier(_) => Expr::integer(1),
                                              other => other,
                                          });

    assert_eq!(modified, parse_ok("fn(x) { 1 }"));
}

#[test]
fn failing_transform_stops_the_traversal() {
    let mut visited = Vec::new();

    let result = parse_ok("[1, 2, 3]").try_modify(&mut |expr: Expr| {
                                          visited.push(expr.to_string());
                                          match expr {
                                              Expr::IntegerLiteral { value: 2, .. } => {
                                                  Err("two".to_string())
                                              },
                                              other => Ok(other),
                                          }
                                      });

    assert_eq!(result, Err("two".to_string()));
    assert_eq!(visited, ["1", "2"]);
}
