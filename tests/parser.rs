use monkey::{
    ast::{Block, Expr, Identifier, InfixOperator, PrefixOperator, Program, Statement},
    error::ParseError,
    interpreter::{lexer::TokenKind, parser::parse},
};

fn parse_ok(source: &str) -> Program {
    let (program, errors) = parse(source);
    assert!(errors.is_empty(), "parser had errors for {source:?}: {errors:?}");
    program
}

fn single_expression(source: &str) -> Expr {
    let program = parse_ok(source);
    assert_eq!(program.statements.len(), 1, "expected one statement in {source:?}");

    match program.statements.into_iter().next() {
        Some(Statement::Expression { expr }) => expr,
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

fn error_messages(source: &str) -> Vec<String> {
    let (_, errors) = parse(source);
    errors.iter().map(ToString::to_string).collect()
}

#[test]
fn let_statements() {
    let cases = [("let x = 5;", "x", Expr::integer(5)),
                 ("let y = true;", "y", Expr::Boolean(true)),
                 ("let foobar = y;", "foobar", Expr::ident("y"))];

    for (source, name, value) in cases {
        let program = parse_ok(source);
        assert_eq!(program.statements,
                   vec![Statement::Let { name: Identifier::new(name),
                                         value }]);
    }
}

#[test]
fn return_statements() {
    let program = parse_ok("return 5; return foobar;;");

    assert_eq!(program.statements,
               vec![Statement::Return { value: Expr::integer(5) },
                    Statement::Return { value: Expr::ident("foobar") }]);
}

#[test]
fn semicolons_are_optional() {
    let program = parse_ok("let a = 1\nlet b = 2\na + b");

    assert_eq!(program.statements.len(), 3);
    assert_eq!(program.to_string(), "let a = 1;let b = 2;(a + b)");
}

#[test]
fn literals() {
    assert_eq!(single_expression("foobar;"), Expr::ident("foobar"));
    assert_eq!(single_expression("5;"), Expr::integer(5));
    assert_eq!(single_expression("false"), Expr::Boolean(false));
    assert_eq!(single_expression("\"hello world\";"),
               Expr::StringLiteral("hello world".to_string()));
    assert_eq!(single_expression("3.25"),
               Expr::FloatLiteral { value:   3.25,
                                    literal: "3.25".to_string(), });
}

#[test]
fn prefix_expressions() {
    let cases = [("!5;", PrefixOperator::Bang, Expr::integer(5)),
                 ("-15;", PrefixOperator::Minus, Expr::integer(15)),
                 ("!true;", PrefixOperator::Bang, Expr::Boolean(true))];

    for (source, operator, right) in cases {
        assert_eq!(single_expression(source),
                   Expr::Prefix { operator,
                                  right: Box::new(right) });
    }
}

#[test]
fn infix_expressions() {
    let cases = [("5 + 5;", InfixOperator::Plus),
                 ("5 - 5;", InfixOperator::Minus),
                 ("5 * 5;", InfixOperator::Asterisk),
                 ("5 / 5;", InfixOperator::Slash),
                 ("5 > 5;", InfixOperator::Gt),
                 ("5 < 5;", InfixOperator::Lt),
                 ("5 == 5;", InfixOperator::Eq),
                 ("5 != 5;", InfixOperator::NotEq)];

    for (source, operator) in cases {
        assert_eq!(single_expression(source),
                   Expr::infix(Expr::integer(5), operator, Expr::integer(5)));
    }
}

#[test]
fn operator_precedence() {
    let cases = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a * b / c", "((a * b) / c)"),
                 ("a + b / c", "(a + (b / c))"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("true", "true"),
                 ("3 > 5 == false", "((3 > 5) == false)"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("(5 + 5) * 2", "((5 + 5) * 2)"),
                 ("2 / (5 + 5)", "(2 / (5 + 5))"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))"),
                 ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
                 ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                  "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"),
                 ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
                 ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
                 ("add(a * b[2], b[1], 2 * [1, 2][1])",
                  "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))")];

    for (source, expected) in cases {
        assert_eq!(parse_ok(source).to_string(), expected, "source: {source}");
    }
}

#[test]
fn if_expression() {
    let expr = single_expression("if (x < y) { x }");

    assert_eq!(expr,
               Expr::If { condition:   Box::new(Expr::infix(Expr::ident("x"),
                                                            InfixOperator::Lt,
                                                            Expr::ident("y"))),
                          consequence: Block { statements: vec![Statement::Expression { expr: Expr::ident("x") }], },
                          alternative: None, });
}

#[test]
fn if_else_expression() {
    let expr = single_expression("if (x < y) { x } else { y }");

    let Expr::If { alternative, .. } = &expr else {
        panic!("expected an if expression, got {expr:?}");
    };
    assert_eq!(alternative.as_ref().map(|alt| alt.statements.len()), Some(1));
    assert_eq!(expr.to_string(), "if (x < y) { x } else { y }");
}

#[test]
fn function_literal() {
    let expr = single_expression("fn(x, y) { x + y; }");

    assert_eq!(expr,
               Expr::FunctionLiteral { parameters: vec![Identifier::new("x"),
                                                        Identifier::new("y")],
                                       body:       Block { statements: vec![Statement::Expression { expr: Expr::infix(Expr::ident("x"),
                                                                                                                      InfixOperator::Plus,
                                                                                                                      Expr::ident("y")) }], }, });
}

#[test]
fn function_parameters() {
    let cases = [("fn() {};", vec![]),
                 ("fn(x) {};", vec!["x"]),
                 ("fn(x, y, z) {};", vec!["x", "y", "z"])];

    for (source, expected) in cases {
        let Expr::FunctionLiteral { parameters, .. } = single_expression(source) else {
            panic!("expected a function literal for {source:?}");
        };
        let names: Vec<_> = parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, expected);
    }
}

#[test]
fn macro_literal() {
    let expr = single_expression("macro(x, y) { x + y; }");

    let Expr::MacroLiteral { parameters, body } = &expr else {
        panic!("expected a macro literal, got {expr:?}");
    };
    assert_eq!(parameters.len(), 2);
    assert_eq!(body.to_string(), "(x + y)");
    assert_eq!(expr.to_string(), "macro(x, y) { (x + y) }");
}

#[test]
fn call_expression() {
    let expr = single_expression("add(1, 2 * 3, 4 + 5);");

    let Expr::Call { function, arguments } = &expr else {
        panic!("expected a call, got {expr:?}");
    };
    assert_eq!(**function, Expr::ident("add"));
    assert_eq!(arguments.len(), 3);
    assert_eq!(arguments[1].to_string(), "(2 * 3)");
}

#[test]
fn array_and_index() {
    assert_eq!(single_expression("[1, 2 * 2, 3 + 3]").to_string(), "[1, (2 * 2), (3 + 3)]");
    assert_eq!(single_expression("[]"), Expr::ArrayLiteral(vec![]));
    assert_eq!(single_expression("myArray[1 + 1]").to_string(), "(myArray[(1 + 1)])");
}

#[test]
fn hash_literals() {
    let expr = single_expression(r#"{"one": 1, "two": 2, "three": 3}"#);
    let Expr::HashLiteral(pairs) = expr else {
        panic!("expected a hash literal");
    };
    assert_eq!(pairs.len(), 3);
    assert_eq!(pairs[1],
               (Expr::StringLiteral("two".to_string()), Expr::integer(2)));

    assert_eq!(single_expression("{}"), Expr::HashLiteral(vec![]));

    let expr = single_expression(r#"{"one": 0 + 1, true: 10 - 8, 3: 15 / 5}"#);
    assert_eq!(expr.to_string(), r#"{"one": (0 + 1), true: (10 - 8), 3: (15 / 5)}"#);
}

#[test]
fn missing_prefix_parse_function_is_reported() {
    assert_eq!(error_messages("+5"), ["no prefix parse function for + found"]);
}

#[test]
fn unexpected_tokens_are_reported() {
    assert_eq!(error_messages("let x 5;\nlet = 10;\nlet 838383;"),
               ["expected next token to be =, got INT instead",
                "expected next token to be IDENT, got = instead",
                "no prefix parse function for = found",
                "expected next token to be IDENT, got INT instead"]);
}

#[test]
fn oversized_integer_is_reported() {
    let (_, errors) = parse("99999999999999999999");

    assert_eq!(errors,
               vec![ParseError::InvalidInteger { literal: "99999999999999999999".to_string(), }]);
    assert_eq!(errors[0].to_string(),
               "could not parse \"99999999999999999999\" as integer");
}

#[test]
fn parsing_continues_after_errors() {
    let (program, errors) = parse("let = 1; let y = 2; y");

    assert!(!errors.is_empty());
    assert!(program.statements
                   .contains(&Statement::Let { name:  Identifier::new("y"),
                                               value: Expr::integer(2), }));
}

#[test]
fn unclosed_constructs_stop_at_end_of_input() {
    let (_, errors) = parse("fn(x) { x");
    assert!(errors.is_empty());

    let (_, errors) = parse("if (x { 1 }");
    assert_eq!(errors[0],
               ParseError::UnexpectedToken { expected: TokenKind::RParen,
                                             found:    TokenKind::LBrace, });
}
