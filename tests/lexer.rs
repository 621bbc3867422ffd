use monkey::interpreter::lexer::{Lexer, Token, TokenKind, lex};

fn kinds_and_literals(source: &str) -> Vec<(TokenKind, String)> {
    lex(source).into_iter()
               .map(|Token { kind, literal }| (kind, literal))
               .collect()
}

#[test]
fn next_token_covers_the_whole_language() {
    let input = r#"let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};

let result = add(five, ten);
!-/*5;
5 < 10 > 5;

if (5 < 10) {
    return true;
} else {
    return false;
}

10 == 10;
10 != 9;
"foobar"
"foo bar"
[1, 2];
{"foo": "bar"}
macro(x, y) { x + y; };
3.14
"#;

    use TokenKind::*;

    let expected = [(Let, "let"),
                    (Ident, "five"),
                    (Assign, "="),
                    (Int, "5"),
                    (Semicolon, ";"),
                    (Let, "let"),
                    (Ident, "ten"),
                    (Assign, "="),
                    (Int, "10"),
                    (Semicolon, ";"),
                    (Let, "let"),
                    (Ident, "add"),
                    (Assign, "="),
                    (Function, "fn"),
                    (LParen, "("),
                    (Ident, "x"),
                    (Comma, ","),
                    (Ident, "y"),
                    (RParen, ")"),
                    (LBrace, "{"),
                    (Ident, "x"),
                    (Plus, "+"),
                    (Ident, "y"),
                    (Semicolon, ";"),
                    (RBrace, "}"),
                    (Semicolon, ";"),
                    (Let, "let"),
                    (Ident, "result"),
                    (Assign, "="),
                    (Ident, "add"),
                    (LParen, "("),
                    (Ident, "five"),
                    (Comma, ","),
                    (Ident, "ten"),
                    (RParen, ")"),
                    (Semicolon, ";"),
                    (Bang, "!"),
                    (Minus, "-"),
                    (Slash, "/"),
                    (Asterisk, "*"),
                    (Int, "5"),
                    (Semicolon, ";"),
                    (Int, "5"),
                    (Lt, "<"),
                    (Int, "10"),
                    (Gt, ">"),
                    (Int, "5"),
                    (Semicolon, ";"),
                    (If, "if"),
                    (LParen, "("),
                    (Int, "5"),
                    (Lt, "<"),
                    (Int, "10"),
                    (RParen, ")"),
                    (LBrace, "{"),
                    (Return, "return"),
                    (True, "true"),
                    (Semicolon, ";"),
                    (RBrace, "}"),
                    (Else, "else"),
                    (LBrace, "{"),
                    (Return, "return"),
                    (False, "false"),
                    (Semicolon, ";"),
                    (RBrace, "}"),
                    (Int, "10"),
                    (Eq, "=="),
                    (Int, "10"),
                    (Semicolon, ";"),
                    (Int, "10"),
                    (NotEq, "!="),
                    (Int, "9"),
                    (Semicolon, ";"),
                    (Str, "foobar"),
                    (Str, "foo bar"),
                    (LBracket, "["),
                    (Int, "1"),
                    (Comma, ","),
                    (Int, "2"),
                    (RBracket, "]"),
                    (Semicolon, ";"),
                    (LBrace, "{"),
                    (Str, "foo"),
                    (Colon, ":"),
                    (Str, "bar"),
                    (RBrace, "}"),
                    (Macro, "macro"),
                    (LParen, "("),
                    (Ident, "x"),
                    (Comma, ","),
                    (Ident, "y"),
                    (RParen, ")"),
                    (LBrace, "{"),
                    (Ident, "x"),
                    (Plus, "+"),
                    (Ident, "y"),
                    (Semicolon, ";"),
                    (RBrace, "}"),
                    (Semicolon, ";"),
                    (Float, "3.14"),
                    (Eof, "")];

    let expected: Vec<_> = expected.into_iter()
                                   .map(|(kind, literal)| (kind, literal.to_string()))
                                   .collect();

    assert_eq!(kinds_and_literals(input), expected);
}

#[test]
fn comments_are_skipped_to_end_of_line() {
    let tokens = kinds_and_literals("1 // one\n// whole line\n2 //");

    assert_eq!(tokens,
               vec![(TokenKind::Int, "1".to_string()),
                    (TokenKind::Int, "2".to_string()),
                    (TokenKind::Eof, String::new())]);
}

#[test]
fn numbers_need_digits_on_both_sides_of_the_dot() {
    let tokens = kinds_and_literals("1.5 2. 007");

    assert_eq!(tokens,
               vec![(TokenKind::Float, "1.5".to_string()),
                    (TokenKind::Int, "2".to_string()),
                    (TokenKind::Illegal, ".".to_string()),
                    (TokenKind::Int, "007".to_string()),
                    (TokenKind::Eof, String::new())]);
}

#[test]
fn identifiers_take_letters_and_underscores_only() {
    let tokens = kinds_and_literals("foo_bar x1 fnord");

    assert_eq!(tokens,
               vec![(TokenKind::Ident, "foo_bar".to_string()),
                    (TokenKind::Ident, "x".to_string()),
                    (TokenKind::Int, "1".to_string()),
                    (TokenKind::Ident, "fnord".to_string()),
                    (TokenKind::Eof, String::new())]);
}

#[test]
fn unterminated_string_runs_to_end_of_input() {
    let tokens = kinds_and_literals("\"abc def");

    assert_eq!(tokens,
               vec![(TokenKind::Str, "abc def".to_string()),
                    (TokenKind::Eof, String::new())]);
}

#[test]
fn strings_have_no_escapes() {
    let tokens = kinds_and_literals(r#""a\nb""#);

    assert_eq!(tokens[0], (TokenKind::Str, r"a\nb".to_string()));
}

#[test]
fn unknown_bytes_are_illegal() {
    let tokens = kinds_and_literals("a @ b");

    assert_eq!(tokens[1], (TokenKind::Illegal, "@".to_string()));
    assert_eq!(tokens[2], (TokenKind::Ident, "b".to_string()));
}

#[test]
fn end_of_input_repeats() {
    let mut lexer = Lexer::new("");

    for _ in 0..3 {
        assert_eq!(lexer.next_token(), Token::eof());
    }
}
