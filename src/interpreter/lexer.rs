use std::fmt;

use logos::Logos;

/// The kind of a lexical token.
///
/// Keywords are declared with `#[token]` so that they win over the identifier
/// pattern, and the two-character operators `==` and `!=` win over their
/// single-character prefixes through longest-match.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\n\r]+")]
pub enum TokenKind {
    /// A byte that starts no valid token.
    Illegal,
    /// End of input. Never produced by the scanner itself.
    Eof,

    /// Identifiers such as `x`, `add` or `new_adder`.
    #[regex(r"[a-zA-Z_]+")]
    Ident,
    /// Integer literals such as `42`.
    #[regex(r"[0-9]+")]
    Int,
    /// Float literals such as `3.14`. Both sides of the dot are mandatory.
    #[regex(r"[0-9]+\.[0-9]+")]
    Float,
    /// String literals. There are no escapes; an unterminated string runs to
    /// the end of input.
    #[regex(r#""[^"]*"?"#, allow_greedy = true)]
    Str,

    /// `// Line comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,

    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,

    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    /// `fn`
    #[token("fn")]
    Function,
    /// `macro`
    #[token("macro")]
    Macro,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::Str => "STRING",
            Self::Comment => "COMMENT",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Function => "FUNCTION",
            Self::Macro => "MACRO",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
        };

        f.write_str(name)
    }
}

/// A token: its kind and the source text it was produced from.
///
/// For string literals the literal holds the contents between the quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:    TokenKind,
    /// The exact source text of the token.
    pub literal: String,
}

impl Token {
    /// Creates a token from its kind and literal text.
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self { kind,
               literal: literal.into() }
    }

    /// The end-of-input token.
    #[must_use]
    pub const fn eof() -> Self {
        Self { kind:    TokenKind::Eof,
               literal: String::new(), }
    }
}

/// A single forward pass over the source text.
///
/// # Example
/// ```
/// use monkey::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("let x = 5;");
///
/// assert_eq!(lexer.next_token().kind, TokenKind::Let);
/// assert_eq!(lexer.next_token().literal, "x");
/// assert_eq!(lexer.next_token().kind, TokenKind::Assign);
/// assert_eq!(lexer.next_token().literal, "5");
/// assert_eq!(lexer.next_token().kind, TokenKind::Semicolon);
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// ```
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: TokenKind::lexer(source), }
    }

    /// Returns the next token, advancing past it.
    ///
    /// Once the input is exhausted every further call returns an `Eof` token.
    pub fn next_token(&mut self) -> Token {
        match self.inner.next() {
            Some(Ok(TokenKind::Str)) => {
                let slice = self.inner.slice();
                let body = &slice[1..];
                let body = body.strip_suffix('"').unwrap_or(body);
                Token::new(TokenKind::Str, body)
            },
            Some(Ok(kind)) => Token::new(kind, self.inner.slice()),
            Some(Err(())) => Token::new(TokenKind::Illegal, self.inner.slice()),
            None => Token::eof(),
        }
    }
}

/// Tokenizes the whole source, up to and including the final `Eof` token.
///
/// # Example
/// ```
/// use monkey::interpreter::lexer::{TokenKind, lex};
///
/// let kinds: Vec<_> = lex("a != b").into_iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Ident, TokenKind::NotEq, TokenKind::Ident, TokenKind::Eof]);
/// ```
#[must_use]
pub fn lex(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
