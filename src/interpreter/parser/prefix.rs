use crate::{
    ast::{Block, Expr, Identifier},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{
            Parser,
            utils::{Precedence, prefix_operator},
        },
    },
};

impl Parser<'_> {
    pub(super) fn parse_identifier(&mut self) -> Option<Expr> {
        Some(Expr::ident(self.current.literal.as_str()))
    }

    pub(super) fn parse_integer_literal(&mut self) -> Option<Expr> {
        let literal = self.current.literal.clone();

        match literal.parse::<i64>() {
            Ok(value) => Some(Expr::IntegerLiteral { value, literal }),
            Err(_) => {
                self.push_error(ParseError::InvalidInteger { literal });
                None
            },
        }
    }

    pub(super) fn parse_float_literal(&mut self) -> Option<Expr> {
        let literal = self.current.literal.clone();

        match literal.parse::<f64>() {
            Ok(value) => Some(Expr::FloatLiteral { value, literal }),
            Err(_) => {
                self.push_error(ParseError::InvalidFloat { literal });
                None
            },
        }
    }

    pub(super) fn parse_string_literal(&mut self) -> Option<Expr> {
        Some(Expr::StringLiteral(self.current.literal.clone()))
    }

    pub(super) fn parse_boolean(&mut self) -> Option<Expr> {
        Some(Expr::Boolean(self.current_is(TokenKind::True)))
    }

    /// `!<expr>` or `-<expr>`.
    pub(super) fn parse_prefix_expression(&mut self) -> Option<Expr> {
        let operator = prefix_operator(self.current.kind)?;
        self.next_token();

        let right = self.parse_expression(Precedence::Prefix);

        Some(Expr::Prefix { operator,
                            right: Box::new(right) })
    }

    /// `( <expr> )`
    pub(super) fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.next_token();

        let expr = self.parse_expression(Precedence::Lowest);
        self.expect_peek(TokenKind::RParen)?;

        Some(expr)
    }

    /// `if (<condition>) { ... }` with an optional `else { ... }`.
    pub(super) fn parse_if_expression(&mut self) -> Option<Expr> {
        self.expect_peek(TokenKind::LParen)?;
        self.next_token();

        let condition = self.parse_expression(Precedence::Lowest);

        self.expect_peek(TokenKind::RParen)?;
        self.expect_peek(TokenKind::LBrace)?;

        let consequence = self.parse_block();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block())
        } else {
            None
        };

        Some(Expr::If { condition: Box::new(condition),
                        consequence,
                        alternative })
    }

    /// Reads the `(<params>) { <body> }` shared by `fn` and `macro`.
    fn parse_callable(&mut self) -> Option<(Vec<Identifier>, Block)> {
        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_parameters()?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block();

        Some((parameters, body))
    }

    pub(super) fn parse_function_literal(&mut self) -> Option<Expr> {
        let (parameters, body) = self.parse_callable()?;
        Some(Expr::FunctionLiteral { parameters, body })
    }

    pub(super) fn parse_macro_literal(&mut self) -> Option<Expr> {
        let (parameters, body) = self.parse_callable()?;
        Some(Expr::MacroLiteral { parameters, body })
    }

    /// `[a, b, c]`
    pub(super) fn parse_array_literal(&mut self) -> Option<Expr> {
        let elements = self.parse_expression_list(TokenKind::RBracket)?;
        Some(Expr::ArrayLiteral(elements))
    }

    /// `{k: v, ...}`
    pub(super) fn parse_hash_literal(&mut self) -> Option<Expr> {
        let mut pairs = Vec::new();

        while !self.peek_is(TokenKind::RBrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest);

            self.expect_peek(TokenKind::Colon)?;
            self.next_token();
            let value = self.parse_expression(Precedence::Lowest);

            pairs.push((key, value));

            if !self.peek_is(TokenKind::RBrace) {
                self.expect_peek(TokenKind::Comma)?;
            }
        }

        self.expect_peek(TokenKind::RBrace)?;

        Some(Expr::HashLiteral(pairs))
    }
}
