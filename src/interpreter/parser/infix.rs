use crate::{
    ast::Expr,
    interpreter::{
        lexer::TokenKind,
        parser::{
            Parser,
            utils::{Precedence, infix_operator},
        },
    },
};

impl Parser<'_> {
    /// `<left> <op> <right>`, where the right side binds at the operator's
    /// own precedence.
    pub(super) fn parse_infix_expression(&mut self, left: Expr) -> Option<Expr> {
        let operator = infix_operator(self.current.kind)?;
        let precedence = self.current_precedence();
        self.next_token();

        let right = self.parse_expression(precedence);

        Some(Expr::infix(left, operator, right))
    }

    /// `<function>(<arguments>)`
    pub(super) fn parse_call_expression(&mut self, function: Expr) -> Option<Expr> {
        let arguments = self.parse_expression_list(TokenKind::RParen)?;

        Some(Expr::Call { function: Box::new(function),
                          arguments })
    }

    /// `<left>[<index>]`
    pub(super) fn parse_index_expression(&mut self, left: Expr) -> Option<Expr> {
        self.next_token();

        let index = self.parse_expression(Precedence::Lowest);
        self.expect_peek(TokenKind::RBracket)?;

        Some(Expr::Index { left:  Box::new(left),
                           index: Box::new(index), })
    }
}
