use crate::{
    ast::{Block, Identifier, Statement},
    interpreter::{
        lexer::TokenKind,
        parser::{Parser, utils::Precedence},
    },
};

impl Parser<'_> {
    /// Parses the statement starting at the current token.
    ///
    /// A trailing semicolon is consumed when present but never required.
    /// Returns `None` when the statement was malformed; the error has been
    /// recorded.
    pub(super) fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => Some(self.parse_return_statement()),
            _ => Some(self.parse_expression_statement()),
        }
    }

    /// `let <ident> = <expr>;`
    fn parse_let_statement(&mut self) -> Option<Statement> {
        self.expect_peek(TokenKind::Ident)?;
        let name = Identifier::new(self.current.literal.as_str());

        self.expect_peek(TokenKind::Assign)?;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest);
        self.skip_semicolons();

        Some(Statement::Let { name, value })
    }

    /// `return <expr>;`
    fn parse_return_statement(&mut self) -> Statement {
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest);
        self.skip_semicolons();

        Statement::Return { value }
    }

    fn parse_expression_statement(&mut self) -> Statement {
        let expr = self.parse_expression(Precedence::Lowest);

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Statement::Expression { expr }
    }

    fn skip_semicolons(&mut self) {
        while self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }

    /// Parses statements up to the closing brace or the end of input.
    ///
    /// The current token is the opening brace; afterwards it is the closing
    /// one (or `Eof`).
    pub(super) fn parse_block(&mut self) -> Block {
        let mut block = Block::default();
        self.next_token();

        while !self.current_is(TokenKind::RBrace) && !self.current_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                block.statements.push(statement);
            }
            self.next_token();
        }

        block
    }
}
