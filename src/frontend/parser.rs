use crate::ast::{Expression, IfStmt, InputStmt, OutputStmt, Program, Statement, VarDecl, WhileStmt};
use crate::frontend::token::{Token, TokenKind};
use crate::utils::config::parser::{is_storage_keyword, OPERAND_KEYWORDS};
use crate::utils::errors::{KatError, KatResult};
use tracing::{debug, trace};

pub struct Parser<'a> {
    tokens: &'a [Token],
    current: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, current: 0 }
    }

    pub fn parse(&mut self) -> KatResult<Program> {
        let program = self.program()?;
        debug!(statements = program.statements.len(), "parsing finished");
        Ok(program)
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.current)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.current)?;
        self.current += 1;
        Some(token)
    }

    // Line of the current token, or of the last one once the stream is exhausted.
    fn line_number(&self) -> usize {
        self.peek()
            .or_else(|| self.tokens.last())
            .map_or(1, |t| t.line)
    }

    fn match_token(&mut self, kind: TokenKind, value: Option<&str>) -> Option<&'a Token> {
        match self.peek() {
            Some(token) if token.is(kind, value) => self.advance(),
            _ => None,
        }
    }

    fn expected(&self, what: &str) -> KatError {
        match self.peek() {
            Some(token) => KatError::syntax_error(what, token.lexeme.clone(), token.line),
            None => KatError::unexpected_eof(what, self.line_number()),
        }
    }

    fn expect(&mut self, kind: TokenKind, value: Option<&str>, what: &str) -> KatResult<Token> {
        match self.match_token(kind, value) {
            Some(token) => Ok(token.clone()),
            None => Err(self.expected(what)),
        }
    }

    fn expect_symbol(&mut self, symbol: &str, what: &str) -> KatResult<Token> {
        self.expect(TokenKind::Symbol, Some(symbol), what)
    }

    /**
     * program = "start" "{" { statement } "close" "}" .
     */
    fn program(&mut self) -> KatResult<Program> {
        self.expect(TokenKind::Keyword, Some("start"), "'start'")?;
        self.expect_symbol("{", "'{' after 'start'")?;
        let mut statements = Vec::new();
        while self.match_token(TokenKind::Keyword, Some("close")).is_none() {
            if self.peek().map_or(true, |t| t.is_symbol("}")) {
                return Err(self.expected("'close'"));
            }
            statements.push(self.statement()?);
        }
        self.expect_symbol("}", "'}' after 'close'")?;
        if self.peek().is_some() {
            return Err(self.expected("end of input after 'close }'"));
        }
        Ok(Program::new(statements))
    }

    fn statement(&mut self) -> KatResult<Statement> {
        let token = match self.peek() {
            Some(token) => token,
            None => return Err(self.expected("statement")),
        };
        let stmt = match (token.kind, token.lexeme.as_str()) {
            (TokenKind::Keyword, word) if is_storage_keyword(word) => self.var_decl()?,
            (TokenKind::Keyword, "out") => self.output()?,
            (TokenKind::Keyword, "in") => self.input()?,
            (TokenKind::Keyword, "if") => self.if_statement()?,
            (TokenKind::Keyword, "while") => self.while_loop()?,
            _ if Self::is_operand(token) => {
                let expr = self.expression()?;
                self.expect_symbol(";", "';' after expression")?;
                Statement::Expression(expr)
            }
            _ => return Err(self.expected("statement")),
        };
        trace!(kind = ?stmt.kind(), line = stmt.line(), "parsed statement");
        Ok(stmt)
    }

    /**
     * vardecl = storage ident [ "=" expression ] ";" .
     */
    fn var_decl(&mut self) -> KatResult<Statement> {
        let storage = self.advance().cloned().ok_or_else(|| self.expected("storage kind"))?;
        let name = self.expect(TokenKind::Identifier, None, "variable name")?;
        let (assign, initializer) = match self.match_token(TokenKind::Operator, Some("=")) {
            Some(assign) => (Some(assign.clone()), Some(self.expression()?)),
            None => (None, None),
        };
        self.expect_symbol(";", "';' at the end of variable declaration")?;
        Ok(Statement::VariableDeclaration(VarDecl::new(storage, name, assign, initializer)))
    }

    /**
     * output = "out" "<<" expression ";" .
     * Two separate '<' tokens are accepted as well.
     */
    fn output(&mut self) -> KatResult<Statement> {
        let keyword = self.expect(TokenKind::Keyword, Some("out"), "'out'")?;
        if self.match_token(TokenKind::Operator, Some("<<")).is_none() {
            let split = self.match_token(TokenKind::Operator, Some("<")).is_some()
                && self.match_token(TokenKind::Operator, Some("<")).is_some();
            if !split {
                return Err(self.expected("'<<' after 'out'"));
            }
        }
        let expr = self.expression()?;
        self.expect_symbol(";", "';' at the end of output statement")?;
        Ok(Statement::Output(OutputStmt::new(keyword, expr)))
    }

    /**
     * input = "in" ">>" ident ";" .
     */
    fn input(&mut self) -> KatResult<Statement> {
        let keyword = self.expect(TokenKind::Keyword, Some("in"), "'in'")?;
        self.expect(TokenKind::Operator, Some(">>"), "'>>' after 'in'")?;
        let target = self.expect(TokenKind::Identifier, None, "variable name after '>>'")?;
        self.expect_symbol(";", "';' at the end of input statement")?;
        Ok(Statement::Input(InputStmt::new(keyword, target)))
    }

    /**
     * if = "if" "(" expression ")" "{" { statement } "}" [ "else" "{" { statement } "}" ] .
     */
    fn if_statement(&mut self) -> KatResult<Statement> {
        let keyword = self.expect(TokenKind::Keyword, Some("if"), "'if'")?;
        let condition = self.condition("if")?;
        let then_branch = self.block("'if' condition")?;
        let else_branch = if self.match_token(TokenKind::Keyword, Some("else")).is_some() {
            Some(self.block("'else'")?)
        } else {
            None
        };
        Ok(Statement::IfStatement(IfStmt::new(keyword, condition, then_branch, else_branch)))
    }

    /**
     * while = "while" "(" expression ")" "{" { statement } "}" .
     */
    fn while_loop(&mut self) -> KatResult<Statement> {
        let keyword = self.expect(TokenKind::Keyword, Some("while"), "'while'")?;
        let condition = self.condition("while")?;
        let body = self.block("'while' condition")?;
        Ok(Statement::WhileLoop(WhileStmt::new(keyword, condition, body)))
    }

    fn condition(&mut self, owner: &str) -> KatResult<Expression> {
        self.expect_symbol("(", &format!("'(' after '{}'", owner))?;
        let condition = self.expression()?;
        self.expect_symbol(")", &format!("')' after '{}' condition", owner))?;
        Ok(condition)
    }

    fn block(&mut self, after: &str) -> KatResult<Vec<Statement>> {
        self.expect_symbol("{", &format!("'{{' after {}", after))?;
        let mut statements = Vec::new();
        while self.match_token(TokenKind::Symbol, Some("}")).is_none() {
            if self.peek().is_none() {
                return Err(self.expected("'}'"));
            }
            statements.push(self.statement()?);
        }
        Ok(statements)
    }

    /**
     * expression = operand { operator operand } .
     */
    fn expression(&mut self) -> KatResult<Expression> {
        let mut tokens = vec![self.operand()?];
        while let Some(op) = self.match_token(TokenKind::Operator, None) {
            tokens.push(op.clone());
            tokens.push(self.operand()?);
        }
        Ok(Expression::new(tokens))
    }

    fn operand(&mut self) -> KatResult<Token> {
        match self.peek() {
            Some(token) if Self::is_operand(token) => {
                self.current += 1;
                Ok(token.clone())
            }
            _ => Err(self.expected("operand")),
        }
    }

    fn is_operand(token: &Token) -> bool {
        match token.kind {
            TokenKind::Identifier => true,
            TokenKind::Keyword => OPERAND_KEYWORDS.contains(&token.lexeme.as_str()),
            _ => token.is_literal(),
        }
    }
}

// Convenience function to parse a whole token stream
pub fn parse(tokens: &[Token]) -> KatResult<Program> {
    Parser::new(tokens).parse()
}
