use crate::ast::{AstVisitor, Expression, VarDecl};
use crate::frontend::token::Token;
use crate::utils::errors::KatResult;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    VariableDeclaration,
    Output,
    Input,
    IfStatement,
    WhileLoop,
    Expression,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputStmt {
    pub keyword: Token,
    pub expr: Expression,
}

impl OutputStmt {
    pub fn new(keyword: Token, expr: Expression) -> Self {
        Self { keyword, expr }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputStmt {
    pub keyword: Token,
    pub target: Token,
}

impl InputStmt {
    pub fn new(keyword: Token, target: Token) -> Self {
        Self { keyword, target }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfStmt {
    pub keyword: Token,
    pub condition: Expression,
    pub then_branch: Vec<Statement>,
    pub else_branch: Option<Vec<Statement>>,
}

impl IfStmt {
    pub fn new(
        keyword: Token,
        condition: Expression,
        then_branch: Vec<Statement>,
        else_branch: Option<Vec<Statement>>,
    ) -> Self {
        Self {
            keyword,
            condition,
            then_branch,
            else_branch,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhileStmt {
    pub keyword: Token,
    pub condition: Expression,
    pub body: Vec<Statement>,
}

impl WhileStmt {
    pub fn new(keyword: Token, condition: Expression, body: Vec<Statement>) -> Self {
        Self {
            keyword,
            condition,
            body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    VariableDeclaration(VarDecl),
    Output(OutputStmt),
    Input(InputStmt),
    IfStatement(IfStmt),
    WhileLoop(WhileStmt),
    Expression(Expression),
}

impl Statement {
    pub fn kind(&self) -> StatementKind {
        match self {
            Statement::VariableDeclaration(_) => StatementKind::VariableDeclaration,
            Statement::Output(_) => StatementKind::Output,
            Statement::Input(_) => StatementKind::Input,
            Statement::IfStatement(_) => StatementKind::IfStatement,
            Statement::WhileLoop(_) => StatementKind::WhileLoop,
            Statement::Expression(_) => StatementKind::Expression,
        }
    }

    pub fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V) -> KatResult<()> {
        match self {
            Statement::VariableDeclaration(decl) => visitor.visit_var_decl(decl),
            Statement::Output(stmt) => visitor.visit_output(stmt),
            Statement::Input(stmt) => visitor.visit_input(stmt),
            Statement::IfStatement(stmt) => visitor.visit_if(stmt),
            Statement::WhileLoop(stmt) => visitor.visit_while(stmt),
            Statement::Expression(expr) => visitor.visit_expression(expr),
        }
    }

    /// Tokens describing the statement itself, excluding nested statements.
    pub fn head_tokens(&self) -> Vec<&Token> {
        match self {
            Statement::VariableDeclaration(decl) => {
                let mut head = vec![&decl.storage, &decl.name];
                head.extend(decl.assign.iter());
                if let Some(init) = &decl.initializer {
                    head.extend(init.tokens.iter());
                }
                head
            }
            Statement::Output(stmt) => stmt.expr.tokens.iter().collect(),
            Statement::Input(stmt) => vec![&stmt.target],
            Statement::IfStatement(stmt) => stmt.condition.tokens.iter().collect(),
            Statement::WhileLoop(stmt) => stmt.condition.tokens.iter().collect(),
            Statement::Expression(expr) => expr.tokens.iter().collect(),
        }
    }

    /// Nested statements: the then-branch of an `if`, the body of a `while`.
    pub fn children(&self) -> &[Statement] {
        match self {
            Statement::IfStatement(stmt) => &stmt.then_branch,
            Statement::WhileLoop(stmt) => &stmt.body,
            _ => &[],
        }
    }

    pub fn line(&self) -> usize {
        match self {
            Statement::VariableDeclaration(decl) => decl.storage.line,
            Statement::Output(stmt) => stmt.keyword.line,
            Statement::Input(stmt) => stmt.keyword.line,
            Statement::IfStatement(stmt) => stmt.keyword.line,
            Statement::WhileLoop(stmt) => stmt.keyword.line,
            Statement::Expression(expr) => expr.line(),
        }
    }

    pub(crate) fn write_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            Statement::VariableDeclaration(decl) => {
                write!(f, "{}VariableDeclaration {} {}", indent, decl.storage.lexeme, decl.name.lexeme)?;
                if let Some(init) = &decl.initializer {
                    write!(f, " = {}", init)?;
                }
                writeln!(f)
            }
            Statement::Output(stmt) => writeln!(f, "{}Output {}", indent, stmt.expr),
            Statement::Input(stmt) => writeln!(f, "{}Input {}", indent, stmt.target.lexeme),
            Statement::IfStatement(stmt) => {
                writeln!(f, "{}IfStatement ({})", indent, stmt.condition)?;
                for child in &stmt.then_branch {
                    child.write_tree(f, depth + 1)?;
                }
                if let Some(else_branch) = &stmt.else_branch {
                    writeln!(f, "{}Else", indent)?;
                    for child in else_branch {
                        child.write_tree(f, depth + 1)?;
                    }
                }
                Ok(())
            }
            Statement::WhileLoop(stmt) => {
                writeln!(f, "{}WhileLoop ({})", indent, stmt.condition)?;
                for child in &stmt.body {
                    child.write_tree(f, depth + 1)?;
                }
                Ok(())
            }
            Statement::Expression(expr) => writeln!(f, "{}Expression {}", indent, expr),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}
