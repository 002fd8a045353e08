use crate::ast::{AstVisitor, Statement};
use crate::utils::errors::KatResult;
use std::fmt;

/// Top-level statements between `start {` and `close }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    pub fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V) -> KatResult<()> {
        visitor.visit_program(self)
    }

    /// Number of statement nodes, nested ones included.
    pub fn node_count(&self) -> usize {
        fn count(stmts: &[Statement]) -> usize {
            stmts
                .iter()
                .map(|stmt| {
                    let else_count = match stmt {
                        Statement::IfStatement(s) => s.else_branch.as_deref().map_or(0, count),
                        _ => 0,
                    };
                    1 + count(stmt.children()) + else_count
                })
                .sum()
        }
        count(&self.statements)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Program")?;
        for stmt in &self.statements {
            stmt.write_tree(f, 1)?;
        }
        Ok(())
    }
}
