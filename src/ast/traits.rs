use crate::ast::{Expression, IfStmt, InputStmt, OutputStmt, Program, VarDecl, WhileStmt};
use crate::utils::errors::KatResult;

/// Walks the statement tree. `Statement::accept` dispatches to one method per kind.
pub trait AstVisitor {
    fn visit_program(&mut self, program: &Program) -> KatResult<()> {
        for stmt in &program.statements {
            stmt.accept(self)?;
        }
        Ok(())
    }
    fn visit_var_decl(&mut self, decl: &VarDecl) -> KatResult<()>;
    fn visit_output(&mut self, stmt: &OutputStmt) -> KatResult<()>;
    fn visit_input(&mut self, stmt: &InputStmt) -> KatResult<()>;
    fn visit_if(&mut self, stmt: &IfStmt) -> KatResult<()>;
    fn visit_while(&mut self, stmt: &WhileStmt) -> KatResult<()>;
    fn visit_expression(&mut self, expr: &Expression) -> KatResult<()>;
}
