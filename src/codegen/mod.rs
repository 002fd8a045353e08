pub mod code_emitter;
pub mod statement_handlers;
pub mod symbol_helpers;

use crate::{
    ast::{AstVisitor, Expression, IfStmt, InputStmt, OutputStmt, Program, Statement, VarDecl, WhileStmt},
    codegen::code_emitter::ListingEmitter,
    semantic::SymbolTable,
    utils::config::assembly::{DATA_SECTION, FINALIZE_COMMENT, INSTRUCTION_INDENT, TEXT_SECTION},
    utils::errors::KatResult,
};
use std::io::Write;
use tracing::debug;

/// Walks a `Program` and builds the data and text sections of the listing.
///
/// Each emitter owns its label counter and symbol table, so separate
/// emission passes never share names.
pub struct Emitter {
    pub(crate) data: Vec<String>,
    pub(crate) text: Vec<String>,
    pub(crate) label_counter: usize,
    pub(crate) symbol_table: SymbolTable,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            text: Vec::new(),
            label_counter: 0,
            symbol_table: SymbolTable::new(),
        }
    }

    /// Next unique label, `base` suffixed with the counter value.
    pub fn create_label(&mut self, base: &str) -> String {
        let label = format!("{}{}", base, self.label_counter);
        self.label_counter += 1;
        label
    }

    pub fn labels_issued(&self) -> usize {
        self.label_counter
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbol_table
    }

    pub(crate) fn data_emitter(&mut self) -> ListingEmitter<'_> {
        ListingEmitter::new(&mut self.data)
    }

    pub(crate) fn text_emitter(&mut self) -> ListingEmitter<'_> {
        ListingEmitter::new(&mut self.text)
    }

    pub fn emit_program(&mut self, program: &Program) -> KatResult<()> {
        program.accept(self)?;
        debug!(
            data_lines = self.data.len(),
            text_lines = self.text.len(),
            labels = self.label_counter,
            "emission finished"
        );
        Ok(())
    }

    pub fn emit_statement(&mut self, stmt: &Statement) -> KatResult<()> {
        stmt.accept(self)
    }

    pub(crate) fn emit_block(&mut self, stmts: &[Statement]) -> KatResult<()> {
        for stmt in stmts {
            self.emit_statement(stmt)?;
        }
        Ok(())
    }

    /// The complete listing: data section, text section, finalize comment.
    pub fn into_listing(self) -> Vec<String> {
        let mut listing = Vec::with_capacity(self.data.len() + self.text.len() + 3);
        listing.push(DATA_SECTION.to_string());
        listing.extend(self.data);
        listing.push(TEXT_SECTION.to_string());
        listing.extend(self.text);
        listing.push(format!("{}; {}", INSTRUCTION_INDENT, FINALIZE_COMMENT));
        listing
    }

    /// Writes the listing to `sink` and flushes it. Consumes the emitter.
    pub fn finalize<W: Write>(self, sink: &mut W) -> KatResult<()> {
        for line in self.into_listing() {
            writeln!(sink, "{}", line)?;
        }
        sink.flush()?;
        Ok(())
    }
}

impl AstVisitor for Emitter {
    fn visit_var_decl(&mut self, decl: &VarDecl) -> KatResult<()> {
        statement_handlers::handle_var_decl(self, decl)
    }

    fn visit_output(&mut self, stmt: &OutputStmt) -> KatResult<()> {
        statement_handlers::handle_output(self, stmt)
    }

    fn visit_input(&mut self, stmt: &InputStmt) -> KatResult<()> {
        statement_handlers::handle_input(self, stmt)
    }

    fn visit_if(&mut self, stmt: &IfStmt) -> KatResult<()> {
        statement_handlers::handle_if(self, stmt)
    }

    fn visit_while(&mut self, stmt: &WhileStmt) -> KatResult<()> {
        statement_handlers::handle_while(self, stmt)
    }

    fn visit_expression(&mut self, expr: &Expression) -> KatResult<()> {
        statement_handlers::handle_expression(self, expr)
    }
}

/// Emits a whole program with a fresh emitter and returns the listing lines.
pub fn generate(program: &Program) -> KatResult<Vec<String>> {
    let mut emitter = Emitter::new();
    emitter.emit_program(program)?;
    Ok(emitter.into_listing())
}
