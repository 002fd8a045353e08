use super::symbol_helpers::{is_constant, render_initializer, render_operand, resolve_identifier};
use super::Emitter;
use crate::ast::{Expression, IfStmt, InputStmt, OutputStmt, VarDecl, WhileStmt};
use crate::codegen::code_emitter::CodeEmitter;
use crate::frontend::token::TokenKind;
use crate::semantic::Symbol;
use crate::utils::config::assembly::{
    jump_for, storage_name, END_IF_LABEL, FALSE_BRANCH_LABEL, LOOP_END_LABEL, LOOP_START_LABEL,
    NEWLINE_LITERAL, STRING_REGISTER, TRUE_BRANCH_LABEL, VALUE_REGISTER,
};
use crate::utils::errors::{KatError, KatResult};
use tracing::{debug, trace, warn};

pub fn handle_var_decl(gen: &mut Emitter, decl: &VarDecl) -> KatResult<()> {
    let line = decl.storage.line;
    let kind = decl.storage_kind().ok_or_else(|| KatError::UnsupportedStorageKind {
        kind: decl.storage.lexeme.clone(),
        line,
    })?;
    let value = match &decl.initializer {
        None => kind.zero_value().to_string(),
        Some(init) => match init.tokens.as_slice() {
            [token] if token.kind == TokenKind::Identifier => resolve_identifier(gen, token)?,
            [token] if is_constant(token) => render_initializer(kind, token),
            _ => {
                warn!(
                    name = decl.identifier(),
                    initializer = %init,
                    line,
                    "initializer is not a constant or identifier, zero value stored"
                );
                gen.text_emitter()
                    .emit_comment(&format!("initializer not lowered: {} = {}", decl.identifier(), init))?;
                kind.zero_value().to_string()
            }
        },
    };
    let storage = storage_name(decl.identifier());
    gen.symbol_table.insert(decl.identifier(), Symbol::new(storage.clone(), kind, line));
    trace!(name = decl.identifier(), %storage, "symbol registered");
    gen.data_emitter().emit_data(&storage, kind.directive(), &value)
}

pub fn handle_output(gen: &mut Emitter, stmt: &OutputStmt) -> KatResult<()> {
    gen.text_emitter().emit_comment("Output logic")?;
    for token in &stmt.expr.tokens {
        match token.kind {
            TokenKind::StringLiteral => {
                let mut emitter = gen.text_emitter();
                emitter.emit_comment("Print string literal")?;
                emitter.emit_mov(STRING_REGISTER, &token.lexeme)?;
            }
            TokenKind::Identifier => {
                let storage = resolve_identifier(gen, token)?;
                let mut emitter = gen.text_emitter();
                emitter.emit_comment("Print identifier")?;
                emitter.emit_mov(VALUE_REGISTER, &storage)?;
            }
            TokenKind::Keyword if token.lexeme == "endl" => {
                let mut emitter = gen.text_emitter();
                emitter.emit_comment("Print newline")?;
                emitter.emit_mov(STRING_REGISTER, NEWLINE_LITERAL)?;
            }
            _ => trace!(token = %token.lexeme, line = token.line, "output token has no placeholder"),
        }
    }
    Ok(())
}

pub fn handle_input(gen: &mut Emitter, stmt: &InputStmt) -> KatResult<()> {
    let storage = resolve_identifier(gen, &stmt.target)?;
    warn!(
        target_name = %stmt.target.lexeme,
        %storage,
        line = stmt.keyword.line,
        "input statement produces no code"
    );
    Ok(())
}

pub fn handle_if(gen: &mut Emitter, stmt: &IfStmt) -> KatResult<()> {
    let true_label = gen.create_label(TRUE_BRANCH_LABEL);
    let false_label = gen.create_label(FALSE_BRANCH_LABEL);
    let end_label = gen.create_label(END_IF_LABEL);
    debug!(%true_label, %false_label, %end_label, line = stmt.keyword.line, "lowering if statement");

    gen.text_emitter().emit_comment("If statement")?;
    emit_condition(gen, &stmt.condition, &true_label)?;
    {
        let mut emitter = gen.text_emitter();
        emitter.emit_jump(&false_label)?;
        emitter.emit_label(&true_label)?;
    }
    gen.emit_block(&stmt.then_branch)?;
    {
        let mut emitter = gen.text_emitter();
        emitter.emit_jump(&end_label)?;
        emitter.emit_label(&false_label)?;
    }
    if let Some(else_branch) = &stmt.else_branch {
        gen.emit_block(else_branch)?;
    }
    gen.text_emitter().emit_label(&end_label)
}

// Loop shape: a true condition jumps back to the start label, otherwise control
// falls into the body, which always jumps back to the start.
pub fn handle_while(gen: &mut Emitter, stmt: &WhileStmt) -> KatResult<()> {
    let start_label = gen.create_label(LOOP_START_LABEL);
    let end_label = gen.create_label(LOOP_END_LABEL);
    debug!(%start_label, %end_label, line = stmt.keyword.line, "lowering while loop");

    {
        let mut emitter = gen.text_emitter();
        emitter.emit_comment("While loop")?;
        emitter.emit_label(&start_label)?;
    }
    emit_condition(gen, &stmt.condition, &start_label)?;
    gen.emit_block(&stmt.body)?;
    let mut emitter = gen.text_emitter();
    emitter.emit_jump(&start_label)?;
    emitter.emit_label(&end_label)
}

pub fn handle_expression(gen: &mut Emitter, expr: &Expression) -> KatResult<()> {
    gen.text_emitter().emit_comment(&format!("Expression logic: {}", expr))
}

/// Compare plus conditional jump to `target` for `operand cmp-op operand`.
fn emit_condition(gen: &mut Emitter, condition: &Expression, target: &str) -> KatResult<()> {
    if let Some((left, op, right)) = condition.as_binary() {
        if let Some(jump) = jump_for(&op.lexeme) {
            let left = render_operand(gen, left)?;
            let right = render_operand(gen, right)?;
            let mut emitter = gen.text_emitter();
            emitter.emit_cmp(&left, &right)?;
            return emitter.emit_conditional_jump(jump, target);
        }
    }
    warn!(
        condition = %condition,
        line = condition.line(),
        "condition is not a single binary comparison, no compare emitted"
    );
    gen.text_emitter()
        .emit_comment(&format!("condition not lowered: {}", condition))
}
