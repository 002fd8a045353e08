use crate::utils::config::assembly::{INSTRUCTION_INDENT, LABEL_SUFFIX};
use crate::utils::errors::KatResult;

pub trait CodeEmitter {
    // Generic line emission
    fn emit(&mut self, instruction: &str) -> KatResult<()>;
    fn emit_label(&mut self, label: &str) -> KatResult<()>;
    fn emit_data(&mut self, name: &str, directive: &str, value: &str) -> KatResult<()>;

    fn emit_comment(&mut self, text: &str) -> KatResult<()> {
        self.emit(&format!("; {}", text))
    }

    fn emit_mov(&mut self, register: &str, src: &str) -> KatResult<()> {
        self.emit(&format!("mov {}, {}", register, src))
    }

    fn emit_cmp(&mut self, left: &str, right: &str) -> KatResult<()> {
        self.emit(&format!("cmp {}, {}", left, right))
    }

    fn emit_jump(&mut self, label: &str) -> KatResult<()> {
        self.emit(&format!("jmp {}", label))
    }

    fn emit_conditional_jump(&mut self, mnemonic: &str, label: &str) -> KatResult<()> {
        self.emit(&format!("{} {}", mnemonic, label))
    }
}

/// Appends listing lines to an in-memory section.
pub struct ListingEmitter<'a> {
    output: &'a mut Vec<String>,
}

impl<'a> ListingEmitter<'a> {
    pub fn new(output: &'a mut Vec<String>) -> Self {
        ListingEmitter { output }
    }
}

impl<'a> CodeEmitter for ListingEmitter<'a> {
    fn emit(&mut self, instruction: &str) -> KatResult<()> {
        self.output.push(format!("{}{}", INSTRUCTION_INDENT, instruction));
        Ok(())
    }

    fn emit_label(&mut self, label: &str) -> KatResult<()> {
        self.output.push(format!("{}{}", label, LABEL_SUFFIX));
        Ok(())
    }

    fn emit_data(&mut self, name: &str, directive: &str, value: &str) -> KatResult<()> {
        self.output.push(format!("{} {} {}", name, directive, value));
        Ok(())
    }
}
