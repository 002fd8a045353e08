// Lexer tables
pub mod lexer {
    use lazy_static::lazy_static;
    use regex::Regex;
    use std::collections::HashSet;

    pub const SYMBOLS: &[char] = &['{', '}', '(', ')', ';', ','];

    lazy_static! {
        pub static ref KEYWORDS: HashSet<&'static str> = [
            "start", "close", "intbox", "floatbox", "stringbox", "charbox", "boolbox",
            "out", "in", "if", "else", "true", "false", "endl", "while",
        ]
        .into_iter()
        .collect();

        // Longest operators first so "<<" never lexes as two '<'.
        pub static ref OPERATORS: Vec<&'static str> = {
            let mut ops = vec![
                "+", "-", "*", "/", "%", "==", "!=", "<", ">", "<=", ">=", "<<", ">>", "=",
            ];
            ops.sort_by(|a, b| b.len().cmp(&a.len()));
            ops
        };

        pub static ref IDENTIFIER_RE: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*").unwrap();
        pub static ref NUMBER_RE: Regex = Regex::new(r"^[0-9]+(\.[0-9]+)?").unwrap();
    }

    pub fn is_keyword(word: &str) -> bool {
        KEYWORDS.contains(word)
    }
}

// Parser constants
pub mod parser {
    pub const STORAGE_KEYWORDS: &[&str] = &["intbox", "floatbox", "stringbox", "charbox", "boolbox"];

    /// Keywords that may stand as an expression operand.
    pub const OPERAND_KEYWORDS: &[&str] = &["true", "false", "endl"];

    pub fn is_storage_keyword(word: &str) -> bool {
        STORAGE_KEYWORDS.contains(&word)
    }
}

// Listing generation constants
pub mod assembly {
    use lazy_static::lazy_static;
    use std::collections::HashMap;

    pub const INSTRUCTION_INDENT: &str = "    ";
    pub const LABEL_SUFFIX: &str = ":";

    pub const DATA_SECTION: &str = "section .data";
    pub const TEXT_SECTION: &str = "section .text";
    pub const FINALIZE_COMMENT: &str = "Finalize assembly";

    pub const STORAGE_PREFIX: &str = "var_";

    // Label bases, suffixed with the emitter's label counter
    pub const TRUE_BRANCH_LABEL: &str = "true_branch";
    pub const FALSE_BRANCH_LABEL: &str = "false_branch";
    pub const END_IF_LABEL: &str = "end_if";
    pub const LOOP_START_LABEL: &str = "start_loop";
    pub const LOOP_END_LABEL: &str = "end_loop";

    // Registers used by the output placeholders
    pub const STRING_REGISTER: &str = "rdi";
    pub const VALUE_REGISTER: &str = "rax";
    pub const NEWLINE_LITERAL: &str = "'\\n'";

    lazy_static! {
        pub static ref JUMP_TABLE: HashMap<&'static str, &'static str> = [
            ("==", "je"),
            ("!=", "jne"),
            ("<", "jl"),
            ("<=", "jle"),
            (">", "jg"),
            (">=", "jge"),
        ]
        .into_iter()
        .collect();
    }

    /// Conditional jump mnemonic for a comparison operator.
    pub fn jump_for(operator: &str) -> Option<&'static str> {
        JUMP_TABLE.get(operator).copied()
    }

    pub fn storage_name(identifier: &str) -> String {
        format!("{}{}", STORAGE_PREFIX, identifier)
    }
}
