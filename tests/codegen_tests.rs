use katc::ast::{Statement, StatementKind};
use katc::codegen::{generate, Emitter};
use katc::errors::{KatError, KatResult};
use katc::frontend::{parse, scan};

fn listing(source: &str) -> KatResult<Vec<String>> {
    let tokens = scan(source)?;
    let program = parse(&tokens)?;
    generate(&program)
}

fn text_section(lines: &[String]) -> Vec<&str> {
    let start = lines.iter().position(|l| l == "section .text").expect("text section");
    lines[start + 1..lines.len() - 1].iter().map(String::as_str).collect()
}

#[test]
fn test_declaration_and_output_listing() -> KatResult<()> {
    let lines = listing("start { intbox x = 5; out << x; close }")?;
    assert_eq!(
        lines,
        vec![
            "section .data",
            "var_x dd 5",
            "section .text",
            "    ; Output logic",
            "    ; Print identifier",
            "    mov rax, var_x",
            "    ; Finalize assembly",
        ]
    );
    Ok(())
}

#[test]
fn test_data_directives_per_storage_kind() -> KatResult<()> {
    let source = "start {\n\
                  intbox i;\n\
                  floatbox f;\n\
                  floatbox g = 2.5;\n\
                  stringbox s = \"hi\";\n\
                  stringbox e;\n\
                  charbox c = 'a';\n\
                  boolbox b = true;\n\
                  boolbox n;\n\
                  close }";
    let lines = listing(source)?;
    let data: Vec<&str> = lines[1..lines.len() - 2].iter().map(String::as_str).collect();
    assert_eq!(
        data,
        vec![
            "var_i dd 0",
            "var_f dq 0.0",
            "var_g dq 2.5",
            "var_s db \"hi\", 0",
            "var_e db \"\", 0",
            "var_c db 'a'",
            "var_b db 1",
            "var_n db 0",
        ]
    );
    Ok(())
}

#[test]
fn test_output_placeholders() -> KatResult<()> {
    let lines = listing("start { intbox x; out << \"x is \" << x << endl; close }")?;
    assert_eq!(
        text_section(&lines),
        vec![
            "    ; Output logic",
            "    ; Print string literal",
            "    mov rdi, \"x is \"",
            "    ; Print identifier",
            "    mov rax, var_x",
            "    ; Print newline",
            "    mov rdi, '\\n'",
        ]
    );
    Ok(())
}

#[test]
fn test_if_else_listing() -> KatResult<()> {
    let source = "start { intbox x = 1; if (x == 1) { out << \"yes\"; } else { out << \"no\"; } close }";
    let lines = listing(source)?;
    assert_eq!(
        text_section(&lines),
        vec![
            "    ; If statement",
            "    cmp var_x, 1",
            "    je true_branch0",
            "    jmp false_branch1",
            "true_branch0:",
            "    ; Output logic",
            "    ; Print string literal",
            "    mov rdi, \"yes\"",
            "    jmp end_if2",
            "false_branch1:",
            "    ; Output logic",
            "    ; Print string literal",
            "    mov rdi, \"no\"",
            "end_if2:",
        ]
    );
    Ok(())
}

#[test]
fn test_if_without_else_still_uses_three_labels() -> KatResult<()> {
    let lines = listing("start { boolbox b; if (b != true) { } if (b >= 0) { } close }")?;
    let text = text_section(&lines);
    assert_eq!(
        text,
        vec![
            "    ; If statement",
            "    cmp var_b, 1",
            "    jne true_branch0",
            "    jmp false_branch1",
            "true_branch0:",
            "    jmp end_if2",
            "false_branch1:",
            "end_if2:",
            "    ; If statement",
            "    cmp var_b, 0",
            "    jge true_branch3",
            "    jmp false_branch4",
            "true_branch3:",
            "    jmp end_if5",
            "false_branch4:",
            "end_if5:",
        ]
    );
    Ok(())
}

#[test]
fn test_while_loop_listing() -> KatResult<()> {
    let lines = listing("start { intbox i = 0; while (i < 10) { i + 1; } close }")?;
    assert_eq!(
        text_section(&lines),
        vec![
            "    ; While loop",
            "start_loop0:",
            "    cmp var_i, 10",
            "    jl start_loop0",
            "    ; Expression logic: i + 1",
            "    jmp start_loop0",
            "end_loop1:",
        ]
    );
    Ok(())
}

#[test]
fn test_labels_are_unique_across_nesting() -> KatResult<()> {
    let source = "start {\n\
                  intbox i = 0;\n\
                  while (i <= 3) {\n\
                    if (i > 1) { out << i; } else { if (i == 0) { out << endl; } }\n\
                  }\n\
                  close }";
    let tokens = scan(source)?;
    let program = parse(&tokens)?;
    let mut emitter = Emitter::new();
    emitter.emit_program(&program)?;
    assert_eq!(emitter.labels_issued(), 8);

    let lines = emitter.into_listing();
    let mut suffixes: Vec<usize> = lines
        .iter()
        .filter_map(|l| l.strip_suffix(':'))
        .map(|label| {
            let digits = label.trim_start_matches(|c: char| !c.is_ascii_digit());
            digits.parse().expect("numeric label suffix")
        })
        .collect();
    suffixes.sort_unstable();
    assert_eq!(suffixes, (0..8).collect::<Vec<usize>>());
    Ok(())
}

#[test]
fn test_condition_without_comparison_is_commented() -> KatResult<()> {
    let lines = listing("start { boolbox ok = true; if (ok) { } close }")?;
    let text = text_section(&lines);
    assert_eq!(text[1], "    ; condition not lowered: ok");
    assert!(!text.iter().any(|l| l.trim_start().starts_with("cmp")));
    assert_eq!(text[2], "    jmp false_branch1");
    Ok(())
}

#[test]
fn test_bare_while_condition_is_commented() -> KatResult<()> {
    let lines = listing("start { boolbox b = true; while (b) { out << b; } close }")?;
    assert_eq!(
        text_section(&lines),
        vec![
            "    ; While loop",
            "start_loop0:",
            "    ; condition not lowered: b",
            "    ; Output logic",
            "    ; Print identifier",
            "    mov rax, var_b",
            "    jmp start_loop0",
            "end_loop1:",
        ]
    );
    Ok(())
}

#[test]
fn test_arithmetic_condition_is_not_lowered() -> KatResult<()> {
    let lines = listing("start { intbox x; while (x + 1) { } close }")?;
    let text = text_section(&lines);
    assert_eq!(text[2], "    ; condition not lowered: x + 1");
    Ok(())
}

#[test]
fn test_input_emits_no_code() -> KatResult<()> {
    let lines = listing("start { intbox n; in >> n; close }")?;
    assert!(text_section(&lines).is_empty());
    Ok(())
}

#[test]
fn test_undefined_symbol_in_output() {
    let result = listing("start {\n  out << y;\nclose }");
    if let Err(err @ KatError::UndefinedSymbol { .. }) = result {
        assert_eq!(err.to_string(), "Undefined symbol 'y' at line 2");
    } else {
        panic!("Expected UndefinedSymbol error");
    }
}

#[test]
fn test_undefined_symbol_in_condition_and_input() {
    let condition = listing("start { intbox x; if (x < limit) { } close }");
    assert!(matches!(condition, Err(KatError::UndefinedSymbol { ref name, .. }) if name == "limit"));

    let input = listing("start { in >> z; close }");
    assert!(matches!(input, Err(KatError::UndefinedSymbol { ref name, .. }) if name == "z"));
}

#[test]
fn test_identifier_initializer_uses_storage_name() -> KatResult<()> {
    let lines = listing("start { intbox x = 5; intbox y = x; boolbox b = true; boolbox c = b; close }")?;
    let data: Vec<&str> = lines[1..5].iter().map(String::as_str).collect();
    assert_eq!(data, vec!["var_x dd 5", "var_y dd var_x", "var_b db 1", "var_c db var_b"]);
    assert!(text_section(&lines).is_empty());
    Ok(())
}

#[test]
fn test_undefined_identifier_initializer() {
    let result = listing("start {\n  intbox y = x;\nclose }");
    if let Err(KatError::UndefinedSymbol { name, line }) = result {
        assert_eq!(name, "x");
        assert_eq!(line, 2);
    } else {
        panic!("Expected UndefinedSymbol error");
    }
}

#[test]
fn test_expression_initializer_is_commented() -> KatResult<()> {
    let lines = listing("start { intbox x = 2 + 3; floatbox f = x * 2; close }")?;
    assert_eq!(
        lines,
        vec![
            "section .data",
            "var_x dd 0",
            "var_f dq 0.0",
            "section .text",
            "    ; initializer not lowered: x = 2 + 3",
            "    ; initializer not lowered: f = x * 2",
            "    ; Finalize assembly",
        ]
    );
    Ok(())
}

#[test]
fn test_if_round_trip() -> KatResult<()> {
    let tokens = scan("start { intbox x = 5; if (x == 5) { out << x; } close }")?;
    let program = parse(&tokens)?;
    let kinds: Vec<StatementKind> = program.statements.iter().map(Statement::kind).collect();
    assert_eq!(kinds, vec![StatementKind::VariableDeclaration, StatementKind::IfStatement]);
    if let Statement::IfStatement(stmt) = &program.statements[1] {
        assert_eq!(stmt.then_branch.len(), 1);
        assert_eq!(stmt.then_branch[0].kind(), StatementKind::Output);
        assert!(stmt.else_branch.is_none());
    } else {
        panic!("Expected if statement");
    }

    let mut emitter = Emitter::new();
    emitter.emit_program(&program)?;
    assert_eq!(emitter.labels_issued(), 3);
    let lines = emitter.into_listing();
    for label in ["true_branch0:", "false_branch1:", "end_if2:"] {
        assert!(lines.iter().any(|l| l == label), "missing label {}", label);
    }
    assert_eq!(
        text_section(&lines),
        vec![
            "    ; If statement",
            "    cmp var_x, 5",
            "    je true_branch0",
            "    jmp false_branch1",
            "true_branch0:",
            "    ; Output logic",
            "    ; Print identifier",
            "    mov rax, var_x",
            "    jmp end_if2",
            "false_branch1:",
            "end_if2:",
        ]
    );
    Ok(())
}

#[test]
fn test_emitters_are_independent() -> KatResult<()> {
    let source = "start { intbox x; if (x == 0) { } close }";
    let first = listing(source)?;
    let second = listing(source)?;
    assert_eq!(first, second);
    assert!(second.iter().any(|l| l == "true_branch0:"));
    Ok(())
}

#[test]
fn test_finalize_writes_to_sink() -> KatResult<()> {
    let tokens = scan("start { charbox c = 'z'; close }")?;
    let program = parse(&tokens)?;
    let mut emitter = Emitter::new();
    emitter.emit_program(&program)?;

    let mut sink: Vec<u8> = Vec::new();
    emitter.finalize(&mut sink)?;
    assert_eq!(
        String::from_utf8_lossy(&sink),
        "section .data\nvar_c db 'z'\nsection .text\n    ; Finalize assembly\n"
    );
    Ok(())
}
