use katc::errors::{KatError, KatResult};
use katc::frontend::lexer::scan;
use katc::frontend::token::{Token, TokenKind};

fn kinds_and_lexemes(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
    tokens.iter().map(|t| (t.kind, t.lexeme.as_str())).collect()
}

#[test]
fn test_keywords_and_identifiers() -> KatResult<()> {
    let source = "start intbox count while whilex _tmp close";
    let tokens = scan(source)?;
    assert_eq!(
        kinds_and_lexemes(&tokens),
        vec![
            (TokenKind::Keyword, "start"),
            (TokenKind::Keyword, "intbox"),
            (TokenKind::Identifier, "count"),
            (TokenKind::Keyword, "while"),
            (TokenKind::Identifier, "whilex"),
            (TokenKind::Identifier, "_tmp"),
            (TokenKind::Keyword, "close"),
        ]
    );
    Ok(())
}

#[test]
fn test_number_literals() -> KatResult<()> {
    let tokens = scan("42 3.14 0")?;
    assert_eq!(
        kinds_and_lexemes(&tokens),
        vec![
            (TokenKind::IntegerLiteral, "42"),
            (TokenKind::FloatLiteral, "3.14"),
            (TokenKind::IntegerLiteral, "0"),
        ]
    );
    // A dot without fraction digits is not part of the number
    let result = scan("7.");
    if let Err(KatError::UnknownToken { token, line, column }) = result {
        assert_eq!((token, line, column), ('.', 1, 2));
    } else {
        panic!("Expected UnknownToken for a bare '.'");
    }
    Ok(())
}

#[test]
fn test_string_literal_keeps_quotes_and_escapes() -> KatResult<()> {
    let tokens = scan(r#"out << "say \"hi\"";"#)?;
    assert_eq!(tokens[2].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[2].lexeme, r#""say \"hi\"""#);
    assert_eq!(tokens[3].lexeme, ";");
    Ok(())
}

#[test]
fn test_char_literals() -> KatResult<()> {
    let tokens = scan(r"charbox c = 'a'; charbox n = '\n';")?;
    let chars: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::CharLiteral)
        .map(|t| t.lexeme.as_str())
        .collect();
    assert_eq!(chars, vec!["'a'", r"'\n'"]);
    Ok(())
}

#[test]
fn test_comments_are_skipped() -> KatResult<()> {
    let source = "// leading comment\nintbox x; /* block\ncomment */ out << x;";
    let tokens = scan(source)?;
    assert_eq!(
        kinds_and_lexemes(&tokens),
        vec![
            (TokenKind::Keyword, "intbox"),
            (TokenKind::Identifier, "x"),
            (TokenKind::Symbol, ";"),
            (TokenKind::Keyword, "out"),
            (TokenKind::Operator, "<<"),
            (TokenKind::Identifier, "x"),
            (TokenKind::Symbol, ";"),
        ]
    );
    assert_eq!(tokens[3].line, 3);
    Ok(())
}

#[test]
fn test_longest_operator_wins() -> KatResult<()> {
    let tokens = scan("a<<b<=c>>d>=e==f!=g<h>i=j")?;
    let operators: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Operator)
        .map(|t| t.lexeme.as_str())
        .collect();
    assert_eq!(operators, vec!["<<", "<=", ">>", ">=", "==", "!=", "<", ">", "="]);

    let split = scan("< <")?;
    assert_eq!(kinds_and_lexemes(&split), vec![(TokenKind::Operator, "<"), (TokenKind::Operator, "<")]);
    Ok(())
}

#[test]
fn test_line_and_column_tracking() -> KatResult<()> {
    let source = "start {\n  intbox x = 5;\n}";
    let tokens = scan(source)?;
    let positions: Vec<(&str, usize, usize)> =
        tokens.iter().map(|t| (t.lexeme.as_str(), t.line, t.column)).collect();
    assert_eq!(
        positions,
        vec![
            ("start", 1, 1),
            ("{", 1, 7),
            ("intbox", 2, 3),
            ("x", 2, 10),
            ("=", 2, 12),
            ("5", 2, 14),
            (";", 2, 15),
            ("}", 3, 1),
        ]
    );
    Ok(())
}

#[test]
fn test_lexemes_cover_source_without_whitespace() -> KatResult<()> {
    let source = "start {\n  floatbox f = 2.5;\n  if (f >= 1) { out << \"big\" << endl; }\nclose }";
    let tokens = scan(source)?;
    let joined: String = tokens.iter().map(|t| t.lexeme.as_str()).collect();
    let stripped: String = source.chars().filter(|c| !c.is_whitespace()).collect();
    assert_eq!(joined, stripped);
    Ok(())
}

#[test]
fn test_unterminated_string() {
    let result = scan("start {\n    out << \"abc");
    if let Err(KatError::UnterminatedString { line, column }) = result {
        assert_eq!((line, column), (2, 12));
    } else {
        panic!("Expected UnterminatedString error");
    }
}

#[test]
fn test_unterminated_char() {
    let result = scan("charbox c = 'ab';");
    assert!(matches!(result, Err(KatError::UnterminatedChar { line: 1, column: 13 })));
}

#[test]
fn test_quote_char_must_be_escaped() -> KatResult<()> {
    let result = scan("charbox q = ''';");
    if let Err(KatError::UnterminatedChar { line, column }) = result {
        assert_eq!((line, column), (1, 13));
    } else {
        panic!("Expected UnterminatedChar error");
    }

    let tokens = scan(r"charbox q = '\'';")?;
    assert_eq!(tokens[3].kind, TokenKind::CharLiteral);
    assert_eq!(tokens[3].lexeme, r"'\''");
    Ok(())
}

#[test]
fn test_unterminated_comment() {
    let result = scan("intbox x;\n/* never closed\n");
    if let Err(KatError::UnterminatedComment { line, column }) = result {
        assert_eq!((line, column), (2, 1));
    } else {
        panic!("Expected UnterminatedComment error");
    }
}

#[test]
fn test_unknown_character() {
    let result = scan("intbox x = 5;\nout << x @ y;");
    if let Err(err @ KatError::UnknownToken { .. }) = result {
        assert_eq!(err.to_string(), "Unknown token '@' at line 2, column 10");
    } else {
        panic!("Expected UnknownToken error");
    }
}

#[test]
fn test_empty_source() -> KatResult<()> {
    assert!(scan("")?.is_empty());
    assert!(scan("  // only a comment\n /* and a block */ ")?.is_empty());
    Ok(())
}
