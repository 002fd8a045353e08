use crate::frontend::token::{Token, TokenKind};
use crate::utils::config::lexer::{is_keyword, IDENTIFIER_RE, NUMBER_RE, OPERATORS, SYMBOLS};
use crate::utils::errors::{KatError, KatResult};
use tracing::debug;

pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn scan(mut self) -> KatResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.bump();
            } else if self.rest().starts_with("//") {
                self.skip_line_comment();
            } else if self.rest().starts_with("/*") {
                self.skip_block_comment()?;
            } else {
                tokens.push(self.scan_token(ch)?);
            }
        }
        debug!(count = tokens.len(), lines = self.line, "lexical analysis finished");
        Ok(tokens)
    }

    fn rest(&self) -> &'a str {
        let source = self.source;
        &source[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    // Advance one character, keeping line/column in step.
    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    // Consume `len` bytes that are known not to contain a newline.
    fn take(&mut self, len: usize) -> &'a str {
        let source = self.source;
        let text = &source[self.pos..self.pos + len];
        self.pos += len;
        self.column += text.chars().count();
        text
    }

    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.bump();
        }
    }

    fn skip_block_comment(&mut self) -> KatResult<()> {
        let (line, column) = (self.line, self.column);
        self.take(2); // Consume "/*"
        while !self.rest().starts_with("*/") {
            if self.bump().is_none() {
                return Err(KatError::UnterminatedComment { line, column });
            }
        }
        self.take(2); // Consume "*/"
        Ok(())
    }

    fn scan_token(&mut self, ch: char) -> KatResult<Token> {
        let (line, column) = (self.line, self.column);
        if ch.is_ascii_alphabetic() || ch == '_' {
            return Ok(self.scan_word(line, column));
        }
        if ch.is_ascii_digit() {
            return Ok(self.scan_number(line, column));
        }
        match ch {
            '"' => self.scan_string_literal(line, column),
            '\'' => self.scan_char_literal(line, column),
            _ => {
                if let Some(op) = OPERATORS.iter().find(|op| self.rest().starts_with(**op)) {
                    let lexeme = self.take(op.len());
                    return Ok(Token::new(TokenKind::Operator, lexeme, line, column));
                }
                if SYMBOLS.contains(&ch) {
                    let lexeme = self.take(ch.len_utf8());
                    return Ok(Token::new(TokenKind::Symbol, lexeme, line, column));
                }
                Err(KatError::UnknownToken { token: ch, line, column })
            }
        }
    }

    fn scan_word(&mut self, line: usize, column: usize) -> Token {
        let len = IDENTIFIER_RE.find(self.rest()).map_or(0, |m| m.end());
        let word = self.take(len);
        let kind = if is_keyword(word) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        Token::new(kind, word, line, column)
    }

    fn scan_number(&mut self, line: usize, column: usize) -> Token {
        let (len, is_float) = match NUMBER_RE.captures(self.rest()) {
            Some(caps) => (caps[0].len(), caps.get(1).is_some()),
            None => (0, false),
        };
        let number = self.take(len);
        let kind = if is_float {
            TokenKind::FloatLiteral
        } else {
            TokenKind::IntegerLiteral
        };
        Token::new(kind, number, line, column)
    }

    fn scan_string_literal(&mut self, line: usize, column: usize) -> KatResult<Token> {
        let start = self.pos;
        self.bump(); // Consume opening quote
        loop {
            match self.bump() {
                Some('"') => break,
                Some('\\') => {
                    if self.bump().is_none() {
                        return Err(KatError::UnterminatedString { line, column });
                    }
                }
                Some(_) => {}
                None => return Err(KatError::UnterminatedString { line, column }),
            }
        }
        let lexeme = &self.source[start..self.pos];
        Ok(Token::new(TokenKind::StringLiteral, lexeme, line, column))
    }

    fn scan_char_literal(&mut self, line: usize, column: usize) -> KatResult<Token> {
        let start = self.pos;
        self.bump(); // Consume opening quote
        match self.bump() {
            Some('\\') => {
                if matches!(self.bump(), None | Some('\n')) {
                    return Err(KatError::UnterminatedChar { line, column });
                }
            }
            Some('\'') | Some('\n') | None => return Err(KatError::UnterminatedChar { line, column }),
            Some(_) => {}
        }
        if self.peek() != Some('\'') {
            return Err(KatError::UnterminatedChar { line, column });
        }
        self.bump(); // Consume closing quote
        let lexeme = &self.source[start..self.pos];
        Ok(Token::new(TokenKind::CharLiteral, lexeme, line, column))
    }
}

// Convenience function to lex a whole source text
pub fn scan(source: &str) -> KatResult<Vec<Token>> {
    Lexer::new(source).scan()
}
