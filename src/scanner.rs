//! px2 source tokenizer
//!
//! Splits px2 source into the tokens the syntax engine classifies.
//! Digit runs, identifiers and the four arithmetic operators are
//! tokens; any other non-whitespace character is a token of its own.

use unicode_width::UnicodeWidthStr;

use crate::syntax::Token;

/// A token together with its position for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'a> {
    pub token: Token<'a>,
    /// 1-based line number
    pub line: usize,
    /// 1-based display column
    pub column: usize,
}

/// Tokenizer over a whole source string
pub struct Scanner<'a> {
    source: &'a str,
    /// Byte offset of the next unread character
    pos: usize,
    line: usize,
    /// Byte offset where the current line starts
    line_start: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            line_start: 0,
        }
    }

    /// Scan everything that is left
    pub fn scan_all(self) -> Vec<Lexeme<'a>> {
        self.collect()
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            match ch {
                '\n' => {
                    self.pos += 1;
                    self.line += 1;
                    self.line_start = self.pos;
                }
                ' ' | '\r' | '\t' => self.pos += 1,
                _ => break,
            }
        }
    }

    /// Advance while `pred` holds for the next character
    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
    }

    fn lexeme(&self, start: usize) -> Lexeme<'a> {
        let column = self.source[self.line_start..start].width() + 1;
        Lexeme {
            token: Token::new(&self.source[start..self.pos], start),
            line: self.line,
            column,
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Lexeme<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        let start = self.pos;
        let first = self.peek()?;
        self.pos += first.len_utf8();

        if first.is_ascii_digit() {
            self.eat_while(|c| c.is_ascii_digit());
        } else if first.is_alphabetic() {
            self.eat_while(|c| c.is_ascii_alphanumeric() || c == '_');
        }

        Some(self.lexeme(start))
    }
}
