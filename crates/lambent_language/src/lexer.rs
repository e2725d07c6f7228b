//! Lexer for Lambent source text.
//!
//! The lexer converts source text into a stream of tokens. It never fails:
//! malformed input becomes a [`TokenKind::Error`] token that the parser
//! reports with its position.

use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Lexer for Lambent source code.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the next token from the source.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let start_line = self.line;
        let start_column = self.column;

        let Some(c) = self.peek_char() else {
            return Token::new(
                TokenKind::Eof,
                Span::new(start, start, start_line, start_column),
            );
        };

        let kind = match c {
            '(' => {
                self.advance();
                TokenKind::LParen
            }
            ')' => {
                self.advance();
                TokenKind::RParen
            }
            '\'' => {
                self.advance();
                TokenKind::Quote
            }
            '`' => {
                self.advance();
                TokenKind::Quasiquote
            }
            ',' => {
                self.advance();
                if self.peek_char() == Some('@') {
                    self.advance();
                    TokenKind::UnquoteSplicing
                } else {
                    TokenKind::Unquote
                }
            }
            ';' => self.scan_comment(),
            '"' => self.scan_string(),
            _ => self.scan_atom(),
        };

        Token::new(
            kind,
            Span::new(start, self.position, start_line, start_column),
        )
    }

    /// Tokenizes all source and returns a vector of tokens.
    ///
    /// Comments are included in the output.
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Scans a comment starting with `;`.
    fn scan_comment(&mut self) -> TokenKind {
        let mut text = String::new();
        while let Some(c) = self.peek_char() {
            if c == '\n' {
                break;
            }
            text.push(c);
            self.advance();
        }
        TokenKind::Comment(text)
    }

    /// Scans a string literal, decoding escapes.
    fn scan_string(&mut self) -> TokenKind {
        self.advance(); // opening '"'
        let mut text = String::new();
        loop {
            match self.peek_char() {
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    self.advance();
                    match self.scan_escape() {
                        Ok(c) => text.push(c),
                        Err(message) => return TokenKind::Error(message),
                    }
                }
                Some(c) => {
                    self.advance();
                    text.push(c);
                }
                None => return TokenKind::Error("unterminated string literal".into()),
            }
        }
        TokenKind::String(text)
    }

    /// Decodes the escape after a backslash.
    fn scan_escape(&mut self) -> Result<char, String> {
        let Some(c) = self.peek_char() else {
            return Err("unexpected end of input in string escape".into());
        };
        self.advance();
        match c {
            'n' => Ok('\n'),
            'r' => Ok('\r'),
            't' => Ok('\t'),
            '0' => Ok('\0'),
            '\\' => Ok('\\'),
            '"' => Ok('"'),
            'u' => self.scan_unicode_escape(),
            c => Err(format!("invalid escape sequence: \\{c}")),
        }
    }

    /// Decodes `\uXXXX` or `\u{X...}`.
    fn scan_unicode_escape(&mut self) -> Result<char, String> {
        let mut digits = String::new();
        if self.peek_char() == Some('{') {
            self.advance();
            loop {
                match self.peek_char() {
                    Some('}') => {
                        self.advance();
                        break;
                    }
                    Some(c) if c.is_ascii_hexdigit() && digits.len() < 6 => {
                        self.advance();
                        digits.push(c);
                    }
                    _ => return Err("malformed \\u{...} escape".into()),
                }
            }
        } else {
            for _ in 0..4 {
                match self.peek_char() {
                    Some(c) if c.is_ascii_hexdigit() => {
                        self.advance();
                        digits.push(c);
                    }
                    _ => return Err("\\u escape needs four hex digits".into()),
                }
            }
        }
        u32::from_str_radix(&digits, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| format!("invalid code point: \\u{{{digits}}}"))
    }

    /// Scans a maximal run of atom characters and classifies it.
    fn scan_atom(&mut self) -> TokenKind {
        let start = self.position;
        while self.peek_char().is_some_and(is_atom_char) {
            self.advance();
        }
        let text = &self.source[start..self.position];

        if text.is_empty() {
            // keeps the lexer from stalling
            self.advance();
            return TokenKind::Error("unexpected character".into());
        }
        if let Some(rest) = text.strip_prefix('#') {
            return match rest {
                "t" => TokenKind::True,
                "f" => TokenKind::False,
                _ => TokenKind::Error(format!("unknown literal: {text}")),
            };
        }
        if looks_numeric(text) {
            return parse_number(text)
                .map_or_else(|| TokenKind::Error(format!("invalid number: {text}")), TokenKind::Number);
        }
        TokenKind::Symbol(text.to_string())
    }
}

/// Returns true if `c` can appear in a symbol, number or `#` literal.
fn is_atom_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '(' | ')' | '\'' | '`' | ',' | '"' | ';')
}

/// A run is numeric if it starts with a digit, or with a sign and/or `.`
/// followed by a digit.
fn looks_numeric(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let unsigned = unsigned.strip_prefix('.').unwrap_or(unsigned);
    unsigned.starts_with(|c: char| c.is_ascii_digit())
}

fn parse_number(text: &str) -> Option<f64> {
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let magnitude = if let Some(hex) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        #[allow(clippy::cast_precision_loss)]
        let value = u64::from_str_radix(hex, 16).ok()? as f64;
        value
    } else {
        if !unsigned.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-')) {
            return None;
        }
        unsigned.parse::<f64>().ok()?
    };
    Some(if negative { -magnitude } else { magnitude })
}
