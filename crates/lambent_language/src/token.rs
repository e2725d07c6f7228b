//! Token types for the Lambent reader.
//!
//! Tokens are the output of the lexer and input to the parser.

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the text this token covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }
}

/// Token types for the Lambent reader.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// `(`
    LParen,
    /// `)`
    RParen,

    /// `#t`
    True,
    /// `#f`
    False,
    /// Number literal like `42`, `-0.5`, `1e3` or `0xff`
    Number(f64),
    /// String literal like `"hello"`, escapes already decoded
    String(String),
    /// Symbol like `foo`, `set!`, `.length` or `x-y`
    Symbol(String),

    /// `'` for quote
    Quote,
    /// `` ` `` for quasiquote
    Quasiquote,
    /// `,` for unquote
    Unquote,
    /// `,@` for unquote-splicing
    UnquoteSplicing,

    /// Comment text (including `;`)
    Comment(String),
    /// End of input
    Eof,
    /// Lexer error
    Error(String),
}

impl TokenKind {
    /// Returns true if this token kind should be ignored during parsing.
    #[must_use]
    pub const fn is_trivia(&self) -> bool {
        matches!(self, Self::Comment(_))
    }

    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::True => "#t",
            Self::False => "#f",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Symbol(_) => "symbol",
            Self::Quote => "quote",
            Self::Quasiquote => "quasiquote",
            Self::Unquote => "unquote",
            Self::UnquoteSplicing => "unquote-splicing",
            Self::Comment(_) => "comment",
            Self::Eof => "end of input",
            Self::Error(_) => "error",
        }
    }
}
