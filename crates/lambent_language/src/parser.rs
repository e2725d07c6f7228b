//! Reader for Lambent source text.
//!
//! The reader converts a stream of tokens into [`Form`]s. Prefix quote
//! characters are desugared here, so `'x` reads as `(quote x)` and `,@xs`
//! as `(unquote-splicing xs)`.

use lambent_foundation::{Error, Form, MAX_NESTING, Result, SemanticLimit, SpecialForm};

use crate::lexer::Lexer;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Reader for Lambent source code.
pub struct Parser<'src> {
    /// The lexer providing tokens.
    lexer: Lexer<'src>,
    /// Current token (lookahead).
    current: Token,
    /// Source text (for error messages).
    source: &'src str,
    /// Lists and quote prefixes currently open.
    depth: usize,
}

impl<'src> Parser<'src> {
    /// Creates a new reader for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            source,
            depth: 0,
        }
    }

    /// Reads a single form from the source.
    ///
    /// # Errors
    /// Returns an error if the source cannot be read.
    pub fn parse(&mut self) -> Result<Form> {
        self.skip_trivia();
        self.parse_form()
    }

    /// Reads all forms from the source.
    ///
    /// # Errors
    /// Returns an error if the source cannot be read.
    pub fn parse_all(&mut self) -> Result<Vec<Form>> {
        let mut forms = Vec::new();
        self.skip_trivia();

        while self.current.kind != TokenKind::Eof {
            forms.push(self.parse_form()?);
            self.skip_trivia();
        }

        Ok(forms)
    }

    /// Returns true once every token has been consumed.
    #[must_use]
    pub fn at_end(&mut self) -> bool {
        self.skip_trivia();
        self.current.kind == TokenKind::Eof
    }

    fn parse_form(&mut self) -> Result<Form> {
        self.skip_trivia();

        let form = match &self.current.kind {
            TokenKind::True => Form::boolean(true),
            TokenKind::False => Form::boolean(false),
            TokenKind::Number(n) => Form::number(*n),
            TokenKind::String(s) => Form::string(s.as_str()),
            TokenKind::Symbol(name) => Form::symbol(name.as_str()),
            TokenKind::LParen => return self.parse_list(),
            TokenKind::Quote => return self.parse_prefixed(SpecialForm::Quote),
            TokenKind::Quasiquote => return self.parse_prefixed(SpecialForm::Quasiquote),
            TokenKind::Unquote => return self.parse_prefixed(SpecialForm::Unquote),
            TokenKind::UnquoteSplicing => {
                return self.parse_prefixed(SpecialForm::UnquoteSplicing);
            }
            TokenKind::Eof => return Err(self.error("unexpected end of input")),
            TokenKind::Error(msg) => return Err(self.error(msg)),
            TokenKind::RParen => {
                return Err(self.error(&format!("unexpected {}", self.current.kind.name())));
            }
            TokenKind::Comment(_) => {
                self.advance();
                return self.parse_form();
            }
        };
        self.advance();
        Ok(form)
    }

    /// Reads a list: `(...)`.
    fn parse_list(&mut self) -> Result<Form> {
        self.descend()?;
        let start_span = self.current.span;
        self.advance(); // '('

        let mut elements = Vec::new();
        self.skip_trivia();

        while self.current.kind != TokenKind::RParen {
            if self.current.kind == TokenKind::Eof {
                return Err(self.error_at(start_span, "unterminated list"));
            }
            elements.push(self.parse_form()?);
            self.skip_trivia();
        }
        self.advance(); // ')'

        self.depth -= 1;
        Ok(Form::list(elements))
    }

    /// Reads the form after a quote character and wraps it.
    fn parse_prefixed(&mut self, special: SpecialForm) -> Result<Form> {
        self.descend()?;
        let start_span = self.current.span;
        self.advance();

        self.skip_trivia();
        if self.current.kind == TokenKind::Eof {
            return Err(self.error_at(start_span, &format!("expected form after {special}")));
        }

        let inner = self.parse_form()?;
        self.depth -= 1;
        Ok(Form::wrap(special, inner))
    }

    /// A quote prefix reads as a list, so it nests like one.
    fn descend(&mut self) -> Result<()> {
        if self.depth >= MAX_NESTING {
            return Err(Error::limit_exceeded(SemanticLimit::MaxNesting {
                limit: MAX_NESTING,
            }));
        }
        self.depth += 1;
        Ok(())
    }

    fn skip_trivia(&mut self) {
        while self.current.kind.is_trivia() {
            self.advance();
        }
    }

    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    fn error(&self, message: &str) -> Error {
        self.error_at(self.current.span, message)
    }

    fn error_at(&self, span: Span, message: &str) -> Error {
        Error::parse(message, span.line, span.column, span.line_text(self.source))
    }
}

/// Reads source text into forms.
///
/// # Errors
/// Returns a parse error with line, column and the offending source line.
pub fn read(source: &str) -> Result<Vec<Form>> {
    Parser::new(source).parse_all()
}

/// Reads exactly one form from source text.
///
/// # Errors
/// Returns a parse error if the text is empty, malformed, or holds more
/// than one form.
pub fn read_one(source: &str) -> Result<Form> {
    let mut parser = Parser::new(source);
    let form = parser.parse()?;
    if parser.at_end() {
        Ok(form)
    } else {
        Err(parser.error("expected a single form"))
    }
}
