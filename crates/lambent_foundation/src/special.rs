//! Special-form tags.
//!
//! Every symbol resolves its special-form tag once, when it is constructed,
//! so the engines dispatch with a `match` instead of a string table lookup.

use std::fmt;

/// The forms whose head symbol has fixed, non-call semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecialForm {
    /// `(var id value)`
    Var,
    /// `(fn (params...) body...)` or `(fn rest body...)`
    Fn,
    /// `(set! assignee value)`
    Set,
    /// `(if test then else)`
    If,
    /// `(quote datum)`
    Quote,
    /// `(quasiquote template)`
    Quasiquote,
    /// `(unquote expr)`
    Unquote,
    /// `(unquote-splicing expr)`
    UnquoteSplicing,
    /// `(. target key)`
    Dot,
    /// `(obj (key value)...)`
    Obj,
    /// `(import "name"...)`
    Import,
    /// `(list items...)`
    List,
    /// `(define-syntax name (syntax-rules ...))`
    DefineSyntax,
    /// `(syntax-rules (reserved...) (pattern template)...)`
    SyntaxRules,
}

impl SpecialForm {
    /// All special forms, in declaration order.
    pub const ALL: [Self; 14] = [
        Self::Var,
        Self::Fn,
        Self::Set,
        Self::If,
        Self::Quote,
        Self::Quasiquote,
        Self::Unquote,
        Self::UnquoteSplicing,
        Self::Dot,
        Self::Obj,
        Self::Import,
        Self::List,
        Self::DefineSyntax,
        Self::SyntaxRules,
    ];

    /// Resolves a head symbol name to its special form.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "var" => Self::Var,
            "fn" => Self::Fn,
            "set!" => Self::Set,
            "if" => Self::If,
            "quote" => Self::Quote,
            "quasiquote" => Self::Quasiquote,
            "unquote" => Self::Unquote,
            "unquote-splicing" => Self::UnquoteSplicing,
            "." => Self::Dot,
            "obj" => Self::Obj,
            "import" => Self::Import,
            "list" => Self::List,
            "define-syntax" => Self::DefineSyntax,
            "syntax-rules" => Self::SyntaxRules,
            _ => return None,
        })
    }

    /// The keyword as written in source.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Var => "var",
            Self::Fn => "fn",
            Self::Set => "set!",
            Self::If => "if",
            Self::Quote => "quote",
            Self::Quasiquote => "quasiquote",
            Self::Unquote => "unquote",
            Self::UnquoteSplicing => "unquote-splicing",
            Self::Dot => ".",
            Self::Obj => "obj",
            Self::Import => "import",
            Self::List => "list",
            Self::DefineSyntax => "define-syntax",
            Self::SyntaxRules => "syntax-rules",
        }
    }
}

impl fmt::Display for SpecialForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
