//! Integration tests for the lexer

use lambent_language::{Lexer, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::tokenize_all(source)
        .into_iter()
        .map(|t| t.kind)
        .filter(|k| !k.is_trivia())
        .collect()
}

#[test]
fn quote_prefixes() {
    assert_eq!(
        kinds("'a `b ,c ,@d"),
        vec![
            TokenKind::Quote,
            TokenKind::Symbol("a".into()),
            TokenKind::Quasiquote,
            TokenKind::Symbol("b".into()),
            TokenKind::Unquote,
            TokenKind::Symbol("c".into()),
            TokenKind::UnquoteSplicing,
            TokenKind::Symbol("d".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn punctuated_symbols() {
    assert_eq!(
        kinds("set! <= x-y .length"),
        vec![
            TokenKind::Symbol("set!".into()),
            TokenKind::Symbol("<=".into()),
            TokenKind::Symbol("x-y".into()),
            TokenKind::Symbol(".length".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn number_spellings() {
    assert_eq!(
        kinds("42 -1.5 0x1F 2e3 .5"),
        vec![
            TokenKind::Number(42.0),
            TokenKind::Number(-1.5),
            TokenKind::Number(31.0),
            TokenKind::Number(2000.0),
            TokenKind::Number(0.5),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn comments_are_trivia() {
    assert_eq!(
        kinds("; leading\n(f) ; trailing"),
        vec![TokenKind::LParen, TokenKind::Symbol("f".into()), TokenKind::RParen, TokenKind::Eof]
    );
}

#[test]
fn spans_track_lines() {
    let tokens = Lexer::tokenize_all("a\n  b");
    let b = tokens
        .iter()
        .find(|t| t.kind == TokenKind::Symbol("b".into()))
        .unwrap();
    assert_eq!((b.span.line, b.span.column), (2, 3));
}
