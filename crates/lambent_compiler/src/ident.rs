//! Host-safe identifier spelling.
//!
//! Source identifiers may use punctuation the host grammar rejects. Each such
//! character maps to a fixed spelling; anything without a mapping is an
//! error rather than a silent mangling.

/// Words the host reserves or treats specially. A sanitized identifier equal
/// to one of these gets a `$` prefix.
pub const RESERVED_WORDS: &[&str] = &[
    "arguments",
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "eval",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "implements",
    "import",
    "in",
    "Infinity",
    "instanceof",
    "interface",
    "let",
    "NaN",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "undefined",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

/// Spelling for a character the host does not accept in identifiers.
#[must_use]
pub const fn substitute(c: char) -> Option<&'static str> {
    Some(match c {
        '-' => "_",
        '=' => "$eq",
        '>' => "$gt",
        '<' => "$lt",
        '!' => "$excl",
        '?' => "$quest",
        '%' => "$perc",
        ':' => "$colon",
        '&' => "$amp",
        '~' => "$tilde",
        '*' => "$star",
        '+' => "$plus",
        '/' => "$slash",
        '\\' => "$bslash",
        _ => return None,
    })
}

/// True if `word` is reserved by the host.
#[must_use]
pub fn is_reserved(word: &str) -> bool {
    RESERVED_WORDS.contains(&word)
}

/// Spells a source identifier for the host.
///
/// # Errors
/// Returns the first character that has no host spelling.
pub fn sanitize(name: &str) -> Result<String, char> {
    let mut output = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
            output.push(c);
        } else if let Some(spelling) = substitute(c) {
            output.push_str(spelling);
        } else {
            return Err(c);
        }
    }
    if output.is_empty() || output.starts_with(|c: char| c.is_ascii_digit()) || is_reserved(&output) {
        output.insert(0, '$');
    }
    Ok(output)
}

/// True if `s` is a plain host identifier: ASCII letters, digits, `_` and
/// `$`, not starting with a digit.
#[must_use]
pub fn is_identifier_name(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// True if `s` can be declared as a variable on the host.
#[must_use]
pub fn is_host_safe(s: &str) -> bool {
    is_identifier_name(s) && !is_reserved(s)
}
