//! Description text of a declaration, taken from its first argument.
//!
//! Only literals are resolved; expressions (`fmt.Sprintf(...)`, constants,
//! concatenations) are never evaluated and yield no text.

use std::str::CharIndices;

use gko_core::{Argument, Literal};
use tracing::debug;

use crate::error::UnquoteError;

/// Text used when a declaration has no literal description.
pub const UNDEFINED_TEXT: &str = "undefined";

/// Resolve the description of a call from its arguments.
///
/// Returns `None` when there are no arguments or the first one is not a
/// literal. Quoted literals are unquoted with Go escaping rules and keep
/// their raw text if unquoting fails; other literals use their raw text.
#[must_use]
pub fn resolve_text(args: &[Argument]) -> Option<String> {
    match args.first()? {
        Argument::Literal(literal) => Some(literal_text(literal)),
        Argument::Expression => None,
    }
}

/// [`resolve_text`] with a fallback for undefined descriptions.
#[must_use]
pub fn resolve_text_or(args: &[Argument], alt: &str) -> String {
    resolve_text(args).unwrap_or_else(|| alt.to_string())
}

fn literal_text(literal: &Literal) -> String {
    if !literal.kind.is_quoted() {
        return literal.raw.clone();
    }
    unquote(&literal.raw).unwrap_or_else(|error| {
        debug!(raw = %literal.raw, %error, "unquote failed, keeping raw literal");
        literal.raw.clone()
    })
}

// ── Go unquoting ──────────────────────────────────────────────────

/// Unquote a Go string, raw string, or rune literal.
///
/// Follows Go's escaping rules: `\a \b \f \n \r \t \v \\`, the active quote
/// character, octal `\ooo`, `\xhh`, `\uhhhh` and `\Uhhhhhhhh`. Raw strings
/// drop carriage returns. Byte escapes that do not form valid UTF-8 are
/// replaced with U+FFFD.
///
/// # Errors
/// Returns `UnquoteError` for unterminated literals, bad escapes, bare
/// quotes or newlines, and rune literals that are not exactly one rune.
pub fn unquote(raw: &str) -> Result<String, UnquoteError> {
    let quote = match raw.chars().next() {
        Some(q @ ('"' | '\'' | '`')) => q,
        _ => return Err(UnquoteError::Unterminated),
    };
    if raw.len() < 2 || !raw.ends_with(quote) {
        return Err(UnquoteError::Unterminated);
    }
    let body = &raw[1..raw.len() - 1];

    if quote == '`' {
        if let Some(at) = body.find('`') {
            return Err(UnquoteError::UnexpectedCharacter(at + 1));
        }
        return Ok(body.replace('\r', ""));
    }
    unquote_interpreted(body, quote)
}

fn unquote_interpreted(body: &str, quote: char) -> Result<String, UnquoteError> {
    let mut out = Vec::with_capacity(body.len());
    let mut chars = body.char_indices();
    let mut runes = 0usize;

    while let Some((i, c)) = chars.next() {
        runes += 1;
        match c {
            '\n' => return Err(UnquoteError::UnexpectedCharacter(i + 1)),
            '\\' => unescape(&mut chars, quote, i + 1, &mut out)?,
            c if c == quote => return Err(UnquoteError::UnexpectedCharacter(i + 1)),
            c => push_char(&mut out, c),
        }
    }

    if quote == '\'' && runes != 1 {
        return Err(UnquoteError::NotSingleRune);
    }
    Ok(String::from_utf8_lossy(&out).into_owned())
}

fn unescape(
    chars: &mut CharIndices<'_>,
    quote: char,
    at: usize,
    out: &mut Vec<u8>,
) -> Result<(), UnquoteError> {
    let Some((_, c)) = chars.next() else {
        return Err(UnquoteError::InvalidEscape(at));
    };
    match c {
        'a' => out.push(0x07),
        'b' => out.push(0x08),
        'f' => out.push(0x0C),
        'n' => out.push(b'\n'),
        'r' => out.push(b'\r'),
        't' => out.push(b'\t'),
        'v' => out.push(0x0B),
        '\\' => out.push(b'\\'),
        '\'' | '"' => {
            if c != quote {
                return Err(UnquoteError::InvalidEscape(at));
            }
            push_char(out, c);
        }
        'x' => {
            let value = read_digits(chars, 2, 16, at)?;
            push_byte_value(out, value, quote, at)?;
        }
        'u' | 'U' => {
            let width = if c == 'u' { 4 } else { 8 };
            let value = read_digits(chars, width, 16, at)?;
            let ch = char::from_u32(value).ok_or(UnquoteError::InvalidEscape(at))?;
            push_char(out, ch);
        }
        '0'..='7' => {
            let rest = read_digits(chars, 2, 8, at)?;
            let value = c.to_digit(8).unwrap_or_default() * 64 + rest;
            push_byte_value(out, value, quote, at)?;
        }
        _ => return Err(UnquoteError::InvalidEscape(at)),
    }
    Ok(())
}

fn read_digits(
    chars: &mut CharIndices<'_>,
    count: usize,
    radix: u32,
    at: usize,
) -> Result<u32, UnquoteError> {
    let mut value = 0u32;
    for _ in 0..count {
        let digit = chars
            .next()
            .and_then(|(_, c)| c.to_digit(radix))
            .ok_or(UnquoteError::InvalidEscape(at))?;
        value = value * radix + digit;
    }
    Ok(value)
}

/// `\x` and octal escapes are raw bytes in strings but code points in runes.
fn push_byte_value(
    out: &mut Vec<u8>,
    value: u32,
    quote: char,
    at: usize,
) -> Result<(), UnquoteError> {
    let byte = u8::try_from(value).map_err(|_| UnquoteError::InvalidEscape(at))?;
    if quote == '\'' {
        push_char(out, char::from(byte));
    } else {
        out.push(byte);
    }
    Ok(())
}

fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0u8; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}
