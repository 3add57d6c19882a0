//! Decoder for line-oriented `key=value` text.
//!
//! Follows the classic properties grammar: `#`/`!` comments, `=`, `:` or
//! whitespace as separator, backslash line continuation and `\uXXXX`
//! escapes. Every value is emitted as text.

use crate::error::ParseError;
use crate::registry::RawValue;
use crate::sources::decoder::Decoder;

#[derive(Debug, Clone, Copy, Default)]
pub struct PropertiesDecoder;

impl Decoder for PropertiesDecoder {
    fn decode(&self, content: &[u8]) -> Result<Vec<(String, RawValue)>, ParseError> {
        let text = std::str::from_utf8(content)?;
        let entries = parse(text)?
            .into_iter()
            .map(|(key, value)| (key, RawValue::Text(value)))
            .collect();
        Ok(entries)
    }
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{c}')
}

/// Parse `text` into key/value pairs in file order.
pub fn parse(text: &str) -> Result<Vec<(String, String)>, ParseError> {
    let mut entries = Vec::new();
    let mut lines = physical_lines(text).enumerate();

    while let Some((index, line)) = lines.next() {
        let line_no = index + 1;
        let trimmed = line.trim_start_matches(is_blank);
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }

        let mut logical = trimmed.to_string();
        while continues(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(next.trim_start_matches(is_blank)),
                None => break,
            }
        }

        let (key, value) = split_entry(&logical);
        entries.push((unescape(key, line_no)?, unescape(value, line_no)?));
    }
    Ok(entries)
}

/// Lines terminated by `\n`, `\r\n` or a bare `\r`.
fn physical_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let (line, tail) = match rest.find(&['\r', '\n'][..]) {
            Some(end) => {
                let tail = &rest[end..];
                let skip = if tail.starts_with("\r\n") { 2 } else { 1 };
                (&rest[..end], &tail[skip..])
            }
            None => (rest, ""),
        };
        rest = tail;
        Some(line)
    })
}

/// An odd number of trailing backslashes continues the line.
fn continues(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                break;
            }
            c if is_blank(c) => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let mut value = line[key_end..].trim_start_matches(is_blank);
    if let Some(rest) = value.strip_prefix(&['=', ':'][..]) {
        value = rest.trim_start_matches(is_blank);
    }
    (key, value)
}

fn unescape(s: &str, line: usize) -> Result<String, ParseError> {
    let mut out = String::with_capacity(s.len());
    let mut units: Vec<u16> = Vec::new();
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            flush_units(&mut units, &mut out, line)?;
            out.push(c);
            continue;
        }
        let Some(escaped) = chars.next() else {
            break;
        };
        if escaped == 'u' {
            let hex: String = chars.by_ref().take(4).collect();
            let unit = (hex.chars().count() == 4)
                .then(|| u16::from_str_radix(&hex, 16).ok())
                .flatten()
                .ok_or_else(|| ParseError::Syntax {
                    line,
                    message: format!("malformed \\uXXXX escape [\\u{}]", hex),
                })?;
            units.push(unit);
            continue;
        }
        flush_units(&mut units, &mut out, line)?;
        out.push(match escaped {
            't' => '\t',
            'n' => '\n',
            'r' => '\r',
            'f' => '\u{c}',
            other => other,
        });
    }
    flush_units(&mut units, &mut out, line)?;
    Ok(out)
}

/// Decode pending `\u` escapes, which may form surrogate pairs.
fn flush_units(units: &mut Vec<u16>, out: &mut String, line: usize) -> Result<(), ParseError> {
    for decoded in char::decode_utf16(units.drain(..)) {
        let c = decoded.map_err(|e| ParseError::Syntax {
            line,
            message: format!("unpaired surrogate {:#06x} in \\u escape", e.unpaired_surrogate()),
        })?;
        out.push(c);
    }
    Ok(())
}
