//! Quoted-string scanning with OBO escapes.

/// Split a value that starts with a double-quoted string.
///
/// Returns the unescaped contents and the remainder after the closing quote,
/// or `None` if `raw` does not start with `"` or the quote is never closed.
pub(crate) fn split_quoted(raw: &str) -> Option<(String, &str)> {
    let body = raw.strip_prefix('"')?;
    let mut out = String::with_capacity(body.len());
    let mut chars = body.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                let (_, escaped) = chars.next()?;
                out.push(unescape(escaped));
            }
            '"' => return Some((out, &body[i + 1..])),
            other => out.push(other),
        }
    }
    None
}

const fn unescape(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        'W' => ' ',
        other => other,
    }
}
