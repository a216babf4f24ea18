//! Classification of a single raw line.

/// What a raw line means to the stanza scanner.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    /// `[Term]`
    TermMarker,
    /// Any other bracketed marker such as `[Typedef]` or `[Instance]`.
    OtherMarker,
    /// `tag: value`, with the trailing comment already removed and the value trimmed.
    TagValue { tag: &'a str, value: &'a str },
    /// Blank lines, comments, and anything without a `tag: value` shape.
    Other,
}

pub(crate) fn classify(raw: &str) -> Line<'_> {
    let line = raw.trim_end();
    if line.starts_with("[Term]") {
        return Line::TermMarker;
    }
    if line.starts_with('[') && line.ends_with(']') {
        return Line::OtherMarker;
    }
    match line.split_once(": ") {
        Some((tag, value)) if !tag.is_empty() => Line::TagValue {
            tag,
            value: strip_trailing_comment(value).trim(),
        },
        _ => Line::Other,
    }
}

/// Cut the value at the first `!` preceded by whitespace, dropping that
/// whitespace run as well.
pub(crate) fn strip_trailing_comment(value: &str) -> &str {
    let mut run_start = None;
    for (i, c) in value.char_indices() {
        if c.is_whitespace() {
            run_start.get_or_insert(i);
        } else if c == '!' {
            if let Some(start) = run_start {
                return &value[..start];
            }
        } else {
            run_start = None;
        }
    }
    value
}
