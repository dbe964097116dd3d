//! Splitting and joining of `$PATH`-style colon-separated lists.
//!
//! A colon preceded by a backslash (`\:`) is a literal colon inside one
//! segment, not a separator. Any other backslash pair is copied through
//! unchanged, so escaping stays aligned to pairs.

/// Split a colon-separated list into its segments.
///
/// `\:` collapses to a literal `:`; `\` followed by any other character is
/// kept as both characters; a lone trailing `\` is kept as a literal
/// backslash. Empty input yields no segments, and a trailing separator does
/// not produce a trailing empty segment.
pub fn split(input: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut chars = input.chars().peekable();

    while chars.peek().is_some() {
        let mut segment = String::new();
        while let Some(&c) = chars.peek() {
            if c == ':' {
                break;
            }
            chars.next();
            if c == '\\' {
                match chars.next() {
                    Some(':') => segment.push(':'),
                    Some(other) => {
                        segment.push('\\');
                        segment.push(other);
                    }
                    None => segment.push('\\'),
                }
            } else {
                segment.push(c);
            }
        }
        segments.push(segment);
        if chars.peek() == Some(&':') {
            chars.next();
        }
    }

    segments
}

/// Join segments into a colon-separated list, escaping raw colons as `\:`.
pub fn join<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    segments
        .into_iter()
        .map(|segment| segment.as_ref().replace(':', "\\:"))
        .collect::<Vec<_>>()
        .join(":")
}
