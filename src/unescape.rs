//! Escape-sequence unescaping for format strings typed on the command line.
//!
//! Shells deliver `--date-format=%d\/%b\/%Y` with the backslashes intact;
//! the log parser wants the control characters themselves.

/// Replace literal backslash escapes with their character equivalents.
///
/// Mapping: `\n` => LF, `\t` => TAB, `\r` => CR, `\\` => `\`, `\"` => `"`.
/// Any other escaped character is kept literally with the backslash
/// dropped. A trailing lone backslash is dropped.
pub fn unescape_str(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_escapes() {
        assert_eq!(unescape_str("a\\nb"), "a\nb");
        assert_eq!(unescape_str("a\\tb"), "a\tb");
        assert_eq!(unescape_str("a\\rb"), "a\rb");
    }

    #[test]
    fn backslash_and_quote() {
        assert_eq!(unescape_str("a\\\\b"), "a\\b");
        assert_eq!(unescape_str("say \\\"hi\\\""), "say \"hi\"");
    }

    #[test]
    fn unknown_escape_keeps_character() {
        assert_eq!(unescape_str("%d\\/%b\\/%Y"), "%d/%b/%Y");
    }

    #[test]
    fn trailing_backslash_is_dropped() {
        assert_eq!(unescape_str("abc\\"), "abc");
    }

    #[test]
    fn plain_string_is_unchanged() {
        assert_eq!(unescape_str("%d/%b/%Y:%T"), "%d/%b/%Y:%T");
    }
}
