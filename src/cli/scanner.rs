//! POSIX-style option scanner.
//!
//! Decodes raw argument tokens into catalog matches one at a time. The
//! scanner never interprets option semantics; it only resolves tokens
//! against descriptors and pairs value-taking options with their values.
//!
//! Both startup phases drive the same scanner over the same argument list;
//! `rewind()` resets the cursor between them.

use crate::cli::catalog::{ArgMode, Catalog, OptId};

/// Why a token failed to decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadToken {
    UnknownLong(String),
    UnknownShort(char),
    MissingValue(&'static str),
    UnexpectedValue(&'static str),
}

impl BadToken {
    /// Human-readable diagnostic, with a "did you mean" hint for long
    /// options that are close to a known name.
    pub fn describe(&self, catalog: &Catalog) -> String {
        match self {
            BadToken::UnknownLong(name) => match catalog.suggest_long(name) {
                Some(hint) => {
                    format!("unrecognized option '--{name}'. Did you mean '--{hint}'?")
                }
                None => format!("unrecognized option '--{name}'"),
            },
            BadToken::UnknownShort(code) => format!("unrecognized option '-{code}'"),
            BadToken::MissingValue(long) => format!("option '--{long}' requires a value"),
            BadToken::UnexpectedValue(long) => {
                format!("option '--{long}' does not take a value")
            }
        }
    }
}

/// One decoded occurrence, or the end of the option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// A matched descriptor with its value, if the descriptor takes one.
    Opt(OptId, Option<String>),
    /// A token the grammar rejects. The scanner stays usable but the
    /// phases treat this as fatal.
    Bad(BadToken),
    /// Cursor is past the last option-like token. Remaining tokens are
    /// positional arguments, available through `positionals()`.
    End,
}

pub struct OptScanner<'a> {
    catalog: &'a Catalog,
    args: &'a [String],
    cursor: usize,
    /// Short codes not yet consumed from the current `-abc` cluster.
    cluster: Vec<char>,
}

impl<'a> OptScanner<'a> {
    pub fn new(catalog: &'a Catalog, args: &'a [String]) -> Self {
        Self {
            catalog,
            args,
            cursor: 0,
            cluster: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Reset the cursor to the start of the argument list.
    pub fn rewind(&mut self) {
        self.cursor = 0;
        self.cluster.clear();
    }

    /// Tokens left over after option scanning stopped.
    pub fn positionals(&self) -> &'a [String] {
        &self.args[self.cursor.min(self.args.len())..]
    }

    /// Decode the next option occurrence.
    pub fn next(&mut self) -> ScanEvent {
        if !self.cluster.is_empty() {
            return self.next_in_cluster();
        }

        let Some(token) = self.args.get(self.cursor) else {
            return ScanEvent::End;
        };

        if token == "--" {
            // Explicit end of options; everything after is positional.
            self.cursor += 1;
            return ScanEvent::End;
        }

        if let Some(name) = token.strip_prefix("--") {
            self.cursor += 1;
            return self.decode_long(name);
        }

        if token.len() > 1 && token.starts_with('-') {
            // Load the cluster front-to-back; codes are popped from the end.
            self.cluster = token[1..].chars().rev().collect();
            self.cursor += 1;
            return self.next_in_cluster();
        }

        // A bare `-` or any non-option token stops the scan.
        ScanEvent::End
    }

    fn decode_long(&mut self, raw: &str) -> ScanEvent {
        let (name, inline) = match raw.split_once('=') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (raw, None),
        };

        let Some(spec) = self.catalog.find_long(name) else {
            return ScanEvent::Bad(BadToken::UnknownLong(name.to_string()));
        };

        match spec.arg {
            ArgMode::None => {
                if inline.is_some() {
                    return ScanEvent::Bad(BadToken::UnexpectedValue(spec.long));
                }
                ScanEvent::Opt(spec.id, None)
            }
            ArgMode::Required => {
                let value = match inline {
                    Some(value) => value,
                    None => match self.take_value_token() {
                        Some(value) => value,
                        None => return ScanEvent::Bad(BadToken::MissingValue(spec.long)),
                    },
                };
                ScanEvent::Opt(spec.id, Some(value))
            }
        }
    }

    fn next_in_cluster(&mut self) -> ScanEvent {
        let Some(code) = self.cluster.pop() else {
            return ScanEvent::End;
        };

        let Some(spec) = self.catalog.find_short(code) else {
            self.cluster.clear();
            return ScanEvent::Bad(BadToken::UnknownShort(code));
        };

        match spec.arg {
            ArgMode::None => ScanEvent::Opt(spec.id, None),
            ArgMode::Required => {
                // The rest of the cluster is the attached value (`-fvalue`);
                // otherwise the next token is consumed (`-f value`).
                let value = if self.cluster.is_empty() {
                    match self.take_value_token() {
                        Some(value) => value,
                        None => return ScanEvent::Bad(BadToken::MissingValue(spec.long)),
                    }
                } else {
                    let attached: String = self.cluster.iter().rev().collect();
                    self.cluster.clear();
                    attached
                };
                ScanEvent::Opt(spec.id, Some(value))
            }
        }
    }

    fn take_value_token(&mut self) -> Option<String> {
        let value = self.args.get(self.cursor)?;
        self.cursor += 1;
        Some(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::catalog::{Catalog, Features};

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    fn catalog() -> Catalog {
        Catalog::assemble(&Features::default())
    }

    fn drain(scanner: &mut OptScanner) -> Vec<ScanEvent> {
        let mut events = Vec::new();
        loop {
            let ev = scanner.next();
            let end = ev == ScanEvent::End;
            events.push(ev);
            if end {
                break;
            }
        }
        events
    }

    #[test]
    fn long_with_inline_value() {
        let catalog = catalog();
        let argv = args(&["--date-format=%d/%b/%Y"]);
        let mut scanner = OptScanner::new(&catalog, &argv);
        assert_eq!(
            scanner.next(),
            ScanEvent::Opt(OptId::DateFormat, Some("%d/%b/%Y".into()))
        );
        assert_eq!(scanner.next(), ScanEvent::End);
        assert!(scanner.positionals().is_empty());
    }

    #[test]
    fn long_with_separate_value() {
        let catalog = catalog();
        let argv = args(&["--log-file", "access.log"]);
        let mut scanner = OptScanner::new(&catalog, &argv);
        assert_eq!(
            scanner.next(),
            ScanEvent::Opt(OptId::LogFile, Some("access.log".into()))
        );
        assert_eq!(scanner.next(), ScanEvent::End);
    }

    #[test]
    fn short_with_separate_value() {
        let catalog = catalog();
        let argv = args(&["-f", "access.log"]);
        let mut scanner = OptScanner::new(&catalog, &argv);
        assert_eq!(
            scanner.next(),
            ScanEvent::Opt(OptId::LogFile, Some("access.log".into()))
        );
    }

    #[test]
    fn short_with_attached_value() {
        let catalog = catalog();
        let argv = args(&["-faccess.log"]);
        let mut scanner = OptScanner::new(&catalog, &argv);
        assert_eq!(
            scanner.next(),
            ScanEvent::Opt(OptId::LogFile, Some("access.log".into()))
        );
    }

    #[test]
    fn clustered_shorts() {
        let catalog = catalog();
        let argv = args(&["-acq"]);
        let mut scanner = OptScanner::new(&catalog, &argv);
        assert_eq!(scanner.next(), ScanEvent::Opt(OptId::AgentList, None));
        assert_eq!(scanner.next(), ScanEvent::Opt(OptId::ConfigDialog, None));
        assert_eq!(scanner.next(), ScanEvent::Opt(OptId::NoQueryString, None));
        assert_eq!(scanner.next(), ScanEvent::End);
    }

    #[test]
    fn cluster_value_short_consumes_remainder() {
        let catalog = catalog();
        let argv = args(&["-ae10.0.0.1"]);
        let mut scanner = OptScanner::new(&catalog, &argv);
        assert_eq!(scanner.next(), ScanEvent::Opt(OptId::AgentList, None));
        assert_eq!(
            scanner.next(),
            ScanEvent::Opt(OptId::ExcludeIp, Some("10.0.0.1".into()))
        );
        assert_eq!(scanner.next(), ScanEvent::End);
    }

    #[test]
    fn missing_value_is_bad() {
        let catalog = catalog();
        let argv = args(&["--log-file"]);
        let mut scanner = OptScanner::new(&catalog, &argv);
        assert_eq!(
            scanner.next(),
            ScanEvent::Bad(BadToken::MissingValue("log-file"))
        );
    }

    #[test]
    fn unknown_long_is_bad() {
        let catalog = catalog();
        let argv = args(&["--not-a-real-option"]);
        let mut scanner = OptScanner::new(&catalog, &argv);
        assert_eq!(
            scanner.next(),
            ScanEvent::Bad(BadToken::UnknownLong("not-a-real-option".into()))
        );
    }

    #[test]
    fn unknown_short_is_bad() {
        let catalog = catalog();
        let argv = args(&["-z"]);
        let mut scanner = OptScanner::new(&catalog, &argv);
        assert_eq!(scanner.next(), ScanEvent::Bad(BadToken::UnknownShort('z')));
    }

    #[test]
    fn flag_with_inline_value_is_bad() {
        let catalog = catalog();
        let argv = args(&["--no-color=1"]);
        let mut scanner = OptScanner::new(&catalog, &argv);
        assert_eq!(
            scanner.next(),
            ScanEvent::Bad(BadToken::UnexpectedValue("no-color"))
        );
    }

    #[test]
    fn non_option_token_stops_scan() {
        let catalog = catalog();
        let argv = args(&["-a", "extra_token", "-c"]);
        let mut scanner = OptScanner::new(&catalog, &argv);
        assert_eq!(scanner.next(), ScanEvent::Opt(OptId::AgentList, None));
        assert_eq!(scanner.next(), ScanEvent::End);
        assert_eq!(scanner.positionals(), &argv[1..]);
    }

    #[test]
    fn double_dash_ends_options() {
        let catalog = catalog();
        let argv = args(&["-a", "--", "-c"]);
        let mut scanner = OptScanner::new(&catalog, &argv);
        assert_eq!(scanner.next(), ScanEvent::Opt(OptId::AgentList, None));
        assert_eq!(scanner.next(), ScanEvent::End);
        assert_eq!(scanner.positionals(), &argv[2..]);
    }

    #[test]
    fn rewind_replays_from_start() {
        let catalog = catalog();
        let argv = args(&["-a", "-c"]);
        let mut scanner = OptScanner::new(&catalog, &argv);
        let first = drain(&mut scanner);
        scanner.rewind();
        let second = drain(&mut scanner);
        assert_eq!(first, second);
    }

    #[test]
    fn describe_suggests_similar_long() {
        let catalog = catalog();
        let bad = BadToken::UnknownLong("no-colr".into());
        let msg = bad.describe(&catalog);
        assert!(msg.contains("--no-color"));
    }
}
